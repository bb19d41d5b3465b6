//! Cart slice: the line item collection and its mutation rules.

use crate::cart::CartLineItem;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The cart's line items, unique by product id, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartSlice {
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<CartLineItem>,
}

impl CartSlice {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line item.
    ///
    /// If the product is already in the cart only its quantity grows; the
    /// stored title, price and image are kept. Otherwise the item is
    /// appended. Quantities are not validated here.
    pub fn add(&mut self, item: CartLineItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.qty = existing.qty.saturating_add(item.qty);
            return;
        }
        self.items.push(item);
    }

    /// Remove the line for `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < len_before
    }

    /// Replace the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line. Unknown ids are left
    /// alone; no line is created. Returns whether anything changed.
    pub fn set_qty(&mut self, id: ProductId, qty: i64) -> bool {
        if qty <= 0 {
            return self.remove(id);
        }

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.qty = qty;
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * qty` over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Get total item count (sum of quantities), saturating at the `i64` bounds.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.qty))
    }

    /// Get a line by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, price: f64, qty: i64) -> CartLineItem {
        CartLineItem::new(id, format!("Product {id}"), price, qty)
    }

    fn ids(cart: &CartSlice) -> Vec<i64> {
        cart.items.iter().map(|i| i.id.get()).collect()
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = CartSlice::new();
        cart.add(item(1, 10.0, 2));
        cart.add(item(1, 10.0, 3));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().qty, 5);
    }

    #[test]
    fn test_merge_keeps_existing_descriptive_fields() {
        let mut cart = CartSlice::new();
        cart.add(item(1, 10.0, 1).with_image("a.png"));
        cart.add(CartLineItem::new(1, "Renamed", 99.0, 1));

        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.title, "Product 1");
        assert_eq!(line.price, 10.0);
        assert_eq!(line.image.as_deref(), Some("a.png"));
        assert_eq!(line.qty, 2);
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut cart = CartSlice::new();
        cart.add(item(3, 1.0, 1));
        cart.add(item(1, 1.0, 1));
        cart.add(item(3, 1.0, 1));

        assert_eq!(ids(&cart), vec![3, 1]);
    }

    #[test]
    fn test_add_does_not_validate_quantity() {
        let mut cart = CartSlice::new();
        cart.add(item(1, 10.0, 0));
        cart.add(item(2, 10.0, -1));

        assert_eq!(ids(&cart), vec![1, 2]);
        assert_eq!(cart.get(ProductId::new(2)).unwrap().qty, -1);
    }

    #[test]
    fn test_set_qty_replaces() {
        let mut cart = CartSlice::new();
        cart.add(item(1, 10.0, 2));

        assert!(cart.set_qty(ProductId::new(1), 5));
        assert_eq!(cart.get(ProductId::new(1)).unwrap().qty, 5);
    }

    #[test]
    fn test_set_qty_zero_or_negative_removes() {
        let mut cart = CartSlice::new();
        cart.add(item(1, 10.0, 2));
        cart.add(item(2, 10.0, 2));

        assert!(cart.set_qty(ProductId::new(1), 0));
        assert!(cart.set_qty(ProductId::new(2), -4));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_qty_unknown_id_is_noop() {
        let mut cart = CartSlice::new();
        cart.add(item(1, 10.0, 2));

        assert!(!cart.set_qty(ProductId::new(9), 3));
        assert!(!cart.set_qty(ProductId::new(9), 0));
        assert_eq!(ids(&cart), vec![1]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = CartSlice::new();
        assert!(!cart.remove(ProductId::new(99)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = CartSlice::new();
        cart.add(item(1, 10.0, 2));
        cart.add(item(2, 5.0, 3));

        assert_eq!(cart.total(), 35.0);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_item_count_saturates() {
        let mut cart = CartSlice::new();
        cart.add(item(1, 1.0, i64::MAX));
        cart.add(item(1, 1.0, 5));
        cart.add(item(2, 1.0, 1));

        assert_eq!(cart.get(ProductId::new(1)).unwrap().qty, i64::MAX);
        assert_eq!(cart.item_count(), i64::MAX);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartSlice::new();
        cart.add(item(1, 10.0, 2));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: repeated adds of one product collapse into a single
            /// line whose quantity is the sum of the added quantities.
            #[test]
            fn merge_on_add_sums_quantities(qtys in proptest::collection::vec(1i64..1000, 1..20)) {
                let mut cart = CartSlice::new();
                for q in &qtys {
                    cart.add(item(7, 2.5, *q));
                }

                prop_assert_eq!(cart.items.len(), 1);
                prop_assert_eq!(cart.get(ProductId::new(7)).unwrap().qty, qtys.iter().sum::<i64>());
            }

            /// Property: ids stay unique and keep first-insertion order.
            #[test]
            fn ids_unique_in_first_seen_order(ids_in in proptest::collection::vec(0i64..10, 0..40)) {
                let mut cart = CartSlice::new();
                let mut expected: Vec<i64> = Vec::new();
                for id in &ids_in {
                    cart.add(item(*id, 1.0, 1));
                    if !expected.contains(id) {
                        expected.push(*id);
                    }
                }

                prop_assert_eq!(ids(&cart), expected);
            }

            /// Property: set_qty never leaves a non-positive line behind.
            #[test]
            fn set_qty_never_leaves_non_positive(start in 1i64..100, next in -100i64..100) {
                let mut cart = CartSlice::new();
                cart.add(item(1, 1.0, start));
                cart.set_qty(ProductId::new(1), next);

                prop_assert!(cart.items.iter().all(|i| i.qty > 0));
            }

            /// Property: clear always yields an empty cart with zero total.
            #[test]
            fn clear_empties(lines in proptest::collection::vec((0i64..50, 0u32..10_000, 1i64..20), 0..30)) {
                let mut cart = CartSlice::new();
                for (id, cents, qty) in lines {
                    cart.add(item(id, f64::from(cents) / 100.0, qty));
                }
                cart.clear();

                prop_assert!(cart.is_empty());
                prop_assert_eq!(cart.total(), 0.0);
            }
        }
    }
}
