//! Composed store state and the snapshots handed to consumers.

use crate::auth::{AuthSlice, AuthUser};
use crate::cart::{CartLineItem, CartSlice, OrderSummary, SummaryRates};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Every slice of the store.
///
/// Serializes flat, as `{"items": [...], "token": ..., "user": ...}`.
/// Consumers only ever see it behind an `Arc`, so a snapshot never changes
/// after it has been handed out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreState {
    /// Cart slice.
    #[serde(flatten)]
    pub cart: CartSlice,
    /// Auth slice.
    #[serde(flatten)]
    pub auth: AuthSlice,
}

impl StoreState {
    /// Cart lines in display order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.cart.items
    }

    /// Get a line by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.cart.get(id)
    }

    /// Sum of `price * qty`.
    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Checkout figures for the current total.
    pub fn order_summary(&self, rates: SummaryRates) -> OrderSummary {
        OrderSummary::for_subtotal(self.total(), rates)
    }

    /// Session token.
    pub fn token(&self) -> Option<&str> {
        self.auth.token.as_deref()
    }

    /// Signed-in user.
    pub fn user(&self) -> Option<&AuthUser> {
        self.auth.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_flat() {
        let mut state = StoreState::default();
        state.cart.add(CartLineItem::new(1, "Tee", 10.0, 2));
        state.auth.set_token(Some("tok".to_string()));

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({
                "items": [{"id": 1, "title": "Tee", "price": 10.0, "qty": 2, "image": null}],
                "token": "tok",
                "user": null
            })
        );
    }

    #[test]
    fn test_deserializes_cart_only_blob() {
        let state: StoreState =
            serde_json::from_value(json!({"items": [{"id": 4, "title": "Cap", "price": 5, "qty": 1}]}))
                .unwrap();
        assert_eq!(state.items().len(), 1);
        assert!(state.token().is_none());
        assert!(state.user().is_none());
    }

    #[test]
    fn test_derived_reads() {
        let mut state = StoreState::default();
        state.cart.add(CartLineItem::new(1, "A", 10.0, 2));
        state.cart.add(CartLineItem::new(2, "B", 5.0, 3));

        assert_eq!(state.total(), 35.0);
        assert_eq!(state.item_count(), 5);
        assert_eq!(state.order_summary(SummaryRates::default()).subtotal, 35.0);
    }
}
