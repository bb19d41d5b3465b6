//! Cart line item type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One row in the cart.
///
/// Identity is the product `id`; `title`, `price` and `image` are a
/// snapshot taken when the product was first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Catalog product identifier.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price at the time the product was added.
    pub price: f64,
    /// Quantity.
    pub qty: i64,
    /// Product image reference.
    #[serde(default)]
    pub image: Option<String>,
}

impl CartLineItem {
    /// Create a line item from catalog values, without an image.
    pub fn new(id: i64, title: impl Into<String>, price: f64, qty: i64) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            price,
            qty,
            image: None,
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// `price * qty`, unrounded.
    pub fn line_total(&self) -> f64 {
        self.price * self.qty as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartLineItem::new(1, "Checkered Shirt", 180.0, 2);
        assert_eq!(item.line_total(), 360.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let item = CartLineItem::new(1, "Tee", 145.0, 1).with_image("/img/tee.png");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "title": "Tee",
                "price": 145.0,
                "qty": 1,
                "image": "/img/tee.png"
            })
        );
    }

    #[test]
    fn test_missing_image_deserializes_as_none() {
        let item: CartLineItem =
            serde_json::from_str(r#"{"id":2,"title":"Jeans","price":240,"qty":1}"#).unwrap();
        assert_eq!(item.image, None);
        assert_eq!(item.price, 240.0);
    }
}
