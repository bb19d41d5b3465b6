//! Order summary derived from the cart subtotal.

use serde::{Deserialize, Serialize};

/// Rates used to derive an [`OrderSummary`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SummaryRates {
    /// Fraction of the subtotal taken off (0.2 = 20%).
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
    /// Flat delivery fee charged on non-empty orders.
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: f64,
}

fn default_discount_rate() -> f64 {
    0.2
}

fn default_delivery_fee() -> f64 {
    15.0
}

impl Default for SummaryRates {
    fn default() -> Self {
        Self {
            discount_rate: default_discount_rate(),
            delivery_fee: default_delivery_fee(),
        }
    }
}

/// Checkout figures shown next to the cart. No rounding is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of line totals.
    pub subtotal: f64,
    /// Amount taken off the subtotal.
    pub discount: f64,
    /// Delivery fee (zero when the subtotal is not positive).
    pub delivery_fee: f64,
    /// Final total (subtotal - discount + delivery fee).
    pub order_total: f64,
}

impl OrderSummary {
    /// Derive the summary for a subtotal.
    pub fn for_subtotal(subtotal: f64, rates: SummaryRates) -> Self {
        let discount = subtotal * rates.discount_rate;
        let delivery_fee = if subtotal > 0.0 { rates.delivery_fee } else { 0.0 };
        Self {
            subtotal,
            discount,
            delivery_fee,
            order_total: subtotal - discount + delivery_fee,
        }
    }

    /// Check if any discount applies.
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let summary = OrderSummary::for_subtotal(100.0, SummaryRates::default());
        assert_eq!(summary.subtotal, 100.0);
        assert_eq!(summary.discount, 20.0);
        assert_eq!(summary.delivery_fee, 15.0);
        assert_eq!(summary.order_total, 95.0);
        assert!(summary.has_discount());
    }

    #[test]
    fn test_empty_cart_has_no_delivery_fee() {
        let summary = OrderSummary::for_subtotal(0.0, SummaryRates::default());
        assert_eq!(summary.delivery_fee, 0.0);
        assert_eq!(summary.order_total, 0.0);
        assert!(!summary.has_discount());
    }

    #[test]
    fn test_custom_rates() {
        let rates = SummaryRates {
            discount_rate: 0.0,
            delivery_fee: 5.0,
        };
        let summary = OrderSummary::for_subtotal(100.0, rates);
        assert_eq!(summary.order_total, 105.0);
    }

    #[test]
    fn test_rates_deserialize_with_defaults() {
        let rates: SummaryRates = serde_json::from_str(r#"{"delivery_fee": 0}"#).unwrap();
        assert_eq!(rates.discount_rate, 0.2);
        assert_eq!(rates.delivery_fee, 0.0);
    }
}
