//! Shopping cart module.
//!
//! Contains the line item type, the cart slice state machine, and the
//! derived order summary.

mod line_item;
mod slice;
mod summary;

pub use line_item::CartLineItem;
pub use slice::CartSlice;
pub use summary::{OrderSummary, SummaryRates};
