//! Shopping cart store for the storefront.
//!
//! The store owns the cart line items (plus the auth token/user persisted
//! next to them) and is the only thing allowed to change them:
//!
//! - **Cart**: merge-on-add line items, quantity updates, totals
//! - **Auth**: session token and user, persisted under the same name
//! - **Subscriptions**: synchronous callbacks and channel watchers
//! - **Persistence**: optional write-through to a [`StorageAdapter`]
//! - **Devtools**: optional action history for inspection tooling
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_store::prelude::*;
//!
//! let mut store = CartStore::new(StoreConfig::load("store.toml")?)?;
//!
//! store.subscribe(|state| println!("cart total: {}", state.total()));
//!
//! store.add(CartLineItem::new(1, "Checkered Shirt", 180.0, 1));
//! store.add(CartLineItem::new(1, "Checkered Shirt", 180.0, 2)); // qty = 3
//! store.set_qty(ProductId::new(1), 0);                          // removed
//! ```
//!
//! [`StorageAdapter`]: storefront_storage::StorageAdapter

pub mod auth;
pub mod cart;
pub mod config;
pub mod error;
pub mod ids;
pub mod persist;
pub mod state;
pub mod store;
pub mod subscription;

pub use config::{StorageConfig, StoreConfig};
pub use error::StoreError;
pub use ids::{ProductId, UserId};
pub use state::StoreState;
pub use store::{CartStore, CartStoreBuilder};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::auth::{AuthSlice, AuthUser};
    pub use crate::cart::{CartLineItem, CartSlice, OrderSummary, SummaryRates};
    pub use crate::config::{StorageConfig, StoreConfig};
    pub use crate::error::StoreError;
    pub use crate::ids::{ProductId, UserId};
    pub use crate::state::StoreState;
    pub use crate::store::{CartStore, CartStoreBuilder};
    pub use crate::subscription::{Subscription, SubscriptionId};

    pub use storefront_storage::{FileStorage, MemoryStorage, StorageAdapter};
}
