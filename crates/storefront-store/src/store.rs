//! The cart store: slices, persistence, devtools and subscribers wired
//! together behind one mutation API.

use std::sync::Arc;

use storefront_observability::{DevtoolsRecorder, INIT_ACTION};
use storefront_storage::StorageAdapter;

use crate::auth::AuthUser;
use crate::cart::{CartLineItem, OrderSummary, SummaryRates};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::persist::Persister;
use crate::state::StoreState;
use crate::subscription::{Subscribers, Subscription, SubscriptionId};

/// Action name recorded when state is reloaded from storage.
pub const REHYDRATE_ACTION: &str = "@@REHYDRATE";

/// Observable cart and auth state for one client session.
///
/// Every mutation runs to completion before returning: the state is
/// updated, written through to storage (failures are logged, never
/// returned), recorded for devtools, and published to every subscriber.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = CartStore::builder()
///     .name("web-cart")
///     .storage(Arc::new(FileStorage::open(".storefront")?))
///     .build();
///
/// store.add(CartLineItem::new(1, "Gradient Graphic T-shirt", 145.0, 1));
/// store.set_qty(ProductId::new(1), 3);
/// println!("Total: {}", store.total());
/// ```
pub struct CartStore {
    name: String,
    state: Arc<StoreState>,
    persister: Option<Persister>,
    devtools: Option<DevtoolsRecorder>,
    subscribers: Subscribers,
    summary_rates: SummaryRates,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("persisted", &self.persister.is_some())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create a store from config, opening the configured storage backend.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let storage = config.storage.open()?;
        Ok(Self::from_parts(config, storage))
    }

    /// Create a store persisting to `storage`, ignoring `config.storage`.
    pub fn with_storage(config: StoreConfig, storage: Arc<dyn StorageAdapter>) -> Self {
        Self::from_parts(config, Some(storage))
    }

    /// Create an in-memory store with default config.
    pub fn in_memory() -> Self {
        Self::from_parts(StoreConfig::default(), None)
    }

    /// Start building a store.
    pub fn builder() -> CartStoreBuilder {
        CartStoreBuilder::default()
    }

    fn from_parts(config: StoreConfig, storage: Option<Arc<dyn StorageAdapter>>) -> Self {
        let persister = storage.map(|s| Persister::new(config.name.clone(), s));

        let state = match persister.as_ref().map(Persister::load) {
            Some(Ok(Some(state))) => {
                tracing::info!(
                    store = %config.name,
                    items = state.cart.items.len(),
                    "hydrated store from storage"
                );
                state
            }
            Some(Ok(None)) | None => StoreState::default(),
            Some(Err(e)) => {
                tracing::warn!(store = %config.name, error = %e, "ignoring unreadable persisted state");
                StoreState::default()
            }
        };

        let devtools = config.devtools.then(|| {
            let mut recorder = DevtoolsRecorder::new(config.devtools_name.clone())
                .with_max_history(config.devtools_history);
            recorder.record(INIT_ACTION, &state);
            recorder
        });

        Self {
            name: config.name,
            state: Arc::new(state),
            persister,
            devtools,
            subscribers: Subscribers::default(),
            summary_rates: config.summary,
        }
    }

    // ---- cart ----

    /// Add a line item, merging quantities with an existing line for the
    /// same product.
    pub fn add(&mut self, item: CartLineItem) {
        self.update("cart/add", |s| s.cart.add(item));
    }

    /// Alias of [`CartStore::add`].
    pub fn add_item(&mut self, item: CartLineItem) {
        self.add(item);
    }

    /// Remove the line for `id`, if any.
    pub fn remove(&mut self, id: ProductId) {
        self.update("cart/remove", |s| {
            s.cart.remove(id);
        });
    }

    /// Alias of [`CartStore::remove`].
    pub fn remove_item(&mut self, id: ProductId) {
        self.remove(id);
    }

    /// Replace the quantity of an existing line; `qty <= 0` removes it.
    pub fn set_qty(&mut self, id: ProductId, qty: i64) {
        self.update("cart/setQty", |s| {
            s.cart.set_qty(id, qty);
        });
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.update("cart/clearCart", |s| s.cart.clear());
    }

    /// Sum of `price * qty` over the current lines.
    pub fn total(&self) -> f64 {
        self.state.total()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    /// Current lines in display order.
    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    /// Get a line by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.state.get(id)
    }

    /// Checkout figures for the current cart.
    pub fn order_summary(&self) -> OrderSummary {
        self.state.order_summary(self.summary_rates)
    }

    // ---- auth ----

    /// Replace the session token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.update("auth/setToken", |s| s.auth.set_token(token));
    }

    /// Replace the signed-in user.
    pub fn set_user(&mut self, user: Option<AuthUser>) {
        self.update("auth/setUser", |s| s.auth.set_user(user));
    }

    /// Forget token and user.
    pub fn logout(&mut self) {
        self.update("auth/logout", |s| s.auth.logout());
    }

    /// Session token.
    pub fn token(&self) -> Option<&str> {
        self.state.token()
    }

    /// Signed-in user.
    pub fn user(&self) -> Option<&AuthUser> {
        self.state.user()
    }

    // ---- observation ----

    /// The current immutable snapshot.
    pub fn snapshot(&self) -> Arc<StoreState> {
        Arc::clone(&self.state)
    }

    /// Register a callback run synchronously after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Arc<StoreState>) + Send + 'static,
    {
        self.subscribers.subscribe(Box::new(listener))
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Receive every future snapshot over a channel.
    pub fn watch(&mut self) -> Subscription {
        self.subscribers.watch()
    }

    /// Devtools history, when enabled.
    pub fn devtools(&self) -> Option<&DevtoolsRecorder> {
        self.devtools.as_ref()
    }

    /// The storage key / store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // ---- lifecycle ----

    /// Write the current state to storage and report the outcome.
    pub fn flush(&self) -> Result<(), StoreError> {
        match &self.persister {
            Some(persister) => persister.save(&self.state),
            None => Ok(()),
        }
    }

    /// Reload state from storage, replacing the in-memory state.
    ///
    /// Returns `false` (state untouched) when no storage is configured or
    /// nothing usable is stored.
    pub fn rehydrate(&mut self) -> Result<bool, StoreError> {
        let Some(persister) = &self.persister else {
            return Ok(false);
        };
        let Some(loaded) = persister.load()? else {
            return Ok(false);
        };

        self.state = Arc::new(loaded);
        tracing::info!(store = %self.name, items = self.state.cart.items.len(), "rehydrated store");
        self.publish(REHYDRATE_ACTION);
        Ok(true)
    }

    fn update(&mut self, action: &'static str, f: impl FnOnce(&mut StoreState)) {
        // Copy-on-write: snapshots already handed out keep their contents.
        f(Arc::make_mut(&mut self.state));

        tracing::debug!(
            store = %self.name,
            action,
            items = self.state.cart.items.len(),
            "store updated"
        );

        if let Some(persister) = &self.persister {
            if let Err(e) = persister.save(&self.state) {
                tracing::warn!(store = %self.name, action, error = %e, "failed to persist store");
            }
        }

        self.publish(action);
    }

    fn publish(&mut self, action: &str) {
        if let Some(devtools) = &mut self.devtools {
            devtools.record(action, &*self.state);
        }
        self.subscribers.publish(&self.state);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Builder for [`CartStore`].
#[derive(Default)]
pub struct CartStoreBuilder {
    config: StoreConfig,
    storage: Option<Arc<dyn StorageAdapter>>,
}

impl CartStoreBuilder {
    /// Start from an existing config.
    pub fn from_config(config: StoreConfig) -> Self {
        Self {
            config,
            storage: None,
        }
    }

    /// Set the store name (storage key).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Persist to `storage`.
    pub fn storage(mut self, storage: Arc<dyn StorageAdapter>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Set the devtools label.
    pub fn devtools_name(mut self, name: impl Into<String>) -> Self {
        self.config.devtools_name = name.into();
        self
    }

    /// Set how many devtools actions are kept.
    pub fn devtools_history(mut self, max_history: usize) -> Self {
        self.config.devtools_history = max_history;
        self
    }

    /// Disable devtools recording.
    pub fn without_devtools(mut self) -> Self {
        self.config.devtools = false;
        self
    }

    /// Set the order summary rates.
    pub fn summary_rates(mut self, rates: SummaryRates) -> Self {
        self.config.summary = rates;
        self
    }

    /// Build the store, hydrating from storage when one was given.
    pub fn build(self) -> CartStore {
        CartStore::from_parts(self.config, self.storage)
    }
}
