//! Synchronous change notification.
//!
//! Two flavours of subscriber are supported: callbacks invoked inline on
//! every change, and channel-backed [`Subscription`]s that a consumer drains
//! at its own pace. Both receive the same `Arc<StoreState>` snapshot.

use std::sync::mpsc::{self, Receiver, RecvError, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crate::state::StoreState;

/// Callback invoked with every new snapshot.
pub type Listener = Box<dyn FnMut(&Arc<StoreState>) + Send>;

/// Handle returned by [`crate::CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A channel-backed subscription to store snapshots.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<Arc<StoreState>>,
}

impl Subscription {
    fn new(receiver: Receiver<Arc<StoreState>>) -> Self {
        Self { receiver }
    }

    /// Block until the next snapshot is available.
    pub fn recv(&self) -> Result<Arc<StoreState>, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a snapshot without blocking.
    pub fn try_recv(&self) -> Result<Arc<StoreState>, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a snapshot.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Arc<StoreState>, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything pending and keep only the newest snapshot.
    pub fn latest(&self) -> Option<Arc<StoreState>> {
        self.receiver.try_iter().last()
    }
}

/// Registered subscribers of one store.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    channels: Vec<Sender<Arc<StoreState>>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    pub(crate) fn watch(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        self.channels.push(tx);
        Subscription::new(rx)
    }

    /// Deliver a snapshot to every subscriber, in registration order.
    pub(crate) fn publish(&mut self, state: &Arc<StoreState>) {
        for (_, listener) in &mut self.listeners {
            listener(state);
        }

        // Drop channels whose receiver has gone away.
        self.channels.retain(|tx| tx.send(Arc::clone(state)).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len() + self.channels.len()
    }
}
