//! Resize notifications delivered over the shell's event channel

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::Sender;
use lace_traits::resize::ResizeSource;
use lace_traits::{ContainerId, Subscription};
use parking_lot::Mutex;

use crate::event::ShellEvent;

/// Forwards resize notifications for subscribed containers as [`ShellEvent::Resized`]
pub struct ChannelResizeSource {
    events: Sender<ShellEvent>,
    next: AtomicU64,
    subscriptions: Mutex<HashMap<Subscription, ContainerId>>,
}

impl ChannelResizeSource {
    pub fn new(events: Sender<ShellEvent>) -> Self {
        Self {
            events,
            next: AtomicU64::new(0),
            subscriptions: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_subscribed(&self, container: ContainerId) -> bool {
        self.subscriptions
            .lock()
            .values()
            .any(|subscribed| *subscribed == container)
    }

    /// Report that `container` changed size. Returns whether anyone was listening.
    pub fn notify(&self, container: ContainerId) -> bool {
        if !self.is_subscribed(container) {
            return false;
        }
        self.send(container)
    }

    /// Report a viewport resize to every subscribed container. Returns how many were notified.
    pub fn notify_all(&self) -> usize {
        let mut containers: Vec<ContainerId> =
            self.subscriptions.lock().values().copied().collect();
        containers.sort();
        containers.dedup();

        containers
            .into_iter()
            .filter(|container| self.send(*container))
            .count()
    }

    fn send(&self, container: ContainerId) -> bool {
        let sent = self.events.send(ShellEvent::Resized(container)).is_ok();
        if !sent {
            #[cfg(feature = "tracing")]
            tracing::debug!(container = %container, "Dropping resize, driver has shut down");
        }
        sent
    }
}

impl ResizeSource for ChannelResizeSource {
    fn subscribe(&self, container: ContainerId) -> Subscription {
        let subscription = Subscription(self.next.fetch_add(1, Ordering::Relaxed));
        self.subscriptions.lock().insert(subscription, container);
        subscription
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.subscriptions.lock().remove(&subscription);
    }
}
