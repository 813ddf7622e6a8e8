//! Resize notification capability.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{ContainerId, Subscription};

/// Source of resize events for a container.
///
/// The host is expected to forward each event to the grid owning `container`
/// (see `GridRegistry::on_resize` in `lace-grid`).
pub trait ResizeSource: Send + Sync + 'static {
    fn subscribe(&self, container: ContainerId) -> Subscription;
    fn unsubscribe(&self, subscription: Subscription);
}

/// A resize source that hands out tokens but never delivers events.
#[derive(Default)]
pub struct DummyResizeSource {
    next: AtomicU64,
}

impl ResizeSource for DummyResizeSource {
    fn subscribe(&self, _container: ContainerId) -> Subscription {
        Subscription(self.next.fetch_add(1, Ordering::Relaxed))
    }

    fn unsubscribe(&self, _subscription: Subscription) {}
}
