//! Deferred execution capability used by the resize debouncer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::{ContainerId, TimerHandle};

/// Schedules a one-shot wake-up for a container after a delay.
///
/// When the delay elapses the host must deliver `(container, handle)` back to the grid
/// (`GridRegistry::on_timer` in `lace-grid`). Handles must be unique per provider.
/// Delivering a handle that has since been cancelled is harmless: the grid ignores
/// handles it is not waiting on.
pub trait TimerProvider: Send + Sync + 'static {
    fn schedule(&self, container: ContainerId, delay: Duration) -> TimerHandle;
    fn cancel(&self, handle: TimerHandle);
}

/// A timer provider whose timers never fire.
#[derive(Default)]
pub struct DummyTimerProvider {
    next: AtomicU64,
}

impl TimerProvider for DummyTimerProvider {
    fn schedule(&self, _container: ContainerId, _delay: Duration) -> TimerHandle {
        TimerHandle(self.next.fetch_add(1, Ordering::Relaxed))
    }

    fn cancel(&self, _handle: TimerHandle) {}
}
