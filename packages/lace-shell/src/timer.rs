//! Timer providers

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use flume::Sender;
use lace_traits::timer::TimerProvider;
use lace_traits::{ContainerId, TimerHandle};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::ShellError;
use crate::event::ShellEvent;

/// Timers backed by `tokio::time::sleep`
///
/// A fired timer is delivered as [`ShellEvent::TimerFired`] on the event channel.
/// Cancelling aborts the sleeping task, so a cancelled timer never produces an event.
pub struct TokioTimerProvider {
    rt: Handle,
    events: Sender<ShellEvent>,
    next: AtomicU64,
    tasks: Arc<Mutex<HashMap<TimerHandle, JoinHandle<()>>>>,
}

impl TokioTimerProvider {
    pub fn new(rt: Handle, events: Sender<ShellEvent>) -> Self {
        Self {
            rt,
            events,
            next: AtomicU64::new(0),
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Use the runtime of the calling thread
    pub fn current(events: Sender<ShellEvent>) -> Result<Self, ShellError> {
        Ok(Self::new(Handle::try_current()?, events))
    }

    /// Timers scheduled and neither fired nor cancelled yet
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }
}

impl TimerProvider for TokioTimerProvider {
    fn schedule(&self, container: ContainerId, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next.fetch_add(1, Ordering::Relaxed));
        let events = self.events.clone();
        let tasks = Arc::clone(&self.tasks);

        // Held across the spawn so the task cannot finish before it is registered
        let mut registered = self.tasks.lock();
        let task = self.rt.spawn(async move {
            tokio::time::sleep(delay).await;
            tasks.lock().remove(&handle);

            if events
                .send(ShellEvent::TimerFired { container, handle })
                .is_err()
            {
                #[cfg(feature = "tracing")]
                tracing::debug!(container = %container, "Timer fired after the driver shut down");
            }
        });
        registered.insert(handle, task);

        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(task) = self.tasks.lock().remove(&handle) {
            task.abort();
        }
    }
}

#[derive(Debug)]
struct ManualEntry {
    due: Duration,
    container: ContainerId,
    handle: TimerHandle,
}

#[derive(Debug, Default)]
struct ManualState {
    now: Duration,
    next: u64,
    pending: Vec<ManualEntry>,
}

/// A timer provider driven by an explicit virtual clock
///
/// Nothing fires on its own. [`ManualTimer::advance`] moves the clock forward and returns the
/// timers that came due, in the order they were due.
#[derive(Debug, Default)]
pub struct ManualTimer {
    state: Mutex<ManualState>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    pub fn pending(&self) -> usize {
        self.state.lock().pending.len()
    }

    pub fn advance(&self, by: Duration) -> Vec<(ContainerId, TimerHandle)> {
        let mut state = self.state.lock();
        state.now += by;
        let now = state.now;

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut state.pending)
            .into_iter()
            .partition(|entry| entry.due <= now);
        state.pending = pending;

        due.sort_by_key(|entry| (entry.due, entry.handle));
        due.into_iter()
            .map(|entry| (entry.container, entry.handle))
            .collect()
    }
}

impl TimerProvider for ManualTimer {
    fn schedule(&self, container: ContainerId, delay: Duration) -> TimerHandle {
        let mut state = self.state.lock();
        let handle = TimerHandle(state.next);
        state.next += 1;
        let due = state.now + delay;
        state.pending.push(ManualEntry {
            due,
            container,
            handle,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.state
            .lock()
            .pending
            .retain(|entry| entry.handle != handle);
    }
}
