//! Resize debouncing
//!
//! A burst of resize events collapses into a single relayout: every event cancels the timer
//! scheduled by the previous one and schedules a fresh one.

use std::time::Duration;

use lace_traits::timer::TimerProvider;
use lace_traits::{ContainerId, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceState {
    #[default]
    Idle,
    Pending(TimerHandle),
}

#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    state: DebounceState,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Replace any pending timer with a new one
    pub(crate) fn trigger(
        &mut self,
        timer: &dyn TimerProvider,
        container: ContainerId,
    ) -> TimerHandle {
        if let DebounceState::Pending(previous) = self.state {
            timer.cancel(previous);
        }
        let handle = timer.schedule(container, self.delay);
        self.state = DebounceState::Pending(handle);
        handle
    }

    /// Accept a fired timer. Returns `false` for handles that are not the pending one.
    pub(crate) fn fire(&mut self, handle: TimerHandle) -> bool {
        match self.state {
            DebounceState::Pending(pending) if pending == handle => {
                self.state = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn cancel(&mut self, timer: &dyn TimerProvider) {
        if let DebounceState::Pending(pending) = std::mem::take(&mut self.state) {
            timer.cancel(pending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTimer;

    #[test]
    fn new_trigger_cancels_the_pending_timer() {
        let timer = RecordingTimer::default();
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(250));

        let first = debouncer.trigger(&timer, ContainerId(1));
        let second = debouncer.trigger(&timer, ContainerId(1));

        assert_ne!(first, second);
        assert_eq!(timer.cancelled(), vec![first]);
        assert_eq!(debouncer.state(), DebounceState::Pending(second));
    }

    #[test]
    fn only_the_pending_handle_fires() {
        let timer = RecordingTimer::default();
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(250));

        let stale = debouncer.trigger(&timer, ContainerId(1));
        let live = debouncer.trigger(&timer, ContainerId(1));

        assert!(!debouncer.fire(stale));
        assert!(debouncer.fire(live));
        assert!(!debouncer.fire(live), "a handle fires at most once");
        assert_eq!(debouncer.state(), DebounceState::Idle);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let timer = RecordingTimer::default();
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(250));
        let handle = debouncer.trigger(&timer, ContainerId(1));

        debouncer.cancel(&timer);
        assert_eq!(debouncer.state(), DebounceState::Idle);
        assert_eq!(timer.cancelled(), vec![handle]);
        assert!(!debouncer.fire(handle));
    }
}
