//! In-crate doubles for unit tests

use std::collections::HashMap;
use std::time::Duration;

use lace_traits::metrics::MetricsProvider;
use lace_traits::render::RenderProvider;
use lace_traits::resize::ResizeSource;
use lace_traits::timer::TimerProvider;
use lace_traits::{ContainerId, ItemId, Subscription, TimerHandle};
use parking_lot::Mutex;

/// Render calls as the fixture host saw them
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    CreateColumn(usize),
    DestroyColumn(usize),
    Attach(ItemId, usize),
    Detach(ItemId),
    SetWidth(f32),
    Marker,
}

#[derive(Default)]
struct FixtureState {
    width: f32,
    reference_width: f32,
    existing: Vec<ItemId>,
    heights: HashMap<ItemId, f32>,
    calls: Vec<RenderCall>,
}

/// Metrics + render host backed by plain maps
#[derive(Default)]
pub struct FixtureHost {
    state: Mutex<FixtureState>,
}

impl FixtureHost {
    pub fn with_width(width: f32) -> Self {
        let host = Self::default();
        host.set_width(width);
        host
    }

    pub fn set_width(&self, width: f32) {
        self.state.lock().width = width;
    }

    pub fn set_reference_width(&self, width: f32) {
        self.state.lock().reference_width = width;
    }

    pub fn set_height(&self, item: ItemId, height: f32) {
        self.state.lock().heights.insert(item, height);
    }

    /// Items the container already holds when the grid bootstraps
    pub fn add_existing(&self, item: ItemId, height: f32) {
        let mut state = self.state.lock();
        state.existing.push(item);
        state.heights.insert(item, height);
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    fn record(&self, call: RenderCall) {
        self.state.lock().calls.push(call);
    }
}

impl MetricsProvider for FixtureHost {
    fn container_width(&self, _container: ContainerId) -> f32 {
        self.state.lock().width
    }

    fn reference_width(&self, _container: ContainerId) -> f32 {
        self.state.lock().reference_width
    }

    fn item_height(&self, _container: ContainerId, item: ItemId) -> f32 {
        self.state.lock().heights.get(&item).copied().unwrap_or(0.0)
    }
}

impl RenderProvider for FixtureHost {
    fn query_items(&self, _container: ContainerId, _selector: &str) -> Vec<ItemId> {
        self.state.lock().existing.clone()
    }

    fn create_column(&self, _container: ContainerId, index: usize) {
        self.record(RenderCall::CreateColumn(index));
    }

    fn destroy_column(&self, _container: ContainerId, index: usize) {
        self.record(RenderCall::DestroyColumn(index));
    }

    fn attach_item(&self, _container: ContainerId, item: ItemId, column: usize) {
        self.record(RenderCall::Attach(item, column));
    }

    fn detach_item(&self, _container: ContainerId, item: ItemId) {
        self.record(RenderCall::Detach(item));
    }

    fn set_container_width(&self, _container: ContainerId, width: f32) {
        self.record(RenderCall::SetWidth(width));
    }

    fn apply_marker(&self, _container: ContainerId) {
        self.record(RenderCall::Marker);
    }
}

/// Timer that only records what was asked of it
#[derive(Default)]
pub struct RecordingTimer {
    next: Mutex<u64>,
    scheduled: Mutex<Vec<(ContainerId, Duration, TimerHandle)>>,
    cancelled: Mutex<Vec<TimerHandle>>,
}

impl RecordingTimer {
    pub fn scheduled(&self) -> Vec<(ContainerId, Duration, TimerHandle)> {
        self.scheduled.lock().clone()
    }

    pub fn cancelled(&self) -> Vec<TimerHandle> {
        self.cancelled.lock().clone()
    }
}

impl TimerProvider for RecordingTimer {
    fn schedule(&self, container: ContainerId, delay: Duration) -> TimerHandle {
        let mut next = self.next.lock();
        let handle = TimerHandle(*next);
        *next += 1;
        self.scheduled.lock().push((container, delay, handle));
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.cancelled.lock().push(handle);
    }
}

/// Resize source that tracks live subscriptions
#[derive(Default)]
pub struct RecordingResize {
    live: Mutex<Vec<(Subscription, ContainerId)>>,
    next: Mutex<u64>,
}

impl RecordingResize {
    pub fn subscribed(&self, container: ContainerId) -> bool {
        self.live
            .lock()
            .iter()
            .any(|(_, subscribed)| *subscribed == container)
    }
}

impl ResizeSource for RecordingResize {
    fn subscribe(&self, container: ContainerId) -> Subscription {
        let mut next = self.next.lock();
        let subscription = Subscription(*next);
        *next += 1;
        self.live.lock().push((subscription, container));
        subscription
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.live.lock().retain(|(live, _)| *live != subscription);
    }
}
