//! In-memory host implementing the metrics and render providers

use std::collections::{BTreeMap, HashMap};

use lace_traits::metrics::MetricsProvider;
use lace_traits::render::RenderProvider;
use lace_traits::{ContainerId, ItemId};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct ContainerState {
    /// Natural width, as the container would measure without a forced width
    width: f32,
    /// Width forced by a centered grid
    forced_width: Option<f32>,
    /// Items directly inside the container (not in any column), in document order
    loose: Vec<ItemId>,
    heights: HashMap<ItemId, f32>,
    columns: BTreeMap<usize, Vec<ItemId>>,
    has_marker: bool,
}

impl ContainerState {
    fn take(&mut self, item: ItemId) {
        self.loose.retain(|loose| *loose != item);
        for items in self.columns.values_mut() {
            items.retain(|placed| *placed != item);
        }
    }
}

#[derive(Debug, Default)]
struct HostState {
    viewport_width: f32,
    containers: HashMap<ContainerId, ContainerState>,
}

/// A headless element tree
///
/// Each container holds loose items and numbered columns. Every loose item matches any
/// selector. Heights are whatever was registered for an item (0 if nothing was).
#[derive(Debug, Default)]
pub struct HeadlessHost {
    state: Mutex<HostState>,
}

impl HeadlessHost {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            state: Mutex::new(HostState {
                viewport_width,
                containers: HashMap::new(),
            }),
        }
    }

    pub fn add_container(&self, container: ContainerId, width: f32) {
        self.state.lock().containers.insert(
            container,
            ContainerState {
                width,
                ..Default::default()
            },
        );
    }

    pub fn resize_container(&self, container: ContainerId, width: f32) {
        self.state.lock().containers.entry(container).or_default().width = width;
    }

    pub fn set_viewport_width(&self, width: f32) {
        self.state.lock().viewport_width = width;
    }

    /// Add a loose item to the end of the container
    pub fn insert_item(&self, container: ContainerId, item: ItemId, height: f32) {
        let mut state = self.state.lock();
        let container = state.containers.entry(container).or_default();
        container.take(item);
        container.loose.push(item);
        container.heights.insert(item, height);
    }

    pub fn set_item_height(&self, container: ContainerId, item: ItemId, height: f32) {
        self.state
            .lock()
            .containers
            .entry(container)
            .or_default()
            .heights
            .insert(item, height);
    }

    /// Items of one column, top to bottom
    pub fn column(&self, container: ContainerId, index: usize) -> Option<Vec<ItemId>> {
        self.state
            .lock()
            .containers
            .get(&container)?
            .columns
            .get(&index)
            .cloned()
    }

    /// All columns in index order
    pub fn columns(&self, container: ContainerId) -> Vec<(usize, Vec<ItemId>)> {
        self.state
            .lock()
            .containers
            .get(&container)
            .map(|state| {
                state
                    .columns
                    .iter()
                    .map(|(index, items)| (*index, items.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Summed item heights per column, in index order
    pub fn column_heights(&self, container: ContainerId) -> Vec<f32> {
        let state = self.state.lock();
        let Some(container) = state.containers.get(&container) else {
            return Vec::new();
        };
        container
            .columns
            .values()
            .map(|items| {
                items
                    .iter()
                    .map(|item| container.heights.get(item).copied().unwrap_or(0.0))
                    .sum()
            })
            .collect()
    }

    pub fn loose_items(&self, container: ContainerId) -> Vec<ItemId> {
        self.state
            .lock()
            .containers
            .get(&container)
            .map(|state| state.loose.clone())
            .unwrap_or_default()
    }

    pub fn forced_width(&self, container: ContainerId) -> Option<f32> {
        self.state.lock().containers.get(&container)?.forced_width
    }

    pub fn has_marker(&self, container: ContainerId) -> bool {
        self.state
            .lock()
            .containers
            .get(&container)
            .is_some_and(|state| state.has_marker)
    }
}

impl MetricsProvider for HeadlessHost {
    fn container_width(&self, container: ContainerId) -> f32 {
        self.state
            .lock()
            .containers
            .get(&container)
            .map(|state| state.width)
            .unwrap_or(0.0)
    }

    fn reference_width(&self, _container: ContainerId) -> f32 {
        self.state.lock().viewport_width
    }

    fn item_height(&self, container: ContainerId, item: ItemId) -> f32 {
        self.state
            .lock()
            .containers
            .get(&container)
            .and_then(|state| state.heights.get(&item).copied())
            .unwrap_or(0.0)
    }
}

impl RenderProvider for HeadlessHost {
    fn query_items(&self, container: ContainerId, _selector: &str) -> Vec<ItemId> {
        self.loose_items(container)
    }

    fn create_column(&self, container: ContainerId, index: usize) {
        self.state
            .lock()
            .containers
            .entry(container)
            .or_default()
            .columns
            .insert(index, Vec::new());
    }

    fn destroy_column(&self, container: ContainerId, index: usize) {
        let mut state = self.state.lock();
        let container = state.containers.entry(container).or_default();
        if let Some(orphans) = container.columns.remove(&index) {
            container.loose.extend(orphans);
        }
    }

    fn attach_item(&self, container: ContainerId, item: ItemId, column: usize) {
        let mut state = self.state.lock();
        let container = state.containers.entry(container).or_default();
        container.take(item);
        container.columns.entry(column).or_default().push(item);
    }

    fn detach_item(&self, container: ContainerId, item: ItemId) {
        let mut state = self.state.lock();
        let container = state.containers.entry(container).or_default();
        let in_column = container
            .columns
            .values()
            .any(|items| items.contains(&item));
        if in_column {
            container.take(item);
            container.loose.push(item);
        }
    }

    fn set_container_width(&self, container: ContainerId, width: f32) {
        self.state
            .lock()
            .containers
            .entry(container)
            .or_default()
            .forced_width = Some(width);
    }

    fn apply_marker(&self, container: ContainerId) {
        self.state
            .lock()
            .containers
            .entry(container)
            .or_default()
            .has_marker = true;
    }
}
