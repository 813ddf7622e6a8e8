//! Measurement capability.

use crate::{ContainerId, ItemId};

/// Reports the rendered dimensions the layout core needs.
pub trait MetricsProvider: Send + Sync + 'static {
    /// Measured width of the container itself.
    fn container_width(&self, container: ContainerId) -> f32;

    /// Width of the element the container is centered against (usually the viewport).
    fn reference_width(&self, container: ContainerId) -> f32;

    /// Rendered height of a single item.
    fn item_height(&self, container: ContainerId, item: ItemId) -> f32;
}

/// A metrics provider that reports zero for everything.
pub struct DummyMetricsProvider;

impl MetricsProvider for DummyMetricsProvider {
    fn container_width(&self, _container: ContainerId) -> f32 {
        0.0
    }

    fn reference_width(&self, _container: ContainerId) -> f32 {
        0.0
    }

    fn item_height(&self, _container: ContainerId, _item: ItemId) -> f32 {
        0.0
    }
}
