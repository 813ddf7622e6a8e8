//! Render-layer capability: the only way the core moves things on screen.

use crate::{ContainerId, ItemId};

/// Applies column structure and item placement to the host's element tree.
///
/// Columns are addressed by their 1-based index. All methods have no-op defaults so that
/// hosts only need to implement what they actually render.
pub trait RenderProvider: Send + Sync + 'static {
    /// Items already present in the container that match `selector`, in document order.
    fn query_items(&self, container: ContainerId, selector: &str) -> Vec<ItemId> {
        let _ = (container, selector);
        Vec::new()
    }

    /// Create an (empty) column element with the given index.
    fn create_column(&self, container: ContainerId, index: usize) {
        let _ = (container, index);
    }

    /// Remove a column element. Items still inside it have already been detached.
    fn destroy_column(&self, container: ContainerId, index: usize) {
        let _ = (container, index);
    }

    /// Move `item` to the end of column `column`.
    fn attach_item(&self, container: ContainerId, item: ItemId, column: usize) {
        let _ = (container, item, column);
    }

    /// Take `item` out of whatever column holds it, without destroying its content.
    fn detach_item(&self, container: ContainerId, item: ItemId) {
        let _ = (container, item);
    }

    /// Force the container to a fixed pixel width (used when centering).
    fn set_container_width(&self, container: ContainerId, width: f32) {
        let _ = (container, width);
    }

    /// Insert the structural clearing marker after the columns.
    fn apply_marker(&self, container: ContainerId) {
        let _ = container;
    }
}

/// A render provider that ignores every request.
pub struct DummyRenderProvider;

impl RenderProvider for DummyRenderProvider {}
