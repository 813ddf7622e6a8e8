//! The layout engine: column count derivation, round-robin assignment and full relayout.

use lace_traits::metrics::MetricsProvider;
use lace_traits::render::RenderProvider;
use lace_traits::{ContainerId, ItemId};

use crate::config::{ReferenceWidth, ResolvedConfig};

pub mod assignment;
pub mod column_count;
pub(crate) mod relayout;

pub use assignment::Rotation;
pub use column_count::column_count;

/// Everything a layout pass needs to measure and render one container
pub(crate) struct LayoutContext<'a> {
    pub container: ContainerId,
    pub config: &'a ResolvedConfig,
    pub metrics: &'a dyn MetricsProvider,
    pub render: &'a dyn RenderProvider,
}

impl LayoutContext<'_> {
    pub fn item_height(&self, item: ItemId) -> f32 {
        self.metrics.item_height(self.container, item)
    }

    /// The width columns are counted against
    pub fn available_width(&self) -> f32 {
        if !self.config.centered {
            return self.metrics.container_width(self.container);
        }
        match self.config.reference_width {
            ReferenceWidth::Viewport => self.metrics.reference_width(self.container),
            ReferenceWidth::Container => self.metrics.container_width(self.container),
        }
    }

    pub fn column_count(&self) -> usize {
        column_count(
            self.available_width(),
            self.config.col_width,
            self.config.col_padding,
            self.config.window_padding,
            self.config.min_cols,
        )
    }

    /// Size the container to its columns when centering is on
    pub fn apply_centering(&self, column_count: usize) {
        if self.config.centered {
            let width = self.config.centered_width(column_count);
            self.render.set_container_width(self.container, width);
        }
    }
}
