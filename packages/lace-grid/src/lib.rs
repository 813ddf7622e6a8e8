//! The masonry layout core of Lace
//!
//! A [`Grid`] distributes variable-height items over fixed-width columns. The number of columns
//! follows the container's width, items are dealt out round robin in a stable order, and a
//! cheap balancing pass evens out the column bottoms as items are added. Everything the grid
//! needs from the outside world (measuring, moving elements, resize events, timers) goes through
//! the provider traits in [`lace_traits`], so the same core can drive a DOM, a native toolkit or
//! a headless test host.
//!
//! Hosts usually keep their grids in a [`GridRegistry`], which maps each container to its grid
//! and turns calls on unknown containers into reported no-ops.

// ## Feature flags
//  - `default`: Enables the features listed below.
//  - `tracing`: Enables tracing support.

pub mod balancer;
pub mod column;
mod command;
mod config;
pub mod debounce;
pub mod error;
mod grid;
/// Column count derivation, assignment and relayout.
pub mod layout;
mod registry;
mod snapshot;

#[cfg(test)]
mod testing;

pub use balancer::BalanceReport;
pub use column::{Column, ColumnHeights, ColumnSet, PlacedItem};
pub use command::Command;
pub use config::{
    DEFAULT_BALANCE_THRESHOLD, DEFAULT_MIN_COLS, DEFAULT_RESIZE_DELAY, DEFAULT_WINDOW_PADDING,
    GridConfig, GridProviders, MAX_COLUMNS, ReferenceWidth, ResolvedConfig,
};
pub use debounce::DebounceState;
pub use error::{ConfigError, GridError, GridResult, UsageError, UsageResult};
pub use grid::Grid;
pub use layout::column_count;
pub use registry::GridRegistry;
pub use snapshot::{ColumnSnapshot, LayoutSnapshot};
