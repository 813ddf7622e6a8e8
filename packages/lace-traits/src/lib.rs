//! Capability traits consumed by the Lace layout core.
//!
//! The layout engine in [`lace-grid`](https://docs.rs/lace-grid) never touches rendering primitives
//! directly. Everything it needs from the host (measuring, attaching items to columns, resize
//! notifications, deferred timers) is expressed as one of the provider traits in this crate.
//! Each trait ships with a `Dummy*` implementation that does nothing, which is what the core
//! falls back to when a provider is not supplied.

pub mod handle;
pub mod metrics;
pub mod render;
pub mod resize;
pub mod timer;

pub use handle::{ContainerId, ItemId, Subscription, TimerHandle};
