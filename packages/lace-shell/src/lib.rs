//! Host-side runtime for Lace grids
//!
//! `lace-grid` is a synchronous core that only talks to the outside world through provider
//! traits. This crate supplies implementations of those traits and a small event loop:
//!
//!  - [`HeadlessHost`]: an in-memory element tree implementing the metrics and render
//!    providers. Useful for servers that compute layouts, for snapshots, and for tests.
//!  - [`TokioTimerProvider`]: debounce timers on a tokio runtime. [`ManualTimer`] is a virtual
//!    clock with the same contract, for deterministic scenarios.
//!  - [`ChannelResizeSource`]: turns resize notifications into [`ShellEvent`]s.
//!  - [`GridDriver`]: owns a [`GridRegistry`](lace_grid::GridRegistry) and applies every
//!    [`ShellEvent`] to it from a single task, so grids are only ever touched from one place.

mod driver;
mod error;
mod event;
mod host;
mod resize;
mod timer;

pub use driver::{GridDriver, Shell};
pub use error::ShellError;
pub use event::ShellEvent;
pub use host::HeadlessHost;
pub use resize::ChannelResizeSource;
pub use timer::{ManualTimer, TokioTimerProvider};
