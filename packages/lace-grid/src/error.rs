//! Error types for grid configuration and usage
//!
//! None of these abort anything. Configuration errors are collected at initialization and
//! the grid proceeds with defaults; usage errors turn the offending call into a no-op.
//! Both are logged (with the `tracing` feature) and returned so callers can surface them.

use lace_traits::ContainerId;
use thiserror::Error;

use crate::config::MAX_COLUMNS;

/// Problems found while validating a [`GridConfig`](crate::GridConfig)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("required option `{option}` was not provided")]
    MissingOption { option: &'static str },

    #[error("option `{option}` is not a usable length (got {value})")]
    InvalidLength { option: &'static str, value: f32 },

    #[error("option `min_cols` must be between 1 and {} (got {value})", MAX_COLUMNS)]
    InvalidMinCols { value: usize },

    #[error("option `selector` must not be empty")]
    EmptySelector,
}

/// Calls that cannot be honoured in the grid's current state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    #[error("unknown grid operation `{name}`")]
    UnknownCommand { name: String },

    #[error("grid operation `{operation}` called on {container} before init")]
    NotInitialized {
        operation: &'static str,
        container: ContainerId,
    },

    #[error("{container} already hosts a grid")]
    AlreadyInitialized { container: ContainerId },
}

/// Unified error for everything the public grid API can report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("invalid grid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("grid misuse: {0}")]
    Usage(#[from] UsageError),
}

pub type GridResult<T> = Result<T, GridError>;
pub type UsageResult<T> = Result<T, UsageError>;

impl ConfigError {
    pub fn missing(option: &'static str) -> Self {
        Self::MissingOption { option }
    }

    pub fn invalid_length(option: &'static str, value: f32) -> Self {
        Self::InvalidLength { option, value }
    }
}

impl UsageError {
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    pub fn not_initialized(operation: &'static str, container: ContainerId) -> Self {
        Self::NotInitialized {
            operation,
            container,
        }
    }

    /// Log the error at `warn` and hand it back, for use at the end of a failing call path
    pub(crate) fn report(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %self, "Ignoring grid call");
        self
    }
}
