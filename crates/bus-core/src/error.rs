//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to forward it.

use thiserror::Error;

/// Errors raised by `bus-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bus-core`.
pub type CoreResult<T> = Result<T, CoreError>;
