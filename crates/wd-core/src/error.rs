//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `WdError` as one variant
//! where they need to surface core failures.

use thiserror::Error;

/// The base error type for `wd-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum WdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown hazard kind {0:?}")]
    UnknownHazard(String),
}

/// Shorthand result type for all `wd-*` crates.
pub type WdResult<T> = Result<T, WdError>;
