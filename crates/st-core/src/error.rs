//! Framework error type.
//!
//! Sub-crates define their own error enums and convert into them via `From`
//! impls rather than reusing `CoreError` directly — it only covers failures
//! that can occur inside `st-core` itself.

use thiserror::Error;

/// The error type for `st-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("tensor is not symmetric-traceless: {0:?}")]
    NotSymmetricTraceless(crate::Tensor),
}

/// Shorthand result type for `st-core`.
pub type CoreResult<T> = Result<T, CoreError>;
