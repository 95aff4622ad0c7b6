//! Tensor-field subsystem error type.

use thiserror::Error;

/// Errors produced by `st-field`.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("tensor field has not been filled yet")]
    NotFilled,

    #[error("eigen decomposition has not been computed for this field")]
    EigenNotComputed,

    #[error("raster size mismatch: expected {expected:?}, got {got:?}")]
    SizeMismatch { expected: (u32, u32), got: (u32, u32) },

    #[error("failed to load raster: {0}")]
    RasterLoad(#[from] image::ImageError),

    #[error("tensor error: {0}")]
    Tensor(#[from] st_core::CoreError),
}

pub type FieldResult<T> = Result<T, FieldError>;
