//! Error type for st-render.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "csv")]
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
