//! Street-graph subsystem error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("tensor field not ready: {0}")]
    FieldNotReady(#[from] st_field::FieldError),

    #[error("generation region is empty or degenerate")]
    EmptyRegion,

    #[error("road {0} not found")]
    RoadNotFound(st_core::RoadId),

    #[error("node {0} not found")]
    NodeNotFound(st_core::NodeId),

    #[error("unknown seed method index {0}, expected 0 (grid), 1 (uniform), or 2 (density-constrained)")]
    UnknownSeedMethodIndex(u8),
}

pub type GraphResult<T> = Result<T, GraphError>;
