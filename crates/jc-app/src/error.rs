//! Error types for the jc-app service layer.

use jc_cycle::CycleError;
use jc_diagram::DiagramError;
use jc_graph::GraphError;
use jc_store::StoreError;

/// Unified error surface for front ends (CLI or otherwise).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error("Diagram assembly failed: {0}")]
    Diagram(#[from] DiagramError),

    #[error("Persistence error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for jc-app operations.
pub type AppResult<T> = Result<T, AppError>;
