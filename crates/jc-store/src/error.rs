//! Persistence errors.

use jc_graph::GraphError;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown part type tag: {found}")]
    UnknownPartType { found: String },

    #[error("Record for a {part_type} is missing parameter `{key}`")]
    MissingParam {
        part_type: &'static str,
        key: &'static str,
    },

    #[error("Parameter `{key}` has a non-representable value {value}")]
    InvalidParam { key: &'static str, value: f64 },

    #[error("No stored analysis under key {key}")]
    AnalysisNotFound { key: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
