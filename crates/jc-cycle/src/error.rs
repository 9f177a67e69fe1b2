//! Cycle computation errors.

use jc_core::{JcError, PartId};
use jc_graph::GraphError;
use jc_parts::PartError;
use thiserror::Error;

pub type CycleResult<T> = Result<T, CycleError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Chain resolution failed before any computation started.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A stage failed mid-chain. The whole computation is aborted and no
    /// partial results are exposed; the failing part is identified.
    #[error("Computing part {part} (\"{name}\") failed: {source}")]
    Stage {
        part: PartId,
        name: String,
        #[source]
        source: PartError,
    },
}

impl CycleError {
    /// Id of the part that caused the failure, when one is attributable.
    pub fn failing_part(&self) -> Option<PartId> {
        match self {
            CycleError::Stage { part, .. } => Some(*part),
            CycleError::Graph(_) => None,
        }
    }
}

impl From<CycleError> for JcError {
    fn from(err: CycleError) -> Self {
        match err {
            CycleError::Graph(graph) => graph.into(),
            CycleError::Stage { .. } => JcError::InvalidArg {
                what: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_parts::{PartKind, PartError};

    #[test]
    fn stage_error_names_the_part() {
        let id = PartId::new();
        let err = CycleError::Stage {
            part: id,
            name: "hp compressor".to_string(),
            source: PartError::MissingUpstream {
                part: PartKind::Compressor,
                requires: PartKind::Inlet,
            },
        };
        assert_eq!(err.failing_part(), Some(id));
        let msg = err.to_string();
        assert!(msg.contains("hp compressor"));
        assert!(msg.contains(&id.to_string()));
    }
}
