//! Registry and chain-graph errors.

use jc_core::{JcError, PartId};
use jc_parts::{PartError, PartKind};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// No part registered under this id.
    #[error("No part with id {id}")]
    NotFound { id: PartId },

    /// The part's configuration failed validation on entry to the registry.
    #[error(transparent)]
    InvalidConfig(#[from] PartError),

    /// The part's kind requires an upstream reference, but none was given.
    #[error("Part {part} declares no upstream, but a {kind} requires a {requires}")]
    UpstreamRequired {
        part: PartId,
        kind: PartKind,
        requires: PartKind,
    },

    /// The part's kind takes no upstream, but one was given.
    #[error("Part {part} is a {kind} and must not reference an upstream part")]
    UpstreamForbidden { part: PartId, kind: PartKind },

    /// An ancestor reference points at a part that no longer exists.
    /// Chain-construction invariants should make this unreachable; seeing it
    /// means the registry was bypassed.
    #[error("Broken chain at {part}: upstream {reference} does not exist")]
    BrokenChain { part: PartId, reference: PartId },

    /// An ancestor is of the wrong kind for its dependent.
    #[error("Broken chain at {part}: upstream {reference} is a {found}, expected a {expected}")]
    WrongUpstreamKind {
        part: PartId,
        reference: PartId,
        expected: PartKind,
        found: PartKind,
    },

    /// The ancestor walk revisited a part. Defensive: the kind table makes
    /// reference cycles unconstructible through the public API.
    #[error("Cycle detected in the chain through {part}")]
    CycleDetected { part: PartId },

    /// Removal blocked: other parts reference this one as their upstream.
    #[error("Cannot remove {id}: referenced as upstream by {dependents:?}")]
    DependentExists {
        id: PartId,
        dependents: Vec<PartId>,
    },
}

impl From<GraphError> for JcError {
    fn from(err: GraphError) -> Self {
        match &err {
            GraphError::BrokenChain { .. } | GraphError::CycleDetected { .. } => {
                JcError::Invariant {
                    what: err.to_string(),
                }
            }
            _ => JcError::InvalidArg {
                what: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependents_listed_in_message() {
        let id = PartId::new();
        let dep = PartId::new();
        let err = GraphError::DependentExists {
            id,
            dependents: vec![dep],
        };
        assert!(err.to_string().contains(&dep.to_string()));
    }

    #[test]
    fn broken_chain_is_an_invariant_failure() {
        let err = GraphError::BrokenChain {
            part: PartId::new(),
            reference: PartId::new(),
        };
        assert!(matches!(JcError::from(err), JcError::Invariant { .. }));
    }
}
