//! Error types for part computations.

use crate::kinds::PartKind;
use jc_core::JcError;
use jc_gas::GasError;
use thiserror::Error;

pub type PartResult<T> = Result<T, PartError>;

/// Errors that can occur while validating or computing a part.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartError {
    /// Invalid or out-of-range configuration parameter. User-correctable;
    /// names the offending field.
    #[error("Invalid configuration field `{field}`: {reason}")]
    Configuration {
        field: &'static str,
        reason: &'static str,
    },

    /// The part was computed without the upstream state its kind requires.
    #[error("{part:?} requires an upstream {requires:?} part")]
    MissingUpstream { part: PartKind, requires: PartKind },

    /// The gas property backend rejected a physically impossible state.
    #[error(transparent)]
    InvalidState(#[from] GasError),

    /// An iterative solver exhausted its iteration budget.
    #[error("Convergence failed: {what}")]
    Convergence { what: &'static str },
}

impl From<PartError> for JcError {
    fn from(err: PartError) -> Self {
        match err {
            PartError::Configuration { .. } | PartError::MissingUpstream { .. } => {
                JcError::InvalidArg {
                    what: err.to_string(),
                }
            }
            PartError::InvalidState(gas) => gas.into(),
            PartError::Convergence { .. } => JcError::Invariant {
                what: err.to_string(),
            },
        }
    }
}
