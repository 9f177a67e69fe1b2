//! Diagram assembly errors.

use jc_gas::GasError;
use thiserror::Error;

pub type DiagramResult<T> = Result<T, DiagramError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagramError {
    /// The gas model rejected a sweep point while generating an isobar.
    #[error(transparent)]
    Gas(#[from] GasError),
}
