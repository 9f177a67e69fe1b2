//! Gas property errors.

use jc_core::JcError;
use thiserror::Error;

/// Result type for gas property operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors that can occur during gas property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// The backend cannot resolve a physically meaningful state.
    /// Carries the numeric inputs that caused the rejection.
    #[error("Invalid gas state for {what}: T={t_k} K, p={p_pa} Pa")]
    InvalidState {
        what: &'static str,
        t_k: f64,
        p_pa: f64,
    },

    /// Non-physical values (negative fraction, zero molar mass, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Temperature outside the polynomial fit range of a species.
    #[error("Temperature {t_k} K outside tabulated range [{min_k}, {max_k}] K")]
    OutOfRange { t_k: f64, min_k: f64, max_k: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Iterative property inversion did not converge.
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },
}

impl From<GasError> for JcError {
    fn from(err: GasError) -> Self {
        match err {
            GasError::InvalidState { .. } | GasError::NonPhysical { .. } => JcError::Invariant {
                what: err.to_string(),
            },
            GasError::OutOfRange { .. }
            | GasError::InvalidArg { .. }
            | GasError::ConvergenceFailed { .. } => JcError::InvalidArg {
                what: err.to_string(),
            },
        }
    }
}
