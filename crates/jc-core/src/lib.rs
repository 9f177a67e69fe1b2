//! jc-core: stable foundation for jetcycle.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - ids (stable part identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{JcError, JcResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
