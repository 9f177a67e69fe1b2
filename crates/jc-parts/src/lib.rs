//! jc-parts: engine part models for jetcycle.
//!
//! Each part variant (inlet, compressor, combustor, turbine) is a
//! deterministic transformation of the working-fluid state: upstream gas
//! state in, new gas state plus a process path and performance summary out.
//! Parts hold only their validated configuration; computed results belong to
//! the caller (the cycle engine), which keeps computation idempotent and
//! re-derivable from configuration alone.

pub mod combustor;
pub mod compressor;
pub mod config;
pub mod error;
pub mod inlet;
pub mod kinds;
pub mod path;
pub mod summary;
pub mod thermo;
pub mod turbine;

// Re-exports for ergonomics
pub use combustor::CombustorConfig;
pub use compressor::CompressorConfig;
pub use config::{PartConfig, PartModel, StageContext, StageOutput};
pub use error::{PartError, PartResult};
pub use inlet::InletConfig;
pub use kinds::PartKind;
pub use path::{PATH_RESOLUTION, PathSample, ProcessPath};
pub use summary::PartSummary;
pub use turbine::TurbineConfig;
