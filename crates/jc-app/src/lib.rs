//! jc-app: the service layer collaborators call.
//!
//! Ties the registry, the gas model, the cycle engine, the diagram
//! assembler, and the persistence contract together behind one interface:
//! create/list/delete parts, analyze a part's chain or the whole engine,
//! and load/save engine definition files, with analysis results cached by
//! configuration content hash.

pub mod analysis;
pub mod error;
pub mod service;

pub use analysis::{AnalysisReport, StageSummary};
pub use error::{AppError, AppResult};
pub use service::{ENGINE_VERSION, EngineService};
