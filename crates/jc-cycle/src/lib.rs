//! jc-cycle: the cycle computation engine.
//!
//! Walks a part's dependency chain in root-to-leaf order, feeding each
//! part's output state to the next and collecting per-stage results; merges
//! the chains of every terminal part into a whole-engine trace for the
//! diagram assembler. The registry is read through a snapshot taken at
//! resolve time, so a chain computation always sees one consistent view.

pub mod engine;
pub mod error;
pub mod trace;

pub use engine::CycleEngine;
pub use error::{CycleError, CycleResult};
pub use trace::{EngineTrace, StageResult, TraceSegment};
