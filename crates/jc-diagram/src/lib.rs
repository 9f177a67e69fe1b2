//! jc-diagram: temperature-entropy diagram assembly.
//!
//! Converts an engine trace into a renderable structure: ordered
//! (entropy, temperature) point lists per segment, segment labels, and
//! isobar overlay curves at the pressure levels the trace passes through.
//! Pure transform; rendering belongs to the presentation collaborator.

pub mod assemble;
pub mod data;
pub mod error;

pub use assemble::build_ts_diagram;
pub use data::{DiagramData, DiagramSegment, IsobarCurve, TsPoint};
pub use error::{DiagramError, DiagramResult};
