//! Stage results and the aggregated engine trace.

use jc_core::PartId;
use jc_gas::{Composition, GasState};
use jc_parts::{PartKind, PartSummary, ProcessPath};
use serde::{Deserialize, Serialize};

/// Result of computing one part within a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct StageResult {
    pub part_id: PartId,
    /// User-assigned display name of the part.
    pub name: String,
    pub kind: PartKind,
    /// Output state handed to the next part in the chain.
    pub state: GasState,
    pub path: ProcessPath,
    pub summary: PartSummary,
}

/// One tagged segment of the whole-engine trace.
///
/// Carries the composition the segment was computed with, so the diagram
/// assembler can query the gas model for isobar overlays at matching
/// mixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSegment {
    pub part_id: PartId,
    /// Display label: the part name plus its kind.
    pub label: String,
    pub kind: PartKind,
    pub path: ProcessPath,
    pub composition: Composition,
}

/// Aggregated multi-segment process path across one or more computed chains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineTrace {
    pub segments: Vec<TraceSegment>,
}

impl EngineTrace {
    /// Append one computed stage as a tagged segment.
    pub fn push_stage(&mut self, stage: &StageResult) {
        self.segments.push(TraceSegment {
            part_id: stage.part_id,
            label: format!("{} ({})", stage.name, stage.kind),
            kind: stage.kind,
            path: stage.path.clone(),
            composition: stage.state.composition().clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Smallest and largest pressure sampled anywhere in the trace [Pa].
    pub fn pressure_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for segment in &self.segments {
            for sample in segment.path.samples() {
                range = Some(match range {
                    None => (sample.pressure, sample.pressure),
                    Some((lo, hi)) => (lo.min(sample.pressure), hi.max(sample.pressure)),
                });
            }
        }
        range
    }

    /// Smallest and largest temperature sampled anywhere in the trace [K].
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for segment in &self.segments {
            for sample in segment.path.samples() {
                range = Some(match range {
                    None => (sample.temperature, sample.temperature),
                    Some((lo, hi)) => {
                        (lo.min(sample.temperature), hi.max(sample.temperature))
                    }
                });
            }
        }
        range
    }
}
