//! Serializable analysis payloads.

use jc_core::PartId;
use jc_cycle::StageResult;
use jc_diagram::DiagramData;
use jc_parts::{PartKind, PartSummary};
use serde::{Deserialize, Serialize};

/// One part's contribution to an analysis: identity plus the numeric
/// performance summary. Never formatted text; the presentation collaborator
/// renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSummary {
    pub part_id: PartId,
    pub name: String,
    pub kind: PartKind,
    pub metrics: PartSummary,
}

impl StageSummary {
    pub fn from_stage(stage: &StageResult) -> Self {
        Self {
            part_id: stage.part_id,
            name: stage.name.clone(),
            kind: stage.kind,
            metrics: stage.summary.clone(),
        }
    }
}

/// The complete result of analyzing a chain or the whole engine: per-part
/// summaries in computation order plus the assembled T-s diagram.
///
/// This is the payload cached by the analysis store and handed to
/// presentation collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub stages: Vec<StageSummary>,
    pub diagram: DiagramData,
}
