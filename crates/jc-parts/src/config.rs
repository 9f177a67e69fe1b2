//! Part configuration variants and the shared compute contract.

use crate::combustor::CombustorConfig;
use crate::compressor::CompressorConfig;
use crate::error::PartResult;
use crate::inlet::InletConfig;
use crate::kinds::PartKind;
use crate::path::ProcessPath;
use crate::summary::PartSummary;
use crate::turbine::TurbineConfig;
use jc_gas::{GasModel, GasState};
use serde::{Deserialize, Serialize};

/// Inputs available to one stage's computation.
///
/// The cycle engine assembles this from the chain walked so far; a part never
/// reaches into the registry itself.
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'a> {
    /// Output state of the upstream part, if the chain has one.
    pub upstream: Option<&'a GasState>,
    /// Specific work absorbed by the chain's compressor [J/kg], once one has
    /// been computed. The turbine balances this demand.
    pub compressor_work_j_per_kg: Option<f64>,
}

impl<'a> StageContext<'a> {
    /// Context for a chain root (no upstream).
    pub fn root() -> Self {
        Self {
            upstream: None,
            compressor_work_j_per_kg: None,
        }
    }

    pub fn with_upstream(state: &'a GasState) -> Self {
        Self {
            upstream: Some(state),
            compressor_work_j_per_kg: None,
        }
    }

    pub fn compressor_work(mut self, work_j_per_kg: f64) -> Self {
        self.compressor_work_j_per_kg = Some(work_j_per_kg);
        self
    }
}

/// Result of one part's computation: the new working-fluid state, the
/// process path for plotting, and the performance summary.
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutput {
    pub state: GasState,
    pub path: ProcessPath,
    pub summary: PartSummary,
}

/// Common compute contract implemented by every part variant.
///
/// Implementations are deterministic functions of (configuration, context):
/// no side effects, no hidden state, so computing a chain twice from the same
/// configs yields identical results.
pub trait PartModel: Send + Sync {
    fn kind(&self) -> PartKind;

    /// Check configuration parameters against their physical ranges.
    fn validate(&self) -> PartResult<()>;

    /// Apply the transformation to the upstream state in `ctx`.
    fn compute(&self, ctx: &StageContext<'_>, model: &dyn GasModel) -> PartResult<StageOutput>;
}

/// Closed set of part configurations, tagged for the persistence contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PartConfig {
    Inlet(InletConfig),
    Compressor(CompressorConfig),
    Combustor(CombustorConfig),
    Turbine(TurbineConfig),
}

impl PartConfig {
    /// View the variant through the shared compute contract.
    pub fn as_model(&self) -> &dyn PartModel {
        match self {
            PartConfig::Inlet(c) => c,
            PartConfig::Compressor(c) => c,
            PartConfig::Combustor(c) => c,
            PartConfig::Turbine(c) => c,
        }
    }

    pub fn kind(&self) -> PartKind {
        self.as_model().kind()
    }

    pub fn validate(&self) -> PartResult<()> {
        self.as_model().validate()
    }

    pub fn compute(
        &self,
        ctx: &StageContext<'_>,
        model: &dyn GasModel,
    ) -> PartResult<StageOutput> {
        self.as_model().compute(ctx, model)
    }
}
