//! Chain and whole-engine computation.

use std::collections::HashSet;

use crate::error::{CycleError, CycleResult};
use crate::trace::{EngineTrace, StageResult};
use jc_core::PartId;
use jc_gas::{GasModel, GasState};
use jc_graph::{Part, Registry};
use jc_parts::{PartKind, StageContext, compressor::SPECIFIC_WORK_KEY};

/// Computes chains against a gas model.
///
/// The engine holds no mutable state of its own: every computation is a pure
/// function of the registry snapshot and the part configurations, so results
/// are identical across repeated runs.
pub struct CycleEngine<'a> {
    model: &'a dyn GasModel,
}

impl<'a> CycleEngine<'a> {
    pub fn new(model: &'a dyn GasModel) -> Self {
        Self { model }
    }

    /// Compute the full ancestor chain of `id`, root to target.
    ///
    /// The chain is resolved and cloned out of the registry first, so the
    /// whole computation observes one consistent snapshot. A failure at any
    /// stage aborts the computation; no partial results are returned.
    pub fn compute_chain(
        &self,
        registry: &Registry,
        id: PartId,
    ) -> CycleResult<Vec<StageResult>> {
        let snapshot: Vec<Part> = registry
            .resolve_chain(id)?
            .into_iter()
            .cloned()
            .collect();
        self.compute_snapshot(&snapshot)
    }

    fn compute_snapshot(&self, chain: &[Part]) -> CycleResult<Vec<StageResult>> {
        let mut results: Vec<StageResult> = Vec::with_capacity(chain.len());
        let mut upstream: Option<GasState> = None;
        let mut compressor_work: Option<f64> = None;

        for part in chain {
            let ctx = StageContext {
                upstream: upstream.as_ref(),
                compressor_work_j_per_kg: compressor_work,
            };

            let output = part
                .config
                .compute(&ctx, self.model)
                .map_err(|source| CycleError::Stage {
                    part: part.id,
                    name: part.name.clone(),
                    source,
                })?;

            tracing::debug!(
                part = %part.id,
                kind = %part.kind(),
                t_out_k = output.state.temperature().value,
                p_out_pa = output.state.pressure().value,
                "stage computed"
            );

            if part.kind() == PartKind::Compressor {
                compressor_work = output.summary.get(SPECIFIC_WORK_KEY);
            }

            upstream = Some(output.state.clone());
            results.push(StageResult {
                part_id: part.id,
                name: part.name.clone(),
                kind: part.kind(),
                state: output.state,
                path: output.path,
                summary: output.summary,
            });
        }

        Ok(results)
    }

    /// Compute every terminal (leaf) part's chain and merge the process
    /// paths into one multi-segment trace.
    ///
    /// Chains sharing a prefix (two compressors on one inlet, say) compute
    /// the shared parts once per chain but contribute each part's segment to
    /// the trace only once.
    pub fn compute_engine(&self, registry: &Registry) -> CycleResult<EngineTrace> {
        let terminal_ids: Vec<PartId> =
            registry.terminal_parts().iter().map(|p| p.id).collect();

        let mut trace = EngineTrace::default();
        let mut seen: HashSet<PartId> = HashSet::new();

        for id in terminal_ids {
            let stages = self.compute_chain(registry, id)?;
            for stage in &stages {
                if seen.insert(stage.part_id) {
                    trace.push_stage(stage);
                }
            }
        }

        tracing::debug!(segments = trace.len(), "engine trace assembled");
        Ok(trace)
    }
}
