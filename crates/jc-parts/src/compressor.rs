//! Multi-stage compressor model.

use crate::config::{PartModel, StageContext, StageOutput};
use crate::error::{PartError, PartResult};
use crate::kinds::PartKind;
use crate::path::{PATH_RESOLUTION, ProcessPath, sample_at};
use crate::summary::PartSummary;
use jc_core::units::{k, pa};
use jc_gas::GasModel;
use serde::{Deserialize, Serialize};

/// Summary key under which the compressor reports its specific work.
/// The cycle engine reads it back to size the turbine's demand.
pub const SPECIFIC_WORK_KEY: &str = "specific_work_j_per_kg";

/// Axial compressor raising the pressure by a fixed overall ratio.
///
/// The overall ratio is split evenly across the stages
/// (r_s = ratio^(1/n)), and each stage applies the isentropic temperature
/// relation corrected by the isentropic efficiency:
///
/// ```text
/// T_out = T_in·(1 + (r_s^((γ−1)/γ) − 1)/η)
/// ```
///
/// with γ re-evaluated at each stage inlet. The outlet pressure is exactly
/// the inlet pressure times the overall ratio; specific work accumulates
/// Σ cp·ΔT over the stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressorConfig {
    /// Number of stages, in [1, 20]
    pub stages: u32,
    /// Overall pressure ratio, in (1, 40]
    pub pressure_ratio: f64,
    /// Isentropic efficiency, in (0, 1]
    pub eta: f64,
}

impl CompressorConfig {
    pub fn new(stages: u32, pressure_ratio: f64, eta: f64) -> PartResult<Self> {
        let config = Self {
            stages,
            pressure_ratio,
            eta,
        };
        config.validate()?;
        Ok(config)
    }
}

impl PartModel for CompressorConfig {
    fn kind(&self) -> PartKind {
        PartKind::Compressor
    }

    fn validate(&self) -> PartResult<()> {
        if self.stages < 1 || self.stages > 20 {
            return Err(PartError::Configuration {
                field: "stages",
                reason: "must lie in [1, 20]",
            });
        }
        if !self.pressure_ratio.is_finite()
            || self.pressure_ratio <= 1.0
            || self.pressure_ratio > 40.0
        {
            return Err(PartError::Configuration {
                field: "pressure_ratio",
                reason: "must lie in (1, 40]",
            });
        }
        if !self.eta.is_finite() || self.eta <= 0.0 || self.eta > 1.0 {
            return Err(PartError::Configuration {
                field: "eta",
                reason: "must lie in (0, 1]",
            });
        }
        Ok(())
    }

    fn compute(&self, ctx: &StageContext<'_>, model: &dyn GasModel) -> PartResult<StageOutput> {
        let upstream = ctx.upstream.ok_or(PartError::MissingUpstream {
            part: PartKind::Compressor,
            requires: PartKind::Inlet,
        })?;
        self.validate()?;

        let comp = upstream.composition().clone();
        let t_in = upstream.temperature().value;
        let p_in = upstream.pressure().value;
        let n = self.stages;

        // Even split: stage boundary i sits at p_in·ratio^(i/n).
        let stage_pressure = |i: u32| -> f64 {
            if i == n {
                p_in * self.pressure_ratio
            } else {
                p_in * self.pressure_ratio.powf(i as f64 / n as f64)
            }
        };

        let samples_per_stage = (PATH_RESOLUTION / n as usize).max(2);
        let mut samples = Vec::with_capacity(n as usize * samples_per_stage + 1);
        samples.push(sample_at(model, &comp, t_in, p_in)?);

        let mut t = t_in;
        let mut specific_work = 0.0;
        let mut max_stage_rise: f64 = 0.0;

        for stage in 1..=n {
            let p_stage_in = stage_pressure(stage - 1);
            let p_stage_out = stage_pressure(stage);
            let r_s = p_stage_out / p_stage_in;

            let pack = model.property_pack(k(t), pa(p_stage_in), &comp)?;
            let gamma = pack.gamma;
            let cp = pack.cp;
            let exponent = (gamma - 1.0) / gamma;

            let t_next = t * (1.0 + (r_s.powf(exponent) - 1.0) / self.eta);
            specific_work += cp * (t_next - t);
            max_stage_rise = max_stage_rise.max(t_next - t);

            // Subdivide the stage along the same temperature law so the
            // rendered curve passes exactly through the stage boundaries.
            for i in 1..=samples_per_stage {
                let frac = i as f64 / samples_per_stage as f64;
                let p_frac = p_stage_in * r_s.powf(frac);
                let t_frac = t * (1.0 + (r_s.powf(frac * exponent) - 1.0) / self.eta);
                samples.push(sample_at(model, &comp, t_frac, p_frac)?);
            }

            t = t_next;
        }

        let p_out = p_in * self.pressure_ratio;
        let state = model.state_at(k(t), pa(p_out), upstream.mass_flow(), comp)?;
        let path = ProcessPath::from_samples(samples)?;

        let mut summary = PartSummary::new();
        summary.push("pressure_ratio", self.pressure_ratio);
        summary.push("stage_count", n as f64);
        summary.push("output_pressure_pa", p_out);
        summary.push("output_temperature_k", t);
        summary.push("temperature_rise_k", t - t_in);
        summary.push(SPECIFIC_WORK_KEY, specific_work);
        summary.push("max_stage_temperature_rise_k", max_stage_rise);
        summary.push(
            "entropy_change_j_per_kg_k",
            state.entropy() - upstream.entropy(),
        );

        Ok(StageOutput {
            state,
            path,
            summary,
        })
    }
}
