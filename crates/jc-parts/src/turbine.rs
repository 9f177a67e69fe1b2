//! Turbine (work extraction) model.

use crate::config::{PartModel, StageContext, StageOutput};
use crate::error::{PartError, PartResult};
use crate::kinds::PartKind;
use crate::path::{PATH_RESOLUTION, ProcessPath, sample_at};
use crate::summary::PartSummary;
use jc_core::units::{k, pa};
use jc_gas::{GasError, GasModel};
use serde::{Deserialize, Serialize};

/// Multi-stage turbine extracting the work the chain's compressor absorbs.
///
/// The demand is the compressor's specific work divided by the mechanical
/// loss factor, split evenly across the stages. Each stage expands through
/// the isentropic relation degraded by the stage efficiency:
///
/// ```text
/// T' = T − w_stage/(cp·η)            (ideal temperature for the pressure drop)
/// p_out = p·(T'/T)^(γ/(γ−1))
/// T_out = T − w_stage/cp             (actual drop: the extracted work)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineConfig {
    /// Number of stages, in [1, 10]
    pub stages: u32,
    /// Isentropic efficiency, in (0, 1]
    pub eta: f64,
    /// Mechanical transmission factor between turbine and compressor,
    /// in [0.6, 1]
    pub mechanical_loss: f64,
}

impl TurbineConfig {
    pub fn new(stages: u32, eta: f64, mechanical_loss: f64) -> PartResult<Self> {
        let config = Self {
            stages,
            eta,
            mechanical_loss,
        };
        config.validate()?;
        Ok(config)
    }
}

impl PartModel for TurbineConfig {
    fn kind(&self) -> PartKind {
        PartKind::Turbine
    }

    fn validate(&self) -> PartResult<()> {
        if self.stages < 1 || self.stages > 10 {
            return Err(PartError::Configuration {
                field: "stages",
                reason: "must lie in [1, 10]",
            });
        }
        if !self.eta.is_finite() || self.eta <= 0.0 || self.eta > 1.0 {
            return Err(PartError::Configuration {
                field: "eta",
                reason: "must lie in (0, 1]",
            });
        }
        if !self.mechanical_loss.is_finite()
            || !(0.6..=1.0).contains(&self.mechanical_loss)
        {
            return Err(PartError::Configuration {
                field: "mechanical_loss",
                reason: "must lie in [0.6, 1]",
            });
        }
        Ok(())
    }

    fn compute(&self, ctx: &StageContext<'_>, model: &dyn GasModel) -> PartResult<StageOutput> {
        let upstream = ctx.upstream.ok_or(PartError::MissingUpstream {
            part: PartKind::Turbine,
            requires: PartKind::Combustor,
        })?;
        // The work demand comes from the chain's compressor; a turbine in a
        // chain without one has nothing to balance.
        let compressor_work =
            ctx.compressor_work_j_per_kg
                .ok_or(PartError::MissingUpstream {
                    part: PartKind::Turbine,
                    requires: PartKind::Compressor,
                })?;
        self.validate()?;

        let comp = upstream.composition().clone();
        let t_in = upstream.temperature().value;
        let p_in = upstream.pressure().value;

        let work_required = compressor_work / self.mechanical_loss;
        let w_stage = work_required / self.stages as f64;

        let samples_per_stage = (PATH_RESOLUTION / self.stages as usize).max(2);
        let mut samples = Vec::with_capacity(self.stages as usize * samples_per_stage + 1);
        samples.push(sample_at(model, &comp, t_in, p_in)?);

        let mut t = t_in;
        let mut p = p_in;
        for _stage in 0..self.stages {
            let pack = model.property_pack(k(t), pa(p), &comp)?;
            let cp = pack.cp;
            let gamma = pack.gamma;

            let t_prime = t - w_stage / (cp * self.eta);
            if t_prime <= 0.0 {
                return Err(PartError::InvalidState(GasError::NonPhysical {
                    what: "turbine work demand exceeds available enthalpy",
                }));
            }
            let p_next = p * (t_prime / t).powf(gamma / (gamma - 1.0));
            let t_next = t - w_stage / cp;

            for i in 1..=samples_per_stage {
                let frac = i as f64 / samples_per_stage as f64;
                let t_frac = t + (t_next - t) * frac;
                let p_frac = p * (p_next / p).powf(frac);
                samples.push(sample_at(model, &comp, t_frac, p_frac)?);
            }

            t = t_next;
            p = p_next;
        }

        let state = model.state_at(k(t), pa(p), upstream.mass_flow(), comp)?;
        let path = ProcessPath::from_samples(samples)?;

        let mut summary = PartSummary::new();
        summary.push("stage_count", self.stages as f64);
        summary.push("work_extracted_j_per_kg", work_required);
        summary.push("expansion_ratio", p_in / p);
        summary.push("output_pressure_pa", p);
        summary.push("output_temperature_k", t);
        summary.push("temperature_drop_k", t_in - t);
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
