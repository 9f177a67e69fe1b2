//! Inlet (intake diffuser) model.

use crate::config::{PartModel, StageContext, StageOutput};
use crate::error::{PartError, PartResult};
use crate::kinds::PartKind;
use crate::path::{PATH_RESOLUTION, ProcessPath, sample_leg};
use crate::summary::PartSummary;
use crate::thermo;
use jc_core::units::{k, kgps, pa};
use jc_gas::{Composition, GasModel};
use jc_isa::{AltitudeUnit, IsaError, isa_pressure, isa_temperature};
use serde::{Deserialize, Serialize};

/// Subsonic intake with adiabatic diffusion.
///
/// Ambient conditions come from the standard atmosphere at the flight
/// altitude. The flow is decelerated in two legs — ambient to the entrance
/// plane (area A1), then entrance to the compressor face (area A2) — each
/// solved with the fixed-point Mach solver. The part's output is the
/// recovered stagnation state:
///
/// ```text
/// T_out = T_amb·(1 + (γ−1)/2·M²)                      (adiabatic)
/// p_out = p_amb·(1 + η·(γ−1)/2·M²)^(γ/(γ−1))          (η-degraded recovery)
/// ```
///
/// With η = 1 the output pressure equals the ambient stagnation pressure;
/// any η < 1 recovers strictly less.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InletConfig {
    /// Flight altitude [m]
    pub altitude_m: f64,
    /// Flight Mach number
    pub mach: f64,
    /// Intake mass flow [kg/s]
    pub mass_flow_kg_s: f64,
    /// Entrance cross-sectional area A1 [m²]
    pub entrance_area_m2: f64,
    /// Compressor-face cross-sectional area A2 [m²]
    pub face_area_m2: f64,
    /// Diffusion isentropic efficiency, in (0, 1]
    pub eta: f64,
}

impl InletConfig {
    pub fn new(
        altitude_m: f64,
        mach: f64,
        mass_flow_kg_s: f64,
        entrance_area_m2: f64,
        face_area_m2: f64,
        eta: f64,
    ) -> PartResult<Self> {
        let config = Self {
            altitude_m,
            mach,
            mass_flow_kg_s,
            entrance_area_m2,
            face_area_m2,
            eta,
        };
        config.validate()?;
        Ok(config)
    }
}

impl PartModel for InletConfig {
    fn kind(&self) -> PartKind {
        PartKind::Inlet
    }

    fn validate(&self) -> PartResult<()> {
        if !self.altitude_m.is_finite() || !(0.0..=15_000.0).contains(&self.altitude_m) {
            return Err(PartError::Configuration {
                field: "altitude_m",
                reason: "must lie in [0, 15000] m",
            });
        }
        if !self.mach.is_finite() || !(0.0..=5.0).contains(&self.mach) {
            return Err(PartError::Configuration {
                field: "mach",
                reason: "must lie in [0, 5]",
            });
        }
        if !self.mass_flow_kg_s.is_finite()
            || self.mass_flow_kg_s <= 0.0
            || self.mass_flow_kg_s > 250.0
        {
            return Err(PartError::Configuration {
                field: "mass_flow_kg_s",
                reason: "must lie in (0, 250] kg/s",
            });
        }
        if !self.entrance_area_m2.is_finite()
            || !(0.05..=20.0).contains(&self.entrance_area_m2)
        {
            return Err(PartError::Configuration {
                field: "entrance_area_m2",
                reason: "must lie in [0.05, 20] m²",
            });
        }
        if !self.face_area_m2.is_finite() || !(0.05..=20.0).contains(&self.face_area_m2) {
            return Err(PartError::Configuration {
                field: "face_area_m2",
                reason: "must lie in [0.05, 20] m²",
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
        if ctx.upstream.is_some() {
            return Err(PartError::Configuration {
                field: "upstream",
                reason: "an inlet takes no upstream part",
            });
        }
        self.validate()?;

        let air = Composition::air();
        let t_amb = isa_temperature(self.altitude_m, AltitudeUnit::Meter)
            .map_err(altitude_error)?;
        let p_amb = isa_pressure(self.altitude_m, AltitudeUnit::Meter)
            .map_err(altitude_error)?;

        let pack_amb = model.property_pack(k(t_amb), pa(p_amb), &air)?;
        let gamma = pack_amb.gamma;
        let cp = pack_amb.cp;

        let t_total = thermo::total_temperature(t_amb, gamma, self.mach);
        let p_total_ideal = thermo::total_pressure(p_amb, gamma, self.mach);

        // Efficiency-degraded stagnation pressure recovery.
        let v_flight = self.mach * pack_amb.a.value;
        let p_total = p_amb
            * (1.0 + self.eta * v_flight * v_flight / (2.0 * cp * t_amb))
                .powf(gamma / (gamma - 1.0));

        // Two diffusion legs: ambient -> entrance (A1), entrance -> face (A2).
        let entrance = thermo::mach_solver(
            model,
            &air,
            self.mass_flow_kg_s,
            self.entrance_area_m2,
            t_amb,
            p_amb,
            self.eta,
            self.mach,
        )?;
        let face = thermo::mach_solver(
            model,
            &air,
            self.mass_flow_kg_s,
            self.face_area_m2,
            entrance.t_static_k,
            entrance.p_static_pa,
            self.eta,
            entrance.mach,
        )?;

        // Three legs: the two diffusion passages, then recovery to the
        // stagnation state handed downstream, so the path ends exactly at
        // the part's output and the next segment continues without a jump.
        let mut samples = Vec::with_capacity(PATH_RESOLUTION * 2);
        let leg_count = PATH_RESOLUTION / 2;
        sample_leg(
            &mut samples,
            model,
            &air,
            (t_amb, p_amb),
            (entrance.t_static_k, entrance.p_static_pa),
            leg_count,
            true,
        )?;
        sample_leg(
            &mut samples,
            model,
            &air,
            (entrance.t_static_k, entrance.p_static_pa),
            (face.t_static_k, face.p_static_pa),
            leg_count,
            false,
        )?;
        sample_leg(
            &mut samples,
            model,
            &air,
            (face.t_static_k, face.p_static_pa),
            (t_total, p_total),
            leg_count,
            false,
        )?;
        let path = ProcessPath::from_samples(samples)?;

        let state = model.state_at(
            k(t_total),
            pa(p_total),
            kgps(self.mass_flow_kg_s),
            air.clone(),
        )?;

        let s_amb = model.properties(k(t_amb), pa(p_amb), &air)?.entropy;
        let mut summary = PartSummary::new();
        summary.push("ambient_temperature_k", t_amb);
        summary.push("ambient_pressure_pa", p_amb);
        summary.push("total_temperature_k", t_total);
        summary.push("output_pressure_pa", p_total);
        summary.push("pressure_recovery", p_total / p_total_ideal);
        summary.push("temperature_rise_k", t_total - t_amb);
        summary.push("entrance_mach", entrance.mach);
        summary.push("face_mach", face.mach);
        summary.push("entropy_change_j_per_kg_k", state.entropy() - s_amb);

        Ok(StageOutput {
            state,
            path,
            summary,
        })
    }
}

fn altitude_error(_: IsaError) -> PartError {
    PartError::Configuration {
        field: "altitude_m",
        reason: "outside standard-atmosphere range",
    }
}
