//! Compressible-flow relations shared by the part models.
//!
//! Isentropic total/static conversions and the fixed-point Mach solver used
//! to carry a given mass flow through a cross-sectional area.

use crate::error::{PartError, PartResult};
use jc_core::units::{k, pa};
use jc_gas::{Composition, GasModel};

/// Stagnation pressure for an isentropic process:
/// p_t = p·(1 + (γ−1)/2·M²)^(γ/(γ−1)).
pub fn total_pressure(p_static: f64, gamma: f64, mach: f64) -> f64 {
    p_static * (1.0 + 0.5 * (gamma - 1.0) * mach * mach).powf(gamma / (gamma - 1.0))
}

/// Stagnation temperature: T_t = T·(1 + (γ−1)/2·M²).
pub fn total_temperature(t_static: f64, gamma: f64, mach: f64) -> f64 {
    t_static * (1.0 + 0.5 * (gamma - 1.0) * mach * mach)
}

/// Static temperature back out of a stagnation temperature.
pub fn static_temperature(t_total: f64, gamma: f64, mach: f64) -> f64 {
    t_total / (1.0 + 0.5 * (gamma - 1.0) * mach * mach)
}

/// Static pressure from stagnation pressure and the temperature ratio:
/// p = p_t·(T/T_t)^(γ/(γ−1)).
pub fn static_pressure(p_total: f64, t_static: f64, t_total: f64, gamma: f64) -> f64 {
    p_total * (t_static / t_total).powf(gamma / (gamma - 1.0))
}

/// Result of one Mach-solver pass: the static state and Mach number at the
/// downstream plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachStep {
    pub mach: f64,
    pub t_static_k: f64,
    pub p_static_pa: f64,
}

/// Solve for the downstream Mach number carrying `mass_flow` through `area`.
///
/// Fixed-point iteration on the outlet velocity: guess a velocity, derive
/// the static state from the energy balance and the efficiency-degraded
/// stagnation pressure, re-evaluate density, and update the velocity from
/// continuity (v = ṁ/(ρ·A)) until successive guesses agree within `tol`.
pub fn mach_solver(
    model: &dyn GasModel,
    comp: &Composition,
    mass_flow_kg_s: f64,
    area_m2: f64,
    t_in_k: f64,
    p_in_pa: f64,
    eta: f64,
    mach_in: f64,
) -> PartResult<MachStep> {
    const MAX_ITERATIONS: usize = 100;
    const TOL_M_S: f64 = 0.01;

    let pack_in = model.property_pack(k(t_in_k), pa(p_in_pa), comp)?;
    let gamma_in = pack_in.gamma;
    let cp_in = pack_in.cp;
    let rho_in = pack_in.rho.value;
    let a_in = pack_in.a.value;

    let velocity_in = mach_in * a_in;
    let t_total_out = total_temperature(t_in_k, gamma_in, mach_in);

    // Stagnation pressure recovered through the passage, degraded by eta.
    let p_total_out = p_in_pa
        * (1.0 + eta * velocity_in * velocity_in / (2.0 * cp_in * t_in_k))
            .powf(gamma_in / (gamma_in - 1.0));

    // Initial guesses: incompressible continuity, inlet gas properties.
    let mut velocity_guess = mass_flow_kg_s / (rho_in * area_m2);
    let mut gamma_out = gamma_in;
    let mut cp_out = cp_in;

    for n_iter in 0..=MAX_ITERATIONS {
        // Energy balance between the planes with the current velocity guess.
        let t_static_out = t_in_k
            + velocity_in * velocity_in / (2.0 * cp_in)
            - velocity_guess * velocity_guess / (2.0 * cp_out);
        if t_static_out <= 0.0 {
            return Err(PartError::Convergence {
                what: "mach solver drove static temperature non-positive",
            });
        }
        let p_static_out = static_pressure(p_total_out, t_static_out, t_total_out, gamma_out);
        if p_static_out <= 0.0 || !p_static_out.is_finite() {
            return Err(PartError::Convergence {
                what: "mach solver drove static pressure non-physical",
            });
        }

        // Refresh gas properties (especially density) at the new state.
        let pack_out = model.property_pack(k(t_static_out), pa(p_static_out), comp)?;
        gamma_out = pack_out.gamma;
        cp_out = pack_out.cp;

        let velocity_out = velocity_guess;
        velocity_guess = mass_flow_kg_s / (pack_out.rho.value * area_m2);

        if (velocity_out - velocity_guess).abs() < TOL_M_S {
            tracing::debug!(n_iter, mach = velocity_out / pack_out.a.value, "mach solver converged");
            return Ok(MachStep {
                mach: velocity_out / pack_out.a.value,
                t_static_k: t_static_out,
                p_static_pa: p_static_out,
            });
        }
    }

    tracing::debug!(max_iterations = MAX_ITERATIONS, "mach solver exhausted its budget");
    Err(PartError::Convergence {
        what: "mach solver exceeded iteration budget",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_gas::{Composition, IdealGasModel};

    #[test]
    fn total_static_round_trip() {
        let gamma = 1.4;
        let mach = 0.8;
        let t_static = 288.15;
        let t_total = total_temperature(t_static, gamma, mach);
        assert!(t_total > t_static);
        let back = static_temperature(t_total, gamma, mach);
        assert!((back - t_static).abs() < 1e-9);
    }

    #[test]
    fn stagnation_pressure_ratio_at_mach_1() {
        // p_t/p at M=1, gamma=1.4 is about 1.893.
        let ratio = total_pressure(1.0, 1.4, 1.0);
        assert!((ratio - 1.8929).abs() < 1e-3, "ratio = {ratio}");
    }

    #[test]
    fn static_pressure_below_total() {
        let p_total = 200_000.0;
        let p = static_pressure(p_total, 280.0, 320.0, 1.4);
        assert!(p < p_total);
        assert!(p > 0.0);
    }

    #[test]
    fn zero_mach_is_identity() {
        assert_eq!(total_temperature(300.0, 1.4, 0.0), 300.0);
        assert_eq!(total_pressure(101_325.0, 1.4, 0.0), 101_325.0);
    }

    #[test]
    fn mach_solver_converges_for_inlet_conditions() {
        let model = IdealGasModel::new();
        let air = Composition::air();

        // Cruise intake: 10 km altitude conditions, 50 kg/s through 1 m².
        let step = mach_solver(&model, &air, 50.0, 1.0, 223.25, 26_500.0, 0.95, 0.8).unwrap();

        assert!(step.mach > 0.0 && step.mach < 1.5, "mach = {}", step.mach);
        assert!(step.t_static_k > 0.0);
        assert!(step.p_static_pa > 0.0);
    }

    #[test]
    fn mach_solver_slows_flow_in_larger_area() {
        let model = IdealGasModel::new();
        let air = Composition::air();

        let small = mach_solver(&model, &air, 50.0, 0.8, 223.25, 26_500.0, 0.95, 0.8).unwrap();
        let large = mach_solver(&model, &air, 50.0, 1.6, 223.25, 26_500.0, 0.95, 0.8).unwrap();

        assert!(
            large.mach < small.mach,
            "larger area should slow the flow: {} vs {}",
            large.mach,
            small.mach
        );
    }
}
