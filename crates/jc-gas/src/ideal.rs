//! Ideal-gas-mixture property backend.

use crate::composition::Composition;
use crate::error::{GasError, GasResult};
use crate::model::{GasModel, GasProperties, validation};
use crate::nasa::poly_for;
use crate::state::{SpecEnthalpy, SpecHeatCapacity};
use jc_core::units::constants::P_REF_PA;
use jc_core::units::{Pressure, Temperature, Velocity, kg_m3, mps};

/// Ideal mixture of thermally perfect gases.
///
/// Per-species cp, enthalpy, and standard-state entropy come from NASA-7
/// polynomials; mixture values are mass-fraction weighted. The pressure
/// dependence of entropy uses the mixture gas constant:
///
/// ```text
/// s(T, p) = Σ wᵢ·s°ᵢ(T) − R_mix·ln(p/p_ref)
/// ```
///
/// Density follows the ideal gas law, ρ = p / (R_mix·T). Valid over the
/// polynomial fit range (200–3500 K), which spans a gas-turbine cycle from
/// cold intake to combustor exit.
pub struct IdealGasModel {
    // Coefficient tables are static; the model itself carries no state.
}

impl IdealGasModel {
    pub fn new() -> Self {
        Self {}
    }

    /// Mixture specific enthalpy [J/kg], including enthalpies of formation.
    fn enthalpy_mix(&self, t_k: f64, comp: &Composition) -> GasResult<SpecEnthalpy> {
        let mut h = 0.0;
        for (species, w) in comp.iter() {
            let h_rt = poly_for(species).h_rt(t_k)?;
            h += w * h_rt * species.gas_constant() * t_k;
        }
        Ok(h)
    }

    /// Mixture specific heat at constant pressure [J/(kg·K)].
    fn cp_mix(&self, t_k: f64, comp: &Composition) -> GasResult<SpecHeatCapacity> {
        let mut cp = 0.0;
        for (species, w) in comp.iter() {
            let cp_r = poly_for(species).cp_r(t_k)?;
            cp += w * cp_r * species.gas_constant();
        }
        validation::validate_cp(cp)
    }

    /// Mixture specific entropy [J/(kg·K)] at (T, p).
    fn entropy_mix(&self, t_k: f64, p_pa: f64, comp: &Composition) -> GasResult<f64> {
        let mut s = 0.0;
        for (species, w) in comp.iter() {
            let s_r = poly_for(species).s_r(t_k)?;
            s += w * s_r * species.gas_constant();
        }
        Ok(s - comp.gas_constant() * (p_pa / P_REF_PA).ln())
    }
}

impl Default for IdealGasModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GasModel for IdealGasModel {
    fn name(&self) -> &str {
        "ideal-gas-mixture"
    }

    fn properties(
        &self,
        t: Temperature,
        p: Pressure,
        comp: &Composition,
    ) -> GasResult<GasProperties> {
        validation::validate_state_inputs(t, p)?;
        let t_k = t.value;
        let p_pa = p.value;

        let enthalpy = self.enthalpy_mix(t_k, comp)?;
        let entropy = self.entropy_mix(t_k, p_pa, comp)?;
        let rho = p_pa / (comp.gas_constant() * t_k);
        if !rho.is_finite() || rho <= 0.0 {
            return Err(GasError::InvalidState {
                what: "density must be positive and finite",
                t_k,
                p_pa,
            });
        }

        Ok(GasProperties {
            entropy,
            enthalpy,
            density: kg_m3(rho),
        })
    }

    fn cp(&self, t: Temperature, comp: &Composition) -> GasResult<SpecHeatCapacity> {
        self.cp_mix(t.value, comp)
    }

    fn gamma(&self, t: Temperature, comp: &Composition) -> GasResult<f64> {
        let cp = self.cp_mix(t.value, comp)?;
        let r = comp.gas_constant();
        validation::validate_gamma(cp / (cp - r))
    }

    fn speed_of_sound(&self, t: Temperature, comp: &Composition) -> GasResult<Velocity> {
        let gamma = self.gamma(t, comp)?;
        let a = (gamma * comp.gas_constant() * t.value).sqrt();
        Ok(mps(a))
    }

    /// Bracketed bisection over the fit range; enthalpy is monotone in T.
    fn temperature_from_enthalpy(
        &self,
        h_target: SpecEnthalpy,
        comp: &Composition,
    ) -> GasResult<Temperature> {
        const T_MIN: f64 = 200.0;
        const T_MAX: f64 = 3500.0;
        const MAX_ITER: usize = 100;

        if !h_target.is_finite() {
            return Err(GasError::InvalidArg {
                what: "target enthalpy must be finite",
            });
        }

        let h_low = self.enthalpy_mix(T_MIN, comp)?;
        let h_high = self.enthalpy_mix(T_MAX, comp)?;
        if h_target < h_low || h_target > h_high {
            return Err(GasError::ConvergenceFailed {
                what: "enthalpy outside tabulated temperature range",
            });
        }

        let mut t_low = T_MIN;
        let mut t_high = T_MAX;
        for _ in 0..MAX_ITER {
            let t_mid = 0.5 * (t_low + t_high);
            let h_mid = self.enthalpy_mix(t_mid, comp)?;

            let tol = 1.0_f64.max(h_target.abs() * 1e-9);
            if (h_mid - h_target).abs() < tol {
                return Ok(jc_core::units::k(t_mid));
            }

            if h_mid < h_target {
                t_low = t_mid;
            } else {
                t_high = t_mid;
            }
        }

        Ok(jc_core::units::k(0.5 * (t_low + t_high)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_core::units::{k, pa};

    fn model() -> IdealGasModel {
        IdealGasModel::new()
    }

    #[test]
    fn air_density_at_sea_level() {
        let props = model()
            .properties(k(288.15), pa(101_325.0), &Composition::air())
            .unwrap();
        // Ideal gas with R ≈ 287.6 gives about 1.223 kg/m³.
        assert!((props.density.value - 1.223).abs() < 0.01);
    }

    #[test]
    fn air_cp_and_gamma_at_room_temperature() {
        let air = Composition::air();
        let cp = model().cp(k(300.0), &air).unwrap();
        let gamma = model().gamma(k(300.0), &air).unwrap();
        assert!((cp - 1005.0).abs() < 15.0, "cp = {cp}");
        assert!((gamma - 1.40).abs() < 0.01, "gamma = {gamma}");
    }

    #[test]
    fn speed_of_sound_at_room_temperature() {
        let a = model()
            .speed_of_sound(k(288.15), &Composition::air())
            .unwrap();
        assert!((a.value - 340.0).abs() < 3.0, "a = {}", a.value);
    }

    #[test]
    fn entropy_increases_with_temperature() {
        let air = Composition::air();
        let m = model();
        let s1 = m.properties(k(300.0), pa(101_325.0), &air).unwrap().entropy;
        let s2 = m.properties(k(600.0), pa(101_325.0), &air).unwrap().entropy;
        assert!(s2 > s1);
    }

    #[test]
    fn entropy_decreases_with_pressure() {
        let air = Composition::air();
        let m = model();
        let s1 = m.properties(k(300.0), pa(101_325.0), &air).unwrap().entropy;
        let s2 = m.properties(k(300.0), pa(1_013_250.0), &air).unwrap().entropy;
        assert!(s2 < s1);
    }

    #[test]
    fn rejects_non_physical_inputs() {
        let air = Composition::air();
        let m = model();
        assert!(matches!(
            m.properties(k(-5.0), pa(101_325.0), &air),
            Err(GasError::InvalidState { .. })
        ));
        assert!(matches!(
            m.properties(k(300.0), pa(-1.0), &air),
            Err(GasError::InvalidState { .. })
        ));
    }

    #[test]
    fn enthalpy_inversion_round_trips() {
        let air = Composition::air();
        let m = model();
        for t_k in [250.0, 400.0, 900.0, 1800.0] {
            let h = m
                .properties(k(t_k), pa(101_325.0), &air)
                .unwrap()
                .enthalpy;
            let t_back = m.temperature_from_enthalpy(h, &air).unwrap();
            assert!(
                (t_back.value - t_k).abs() < 0.01,
                "round trip at {t_k} K gave {} K",
                t_back.value
            );
        }
    }

    #[test]
    fn property_pack_matches_individual_calls() {
        let air = Composition::air();
        let m = model();
        let pack = m.property_pack(k(400.0), pa(200_000.0), &air).unwrap();
        let props = m.properties(k(400.0), pa(200_000.0), &air).unwrap();
        assert_eq!(pack.h, props.enthalpy);
        assert_eq!(pack.s, props.entropy);
        assert_eq!(pack.cp, m.cp(k(400.0), &air).unwrap());
    }

    #[test]
    fn state_at_fills_derived_fields() {
        use jc_core::units::kgps;
        let m = model();
        let state = m
            .state_at(k(300.0), pa(101_325.0), kgps(50.0), Composition::air())
            .unwrap();
        let props = m
            .properties(k(300.0), pa(101_325.0), &Composition::air())
            .unwrap();
        assert_eq!(state.entropy(), props.entropy);
        assert_eq!(state.enthalpy(), props.enthalpy);
    }
}
