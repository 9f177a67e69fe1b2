//! Gas property model trait and validation helpers.

use crate::composition::Composition;
use crate::error::{GasError, GasResult};
use crate::state::{GasState, SpecEnthalpy, SpecEntropy, SpecHeatCapacity};
use jc_core::units::{Density, MassRate, Pressure, Temperature, Velocity};

/// Properties derived from one (temperature, pressure, composition) lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    /// Specific entropy [J/(kg·K)]
    pub entropy: SpecEntropy,
    /// Specific enthalpy [J/kg]
    pub enthalpy: SpecEnthalpy,
    /// Density [kg/m³]
    pub density: Density,
}

/// Batched properties from a single state.
///
/// Part transformations typically need cp, gamma, and the speed of sound from
/// the same state; computing them together avoids repeated mixture sums.
#[derive(Debug, Clone, Copy)]
pub struct GasPropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,
    /// Temperature [K]
    pub t: Temperature,
    /// Density [kg/m³]
    pub rho: Density,
    /// Specific enthalpy [J/kg]
    pub h: SpecEnthalpy,
    /// Specific entropy [J/(kg·K)]
    pub s: SpecEntropy,
    /// Specific heat capacity at constant pressure [J/(kg·K)]
    pub cp: SpecHeatCapacity,
    /// Heat capacity ratio γ = cp/cv (dimensionless)
    pub gamma: f64,
    /// Speed of sound [m/s]
    pub a: Velocity,
}

/// Trait for gas property models.
///
/// Implementations must be thread-safe (Send + Sync). All methods are pure
/// lookups: state in, properties out. Backends may cache mixture definitions
/// internally, but such caches must be invisible to callers.
pub trait GasModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Core provider contract: entropy, enthalpy, and density at
    /// (temperature, pressure, composition).
    ///
    /// Fails with [`GasError::InvalidState`] when the backend cannot resolve
    /// a physically meaningful state.
    fn properties(
        &self,
        t: Temperature,
        p: Pressure,
        comp: &Composition,
    ) -> GasResult<GasProperties>;

    /// Specific heat capacity at constant pressure [J/(kg·K)].
    fn cp(&self, t: Temperature, comp: &Composition) -> GasResult<SpecHeatCapacity>;

    /// Heat capacity ratio γ = cp/cv (dimensionless).
    fn gamma(&self, t: Temperature, comp: &Composition) -> GasResult<f64>;

    /// Speed of sound [m/s].
    fn speed_of_sound(&self, t: Temperature, comp: &Composition) -> GasResult<Velocity>;

    /// Compute a complete property pack in one call.
    ///
    /// Default implementation combines the individual methods; backends can
    /// override to share intermediate mixture sums.
    fn property_pack(
        &self,
        t: Temperature,
        p: Pressure,
        comp: &Composition,
    ) -> GasResult<GasPropertyPack> {
        let props = self.properties(t, p, comp)?;
        Ok(GasPropertyPack {
            p,
            t,
            rho: props.density,
            h: props.enthalpy,
            s: props.entropy,
            cp: self.cp(t, comp)?,
            gamma: self.gamma(t, comp)?,
            a: self.speed_of_sound(t, comp)?,
        })
    }

    /// Build a [`GasState`] snapshot with derived entropy/enthalpy filled in.
    fn state_at(
        &self,
        t: Temperature,
        p: Pressure,
        mass_flow: MassRate,
        comp: Composition,
    ) -> GasResult<GasState> {
        let props = self.properties(t, p, &comp)?;
        GasState::from_parts(t, p, mass_flow, props.entropy, props.enthalpy, comp)
    }

    /// Solve for the temperature at which the mixture enthalpy equals
    /// `h_target` [J/kg].
    ///
    /// Used for constant-pressure heat addition, where the outlet enthalpy is
    /// known from the energy balance. Enthalpy is monotone in temperature for
    /// a thermally perfect gas, so a bracketed solve is always well posed.
    fn temperature_from_enthalpy(
        &self,
        h_target: SpecEnthalpy,
        comp: &Composition,
    ) -> GasResult<Temperature>;
}

/// Validation helpers shared by backends.
pub(crate) mod validation {
    use super::*;

    pub fn validate_state_inputs(
        t: Temperature,
        p: Pressure,
    ) -> GasResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(GasError::InvalidState {
                what: "temperature must be positive and finite",
                t_k: t.value,
                p_pa: p.value,
            });
        }
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(GasError::InvalidState {
                what: "pressure must be positive and finite",
                t_k: t.value,
                p_pa: p.value,
            });
        }
        Ok(())
    }

    pub fn validate_gamma(gamma: f64) -> GasResult<f64> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(GasError::NonPhysical {
                what: "gamma must exceed 1 and be finite",
            });
        }
        Ok(gamma)
    }

    pub fn validate_cp(cp: f64) -> GasResult<f64> {
        if !cp.is_finite() || cp <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "cp must be positive and finite",
            });
        }
        Ok(cp)
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use jc_core::units::{k, pa};

    #[test]
    fn validate_inputs() {
        assert!(validate_state_inputs(k(300.0), pa(101_325.0)).is_ok());
        assert!(validate_state_inputs(k(-10.0), pa(101_325.0)).is_err());
        assert!(validate_state_inputs(k(300.0), pa(0.0)).is_err());
        assert!(validate_state_inputs(k(f64::NAN), pa(101_325.0)).is_err());
    }

    #[test]
    fn validate_gamma_physical() {
        assert!(validate_gamma(1.4).is_ok());
        assert!(validate_gamma(1.0).is_err());
        assert!(validate_gamma(f64::NAN).is_err());
    }

    #[test]
    fn validate_cp_positive() {
        assert!(validate_cp(1005.0).is_ok());
        assert!(validate_cp(0.0).is_err());
        assert!(validate_cp(-10.0).is_err());
    }
}
