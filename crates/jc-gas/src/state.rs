//! Immutable gas-state snapshots.

use crate::composition::Composition;
use crate::error::{GasError, GasResult};
use jc_core::units::{MassRate, Pressure, Temperature};

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEntropy = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Immutable snapshot of the working fluid at a station.
///
/// Entropy and enthalpy are derived quantities; a `GasState` is constructed
/// through a `GasModel` (see [`crate::model::GasModel::state_at`]) so the
/// derived fields always agree with (temperature, pressure, composition).
#[derive(Debug, Clone, PartialEq)]
pub struct GasState {
    t: Temperature,
    p: Pressure,
    mass_flow: MassRate,
    s: SpecEntropy,
    h: SpecEnthalpy,
    comp: Composition,
}

impl GasState {
    /// Assemble a snapshot from already-derived properties.
    ///
    /// Validates that temperature, pressure, and mass flow are positive and
    /// finite and that the derived fields are finite. Callers outside this
    /// crate should prefer `GasModel::state_at`.
    pub fn from_parts(
        t: Temperature,
        p: Pressure,
        mass_flow: MassRate,
        s: SpecEntropy,
        h: SpecEnthalpy,
        comp: Composition,
    ) -> GasResult<Self> {
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
        if !mass_flow.value.is_finite() || mass_flow.value <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "mass flow must be positive and finite",
            });
        }
        if !s.is_finite() || !h.is_finite() {
            return Err(GasError::NonPhysical {
                what: "derived entropy/enthalpy must be finite",
            });
        }

        Ok(Self {
            t,
            p,
            mass_flow,
            s,
            h,
            comp,
        })
    }

    pub fn temperature(&self) -> Temperature {
        self.t
    }

    pub fn pressure(&self) -> Pressure {
        self.p
    }

    pub fn mass_flow(&self) -> MassRate {
        self.mass_flow
    }

    /// Specific entropy [J/(kg·K)].
    pub fn entropy(&self) -> SpecEntropy {
        self.s
    }

    /// Specific enthalpy [J/kg].
    pub fn enthalpy(&self) -> SpecEnthalpy {
        self.h
    }

    pub fn composition(&self) -> &Composition {
        &self.comp
    }
}
