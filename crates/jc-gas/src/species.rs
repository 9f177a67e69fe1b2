//! Chemical species definitions.

use jc_core::units::constants::R_UNIVERSAL_J_PER_KMOL_K;
use serde::{Deserialize, Serialize};

/// Chemical species of the working fluid across a gas-turbine cycle:
/// the constituents of dry air plus the fuel and its complete-combustion
/// products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Argon (Ar)
    Ar,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Water vapor (H₂O)
    H2O,
    /// n-Dodecane (C₁₂H₂₆), kerosene-class surrogate fuel
    C12H26,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::N2,
        Species::O2,
        Species::Ar,
        Species::CO2,
        Species::H2O,
        Species::C12H26,
    ];

    /// Molar mass [kg/kmol].
    pub fn molar_mass(self) -> f64 {
        match self {
            Species::N2 => 28.0134,
            Species::O2 => 31.9988,
            Species::Ar => 39.948,
            Species::CO2 => 44.0095,
            Species::H2O => 18.0153,
            Species::C12H26 => 170.3348,
        }
    }

    /// Specific gas constant [J/(kg·K)].
    pub fn gas_constant(self) -> f64 {
        R_UNIVERSAL_J_PER_KMOL_K / self.molar_mass()
    }

    /// Canonical symbol, as used in part records and engine files.
    pub fn symbol(self) -> &'static str {
        match self {
            Species::N2 => "N2",
            Species::O2 => "O2",
            Species::Ar => "Ar",
            Species::CO2 => "CO2",
            Species::H2O => "H2O",
            Species::C12H26 => "C12H26",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.symbol() == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        for species in Species::ALL {
            assert_eq!(Species::from_symbol(species.symbol()), Some(species));
        }
        assert_eq!(Species::from_symbol("XeF6"), None);
    }

    #[test]
    fn gas_constants_are_sane() {
        // R for N2 is about 296.8 J/(kg·K); air sits near 287.
        assert!((Species::N2.gas_constant() - 296.8).abs() < 0.5);
        assert!((Species::O2.gas_constant() - 259.8).abs() < 0.5);
    }
}
