//! Working-fluid composition (normalized mass fractions).

use crate::error::{GasError, GasResult};
use crate::species::Species;
use jc_core::numeric::{Tolerances, nearly_equal};
use serde::{Deserialize, Serialize};

/// Mixture composition defined by normalized mass fractions.
///
/// The composition is always normalized (mass fractions sum to 1.0), so a
/// valid `Composition` never violates the state invariant on fraction sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Species and their mass fractions (always normalized to sum=1).
    items: Vec<(Species, f64)>,
}

impl Composition {
    /// Create a pure-species composition.
    pub fn pure(species: Species) -> Self {
        Self {
            items: vec![(species, 1.0)],
        }
    }

    /// Dry air with the reference intake composition
    /// (O₂ 0.209, N₂ 0.787, CO₂ 0.004 by mole).
    pub fn air() -> Self {
        let mole = [
            (Species::O2, 0.209),
            (Species::N2, 0.787),
            (Species::CO2, 0.004),
        ];
        let total_mass: f64 = mole.iter().map(|(s, x)| x * s.molar_mass()).sum();
        let items = mole
            .iter()
            .map(|&(s, x)| (s, x * s.molar_mass() / total_mass))
            .collect();
        Self { items }
    }

    /// Create a composition from mass fractions.
    ///
    /// Validates that all fractions are finite, non-negative, and have a
    /// positive sum, then normalizes to sum=1.
    pub fn from_mass_fractions(fractions: Vec<(Species, f64)>) -> GasResult<Self> {
        if fractions.is_empty() {
            return Err(GasError::InvalidArg {
                what: "empty composition",
            });
        }

        let mut sum = 0.0;
        for (_, frac) in &fractions {
            if !frac.is_finite() {
                return Err(GasError::NonPhysical {
                    what: "non-finite mass fraction",
                });
            }
            if *frac < 0.0 {
                return Err(GasError::NonPhysical {
                    what: "negative mass fraction",
                });
            }
            sum += frac;
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(GasError::NonPhysical {
                what: "mass fractions sum to zero or non-finite",
            });
        }

        // Normalize and drop negligible species
        let normalized: Vec<(Species, f64)> = fractions
            .into_iter()
            .map(|(s, f)| (s, f / sum))
            .filter(|(_, f)| *f > 1e-15)
            .collect();

        if normalized.is_empty() {
            return Err(GasError::NonPhysical {
                what: "all mass fractions negligible",
            });
        }

        Ok(Self { items: normalized })
    }

    /// Create a composition from mole fractions, converting via molar masses.
    pub fn from_mole_fractions(fractions: Vec<(Species, f64)>) -> GasResult<Self> {
        let mass: Vec<(Species, f64)> = fractions
            .into_iter()
            .map(|(s, x)| (s, x * s.molar_mass()))
            .collect();
        Self::from_mass_fractions(mass)
    }

    /// Get mass fraction of a species (0.0 if not present).
    pub fn mass_fraction(&self, species: Species) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Get mole fraction of a species (0.0 if not present).
    pub fn mole_fraction(&self, species: Species) -> f64 {
        let total_moles: f64 = self.items.iter().map(|(s, w)| w / s.molar_mass()).sum();
        self.mass_fraction(species) / species.molar_mass() / total_moles
    }

    /// Check if this is a pure-species composition.
    ///
    /// Returns `Some(species)` if exactly one species has fraction ≈1.0.
    pub fn is_pure(&self) -> Option<Species> {
        if self.items.len() == 1 {
            let (species, frac) = self.items[0];
            let tol = Tolerances {
                abs: 1e-10,
                rel: 1e-10,
            };
            if nearly_equal(frac, 1.0, tol) {
                return Some(species);
            }
        }
        None
    }

    /// Iterate over all species with non-zero mass fractions.
    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        self.items.iter().copied()
    }

    /// Mixture molar mass [kg/kmol]: M = 1 / Σ (w_i / M_i).
    pub fn molar_mass(&self) -> f64 {
        let inv: f64 = self
            .items
            .iter()
            .map(|(species, w)| w / species.molar_mass())
            .sum();
        1.0 / inv
    }

    /// Mixture specific gas constant [J/(kg·K)]: R = Σ w_i R_i.
    pub fn gas_constant(&self) -> f64 {
        self.items
            .iter()
            .map(|(species, w)| w * species.gas_constant())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        }
    }

    #[test]
    fn pure_composition() {
        let comp = Composition::pure(Species::N2);
        assert_eq!(comp.is_pure(), Some(Species::N2));
        assert_eq!(comp.mass_fraction(Species::N2), 1.0);
        assert_eq!(comp.mass_fraction(Species::O2), 0.0);
    }

    #[test]
    fn air_molar_mass() {
        // O2:0.209, N2:0.787, CO2:0.004 by mole gives roughly 28.9 kg/kmol.
        let air = Composition::air();
        assert!((air.molar_mass() - 28.91).abs() < 0.05);
        assert!((air.gas_constant() - 287.6).abs() < 1.0);
    }

    #[test]
    fn air_mole_fractions_recovered() {
        let air = Composition::air();
        assert!((air.mole_fraction(Species::O2) - 0.209).abs() < 1e-6);
        assert!((air.mole_fraction(Species::N2) - 0.787).abs() < 1e-6);
        assert!((air.mole_fraction(Species::CO2) - 0.004).abs() < 1e-6);
    }

    #[test]
    fn mass_fraction_normalization() {
        let comp = Composition::from_mass_fractions(vec![
            (Species::O2, 2.0),
            (Species::N2, 8.0),
        ])
        .unwrap();

        assert!(nearly_equal(comp.mass_fraction(Species::O2), 0.2, tol()));
        assert!(nearly_equal(comp.mass_fraction(Species::N2), 0.8, tol()));
    }

    #[test]
    fn mole_to_mass_conversion() {
        // Equimolar O2/N2: heavier O2 ends up above half by mass.
        let comp = Composition::from_mole_fractions(vec![
            (Species::O2, 0.5),
            (Species::N2, 0.5),
        ])
        .unwrap();
        assert!(comp.mass_fraction(Species::O2) > 0.5);
        assert!(nearly_equal(comp.mole_fraction(Species::O2), 0.5, tol()));
    }

    #[test]
    fn invalid_negative_fraction() {
        let result =
            Composition::from_mass_fractions(vec![(Species::O2, -0.5), (Species::N2, 1.5)]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_zero_sum() {
        let result =
            Composition::from_mass_fractions(vec![(Species::O2, 0.0), (Species::N2, 0.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_non_finite() {
        let result = Composition::from_mass_fractions(vec![(Species::O2, f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn fractions_sum_to_one() {
        let comp = Composition::from_mass_fractions(vec![
            (Species::O2, 1.0),
            (Species::N2, 2.0),
            (Species::Ar, 3.0),
        ])
        .unwrap();

        let sum: f64 = comp.iter().map(|(_, f)| f).sum();
        assert!(nearly_equal(sum, 1.0, tol()));
    }
}
