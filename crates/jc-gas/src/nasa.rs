//! NASA 7-coefficient thermodynamic polynomials.
//!
//! Each species carries two coefficient sets fitted over adjoining
//! temperature ranges. Non-dimensional forms:
//!
//! ```text
//! cp/R  = a0 + a1·T + a2·T² + a3·T³ + a4·T⁴
//! h/RT  = a0 + a1/2·T + a2/3·T² + a3/4·T³ + a4/5·T⁴ + a5/T
//! s°/R  = a0·ln T + a1·T + a2/2·T² + a3/3·T³ + a4/4·T⁴ + a6
//! ```
//!
//! Enthalpy includes the enthalpy of formation (through a5), so adiabatic
//! combustion is a plain enthalpy balance over reactants and products.

use crate::error::{GasError, GasResult};
use crate::species::Species;

/// Two-range NASA-7 fit for one species.
#[derive(Debug, Clone, Copy)]
pub struct NasaPoly {
    /// Lower bound of the low-temperature range [K].
    pub t_min: f64,
    /// Switch point between the two coefficient sets [K].
    pub t_mid: f64,
    /// Upper bound of the high-temperature range [K].
    pub t_max: f64,
    pub low: [f64; 7],
    pub high: [f64; 7],
}

impl NasaPoly {
    fn coeffs_at(&self, t_k: f64) -> GasResult<&[f64; 7]> {
        if !(self.t_min..=self.t_max).contains(&t_k) {
            return Err(GasError::OutOfRange {
                t_k,
                min_k: self.t_min,
                max_k: self.t_max,
            });
        }
        if t_k < self.t_mid {
            Ok(&self.low)
        } else {
            Ok(&self.high)
        }
    }

    /// Non-dimensional cp/R at `t_k`.
    pub fn cp_r(&self, t_k: f64) -> GasResult<f64> {
        let a = self.coeffs_at(t_k)?;
        Ok(a[0] + t_k * (a[1] + t_k * (a[2] + t_k * (a[3] + t_k * a[4]))))
    }

    /// Non-dimensional h/(R·T) at `t_k`, including enthalpy of formation.
    pub fn h_rt(&self, t_k: f64) -> GasResult<f64> {
        let a = self.coeffs_at(t_k)?;
        Ok(a[0]
            + t_k
                * (a[1] / 2.0 + t_k * (a[2] / 3.0 + t_k * (a[3] / 4.0 + t_k * a[4] / 5.0)))
            + a[5] / t_k)
    }

    /// Non-dimensional standard-state entropy s°/R at `t_k`.
    pub fn s_r(&self, t_k: f64) -> GasResult<f64> {
        let a = self.coeffs_at(t_k)?;
        Ok(a[0] * t_k.ln()
            + t_k * (a[1] + t_k * (a[2] / 2.0 + t_k * (a[3] / 3.0 + t_k * a[4] / 4.0)))
            + a[6])
    }
}

/// Coefficient table for the supported species (GRI-Mech 3.0 fits for the
/// air constituents and combustion products; JetSurF fit for n-dodecane).
pub fn poly_for(species: Species) -> &'static NasaPoly {
    match species {
        Species::N2 => &N2_POLY,
        Species::O2 => &O2_POLY,
        Species::Ar => &AR_POLY,
        Species::CO2 => &CO2_POLY,
        Species::H2O => &H2O_POLY,
        Species::C12H26 => &C12H26_POLY,
    }
}

static N2_POLY: NasaPoly = NasaPoly {
    t_min: 200.0,
    t_mid: 1000.0,
    t_max: 3500.0,
    low: [
        3.298677,
        1.4082404e-3,
        -3.963222e-6,
        5.641515e-9,
        -2.444854e-12,
        -1020.8999,
        3.950372,
    ],
    high: [
        2.92664,
        1.4879768e-3,
        -5.68476e-7,
        1.0097038e-10,
        -6.753351e-15,
        -922.7977,
        5.980528,
    ],
};

static O2_POLY: NasaPoly = NasaPoly {
    t_min: 200.0,
    t_mid: 1000.0,
    t_max: 3500.0,
    low: [
        3.78245636,
        -2.99673416e-3,
        9.84730201e-6,
        -9.68129509e-9,
        3.24372837e-12,
        -1063.94356,
        3.65767573,
    ],
    high: [
        3.28253784,
        1.48308754e-3,
        -7.57966669e-7,
        2.09470555e-10,
        -2.16717794e-14,
        -1088.45772,
        5.45323129,
    ],
};

static AR_POLY: NasaPoly = NasaPoly {
    t_min: 200.0,
    t_mid: 1000.0,
    t_max: 3500.0,
    low: [2.5, 0.0, 0.0, 0.0, 0.0, -745.375, 4.366],
    high: [2.5, 0.0, 0.0, 0.0, 0.0, -745.375, 4.366],
};

static CO2_POLY: NasaPoly = NasaPoly {
    t_min: 200.0,
    t_mid: 1000.0,
    t_max: 3500.0,
    low: [
        2.35677352,
        8.98459677e-3,
        -7.12356269e-6,
        2.45919022e-9,
        -1.43699548e-13,
        -48371.9697,
        9.90105222,
    ],
    high: [
        3.85746029,
        4.41437026e-3,
        -2.21481404e-6,
        5.23490188e-10,
        -4.72084164e-14,
        -48759.166,
        2.27163806,
    ],
};

static H2O_POLY: NasaPoly = NasaPoly {
    t_min: 200.0,
    t_mid: 1000.0,
    t_max: 3500.0,
    low: [
        4.19864056,
        -2.0364341e-3,
        6.52040211e-6,
        -5.48797062e-9,
        1.77197817e-12,
        -30293.7267,
        -0.849032208,
    ],
    high: [
        3.03399249,
        2.17691804e-3,
        -1.64072518e-7,
        -9.7041987e-11,
        1.68200992e-14,
        -30004.2971,
        4.9667701,
    ],
};

static C12H26_POLY: NasaPoly = NasaPoly {
    t_min: 200.0,
    t_mid: 1391.0,
    t_max: 3500.0,
    low: [
        -2.62181594,
        1.47237711e-1,
        -9.43970271e-5,
        3.07441268e-8,
        -4.0360223e-12,
        -4.00654253e4,
        5.00994626e1,
    ],
    high: [
        3.85095037e1,
        5.63550048e-2,
        -1.914932e-5,
        2.96024862e-9,
        -1.7124415e-13,
        -5.48843465e4,
        -1.72670922e2,
    ],
};
