//! jc-isa: International Standard Atmosphere lookups.
//!
//! Ambient temperature, pressure, and density as a function of pressure
//! altitude, covering the troposphere (linear lapse) and the lower
//! stratosphere (isothermal), up to the stratopause. Ratio forms
//! (theta/delta/sigma) and inverse lookups (altitude from pressure or
//! density) are provided for flight-condition setup.

use thiserror::Error;

/// Sea-level standard temperature [K].
pub const T_SL_K: f64 = 288.15;
/// Sea-level standard pressure [Pa].
pub const P_SL_PA: f64 = 101_325.0;
/// Sea-level standard density [kg/m³].
pub const RHO_SL_KG_M3: f64 = 1.225;
/// Specific gas constant of air [J/(kg·K)].
pub const R_AIR: f64 = 287.053;
/// Standard acceleration of gravity [m/s²].
pub const G_STD: f64 = 9.8067;
/// Tropospheric temperature lapse rate [K/m].
pub const LAPSE_K_PER_M: f64 = -6.5e-3;
/// Geopotential altitude of the tropopause [m].
pub const H_TROPOPAUSE_M: f64 = 11_000.0;
/// Geopotential altitude of the stratopause [m]; lookups above this fail.
pub const H_STRATOPAUSE_M: f64 = 47_000.0;
/// Temperature throughout the isothermal layer [K].
pub const T_STRATOSPHERE_K: f64 = 216.65;

/// Unit of a user-supplied altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeUnit {
    Meter,
    Feet,
    Kilometer,
}

impl AltitudeUnit {
    /// Conversion factor to meters.
    pub fn to_meters(self) -> f64 {
        match self {
            AltitudeUnit::Meter => 1.0,
            AltitudeUnit::Feet => 0.3048,
            AltitudeUnit::Kilometer => 1000.0,
        }
    }
}

pub type IsaResult<T> = Result<T, IsaError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IsaError {
    #[error("Altitude {altitude_m} m outside supported range [0, {max_m}] m")]
    AltitudeOutOfRange { altitude_m: f64, max_m: f64 },

    #[error("Ratio {value} is not invertible (must be in (0, 1])")]
    RatioNotInvertible { value: f64 },

    #[error("Non-finite altitude input: {value}")]
    NonFinite { value: f64 },
}

fn altitude_m(altitude: f64, unit: AltitudeUnit) -> IsaResult<f64> {
    if !altitude.is_finite() {
        return Err(IsaError::NonFinite { value: altitude });
    }
    let h = altitude * unit.to_meters();
    if !(0.0..=H_STRATOPAUSE_M).contains(&h) {
        return Err(IsaError::AltitudeOutOfRange {
            altitude_m: h,
            max_m: H_STRATOPAUSE_M,
        });
    }
    Ok(h)
}

/// Pressure exponent of the tropospheric temperature ratio: -g / (L·R).
fn troposphere_exponent() -> f64 {
    -G_STD / (LAPSE_K_PER_M * R_AIR)
}

/// Temperature ratio theta = T/T_sl at `altitude` in `unit`.
pub fn isa_theta(altitude: f64, unit: AltitudeUnit) -> IsaResult<f64> {
    let h = altitude_m(altitude, unit)?;
    if h <= H_TROPOPAUSE_M {
        Ok(1.0 + LAPSE_K_PER_M * h / T_SL_K)
    } else {
        Ok(T_STRATOSPHERE_K / T_SL_K)
    }
}

/// Pressure ratio delta = p/p_sl at `altitude` in `unit`.
pub fn isa_delta(altitude: f64, unit: AltitudeUnit) -> IsaResult<f64> {
    let h = altitude_m(altitude, unit)?;
    let delta_tropopause =
        (T_STRATOSPHERE_K / T_SL_K).powf(troposphere_exponent());
    if h <= H_TROPOPAUSE_M {
        let theta = 1.0 + LAPSE_K_PER_M * h / T_SL_K;
        Ok(theta.powf(troposphere_exponent()))
    } else {
        // Isothermal layer: exponential decay from the tropopause.
        let scale = G_STD / (R_AIR * T_STRATOSPHERE_K);
        Ok(delta_tropopause * (-scale * (h - H_TROPOPAUSE_M)).exp())
    }
}

/// Density ratio sigma = rho/rho_sl at `altitude` in `unit`.
pub fn isa_sigma(altitude: f64, unit: AltitudeUnit) -> IsaResult<f64> {
    Ok(isa_delta(altitude, unit)? / isa_theta(altitude, unit)?)
}

/// Ambient temperature [K] at `altitude` in `unit`.
pub fn isa_temperature(altitude: f64, unit: AltitudeUnit) -> IsaResult<f64> {
    Ok(T_SL_K * isa_theta(altitude, unit)?)
}

/// Ambient pressure [Pa] at `altitude` in `unit`.
pub fn isa_pressure(altitude: f64, unit: AltitudeUnit) -> IsaResult<f64> {
    Ok(P_SL_PA * isa_delta(altitude, unit)?)
}

/// Ambient density [kg/m³] at `altitude` in `unit`.
pub fn isa_density(altitude: f64, unit: AltitudeUnit) -> IsaResult<f64> {
    Ok(RHO_SL_KG_M3 * isa_sigma(altitude, unit)?)
}

/// Altitude [m] at which the pressure ratio equals `delta`.
pub fn inv_isa_delta(delta: f64) -> IsaResult<f64> {
    if !delta.is_finite() || delta <= 0.0 || delta > 1.0 {
        return Err(IsaError::RatioNotInvertible { value: delta });
    }
    let delta_tropopause =
        (T_STRATOSPHERE_K / T_SL_K).powf(troposphere_exponent());
    if delta >= delta_tropopause {
        let theta = delta.powf(1.0 / troposphere_exponent());
        Ok((theta - 1.0) * T_SL_K / LAPSE_K_PER_M)
    } else {
        let scale = G_STD / (R_AIR * T_STRATOSPHERE_K);
        Ok(H_TROPOPAUSE_M - (delta / delta_tropopause).ln() / scale)
    }
}

/// Altitude [m] at which the ambient pressure equals `pressure_pa`.
pub fn inv_isa_pressure(pressure_pa: f64) -> IsaResult<f64> {
    inv_isa_delta(pressure_pa / P_SL_PA)
}

/// Altitude [m] at which the density ratio equals `sigma`.
///
/// Tropospheric branch is closed-form (sigma = theta^(exp-1)); the
/// isothermal branch follows the pressure inversion at constant temperature.
pub fn inv_isa_sigma(sigma: f64) -> IsaResult<f64> {
    if !sigma.is_finite() || sigma <= 0.0 || sigma > 1.0 {
        return Err(IsaError::RatioNotInvertible { value: sigma });
    }
    let theta_tropopause = T_STRATOSPHERE_K / T_SL_K;
    let sigma_tropopause = theta_tropopause.powf(troposphere_exponent() - 1.0);
    if sigma >= sigma_tropopause {
        let theta = sigma.powf(1.0 / (troposphere_exponent() - 1.0));
        Ok((theta - 1.0) * T_SL_K / LAPSE_K_PER_M)
    } else {
        let delta = sigma * theta_tropopause;
        inv_isa_delta(delta)
    }
}

/// Altitude [m] at which the ambient density equals `rho_kg_m3`.
pub fn inv_isa_density(rho_kg_m3: f64) -> IsaResult<f64> {
    inv_isa_sigma(rho_kg_m3 / RHO_SL_KG_M3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-5;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn unit_conversion_factors() {
        assert!(close(AltitudeUnit::Meter.to_meters(), 1.0, TOL));
        assert!(close(AltitudeUnit::Feet.to_meters(), 0.3048, TOL));
        assert!(close(AltitudeUnit::Kilometer.to_meters(), 1000.0, TOL));
    }

    #[test]
    fn delta_troposphere() {
        assert!(close(isa_delta(0.0, AltitudeUnit::Meter).unwrap(), 1.0, TOL));
        assert!(close(
            isa_delta(H_TROPOPAUSE_M, AltitudeUnit::Meter).unwrap(),
            0.2233609,
            TOL
        ));
    }

    #[test]
    fn delta_stratosphere() {
        assert!(close(
            isa_delta(20_000.0, AltitudeUnit::Meter).unwrap(),
            0.0540321,
            TOL
        ));
    }

    #[test]
    fn pressure_troposphere() {
        assert!(close(isa_pressure(0.0, AltitudeUnit::Meter).unwrap(), P_SL_PA, 1.0));
        assert!(close(
            isa_pressure(H_TROPOPAUSE_M, AltitudeUnit::Meter).unwrap(),
            22_632.06,
            1.0
        ));
    }

    #[test]
    fn pressure_stratosphere() {
        assert!(close(
            isa_pressure(20_000.0, AltitudeUnit::Meter).unwrap(),
            5474.88,
            0.1
        ));
    }

    #[test]
    fn temperature_profile() {
        assert!(close(isa_temperature(0.0, AltitudeUnit::Meter).unwrap(), T_SL_K, TOL));
        assert!(close(
            isa_temperature(H_TROPOPAUSE_M, AltitudeUnit::Meter).unwrap(),
            216.65,
            TOL
        ));
        assert!(close(
            isa_temperature(20_000.0, AltitudeUnit::Meter).unwrap(),
            216.65,
            TOL
        ));
    }

    #[test]
    fn density_profile() {
        assert!(close(
            isa_density(0.0, AltitudeUnit::Meter).unwrap(),
            RHO_SL_KG_M3,
            TOL
        ));
        assert!(close(
            isa_density(H_TROPOPAUSE_M, AltitudeUnit::Meter).unwrap(),
            0.36392,
            1e-4
        ));
        assert!(close(
            isa_density(20_000.0, AltitudeUnit::Meter).unwrap(),
            0.08803,
            1e-4
        ));
    }

    #[test]
    fn altitude_in_feet() {
        // 36,089 ft is the tropopause.
        let p = isa_pressure(36_089.0, AltitudeUnit::Feet).unwrap();
        assert!(close(p, 22_632.06, 2.0));
    }

    #[test]
    fn inverse_delta() {
        assert!(close(inv_isa_delta(1.0).unwrap(), 0.0, 0.1));
        assert!(close(inv_isa_delta(0.2233609).unwrap(), H_TROPOPAUSE_M, 0.1));
        assert!(close(inv_isa_delta(0.0540321).unwrap(), 20_000.0, 1.0));
    }

    #[test]
    fn inverse_pressure() {
        assert!(close(inv_isa_pressure(P_SL_PA).unwrap(), 0.0, 0.1));
        assert!(close(inv_isa_pressure(22_632.06).unwrap(), H_TROPOPAUSE_M, 0.1));
    }

    #[test]
    fn inverse_sigma() {
        assert!(close(inv_isa_sigma(1.0).unwrap(), 0.0, 2.0));
        assert!(close(inv_isa_sigma(0.297).unwrap(), H_TROPOPAUSE_M, 30.0));
    }

    #[test]
    fn inverse_density() {
        assert!(close(inv_isa_density(RHO_SL_KG_M3).unwrap(), 0.0, 0.1));
        assert!(close(inv_isa_density(0.36392).unwrap(), H_TROPOPAUSE_M, 1.0));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(isa_pressure(-1.0, AltitudeUnit::Meter).is_err());
        assert!(isa_pressure(48_000.0, AltitudeUnit::Meter).is_err());
        assert!(isa_pressure(f64::NAN, AltitudeUnit::Meter).is_err());
        assert!(inv_isa_delta(0.0).is_err());
        assert!(inv_isa_delta(1.5).is_err());
    }
}
