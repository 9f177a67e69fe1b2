//! Combustor (constant-pressure heat addition) model.

use crate::config::{PartModel, StageContext, StageOutput};
use crate::error::{PartError, PartResult};
use crate::kinds::PartKind;
use crate::path::{PATH_RESOLUTION, ProcessPath, sample_leg};
use crate::summary::PartSummary;
use jc_core::units::{k, kgps, pa};
use jc_gas::{Composition, GasError, GasModel, Species};
use serde::{Deserialize, Serialize};

/// Moles of O₂ consumed per mole of C₁₂H₂₆ in complete combustion:
/// C₁₂H₂₆ + 18.5·O₂ → 12·CO₂ + 13·H₂O.
const O2_MOLES_PER_FUEL: f64 = 18.5;
const CO2_MOLES_PER_FUEL: f64 = 12.0;
const H2O_MOLES_PER_FUEL: f64 = 13.0;

/// Combustion chamber burning a kerosene-class fuel in the compressed air
/// stream.
///
/// The throttle interpolates the equivalence ratio between the configured
/// fuel-fraction limits, φ = (max_f − min_f)·throttle + min_f, and the fuel
/// flow follows from the stoichiometric fuel-air ratio of the incoming
/// stream. Heat release is an adiabatic constant-pressure enthalpy balance:
/// the NASA-polynomial enthalpies carry the heats of formation, so the
/// outlet temperature is the temperature at which the complete-combustion
/// products match the reactant enthalpy. Outlet pressure is exactly
/// p_in·(1 − pressure_loss), independent of throttle; the nominal gas
/// velocity sets the reported outlet Mach number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombustorConfig {
    /// Throttle position, in [0, 1]
    pub throttle: f64,
    /// Nominal gas velocity through the chamber [m/s], in (0, 1000]
    pub nominal_velocity_m_s: f64,
    /// Relative total-pressure loss, in [0, 1)
    pub pressure_loss: f64,
    /// Fuel flow at full throttle, as a fraction of stoichiometric, in [0, 1]
    pub max_fuel_fraction: f64,
    /// Fuel flow at idle, as a fraction of stoichiometric, in [0, 1]
    pub min_fuel_fraction: f64,
}

impl CombustorConfig {
    pub fn new(
        throttle: f64,
        nominal_velocity_m_s: f64,
        pressure_loss: f64,
        max_fuel_fraction: f64,
        min_fuel_fraction: f64,
    ) -> PartResult<Self> {
        let config = Self {
            throttle,
            nominal_velocity_m_s,
            pressure_loss,
            max_fuel_fraction,
            min_fuel_fraction,
        };
        config.validate()?;
        Ok(config)
    }

    /// Equivalence ratio commanded by the current throttle position.
    pub fn equivalence_ratio(&self) -> f64 {
        (self.max_fuel_fraction - self.min_fuel_fraction) * self.throttle
            + self.min_fuel_fraction
    }
}

impl PartModel for CombustorConfig {
    fn kind(&self) -> PartKind {
        PartKind::Combustor
    }

    fn validate(&self) -> PartResult<()> {
        if !self.throttle.is_finite() || !(0.0..=1.0).contains(&self.throttle) {
            return Err(PartError::Configuration {
                field: "throttle",
                reason: "must lie in [0, 1]",
            });
        }
        if !self.nominal_velocity_m_s.is_finite()
            || self.nominal_velocity_m_s <= 0.0
            || self.nominal_velocity_m_s > 1000.0
        {
            return Err(PartError::Configuration {
                field: "nominal_velocity_m_s",
                reason: "must lie in (0, 1000] m/s",
            });
        }
        if !self.pressure_loss.is_finite()
            || self.pressure_loss < 0.0
            || self.pressure_loss >= 1.0
        {
            return Err(PartError::Configuration {
                field: "pressure_loss",
                reason: "must lie in [0, 1)",
            });
        }
        if !self.max_fuel_fraction.is_finite()
            || !(0.0..=1.0).contains(&self.max_fuel_fraction)
        {
            return Err(PartError::Configuration {
                field: "max_fuel_fraction",
                reason: "must lie in [0, 1]",
            });
        }
        if !self.min_fuel_fraction.is_finite()
            || !(0.0..=1.0).contains(&self.min_fuel_fraction)
        {
            return Err(PartError::Configuration {
                field: "min_fuel_fraction",
                reason: "must lie in [0, 1]",
            });
        }
        if self.min_fuel_fraction > self.max_fuel_fraction {
            return Err(PartError::Configuration {
                field: "min_fuel_fraction",
                reason: "must not exceed max_fuel_fraction",
            });
        }
        Ok(())
    }

    fn compute(&self, ctx: &StageContext<'_>, model: &dyn GasModel) -> PartResult<StageOutput> {
        let upstream = ctx.upstream.ok_or(PartError::MissingUpstream {
            part: PartKind::Combustor,
            requires: PartKind::Compressor,
        })?;
        self.validate()?;

        let t_in = upstream.temperature().value;
        let p_in = upstream.pressure().value;
        let p_out = p_in * (1.0 - self.pressure_loss);

        let phi = self.equivalence_ratio();
        let f_stoich = stoich_fuel_air_ratio(upstream.composition())?;
        let fuel_air_ratio = phi * f_stoich;

        let reactants = with_fuel(upstream.composition(), fuel_air_ratio)?;
        let h_react = model.properties(k(t_in), pa(p_out), &reactants)?.enthalpy;

        let products = burn_complete(&reactants)?;
        let t_out = model.temperature_from_enthalpy(h_react, &products)?.value;
        tracing::debug!(phi, fuel_air_ratio, t_out, "combustor enthalpy balance solved");

        let mass_flow_out = upstream.mass_flow().value * (1.0 + fuel_air_ratio);
        let state = model.state_at(
            k(t_out),
            pa(p_out),
            kgps(mass_flow_out),
            products.clone(),
        )?;

        let a_out = model.speed_of_sound(k(t_out), &products)?.value;
        let outlet_mach = self.nominal_velocity_m_s / a_out;

        // Heat-addition arc of the product gas between the endpoint states.
        let mut samples = Vec::with_capacity(PATH_RESOLUTION + 1);
        sample_leg(
            &mut samples,
            model,
            &products,
            (t_in, p_in),
            (t_out, p_out),
            PATH_RESOLUTION,
            true,
        )?;
        let path = ProcessPath::from_samples(samples)?;

        let mut summary = PartSummary::new();
        summary.push("equivalence_ratio", phi);
        summary.push("fuel_air_ratio", fuel_air_ratio);
        summary.push("fuel_flow_kg_s", fuel_air_ratio * upstream.mass_flow().value);
        summary.push("output_pressure_pa", p_out);
        summary.push("pressure_ratio", 1.0 - self.pressure_loss);
        summary.push("output_temperature_k", t_out);
        summary.push("temperature_rise_k", t_out - t_in);
        summary.push("outlet_mach", outlet_mach);
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

/// Stoichiometric fuel mass per unit mass of the incoming stream, from the
/// oxygen it carries.
fn stoich_fuel_air_ratio(stream: &Composition) -> PartResult<f64> {
    let w_o2 = stream.mass_fraction(Species::O2);
    if w_o2 <= 0.0 {
        return Err(PartError::InvalidState(GasError::NonPhysical {
            what: "upstream flow carries no oxygen to burn",
        }));
    }
    let o2_mass_per_fuel =
        O2_MOLES_PER_FUEL * Species::O2.molar_mass() / Species::C12H26.molar_mass();
    Ok(w_o2 / o2_mass_per_fuel)
}

/// Mix `fuel_air_ratio` kg of fuel into each kg of the incoming stream.
fn with_fuel(stream: &Composition, fuel_air_ratio: f64) -> PartResult<Composition> {
    if fuel_air_ratio == 0.0 {
        return Ok(stream.clone());
    }
    let mut fractions: Vec<(Species, f64)> = stream.iter().collect();
    fractions.push((Species::C12H26, fuel_air_ratio));
    Ok(Composition::from_mass_fractions(fractions)?)
}

/// Complete lean combustion of all fuel in the mixture.
fn burn_complete(reactants: &Composition) -> PartResult<Composition> {
    let w_fuel = reactants.mass_fraction(Species::C12H26);
    if w_fuel == 0.0 {
        return Ok(reactants.clone());
    }

    let m_fuel = Species::C12H26.molar_mass();
    let o2_per_fuel = O2_MOLES_PER_FUEL * Species::O2.molar_mass() / m_fuel;
    let co2_per_fuel = CO2_MOLES_PER_FUEL * Species::CO2.molar_mass() / m_fuel;
    let h2o_per_fuel = H2O_MOLES_PER_FUEL * Species::H2O.molar_mass() / m_fuel;

    let w_o2_left = reactants.mass_fraction(Species::O2) - w_fuel * o2_per_fuel;
    if w_o2_left < -1e-12 {
        return Err(PartError::InvalidState(GasError::NonPhysical {
            what: "mixture is rich: not enough oxygen for complete combustion",
        }));
    }

    let mut products: Vec<(Species, f64)> = Vec::new();
    for (species, w) in reactants.iter() {
        match species {
            // Consumed or folded into the product terms appended below.
            Species::C12H26 | Species::O2 | Species::CO2 | Species::H2O => {}
            other => products.push((other, w)),
        }
    }
    if w_o2_left > 0.0 {
        products.push((Species::O2, w_o2_left));
    }
    products.push((
        Species::CO2,
        reactants.mass_fraction(Species::CO2) + w_fuel * co2_per_fuel,
    ));
    products.push((
        Species::H2O,
        reactants.mass_fraction(Species::H2O) + w_fuel * h2o_per_fuel,
    ));

    Ok(Composition::from_mass_fractions(products)?)
}
