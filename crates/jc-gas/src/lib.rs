//! jc-gas: working-fluid property calculations for jetcycle.
//!
//! Provides:
//! - Chemical species definitions (air constituents + kerosene-class fuel)
//! - Composition handling (normalized mass fractions)
//! - Immutable gas-state snapshots
//! - GasModel trait for property calculations
//! - Ideal-gas-mixture backend with NASA 7-coefficient polynomials
//!
//! # Architecture
//!
//! This crate defines a stable API (`GasModel` trait) that isolates the rest of
//! jetcycle from the property backend. The bundled backend treats the working
//! fluid as an ideal mixture of thermally perfect gases, which covers the
//! temperature range of a gas-turbine cycle (cold intake air through hot
//! combustion products). Any backend satisfying the trait contract is
//! interchangeable.
//!
//! # Example
//!
//! ```
//! use jc_gas::{Composition, GasModel, IdealGasModel};
//! use jc_core::units::{k, pa};
//!
//! let model = IdealGasModel::new();
//! let air = Composition::air();
//! let props = model.properties(k(300.0), pa(101_325.0), &air).unwrap();
//! assert!(props.density.value > 1.0);
//! ```

pub mod composition;
pub mod error;
pub mod ideal;
pub mod model;
pub mod nasa;
pub mod species;
pub mod state;

// Re-exports for ergonomics
pub use composition::Composition;
pub use error::{GasError, GasResult};
pub use ideal::IdealGasModel;
pub use model::{GasModel, GasProperties, GasPropertyPack};
pub use species::Species;
pub use state::{GasState, SpecEnthalpy, SpecEntropy, SpecHeatCapacity};
