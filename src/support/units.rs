//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, thermal
//! conductivity, density). This module provides the per-square-meter
//! quantities of envelope analysis that aren't included in [`uom`]'s SI
//! system: areal thermal resistance (m²·K/W), areal heat capacity
//! (J/m²·K), and areal mass density (kg/m²).
//!
//! The aliases compose with ordinary quantity arithmetic. For example,
//! dividing a thickness by a thermal conductivity yields an
//! [`ArealThermalResistance`], and multiplying an [`ArealHeatCapacity`] by
//! an [`ArealThermalResistance`] yields a `Time`:
//!
//! ```
//! use envelope_models::support::units::ArealThermalResistance;
//! use uom::si::f64::{Length, ThermalConductivity};
//! use uom::si::length::meter;
//! use uom::si::thermal_conductivity::watt_per_meter_kelvin;
//!
//! let thickness = Length::new::<meter>(0.3);
//! let conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(1.8);
//! let resistance: ArealThermalResistance = thickness / conductivity;
//! assert!((resistance.value - 0.3 / 1.8).abs() < 1e-12);
//! ```

mod quantities;

pub use quantities::{
    ArealHeatCapacity, ArealMassDensity, ArealThermalResistance, areal_heat_capacity,
    areal_mass_density, areal_thermal_resistance,
};
