//! # Envelope Models
//!
//! Steady-state (ISO 6946) and periodic (ISO 13786) thermal models for
//! multi-layer building envelope components such as walls, roofs, and
//! floors.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific envelope models; start with
//!   [`models::envelope`].
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! Build a single-layer wall and read its steady-state transmittance:
//!
//! ```
//! use envelope_models::models::envelope::{Component, HeatFlowDirection, Layer};
//! use uom::si::f64::{Length, MassDensity, SpecificHeatCapacity, ThermalConductivity};
//! use uom::si::heat_transfer::watt_per_square_meter_kelvin;
//! use uom::si::length::meter;
//! use uom::si::mass_density::kilogram_per_cubic_meter;
//! use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
//! use uom::si::thermal_conductivity::watt_per_meter_kelvin;
//!
//! # fn main() -> Result<(), envelope_models::models::envelope::AnalysisError> {
//! let concrete = Layer::material(
//!     "concrete",
//!     Length::new::<meter>(0.2),
//!     ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
//!     MassDensity::new::<kilogram_per_cubic_meter>(2000.0),
//!     SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
//! )?;
//!
//! let wall = Component::new("test wall", vec![concrete], HeatFlowDirection::Horizontal)?;
//! let analysis = wall.analyze()?;
//!
//! let u = analysis.thermal_transmittance.get::<watt_per_square_meter_kelvin>();
//! assert!((u - 2.7027).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod support;
