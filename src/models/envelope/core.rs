//! Core computation for the envelope model.
//!
//! This module holds the ISO 13786 dynamic pipeline (penetration depths,
//! layer matrices, matrix assembly, periodic-quantity extraction), the
//! ISO 6946 steady-state stage, and the summer performance grading.
//! Quantities are converted to raw SI floats at the boundary of this
//! module; [`super::Component`] wraps the results back into quantities.

mod classification;
mod matrix;
mod penetration;
mod periodic;
mod steady;

pub use classification::SummerPerformance;
pub use matrix::HeatTransferMatrix;

pub(super) use classification::classify;
pub(super) use matrix::{assemble, layer_matrices};
pub(super) use penetration::{penetration_depths, xi_ratios};
pub(super) use periodic::{PeriodicQuantities, periodic_quantities};
pub(super) use steady::{total_resistance, transmittance};
