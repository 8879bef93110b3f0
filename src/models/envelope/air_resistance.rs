//! Thermal resistance of unventilated air layers with high-emissivity
//! surfaces, per ISO 6946.
//!
//! The standard tabulates resistance against air layer thickness for each
//! heat flow direction. Values between the breakpoints are linearly
//! interpolated; values outside the table are clamped to its extremes.

use uom::si::{f64::Length, length::meter};

use super::direction::HeatFlowDirection;
use crate::support::units::{ArealThermalResistance, areal_thermal_resistance};

/// Table thickness breakpoints, in meters.
const THICKNESSES: [f64; 9] = [
    0.0, 0.005, 0.007, 0.010, 0.015, 0.025, 0.050, 0.100, 0.300,
];

/// Resistance rows in m²·K/W, one value per thickness breakpoint.
const UPWARD: [f64; 9] = [0.0, 0.11, 0.13, 0.15, 0.16, 0.16, 0.16, 0.16, 0.16];
const HORIZONTAL: [f64; 9] = [0.0, 0.11, 0.13, 0.15, 0.17, 0.18, 0.18, 0.18, 0.18];
const DOWNWARD: [f64; 9] = [0.0, 0.11, 0.13, 0.15, 0.17, 0.19, 0.21, 0.22, 0.23];

/// Equivalent thermal resistance of an unventilated air layer.
#[must_use]
pub fn unventilated_air_layer_resistance(
    direction: HeatFlowDirection,
    thickness: Length,
) -> ArealThermalResistance {
    let row = match direction {
        HeatFlowDirection::Upward => &UPWARD,
        HeatFlowDirection::Horizontal => &HORIZONTAL,
        HeatFlowDirection::Downward => &DOWNWARD,
    };
    areal_thermal_resistance(interpolate(thickness.get::<meter>(), &THICKNESSES, row))
}

/// Piecewise-linear interpolation over the table, clamped at both ends.
fn interpolate(x: f64, xs: &[f64; 9], ys: &[f64; 9]) -> f64 {
    if x <= xs[0] {
        return ys[0];
    }
    for i in 1..xs.len() {
        if x <= xs[i] {
            let fraction = (x - xs[i - 1]) / (xs[i] - xs[i - 1]);
            return ys[i - 1] + fraction * (ys[i] - ys[i - 1]);
        }
    }
    ys[ys.len() - 1]
}
