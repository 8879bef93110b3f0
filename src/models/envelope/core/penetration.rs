//! Periodic penetration depth and dimensionless layer ratio.

use std::f64::consts::PI;

use uom::si::{f64::Time, time::second};

use crate::models::envelope::layer::{Layer, LayerKind};

/// Periodic penetration depth δ in meters for each layer, interior to
/// exterior.
///
/// δ = sqrt(λ·P / (π·ρ·c)) is the depth at which a sinusoidal temperature
/// wave of period P is damped by 1/e. Air gaps carry no depth; downstream
/// stages branch on the `None` marker instead of interpolating one.
pub fn penetration_depths(layers: &[Layer], period: Time) -> Vec<Option<f64>> {
    let period_seconds = period.get::<second>();
    layers
        .iter()
        .map(|layer| match layer.kind() {
            LayerKind::Material {
                conductivity,
                density,
                specific_heat,
            } => Some(
                (conductivity.value * period_seconds / (PI * density.value * specific_heat.value))
                    .sqrt(),
            ),
            LayerKind::Air => None,
        })
        .collect()
}

/// ξ = thickness / δ for each layer.
///
/// Dimensionless; a large ξ means the layer is much thicker than its
/// thermal wave penetration, which is valid, not an error. Air gaps carry
/// the `None` marker through.
pub fn xi_ratios(layers: &[Layer], depths: &[Option<f64>]) -> Vec<Option<f64>> {
    layers
        .iter()
        .zip(depths.iter().copied())
        .map(|(layer, depth)| depth.map(|depth| layer.thickness().value / depth))
        .collect()
}
