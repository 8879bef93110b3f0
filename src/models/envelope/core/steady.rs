//! Steady-state resistance and transmittance (ISO 6946).

use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

use crate::models::envelope::{
    direction::{HeatFlowDirection, SurfaceResistances},
    error::AnalysisError,
    layer::Layer,
};
use crate::support::units::{ArealThermalResistance, areal_thermal_resistance};

/// Total thermal resistance Rsi + Σ layer resistances + Rse.
pub fn total_resistance(layers: &[Layer], direction: HeatFlowDirection) -> ArealThermalResistance {
    let SurfaceResistances { interior, exterior } = direction.surface_resistances();
    let layer_sum = layers
        .iter()
        .map(|layer| layer.thermal_resistance(direction))
        .fold(areal_thermal_resistance(0.0), |sum, resistance| {
            sum + resistance
        });
    interior + layer_sum + exterior
}

/// Steady-state thermal transmittance U = 1/R.
///
/// # Errors
///
/// Returns [`AnalysisError::DegenerateComponent`] if the resistance is
/// zero, negative, or not finite.
pub fn transmittance(resistance: ArealThermalResistance) -> Result<HeatTransfer, AnalysisError> {
    let value = resistance.value;
    if !value.is_finite() || value <= 0.0 {
        return Err(AnalysisError::DegenerateComponent);
    }
    Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(
        1.0 / value,
    ))
}
