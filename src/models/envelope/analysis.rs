use uom::si::f64::{HeatTransfer, Length, Ratio, Time};

use super::core::{HeatTransferMatrix, SummerPerformance};
use crate::support::units::{ArealHeatCapacity, ArealMassDensity, ArealThermalResistance};

/// One atomic snapshot of every steady-state and periodic quantity of a
/// component.
///
/// Produced by [`Component::analyze`](super::Component::analyze). All
/// fields are computed together from the same inputs; there is no
/// per-field incremental update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    /// Total thickness of the layer stack.
    pub thickness: Length,

    /// Interior surface resistance Rsi used for this analysis.
    pub surface_resistance_interior: ArealThermalResistance,

    /// Exterior surface resistance Rse used for this analysis.
    pub surface_resistance_exterior: ArealThermalResistance,

    /// Total thermal resistance, surface resistances included.
    pub thermal_resistance: ArealThermalResistance,

    /// Steady-state thermal transmittance U.
    pub thermal_transmittance: HeatTransfer,

    /// Periodic thermal transmittance Yie.
    pub periodic_thermal_transmittance: HeatTransfer,

    /// Decrement factor f = Yie / U.
    pub decrement_factor: Ratio,

    /// Time shift of the periodic transmittance.
    pub time_shift: Time,

    /// Interior thermal admittance Yii.
    pub thermal_admittance_interior: HeatTransfer,

    /// Exterior thermal admittance Yee.
    pub thermal_admittance_exterior: HeatTransfer,

    /// Interior areal heat capacity k1.
    pub areal_heat_capacity_interior: ArealHeatCapacity,

    /// Exterior areal heat capacity k2.
    pub areal_heat_capacity_exterior: ArealHeatCapacity,

    /// Areal heat capacity of the whole stack, Σ ρ·d·c.
    pub areal_heat_capacity: ArealHeatCapacity,

    /// Surface mass, Σ ρ·d.
    pub mass: ArealMassDensity,

    /// Time constant: stack areal heat capacity × total resistance.
    pub time_constant: Time,

    /// The assembled component heat transfer matrix, for advanced
    /// consumers.
    pub heat_transfer_matrix: HeatTransferMatrix,

    /// Summer performance grade of (time shift, decrement factor).
    pub summer_performance: SummerPerformance,
}
