use uom::ConstZero;
use uom::si::{
    f64::{HeatTransfer, Length, Time},
    heat_transfer::watt_per_square_meter_kelvin,
    time::hour,
};

use super::{
    analysis::Analysis, core, direction::HeatFlowDirection, error::AnalysisError, layer::Layer,
};
use crate::support::units::{self, ArealHeatCapacity, ArealMassDensity};

/// A multi-layer building envelope component (wall, roof, or floor).
///
/// A component is a named stack of [`Layer`]s ordered interior to
/// exterior, a [`HeatFlowDirection`], and an excitation period for the
/// dynamic analysis (24 h unless overridden). The direction governs the
/// surface resistances and the equivalent resistance of every air gap in
/// the stack; an air gap has no direction of its own.
///
/// [`Component::analyze`] derives every steady-state and periodic quantity
/// in one pass and returns them as an [`Analysis`] snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    layers: Vec<Layer>,
    direction: HeatFlowDirection,
    period: Time,
}

impl Component {
    /// Creates a component with the standard 24 h excitation period.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DegenerateComponent`] if `layers` is empty.
    pub fn new(
        name: impl Into<String>,
        layers: Vec<Layer>,
        direction: HeatFlowDirection,
    ) -> Result<Self, AnalysisError> {
        Self::with_period(name, layers, direction, Time::new::<hour>(24.0))
    }

    /// Creates a component with an explicit excitation period.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DegenerateComponent`] if `layers` is empty
    /// or the period is not strictly positive and finite.
    pub fn with_period(
        name: impl Into<String>,
        layers: Vec<Layer>,
        direction: HeatFlowDirection,
        period: Time,
    ) -> Result<Self, AnalysisError> {
        if layers.is_empty() {
            return Err(AnalysisError::DegenerateComponent);
        }
        check_period(period)?;

        Ok(Self {
            name: name.into(),
            layers,
            direction,
            period,
        })
    }

    /// The component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layer stack, interior to exterior.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The heat flow direction.
    #[must_use]
    pub fn direction(&self) -> HeatFlowDirection {
        self.direction
    }

    /// The excitation period of the dynamic analysis.
    #[must_use]
    pub fn period(&self) -> Time {
        self.period
    }

    /// Changes the heat flow direction.
    ///
    /// Surface resistances and air gap resistances follow the new
    /// direction on the next [`analyze`](Self::analyze) call.
    pub fn set_direction(&mut self, direction: HeatFlowDirection) {
        self.direction = direction;
    }

    /// Changes the excitation period.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DegenerateComponent`] if the period is not
    /// strictly positive and finite.
    pub fn set_period(&mut self, period: Time) -> Result<(), AnalysisError> {
        check_period(period)?;
        self.period = period;
        Ok(())
    }

    /// Runs the full steady-state and dynamic analysis.
    ///
    /// The steady-state stage (ISO 6946) sums surface and layer
    /// resistances; the dynamic stage (ISO 13786) chains the layer heat
    /// transfer matrices from interior to exterior, brackets them with the
    /// surface films, and extracts the periodic quantities from the
    /// assembled matrix.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DegenerateComponent`] if the total
    /// resistance is not strictly positive, or
    /// [`AnalysisError::SingularHeatTransferMatrix`] if the assembled
    /// matrix cannot be inverted for the periodic quantities.
    pub fn analyze(&self) -> Result<Analysis, AnalysisError> {
        let surfaces = self.direction.surface_resistances();
        let thermal_resistance = core::total_resistance(&self.layers, self.direction);
        let thermal_transmittance = core::transmittance(thermal_resistance)?;

        let depths = core::penetration_depths(&self.layers, self.period);
        let xis = core::xi_ratios(&self.layers, &depths);
        let matrices = core::layer_matrices(&self.layers, &depths, &xis, self.direction);
        let heat_transfer_matrix = core::assemble(&matrices, surfaces);
        let periodic = core::periodic_quantities(heat_transfer_matrix, self.period)?;

        let periodic_thermal_transmittance =
            HeatTransfer::new::<watt_per_square_meter_kelvin>(periodic.periodic_transmittance);
        let decrement_factor = periodic_thermal_transmittance / thermal_transmittance;
        let time_shift = Time::new::<hour>(periodic.time_shift_hours);
        let summer_performance = core::classify(periodic.time_shift_hours, decrement_factor.value);

        let thickness = self
            .layers
            .iter()
            .map(Layer::thickness)
            .fold(Length::ZERO, |sum, thickness| sum + thickness);
        let mass = self
            .layers
            .iter()
            .map(Layer::mass_per_area)
            .fold(ArealMassDensity::ZERO, |sum, mass| sum + mass);
        let areal_heat_capacity = self
            .layers
            .iter()
            .map(Layer::areal_heat_capacity)
            .fold(ArealHeatCapacity::ZERO, |sum, capacity| sum + capacity);
        let time_constant = areal_heat_capacity * thermal_resistance;

        Ok(Analysis {
            thickness,
            surface_resistance_interior: surfaces.interior,
            surface_resistance_exterior: surfaces.exterior,
            thermal_resistance,
            thermal_transmittance,
            periodic_thermal_transmittance,
            decrement_factor,
            time_shift,
            thermal_admittance_interior: HeatTransfer::new::<watt_per_square_meter_kelvin>(
                periodic.admittance_interior,
            ),
            thermal_admittance_exterior: HeatTransfer::new::<watt_per_square_meter_kelvin>(
                periodic.admittance_exterior,
            ),
            areal_heat_capacity_interior: units::areal_heat_capacity(
                periodic.areal_heat_capacity_interior,
            ),
            areal_heat_capacity_exterior: units::areal_heat_capacity(
                periodic.areal_heat_capacity_exterior,
            ),
            areal_heat_capacity,
            mass,
            time_constant,
            heat_transfer_matrix,
            summer_performance,
        })
    }
}

fn check_period(period: Time) -> Result<(), AnalysisError> {
    let value = period.value;
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::DegenerateComponent)
    }
}
