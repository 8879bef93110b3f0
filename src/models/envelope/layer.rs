use uom::ConstZero;
use uom::si::f64::{
    DiffusionCoefficient, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity,
};

use super::{air_resistance, direction::HeatFlowDirection, error::AnalysisError};
use crate::support::units::{ArealHeatCapacity, ArealMassDensity, ArealThermalResistance};

/// One layer of a building envelope component.
///
/// Layers are immutable values, ordered interior to exterior within a
/// component. A layer is either a solid material or an unventilated air
/// gap; the two kinds share a thickness and are consumed uniformly by the
/// matrix builder through a single dispatch on [`LayerKind`].
///
/// The constructors validate their inputs, so a constructed layer always
/// has a strictly positive thickness and, for materials, strictly positive
/// conductivity, density, and specific heat.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    thickness: Length,
    kind: LayerKind,
}

/// The two kinds of envelope layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerKind {
    /// A solid material layer.
    Material {
        /// Thermal conductivity λ.
        conductivity: ThermalConductivity,
        /// Gross density ρ.
        density: MassDensity,
        /// Specific heat capacity c.
        specific_heat: SpecificHeatCapacity,
    },
    /// An unventilated air gap.
    ///
    /// Air gaps carry no material properties; their equivalent resistance
    /// is resolved from the ISO 6946 table using the component's heat flow
    /// direction at analysis time.
    Air,
}

impl Layer {
    /// Creates a material layer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidThickness`] if the thickness is not
    /// strictly positive, or [`AnalysisError::InvalidMaterialProperty`] if
    /// the conductivity, density, or specific heat is not strictly
    /// positive.
    pub fn material(
        name: impl Into<String>,
        thickness: Length,
        conductivity: ThermalConductivity,
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
    ) -> Result<Self, AnalysisError> {
        check_thickness(thickness)?;
        check_property("thermal conductivity", conductivity.value)?;
        check_property("gross density", density.value)?;
        check_property("specific heat capacity", specific_heat.value)?;

        Ok(Self {
            name: name.into(),
            thickness,
            kind: LayerKind::Material {
                conductivity,
                density,
                specific_heat,
            },
        })
    }

    /// Creates an unventilated air gap layer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidThickness`] if the thickness is not
    /// strictly positive.
    pub fn air(name: impl Into<String>, thickness: Length) -> Result<Self, AnalysisError> {
        check_thickness(thickness)?;

        Ok(Self {
            name: name.into(),
            thickness,
            kind: LayerKind::Air,
        })
    }

    /// The layer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layer thickness.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    /// The layer kind with its material properties, if any.
    #[must_use]
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Whether this layer is an air gap.
    #[must_use]
    pub fn is_air(&self) -> bool {
        matches!(self.kind, LayerKind::Air)
    }

    /// Thermal resistance of this layer.
    ///
    /// Materials: thickness / conductivity. Air gaps: the ISO 6946
    /// unventilated air layer table for the given direction.
    #[must_use]
    pub fn thermal_resistance(&self, direction: HeatFlowDirection) -> ArealThermalResistance {
        match self.kind {
            LayerKind::Material { conductivity, .. } => self.thickness / conductivity,
            LayerKind::Air => {
                air_resistance::unventilated_air_layer_resistance(direction, self.thickness)
            }
        }
    }

    /// Thermal conductivity of this layer.
    ///
    /// For an air gap this is the equivalent conductivity
    /// thickness / resistance.
    #[must_use]
    pub fn thermal_conductivity(&self, direction: HeatFlowDirection) -> ThermalConductivity {
        match self.kind {
            LayerKind::Material { conductivity, .. } => conductivity,
            LayerKind::Air => self.thickness / self.thermal_resistance(direction),
        }
    }

    /// Thermal diffusivity λ/(ρ·c). `None` for air gaps.
    #[must_use]
    pub fn thermal_diffusivity(&self) -> Option<DiffusionCoefficient> {
        match self.kind {
            LayerKind::Material {
                conductivity,
                density,
                specific_heat,
            } => Some(conductivity / (density * specific_heat)),
            LayerKind::Air => None,
        }
    }

    /// Thermal effusivity sqrt(λ·ρ·c), in J/(m²·K·√s). `None` for air gaps.
    ///
    /// The fractional time exponent cannot be expressed as a `uom`
    /// quantity, so the value is a bare SI float.
    #[must_use]
    pub fn thermal_effusivity(&self) -> Option<f64> {
        match self.kind {
            LayerKind::Material {
                conductivity,
                density,
                specific_heat,
            } => Some((conductivity.value * density.value * specific_heat.value).sqrt()),
            LayerKind::Air => None,
        }
    }

    /// Areal heat capacity ρ·d·c. Zero for air gaps.
    #[must_use]
    pub fn areal_heat_capacity(&self) -> ArealHeatCapacity {
        match self.kind {
            LayerKind::Material {
                density,
                specific_heat,
                ..
            } => density * self.thickness * specific_heat,
            LayerKind::Air => ArealHeatCapacity::ZERO,
        }
    }

    /// Mass per unit area ρ·d. Zero for air gaps.
    #[must_use]
    pub fn mass_per_area(&self) -> ArealMassDensity {
        match self.kind {
            LayerKind::Material { density, .. } => density * self.thickness,
            LayerKind::Air => ArealMassDensity::ZERO,
        }
    }
}

fn check_thickness(thickness: Length) -> Result<(), AnalysisError> {
    let value = thickness.value;
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidThickness { value })
    }
}

fn check_property(property: &'static str, value: f64) -> Result<(), AnalysisError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidMaterialProperty { property, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::square_meter_per_second, length::meter,
        mass_density::kilogram_per_cubic_meter, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    fn plaster() -> Layer {
        Layer::material(
            "plaster",
            Length::new::<meter>(0.15),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.21),
            MassDensity::new::<kilogram_per_cubic_meter>(1150.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1100.0),
        )
        .expect("valid material layer")
    }

    #[test]
    fn material_derived_properties() {
        let layer = plaster();

        let resistance = layer.thermal_resistance(HeatFlowDirection::Horizontal);
        assert_relative_eq!(resistance.value, 0.15 / 0.21, max_relative = 1e-12);

        let diffusivity = layer.thermal_diffusivity().expect("material");
        assert_relative_eq!(
            diffusivity.get::<square_meter_per_second>() * 1e6,
            0.166,
            max_relative = 0.01
        );

        let effusivity = layer.thermal_effusivity().expect("material");
        assert_relative_eq!(effusivity, 515.41, max_relative = 0.01);

        assert_relative_eq!(layer.mass_per_area().value, 1150.0 * 0.15);
        assert_relative_eq!(layer.areal_heat_capacity().value, 1150.0 * 0.15 * 1100.0);
    }

    #[test]
    fn air_gap_equivalent_conductivity() {
        let gap = Layer::air("air gap", Length::new::<meter>(0.19)).expect("valid air layer");

        // 190 mm clamps to the table maximum for upward flow, 0.16 m²K/W.
        let conductivity = gap.thermal_conductivity(HeatFlowDirection::Upward);
        assert_relative_eq!(
            conductivity.get::<watt_per_meter_kelvin>(),
            1.188,
            max_relative = 1e-3
        );

        assert!(gap.is_air());
        assert!(gap.thermal_diffusivity().is_none());
        assert!(gap.thermal_effusivity().is_none());
        assert_relative_eq!(gap.mass_per_area().value, 0.0);
        assert_relative_eq!(gap.areal_heat_capacity().value, 0.0);
    }

    #[test]
    fn rejects_non_positive_material_properties() {
        let result = Layer::material(
            "bad",
            Length::new::<meter>(0.1),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
            MassDensity::new::<kilogram_per_cubic_meter>(2000.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
        );
        assert_eq!(
            result,
            Err(AnalysisError::InvalidMaterialProperty {
                property: "thermal conductivity",
                value: 0.0,
            }),
        );

        let result = Layer::material(
            "bad",
            Length::new::<meter>(0.1),
            ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
            MassDensity::new::<kilogram_per_cubic_meter>(-5.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
        );
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidMaterialProperty {
                property: "gross density",
                ..
            }),
        ));
    }

    #[test]
    fn rejects_non_positive_thickness() {
        let result = Layer::air("bad", Length::new::<meter>(0.0));
        assert_eq!(result, Err(AnalysisError::InvalidThickness { value: 0.0 }));

        let result = Layer::material(
            "bad",
            Length::new::<meter>(-0.1),
            ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
            MassDensity::new::<kilogram_per_cubic_meter>(2000.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(900.0),
        );
        assert_eq!(result, Err(AnalysisError::InvalidThickness { value: -0.1 }));
    }
}
