use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P3, Z0},
};

/// Areal thermal resistance, m²·K/W in SI.
pub type ArealThermalResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Areal heat capacity, J/(m²·K) in SI.
pub type ArealHeatCapacity = Quantity<ISQ<Z0, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Areal mass density, kg/m² in SI.
pub type ArealMassDensity = Quantity<ISQ<N2, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates an [`ArealThermalResistance`] from a value in m²·K/W.
///
/// The custom quantities have no named units, so table values enter
/// through these SI constructors.
#[must_use]
pub fn areal_thermal_resistance(square_meter_kelvin_per_watt: f64) -> ArealThermalResistance {
    ArealThermalResistance {
        dimension: PhantomData,
        units: PhantomData,
        value: square_meter_kelvin_per_watt,
    }
}

/// Creates an [`ArealHeatCapacity`] from a value in J/(m²·K).
#[must_use]
pub fn areal_heat_capacity(joule_per_square_meter_kelvin: f64) -> ArealHeatCapacity {
    ArealHeatCapacity {
        dimension: PhantomData,
        units: PhantomData,
        value: joule_per_square_meter_kelvin,
    }
}

/// Creates an [`ArealMassDensity`] from a value in kg/m².
#[must_use]
pub fn areal_mass_density(kilogram_per_square_meter: f64) -> ArealMassDensity {
    ArealMassDensity {
        dimension: PhantomData,
        units: PhantomData,
        value: kilogram_per_square_meter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassDensity, SpecificHeatCapacity, ThermalConductivity, Time},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        time::second,
    };

    #[test]
    fn resistance_from_thickness_over_conductivity() {
        let thickness = Length::new::<meter>(0.12);
        let conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(0.8);

        // The annotation is the point: the division has the right dimension.
        let resistance: ArealThermalResistance = thickness / conductivity;
        assert_relative_eq!(resistance.value, 0.15);
    }

    #[test]
    fn heat_capacity_from_density_thickness_and_specific_heat() {
        let density = MassDensity::new::<kilogram_per_cubic_meter>(1800.0);
        let thickness = Length::new::<meter>(0.12);
        let specific_heat = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(840.0);

        let capacity: ArealHeatCapacity = density * thickness * specific_heat;
        assert_relative_eq!(capacity.value, 1800.0 * 0.12 * 840.0);

        let mass: ArealMassDensity = density * thickness;
        assert_relative_eq!(mass.value, 216.0);
    }

    #[test]
    fn capacity_times_resistance_is_a_time() {
        let capacity = areal_heat_capacity(980_260.0);
        let resistance = areal_thermal_resistance(3.679);

        let time_constant: Time = capacity * resistance;
        assert_relative_eq!(
            time_constant.get::<second>(),
            980_260.0 * 3.679,
            max_relative = 1e-12
        );
    }

    #[test]
    fn si_constructors_round_trip() {
        assert_relative_eq!(areal_thermal_resistance(0.13).value, 0.13);
        assert_relative_eq!(areal_heat_capacity(78_776.1).value, 78_776.1);
        assert_relative_eq!(areal_mass_density(1031.0).value, 1031.0);
    }
}
