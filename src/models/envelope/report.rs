//! Plain-text summary of a component analysis.

use std::fmt::Write;

use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin, length::millimeter,
    thermal_conductivity::watt_per_meter_kelvin, time::hour,
};

use super::{analysis::Analysis, component::Component};

/// Renders a component and its analysis as a human-readable report.
///
/// The report lists the layer stack interior to exterior with per-layer
/// resistances, then the steady-state and periodic quantities. It is meant
/// for terminals and log files, not for machine parsing.
#[must_use]
pub fn summary(component: &Component, analysis: &Analysis) -> String {
    let mut out = String::new();
    let direction = component.direction();

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "component: {} ({} heat flow, {:.0} h period)",
        component.name(),
        direction,
        component.period().get::<hour>(),
    );
    let _ = writeln!(out, "layers (interior to exterior):");
    for layer in component.layers() {
        let _ = writeln!(
            out,
            "  {:<24} {:>6.1} mm  lambda {:>6.3} W/(m*K)  R {:>6.3} m2*K/W",
            layer.name(),
            layer.thickness().get::<millimeter>(),
            layer
                .thermal_conductivity(direction)
                .get::<watt_per_meter_kelvin>(),
            layer.thermal_resistance(direction).value,
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "thermal resistance        {:>10.3} m2*K/W (Rsi {:.2}, Rse {:.2})",
        analysis.thermal_resistance.value,
        analysis.surface_resistance_interior.value,
        analysis.surface_resistance_exterior.value,
    );
    let _ = writeln!(
        out,
        "thermal transmittance U   {:>10.3} W/(m2*K)",
        analysis
            .thermal_transmittance
            .get::<watt_per_square_meter_kelvin>(),
    );
    let _ = writeln!(
        out,
        "periodic transmittance    {:>10.4} W/(m2*K)",
        analysis
            .periodic_thermal_transmittance
            .get::<watt_per_square_meter_kelvin>(),
    );
    let _ = writeln!(
        out,
        "decrement factor          {:>10.4}",
        analysis.decrement_factor.value,
    );
    let _ = writeln!(
        out,
        "time shift                {:>10.2} h",
        analysis.time_shift.get::<hour>(),
    );
    let _ = writeln!(
        out,
        "admittance (int / ext)    {:>10.3} / {:.3} W/(m2*K)",
        analysis
            .thermal_admittance_interior
            .get::<watt_per_square_meter_kelvin>(),
        analysis
            .thermal_admittance_exterior
            .get::<watt_per_square_meter_kelvin>(),
    );
    let _ = writeln!(
        out,
        "areal capacity (int/ext)  {:>10.1} / {:.1} kJ/(m2*K)",
        analysis.areal_heat_capacity_interior.value / 1e3,
        analysis.areal_heat_capacity_exterior.value / 1e3,
    );
    let _ = writeln!(
        out,
        "surface mass              {:>10.1} kg/m2",
        analysis.mass.value,
    );
    let _ = writeln!(
        out,
        "areal heat capacity       {:>10.1} kJ/(m2*K)",
        analysis.areal_heat_capacity.value / 1e3,
    );
    let _ = writeln!(
        out,
        "time constant             {:>10.1} h",
        analysis.time_constant.get::<hour>(),
    );
    let _ = writeln!(
        out,
        "summer performance        {}",
        analysis.summer_performance,
    );

    out
}
