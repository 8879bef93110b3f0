//! Periodic quantities derived from a component heat transfer matrix.

use std::f64::consts::PI;

use uom::si::{
    f64::Time,
    time::{hour, second},
};

use super::matrix::HeatTransferMatrix;
use crate::models::envelope::error::AnalysisError;

/// Threshold below which |Z12| is treated as numerically zero.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Scalar periodic quantities extracted from an assembled component matrix.
///
/// All values are raw SI floats; the component wraps them back into
/// quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicQuantities {
    /// Periodic thermal transmittance Yie = 1/|Z12|, W/(m²·K).
    pub periodic_transmittance: f64,
    /// Time shift φ of the periodic transmittance, hours.
    pub time_shift_hours: f64,
    /// Interior thermal admittance Yii = |−Z11/Z12|, W/(m²·K).
    pub admittance_interior: f64,
    /// Exterior thermal admittance Yee = |−Z22/Z12|, W/(m²·K).
    pub admittance_exterior: f64,
    /// Interior areal heat capacity k1, J/(m²·K).
    pub areal_heat_capacity_interior: f64,
    /// Exterior areal heat capacity k2, J/(m²·K).
    pub areal_heat_capacity_exterior: f64,
}

/// Derives the periodic quantities of ISO 13786 from a component matrix.
///
/// The time shift is `arg(Z12)·P/2π + P/2`; the `+P/2` term converts the
/// raw argument of Z12 to the steady-periodic convention of the standard.
///
/// # Errors
///
/// Returns [`AnalysisError::SingularHeatTransferMatrix`] if |Z12| is
/// numerically zero or not finite, since every derived quantity divides
/// by it.
pub fn periodic_quantities(
    matrix: HeatTransferMatrix,
    period: Time,
) -> Result<PeriodicQuantities, AnalysisError> {
    let z11 = matrix.z11();
    let z12 = matrix.z12();
    let z22 = matrix.z22();

    let modulus = z12.norm();
    if !modulus.is_finite() || modulus < SINGULAR_EPSILON {
        return Err(AnalysisError::SingularHeatTransferMatrix);
    }

    let period_hours = period.get::<hour>();
    let period_seconds = period.get::<second>();

    Ok(PeriodicQuantities {
        periodic_transmittance: 1.0 / modulus,
        time_shift_hours: z12.arg() * period_hours / (2.0 * PI) + period_hours / 2.0,
        admittance_interior: (-z11 / z12).norm(),
        admittance_exterior: (-z22 / z12).norm(),
        areal_heat_capacity_interior: period_seconds / (2.0 * PI) * ((z11 - 1.0) / z12).norm(),
        areal_heat_capacity_exterior: period_seconds / (2.0 * PI) * ((z22 - 1.0) / z12).norm(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn purely_resistive_matrix() {
        let matrix = HeatTransferMatrix::resistive(0.5);
        let quantities =
            periodic_quantities(matrix, Time::new::<hour>(24.0)).expect("regular matrix");

        assert_relative_eq!(quantities.periodic_transmittance, 2.0);
        assert_relative_eq!(quantities.admittance_interior, 2.0);
        assert_relative_eq!(quantities.admittance_exterior, 2.0);
        // Z11 = 1, so both faces store nothing.
        assert_relative_eq!(quantities.areal_heat_capacity_interior, 0.0);
        assert_relative_eq!(quantities.areal_heat_capacity_exterior, 0.0);
        // arg(-0.5) = π, so the raw phase is half a period and the
        // convention offset brings the shift to a full period.
        assert_relative_eq!(quantities.time_shift_hours, 24.0);
    }

    #[test]
    fn rejects_singular_matrix() {
        let matrix = HeatTransferMatrix::resistive(0.0);
        assert_eq!(
            periodic_quantities(matrix, Time::new::<hour>(24.0)),
            Err(AnalysisError::SingularHeatTransferMatrix),
        );
    }
}
