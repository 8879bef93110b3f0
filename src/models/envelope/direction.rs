use std::{fmt, str::FromStr};

use super::error::AnalysisError;
use crate::support::units::{ArealThermalResistance, areal_thermal_resistance};

/// Direction of heat flow through a component.
///
/// The direction selects the ISO 6946 surface resistance pair and the
/// resistance row for unventilated air layers. Reversing a layer stack
/// without reassigning the direction changes the results; the direction is
/// part of the component's identity, not a display hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatFlowDirection {
    /// Horizontal heat flow (e.g. a wall).
    Horizontal,
    /// Upward heat flow (e.g. a roof).
    Upward,
    /// Downward heat flow (e.g. a floor).
    Downward,
}

/// The interior (Rsi) and exterior (Rse) surface thermal resistances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceResistances {
    /// Interior surface resistance Rsi.
    pub interior: ArealThermalResistance,
    /// Exterior surface resistance Rse.
    pub exterior: ArealThermalResistance,
}

impl HeatFlowDirection {
    /// Surface resistances (Rsi, Rse) per ISO 6946, in m²·K/W.
    #[must_use]
    pub fn surface_resistances(self) -> SurfaceResistances {
        let (interior, exterior) = match self {
            Self::Horizontal => (0.13, 0.04),
            Self::Upward => (0.10, 0.04),
            Self::Downward => (0.17, 0.04),
        };
        SurfaceResistances {
            interior: areal_thermal_resistance(interior),
            exterior: areal_thermal_resistance(exterior),
        }
    }

    /// The two-letter worksheet code for this direction.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Horizontal => "Ho",
            Self::Upward => "Up",
            Self::Downward => "Do",
        }
    }
}

impl FromStr for HeatFlowDirection {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ho" => Ok(Self::Horizontal),
            "Up" => Ok(Self::Upward),
            "Do" => Ok(Self::Downward),
            other => Err(AnalysisError::InvalidHeatFlowDirection {
                given: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for HeatFlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Horizontal => "horizontal",
            Self::Upward => "upward",
            Self::Downward => "downward",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn surface_resistance_pairs_match_iso_6946() {
        let horizontal = HeatFlowDirection::Horizontal.surface_resistances();
        assert_relative_eq!(horizontal.interior.value, 0.13);
        assert_relative_eq!(horizontal.exterior.value, 0.04);

        let upward = HeatFlowDirection::Upward.surface_resistances();
        assert_relative_eq!(upward.interior.value, 0.10);
        assert_relative_eq!(upward.exterior.value, 0.04);

        let downward = HeatFlowDirection::Downward.surface_resistances();
        assert_relative_eq!(downward.interior.value, 0.17);
        assert_relative_eq!(downward.exterior.value, 0.04);
    }

    #[test]
    fn parses_worksheet_codes() {
        assert_eq!("Ho".parse(), Ok(HeatFlowDirection::Horizontal));
        assert_eq!("Up".parse(), Ok(HeatFlowDirection::Upward));
        assert_eq!("Do".parse(), Ok(HeatFlowDirection::Downward));
    }

    #[test]
    fn rejects_unknown_codes() {
        for bad in ["", "ho", "Horizontal", "Sideways"] {
            assert_eq!(
                bad.parse::<HeatFlowDirection>(),
                Err(AnalysisError::InvalidHeatFlowDirection {
                    given: bad.to_owned(),
                }),
            );
        }
    }

    #[test]
    fn codes_round_trip() {
        for direction in [
            HeatFlowDirection::Horizontal,
            HeatFlowDirection::Upward,
            HeatFlowDirection::Downward,
        ] {
            assert_eq!(direction.code().parse(), Ok(direction));
        }
    }
}
