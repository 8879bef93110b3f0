use thiserror::Error;

/// Errors that can occur while building or analyzing an envelope component.
///
/// Every variant is a validation failure detected at a stage boundary and
/// surfaced immediately; the computation is deterministic and pure, so no
/// variant is retryable, and no failure is downgraded to a default value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The heat flow direction code is not one of "Ho", "Up", or "Do".
    #[error("invalid heat flow direction: {given:?} (expected one of: Ho, Up, Do)")]
    InvalidHeatFlowDirection { given: String },

    /// A material property that must be strictly positive is not.
    #[error("invalid material property: {property} must be strictly positive, got {value}")]
    InvalidMaterialProperty { property: &'static str, value: f64 },

    /// A layer thickness that must be strictly positive is not.
    #[error("invalid thickness: must be strictly positive, got {value} m")]
    InvalidThickness { value: f64 },

    /// |Z12| of the component heat transfer matrix is numerically zero, so
    /// the periodic quantities are undefined.
    #[error("singular heat transfer matrix: |Z12| is numerically zero")]
    SingularHeatTransferMatrix,

    /// The component cannot be analyzed: empty layer stack, non-positive
    /// analysis period, or zero/undefined total thermal resistance.
    #[error("degenerate component: total thermal resistance is zero or undefined")]
    DegenerateComponent,
}
