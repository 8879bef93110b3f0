//! Steady-state and dynamic thermal analysis of building envelope
//! components.
//!
//! A [`Component`] is a stack of [`Layer`]s (solid materials and
//! unventilated air gaps) crossed by heat in a [`HeatFlowDirection`].
//! [`Component::analyze`] evaluates the stack twice over:
//!
//! - steady state per ISO 6946: total resistance and transmittance, with
//!   the standard surface resistances and the tabulated equivalent
//!   resistance of air gaps;
//! - dynamic per ISO 13786: the complex [`HeatTransferMatrix`] of the
//!   stack under a sinusoidal excitation (24 h by default), from which
//!   the periodic transmittance, decrement factor, time shift,
//!   admittances, and areal heat capacities follow.
//!
//! The combined results land in one [`Analysis`] snapshot, which
//! [`report::summary`] can render as text. The decrement factor and time
//! shift are also graded into a [`SummerPerformance`] class.

mod air_resistance;
mod analysis;
mod component;
mod core;
mod direction;
mod error;
mod layer;

pub mod report;

pub use self::core::{HeatTransferMatrix, SummerPerformance};
pub use air_resistance::unventilated_air_layer_resistance;
pub use analysis::Analysis;
pub use component::Component;
pub use direction::{HeatFlowDirection, SurfaceResistances};
pub use error::AnalysisError;
pub use layer::{Layer, LayerKind};
