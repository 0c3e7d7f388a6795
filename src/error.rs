//! Error types for configuration and point addressing.

use core::fmt;

/// Errors reported by the configuration surface.
///
/// The simulation itself never fails: degenerate geometry and out-of-range
/// coefficients are handled by policy. These errors exist for callers that
/// want to validate user input before it reaches the chain.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Font size must be positive and finite.
    InvalidFontSize,
    /// Friction must be in [0, 1).
    FrictionOutOfRange,
    /// Spring stiffness must be in [0, 1].
    SpringOutOfRange,
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidFontSize => write!(f, "font size must be positive and finite"),
            SimulationError::FrictionOutOfRange => write!(f, "friction must be in [0, 1)"),
            SimulationError::SpringOutOfRange => write!(f, "spring must be in [0, 1]"),
            SimulationError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
