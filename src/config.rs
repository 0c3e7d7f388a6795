//! Configuration for an elastic string.

use alloc::string::String;
use crate::error::SimulationError;
use crate::float::Float;

/// Font and physics coefficients for an [`ElasticString`](crate::ElasticString).
///
/// # Builder Pattern
/// ```
/// use slinky::config::SimulationConfig;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_font_size(25.0)
///     .with_font_family("Georgia, Times, serif")
///     .with_friction(0.02)
///     .with_spring(0.6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Base font size in pixels. Glyphs never render smaller. Default: 1.
    pub font_size: F,
    /// Font family passed to the metrics service and draw surface. Default: `"serif"`.
    pub font_family: String,
    /// Damping coefficient in [0, 1). 0 = undamped. Default: 0.02.
    pub friction: F,
    /// Constraint stiffness in [0, 1]. 1 = full correction per frame. Default: 0.6.
    pub spring: F,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            font_size: F::one(),
            font_family: String::from("serif"),
            friction: F::from_f32(0.02),
            spring: F::from_f32(0.6),
        }
    }

    /// Set the base font size.
    pub fn with_font_size(mut self, font_size: F) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Set the friction (damping) coefficient.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the spring stiffness.
    pub fn with_spring(mut self, spring: F) -> Self {
        self.spring = spring;
        self
    }

    /// Check every field against its documented range.
    ///
    /// The chain accepts any values; this is for UI layers that want to
    /// reject input rather than simulate implausible physics.
    pub fn validate(&self) -> Result<(), SimulationError> {
        validate_font_size(self.font_size)?;
        validate_friction(self.friction)?;
        validate_spring(self.spring)
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_font_size<F: Float>(font_size: F) -> Result<(), SimulationError> {
    if font_size.is_finite() && font_size > F::zero() {
        Ok(())
    } else {
        Err(SimulationError::InvalidFontSize)
    }
}

pub fn validate_friction<F: Float>(friction: F) -> Result<(), SimulationError> {
    if friction >= F::zero() && friction < F::one() {
        Ok(())
    } else {
        Err(SimulationError::FrictionOutOfRange)
    }
}

pub fn validate_spring<F: Float>(spring: F) -> Result<(), SimulationError> {
    if spring >= F::zero() && spring <= F::one() {
        Ok(())
    } else {
        Err(SimulationError::SpringOutOfRange)
    }
}
