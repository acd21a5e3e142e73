//! Object configuration and defaults.
//!
//! [`ObjectConfig`] groups everything about an object that is not live state:
//! which axes may move, the limits they move within, how rotation is composed
//! and how sensitive drag rotation is.

use crate::error::{Error, Result};
use crate::math::{Axis, Range, RotationAxis};

/// Lower bound of the default position range
pub const FLOAT_MIN_VALUE: f32 = -1_000_000.0;
/// Upper bound of the default position range
pub const FLOAT_MAX_VALUE: f32 = 1_000_000.0;

pub const DEFAULT_POSITION_RANGE: Range = Range::from_bounds(FLOAT_MIN_VALUE, FLOAT_MAX_VALUE);
pub const DEFAULT_ROTATION_RANGE: Range = Range::from_bounds(-180.0, 180.0);
pub const DEFAULT_ROTATE_SENSITIVITY: f32 = 30.0;
pub const DEFAULT_ALPHA: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectConfig {
    pub axis_enabled: [bool; 3],
    pub axis_ranges: [Range; 3],
    pub rotation_enabled: [bool; 3],
    pub rotation_ranges: [Range; 3],
    /// Apply pitch before yaw instead of yaw before pitch
    pub reverse_rotation: bool,
    /// Rotate yaw and roll around the negative Y and Z axes
    pub yz_axis_inverse_rotation: bool,
    pub rotate_sensitivity: f32,
    pub default_alpha: f32,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            axis_enabled: [true; 3],
            axis_ranges: [DEFAULT_POSITION_RANGE; 3],
            rotation_enabled: [true; 3],
            rotation_ranges: [DEFAULT_ROTATION_RANGE; 3],
            reverse_rotation: false,
            yz_axis_inverse_rotation: true,
            rotate_sensitivity: DEFAULT_ROTATE_SENSITIVITY,
            default_alpha: DEFAULT_ALPHA,
        }
    }
}

impl ObjectConfig {
    /// Checks the scalar settings. Ranges are valid by construction.
    pub fn validate(&self) -> Result<()> {
        validate_sensitivity(self.rotate_sensitivity)?;
        validate_alpha(self.default_alpha)?;
        Ok(())
    }

    pub fn axis_range(&self, axis: Axis) -> Range {
        self.axis_ranges[axis.index()]
    }

    pub fn rotation_range(&self, axis: RotationAxis) -> Range {
        self.rotation_ranges[axis.index()]
    }

    pub fn is_axis_enabled(&self, axis: Axis) -> bool {
        self.axis_enabled[axis.index()]
    }

    pub fn is_rotation_enabled(&self, axis: RotationAxis) -> bool {
        self.rotation_enabled[axis.index()]
    }
}

pub(crate) fn validate_sensitivity(value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSensitivity(value))
    }
}

pub(crate) fn validate_alpha(value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::AlphaOutOfBounds(value))
    }
}
