use crate::error::{Error, Result};

/// Closed interval `[min, max]` bounding a coordinate or an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f32,
    max: f32,
}

impl Range {
    /// Creates a range, rejecting non-finite bounds and `min > max`.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Crate-internal constructor for bounds known to be valid.
    pub(crate) const fn from_bounds(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Wraps an angle in degrees and then clamps it.
    ///
    /// Ranges with a negative minimum use the signed turn `(-180, 180]`,
    /// others the unsigned turn `[0, 360)`.
    pub fn normalize_angle(&self, degrees: f32) -> f32 {
        let mut wrapped = degrees.rem_euclid(360.0);
        // tiny negative inputs round up to a full turn
        if wrapped >= 360.0 {
            wrapped -= 360.0;
        }
        if self.min < 0.0 && wrapped > 180.0 {
            wrapped -= 360.0;
        }
        self.clamp(wrapped)
    }
}
