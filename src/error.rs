//! Error types for object configuration.

use thiserror::Error;

/// Errors raised when an object is configured with values that would break
/// its invariants.
///
/// Live state (position, rotation, alpha) never produces errors: those setters
/// clamp or ignore. Only configuration is validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid range [{min}, {max}]: bounds must be finite and min <= max")]
    InvalidRange { min: f32, max: f32 },
    #[error("rotate sensitivity must be finite and greater than zero, got {0}")]
    InvalidSensitivity(f32),
    #[error("alpha must be within [0, 1], got {0}")]
    AlphaOutOfBounds(f32),
}

pub type Result<T> = std::result::Result<T, Error>;
