//! # Math Module
//!
//! Value types shared by scene objects: bounded ranges with angle
//! normalisation, Euler rotations and the axis enums used to address them.
//! Vectors and matrices come from `cgmath`.

pub mod range;
pub mod rotation;

pub use range::Range;
pub use rotation::{Axis, Rotation, RotationAxis};
