//! # Scene Element Trait
//!
//! The capability interface every element placed in a panorama scene
//! implements. Code that only needs to move, fade or upload an element (the
//! GPU uniform, the inspector panel) is written against this trait rather than
//! against [`SceneObject`](super::SceneObject).

use cgmath::{Matrix4, Vector3};

use super::base::ObjectBase;
use crate::math::Rotation;

/// Core trait for elements of a panorama scene.
///
/// Implementors own an [`ObjectBase`] for identity and expose their spatial
/// and visual state. Setters are expected to uphold the implementor's own
/// limits (clamping instead of failing).
///
/// ## Examples
///
/// ```
/// use plscene::prelude::*;
///
/// fn fade_out(element: &mut impl SceneElement) {
///     element.set_alpha(0.0);
/// }
///
/// let mut object = SceneObject::new("hotspot");
/// fade_out(&mut object);
/// assert_eq!(object.alpha(), 0.0);
/// ```
pub trait SceneElement {
    fn base(&self) -> &ObjectBase;

    fn base_mut(&mut self) -> &mut ObjectBase;

    /// Display name, taken from the base
    fn name(&self) -> &str {
        self.base().name()
    }

    fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    fn position(&self) -> Vector3<f32>;

    fn set_position(&mut self, position: Vector3<f32>);

    /// Euler rotation in degrees
    fn rotation(&self) -> Rotation;

    fn set_rotation(&mut self, rotation: Rotation);

    /// Opacity in `[0, 1]`
    fn alpha(&self) -> f32;

    fn set_alpha(&mut self, alpha: f32);

    /// Returns the element to its resting state.
    fn reset(&mut self);

    /// Local-to-world transform combining translation and rotation.
    fn model_matrix(&self) -> Matrix4<f32>;
}
