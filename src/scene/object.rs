use cgmath::{Matrix4, Point2, Vector3, Zero};
use log::{trace, warn};

use super::base::ObjectBase;
use super::config::{validate_alpha, validate_sensitivity, ObjectConfig};
use super::traits::SceneElement;
use super::transform;
use crate::error::{Error, Result};
use crate::math::{Axis, Range, Rotation, RotationAxis};

/// A positionable, rotatable element of a panorama scene.
///
/// Position and rotation can be restricted per axis: a disabled axis ignores
/// writes, and every axis keeps its value inside its configured [`Range`].
/// Angles are normalised to a single turn before they are clamped. Alpha is
/// always kept inside `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    base: ObjectBase,
    position: Vector3<f32>,
    rotation: Rotation,
    alpha: f32,
    config: ObjectConfig,
}

impl SceneObject {
    /// Create an object at the origin with default limits
    pub fn new(name: impl Into<String>) -> Self {
        let config = ObjectConfig::default();
        Self {
            base: ObjectBase::new(name),
            position: Vector3::zero(),
            rotation: Rotation::ZERO,
            alpha: config.default_alpha,
            config,
        }
    }

    /// Create an object with custom limits.
    ///
    /// The resting state (origin, zero rotation) is clamped into the given
    /// ranges.
    pub fn with_config(name: impl Into<String>, config: ObjectConfig) -> Result<Self> {
        config.validate()?;
        let mut object = Self {
            base: ObjectBase::new(name),
            position: Vector3::zero(),
            rotation: Rotation::ZERO,
            alpha: config.default_alpha,
            config,
        };
        object.place(Vector3::zero(), Rotation::ZERO);
        Ok(object)
    }

    pub fn builder(name: impl Into<String>) -> ObjectBuilder {
        ObjectBuilder::new(name)
    }

    pub fn base(&self) -> &ObjectBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    pub fn config(&self) -> &ObjectConfig {
        &self.config
    }

    // Position

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn axis(&self, axis: Axis) -> f32 {
        self.position[axis.index()]
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn z(&self) -> f32 {
        self.position.z
    }

    /// Moves along one axis, clamped into its range. No-op on a disabled axis.
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        if !value.is_finite() {
            warn!(
                "{}: ignoring non-finite {} position {}",
                self.base.name(),
                axis.label(),
                value
            );
            return;
        }
        if !self.config.is_axis_enabled(axis) {
            trace!("{}: {} axis disabled", self.base.name(), axis.label());
            return;
        }

        let clamped = self.config.axis_range(axis).clamp(value);
        if clamped != value {
            trace!(
                "{}: {} clamped from {} to {}",
                self.base.name(),
                axis.label(),
                value,
                clamped
            );
        }
        self.position[axis.index()] = clamped;
    }

    pub fn set_x(&mut self, value: f32) {
        self.set_axis(Axis::X, value);
    }

    pub fn set_y(&mut self, value: f32) {
        self.set_axis(Axis::Y, value);
    }

    pub fn set_z(&mut self, value: f32) {
        self.set_axis(Axis::Z, value);
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        for axis in Axis::ALL {
            self.set_axis(axis, position[axis.index()]);
        }
    }

    pub fn translate_to(&mut self, x: f32, y: f32, z: f32) {
        self.set_position(Vector3::new(x, y, z));
    }

    pub fn translate_by(&mut self, delta: Vector3<f32>) {
        self.set_position(self.position + delta);
    }

    // Rotation

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn angle(&self, axis: RotationAxis) -> f32 {
        self.rotation.get(axis)
    }

    pub fn pitch(&self) -> f32 {
        self.rotation.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.yaw
    }

    pub fn roll(&self) -> f32 {
        self.rotation.roll
    }

    /// Turns around one axis. The angle is normalised and clamped into the
    /// axis range. No-op on a disabled axis.
    pub fn set_angle(&mut self, axis: RotationAxis, degrees: f32) {
        if !degrees.is_finite() {
            warn!(
                "{}: ignoring non-finite {} {}",
                self.base.name(),
                axis.label(),
                degrees
            );
            return;
        }
        if !self.config.is_rotation_enabled(axis) {
            trace!("{}: {} disabled", self.base.name(), axis.label());
            return;
        }

        let normalized = self.config.rotation_range(axis).normalize_angle(degrees);
        self.rotation.set(axis, normalized);
    }

    pub fn set_pitch(&mut self, degrees: f32) {
        self.set_angle(RotationAxis::Pitch, degrees);
    }

    pub fn set_yaw(&mut self, degrees: f32) {
        self.set_angle(RotationAxis::Yaw, degrees);
    }

    pub fn set_roll(&mut self, degrees: f32) {
        self.set_angle(RotationAxis::Roll, degrees);
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        for axis in RotationAxis::ALL {
            self.set_angle(axis, rotation.get(axis));
        }
    }

    pub fn rotate_to(&mut self, pitch: f32, yaw: f32, roll: f32) {
        self.set_rotation(Rotation::new(pitch, yaw, roll));
    }

    pub fn rotate_by(&mut self, delta: Rotation) {
        self.set_rotation(self.rotation + delta);
    }

    /// Rotates from a drag between two screen points using the object's
    /// sensitivity.
    pub fn rotate_by_drag(&mut self, start: Point2<f32>, end: Point2<f32>) {
        self.apply_drag(start, end, self.config.rotate_sensitivity);
    }

    /// Like [`rotate_by_drag`](Self::rotate_by_drag) with an explicit
    /// sensitivity (screen units per degree).
    pub fn rotate_by_drag_with(
        &mut self,
        start: Point2<f32>,
        end: Point2<f32>,
        sensitivity: f32,
    ) -> Result<()> {
        validate_sensitivity(sensitivity)?;
        self.apply_drag(start, end, sensitivity);
        Ok(())
    }

    fn apply_drag(&mut self, start: Point2<f32>, end: Point2<f32>, sensitivity: f32) {
        let pitch = self.rotation.pitch + (end.y - start.y) / sensitivity;
        let yaw = self.rotation.yaw + (start.x - end.x) / sensitivity;
        self.set_pitch(pitch);
        self.set_yaw(yaw);
    }

    // Axis enables

    pub fn is_axis_enabled(&self, axis: Axis) -> bool {
        self.config.is_axis_enabled(axis)
    }

    pub fn set_axis_enabled(&mut self, axis: Axis, enabled: bool) {
        self.config.axis_enabled[axis.index()] = enabled;
    }

    pub fn is_x_axis_enabled(&self) -> bool {
        self.is_axis_enabled(Axis::X)
    }

    pub fn is_y_axis_enabled(&self) -> bool {
        self.is_axis_enabled(Axis::Y)
    }

    pub fn is_z_axis_enabled(&self) -> bool {
        self.is_axis_enabled(Axis::Z)
    }

    pub fn is_rotation_enabled(&self, axis: RotationAxis) -> bool {
        self.config.is_rotation_enabled(axis)
    }

    pub fn set_rotation_enabled(&mut self, axis: RotationAxis, enabled: bool) {
        self.config.rotation_enabled[axis.index()] = enabled;
    }

    pub fn is_pitch_enabled(&self) -> bool {
        self.is_rotation_enabled(RotationAxis::Pitch)
    }

    pub fn is_yaw_enabled(&self) -> bool {
        self.is_rotation_enabled(RotationAxis::Yaw)
    }

    pub fn is_roll_enabled(&self) -> bool {
        self.is_rotation_enabled(RotationAxis::Roll)
    }

    // Ranges

    pub fn axis_range(&self, axis: Axis) -> Range {
        self.config.axis_range(axis)
    }

    /// Replaces an axis range and pulls the current coordinate inside it,
    /// even when the axis is disabled.
    pub fn set_axis_range(&mut self, axis: Axis, range: Range) {
        self.config.axis_ranges[axis.index()] = range;
        let i = axis.index();
        self.position[i] = range.clamp(self.position[i]);
    }

    pub fn rotation_range(&self, axis: RotationAxis) -> Range {
        self.config.rotation_range(axis)
    }

    /// Replaces a rotation range and re-normalises the current angle into it.
    pub fn set_rotation_range(&mut self, axis: RotationAxis, range: Range) {
        self.config.rotation_ranges[axis.index()] = range;
        let normalized = range.normalize_angle(self.rotation.get(axis));
        self.rotation.set(axis, normalized);
    }

    // Rotation composition

    pub fn is_reverse_rotation(&self) -> bool {
        self.config.reverse_rotation
    }

    pub fn set_reverse_rotation(&mut self, reverse: bool) {
        self.config.reverse_rotation = reverse;
    }

    pub fn is_yz_axis_inverse_rotation(&self) -> bool {
        self.config.yz_axis_inverse_rotation
    }

    pub fn set_yz_axis_inverse_rotation(&mut self, inverse: bool) {
        self.config.yz_axis_inverse_rotation = inverse;
    }

    pub fn rotate_sensitivity(&self) -> f32 {
        self.config.rotate_sensitivity
    }

    pub fn set_rotate_sensitivity(&mut self, sensitivity: f32) -> Result<()> {
        validate_sensitivity(sensitivity)?;
        self.config.rotate_sensitivity = sensitivity;
        Ok(())
    }

    // Transparency

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Sets the opacity, clamped into `[0, 1]`.
    pub fn set_alpha(&mut self, alpha: f32) {
        if !alpha.is_finite() {
            warn!("{}: ignoring non-finite alpha {}", self.base.name(), alpha);
            return;
        }
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn default_alpha(&self) -> f32 {
        self.config.default_alpha
    }

    /// Sets the alpha restored by [`reset`](Self::reset). The current alpha
    /// is left alone.
    pub fn set_default_alpha(&mut self, alpha: f32) -> Result<()> {
        validate_alpha(alpha)?;
        self.config.default_alpha = alpha;
        Ok(())
    }

    // Lifecycle

    /// Zeroes the rotation and restores the default alpha. Position and
    /// configuration are kept.
    pub fn reset(&mut self) {
        let position = self.position;
        self.place(position, Rotation::ZERO);
        self.alpha = self.config.default_alpha;
    }

    /// Copies state and configuration from another object. Identity (id,
    /// name, visibility) stays with `self`.
    pub fn copy_state_from(&mut self, other: &SceneObject) {
        self.position = other.position;
        self.rotation = other.rotation;
        self.alpha = other.alpha;
        self.config = other.config.clone();
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        transform::model_matrix(
            self.position,
            self.rotation,
            self.config.reverse_rotation,
            self.config.yz_axis_inverse_rotation,
        )
    }

    /// Writes position and rotation regardless of the enable flags, still
    /// honouring the ranges.
    fn place(&mut self, position: Vector3<f32>, rotation: Rotation) {
        for axis in Axis::ALL {
            let i = axis.index();
            self.position[i] = self.config.axis_range(axis).clamp(position[i]);
        }
        for axis in RotationAxis::ALL {
            let normalized = self.config.rotation_range(axis).normalize_angle(rotation.get(axis));
            self.rotation.set(axis, normalized);
        }
    }
}

impl Default for SceneObject {
    fn default() -> Self {
        Self::new(ObjectBase::default().name())
    }
}

impl SceneElement for SceneObject {
    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn position(&self) -> Vector3<f32> {
        self.position
    }

    fn set_position(&mut self, position: Vector3<f32>) {
        SceneObject::set_position(self, position);
    }

    fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        SceneObject::set_rotation(self, rotation);
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        SceneObject::set_alpha(self, alpha);
    }

    fn reset(&mut self) {
        SceneObject::reset(self);
    }

    fn model_matrix(&self) -> Matrix4<f32> {
        SceneObject::model_matrix(self)
    }
}

/// Builder for configuring a [`SceneObject`] before it enters a scene.
///
/// Invalid ranges are remembered and reported by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
    name: String,
    visible: bool,
    position: Vector3<f32>,
    rotation: Rotation,
    alpha: Option<f32>,
    config: ObjectConfig,
    error: Option<Error>,
}

impl ObjectBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            position: Vector3::zero(),
            rotation: Rotation::ZERO,
            alpha: None,
            config: ObjectConfig::default(),
            error: None,
        }
    }

    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    pub fn rotation(mut self, pitch: f32, yaw: f32, roll: f32) -> Self {
        self.rotation = Rotation::new(pitch, yaw, roll);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn axis_enabled(mut self, axis: Axis, enabled: bool) -> Self {
        self.config.axis_enabled[axis.index()] = enabled;
        self
    }

    pub fn rotation_enabled(mut self, axis: RotationAxis, enabled: bool) -> Self {
        self.config.rotation_enabled[axis.index()] = enabled;
        self
    }

    pub fn axis_range(mut self, axis: Axis, min: f32, max: f32) -> Self {
        match Range::new(min, max) {
            Ok(range) => self.config.axis_ranges[axis.index()] = range,
            Err(err) => self.record(err),
        }
        self
    }

    pub fn rotation_range(mut self, axis: RotationAxis, min: f32, max: f32) -> Self {
        match Range::new(min, max) {
            Ok(range) => self.config.rotation_ranges[axis.index()] = range,
            Err(err) => self.record(err),
        }
        self
    }

    pub fn reverse_rotation(mut self, reverse: bool) -> Self {
        self.config.reverse_rotation = reverse;
        self
    }

    pub fn yz_axis_inverse_rotation(mut self, inverse: bool) -> Self {
        self.config.yz_axis_inverse_rotation = inverse;
        self
    }

    pub fn rotate_sensitivity(mut self, sensitivity: f32) -> Self {
        self.config.rotate_sensitivity = sensitivity;
        self
    }

    pub fn default_alpha(mut self, alpha: f32) -> Self {
        self.config.default_alpha = alpha;
        self
    }

    fn record(&mut self, err: Error) {
        self.error.get_or_insert(err);
    }

    /// Validates the configuration and places the object.
    ///
    /// The initial position and rotation are clamped into the ranges even on
    /// disabled axes. Without an explicit alpha the default alpha is used.
    pub fn build(self) -> Result<SceneObject> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let mut object = SceneObject::with_config(self.name, self.config)?;
        object.base.set_visible(self.visible);
        object.place(self.position, self.rotation);
        if let Some(alpha) = self.alpha {
            validate_alpha(alpha)?;
            object.alpha = alpha;
        }
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::config::{DEFAULT_ROTATE_SENSITIVITY, FLOAT_MAX_VALUE, FLOAT_MIN_VALUE};
    use rand::Rng;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn range(min: f32, max: f32) -> Range {
        Range::new(min, max).unwrap()
    }

    #[test]
    fn test_new_object_defaults() {
        let object = SceneObject::new("sphere");

        assert_eq!(object.base().name(), "sphere");
        assert_eq!(object.position(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(object.rotation(), Rotation::ZERO);
        for axis in Axis::ALL {
            assert!(object.is_axis_enabled(axis));
            assert_eq!(object.axis_range(axis), range(FLOAT_MIN_VALUE, FLOAT_MAX_VALUE));
        }
        for axis in RotationAxis::ALL {
            assert!(object.is_rotation_enabled(axis));
            assert_eq!(object.rotation_range(axis), range(-180.0, 180.0));
        }
        assert!(!object.is_reverse_rotation());
        assert!(object.is_yz_axis_inverse_rotation());
        assert_eq!(object.rotate_sensitivity(), DEFAULT_ROTATE_SENSITIVITY);
        assert_eq!(object.alpha(), 1.0);
        assert_eq!(object.default_alpha(), 1.0);
        assert_eq!(SceneObject::default().base().name(), "Object");
    }

    #[test]
    fn test_position_is_clamped_into_range() {
        init_logger();
        let mut object = SceneObject::new("clamp");
        object.set_axis_range(Axis::X, range(-1.0, 1.0));

        object.set_x(5.0);
        assert_eq!(object.x(), 1.0);
        object.set_x(-0.5);
        assert_eq!(object.x(), -0.5);

        object.translate_to(10.0, 20.0, 30.0);
        assert_eq!(object.position(), Vector3::new(1.0, 20.0, 30.0));
    }

    #[test]
    fn test_disabled_axis_ignores_writes() {
        init_logger();
        let mut object = SceneObject::new("locked");
        object.set_y(3.0);
        object.set_axis_enabled(Axis::Y, false);

        object.set_y(9.0);
        object.translate_by(Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(object.position(), Vector3::new(1.0, 3.0, 1.0));
        assert!(!object.is_y_axis_enabled());

        object.set_rotation_enabled(RotationAxis::Yaw, false);
        object.rotate_to(10.0, 45.0, 5.0);
        assert_eq!(object.rotation(), Rotation::new(10.0, 0.0, 5.0));
        assert!(!object.is_yaw_enabled());
    }

    #[test]
    fn test_angles_are_normalized_then_clamped() {
        let mut object = SceneObject::new("angles");
        object.set_yaw(270.0);
        assert_eq!(object.yaw(), -90.0);

        object.set_rotation_range(RotationAxis::Pitch, range(-90.0, 90.0));
        object.set_pitch(135.0);
        assert_eq!(object.pitch(), 90.0);

        object.set_rotation_range(RotationAxis::Roll, range(0.0, 360.0));
        object.set_roll(-30.0);
        assert_eq!(object.roll(), 330.0);
        object.set_roll(-1e-6);
        assert_eq!(object.roll(), 0.0);
    }

    #[test]
    fn test_new_range_reapplies_current_value() {
        let mut object = SceneObject::new("shrink");
        object.translate_to(50.0, 0.0, 0.0);
        object.set_pitch(80.0);
        object.set_axis_enabled(Axis::X, false);

        object.set_axis_range(Axis::X, range(-10.0, 10.0));
        object.set_rotation_range(RotationAxis::Pitch, range(-45.0, 45.0));

        assert_eq!(object.x(), 10.0);
        assert_eq!(object.pitch(), 45.0);
    }

    #[test]
    fn test_state_setters_leave_configuration_alone() {
        let mut object = SceneObject::new("independent");
        object.set_axis_range(Axis::Z, range(-2.0, 2.0));
        object.set_rotation_enabled(RotationAxis::Roll, false);
        let config = object.config().clone();

        object.translate_to(1.0, 2.0, 3.0);
        object.rotate_to(10.0, 20.0, 30.0);
        object.set_alpha(0.3);

        assert_eq!(object.config(), &config);
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        init_logger();
        let mut object = SceneObject::new("nan");
        object.translate_to(1.0, 2.0, 3.0);
        object.set_x(f32::NAN);
        object.set_pitch(f32::INFINITY);
        object.set_alpha(f32::NAN);

        assert_eq!(object.x(), 1.0);
        assert_eq!(object.pitch(), 0.0);
        assert_eq!(object.alpha(), 1.0);

        object.set_alpha(0.3);
        object.set_alpha(f32::INFINITY);
        assert_eq!(object.alpha(), 0.3);
        object.set_alpha(f32::NEG_INFINITY);
        assert_eq!(object.alpha(), 0.3);

        object.set_y(f32::INFINITY);
        object.set_z(f32::NEG_INFINITY);
        object.set_yaw(f32::NEG_INFINITY);
        assert_eq!(object.position(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(object.yaw(), 0.0);
    }

    #[test]
    fn test_rotate_by_drag_uses_sensitivity() -> anyhow::Result<()> {
        let mut object = SceneObject::new("drag");
        object.set_rotate_sensitivity(10.0)?;

        object.rotate_by_drag(Point2::new(100.0, 100.0), Point2::new(50.0, 150.0));
        assert_eq!(object.pitch(), 5.0);
        assert_eq!(object.yaw(), 5.0);

        object.rotate_by_drag_with(Point2::new(0.0, 0.0), Point2::new(20.0, -40.0), 20.0)?;
        assert_eq!(object.pitch(), 3.0);
        assert_eq!(object.yaw(), 4.0);

        assert_eq!(
            object.rotate_by_drag_with(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), 0.0),
            Err(Error::InvalidSensitivity(0.0))
        );
        Ok(())
    }

    #[test]
    fn test_configuration_setters_validate() {
        let mut object = SceneObject::new("config");
        assert_eq!(
            object.set_rotate_sensitivity(-1.0),
            Err(Error::InvalidSensitivity(-1.0))
        );
        assert_eq!(object.rotate_sensitivity(), DEFAULT_ROTATE_SENSITIVITY);

        assert_eq!(object.set_default_alpha(2.0), Err(Error::AlphaOutOfBounds(2.0)));
        assert!(object.set_default_alpha(0.25).is_ok());
        assert_eq!(object.alpha(), 1.0);
    }

    #[test]
    fn test_reset_restores_rotation_and_alpha() -> anyhow::Result<()> {
        init_logger();
        let mut object = SceneObject::new("reset");
        object.set_default_alpha(0.5)?;
        object.translate_to(1.0, 2.0, 3.0);
        object.rotate_to(10.0, 20.0, 30.0);
        object.set_alpha(0.1);

        object.reset();

        assert_eq!(object.rotation(), Rotation::ZERO);
        assert_eq!(object.alpha(), 0.5);
        assert_eq!(object.position(), Vector3::new(1.0, 2.0, 3.0));
        Ok(())
    }

    #[test]
    fn test_reset_respects_ranges_excluding_zero() -> anyhow::Result<()> {
        let mut object = SceneObject::builder("tilted")
            .rotation_range(RotationAxis::Pitch, 10.0, 20.0)
            .build()?;
        assert_eq!(object.pitch(), 10.0);

        object.set_pitch(15.0);
        object.reset();
        assert_eq!(object.pitch(), 10.0);
        Ok(())
    }

    #[test]
    fn test_copy_state_keeps_identity() {
        let mut source = SceneObject::new("source");
        source.translate_to(4.0, 5.0, 6.0);
        source.rotate_to(1.0, 2.0, 3.0);
        source.set_alpha(0.4);
        source.set_reverse_rotation(true);

        let mut target = SceneObject::new("target");
        target.base_mut().set_visible(false);
        target.copy_state_from(&source);

        assert_eq!(target.position(), source.position());
        assert_eq!(target.rotation(), source.rotation());
        assert_eq!(target.alpha(), 0.4);
        assert!(target.is_reverse_rotation());
        assert_eq!(target.base().name(), "target");
        assert!(!target.base().is_visible());
    }

    #[test]
    fn test_builder_places_and_validates() -> anyhow::Result<()> {
        let object = SceneObject::builder("built")
            .position(5.0, -5.0, 0.0)
            .rotation(0.0, 200.0, 0.0)
            .axis_range(Axis::X, -1.0, 1.0)
            .axis_enabled(Axis::Y, false)
            .reverse_rotation(true)
            .yz_axis_inverse_rotation(false)
            .rotate_sensitivity(12.0)
            .default_alpha(0.8)
            .visible(false)
            .build()?;

        assert_eq!(object.position(), Vector3::new(1.0, -5.0, 0.0));
        assert_eq!(object.yaw(), -160.0);
        assert_eq!(object.alpha(), 0.8);
        assert_eq!(object.rotate_sensitivity(), 12.0);
        assert!(object.is_reverse_rotation());
        assert!(!object.is_yz_axis_inverse_rotation());
        assert!(!object.base().is_visible());

        let err = SceneObject::builder("bad")
            .axis_range(Axis::Z, 3.0, -3.0)
            .rotation_range(RotationAxis::Roll, 5.0, 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::InvalidRange { min: 3.0, max: -3.0 });

        assert!(SceneObject::builder("bad").alpha(1.5).build().is_err());
        assert!(SceneObject::builder("bad").rotate_sensitivity(0.0).build().is_err());
        Ok(())
    }

    #[test]
    fn test_alpha_stays_bounded_under_random_mutation() {
        let mut rng = rand::rng();
        let mut object = SceneObject::new("fuzz");

        for _ in 0..1_000 {
            match rng.random_range(0..4) {
                0 => object.set_alpha(rng.random_range(-10.0..10.0)),
                1 => {
                    let _ = object.set_default_alpha(rng.random_range(-2.0..2.0));
                }
                2 => object.reset(),
                _ => object.rotate_by(Rotation::new(
                    rng.random_range(-720.0..720.0),
                    rng.random_range(-720.0..720.0),
                    rng.random_range(-720.0..720.0),
                )),
            }

            assert!((0.0..=1.0).contains(&object.alpha()));
            assert!((0.0..=1.0).contains(&object.default_alpha()));
            for axis in RotationAxis::ALL {
                assert!(object.rotation_range(axis).contains(object.angle(axis)));
            }
        }
    }

    #[test]
    fn test_trait_object_model_matrix() {
        let mut object = SceneObject::new("matrix");
        object.translate_to(1.0, 0.0, 0.0);

        let element: &mut dyn SceneElement = &mut object;
        element.set_rotation(Rotation::new(0.0, 90.0, 0.0));
        assert_eq!(element.rotation().yaw, 90.0);
        assert_eq!(element.name(), "matrix");

        let m = element.model_matrix();
        assert_eq!(m.w.x, 1.0);
    }

    #[test]
    fn test_objects_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SceneObject>();
    }
}
