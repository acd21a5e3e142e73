//! Model matrix composition for scene objects.

use cgmath::{Deg, Matrix4, Vector3};

use crate::math::Rotation;

/// Builds the rotation part of an object's model matrix.
///
/// The default composition is `Ry * Rx * Rz`; `reverse` swaps the first two
/// factors (`Rx * Ry * Rz`). With `yz_inverse` yaw and roll turn around the
/// negative Y and Z axes.
pub fn rotation_matrix(rotation: Rotation, reverse: bool, yz_inverse: bool) -> Matrix4<f32> {
    let direction = if yz_inverse { -1.0 } else { 1.0 };

    let pitch = Matrix4::from_angle_x(Deg(rotation.pitch));
    let yaw = Matrix4::from_angle_y(Deg(rotation.yaw * direction));
    let roll = Matrix4::from_angle_z(Deg(rotation.roll * direction));

    if reverse {
        pitch * yaw * roll
    } else {
        yaw * pitch * roll
    }
}

/// Translation followed by rotation: `T * R`.
pub fn model_matrix(
    position: Vector3<f32>,
    rotation: Rotation,
    reverse: bool,
    yz_inverse: bool,
) -> Matrix4<f32> {
    Matrix4::from_translation(position) * rotation_matrix(rotation, reverse, yz_inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{SquareMatrix, Vector4};

    fn apply(matrix: Matrix4<f32>, v: Vector4<f32>) -> Vector3<f32> {
        (matrix * v).truncate()
    }

    fn assert_close(actual: Vector3<f32>, expected: Vector3<f32>) {
        let diff = actual - expected;
        assert!(
            diff.x.abs() < 1e-5 && diff.y.abs() < 1e-5 && diff.z.abs() < 1e-5,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_identity_when_at_rest() {
        let m = model_matrix(Vector3::new(0.0, 0.0, 0.0), Rotation::ZERO, false, true);
        assert_eq!(m, Matrix4::identity());
    }

    #[test]
    fn test_translation_moves_origin() {
        let m = model_matrix(Vector3::new(1.0, 2.0, 3.0), Rotation::ZERO, false, false);
        assert_close(
            apply(m, Vector4::new(0.0, 0.0, 0.0, 1.0)),
            Vector3::new(1.0, 2.0, 3.0),
        );
    }

    #[test]
    fn test_yz_inverse_flips_yaw_direction() {
        let yaw = Rotation::new(0.0, 90.0, 0.0);
        let x = Vector4::new(1.0, 0.0, 0.0, 0.0);

        assert_close(
            apply(rotation_matrix(yaw, false, false), x),
            Vector3::new(0.0, 0.0, -1.0),
        );
        assert_close(
            apply(rotation_matrix(yaw, false, true), x),
            Vector3::new(0.0, 0.0, 1.0),
        );
    }

    #[test]
    fn test_reverse_rotation_changes_order() {
        let rotation = Rotation::new(90.0, 90.0, 0.0);
        let forward = Vector4::new(0.0, 0.0, 1.0, 0.0);

        // pitch first, then yaw
        assert_close(
            apply(rotation_matrix(rotation, false, false), forward),
            Vector3::new(0.0, -1.0, 0.0),
        );
        // yaw first, then pitch
        assert_close(
            apply(rotation_matrix(rotation, true, false), forward),
            Vector3::new(1.0, 0.0, 0.0),
        );
    }
}
