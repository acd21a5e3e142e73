use cgmath::{Matrix4, SquareMatrix};

use super::traits::SceneElement;

/// Per-object uniform: model matrix and opacity.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    /// Column-major model matrix
    pub model: [[f32; 4]; 4],
    pub alpha: f32,
    /// Pads the struct to the 16 byte alignment uniforms require
    pub _padding: [f32; 3],
}

impl ObjectUniform {
    pub fn from_element(element: &impl SceneElement) -> Self {
        Self {
            model: element.model_matrix().into(),
            alpha: element.alpha(),
            _padding: [0.0; 3],
        }
    }
}

impl Default for ObjectUniform {
    fn default() -> Self {
        Self {
            model: Matrix4::<f32>::identity().into(),
            alpha: 1.0,
            _padding: [0.0; 3],
        }
    }
}
