//! # PLScene Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use plscene::prelude::*;
//!
//! let mut scene = Scene::new();
//! let id = scene.add_object(SceneObject::new("hotspot"));
//!
//! let object = scene.get_object_mut(id).unwrap();
//! object.rotate_by_drag(Point2::new(0.0, 0.0), Point2::new(-30.0, 0.0));
//! assert_eq!(object.yaw(), 1.0);
//! ```

// Re-export core types
pub use crate::error::{Error, Result};
pub use crate::math::{Axis, Range, Rotation, RotationAxis};
pub use crate::scene::{
    ObjectBase, ObjectBuilder, ObjectConfig, ObjectGpuResources, ObjectId, ObjectUniform, Scene,
    SceneElement, SceneObject, SceneStatistics,
};

// Re-export UI panels
pub use crate::ui::object_inspector_panel;

// Re-export common external dependencies
pub use cgmath::{Matrix4, Point2, Vector3};
