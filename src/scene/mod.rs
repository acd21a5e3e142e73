//! # Scene Module
//!
//! Scene elements for panorama viewers and the scene that owns them.
//!
//! ## Key Components
//!
//! - [`SceneObject`] - Positionable, rotatable element with per-axis limits and alpha
//! - [`SceneElement`] - Capability trait every element implements
//! - [`ObjectBase`] - Identity shared by all elements (id, name, visibility)
//! - [`ObjectBuilder`] / [`ObjectConfig`] - Configuration of limits and rotation behaviour
//! - [`Scene`] - Flat owner of objects, hands out [`ObjectId`]s
//! - [`ObjectUniform`] / [`ObjectGpuResources`] - GPU upload of model matrix and alpha
//!
//! ## Usage
//!
//! ```
//! use plscene::scene::{Scene, SceneObject};
//! use plscene::math::RotationAxis;
//!
//! let mut scene = Scene::new();
//! let hotspot = SceneObject::builder("hotspot")
//!     .rotation_range(RotationAxis::Pitch, -90.0, 90.0)
//!     .build()
//!     .unwrap();
//! let id = scene.add_object(hotspot);
//!
//! let object = scene.get_object_mut(id).unwrap();
//! object.set_pitch(120.0);
//! assert_eq!(object.pitch(), 90.0);
//! ```

pub mod base;
pub mod config;
pub mod gpu;
pub mod object;
pub mod scene;
pub mod traits;
pub mod transform;
pub mod uniform;

// Re-export main types
pub use base::{ObjectBase, ObjectId};
pub use config::ObjectConfig;
pub use gpu::ObjectGpuResources;
pub use object::{ObjectBuilder, SceneObject};
pub use scene::{Scene, SceneStatistics};
pub use traits::SceneElement;
pub use uniform::ObjectUniform;
