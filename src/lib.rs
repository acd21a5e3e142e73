// src/lib.rs
//! PLScene
//!
//! Scene elements for panorama viewers: objects that can be positioned and
//! rotated with per-axis enables and limits, faded through an alpha value,
//! uploaded to the GPU with wgpu and inspected with Dear ImGui.

pub mod error;
pub mod math;
pub mod prelude;
pub mod scene;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use scene::{Scene, SceneElement, SceneObject};

/// Installs an `env_logger` logger configured from `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs a logger.
pub fn init_logging() {
    if env_logger::try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
