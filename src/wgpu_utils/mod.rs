// src/wgpu_utils/mod.rs
//! WGPU utility functions and helpers
//!
//! Provides a typed uniform buffer wrapper used to upload object state.

pub mod uniform_buffer;

pub use uniform_buffer::UniformBuffer;
