//! # User Interface Module
//!
//! Dear ImGui panels for inspecting and editing scene objects. The host owns
//! the ImGui context and renderer; these functions only build widgets for a
//! frame.
//!
//! ## Usage
//!
//! ```no_run
//! use plscene::scene::{ObjectId, Scene};
//! use plscene::ui::object_inspector_panel;
//!
//! fn draw(ui: &imgui::Ui, scene: &mut Scene, selected: &mut Option<ObjectId>) {
//!     object_inspector_panel(ui, scene, selected);
//! }
//! ```

pub mod panel;

// Re-export main types
pub use panel::object_inspector_panel;
