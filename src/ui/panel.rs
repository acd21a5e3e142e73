// src/ui/panel.rs
//! Default inspector panel for scene objects
//!
//! Lists the objects of a [`Scene`] and edits the selected one. All edits go
//! through the object's setters, so disabled axes and ranges are honoured.

use crate::math::{Axis, Range, RotationAxis};
use crate::scene::{ObjectId, Scene, SceneObject};

/// Position sliders span this distance from the origin unless the range or
/// the current value calls for less or more
const POSITION_SLIDER_EXTENT: f32 = 10.0;
const SENSITIVITY_SLIDER: (f32, f32) = (1.0, 100.0);

/// Object inspector panel
///
/// # Arguments
/// * `ui` - ImGui UI context
/// * `scene` - Mutable scene reference for object manipulation
/// * `selected` - Currently selected object, cleared if it left the scene
pub fn object_inspector_panel(ui: &imgui::Ui, scene: &mut Scene, selected: &mut Option<ObjectId>) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }
    let panel_width = (display_size[0] * 0.3).clamp(380.0, 500.0);
    let panel_height = (display_size[1] * 0.85).max(500.0);

    ui.window("Object Inspector")
        .size([panel_width, panel_height], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(true)
        .collapsible(true)
        .build(|| {
            render_object_list(ui, scene, selected);
            ui.separator();

            if let Some(id) = *selected {
                match scene.get_object_mut(id) {
                    Some(object) => render_object_controls(ui, object),
                    None => *selected = None,
                }
            }
        });
}

fn render_object_list(ui: &imgui::Ui, scene: &Scene, selected: &mut Option<ObjectId>) {
    ui.text("Scene Objects");

    let names = scene.get_object_names();
    if names.is_empty() {
        ui.text("No objects");
        return;
    }

    ui.child_window("object_list")
        .size([0.0, 150.0])
        .border(true)
        .build(|| {
            for (id, name) in &names {
                if ui
                    .selectable_config(format!("{}##{}", name, id.raw()))
                    .selected(*selected == Some(*id))
                    .build()
                {
                    *selected = Some(*id);
                }
            }
        });
}

fn render_object_controls(ui: &imgui::Ui, object: &mut SceneObject) {
    ui.text(format!("Selected: {}", object.base().name()));
    ui.spacing();

    if ui.collapsing_header("Position", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        for axis in Axis::ALL {
            let mut value = object.axis(axis);
            let (min, max) = slider_bounds(object.axis_range(axis), POSITION_SLIDER_EXTENT, value);
            ui.disabled(!object.is_axis_enabled(axis), || {
                if ui.slider(format!("{}##pos", axis.label()), min, max, &mut value) {
                    object.set_axis(axis, value);
                }
            });
        }
    }

    if ui.collapsing_header("Rotation", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        for axis in RotationAxis::ALL {
            let range = object.rotation_range(axis);
            let mut value = object.angle(axis);
            ui.disabled(!object.is_rotation_enabled(axis), || {
                if ui.slider(format!("{}##rot", axis.label()), range.min(), range.max(), &mut value) {
                    object.set_angle(axis, value);
                }
            });
        }

        let mut sensitivity = object.rotate_sensitivity();
        let (min, max) = widen_to(SENSITIVITY_SLIDER, sensitivity);
        if ui.slider("Sensitivity", min, max, &mut sensitivity) {
            if let Err(err) = object.set_rotate_sensitivity(sensitivity) {
                log::warn!("{}", err);
            }
        }
    }

    if ui.collapsing_header("Constraints", imgui::TreeNodeFlags::empty()) {
        for axis in Axis::ALL {
            let mut enabled = object.is_axis_enabled(axis);
            if ui.checkbox(format!("{} axis", axis.label()), &mut enabled) {
                object.set_axis_enabled(axis, enabled);
            }
        }
        for axis in RotationAxis::ALL {
            let mut enabled = object.is_rotation_enabled(axis);
            if ui.checkbox(axis.label(), &mut enabled) {
                object.set_rotation_enabled(axis, enabled);
            }
        }

        let mut reverse = object.is_reverse_rotation();
        if ui.checkbox("Reverse rotation", &mut reverse) {
            object.set_reverse_rotation(reverse);
        }
        let mut inverse = object.is_yz_axis_inverse_rotation();
        if ui.checkbox("Inverse Y/Z rotation", &mut inverse) {
            object.set_yz_axis_inverse_rotation(inverse);
        }
    }

    if ui.collapsing_header("Appearance", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        let mut alpha = object.alpha();
        if ui.slider("Alpha", 0.0, 1.0, &mut alpha) {
            object.set_alpha(alpha);
        }
        let mut default_alpha = object.default_alpha();
        if ui.slider("Default alpha", 0.0, 1.0, &mut default_alpha) {
            if let Err(err) = object.set_default_alpha(default_alpha) {
                log::warn!("{}", err);
            }
        }
        let mut visible = object.base().is_visible();
        if ui.checkbox("Visible", &mut visible) {
            object.base_mut().set_visible(visible);
        }
    }

    ui.spacing();
    if ui.button("Reset") {
        object.reset();
    }
    ui.same_line();
    if ui.button("Center") {
        object.translate_to(0.0, 0.0, 0.0);
    }
}

/// Slider limits for a range, cut down to `extent` around the origin when
/// the range overlaps it, and always wide enough to show `current`.
fn slider_bounds(range: Range, extent: f32, current: f32) -> (f32, f32) {
    let min = range.min().max(-extent);
    let max = range.max().min(extent);
    let bounds = if min < max {
        (min, max)
    } else {
        (range.min(), range.max())
    };
    widen_to(bounds, current)
}

/// Grows `(min, max)` so that it contains `value`
fn widen_to((min, max): (f32, f32), value: f32) -> (f32, f32) {
    (min.min(value), max.max(value))
}
