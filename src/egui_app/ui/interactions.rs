//! Gesture handling over the shared canvas state.
//!
//! Pointer and wheel handlers are free functions over [`CanvasUiState`] so
//! the drag/hover behavior can be exercised without an egui context.

use eframe::egui::Pos2;

use super::{hover, view_math};
use crate::egui_app::state::CanvasUiState;
use crate::points::Point;

/// Begin a drag at a canvas-local position.
pub(crate) fn pointer_down(state: &mut CanvasUiState, pos: Pos2) {
    state.drag.active = true;
    state.drag.last_pos = pos;
}

/// Track the cursor.
///
/// The hovered point is recomputed on every move regardless of drag status;
/// while a drag is active the screen-space delta since the previous event is
/// folded into the view translation.
pub(crate) fn pointer_move(state: &mut CanvasUiState, points: &[Point], pos: Pos2) {
    let cursor_world = view_math::cursor_to_world(pos, &state.view);
    state.hovered = hover::find_hover_point(points, cursor_world);

    if state.drag.active {
        let delta = pos - state.drag.last_pos;
        view_math::apply_pan(&mut state.view, delta);
        state.drag.last_pos = pos;
    }
}

/// End the active drag, if any.
pub(crate) fn pointer_up(state: &mut CanvasUiState) {
    state.drag.active = false;
}

/// Apply one wheel step; positive delta zooms out. Independent of dragging.
pub(crate) fn wheel(state: &mut CanvasUiState, wheel_delta_y: f32) {
    view_math::apply_zoom(&mut state.view, wheel_delta_y);
}
