//! Shared state types for the egui UI.

use egui::{Pos2, Vec2};

/// Pan/zoom mapping from world space to screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Uniform zoom factor applied to world coordinates.
    pub scale: f32,
    /// Screen-space offset added after scaling.
    pub translate: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

/// Drag bookkeeping between consecutive pointer-move events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag is in progress.
    pub active: bool,
    /// Cursor position recorded at the previous pointer event.
    pub last_pos: Pos2,
}

/// Frame statistics surfaced in the top bar.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderStats {
    /// Time spent painting the most recent frame, in milliseconds.
    pub last_render_ms: f32,
    /// Number of point markers painted in the most recent frame.
    pub points_drawn: usize,
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct CanvasUiState {
    /// Current view transform.
    pub view: ViewState,
    /// Active drag bookkeeping.
    pub drag: DragState,
    /// Index of the point currently nearest the cursor, if any.
    pub hovered: Option<usize>,
    /// Statistics from the most recent frame.
    pub stats: RenderStats,
}
