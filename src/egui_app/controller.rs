//! Maintains app state and bridges the point set to the egui UI.

use eframe::egui::Pos2;

use crate::config::{self, AppConfig};
use crate::egui_app::state::CanvasUiState;
use crate::egui_app::ui::interactions;
use crate::points::{self, Point};

/// Largest point count the viewer will generate, regardless of configuration.
pub const MAX_POINT_COUNT: usize = 200_000;

/// Maintains app state and bridges core logic to the egui UI.
pub struct CanvasController {
    /// UI model consumed by the renderer.
    pub ui: CanvasUiState,
    points: Vec<Point>,
    settings: AppConfig,
}

impl CanvasController {
    /// Create a controller with an empty point set.
    pub fn new() -> Self {
        Self {
            ui: CanvasUiState::default(),
            points: Vec::new(),
            settings: AppConfig::default(),
        }
    }

    /// Create a controller over a fixed point set, bypassing configuration.
    pub fn with_points(points: Vec<Point>) -> Self {
        let mut controller = Self::new();
        controller.points = points;
        controller
    }

    /// Load persisted config and generate the startup point set.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let mut cfg = config::load_or_init()?;
        cfg.point_count = clamp_point_count(cfg.point_count);
        self.points = points::generate(cfg.point_count, cfg.point_seed);
        tracing::info!(
            count = self.points.len(),
            seeded = cfg.point_seed.is_some(),
            "Generated point set"
        );
        self.settings = cfg;
        Ok(())
    }

    /// The immutable point set.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points in the set.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Settings the controller was configured with.
    pub fn settings(&self) -> &AppConfig {
        &self.settings
    }

    /// Restore the default view transform.
    pub fn reset_view(&mut self) {
        self.ui.view = Default::default();
    }

    /// Begin a drag at a canvas-local position.
    pub fn pointer_down(&mut self, pos: Pos2) {
        interactions::pointer_down(&mut self.ui, pos);
    }

    /// Track the cursor: recompute the hovered point, and pan while dragging.
    pub fn pointer_move(&mut self, pos: Pos2) {
        interactions::pointer_move(&mut self.ui, &self.points, pos);
    }

    /// End the active drag, if any.
    pub fn pointer_up(&mut self) {
        interactions::pointer_up(&mut self.ui);
    }

    /// Apply one wheel step; positive delta zooms out.
    pub fn wheel(&mut self, delta_y: f32) {
        interactions::wheel(&mut self.ui, delta_y);
    }
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_point_count(count: usize) -> usize {
    count.min(MAX_POINT_COUNT)
}
