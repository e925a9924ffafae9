//! egui renderer for the application UI.

mod canvas_view;
pub(crate) mod hover;
pub(crate) mod interactions;
mod style;
pub(crate) mod view_math;

use crate::egui_app::controller::CanvasController;
use eframe::egui::{self, RichText, Vec2};

/// Minimum window size that still fits the canvas and top bar.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(840.0, 700.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: CanvasController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create a new egui app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = CanvasController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Pointmap").color(palette.text_primary));
                ui.add_space(8.0);
                ui.separator();
                ui.label(format!("{} points", self.controller.point_count()));
                ui.label(format!("zoom {:.2}x", self.controller.ui.view.scale));
                ui.label(
                    RichText::new(format!(
                        "frame {:.2} ms | drawn {}",
                        self.controller.ui.stats.last_render_ms,
                        self.controller.ui.stats.points_drawn
                    ))
                    .color(palette.text_muted),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Reset view").clicked() {
                        self.controller.reset_view();
                    }
                });
            });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_canvas(ui);
        });
    }
}
