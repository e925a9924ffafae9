use std::time::Instant;

use eframe::egui::{self, Sense, Stroke, StrokeKind, Vec2};

use super::{EguiApp, style, view_math};
use crate::egui_app::state::RenderStats;

/// Logical canvas size in pixels.
const CANVAS_SIZE: Vec2 = Vec2::new(800.0, 600.0);
/// Screen-space marker radius. Not scaled by zoom, so markers stay visible
/// at every zoom level.
const POINT_RADIUS: f32 = 5.0;

impl EguiApp {
    pub(super) fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let (rect, response) = ui.allocate_exact_size(CANVAS_SIZE, Sense::click_and_drag());
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }

        self.handle_canvas_input(ui, rect, &response);

        let render_started = Instant::now();
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, palette.canvas_bg);
        painter.rect_stroke(
            rect,
            0.0,
            Stroke::new(1.0, palette.canvas_outline),
            StrokeKind::Inside,
        );

        let view = self.controller.ui.view;
        let hovered = self.controller.ui.hovered;
        let visible = rect.expand(POINT_RADIUS);
        let mut points_drawn = 0usize;
        for (index, point) in self.controller.points().iter().enumerate() {
            let local = view_math::world_to_screen(*point, &view);
            let pos = rect.min + local.to_vec2();
            if !visible.contains(pos) {
                continue;
            }
            let color = if hovered == Some(index) {
                palette.point_hover
            } else {
                palette.point_base
            };
            painter.circle_filled(pos, POINT_RADIUS, color);
            points_drawn += 1;
        }

        self.controller.ui.stats = RenderStats {
            last_render_ms: render_started.elapsed().as_secs_f32() * 1000.0,
            points_drawn,
        };
    }

    fn handle_canvas_input(&mut self, ui: &egui::Ui, rect: egui::Rect, response: &egui::Response) {
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.controller.pointer_down(pos - rect.min.to_vec2());
            }
        }

        // Hover tracking runs on every move, dragging or not.
        let pointer = response
            .hover_pos()
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = pointer {
            self.controller.pointer_move(pos - rect.min.to_vec2());
        }

        if response.drag_stopped() {
            self.controller.pointer_up();
        }

        let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
        if response.hovered() && scroll_delta.abs() > 0.0 {
            // egui scroll is positive upwards; wheel steps treat positive as
            // zoom out.
            self.controller.wheel(-scroll_delta);
        }
    }
}
