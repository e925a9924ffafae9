use eframe::egui::{Color32, Stroke, Visuals};

/// Colors shared across the UI.
#[derive(Clone, Copy)]
pub(super) struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub canvas_bg: Color32,
    pub canvas_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub point_base: Color32,
    pub point_hover: Color32,
}

pub(super) fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 10, 12),
        bg_secondary: Color32::from_rgb(26, 28, 30),
        canvas_bg: Color32::from_rgb(16, 17, 19),
        canvas_outline: Color32::from_rgb(56, 60, 66),
        text_primary: Color32::from_rgb(185, 192, 200),
        text_muted: Color32::from_rgb(140, 146, 155),
        point_base: Color32::from_rgb(102, 176, 136),
        point_hover: Color32::from_rgb(224, 82, 82),
    }
}

pub(super) fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
}
