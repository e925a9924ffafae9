#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Pointmap viewer.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use pointmap::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use pointmap::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(MIN_VIEWPORT_SIZE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Pointmap",
        native_options,
        Box::new(|_cc| match EguiApp::new() {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => Ok(Box::new(LaunchError { message: err })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
