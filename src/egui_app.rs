//! egui application modules: controller, shared state, and renderer.
/// App/controller bridge owning the point set and UI state.
pub mod controller;
/// Shared state types consumed by the renderer.
pub mod state;
/// egui renderer and canvas interaction code.
pub mod ui;
