//! Panel orchestration and layout management.

use crate::app::{AppState, ThemeChange};
use crate::ui::{header, preview_panel, status_bar};

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation. Returns the
    /// theme edit made this frame, if any.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<ThemeChange> {
        let mut change = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            change = header::render_header(ui, state);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            preview_panel::render_preview(ui, state);
        });

        change
    }
}
