//! Status bar UI rendering
//!
//! Displays the stored form of the active theme.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let fields = state.codec.encode_state(&state.theme);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Saved as").strong());
        ui.monospace(format!("{:?}", fields));
    });
}
