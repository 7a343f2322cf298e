//! Central preview of the active theme.

use eframe::egui;
use egui::{RichText, Sense};
use rthemes::ThemeColors;

use crate::app::AppState;

const SWATCH_SIZE: egui::Vec2 = egui::vec2(36.0, 22.0);

/// Renders the style description, palette swatches and background state
pub fn render_preview(ui: &mut egui::Ui, state: &AppState) {
    let theme = state.themes.get_theme(state.theme.style());
    let colors = theme.colors(state.theme.is_dark_mode());

    ui.heading(RichText::new(theme.style.label()).color(colors.accent));
    ui.label(RichText::new(theme.description).color(colors.text_dim));
    ui.add_space(8.0);

    render_swatches(ui, colors);
    ui.add_space(12.0);

    if theme.style.is_custom() && !state.theme.has_image() {
        ui.label(RichText::new("Custom skins use your own background image.").color(colors.text_dim));
    }

    if state.theme.display_mode().is_transparent() {
        ui.label("Clear: the window shows what is behind it.");
    } else if state.theme.has_image() {
        ui.label(format!("Background: {}", state.theme.image()));
    } else {
        ui.label(RichText::new("No background image selected").italics());
    }
}

fn render_swatches(ui: &mut egui::Ui, colors: &ThemeColors) {
    let swatches = [
        ("accent", colors.accent),
        ("secondary", colors.secondary),
        ("background", colors.background),
        ("selection", colors.selection),
        ("border", colors.border),
    ];

    ui.horizontal(|ui| {
        for (name, color) in swatches {
            let (rect, response) = ui.allocate_exact_size(SWATCH_SIZE, Sense::hover());
            ui.painter().rect_filled(rect, 4.0, color);
            response.on_hover_text(name);
        }
    });
}
