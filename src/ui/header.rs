//! Header panel UI rendering
//!
//! Handles the top bar with the style selector, appearance toggles and
//! background image controls.

use eframe::egui;
use egui::Color32;
use rthemes::Style;

use crate::app::{AppState, ThemeChange};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "heic", "tiff", "gif"];

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<ThemeChange>` - The edit the user made this frame, if any
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<ThemeChange> {
    let mut change = None;

    ui.horizontal(|ui| {
        ui.label("Theme:");

        let current = state.theme.style();
        let mut selected = current;
        egui::ComboBox::from_id_salt("style_selector")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for style in Style::PRESETS {
                    ui.selectable_value(&mut selected, style, style.label());
                }
                ui.separator();
                ui.selectable_value(&mut selected, Style::Custom, Style::Custom.label());
            });
        if selected != current {
            change = Some(ThemeChange::StyleSelected(selected));
        }

        ui.separator();

        let mut clear = state.theme.is_clear();
        let clear_response = ui.checkbox(&mut clear, "Clear");
        if clear_response.changed() {
            change = Some(ThemeChange::ClearToggled(clear));
        }
        clear_response.on_hover_text("Show the content behind the window instead of a background image");

        let mut dark = state.theme.is_dark_mode();
        if ui.checkbox(&mut dark, "Dark").changed() {
            change = Some(ThemeChange::DarkModeToggled(dark));
        }

        ui.separator();

        if ui.button("🖼 Background…").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);

            if let Some(pictures) = dirs::picture_dir() {
                dialog = dialog.set_directory(pictures);
            }

            if let Some(path) = dialog.pick_file() {
                change = Some(ThemeChange::ImageSelected(path.display().to_string()));
            }
        }

        if !state.recent_images.is_empty() {
            ui.menu_button("Recent", |ui| {
                for image in &state.recent_images {
                    if ui.button(image.as_str()).clicked() {
                        change = Some(ThemeChange::ImageSelected(image.clone()));
                        ui.close();
                    }
                }
            });
        }

        if state.theme.has_image() && ui.button("✖ No image").clicked() {
            change = Some(ThemeChange::ImageCleared);
        }
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    change
}
