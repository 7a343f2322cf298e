//! Themes Viewer GUI Application
//!
//! Lets the user pick a skin for the player window and remembers the choice
//! between sessions. The viewer features:
//! - Style presets with light and dark palettes
//! - Clear (see-through) or image background mode
//! - Persistent theme preference stored through eframe's storage
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and persistence coordination
//! - `ui/` - UI panel rendering

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod ui;

use app::{AppState, ThemeCoordinator};
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the theme viewer GUI.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_transparent(true)
            .with_title("Themes"),
        ..Default::default()
    };

    eframe::run_native(
        "Themes",
        options,
        Box::new(|cc| Ok(Box::new(ThemesApp::new(cc)))),
    )
}

/// The theme viewer application.
///
/// Delegates to coordinators:
/// - `ThemeCoordinator` handles theme edits, persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct ThemesApp {
    /// Centralized application state
    state: AppState,
}

impl ThemesApp {
    /// Creates a new viewer instance with the theme loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let mut state = AppState::new();
        state.theme = ThemeCoordinator::load_theme_from_storage(cc.storage, &state.codec);
        state.recent_images = ThemeCoordinator::load_recent_images(cc.storage);
        log::info!(
            "starting with theme {:?}",
            state.codec.encode_state(&state.theme)
        );

        Self { state }
    }
}

impl eframe::App for ThemesApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_all(storage, &self.state);
    }

    /// Fully transparent in clear mode so the desktop shows through.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        if self.state.theme.display_mode().is_transparent() {
            [0.0; 4]
        } else {
            visuals.panel_fill.to_normalized_gamma_f32()
        }
    }

    /// Main update loop:
    /// 1. Apply theme
    /// 2. Render all panels via PanelManager
    /// 3. Apply the user's edit and persist it
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(change) = PanelManager::render_all_panels(ctx, &self.state) {
            log::debug!("theme change: {:?}", change);
            ThemeCoordinator::apply_change(&mut self.state, change);
            ctx.request_repaint();
        }

        // Persist preferences as soon as they change (for crash resilience)
        if self.state.take_theme_dirty() {
            match frame.storage_mut() {
                Some(storage) => ThemeCoordinator::save_all(storage, &self.state),
                None => self.state.error_message = Some("Preferences cannot be saved".to_string()),
            }
        }
    }
}
