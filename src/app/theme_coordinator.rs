//! Theme management and persistence coordination.
//!
//! Handles theme selection changes, application to egui, and persistent
//! storage across sessions. The selection is stored as its four-field string
//! array (see [`rthemes::ThemeCodec`]) serialized to JSON.

use rthemes::{ActiveThemeState, Style, ThemeCodec};

use crate::app::{AppState, SettingsCoordinator};

pub const THEME_KEY: &str = "theme_preference";
pub const RECENT_IMAGES_KEY: &str = "recent_images";

/// A user edit to the active theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeChange {
    StyleSelected(Style),
    ClearToggled(bool),
    DarkModeToggled(bool),
    ImageSelected(String),
    ImageCleared,
}

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference from persistent storage during application startup.
    ///
    /// A missing or unreadable preference yields the default selection. A stored
    /// array that is too short is logged and also yields the default.
    pub fn load_theme_from_storage(
        storage: Option<&dyn eframe::Storage>,
        codec: &ThemeCodec,
    ) -> ActiveThemeState {
        let Some(fields) = SettingsCoordinator::try_load_setting::<Vec<String>>(storage, THEME_KEY) else {
            log::info!("no stored theme preference, using defaults");
            return ActiveThemeState::default();
        };

        match codec.decode_state(fields.as_slice()) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("discarding stored theme preference {:?}: {}", fields, err);
                ActiveThemeState::default()
            }
        }
    }

    /// Saves the theme preference to persistent storage.
    ///
    /// Should be called during application shutdown or when the theme changes.
    pub fn save_theme_to_storage(
        storage: &mut dyn eframe::Storage,
        codec: &ThemeCodec,
        theme: &ActiveThemeState,
    ) {
        let fields = codec.encode_state(theme);
        log::debug!("saving theme preference {:?}", fields);
        SettingsCoordinator::save_setting(storage, THEME_KEY, &fields);
    }

    /// Loads the recent background image list.
    pub fn load_recent_images(storage: Option<&dyn eframe::Storage>) -> Vec<String> {
        SettingsCoordinator::load_setting(storage, RECENT_IMAGES_KEY)
    }

    /// Saves the selection and the image history.
    pub fn save_all(storage: &mut dyn eframe::Storage, state: &AppState) {
        Self::save_theme_to_storage(storage, &state.codec, &state.theme);
        SettingsCoordinator::save_setting(storage, RECENT_IMAGES_KEY, &state.recent_images);
    }

    /// Applies a user edit to the selection and marks it for saving.
    pub fn apply_change(state: &mut AppState, change: ThemeChange) {
        match change {
            ThemeChange::StyleSelected(style) => state.theme.set_style(style),
            ThemeChange::ClearToggled(clear) => state.theme.set_clear(clear),
            ThemeChange::DarkModeToggled(dark) => state.theme.set_dark_mode(dark),
            ThemeChange::ImageSelected(image) => {
                state.remember_image(&image);
                state.theme.set_image(image);
                // Picking an image implies the image is meant to be shown.
                state.theme.set_clear(false);
            }
            ThemeChange::ImageCleared => state.theme.set_image(String::new()),
        }
        state.mark_theme_dirty();
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        ctx.set_visuals(state.themes.visuals_for(&state.theme));
    }
}
