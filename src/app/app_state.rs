//! Centralized application state for the theme viewer.
//!
//! The active theme selection lives here and is handed to the codec and
//! the renderers by reference.

use rthemes::{ActiveThemeState, ThemeCodec, ThemeManager};

/// Number of background images remembered in the picker.
pub const MAX_RECENT_IMAGES: usize = 5;

/// Main application state.
pub struct AppState {
    /// Current theme selection
    pub theme: ActiveThemeState,

    /// Palettes for every style
    pub themes: ThemeManager,

    /// Converts the selection to and from its stored form
    pub codec: ThemeCodec,

    /// Recently chosen background images, newest first
    pub recent_images: Vec<String>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Set when the selection changed since the last save
    theme_dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with the default selection.
    pub fn new() -> Self {
        Self::with_theme(ActiveThemeState::default(), Vec::new())
    }

    /// Creates a new AppState with a selection and image history loaded from storage.
    pub fn with_theme(theme: ActiveThemeState, recent_images: Vec<String>) -> Self {
        Self {
            theme,
            themes: ThemeManager::new(),
            codec: ThemeCodec::new(),
            recent_images,
            error_message: None,
            theme_dirty: false,
        }
    }

    /// Records that the selection must be persisted.
    pub fn mark_theme_dirty(&mut self) {
        self.theme_dirty = true;
    }

    /// Returns whether a save is pending and clears the flag.
    pub fn take_theme_dirty(&mut self) -> bool {
        std::mem::take(&mut self.theme_dirty)
    }

    /// Moves `image` to the front of the history, dropping the oldest entries.
    pub fn remember_image(&mut self, image: &str) {
        if image.is_empty() {
            return;
        }
        self.recent_images.retain(|existing| existing != image);
        self.recent_images.insert(0, image.to_string());
        self.recent_images.truncate(MAX_RECENT_IMAGES);
    }
}
