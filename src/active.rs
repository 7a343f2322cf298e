//! The active theme selection.
//!
//! Owned by the application and passed explicitly to whoever reads or
//! writes it; there is no process-wide instance.

use crate::style::Style;

/// Whether the window background is see-through or shows an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Transparent,
    Image,
}

impl DisplayMode {
    /// True when the image view should be hidden.
    pub fn is_transparent(self) -> bool {
        match self {
            DisplayMode::Transparent => true,
            DisplayMode::Image => false,
        }
    }
}

/// The current theme selection.
///
/// Fields carry no validation; any combination is accepted. The only
/// stored form is the array produced by [`crate::ThemeCodec::encode_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveThemeState {
    style: Style,
    clear: bool,
    mode: bool,
    image: String,
}

impl Default for ActiveThemeState {
    /// First-launch selection: transparent light Wave, no image.
    fn default() -> Self {
        Self {
            style: Style::Wave,
            clear: true,
            mode: false,
            image: String::new(),
        }
    }
}

impl ActiveThemeState {
    pub fn new(style: Style, clear: bool, dark_mode: bool, image: impl Into<String>) -> Self {
        Self {
            style,
            clear,
            mode: dark_mode,
            image: image.into(),
        }
    }

    // ===== Queries =====

    pub fn style(&self) -> Style {
        self.style
    }

    /// True when the background is transparent.
    pub fn is_clear(&self) -> bool {
        self.clear
    }

    /// True for dark appearance.
    pub fn is_dark_mode(&self) -> bool {
        self.mode
    }

    /// Background image name; empty when none is selected.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.clear {
            DisplayMode::Transparent
        } else {
            DisplayMode::Image
        }
    }

    // ===== Mutations =====

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.mode = dark_mode;
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let state = ActiveThemeState::default();
        assert_eq!(state.style(), Style::Wave);
        assert!(state.is_clear());
        assert!(!state.is_dark_mode());
        assert_eq!(state.image(), "");
        assert!(!state.has_image());
    }

    #[test]
    fn test_display_mode_follows_clear_flag() {
        let mut state = ActiveThemeState::default();
        assert_eq!(state.display_mode(), DisplayMode::Transparent);
        assert!(state.display_mode().is_transparent());

        state.set_clear(false);
        assert_eq!(state.display_mode(), DisplayMode::Image);
        assert!(!state.display_mode().is_transparent());
    }

    #[test]
    fn test_setters_are_independent() {
        let mut state = ActiveThemeState::default();
        state.set_style(Style::Silk);
        state.set_dark_mode(true);
        state.set_image("stars");

        assert_eq!(state, ActiveThemeState::new(Style::Silk, true, true, "stars"));
    }
}
