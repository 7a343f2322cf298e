//! Color palettes for the style presets.
//!
//! Every [`Style`] has a light and a dark palette. [`ThemeManager`] builds them
//! once and applies the active selection to egui visuals.
//!
//! # Examples
//!
//! ```
//! use rthemes::{ActiveThemeState, Style, ThemeManager};
//!
//! let manager = ThemeManager::new();
//! let spring = manager.palette(Style::Spring, false);
//! println!("Spring accent: {:?}", spring.accent);
//!
//! let mut visuals = egui::Visuals::light();
//! manager.apply_theme(&ActiveThemeState::default(), &mut visuals);
//! ```

use egui::Color32;
use std::collections::HashMap;

use crate::active::ActiveThemeState;
use crate::style::Style;

/// Alpha used for panel fills when the window is see-through.
pub const CLEAR_PANEL_ALPHA: u8 = 150;

/// Color palette for one style in one appearance
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Style identity
    pub accent: Color32,
    pub secondary: Color32,
}

/// A style's palettes with metadata
#[derive(Debug, Clone)]
pub struct Theme {
    pub style: Style,
    pub description: &'static str,
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

impl Theme {
    pub fn colors(&self, dark_mode: bool) -> &ThemeColors {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

/// Provides the palettes of all styles
pub struct ThemeManager {
    themes: HashMap<Style, Theme>,
}

impl ThemeManager {
    /// Creates a ThemeManager with a palette for every style
    pub fn new() -> Self {
        let themes = Style::ALL
            .into_iter()
            .map(|style| (style, build_theme(style)))
            .collect();
        Self { themes }
    }

    /// Retrieves the theme of a style
    pub fn get_theme(&self, style: Style) -> &Theme {
        // Every style is inserted in `new`.
        &self.themes[&style]
    }

    /// Palette of a style for the given appearance
    pub fn palette(&self, style: Style, dark_mode: bool) -> &ThemeColors {
        self.get_theme(style).colors(dark_mode)
    }

    /// Palette of the active selection
    pub fn active_palette(&self, state: &ActiveThemeState) -> &ThemeColors {
        self.palette(state.style(), state.is_dark_mode())
    }

    /// Builds visuals for the active selection, starting from egui's light or dark defaults
    pub fn visuals_for(&self, state: &ActiveThemeState) -> egui::Visuals {
        let mut visuals = if state.is_dark_mode() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        self.apply_theme(state, &mut visuals);
        visuals
    }

    /// Applies the active selection's colors to egui visuals
    pub fn apply_theme(&self, state: &ActiveThemeState, visuals: &mut egui::Visuals) {
        let colors = self.active_palette(state);

        let (panel_fill, window_fill) = if state.is_clear() {
            (
                with_alpha(colors.panel_background, CLEAR_PANEL_ALPHA),
                with_alpha(colors.background, CLEAR_PANEL_ALPHA),
            )
        } else {
            (colors.panel_background, colors.background)
        };

        // Override background colors
        visuals.panel_fill = panel_fill;
        visuals.window_fill = window_fill;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        // Override text colors
        visuals.override_text_color = Some(colors.text);

        // Override selection
        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        // Override widget colors
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.secondary;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Base colors a style's palettes are derived from: (accent, secondary, description)
fn style_base(style: Style) -> (&'static str, &'static str, &'static str) {
    match style {
        Style::Wave => ("#2e86de", "#48dbfb", "Ocean blues"),
        Style::Spring => ("#3cb371", "#f8a5c2", "Fresh greens with blossom pink"),
        Style::Dunes => ("#d4a373", "#e76f51", "Warm desert sand"),
        Style::Quartz => ("#b8b5c9", "#f2c6de", "Pale crystal tones"),
        Style::Silk => ("#c9a227", "#f5e6c8", "Soft golden sheen"),
        Style::Bubbles => ("#00b4d8", "#ff8fab", "Playful cyan and pink"),
        Style::Goblin => ("#6a994e", "#a7c957", "Mossy greens"),
        Style::Purple => ("#8e44ad", "#c39bd3", "Deep violet"),
        Style::Custom => ("#7f8c8d", "#bdc3c7", "Neutral base for user skins"),
    }
}

fn build_theme(style: Style) -> Theme {
    let (accent_hex, secondary_hex, description) = style_base(style);
    let accent = hex_to_color32(accent_hex);
    let secondary = hex_to_color32(secondary_hex);

    Theme {
        style,
        description,
        light: light_colors(accent, secondary),
        dark: dark_colors(accent, secondary),
    }
}

/// Light palette: near-white backgrounds tinted toward the accent
fn light_colors(accent: Color32, secondary: Color32) -> ThemeColors {
    let background = mix(Color32::from_rgb(248, 248, 248), accent, 0.08);
    ThemeColors {
        background,
        panel_background: background,
        extreme_background: Color32::from_rgb(255, 255, 255),

        text: Color32::from_rgb(20, 20, 20),
        text_dim: Color32::from_rgb(120, 120, 120),

        selection: mix(Color32::WHITE, accent, 0.35),
        hover: mix(Color32::from_rgb(220, 220, 220), accent, 0.1),
        border: mix(Color32::from_rgb(160, 160, 160), accent, 0.2),

        accent: adjust_brightness(accent, 0.85),
        secondary,
    }
}

/// Dark palette: near-black backgrounds tinted toward the accent
fn dark_colors(accent: Color32, secondary: Color32) -> ThemeColors {
    let background = mix(Color32::from_rgb(30, 30, 30), accent, 0.12);
    ThemeColors {
        background,
        panel_background: background,
        extreme_background: adjust_brightness(background, 0.6),

        text: Color32::from_rgb(240, 240, 240),
        text_dim: Color32::from_rgb(160, 160, 160),

        selection: mix(Color32::from_rgb(40, 40, 40), accent, 0.45),
        hover: mix(Color32::from_rgb(70, 70, 70), accent, 0.1),
        border: mix(Color32::from_rgb(100, 100, 100), accent, 0.2),

        accent,
        secondary: adjust_brightness(secondary, 0.8),
    }
}

/// Linear blend of `base` toward `tint` by `amount` (0.0..=1.0)
fn mix(base: Color32, tint: Color32, amount: f32) -> Color32 {
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
    Color32::from_rgb(
        lerp(base.r(), tint.r()),
        lerp(base.g(), tint.g()),
        lerp(base.b(), tint.b()),
    )
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
