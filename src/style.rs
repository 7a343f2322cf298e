//! Style presets and the registry mapping them to stored names.
//!
//! A [`Style`] is one of the built-in skins or the `custom` marker for a
//! user-supplied skin. The [`StyleRegistry`] trait owns the vocabulary used in
//! persisted preferences, and [`PresetRegistry`] is the stock implementation.
//!
//! # Examples
//!
//! ```
//! use rthemes::style::{PresetRegistry, Style, StyleRegistry};
//!
//! let registry = PresetRegistry::new();
//! assert_eq!(registry.name_of(Style::Dunes), "dunes");
//! assert_eq!(registry.variant_of("dunes"), Style::Dunes);
//! assert_eq!(registry.variant_of("no-such-style"), Style::Wave);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// A named visual skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Wave,
    Spring,
    Dunes,
    Quartz,
    Silk,
    Bubbles,
    Goblin,
    Purple,
    /// User-supplied skin, typically paired with a background image.
    Custom,
}

impl Style {
    /// Every style, presets first, `Custom` last.
    pub const ALL: [Style; 9] = [
        Style::Wave,
        Style::Spring,
        Style::Dunes,
        Style::Quartz,
        Style::Silk,
        Style::Bubbles,
        Style::Goblin,
        Style::Purple,
        Style::Custom,
    ];

    /// The built-in presets, without `Custom`.
    pub const PRESETS: [Style; 8] = [
        Style::Wave,
        Style::Spring,
        Style::Dunes,
        Style::Quartz,
        Style::Silk,
        Style::Bubbles,
        Style::Goblin,
        Style::Purple,
    ];

    /// Stored name of the style.
    pub fn name(self) -> &'static str {
        match self {
            Style::Wave => "wave",
            Style::Spring => "spring",
            Style::Dunes => "dunes",
            Style::Quartz => "quartz",
            Style::Silk => "silk",
            Style::Bubbles => "bubbles",
            Style::Goblin => "goblin",
            Style::Purple => "purple",
            Style::Custom => "custom",
        }
    }

    /// Human-readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Style::Wave => "Wave",
            Style::Spring => "Spring",
            Style::Dunes => "Dunes",
            Style::Quartz => "Quartz",
            Style::Silk => "Silk",
            Style::Bubbles => "Bubbles",
            Style::Goblin => "Goblin",
            Style::Purple => "Purple",
            Style::Custom => "Custom",
        }
    }

    pub fn is_custom(self) -> bool {
        self == Style::Custom
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = ThemeError;

    /// Strict, case-sensitive parse of a stored name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| ThemeError::UnknownStyle(s.to_string()))
    }
}

/// Maps styles to and from the names used in persisted preferences.
pub trait StyleRegistry {
    /// Returns the stored name for a style.
    ///
    /// Must be non-empty: an empty name is written as an empty style field
    /// and reads back as the fallback style.
    fn name_of(&self, style: Style) -> &'static str;

    /// Resolves a stored name to a style.
    ///
    /// Must never fail: unrecognized names resolve to a fallback style.
    fn variant_of(&self, name: &str) -> Style;
}

/// Registry over the built-in style names with a configurable fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetRegistry {
    fallback: Style,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetRegistry {
    /// Style used for unrecognized names unless overridden.
    pub const DEFAULT_FALLBACK: Style = Style::Wave;

    pub fn new() -> Self {
        Self {
            fallback: Self::DEFAULT_FALLBACK,
        }
    }

    /// Creates a registry that resolves unknown names to `fallback`.
    pub fn with_fallback(fallback: Style) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> Style {
        self.fallback
    }
}

impl StyleRegistry for PresetRegistry {
    fn name_of(&self, style: Style) -> &'static str {
        style.name()
    }

    fn variant_of(&self, name: &str) -> Style {
        match name.parse::<Style>() {
            Ok(style) => style,
            Err(_) => {
                log::warn!("unknown style '{}', using '{}'", name, self.fallback);
                self.fallback
            }
        }
    }
}
