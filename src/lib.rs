pub mod error;
pub mod style;
pub mod active;
pub mod codec;
pub mod theme;

// Export error type
pub use error::ThemeError;

// Export styles and the name registry
pub use style::{Style, StyleRegistry, PresetRegistry};

// Export active selection
pub use active::{ActiveThemeState, DisplayMode};

// Export preference codec
pub use codec::{ThemeCodec, THEME_FIELD_COUNT};

// Export theme palettes
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
