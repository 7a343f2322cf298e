//! Conversion between [`ActiveThemeState`] and its stored string array.
//!
//! The stored form is positional: `[style, clear, mode, image]`, e.g.
//! `["wave", "true", "false", ""]`. Booleans are written as the literals
//! `"true"`/`"false"` and read back by exact comparison with `"true"`, so
//! anything else (including `"True"`) reads as `false`.
//!
//! # Examples
//!
//! ```
//! use rthemes::{ActiveThemeState, Style, ThemeCodec};
//!
//! let codec = ThemeCodec::new();
//! let fields = codec.encode(Style::Spring, false, true, "bg1");
//! assert_eq!(fields, ["spring", "false", "true", "bg1"]);
//!
//! let mut state = ActiveThemeState::default();
//! codec.decode(&fields, &mut state).unwrap();
//! assert_eq!(state.style(), Style::Spring);
//! assert!(state.is_dark_mode());
//! ```

use crate::active::ActiveThemeState;
use crate::error::ThemeError;
use crate::style::{PresetRegistry, Style, StyleRegistry};

/// Number of fields in a stored theme.
pub const THEME_FIELD_COUNT: usize = 4;

const TRUE: &str = "true";
const FALSE: &str = "false";

/// Encodes and decodes theme selections using a [`StyleRegistry`] for style names.
#[derive(Debug, Clone, Default)]
pub struct ThemeCodec<R = PresetRegistry> {
    registry: R,
}

impl ThemeCodec<PresetRegistry> {
    /// Creates a codec over the built-in style names.
    pub fn new() -> Self {
        Self::with_registry(PresetRegistry::new())
    }
}

impl<R: StyleRegistry> ThemeCodec<R> {
    pub fn with_registry(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Flattens a theme selection into its stored form.
    pub fn encode(
        &self,
        style: Style,
        clear: bool,
        dark_mode: bool,
        image: &str,
    ) -> [String; THEME_FIELD_COUNT] {
        let name = self.registry.name_of(style);
        debug_assert!(!name.is_empty(), "style registry returned an empty name for {style:?}");
        [
            name.to_string(),
            flag(clear).to_string(),
            flag(dark_mode).to_string(),
            image.to_string(),
        ]
    }

    /// Flattens all four fields of `state`.
    pub fn encode_state(&self, state: &ActiveThemeState) -> [String; THEME_FIELD_COUNT] {
        self.encode(
            state.style(),
            state.is_clear(),
            state.is_dark_mode(),
            state.image(),
        )
    }

    /// Overwrites every field of `state` from a stored array.
    ///
    /// Fails with [`ThemeError::OutOfRange`] when `fields` holds fewer than
    /// four entries, in which case `state` is left untouched. Entries past the
    /// fourth are ignored.
    pub fn decode<S: AsRef<str>>(
        &self,
        fields: &[S],
        state: &mut ActiveThemeState,
    ) -> Result<(), ThemeError> {
        let [style, clear, mode, image] = match fields {
            [style, clear, mode, image, ..] => {
                [style.as_ref(), clear.as_ref(), mode.as_ref(), image.as_ref()]
            }
            _ => {
                return Err(ThemeError::OutOfRange {
                    expected: THEME_FIELD_COUNT,
                    actual: fields.len(),
                })
            }
        };

        state.set_style(self.registry.variant_of(style));
        state.set_clear(clear == TRUE);
        state.set_dark_mode(mode == TRUE);
        state.set_image(image);

        log::debug!(
            "decoded theme: style={} clear={} dark={} image='{}'",
            state.style(),
            state.is_clear(),
            state.is_dark_mode(),
            state.image()
        );
        Ok(())
    }

    /// Builds a fresh state from a stored array.
    pub fn decode_state<S: AsRef<str>>(&self, fields: &[S]) -> Result<ActiveThemeState, ThemeError> {
        let mut state = ActiveThemeState::default();
        self.decode(fields, &mut state)?;
        Ok(state)
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        TRUE
    } else {
        FALSE
    }
}
