use rthemes::{ActiveThemeState, DisplayMode, PresetRegistry, Style, StyleRegistry, ThemeCodec, ThemeError};
use anyhow::Result;

#[test]
fn test_encode_fixed_field_order() {
    let codec = ThemeCodec::new();
    let fields = codec.encode(Style::Spring, false, true, "bg1");
    assert_eq!(fields, ["spring", "false", "true", "bg1"]);
}

#[test]
fn test_stored_form_is_positional_string_array() -> Result<()> {
    let codec = ThemeCodec::new();
    let state = codec.decode_state(&["wave", "false", "true", ""])?;

    let stored = serde_json::to_value(codec.encode_state(&state))?;

    assert_eq!(stored, serde_json::json!(["wave", "false", "true", ""]));
    Ok(())
}

#[test]
fn test_round_trip_through_stored_strings() -> Result<()> {
    let codec = ThemeCodec::new();
    let images = ["", "bg1", "Blue Lagoon", "/Users/me/Pictures/a b.png", "ünïcødé"];

    for style in Style::ALL {
        for clear in [true, false] {
            for dark in [true, false] {
                for image in images {
                    let fields = codec.encode(style, clear, dark, image);

                    // Stored the same way the app stores it: a JSON array string
                    let stored = serde_json::to_string(&fields)?;
                    let loaded: Vec<String> = serde_json::from_str(&stored)?;

                    let mut state = ActiveThemeState::default();
                    codec.decode(loaded.as_slice(), &mut state)?;

                    assert_eq!(state.style(), style);
                    assert_eq!(state.is_clear(), clear);
                    assert_eq!(state.is_dark_mode(), dark);
                    assert_eq!(state.image(), image);
                }
            }
        }
    }

    Ok(())
}

#[test]
fn test_decode_boolean_strictness() -> Result<()> {
    let codec = ThemeCodec::new();
    let mut state = ActiveThemeState::default();

    codec.decode(&["wave", "True", "false", ""], &mut state)?;

    assert!(!state.is_clear());
    assert!(!state.is_dark_mode());
    assert_eq!(state.display_mode(), DisplayMode::Image);
    Ok(())
}

#[test]
fn test_decode_preserves_empty_image() -> Result<()> {
    let codec = ThemeCodec::new();
    let mut state = ActiveThemeState::new(Style::Silk, false, false, "previous");

    codec.decode(&["wave", "true", "false", ""], &mut state)?;

    assert_eq!(state.image(), "");
    assert!(!state.has_image());
    assert_eq!(state.style(), Style::Wave);
    assert!(state.is_clear());
    Ok(())
}

#[test]
fn test_decode_bounds_check_keeps_previous_state() {
    let codec = ThemeCodec::new();
    let previous = ActiveThemeState::new(Style::Goblin, false, true, "forest");
    let mut state = previous.clone();

    let result = codec.decode(&["wave", "true"], &mut state);

    assert_eq!(result, Err(ThemeError::OutOfRange { expected: 4, actual: 2 }));
    assert_eq!(state, previous);
    assert_eq!(
        result.unwrap_err().to_string(),
        "theme array has 2 fields, expected at least 4"
    );
}

#[test]
fn test_decode_unknown_style_uses_fallback() -> Result<()> {
    let codec = ThemeCodec::new();
    let mut state = ActiveThemeState::new(Style::Purple, false, false, "x");

    codec.decode(&["not-a-real-style", "true", "true", ""], &mut state)?;

    assert_eq!(state.style(), PresetRegistry::DEFAULT_FALLBACK);
    assert_eq!(state.style(), Style::Wave);
    assert!(state.is_clear());
    assert!(state.is_dark_mode());
    Ok(())
}

#[test]
fn test_decode_unknown_style_with_configured_fallback() -> Result<()> {
    let codec = ThemeCodec::with_registry(PresetRegistry::with_fallback(Style::Dunes));
    assert_eq!(codec.registry().fallback(), Style::Dunes);

    let state = codec.decode_state(&["Wave", "false", "false", ""])?;
    assert_eq!(state.style(), Style::Dunes);
    Ok(())
}

#[test]
fn test_independent_states() -> Result<()> {
    let codec = ThemeCodec::new();
    let mut first = ActiveThemeState::default();
    let mut second = ActiveThemeState::default();

    codec.decode(&["bubbles", "false", "true", "a"], &mut first)?;
    codec.decode(&["quartz", "true", "false", "b"], &mut second)?;

    assert_eq!(first, ActiveThemeState::new(Style::Bubbles, false, true, "a"));
    assert_eq!(second, ActiveThemeState::new(Style::Quartz, true, false, "b"));
    Ok(())
}

#[test]
fn test_registry_names_match_encoding() {
    let codec = ThemeCodec::new();
    let registry = PresetRegistry::new();
    for style in Style::ALL {
        assert_eq!(codec.encode(style, true, true, "")[0], registry.name_of(style));
        assert_eq!(style.to_string(), registry.name_of(style));
    }
}
