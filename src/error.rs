//! Error types for theme preference handling.

use thiserror::Error;

/// Errors that can occur while reading theme preferences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A serialized theme had fewer fields than the format requires.
    #[error("theme array has {actual} fields, expected at least {expected}")]
    OutOfRange {
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields actually supplied.
        actual: usize,
    },

    /// A style name did not match any known style.
    ///
    /// Only produced by the strict `FromStr` parse; registry lookups fall back instead.
    #[error("unknown style '{0}'")]
    UnknownStyle(String),
}
