//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage.
//! ThemeCoordinator builds on it for the theme preference; other settings
//! (such as recent background images) use it directly.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
///
/// This coordinator provides type-safe loading and saving of any serializable
/// settings to eframe's persistent storage. Settings are stored as JSON strings.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// # Type Parameters
    /// * `T` - The type to deserialize, must implement Deserialize and Default
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the default value for type T
    ///
    /// # Examples
    /// ```ignore
    /// let recent: Vec<String> = SettingsCoordinator::load_setting(storage, "recent_images");
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Saves a setting to persistent storage.
    ///
    /// Serialization failures are logged and leave the stored value unchanged.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => log::error!("failed to serialize setting '{}': {}", key, err),
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring unreadable setting '{}': {}", key, err);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    #[derive(Default)]
    pub(crate) struct MockStorage {
        pub data: HashMap<String, String>,
        pub flushes: usize,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_save_and_load_simple() {
        let mut storage = MockStorage::default();

        SettingsCoordinator::save_setting(&mut storage, "test_key", &42i32);

        let loaded: i32 = SettingsCoordinator::load_setting(Some(&storage), "test_key");
        assert_eq!(loaded, 42);
        assert_eq!(storage.flushes, 1);
    }

    #[test]
    fn test_load_with_default() {
        let storage = MockStorage::default();

        let loaded: Vec<String> = SettingsCoordinator::load_setting(Some(&storage), "missing_key");
        assert!(loaded.is_empty());

        let loaded: i32 = SettingsCoordinator::load_setting(None, "missing_key");
        assert_eq!(loaded, 0);
    }

    #[test]
    fn test_save_and_load_string_array() {
        let mut storage = MockStorage::default();
        let fields = ["wave", "true", "false", ""];

        SettingsCoordinator::save_setting(&mut storage, "fields", &fields);
        assert_eq!(storage.data["fields"], r#"["wave","true","false",""]"#);

        let loaded: Vec<String> = SettingsCoordinator::load_setting(Some(&storage), "fields");
        assert_eq!(loaded, fields);
    }

    #[test]
    fn test_try_load_setting() {
        let mut storage = MockStorage::default();

        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(result, None);

        SettingsCoordinator::save_setting(&mut storage, "test", &123i32);
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "test");
        assert_eq!(result, Some(123));

        storage.data.insert("broken".to_string(), "not json".to_string());
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "broken");
        assert_eq!(result, None);
    }
}
