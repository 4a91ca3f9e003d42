// SettingsManager Service
// Handles settings persistence and the defaults overlay

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::ConfigError;
use crate::models::Settings;

/// Manages settings storage and retrieval.
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    pub fn new(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, overlaying defaults for any missing key.
    ///
    /// An unreadable or unparseable file falls back to the full default
    /// record; the failure is logged, never surfaced. Whatever record comes
    /// out of the merge is written back before it is returned, so the on-disk
    /// file always carries the complete key set.
    pub fn load(&self, defaults: &Settings) -> Result<Settings, ConfigError> {
        let settings = match self.read_merged(defaults) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings, falling back to defaults: {e}");
                defaults.clone()
            }
        };

        self.save(&settings)?;
        Ok(settings)
    }

    /// Overwrite the settings file with the given record.
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let value = serde_json::to_value(settings)
            .map_err(|e| ConfigError::Settings(format!("Failed to serialize settings: {e}")))?;
        fs::write(&self.settings_path, to_pretty_json(&value)?)?;
        Ok(())
    }

    fn read_merged(&self, defaults: &Settings) -> Result<Settings, ConfigError> {
        let content = fs::read_to_string(&self.settings_path)?;
        let mut user_value: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Settings(format!("Failed to parse settings: {e}")))?;

        let defaults_value = serde_json::to_value(defaults)
            .map_err(|e| ConfigError::Settings(format!("Failed to build default settings: {e}")))?;
        merge_missing_settings(&mut user_value, &defaults_value);

        serde_json::from_value(user_value)
            .map_err(|e| ConfigError::Settings(format!("Failed to parse settings: {e}")))
    }
}

/// Insert every default key absent from `target`. Present keys are never
/// overwritten, and keys unknown to the defaults are left alone.
fn merge_missing_settings(target: &mut Value, defaults: &Value) {
    if let (Value::Object(target_map), Value::Object(defaults_map)) = (target, defaults) {
        for (key, default_value) in defaults_map {
            if !target_map.contains_key(key) {
                target_map.insert(key.clone(), default_value.clone());
            }
        }
    }
}

/// The settings file is written with 4-space indentation.
fn to_pretty_json(value: &Value) -> Result<String, ConfigError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ConfigError::Settings(format!("Failed to serialize settings: {e}")))?;
    String::from_utf8(buf).map_err(|e| ConfigError::Settings(format!("Invalid settings text: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_defaults(root: &Path) -> Settings {
        Settings::defaults(
            "en_US",
            &root.join("GCM Trainers"),
            &root.join("WeMod"),
            None,
        )
    }

    #[test]
    fn test_missing_file_produces_defaults_and_persists_them() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().join("settings.json"));
        let defaults = test_defaults(temp.path());

        let loaded = manager.load(&defaults).unwrap();
        assert_eq!(loaded, defaults);
        assert!(manager.settings_path().exists());

        // A second load is a no-op with respect to contents.
        let reloaded = manager.load(&defaults).unwrap();
        assert_eq!(reloaded, loaded);
    }

    #[test]
    fn test_merge_fills_gaps_without_touching_present_keys() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().join("settings.json"));
        let defaults = test_defaults(temp.path());

        fs::write(
            manager.settings_path(),
            r#"{"language": "zh_TW", "theme": "white"}"#,
        )
        .unwrap();

        let loaded = manager.load(&defaults).unwrap();
        assert_eq!(loaded.language, "zh_TW");
        assert_eq!(loaded.theme, "white");
        assert_eq!(loaded.download_path, defaults.download_path);
        assert_eq!(loaded.download_server, "intl");
    }

    #[test]
    fn test_unknown_keys_survive_the_round_trip() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().join("settings.json"));
        let defaults = test_defaults(temp.path());

        fs::write(
            manager.settings_path(),
            r#"{"language": "zh_CN", "legacyFlag": true}"#,
        )
        .unwrap();

        let loaded = manager.load(&defaults).unwrap();
        assert_eq!(loaded.extra.get("legacyFlag"), Some(&Value::Bool(true)));

        let on_disk: Value =
            serde_json::from_str(&fs::read_to_string(manager.settings_path()).unwrap()).unwrap();
        assert_eq!(on_disk["legacyFlag"], Value::Bool(true));
        assert_eq!(on_disk["language"], Value::String("zh_CN".to_string()));
    }

    #[test]
    fn test_unparseable_file_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().join("settings.json"));
        let defaults = test_defaults(temp.path());

        fs::write(manager.settings_path(), "{not json").unwrap();

        let loaded = manager.load(&defaults).unwrap();
        assert_eq!(loaded, defaults);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().join("settings.json"));
        let defaults = test_defaults(temp.path());

        let mut record = defaults.clone();
        record.language = "zh_TW".to_string();
        record.auto_start = true;
        record.ce_path = Some("C:\\Program Files\\Cheat Engine 7.5".to_string());

        manager.save(&record).unwrap();
        let loaded = manager.load(&defaults).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_settings_file_is_indented_with_four_spaces() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().join("settings.json"));
        let defaults = test_defaults(temp.path());

        manager.save(&defaults).unwrap();
        let content = fs::read_to_string(manager.settings_path()).unwrap();
        assert!(content.contains("\n    \"language\""));
    }
}
