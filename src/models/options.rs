// Option Tables
// Dropdown label/value tables and font lookup consumed by the UI layer

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::services::{Resources, Translator};

/// Dropdown option tables mapping display labels to internal codes.
///
/// Built once after the translator is loaded; label order is the order the
/// UI presents the choices in.
#[derive(Debug, Clone)]
pub struct OptionTables {
    pub language_options: Vec<(String, &'static str)>,
    pub theme_options: Vec<(String, &'static str)>,
    pub server_options: Vec<(String, &'static str)>,
}

impl OptionTables {
    pub fn build(tr: &Translator) -> Self {
        // Language names are shown in their own script, never translated.
        let language_options = vec![
            ("English (US)".to_string(), "en_US"),
            ("简体中文".to_string(), "zh_CN"),
            ("繁體中文".to_string(), "zh_TW"),
        ];

        let theme_options = vec![(tr.tr("Black"), "black"), (tr.tr("white"), "white")];

        let server_options = vec![
            (tr.tr("International"), "intl"),
            (
                tr.tr("China") + &tr.tr(" (Some trainers cannot be downloaded)"),
                "china",
            ),
        ];

        Self {
            language_options,
            theme_options,
            server_options,
        }
    }
}

/// Per-language UI font paths.
#[derive(Debug, Clone)]
pub struct FontConfig {
    fonts: Vec<(&'static str, PathBuf)>,
}

impl FontConfig {
    pub fn resolve(resources: &Resources) -> Result<Self, ConfigError> {
        let fonts = vec![
            ("en_US", resources.resolve("assets/NotoSans-Regular.ttf")?),
            ("zh_CN", resources.resolve("assets/NotoSansSC-Regular.ttf")?),
            ("zh_TW", resources.resolve("assets/NotoSansTC-Regular.ttf")?),
        ];
        Ok(Self { fonts })
    }

    pub fn font_for(&self, language: &str) -> Option<&Path> {
        self.fonts
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, path)| path.as_path())
    }
}
