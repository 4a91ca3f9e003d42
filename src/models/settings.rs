// Settings Model
// Application-wide configuration persisted as settings.json

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Application settings.
///
/// The on-disk form is a flat JSON object with camelCase keys. Keys written
/// by other application versions are carried through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    // General
    pub download_path: String,
    pub language: String,
    pub theme: String,
    pub en_search_results: bool,
    pub app_update: bool,
    pub auto_start: bool,
    pub show_warning: bool,

    // Trainer management
    pub download_server: String,
    pub remove_bg_music: bool,
    pub auto_update_database: bool,
    pub auto_update_fling: bool,
    pub enable_xiaoxing: bool,
    pub we_mod_path: String,
    pub ce_path: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// Build the hard-coded default record for this host.
    ///
    /// The language comes from the system locale, the download directory from
    /// the user's roaming data root, and the tool paths from whatever was
    /// discovered on the host before settings are loaded.
    pub fn defaults(
        language: &str,
        download_dir: &Path,
        wemod_path: &Path,
        ce_path: Option<&Path>,
    ) -> Self {
        Self {
            download_path: download_dir.to_string_lossy().into_owned(),
            language: language.to_string(),
            theme: "black".to_string(),
            en_search_results: false,
            app_update: true,
            auto_start: false,
            show_warning: true,
            download_server: "intl".to_string(),
            remove_bg_music: true,
            auto_update_database: true,
            auto_update_fling: true,
            enable_xiaoxing: true,
            we_mod_path: wemod_path.to_string_lossy().into_owned(),
            ce_path: ce_path.map(|p| p.to_string_lossy().into_owned()),
            extra: Map::new(),
        }
    }
}
