// Bootstrap Sequence
// One-shot startup assembly of paths, settings, translations and tables

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::{FontConfig, OptionTables, Settings};
use crate::services::{
    compile_catalogs, find_ce_install_path, stylesheet_path, system_language, Resources,
    SettingsManager, Translator,
};

const SETTINGS_DIR_NAME: &str = "GCM Settings";
const SETTINGS_FILE_NAME: &str = "settings.json";
const DATABASE_DIR_NAME: &str = "db";
const DOWNLOAD_DIR_NAME: &str = "GCM Trainers";
const TEMP_ROOT_NAME: &str = "GameCheatsManagerTemp";
const WEMOD_DIR_NAME: &str = "WeMod";
const TRAINER_DETAILS_FILE: &str = "xgqdetail.json";

/// Host-dependent filesystem layout, derived once from the user-data roots.
///
/// The temp work directories are declared here but created on demand by
/// whichever collaborator uses them.
#[derive(Debug, Clone)]
pub struct HostPaths {
    pub settings_dir: PathBuf,
    pub settings_file: PathBuf,
    pub database_dir: PathBuf,
    pub default_download_dir: PathBuf,
    pub download_temp_dir: PathBuf,
    pub version_temp_dir: PathBuf,
    pub wemod_temp_dir: PathBuf,
    pub wemod_install_path: PathBuf,
}

impl HostPaths {
    /// Derive the layout from the user's roaming and local data directories.
    /// Either variable missing aborts startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let roaming = env::var_os("APPDATA").ok_or(ConfigError::MissingEnvVar("APPDATA"))?;
        let local = env::var_os("LOCALAPPDATA").ok_or(ConfigError::MissingEnvVar("LOCALAPPDATA"))?;
        Ok(Self::resolve(
            Path::new(&roaming),
            Path::new(&local),
            &env::temp_dir(),
        ))
    }

    /// Derive the layout from explicit roots.
    pub fn resolve(roaming_dir: &Path, local_dir: &Path, temp_dir: &Path) -> Self {
        let settings_dir = roaming_dir.join(SETTINGS_DIR_NAME);
        let temp_root = temp_dir.join(TEMP_ROOT_NAME);
        Self {
            settings_file: settings_dir.join(SETTINGS_FILE_NAME),
            database_dir: settings_dir.join(DATABASE_DIR_NAME),
            default_download_dir: roaming_dir.join(DOWNLOAD_DIR_NAME),
            download_temp_dir: temp_root.join("download"),
            version_temp_dir: temp_root.join("version"),
            wemod_temp_dir: temp_root.join("wemod"),
            wemod_install_path: local_dir.join(WEMOD_DIR_NAME),
            settings_dir,
        }
    }
}

/// Theme-dependent and fixed UI asset paths.
///
/// Arrow paths are pre-rendered in stylesheet form (forward slashes).
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub dropdown_arrow: String,
    pub up_arrow: String,
    pub down_arrow: String,
    pub left_arrow: String,
    pub right_arrow: String,
    pub search_icon: PathBuf,
}

impl AssetPaths {
    fn resolve(resources: &Resources, theme: &str) -> Result<Self, ConfigError> {
        // The dark theme gets the light arrow glyph and vice versa.
        let dropdown_arrow = match theme {
            "black" => resources.resolve("assets/dropdown-white.png")?,
            "white" => resources.resolve("assets/dropdown-black.png")?,
            other => {
                log::warn!("Unrecognized theme {other:?}, using dark-theme assets");
                resources.resolve("assets/dropdown-white.png")?
            }
        };

        Ok(Self {
            dropdown_arrow: stylesheet_path(&dropdown_arrow),
            up_arrow: stylesheet_path(&resources.resolve("assets/up.png")?),
            down_arrow: stylesheet_path(&resources.resolve("assets/down.png")?),
            left_arrow: stylesheet_path(&resources.resolve("assets/left.png")?),
            right_arrow: stylesheet_path(&resources.resolve("assets/right.png")?),
            search_icon: resources.resolve("assets/search.png")?,
        })
    }
}

/// Bundled helper-tool paths used by trainer management.
#[derive(Debug, Clone)]
pub struct DependencyPaths {
    pub resource_hacker: PathBuf,
    pub unzip: PathBuf,
    pub binmay: PathBuf,
    pub empty_midi: PathBuf,
    pub elevator: PathBuf,
}

impl DependencyPaths {
    fn resolve(resources: &Resources) -> Result<Self, ConfigError> {
        Ok(Self {
            resource_hacker: resources.resolve("dependency/ResourceHacker.exe")?,
            unzip: resources.resolve("dependency/7z/7z.exe")?,
            binmay: resources.resolve("dependency/binmay.exe")?,
            empty_midi: resources.resolve("dependency/TrainerBGM.mid")?,
            elevator: resources.resolve("dependency/Elevate.exe")?,
        })
    }
}

/// Process-wide configuration, assembled exactly once at startup and handed
/// by reference to everything that needs a path, a translation or a setting.
pub struct AppContext {
    pub host: HostPaths,
    pub resources: Resources,
    pub ce_install_path: Option<PathBuf>,
    pub settings: Settings,
    pub translator: Translator,
    pub assets: AssetPaths,
    pub dependencies: DependencyPaths,
    pub options: OptionTables,
    pub fonts: FontConfig,
    settings_manager: SettingsManager,
}

impl AppContext {
    /// Run the whole bootstrap sequence against the real host environment.
    pub fn initialize_from_env() -> Result<Self, ConfigError> {
        Self::initialize(HostPaths::from_env()?, Resources::detect())
    }

    /// Run the bootstrap sequence: create the settings and database
    /// directories, discover host tools, load settings, activate the
    /// translation catalog, seed the trainer database, repair the download
    /// directory, and resolve every derived asset path and option table.
    pub fn initialize(host: HostPaths, resources: Resources) -> Result<Self, ConfigError> {
        fs::create_dir_all(&host.settings_dir)?;
        fs::create_dir_all(&host.database_dir)?;

        let ce_install_path = find_ce_install_path();
        let defaults = Settings::defaults(
            system_language(),
            &host.default_download_dir,
            &host.wemod_install_path,
            ce_install_path.as_deref(),
        );

        let settings_manager = SettingsManager::new(host.settings_file.clone());
        let mut settings = settings_manager.load(&defaults)?;

        let locale_dir = resources.resolve("locale")?;
        if !resources.is_bundled() {
            compile_catalogs(&locale_dir);
        }
        let translator = Translator::load(&locale_dir, &settings.language)?;

        ensure_trainer_details_exist(&resources, &host.database_dir)?;
        ensure_trainer_download_path_is_valid(&mut settings, &settings_manager, &host)?;

        let assets = AssetPaths::resolve(&resources, &settings.theme)?;
        let dependencies = DependencyPaths::resolve(&resources)?;
        let options = OptionTables::build(&translator);
        let fonts = FontConfig::resolve(&resources)?;

        log::info!(
            "Configuration initialized (language {}, theme {})",
            settings.language,
            settings.theme
        );

        Ok(Self {
            host,
            resources,
            ce_install_path,
            settings,
            translator,
            assets,
            dependencies,
            options,
            fonts,
            settings_manager,
        })
    }

    /// Persist the current settings record.
    pub fn save_settings(&self) -> Result<(), ConfigError> {
        self.settings_manager.save(&self.settings)
    }
}

/// Copy the bundled trainer-detail database into the local database
/// directory on first run. An existing copy is never overwritten, even when
/// the bundled version is newer.
fn ensure_trainer_details_exist(
    resources: &Resources,
    database_dir: &Path,
) -> Result<(), ConfigError> {
    let dst = database_dir.join(TRAINER_DETAILS_FILE);
    if dst.exists() {
        return Ok(());
    }
    let src = resources.resolve("dependency/xgqdetail.json")?;
    fs::copy(&src, &dst)?;
    Ok(())
}

/// Make sure the configured download directory exists. If it cannot be
/// created, reset it to the default location, persist the repair, and retry
/// once; a second failure aborts startup.
fn ensure_trainer_download_path_is_valid(
    settings: &mut Settings,
    settings_manager: &SettingsManager,
    host: &HostPaths,
) -> Result<(), ConfigError> {
    if fs::create_dir_all(&settings.download_path).is_ok() {
        return Ok(());
    }

    log::warn!(
        "Download directory {:?} is not usable, resetting to the default",
        settings.download_path
    );
    settings.download_path = host.default_download_dir.to_string_lossy().into_owned();
    settings_manager.save(settings)?;
    fs::create_dir_all(&settings.download_path)?;
    Ok(())
}
