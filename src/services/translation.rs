// Translation Loader Service
// Compiles gettext catalogs and serves translated strings

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use gettext::Catalog;
use polib::{mo_file, po_file};

use crate::error::ConfigError;

/// gettext text domain; catalog files carry this name.
pub const TEXT_DOMAIN: &str = "Game Cheats Manager";

/// Compile every `.po` catalog source under `locale_dir` into a binary `.mo`
/// sibling. Only runs for source checkouts; bundled builds ship pre-compiled
/// catalogs. A source file that fails to parse or write is logged and
/// skipped, leaving lookups for that language on the identity fallback.
///
/// Returns the number of catalogs compiled.
pub fn compile_catalogs(locale_dir: &Path) -> usize {
    let mut compiled = 0;
    compile_directory(locale_dir, &mut compiled);
    compiled
}

fn compile_directory(dir: &Path, compiled: &mut usize) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to read catalog directory {dir:?}: {e}");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            compile_directory(&path, compiled);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("po") {
            continue;
        }

        let catalog = match po_file::parse(&path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("Failed to parse catalog source {path:?}: {e}");
                continue;
            }
        };

        let mo_path = path.with_extension("mo");
        match mo_file::write(&catalog, &mo_path) {
            Ok(()) => *compiled += 1,
            Err(e) => log::warn!("Failed to write catalog {mo_path:?}: {e}"),
        }
    }
}

/// Translates source strings into the active language.
#[derive(Debug)]
pub struct Translator {
    catalog: Option<Catalog>,
}

impl Translator {
    /// Load the binary catalog for `language` from the locale resource
    /// directory and bind it to the application text domain.
    pub fn load(locale_dir: &Path, language: &str) -> Result<Self, ConfigError> {
        let mo_path = catalog_path(locale_dir, language);
        let file = File::open(&mo_path)
            .map_err(|e| ConfigError::Catalog(format!("Failed to open catalog {mo_path:?}: {e}")))?;
        let catalog = Catalog::parse(file)
            .map_err(|e| ConfigError::Catalog(format!("Failed to parse catalog {mo_path:?}: {e}")))?;
        Ok(Self {
            catalog: Some(catalog),
        })
    }

    /// A translator that maps every string to itself. Used before the real
    /// catalog is available, and in tests.
    pub fn identity() -> Self {
        Self { catalog: None }
    }

    /// Translate a source string, falling back to the string itself when the
    /// catalog has no entry for it.
    pub fn tr(&self, text: &str) -> String {
        match &self.catalog {
            Some(catalog) => catalog.gettext(text).to_string(),
            None => text.to_string(),
        }
    }
}

fn catalog_path(locale_dir: &Path, language: &str) -> PathBuf {
    locale_dir
        .join(language)
        .join("LC_MESSAGES")
        .join(format!("{TEXT_DOMAIN}.mo"))
}
