// Resource Resolver Service
// Maps logical resource names to absolute paths for bundled and source runs

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Set by the packaged launcher to the bundle's extraction root. When absent
/// the process is assumed to run from a source checkout.
const BUNDLE_DIR_VAR: &str = "GCM_BUNDLE_DIR";

/// Resolves bundled resources (assets, catalogs, helper tools) to absolute
/// filesystem paths.
#[derive(Debug, Clone)]
pub struct Resources {
    base: PathBuf,
    bundled: bool,
}

impl Resources {
    /// Detect the resource root for this process.
    ///
    /// A packaged build points `GCM_BUNDLE_DIR` at its extraction root;
    /// otherwise resources live in the source tree next to the crate
    /// manifest.
    pub fn detect() -> Self {
        match env::var_os(BUNDLE_DIR_VAR) {
            Some(dir) => Self {
                base: PathBuf::from(dir),
                bundled: true,
            },
            None => Self {
                base: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
                bundled: false,
            },
        }
    }

    /// Use an explicit resource root, bypassing detection.
    pub fn at(base: impl Into<PathBuf>, bundled: bool) -> Self {
        Self {
            base: base.into(),
            bundled,
        }
    }

    pub fn is_bundled(&self) -> bool {
        self.bundled
    }

    /// Resolve a relative resource name to an absolute path.
    ///
    /// Errors when the resource does not exist on disk; the error carries the
    /// file's base name for the user-facing message.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, ConfigError> {
        let full_path = self.base.join(relative);
        if !full_path.exists() {
            let resource_name = Path::new(relative)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| relative.to_string());
            return Err(ConfigError::ResourceMissing(resource_name));
        }
        Ok(full_path)
    }
}

/// Render a path for stylesheet consumption. Qt stylesheets require forward
/// slashes even on Windows.
pub fn stylesheet_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolves_existing_resource() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("assets")).unwrap();
        fs::write(temp.path().join("assets/search.png"), b"png").unwrap();

        let resources = Resources::at(temp.path(), false);
        let resolved = resources.resolve("assets/search.png").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("assets/search.png"));
    }

    #[test]
    fn test_missing_resource_names_the_file() {
        let temp = tempdir().unwrap();
        let resources = Resources::at(temp.path(), false);

        let error = resources.resolve("assets/search.png").unwrap_err();
        match error {
            ConfigError::ResourceMissing(ref name) => assert_eq!(name, "search.png"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(error.to_string().contains("search.png"));
    }

    #[test]
    fn test_stylesheet_path_uses_forward_slashes() {
        let rendered = stylesheet_path(Path::new(r"C:\app\assets\up.png"));
        assert_eq!(rendered, "C:/app/assets/up.png");
    }
}
