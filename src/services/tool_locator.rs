// External Tool Locator Service
// Best-effort scan for the newest Cheat Engine installation

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

const INSTALL_ROOT: &str = r"C:\Program Files";
const PRODUCT_PREFIX: &str = "Cheat Engine";
const VERSION_PATTERN: &str = r"Cheat Engine (\d+(?:\.\d+)*)";

static VERSION_REGEX: OnceLock<Regex> = OnceLock::new();

/// Locate the newest Cheat Engine installation under `C:\Program Files`.
///
/// Not finding one is a normal outcome, not an error; whoever needs the tool
/// decides what an absent path means.
pub fn find_ce_install_path() -> Option<PathBuf> {
    find_install_path(Path::new(INSTALL_ROOT))
}

/// Scan `base` for `Cheat Engine <version>` directories and return the one
/// with the highest version. Versions compare as integer tuples padded to
/// three components, so `7.5.1` beats `7.5` and `7.10` beats `7.9`. A tie
/// keeps the first directory seen.
pub fn find_install_path(base: &Path) -> Option<PathBuf> {
    let regex =
        VERSION_REGEX.get_or_init(|| Regex::new(VERSION_PATTERN).expect("valid version pattern"));

    let entries = fs::read_dir(base).ok()?;
    let mut latest_version = [0u32; 3];
    let mut latest_path: Option<PathBuf> = None;

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(folder) = file_name.to_str() else {
            continue;
        };
        if !folder.starts_with(PRODUCT_PREFIX) {
            continue;
        }
        let Some(captures) = regex.captures(folder) else {
            continue;
        };
        let Some(version) = parse_version(&captures[1]) else {
            continue;
        };

        if latest_path.is_none() || version > latest_version {
            latest_version = version;
            latest_path = Some(base.join(folder));
        }
    }

    latest_path
}

/// Parse `7.5.1` into `[7, 5, 1]`, right-padding with zeros.
fn parse_version(raw: &str) -> Option<[u32; 3]> {
    let mut version = [0u32; 3];
    for (slot, component) in version.iter_mut().zip(raw.split('.')) {
        *slot = component.parse().ok()?;
    }
    Some(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_picks_the_highest_version() {
        let temp = tempdir().unwrap();
        for folder in ["Cheat Engine 7.4", "Cheat Engine 7.5.1", "Cheat Engine 6.8"] {
            fs::create_dir(temp.path().join(folder)).unwrap();
        }

        let found = find_install_path(temp.path()).unwrap();
        assert_eq!(found, temp.path().join("Cheat Engine 7.5.1"));
    }

    #[test]
    fn test_short_versions_are_zero_padded() {
        let temp = tempdir().unwrap();
        for folder in ["Cheat Engine 7.5", "Cheat Engine 7.4.9"] {
            fs::create_dir(temp.path().join(folder)).unwrap();
        }

        let found = find_install_path(temp.path()).unwrap();
        assert_eq!(found, temp.path().join("Cheat Engine 7.5"));
    }

    #[test]
    fn test_ignores_unrelated_and_unversioned_folders() {
        let temp = tempdir().unwrap();
        for folder in ["Cheat Engine", "CheatEngine 9.0", "Notepad++", "Cheat Engine 7.2"] {
            fs::create_dir(temp.path().join(folder)).unwrap();
        }

        let found = find_install_path(temp.path()).unwrap();
        assert_eq!(found, temp.path().join("Cheat Engine 7.2"));
    }

    #[test]
    fn test_missing_root_is_not_an_error() {
        let temp = tempdir().unwrap();
        assert_eq!(find_install_path(&temp.path().join("nope")), None);
    }
}
