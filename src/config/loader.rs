//! Locating and parsing the configuration file.

use std::io;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    Settings,
};

/// File name looked up in the configuration directory.
pub(super) const CONFIG_FILE_NAME: &str = ".feedback-hub-imagga.json";

/// Path of the configuration file inside `dir`.
pub(super) fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Reads the settings file in `dir`.
///
/// A missing file yields `Ok(None)`; the caller then keeps the defaults.
///
/// # Errors
/// - [`ConfigError::Read`] if the file exists but cannot be read
/// - [`ConfigError::Parse`] if it is not valid settings JSON
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<Settings>, ConfigError> {
    let path = config_path(dir);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No configuration file at {}", path.display());
            return Ok(None);
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    tracing::debug!("Loading configuration from {}", path.display());
    serde_json::from_str(&content).map(Some).map_err(|source| ConfigError::Parse { path, source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    #[fixture]
    fn dir() -> TempDir {
        TempDir::new().unwrap()
    }

    #[rstest]
    fn test_load_from_dir_reads_settings(dir: TempDir) {
        fs::write(
            config_path(dir.path()),
            r#"{"locale": "de", "imagga": {"minAccuracy": 50}}"#,
        )
        .unwrap();

        let settings = load_from_dir(dir.path()).unwrap();

        assert_that!(settings.as_ref().map(|s| s.locale.as_str()), some(eq("de")));
        assert_that!(settings.and_then(|s| s.imagga.min_accuracy), some(eq(50)));
    }

    #[rstest]
    fn test_load_from_dir_without_file(dir: TempDir) {
        assert_that!(load_from_dir(dir.path()), ok(none()));
    }

    #[rstest]
    fn test_load_from_dir_reports_path_of_invalid_json(dir: TempDir) {
        fs::write(config_path(dir.path()), "invalid json").unwrap();

        let error = load_from_dir(dir.path()).unwrap_err();

        assert_that!(matches!(error, ConfigError::Parse { .. }), eq(true));
        assert_that!(error.to_string(), contains_substring(CONFIG_FILE_NAME));
    }

    #[rstest]
    fn test_load_from_dir_reports_unreadable_file(dir: TempDir) {
        fs::create_dir(config_path(dir.path())).unwrap();

        let result = load_from_dir(dir.path());

        assert_that!(matches!(result, Err(ConfigError::Read { .. })), eq(true));
    }
}
