//! Loading and caching of the application config.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::types::AppConfig;
use super::validation::validate_config;
use crate::error::ConfigError;

/// Global config instance.
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("calckit"))
}

/// Path of the config file, `~/.config/calckit/config.toml` on Linux.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Load and parse a config file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    toml::from_str(&content).map_err(ConfigError::ParseFailed)
}

/// Load the config from `path`, falling back to defaults.
///
/// A missing file is silent. Read and parse failures log a warning.
/// Validation warnings are logged but never reject the config.
pub fn load_or_default(path: &Path) -> AppConfig {
    if !path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", path);
        return AppConfig::default();
    }

    let config = match load_config_from(path) {
        Ok(config) => {
            tracing::info!("Loaded app config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("{} ({:?}), using defaults", e, path);
            return AppConfig::default();
        }
    };

    for warning in validate_config(&config) {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }
    config
}

/// Initialize the global config from the user's config file.
///
/// Only the first call loads anything; later calls return the cached value.
pub fn init_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match config_path() {
        Ok(path) => load_or_default(&path),
        Err(e) => {
            tracing::debug!("{}, using defaults", e);
            AppConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::LiteralGrammar;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_from_file() {
        let file = write_config(
            r#"
grammar = "extended"
precision = 3
thousands_separator = false
"#,
        );
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.grammar, LiteralGrammar::Extended);
        assert_eq!(config.precision, 3);
        assert!(!config.thousands_separator);
    }

    #[test]
    fn test_load_config_parse_error() {
        let file = write_config("precision = \"lots\"");
        assert!(matches!(
            load_config_from(file.path()),
            Err(ConfigError::ParseFailed(_))
        ));
        assert_eq!(load_or_default(file.path()), AppConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::ReadFailed(_))
        ));
        assert_eq!(load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn test_invalid_values_are_kept() {
        let file = write_config("precision = 40");
        assert_eq!(load_or_default(file.path()).precision, 40);
    }
}
