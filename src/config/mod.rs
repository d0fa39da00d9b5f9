//! Configuration management.
//!
//! Settings come from an optional TOML file:
//!
//! ```toml
//! store_backend = "filesystem"
//! store_path = "/path/to/templates.json"
//!
//! [logging]
//! level = "info"
//! format = "json"
//! file = "/tmp/prompt-builder.log"
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use crate::storage::StoreBackendType;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config dir.
const CONFIG_DIR_NAME: &str = "prompt-builder";

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration for the prompt builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the template catalog is stored.
    pub store_backend: StoreBackendType,
    /// Catalog file for the filesystem backend. `None` uses the platform
    /// data directory.
    pub store_path: Option<PathBuf>,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `warn` or `prompt_builder=debug`.
    pub level: Option<String>,
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Store backend name.
    pub store_backend: Option<String>,
    /// Catalog file path.
    pub store_path: Option<String>,
    /// Logging configuration.
    pub logging: Option<LoggingSettings>,
}

impl AppConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown store backend.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::operation("read_config_file", format!("{}: {e}", path.display()))
        })?;

        Self::parse(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for [`ConfigFile`], or
    /// names an unknown store backend.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| Error::operation("parse_config_file", e))?;

        Self::from_config_file(file)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/prompt-builder/` on macOS)
    /// 2. XDG config dir (`~/.config/prompt-builder/`)
    ///
    /// Returns default configuration if no usable config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
            base_dirs
                .home_dir()
                .join(".config")
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        ];

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Ignoring config file {}: {e}", path.display()),
            }
        }

        Self::default()
    }

    fn from_config_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();

        if let Some(backend) = file.store_backend {
            config.store_backend =
                StoreBackendType::parse(&backend).ok_or_else(|| {
                    Error::operation(
                        "parse_config_file",
                        format!("unknown store backend '{backend}'"),
                    )
                })?;
        }
        if let Some(store_path) = file.store_path {
            config.store_path = Some(PathBuf::from(store_path));
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        Ok(config)
    }

    /// Sets the catalog file path.
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Sets the store backend.
    #[must_use]
    pub const fn with_store_backend(mut self, backend: StoreBackendType) -> Self {
        self.store_backend = backend;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store_backend, StoreBackendType::Filesystem);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = AppConfig::parse(
            r#"
store_backend = "memory"
store_path = "/tmp/templates.json"

[logging]
level = "debug"
format = "json"
file = "/tmp/pb.log"
"#,
        )
        .unwrap();

        assert_eq!(config.store_backend, StoreBackendType::Memory);
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/templates.json")));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format.as_deref(), Some("json"));
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/pb.log")));
    }

    #[test]
    fn test_unknown_backend_is_error() {
        let err = AppConfig::parse("store_backend = \"postgres\"").unwrap_err();
        assert!(matches!(
            err,
            Error::OperationFailed { ref operation, ref cause }
                if operation == "parse_config_file" && cause.contains("'postgres'")
        ));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(AppConfig::parse("store_path = ").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "store_path = \"custom.json\"\n").unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.store_path, Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load_from_file(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_builders_override() {
        let config = AppConfig::new()
            .with_store_path("elsewhere.json")
            .with_store_backend(StoreBackendType::Memory);
        assert_eq!(config.store_path, Some(PathBuf::from("elsewhere.json")));
        assert_eq!(config.store_backend, StoreBackendType::Memory);
    }
}
