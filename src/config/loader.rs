//! Configuration file loading with precedence handling.

use crate::state::ListSettings;
use serde::Deserialize;
use std::env::VarError;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "FNLIST_CONFIG";

/// Environment variable overriding the generated-name base.
pub const BASE_NAME_ENV: &str = "FNLIST_BASE_NAME";

const APP_DIR: &str = "fnlist";

/// Errors from locating or reading the config file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config path cannot be used.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The config file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying error message.
        reason: String,
    },

    /// TOML syntax error, or a key this version does not know.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying error message.
        reason: String,
    },
}

/// Contents of `config.toml`. Absent keys keep their defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Base for generated function names.
    pub base_name: Option<String>,
    /// Label of the trailing add row.
    pub add_row_label: Option<String>,
    /// Match search text case-sensitively.
    pub case_sensitive_search: Option<bool>,
    /// Where the log file goes.
    pub log_file_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Overwrite the fields of `config` that this file sets.
    fn apply_to(self, config: &mut ResolvedConfig) {
        if let Some(base_name) = self.base_name {
            config.base_name = base_name;
        }
        if let Some(label) = self.add_row_label {
            config.add_row_label = label;
        }
        if let Some(case_sensitive) = self.case_sensitive_search {
            config.case_sensitive_search = case_sensitive;
        }
        if let Some(path) = self.log_file_path {
            config.log_file_path = path;
        }
    }
}

/// Defaults, then the config file, then the environment, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base for generated function names.
    pub base_name: String,
    /// Label of the trailing add row.
    pub add_row_label: String,
    /// Match search text case-sensitively.
    pub case_sensitive_search: bool,
    /// Log file location.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let list = ListSettings::default();
        Self {
            base_name: list.base_name,
            add_row_label: list.add_row_label,
            case_sensitive_search: list.case_sensitive_search,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Settings handed to the list controller.
    pub fn list_settings(&self) -> ListSettings {
        ListSettings {
            base_name: self.base_name.clone(),
            add_row_label: self.add_row_label.clone(),
            case_sensitive_search: self.case_sensitive_search,
        }
    }
}

/// `<state dir>/fnlist/fnlist.log`, or `fnlist.log` when there is no state dir.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_default()
        .join("fnlist.log")
}

/// Parse the config file at `path`. A missing file yields `Ok(None)`.
///
/// # Errors
///
/// Unreadable files and invalid TOML.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::ReadError {
                path,
                reason: err.to_string(),
            })
        }
    };
    toml::from_str(&contents)
        .map(Some)
        .map_err(|err| ConfigError::ParseError {
            path,
            reason: err.to_string(),
        })
}

/// `<config dir>/fnlist/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join("config.toml"))
}

/// Find and load the config file.
///
/// An explicit `--config` path wins over `FNLIST_CONFIG`, which wins over
/// the default location. Missing files are not errors.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let path = match config_path {
        Some(path) => Some(path),
        None => match std::env::var(CONFIG_ENV) {
            Ok(value) if value.is_empty() => {
                return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is empty")))
            }
            Ok(value) => Some(PathBuf::from(value)),
            Err(VarError::NotUnicode(raw)) => {
                return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()))
            }
            Err(VarError::NotPresent) => default_config_path(),
        },
    };
    path.map_or(Ok(None), load_config_file)
}

/// Overlay `FNLIST_BASE_NAME`.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base_name) = std::env::var(BASE_NAME_ENV) {
        config.base_name = base_name;
    }
    config
}

/// Overlay a config file, if any, on the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let mut config = ResolvedConfig::default();
    if let Some(file) = config_file {
        file.apply_to(&mut config);
    }
    config
}

/// Overlay command-line flags, the last step after file and environment.
pub fn apply_cli_overrides(mut config: ResolvedConfig, base_name: Option<String>) -> ResolvedConfig {
    if let Some(base_name) = base_name {
        config.base_name = base_name;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
