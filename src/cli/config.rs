//! Configuration discovery and loading
//!
//! This module handles the configuration discovery hierarchy:
//! 1. Current directory: ./tasker.toml or ./.tasker/config.toml
//! 2. User config: ~/.tasker/config.toml
//! 3. System config: /etc/tasker/config.toml
//! 4. Built-in defaults

use crate::env;
use serde::{Deserialize, Serialize};
use std::env as std_env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error accessing '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration in '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine home directory")]
    NoHomeDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: env::logging::DEFAULT_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Print the removed count instead of the plain success line
    pub report_removed_count: bool,
    /// Print the full menu before every choice
    pub show_menu: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            report_removed_count: false,
            show_menu: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskerConfig {
    pub logging: LoggingConfig,
    pub shell: ShellConfig,
}

impl TaskerConfig {
    /// Load from TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to TOML file
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Configuration discovery system
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover and load configuration using the hierarchy
    pub fn discover_config() -> Result<TaskerConfig, ConfigError> {
        if let Some(config_path) = Self::find_config_file() {
            info!("Loading configuration from: {:?}", config_path);
            return TaskerConfig::from_toml_file(config_path);
        }

        info!("No configuration file found, using defaults");
        Ok(TaskerConfig::default())
    }

    /// Load an explicit override, or fall back to discovery
    pub fn load(config_override: Option<&Path>) -> Result<TaskerConfig, ConfigError> {
        match config_override {
            Some(path) => {
                info!("Loading configuration override from: {:?}", path);
                TaskerConfig::from_toml_file(path)
            }
            None => Self::discover_config(),
        }
    }

    /// Find configuration file using discovery hierarchy
    pub fn find_config_file() -> Option<PathBuf> {
        for candidate in Self::get_config_candidates() {
            debug!("Checking for config file: {:?}", candidate);
            if candidate.is_file() {
                debug!("Found config file: {:?}", candidate);
                return Some(candidate);
            }
        }

        debug!("No config file found in discovery hierarchy");
        None
    }

    fn get_config_candidates() -> Vec<PathBuf> {
        let current_dir = std_env::current_dir().ok();
        let home_dir = Self::get_home_dir();
        Self::config_candidates(current_dir.as_deref(), home_dir.as_deref())
    }

    /// List configuration file candidates in priority order
    pub fn config_candidates(current_dir: Option<&Path>, home_dir: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(current_dir) = current_dir {
            candidates.push(env::local_config_file_path(current_dir));
            candidates.push(env::local_dir_config_file_path(current_dir));
        }

        if let Some(home_dir) = home_dir {
            candidates.push(env::user_config_file_path(home_dir));
        }

        #[cfg(unix)]
        candidates.push(PathBuf::from(env::SYSTEM_CONFIG_FILE_PATH));

        candidates
    }

    fn get_home_dir() -> Option<PathBuf> {
        std_env::var("HOME")
            .ok()
            .or_else(|| std_env::var("USERPROFILE").ok())
            .map(PathBuf::from)
    }

    /// Create a default config file in the user's home directory
    pub fn create_default_user_config() -> Result<PathBuf, ConfigError> {
        let home_dir = Self::get_home_dir().ok_or(ConfigError::NoHomeDir)?;
        Self::create_default_config_in(&home_dir)
    }

    /// Write a default config under `<home_dir>/.tasker/` unless one exists
    pub fn create_default_config_in(home_dir: &Path) -> Result<PathBuf, ConfigError> {
        let config_dir = env::user_config_dir_path(home_dir);
        let config_path = env::user_config_file_path(home_dir);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|source| ConfigError::Io {
                path: config_dir.clone(),
                source,
            })?;
            info!("Created configuration directory: {:?}", config_dir);
        }

        if !config_path.exists() {
            TaskerConfig::default().to_toml_file(&config_path)?;
            info!("Created default configuration file: {:?}", config_path);
        } else {
            warn!("Configuration file already exists: {:?}", config_path);
        }

        Ok(config_path)
    }

    /// Show configuration discovery information for debugging
    pub fn show_discovery_info() {
        println!("Configuration Discovery Hierarchy:");
        println!();

        let candidates = Self::get_config_candidates();
        for (i, candidate) in candidates.iter().enumerate() {
            let status = if candidate.exists() {
                if candidate.is_file() {
                    "✓ EXISTS"
                } else {
                    "✗ NOT A FILE"
                }
            } else {
                "✗ NOT FOUND"
            };

            println!("  {}. {:?} - {}", i + 1, candidate, status);
        }

        println!();
        if let Some(found) = Self::find_config_file() {
            println!("Active configuration: {:?}", found);
        } else {
            println!("Active configuration: Built-in defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TaskerConfig::default();

        assert_eq!(config.logging.filter, "tasker=warn");
        assert!(!config.shell.report_removed_count);
        assert!(config.shell.show_menu);
    }

    #[test]
    fn test_config_serialization() {
        let config = TaskerConfig::default();
        let toml_string = toml::to_string(&config).unwrap();

        let deserialized: TaskerConfig = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: TaskerConfig = toml::from_str("[shell]\nreport_removed_count = true\n").unwrap();

        assert!(config.shell.report_removed_count);
        assert!(config.shell.show_menu);
        assert_eq!(config.logging.filter, "tasker=warn");
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let mut original_config = TaskerConfig::default();
        original_config.logging.filter = "tasker=trace".to_string();

        original_config.to_toml_file(&config_path).unwrap();
        assert!(config_path.exists());

        let loaded_config = TaskerConfig::from_toml_file(&config_path).unwrap();
        assert_eq!(loaded_config, original_config);
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[shell]\nshow_menu = \"sometimes\"\n").unwrap();

        let result = TaskerConfig::from_toml_file(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));

        let missing = TaskerConfig::from_toml_file(temp_dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_with_override() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("override.toml");
        fs::write(&config_path, "[shell]\nshow_menu = false\n").unwrap();

        let config = ConfigDiscovery::load(Some(config_path.as_path())).unwrap();
        assert!(!config.shell.show_menu);
    }

    #[test]
    fn test_config_candidates() {
        let candidates = ConfigDiscovery::config_candidates(
            Some(Path::new("/project")),
            Some(Path::new("/home/user")),
        );

        assert_eq!(candidates[0], Path::new("/project/tasker.toml"));
        assert_eq!(candidates[1], Path::new("/project/.tasker/config.toml"));
        assert_eq!(candidates[2], Path::new("/home/user/.tasker/config.toml"));

        let without_home = ConfigDiscovery::config_candidates(Some(Path::new("/project")), None);
        assert!(!without_home.iter().any(|p| p.starts_with("/home")));
    }

    #[test]
    fn test_create_default_config_in() {
        let temp_dir = TempDir::new().unwrap();

        let path = ConfigDiscovery::create_default_config_in(temp_dir.path()).unwrap();
        assert_eq!(path, temp_dir.path().join(".tasker").join("config.toml"));
        assert_eq!(TaskerConfig::from_toml_file(&path).unwrap(), TaskerConfig::default());

        // Existing file is left untouched
        fs::write(&path, "[logging]\nfilter = \"tasker=info\"\n").unwrap();
        ConfigDiscovery::create_default_config_in(temp_dir.path()).unwrap();
        let kept = TaskerConfig::from_toml_file(&path).unwrap();
        assert_eq!(kept.logging.filter, "tasker=info");
    }
}
