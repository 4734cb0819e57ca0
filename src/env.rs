//! Environment constants and path utilities for tasker.
//!
//! Centralizes the directory and file names used by configuration discovery.

use std::path::{Path, PathBuf};

/// Application directory name (hidden directory like .git, .vscode)
pub const TASKER_DIR_NAME: &str = ".tasker";

/// Configuration file name inside the application directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Standalone configuration file name in the current directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "tasker.toml";

/// System-wide configuration file (Unix-like systems)
pub const SYSTEM_CONFIG_FILE_PATH: &str = "/etc/tasker/config.toml";

/// Logging defaults
pub mod logging {
    /// Filter used when neither `RUST_LOG` nor the config file sets one
    pub const DEFAULT_FILTER: &str = "tasker=warn";

    /// Filter used when `--verbose` is passed
    pub const VERBOSE_FILTER: &str = "tasker=debug";
}

/// Build the standalone config file path in the current directory
pub fn local_config_file_path(current_dir: &Path) -> PathBuf {
    current_dir.join(LOCAL_CONFIG_FILE_NAME)
}

/// Build the config file path inside `./.tasker`
pub fn local_dir_config_file_path(current_dir: &Path) -> PathBuf {
    current_dir.join(TASKER_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Build config directory path in user's home directory
pub fn user_config_dir_path(home_dir: &Path) -> PathBuf {
    home_dir.join(TASKER_DIR_NAME)
}

/// Build config file path in user's home directory
pub fn user_config_file_path(home_dir: &Path) -> PathBuf {
    user_config_dir_path(home_dir).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let home_dir = Path::new("/home/user");
        let current_dir = Path::new("/current/project");

        assert_eq!(
            local_config_file_path(current_dir),
            Path::new("/current/project/tasker.toml")
        );

        assert_eq!(
            local_dir_config_file_path(current_dir),
            Path::new("/current/project/.tasker/config.toml")
        );

        assert_eq!(user_config_dir_path(home_dir), Path::new("/home/user/.tasker"));

        assert_eq!(
            user_config_file_path(home_dir),
            Path::new("/home/user/.tasker/config.toml")
        );
    }
}
