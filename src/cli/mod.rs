//! CLI-specific functionality for tasker
//!
//! This module contains argument parsing, configuration discovery and the
//! interactive menu loop that drives the task manager.

pub mod args;
pub mod config;
pub mod shell;

pub use args::{Args, Commands, ExecutionMode, InteractiveConfig};
pub use config::{ConfigDiscovery, ConfigError, LoggingConfig, ShellConfig, TaskerConfig};
pub use shell::{InputError, MenuChoice, Shell};
