//! Command line argument parsing
//!
//! Subcommands:
//! - `interactive` (default when no subcommand is given): run the menu loop
//! - `show-config`: show configuration discovery information
//! - `init-config`: write a default user configuration file

use super::config::TaskerConfig;
use crate::env;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    Interactive(InteractiveConfig),
    ShowConfig,
    InitConfig,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct InteractiveConfig {
    pub config_override: Option<PathBuf>,
    pub verbose: bool,
}

impl InteractiveConfig {
    /// Pick the log filter directive for this run.
    ///
    /// `loaded` is `None` when the configuration could not be loaded; the
    /// default filter is used then so the load error can still be logged.
    pub fn log_directive<'a>(&self, loaded: Option<&'a TaskerConfig>) -> &'a str {
        if self.verbose {
            return env::logging::VERBOSE_FILTER;
        }
        loaded.map_or(env::logging::DEFAULT_FILTER, |config| {
            config.logging.filter.as_str()
        })
    }
}

#[derive(Debug, Parser)]
#[command(name = "tasker")]
#[command(author = "Tasker Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "An interactive, in-memory task manager with HIGH/MEDIUM/LOW priority tiers")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive task menu (default)
    Interactive {
        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
        /// Enable debug logging on stderr
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
    /// Show configuration discovery information
    ShowConfig,
    /// Create a default configuration file in the home directory
    InitConfig,
}

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn mode(&self) -> ExecutionMode {
        match &self.command {
            Some(Commands::Interactive { config, verbose }) => {
                ExecutionMode::Interactive(InteractiveConfig {
                    config_override: config.clone(),
                    verbose: *verbose,
                })
            }
            Some(Commands::ShowConfig) => ExecutionMode::ShowConfig,
            Some(Commands::InitConfig) => ExecutionMode::InitConfig,
            None => ExecutionMode::Interactive(InteractiveConfig::default()),
        }
    }
}
