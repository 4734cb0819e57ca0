use anyhow::Result;
use std::io;
use tasker::cli::{Args, ConfigDiscovery, ExecutionMode, InteractiveConfig, Shell};
use tasker::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    match args.mode() {
        ExecutionMode::Interactive(config) => {
            if let Err(e) = run_interactive_mode(config) {
                error!("Task menu failed: {:#}", e);
                return Err(e);
            }
            Ok(())
        }
        ExecutionMode::ShowConfig => {
            init_logging(env::logging::DEFAULT_FILTER);
            ConfigDiscovery::show_discovery_info();
            Ok(())
        }
        ExecutionMode::InitConfig => {
            init_logging(env::logging::DEFAULT_FILTER);
            let path = ConfigDiscovery::create_default_user_config()?;
            println!("Configuration file: {}", path.display());
            Ok(())
        }
    }
}

/// Initialize logging on stderr. `RUST_LOG` takes precedence over `directive`.
fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_interactive_mode(config: InteractiveConfig) -> Result<()> {
    // Logging is installed before a config error propagates so `main` can report it
    let loaded = ConfigDiscovery::load(config.config_override.as_deref());
    init_logging(config.log_directive(loaded.as_ref().ok()));
    let tasker_config = loaded?;

    info!("Starting tasker");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), tasker_config.shell);
    shell.run()?;

    info!("Pending tasks at exit: {}", shell.manager().len());
    Ok(())
}
