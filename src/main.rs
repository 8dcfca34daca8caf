//! L5X State Machine Visualizer

use clap::Parser;
use l5x_state_viz::{Config, Result, VERSION, cli, init_logging};

fn main() {
    let args = cli::Cli::parse();

    // Use default level, can be overridden by config
    init_logging("info");

    tracing::info!("L5X State Machine Visualizer v{}", VERSION);
    tracing::debug!("Parsed arguments: {:?}", args);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: cli::Cli) -> Result<()> {
    let config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    tracing::debug!("Loaded configuration: {:?}", config);

    cli::execute(args, config)
}
