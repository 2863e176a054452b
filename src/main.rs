use anyhow::Result;
use clap::Parser;
use gridmap::cli::{Cli, Commands};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(command_verbosity(&cli.command));

    match cli.command {
        command @ Commands::Analyze { .. } => handle_analyze_command(command),
        command @ Commands::Predict { .. } => handle_predict_command(command),
        Commands::Init { force } => gridmap::commands::init::init_config(force),
    }
}

// Pure function to read the verbosity flag off the parsed command
fn command_verbosity(command: &Commands) -> u8 {
    match command {
        Commands::Analyze { verbosity, .. } => *verbosity,
        _ => 0,
    }
}

// RUST_LOG wins over -v when both are set
fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

// Pure data transformation from CLI args to the analyze config
fn handle_analyze_command(command: Commands) -> Result<()> {
    if let Commands::Analyze {
        path,
        format,
        output,
        model,
        no_model,
        min_level,
        top,
        verbosity: _,
    } = command
    {
        let config = gridmap::commands::analyze::AnalyzeConfig {
            path,
            format,
            output,
            model,
            no_model,
            min_level,
            top,
        };
        gridmap::commands::analyze::handle_analyze(config)
    } else {
        Err(anyhow::anyhow!("Invalid command"))
    }
}

fn handle_predict_command(command: Commands) -> Result<()> {
    if let Commands::Predict {
        load,
        oil_temp,
        rainfall,
        age,
        model,
        format,
    } = command
    {
        let config = gridmap::commands::predict::PredictConfig {
            load,
            oil_temp,
            rainfall,
            age,
            model,
            format,
        };
        gridmap::commands::predict::handle_predict(config)
    } else {
        Err(anyhow::anyhow!("Invalid command"))
    }
}
