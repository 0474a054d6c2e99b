use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use weather_odds::commands::base_commands::{CliArgs, Commands};
use weather_odds::commands::estimate_cmd::{EstimateRequest, estimate_command};
use weather_odds::commands::search_cmd::search_command;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Estimate {
            latitude,
            longitude,
            place,
            date,
            config,
            offline,
            seed,
            json,
            csv,
            export_dir,
            charts,
            chart_style,
        } => {
            estimate_command(EstimateRequest {
                latitude,
                longitude,
                place,
                date,
                config,
                offline,
                seed,
                json,
                csv,
                export_dir,
                charts,
                chart_style,
            })
            .await
        }
        Commands::Search { query, config } => search_command(&query, config.as_deref()).await,
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
