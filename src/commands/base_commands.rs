use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::services::charts::ChartStyle;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate weather probabilities for a location and date
    Estimate {
        /// Latitude in decimal degrees
        #[arg(
            long = "lat",
            allow_negative_numbers = true,
            requires = "longitude",
            conflicts_with = "place"
        )]
        latitude: Option<f64>,
        /// Longitude in decimal degrees
        #[arg(long = "lon", allow_negative_numbers = true, requires = "latitude")]
        longitude: Option<f64>,
        /// Place name to geocode instead of coordinates
        #[arg(short, long)]
        place: Option<String>,
        /// Date to estimate (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_date())]
        date: String,
        /// Optional path to a YAML config file
        #[arg(short, long)]
        config: Option<String>,
        /// Skip the observation service and simulate
        #[arg(long)]
        offline: bool,
        /// Seed for the simulation
        #[arg(long)]
        seed: Option<u64>,
        /// Write the probabilities as JSON
        #[arg(long)]
        json: Option<String>,
        /// Write the probabilities as CSV
        #[arg(long)]
        csv: Option<String>,
        /// Write CSV and JSON with default file names into this directory
        #[arg(long)]
        export_dir: Option<String>,
        /// Write one PNG chart per dimension as <PREFIX>.<dimension>.png
        #[arg(long, value_name = "PREFIX")]
        charts: Option<String>,
        /// Chart style
        #[arg(long, value_enum, default_value_t = ChartStyle::Line)]
        chart_style: ChartStyle,
    },
    /// Suggest places matching a search text
    Search {
        /// Place name or partial name
        query: String,
        /// Optional path to a YAML config file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
