pub mod base_commands;
pub mod estimate_cmd;
pub mod report_format;
pub mod search_cmd;

use thiserror::Error;

use crate::domain::location::LocationError;
use crate::services::app_config::ConfigError;
use crate::services::charts::ChartError;
use crate::services::export::ExportError;
use crate::services::geocoding::GeocodeError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("please search for a place or pass --lat and --lon")]
    MissingLocation,
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error("location lookup failed: {0}")]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),
}
