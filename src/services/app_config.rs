use std::fs;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct NasaPowerConfig {
    pub base_url: String,
    pub community: String,
    /// Pause before each request, kept from the interactive demo for pacing.
    pub request_delay_ms: u64,
    pub timeout_secs: u64,
}

impl Default for NasaPowerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://power.larc.nasa.gov/api/temporal/daily/point".to_string(),
            community: "RE".to_string(),
            request_delay_ms: 1500,
            timeout_secs: 30,
        }
    }
}

impl NasaPowerConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub user_agent: String,
    pub suggestion_limit: usize,
    pub timeout_secs: u64,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: concat!("weather-odds/", env!("CARGO_PKG_VERSION")).to_string(),
            suggestion_limit: 5,
            timeout_secs: 10,
        }
    }
}

impl GeocodingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub nasa_power: NasaPowerConfig,
    pub geocoding: GeocodingConfig,
}

impl AppConfig {
    pub fn from_yaml_str(path: &str, contents: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(path, &contents)
    }

    /// Built-in defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}
