use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::location::Location;
use crate::domain::weather_sample::WeatherSample;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("sample service returned status {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("sample provider is offline")]
    Offline,
}

/// Describes an interface for retrieving a single day's observation at a point.
pub trait SampleProvider {
    async fn fetch_sample(
        &self,
        location: Location,
        date: NaiveDate,
    ) -> Result<WeatherSample, SampleError>;
}

/// Provider that never has data, forcing the simulation path.
pub struct OfflineProvider;

impl SampleProvider for OfflineProvider {
    async fn fetch_sample(
        &self,
        _location: Location,
        _date: NaiveDate,
    ) -> Result<WeatherSample, SampleError> {
        Err(SampleError::Offline)
    }
}

/// Provider whose client could not be set up. Every fetch reports the
/// setup error so the estimator can fall back.
pub struct UnavailableProvider(pub SampleError);

impl SampleProvider for UnavailableProvider {
    async fn fetch_sample(
        &self,
        _location: Location,
        _date: NaiveDate,
    ) -> Result<WeatherSample, SampleError> {
        Err(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    #[tokio::test]
    async fn unavailable_provider_reports_its_setup_error() {
        let provider = UnavailableProvider(SampleError::Connection("no TLS backend".to_string()));
        let location = Location::new(10.0, 10.0).unwrap();

        let first = provider.fetch_sample(location, on_date(2025, 3, 1)).await;
        let second = provider.fetch_sample(location, on_date(2025, 3, 2)).await;

        assert_eq!(first, Err(SampleError::Connection("no TLS backend".to_string())));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn offline_provider_never_returns_a_sample() {
        let sydney = Location::new(-33.9, 151.2).unwrap();
        let result = OfflineProvider
            .fetch_sample(sydney, on_date(2025, 3, 1))
            .await;
        assert_eq!(result, Err(SampleError::Offline));
    }
}
