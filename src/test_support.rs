use chrono::NaiveDate;

use crate::domain::location::Location;
use crate::domain::weather_sample::WeatherSample;
use crate::services::sample_provider::{SampleError, SampleProvider};

// A provider that always answers with the same observation
pub struct FixedSampleProvider(pub WeatherSample);

impl SampleProvider for FixedSampleProvider {
    async fn fetch_sample(
        &self,
        _location: Location,
        _date: NaiveDate,
    ) -> Result<WeatherSample, SampleError> {
        Ok(self.0)
    }
}

// A provider whose backend is always down
pub struct FailingSampleProvider;

impl SampleProvider for FailingSampleProvider {
    async fn fetch_sample(
        &self,
        _location: Location,
        _date: NaiveDate,
    ) -> Result<WeatherSample, SampleError> {
        Err(SampleError::Status(503))
    }
}

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn sample(temperature: f64, precipitation: f64, wind_speed: f64) -> WeatherSample {
    WeatherSample {
        temperature,
        precipitation,
        wind_speed,
    }
}
