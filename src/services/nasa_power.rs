use std::collections::BTreeMap;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::location::Location;
use crate::domain::weather_sample::WeatherSample;
use crate::services::app_config::NasaPowerConfig;
use crate::services::sample_provider::{SampleError, SampleProvider};

const PARAMETERS: &str = "T2M,PRECTOTCORR,WS10M";
/// Marker NASA POWER uses for days without data.
const FILL_VALUE: f64 = -999.0;

#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: PowerParameters,
}

#[derive(Debug, Deserialize)]
struct PowerParameters {
    #[serde(rename = "T2M", default)]
    temperature: BTreeMap<String, f64>,
    #[serde(rename = "PRECTOTCORR", default)]
    precipitation: BTreeMap<String, f64>,
    #[serde(rename = "WS10M", default)]
    wind_speed: BTreeMap<String, f64>,
}

pub struct NasaPowerClient {
    config: NasaPowerConfig,
    client: Client,
}

impl NasaPowerClient {
    pub fn new(config: NasaPowerConfig) -> Result<Self, SampleError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SampleError::Connection(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn query_params(&self, location: Location, date: NaiveDate) -> Vec<(&'static str, String)> {
        let day = date_key(date);
        vec![
            ("parameters", PARAMETERS.to_string()),
            ("community", self.config.community.clone()),
            ("longitude", location.longitude.to_string()),
            ("latitude", location.latitude.to_string()),
            ("start", day.clone()),
            ("end", day),
            ("format", "JSON".to_string()),
        ]
    }
}

impl SampleProvider for NasaPowerClient {
    async fn fetch_sample(
        &self,
        location: Location,
        date: NaiveDate,
    ) -> Result<WeatherSample, SampleError> {
        let delay = self.config.request_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        tracing::debug!(url = %self.config.base_url, %date, "requesting NASA POWER sample");
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.query_params(location, date))
            .send()
            .await
            .map_err(|e| SampleError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SampleError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SampleError::Connection(e.to_string()))?;
        parse_power_payload(&body, date)
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Extracts the sample for `date` from a POWER daily point response, falling
/// back to the first date in the payload when the requested key is absent.
pub fn parse_power_payload(body: &str, date: NaiveDate) -> Result<WeatherSample, SampleError> {
    let response: PowerResponse =
        serde_json::from_str(body).map_err(|e| SampleError::Parse(e.to_string()))?;
    let parameters = response.properties.parameter;

    let requested = date_key(date);
    let key = if parameters.temperature.contains_key(&requested) {
        requested
    } else {
        parameters
            .temperature
            .keys()
            .next()
            .cloned()
            .ok_or(SampleError::MissingValue("T2M"))?
    };

    Ok(WeatherSample {
        temperature: read_value(&parameters.temperature, &key, "T2M")?,
        precipitation: read_value(&parameters.precipitation, &key, "PRECTOTCORR")?,
        wind_speed: read_value(&parameters.wind_speed, &key, "WS10M")?,
    })
}

fn read_value(
    series: &BTreeMap<String, f64>,
    key: &str,
    name: &'static str,
) -> Result<f64, SampleError> {
    match series.get(key) {
        Some(value) if (*value - FILL_VALUE).abs() > f64::EPSILON => Ok(*value),
        _ => Err(SampleError::MissingValue(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn payload(t2m: &str, prec: &str, ws10m: &str) -> String {
        format!(
            r#"{{"type":"Feature","properties":{{"parameter":{{"T2M":{t2m},"PRECTOTCORR":{prec},"WS10M":{ws10m}}}}}}}"#
        )
    }

    #[test]
    fn parse_power_payload_reads_requested_date() {
        let body = payload(
            r#"{"20240714": 27.4}"#,
            r#"{"20240714": 0.6}"#,
            r#"{"20240714": 3.1}"#,
        );

        let sample = parse_power_payload(&body, on_date(2024, 7, 14)).unwrap();

        assert_eq!(
            sample,
            WeatherSample {
                temperature: 27.4,
                precipitation: 0.6,
                wind_speed: 3.1,
            }
        );
    }

    #[test]
    fn parse_power_payload_falls_back_to_first_date_key() {
        let body = payload(
            r#"{"20240101": -3.0, "20240102": 1.0}"#,
            r#"{"20240101": 12.0, "20240102": 0.0}"#,
            r#"{"20240101": 8.0, "20240102": 1.0}"#,
        );

        let sample = parse_power_payload(&body, on_date(2030, 5, 5)).unwrap();

        assert_eq!(sample.temperature, -3.0);
        assert_eq!(sample.precipitation, 12.0);
    }

    #[test]
    fn parse_power_payload_treats_fill_value_as_missing() {
        let body = payload(
            r#"{"20240714": 27.4}"#,
            r#"{"20240714": -999.0}"#,
            r#"{"20240714": 3.1}"#,
        );

        let error = parse_power_payload(&body, on_date(2024, 7, 14)).unwrap_err();
        assert!(matches!(error, SampleError::MissingValue("PRECTOTCORR")));
    }

    #[test]
    fn parse_power_payload_rejects_missing_parameters_and_bad_json() {
        let body = r#"{"properties":{"parameter":{"T2M":{"20240714": 20.0}}}}"#;
        let error = parse_power_payload(body, on_date(2024, 7, 14)).unwrap_err();
        assert!(matches!(error, SampleError::MissingValue("PRECTOTCORR")));

        let empty = r#"{"properties":{"parameter":{}}}"#;
        let error = parse_power_payload(empty, on_date(2024, 7, 14)).unwrap_err();
        assert!(matches!(error, SampleError::MissingValue("T2M")));

        let error = parse_power_payload("<html>", on_date(2024, 7, 14)).unwrap_err();
        assert!(matches!(error, SampleError::Parse(_)));
    }

    #[test]
    fn query_params_use_compact_dates_for_start_and_end() {
        let client = NasaPowerClient::new(NasaPowerConfig::default()).unwrap();
        let location = Location::new(48.1, 11.6).unwrap();

        let params = client.query_params(location, on_date(2025, 3, 9));

        assert!(params.contains(&("parameters", "T2M,PRECTOTCORR,WS10M".to_string())));
        assert!(params.contains(&("start", "20250309".to_string())));
        assert!(params.contains(&("end", "20250309".to_string())));
        assert!(params.contains(&("latitude", "48.1".to_string())));
        assert!(params.contains(&("longitude", "11.6".to_string())));
        assert!(params.contains(&("community", "RE".to_string())));
    }
}
