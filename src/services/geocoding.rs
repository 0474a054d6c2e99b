use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::location::{Location, LocationError};
use crate::services::app_config::GeocodingConfig;

/// Shorter queries get no suggestions.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("geocoding service returned status {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("location not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    InvalidLocation(#[from] LocationError),
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub display_name: String,
    pub location: Location,
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.location)
    }
}

impl TryFrom<NominatimPlace> for Place {
    type Error = GeocodeError;

    fn try_from(place: NominatimPlace) -> Result<Self, Self::Error> {
        let latitude = place
            .lat
            .trim()
            .parse::<f64>()
            .map_err(|_| GeocodeError::Parse(format!("invalid latitude '{}'", place.lat)))?;
        let longitude = place
            .lon
            .trim()
            .parse::<f64>()
            .map_err(|_| GeocodeError::Parse(format!("invalid longitude '{}'", place.lon)))?;
        Ok(Place {
            display_name: place.display_name,
            location: Location::new(latitude, longitude)?,
        })
    }
}

/// Place lookup through an OpenStreetMap Nominatim search endpoint.
pub struct NominatimClient {
    config: GeocodingConfig,
    client: Client,
}

impl NominatimClient {
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodeError::Connection(e.to_string()))?;
        Ok(Self { config, client })
    }

    async fn search_places(&self, query: &str, limit: usize) -> Result<Vec<Place>, GeocodeError> {
        tracing::debug!(url = %self.config.base_url, query, "searching places");
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("format", "json".to_string()),
                ("q", query.to_string()),
                ("addressdetails", "1".to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let places = response
            .json::<Vec<NominatimPlace>>()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))?;
        places.into_iter().map(Place::try_from).collect()
    }

    /// Autocomplete-style suggestions for a partially typed place name.
    pub async fn suggest(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let query = query.trim();
        if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
            return Ok(Vec::new());
        }
        self.search_places(query, self.config.suggestion_limit).await
    }

    /// Best match for `place`.
    pub async fn resolve(&self, place: &str) -> Result<Place, GeocodeError> {
        let query = place.trim();
        if query.is_empty() {
            return Err(GeocodeError::NotFound(place.to_string()));
        }
        let resolved = self
            .search_places(query, 1)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;
        tracing::info!(place = %resolved.display_name, "resolved place");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nominatim(lat: &str, lon: &str) -> NominatimPlace {
        NominatimPlace {
            lat: lat.to_string(),
            lon: lon.to_string(),
            display_name: "Lisboa, Portugal".to_string(),
        }
    }

    #[test]
    fn place_parses_string_coordinates() {
        let place = Place::try_from(nominatim("38.7077507", "-9.1365919")).unwrap();

        assert_eq!(place.display_name, "Lisboa, Portugal");
        assert_eq!(place.location.latitude, 38.7077507);
        assert_eq!(place.location.longitude, -9.1365919);
        assert_eq!(
            place.to_string(),
            "Lisboa, Portugal (Latitude: 38.70775, Longitude: -9.13659)"
        );
    }

    #[test]
    fn place_rejects_unparsable_or_out_of_range_coordinates() {
        assert!(matches!(
            Place::try_from(nominatim("north", "0")),
            Err(GeocodeError::Parse(_))
        ));
        assert!(matches!(
            Place::try_from(nominatim("91.0", "0")),
            Err(GeocodeError::InvalidLocation(_))
        ));
    }

    #[tokio::test]
    async fn suggest_skips_short_queries_without_a_request() {
        let config = GeocodingConfig {
            base_url: "http://127.0.0.1:9/unreachable".to_string(),
            ..GeocodingConfig::default()
        };
        let client = NominatimClient::new(config).unwrap();

        assert!(client.suggest(" L ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn resolve_rejects_blank_input() {
        let client = NominatimClient::new(GeocodingConfig::default()).unwrap();
        let error = client.resolve("   ").await.unwrap_err();
        assert!(matches!(error, GeocodeError::NotFound(_)));
    }
}
