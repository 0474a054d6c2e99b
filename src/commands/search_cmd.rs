use crate::commands::CommandError;
use crate::services::app_config::AppConfig;
use crate::services::geocoding::NominatimClient;

pub async fn search_command(query: &str, config: Option<&str>) -> Result<(), CommandError> {
    let config = AppConfig::load(config)?;
    let geocoder = NominatimClient::new(config.geocoding)?;

    let places = geocoder.suggest(query).await?;
    if places.is_empty() {
        println!("No places found for '{}'", query.trim());
        return Ok(());
    }
    for place in places {
        println!("{place}");
    }
    Ok(())
}
