use std::path::Path;

use chrono::{NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::commands::CommandError;
use crate::commands::report_format::format_estimate;
use crate::domain::location::Location;
use crate::domain::report::Estimate;
use crate::services::app_config::AppConfig;
use crate::services::charts::{ChartStyle, write_report_charts_async};
use crate::services::estimator::ProbabilityEstimator;
use crate::services::export::{
    ExportContext, default_export_file_name, write_report_csv, write_report_json,
};
use crate::services::geocoding::NominatimClient;
use crate::services::nasa_power::NasaPowerClient;
use crate::services::sample_provider::{OfflineProvider, SampleProvider, UnavailableProvider};

/// Resolved `estimate` arguments.
pub struct EstimateRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub place: Option<String>,
    pub date: String,
    pub config: Option<String>,
    pub offline: bool,
    pub seed: Option<u64>,
    pub json: Option<String>,
    pub csv: Option<String>,
    pub export_dir: Option<String>,
    pub charts: Option<String>,
    pub chart_style: ChartStyle,
}

pub async fn estimate_command(request: EstimateRequest) -> Result<(), CommandError> {
    let config = AppConfig::load(request.config.as_deref())?;
    let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidDate(request.date.clone()))?;

    let (location, location_label) = resolve_location(&request, &config).await?;

    let rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let estimate = if request.offline {
        run_estimate(OfflineProvider, rng, location, date).await
    } else {
        match NasaPowerClient::new(config.nasa_power.clone()) {
            Ok(provider) => run_estimate(provider, rng, location, date).await,
            Err(e) => run_estimate(UnavailableProvider(e), rng, location, date).await,
        }
    };

    println!("{}", format_estimate(&estimate, &location_label, date));

    let context = ExportContext {
        date,
        location: &location_label,
        origin: estimate.origin,
        generated_at: Utc::now(),
    };

    let mut csv_paths: Vec<String> = request.csv.iter().cloned().collect();
    let mut json_paths: Vec<String> = request.json.iter().cloned().collect();
    if let Some(dir) = &request.export_dir {
        tokio::fs::create_dir_all(dir).await?;
        csv_paths.push(export_path(dir, &default_export_file_name(date, "csv")));
        json_paths.push(export_path(dir, &default_export_file_name(date, "json")));
    }

    for path in &csv_paths {
        let mut buffer = Vec::new();
        write_report_csv(&mut buffer, &estimate.report)?;
        tokio::fs::write(path, buffer).await?;
        println!("CSV written to {path}");
    }
    for path in &json_paths {
        let mut buffer = Vec::new();
        write_report_json(&mut buffer, &estimate.report, &context)?;
        tokio::fs::write(path, buffer).await?;
        println!("JSON written to {path}");
    }

    if let Some(prefix) = &request.charts {
        let written =
            write_report_charts_async(prefix, &estimate.report, request.chart_style).await?;
        for path in written {
            println!("Chart written to {}", path.display());
        }
    }

    Ok(())
}

async fn run_estimate<P: SampleProvider>(
    provider: P,
    rng: StdRng,
    location: Location,
    date: NaiveDate,
) -> Estimate {
    let mut estimator = ProbabilityEstimator::new(provider, rng);
    estimator.estimate(location, date).await
}

async fn resolve_location(
    request: &EstimateRequest,
    config: &AppConfig,
) -> Result<(Location, String), CommandError> {
    if let Some(place) = &request.place {
        let geocoder = NominatimClient::new(config.geocoding.clone())?;
        let resolved = geocoder.resolve(place).await?;
        let label = resolved.to_string();
        return Ok((resolved.location, label));
    }

    match (request.latitude, request.longitude) {
        (Some(latitude), Some(longitude)) => {
            let location = Location::new(latitude, longitude)?;
            Ok((location, location.to_string()))
        }
        _ => Err(CommandError::MissingLocation),
    }
}

fn export_path(dir: &str, file_name: &str) -> String {
    Path::new(dir).join(file_name).to_string_lossy().into_owned()
}
