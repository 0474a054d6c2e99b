use std::io::{self, Write};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::probability::Probability;
use crate::domain::report::{ProbabilityReport, ReportOrigin};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize export: {0}")]
    Json(#[from] serde_json::Error),
}

/// What an export describes besides the numbers themselves.
#[derive(Debug, Clone)]
pub struct ExportContext<'a> {
    pub date: NaiveDate,
    pub location: &'a str,
    pub origin: ReportOrigin,
    pub generated_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportMetadata<'a> {
    date: String,
    location: &'a str,
    source: &'static str,
    generated_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TemperatureRecord {
    very_hot: Probability,
    very_cold: Probability,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrecipitationRecord {
    very_wet: Probability,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WindRecord {
    very_windy: Probability,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComfortRecord {
    very_uncomfortable: Probability,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbabilityRecord {
    temperature: TemperatureRecord,
    precipitation: PrecipitationRecord,
    wind: WindRecord,
    comfort_index: ComfortRecord,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    metadata: ExportMetadata<'a>,
    probabilities: ProbabilityRecord,
}

pub fn write_report_csv<W: Write>(writer: &mut W, report: &ProbabilityReport) -> io::Result<()> {
    writeln!(writer, "category,condition,probability")?;
    for row in report.condition_rows() {
        writeln!(
            writer,
            "{},{},{}",
            row.category,
            row.condition,
            row.probability.value()
        )?;
    }
    Ok(())
}

pub fn write_report_json<W: Write>(
    writer: &mut W,
    report: &ProbabilityReport,
    context: &ExportContext<'_>,
) -> Result<(), ExportError> {
    let document = ExportDocument {
        metadata: ExportMetadata {
            date: context.date.format("%Y-%m-%d").to_string(),
            location: context.location,
            source: context.origin.description(),
            generated_at: context
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        },
        probabilities: ProbabilityRecord {
            temperature: TemperatureRecord {
                very_hot: report.temperature.very_hot_probability,
                very_cold: report.temperature.very_cold_probability,
            },
            precipitation: PrecipitationRecord {
                very_wet: report.precipitation.very_wet_probability,
            },
            wind: WindRecord {
                very_windy: report.wind.very_windy_probability,
            },
            comfort_index: ComfortRecord {
                very_uncomfortable: report.comfort_index.very_uncomfortable_probability,
            },
        },
    };
    serde_json::to_writer_pretty(&mut *writer, &document)?;
    writeln!(writer)?;
    Ok(())
}

/// Default export file name for `date`, e.g. `weather-probability-2025-06-01.csv`.
pub fn default_export_file_name(date: NaiveDate, extension: &str) -> String {
    format!("weather-probability-{}.{extension}", date.format("%Y-%m-%d"))
}
