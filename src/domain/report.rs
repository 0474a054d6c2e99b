use serde::Serialize;

use crate::domain::probability::Probability;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureOutlook {
    pub very_hot_probability: Probability,
    pub very_cold_probability: Probability,
    pub historical: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrecipitationOutlook {
    pub very_wet_probability: Probability,
    pub historical: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindOutlook {
    pub very_windy_probability: Probability,
    pub historical: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComfortOutlook {
    pub very_uncomfortable_probability: Probability,
    pub historical: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityReport {
    pub temperature: TemperatureOutlook,
    pub precipitation: PrecipitationOutlook,
    pub wind: WindOutlook,
    pub comfort_index: ComfortOutlook,
}

/// One (category, condition, probability) triple of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionRow {
    pub category: &'static str,
    pub condition: &'static str,
    pub probability: Probability,
}

impl ProbabilityReport {
    /// Rows in presentation order: hot, cold, wet, windy, uncomfortable.
    pub fn condition_rows(&self) -> Vec<ConditionRow> {
        vec![
            ConditionRow {
                category: "temperature",
                condition: "very hot",
                probability: self.temperature.very_hot_probability,
            },
            ConditionRow {
                category: "temperature",
                condition: "very cold",
                probability: self.temperature.very_cold_probability,
            },
            ConditionRow {
                category: "precipitation",
                condition: "very wet",
                probability: self.precipitation.very_wet_probability,
            },
            ConditionRow {
                category: "wind",
                condition: "very windy",
                probability: self.wind.very_windy_probability,
            },
            ConditionRow {
                category: "comfort",
                condition: "very uncomfortable",
                probability: self.comfort_index.very_uncomfortable_probability,
            },
        ]
    }

    pub fn historical(&self, dimension: Dimension) -> &[f64] {
        match dimension {
            Dimension::Temperature => &self.temperature.historical,
            Dimension::Precipitation => &self.precipitation.historical,
            Dimension::Wind => &self.wind.historical,
            Dimension::Comfort => &self.comfort_index.historical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Temperature,
    Precipitation,
    Wind,
    Comfort,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Temperature,
        Dimension::Precipitation,
        Dimension::Wind,
        Dimension::Comfort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Temperature => "temperature",
            Dimension::Precipitation => "precipitation",
            Dimension::Wind => "wind",
            Dimension::Comfort => "comfort",
        }
    }
}

/// Where the numbers of a report came from.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportOrigin {
    Observed,
    Simulated,
}

impl ReportOrigin {
    pub fn description(self) -> &'static str {
        match self {
            ReportOrigin::Observed => "NASA POWER daily point observation",
            ReportOrigin::Simulated => "Simulated from latitude, longitude and season",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub report: ProbabilityReport,
    pub origin: ReportOrigin,
}
