use chrono::NaiveDate;

use crate::domain::probability::Probability;
use crate::domain::report::{Estimate, ProbabilityReport};

const HIGH: u8 = 70;
const MODERATE: u8 = 40;

fn level(probability: Probability) -> Level {
    match probability.value() {
        value if value >= HIGH => Level::High,
        value if value >= MODERATE => Level::Moderate,
        _ => Level::Low,
    }
}

enum Level {
    High,
    Moderate,
    Low,
}

fn pick(
    probability: Probability,
    high: &'static str,
    moderate: &'static str,
    low: &'static str,
) -> &'static str {
    match level(probability) {
        Level::High => high,
        Level::Moderate => moderate,
        Level::Low => low,
    }
}

/// One sentence per condition plus an overall verdict.
pub fn summarize(report: &ProbabilityReport) -> String {
    [
        pick(
            report.temperature.very_hot_probability,
            "High chance of very hot weather.",
            "Moderate chance of hot weather.",
            "Low chance of hot weather.",
        ),
        pick(
            report.temperature.very_cold_probability,
            "High chance of cold conditions.",
            "Moderate chance of cold conditions.",
            "Low chance of cold conditions.",
        ),
        pick(
            report.precipitation.very_wet_probability,
            "Expect heavy precipitation.",
            "Possibility of wet weather.",
            "Low likelihood of rain.",
        ),
        pick(
            report.wind.very_windy_probability,
            "Very windy conditions possible.",
            "Moderate wind expected.",
            "Winds likely mild.",
        ),
        pick(
            report.comfort_index.very_uncomfortable_probability,
            "Overall: conditions may be uncomfortable.",
            "Overall: comfort may be moderate.",
            "Overall: comfortable for outdoor activities!",
        ),
    ]
    .join(" ")
}

pub fn plan_advice(report: &ProbabilityReport) -> String {
    let mut advice = Vec::new();
    if report.temperature.very_hot_probability.value() >= HIGH {
        advice.push("It's likely very hot: stay hydrated!");
    }
    if report.temperature.very_cold_probability.value() >= HIGH {
        advice.push("Dress warmly, possible cold snap.");
    }
    if report.precipitation.very_wet_probability.value() >= HIGH {
        advice.push("High chance of heavy rain: bring an umbrella.");
    }
    if report.wind.very_windy_probability.value() >= HIGH {
        advice.push("Strong winds expected: secure loose items.");
    }
    if report.comfort_index.very_uncomfortable_probability.value() < MODERATE {
        advice.push("Conditions are comfortable for outdoor activities!");
    }

    if advice.is_empty() {
        "No special advice for selected conditions.".to_string()
    } else {
        advice.join(" ")
    }
}

/// First matching condition wins: rain, heat, cold, wind, discomfort.
pub fn headline_icon(report: &ProbabilityReport) -> &'static str {
    if report.precipitation.very_wet_probability.value() >= HIGH {
        "🌧️"
    } else if report.temperature.very_hot_probability.value() >= HIGH {
        "☀️"
    } else if report.temperature.very_cold_probability.value() >= HIGH {
        "❄️"
    } else if report.wind.very_windy_probability.value() >= HIGH {
        "💨"
    } else if report.comfort_index.very_uncomfortable_probability.value() >= HIGH {
        "😅"
    } else {
        "🌤️"
    }
}

pub fn format_estimate(estimate: &Estimate, location: &str, date: NaiveDate) -> String {
    let report = &estimate.report;

    let mut lines = Vec::new();
    lines.push(format!("{} Weather Probability Report", headline_icon(report)));
    lines.push(format!("Location: {location}"));
    lines.push(format!("Date: {}", date.format("%Y-%m-%d")));
    lines.push(format!("Data source: {}", estimate.origin.description()));
    lines.push(String::new());
    lines.push("Category | Condition | Probability".to_string());
    lines.push("---------|-----------|------------".to_string());
    for row in report.condition_rows() {
        lines.push(format!(
            "{} | {} | {}",
            row.category, row.condition, row.probability
        ));
    }
    lines.push(String::new());
    lines.push(format!("Summary: {}", summarize(report)));
    lines.push(format!("Advice: {}", plan_advice(report)));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::ReportOrigin;
    use crate::services::estimator::report_from_sample;
    use crate::test_support::{on_date, sample};

    fn with_probabilities(
        hot: u8,
        cold: u8,
        wet: u8,
        windy: u8,
        uncomfortable: u8,
    ) -> ProbabilityReport {
        let mut report = report_from_sample(&sample(20.0, 0.0, 0.0));
        report.temperature.very_hot_probability = Probability::from_percent(hot);
        report.temperature.very_cold_probability = Probability::from_percent(cold);
        report.precipitation.very_wet_probability = Probability::from_percent(wet);
        report.wind.very_windy_probability = Probability::from_percent(windy);
        report.comfort_index.very_uncomfortable_probability =
            Probability::from_percent(uncomfortable);
        report
    }

    #[test]
    fn summarize_uses_seventy_and_forty_as_band_edges() {
        let summary = summarize(&with_probabilities(70, 40, 39, 69, 20));

        assert_eq!(
            summary,
            "High chance of very hot weather. Moderate chance of cold conditions. \
             Low likelihood of rain. Moderate wind expected. \
             Overall: comfortable for outdoor activities!"
        );
    }

    #[test]
    fn plan_advice_collects_every_high_risk() {
        let advice = plan_advice(&with_probabilities(80, 75, 72, 70, 90));
        assert_eq!(
            advice,
            "It's likely very hot: stay hydrated! Dress warmly, possible cold snap. \
             High chance of heavy rain: bring an umbrella. \
             Strong winds expected: secure loose items."
        );
    }

    #[test]
    fn plan_advice_has_fallback_text() {
        let advice = plan_advice(&with_probabilities(50, 50, 50, 50, 50));
        assert_eq!(advice, "No special advice for selected conditions.");
    }

    #[test]
    fn headline_icon_prefers_rain_over_heat() {
        assert_eq!(headline_icon(&with_probabilities(90, 0, 80, 0, 0)), "🌧️");
        assert_eq!(headline_icon(&with_probabilities(90, 0, 10, 0, 0)), "☀️");
        assert_eq!(headline_icon(&with_probabilities(10, 90, 10, 0, 0)), "❄️");
        assert_eq!(headline_icon(&with_probabilities(10, 10, 10, 70, 0)), "💨");
        assert_eq!(headline_icon(&with_probabilities(10, 10, 10, 10, 70)), "😅");
        assert_eq!(headline_icon(&with_probabilities(10, 10, 10, 10, 10)), "🌤️");
    }

    #[test]
    fn format_estimate_includes_header_and_table() {
        let estimate = Estimate {
            report: report_from_sample(&sample(32.0, 1.0, 2.0)),
            origin: ReportOrigin::Observed,
        };

        let output = format_estimate(&estimate, "Seville, Spain", on_date(2025, 7, 20));

        assert!(output.contains("Weather Probability Report"));
        assert!(output.contains("Location: Seville, Spain"));
        assert!(output.contains("Date: 2025-07-20"));
        assert!(output.contains("Data source: NASA POWER daily point observation"));
        assert!(output.contains("temperature | very hot | 80%"));
        assert!(output.contains("temperature | very cold | 10%"));
        assert!(output.contains("comfort | very uncomfortable | 80%"));
        assert!(output.contains("Summary: High chance of very hot weather."));
        assert!(output.contains("Advice: It's likely very hot: stay hydrated!"));
    }
}
