use std::path::{Path, PathBuf};

use clap::ValueEnum;
use plotters::prelude::*;
use thiserror::Error;

use crate::domain::report::{Dimension, ProbabilityReport};

pub const HISTOGRAM_BIN_COUNT: usize = 10;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Render(String),
    #[error("nothing to plot for {0}")]
    EmptySeries(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartStyle {
    /// Series value per day
    Line,
    /// Distribution of the series values
    Histogram,
}

/// Presentation metadata for one report dimension.
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub dimension: Dimension,
    pub title: &'static str,
    pub axis_label: &'static str,
    pub color: RGBColor,
}

impl ChartSpec {
    pub fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Temperature => ChartSpec {
                dimension,
                title: "Temperature",
                axis_label: "Temp (°C)",
                color: RGBColor(249, 207, 89),
            },
            Dimension::Precipitation => ChartSpec {
                dimension,
                title: "Precipitation",
                axis_label: "Precip (mm)",
                color: RGBColor(144, 190, 109),
            },
            Dimension::Wind => ChartSpec {
                dimension,
                title: "Wind",
                axis_label: "Wind (m/s)",
                color: RGBColor(31, 111, 235),
            },
            Dimension::Comfort => ChartSpec {
                dimension,
                title: "Comfort",
                axis_label: "Comfort",
                color: RGBColor(230, 57, 70),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Splits `[min, max]` of `values` into `bin_count` equal-width bins. The
/// last bin is closed so the maximum lands in it; a constant series goes
/// entirely into the first bin.
pub fn histogram_bins(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bin_count as f64;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for value in values {
        let index = if width > 0.0 {
            (((value - min) / width).floor() as usize).min(bin_count - 1)
        } else {
            0
        };
        bins[index].count += 1;
    }
    bins
}

/// `{prefix}.{dimension}.png`
pub fn chart_path(prefix: &str, dimension: Dimension) -> PathBuf {
    PathBuf::from(format!("{prefix}.{}.png", dimension.name()))
}

/// Renders one PNG per dimension and returns the written paths.
pub fn write_report_charts(
    prefix: &str,
    report: &ProbabilityReport,
    style: ChartStyle,
) -> Result<Vec<PathBuf>, ChartError> {
    let mut written = Vec::with_capacity(Dimension::ALL.len());
    for dimension in Dimension::ALL {
        let spec = ChartSpec::for_dimension(dimension);
        let path = chart_path(prefix, dimension);
        render_chart(&path, &spec, report.historical(dimension), style)?;
        tracing::debug!(path = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}

pub async fn write_report_charts_async(
    prefix: &str,
    report: &ProbabilityReport,
    style: ChartStyle,
) -> Result<Vec<PathBuf>, ChartError> {
    let prefix = prefix.to_string();
    let report = report.clone();
    tokio::task::spawn_blocking(move || write_report_charts(&prefix, &report, style))
        .await
        .map_err(|e| ChartError::Render(e.to_string()))?
}

pub fn render_chart(
    path: &Path,
    spec: &ChartSpec,
    values: &[f64],
    style: ChartStyle,
) -> Result<(), ChartError> {
    if values.is_empty() {
        return Err(ChartError::EmptySeries(spec.dimension.name()));
    }
    match style {
        ChartStyle::Line => render_line_chart(path, spec, values),
        ChartStyle::Histogram => render_histogram_chart(path, spec, values),
    }
}

fn render_line_chart(path: &Path, spec: &ChartSpec, values: &[f64]) -> Result<(), ChartError> {
    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let padding = if max_value - min_value < f64::EPSILON {
        1.0
    } else {
        (max_value - min_value) * 0.1
    };
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(idx, value)| ((idx + 1) as f64, *value))
        .collect();

    let root = BitMapBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(spec.title, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(
            0.0..(values.len() + 1) as f64,
            (min_value - padding)..(max_value + padding),
        )
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Day")
        .y_desc(spec.axis_label)
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            spec.color.stroke_width(2),
        ))
        .map_err(|e| ChartError::Render(e.to_string()))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, 3, spec.color.filled())),
        )
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}

fn render_histogram_chart(path: &Path, spec: &ChartSpec, values: &[f64]) -> Result<(), ChartError> {
    let bins = histogram_bins(values, HISTOGRAM_BIN_COUNT);
    let max_count = bins.iter().map(|bin| bin.count).max().unwrap_or(0);

    let root = BitMapBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("{} Distribution", spec.title), ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..bins.len() as i32, 0..(max_count + 1))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(spec.axis_label)
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(bins.len())
        .x_label_formatter(&|index| {
            usize::try_from(*index)
                .ok()
                .and_then(|idx| bins.get(idx))
                .map(|bin| format!("{:.1}", bin.lower))
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let bar_style = spec.color.filled();
    chart
        .draw_series(bins.iter().enumerate().map(|(idx, bin)| {
            Rectangle::new([(idx as i32, 0), (idx as i32 + 1, bin.count)], bar_style)
        }))
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Render(e.to_string()))?;
    Ok(())
}
