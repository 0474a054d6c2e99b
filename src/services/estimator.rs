use chrono::NaiveDate;
use rand::Rng;

use crate::domain::location::{CalendarDay, ClimateZone, Location, Season};
use crate::domain::probability::Probability;
use crate::domain::report::{
    ComfortOutlook, Estimate, PrecipitationOutlook, ProbabilityReport, ReportOrigin,
    TemperatureOutlook, WindOutlook,
};
use crate::domain::weather_sample::WeatherSample;
use crate::services::sample_provider::SampleProvider;
use crate::services::series_synthesizer::{SeriesRange, synthesize};

pub const SIMULATED_SERIES_LENGTH: usize = 30;

const TEMPERATURE_SERIES: SeriesRange = SeriesRange::fixed(50.0, 90.0);
const PRECIPITATION_SERIES: SeriesRange = SeriesRange::fixed(0.0, 50.0);
const WIND_SERIES: SeriesRange = SeriesRange::fixed(0.0, 30.0);
const COMFORT_SERIES: SeriesRange = SeriesRange::fixed(0.0, 100.0);

const HOT_TEMPERATURE: f64 = 30.0;
const WARM_TEMPERATURE: f64 = 25.0;
const FREEZING_TEMPERATURE: f64 = 5.0;
const COOL_TEMPERATURE: f64 = 15.0;
const HEAVY_PRECIPITATION: f64 = 10.0;
const LIGHT_PRECIPITATION: f64 = 3.0;
const STRONG_WIND: f64 = 10.0;
const MODERATE_WIND: f64 = 5.0;

/// Closed interval a simulated probability score is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub low: f64,
    pub high: f64,
}

impl ScoreBand {
    const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..=self.high)
    }
}

/// Hot and cold bands for a climate zone and season.
pub fn temperature_bands(zone: ClimateZone, season: Season) -> (ScoreBand, ScoreBand) {
    match (zone, season) {
        (ClimateZone::Equatorial, _) => (ScoreBand::new(60.0, 90.0), ScoreBand::new(0.0, 10.0)),
        (ClimateZone::Polar, _) => (ScoreBand::new(0.0, 20.0), ScoreBand::new(50.0, 90.0)),
        (ClimateZone::Temperate, Season::Summer) => {
            (ScoreBand::new(30.0, 70.0), ScoreBand::new(0.0, 15.0))
        }
        (ClimateZone::Temperate, Season::Winter) => {
            (ScoreBand::new(0.0, 15.0), ScoreBand::new(30.0, 70.0))
        }
        (ClimateZone::Temperate, Season::Shoulder) => {
            (ScoreBand::new(10.0, 40.0), ScoreBand::new(10.0, 40.0))
        }
    }
}

/// Wet band: the deep tropics are wet, a crude subtropical belt over
/// Africa and Europe is arid, everything else sits in between.
pub fn wet_band(location: Location) -> ScoreBand {
    let abs_latitude = location.latitude.abs();
    let abs_longitude = location.longitude.abs();
    if abs_latitude < 10.0 {
        ScoreBand::new(40.0, 80.0)
    } else if abs_latitude > 15.0
        && abs_latitude < 35.0
        && abs_longitude > 0.0
        && abs_longitude < 30.0
    {
        ScoreBand::new(0.0, 20.0)
    } else {
        ScoreBand::new(20.0, 50.0)
    }
}

pub const COASTAL_WIND_BAND: ScoreBand = ScoreBand::new(30.0, 70.0);
pub const INLAND_WIND_BAND: ScoreBand = ScoreBand::new(10.0, 40.0);

pub fn wind_band(likely_coastal: bool) -> ScoreBand {
    if likely_coastal {
        COASTAL_WIND_BAND
    } else {
        INLAND_WIND_BAND
    }
}

// Coastal exposure is unknown, so every call flips a fresh coin.
fn draw_wind<R: Rng + ?Sized>(rng: &mut R) -> (bool, f64) {
    let likely_coastal = rng.gen_bool(0.5);
    (likely_coastal, wind_band(likely_coastal).draw(rng))
}

/// Builds a report for `location` on `date`. With a sample the result is
/// fully determined by the sample; without one it is simulated from `rng`.
pub fn estimate<R: Rng + ?Sized>(
    location: Location,
    date: NaiveDate,
    sample: Option<&WeatherSample>,
    rng: &mut R,
) -> ProbabilityReport {
    match sample {
        Some(sample) => report_from_sample(sample),
        None => simulate_report(location, CalendarDay::from(date), rng),
    }
}

pub fn report_from_sample(sample: &WeatherSample) -> ProbabilityReport {
    let t = sample.temperature;
    let p = sample.precipitation;
    let w = sample.wind_speed;

    let very_hot = if t >= HOT_TEMPERATURE {
        80
    } else if t >= WARM_TEMPERATURE {
        50
    } else {
        10
    };
    let very_cold = if t <= FREEZING_TEMPERATURE {
        80
    } else if t <= COOL_TEMPERATURE {
        50
    } else {
        10
    };
    let very_wet = if p >= HEAVY_PRECIPITATION {
        80
    } else if p >= LIGHT_PRECIPITATION {
        40
    } else {
        10
    };
    let very_windy = if w >= STRONG_WIND {
        70
    } else if w >= MODERATE_WIND {
        40
    } else {
        10
    };
    let uncomfortable = t >= HOT_TEMPERATURE
        || t <= FREEZING_TEMPERATURE
        || p >= HEAVY_PRECIPITATION
        || w >= STRONG_WIND;

    ProbabilityReport {
        temperature: TemperatureOutlook {
            very_hot_probability: Probability::from_percent(very_hot),
            very_cold_probability: Probability::from_percent(very_cold),
            historical: vec![t],
        },
        precipitation: PrecipitationOutlook {
            very_wet_probability: Probability::from_percent(very_wet),
            historical: vec![p],
        },
        wind: WindOutlook {
            very_windy_probability: Probability::from_percent(very_windy),
            historical: vec![w],
        },
        comfort_index: ComfortOutlook {
            very_uncomfortable_probability: Probability::from_percent(if uncomfortable {
                80
            } else {
                20
            }),
            historical: vec![t, p, w],
        },
    }
}

/// Discomfort score from the unrounded simulated scores. May exceed 100 when
/// an extreme temperature coincides with wet and windy draws.
pub fn comfort_score(hot: f64, cold: f64, wet: f64, windy: f64) -> f64 {
    let temperature_part = if hot > 70.0 || cold > 70.0 {
        hot.max(cold) * 0.8
    } else {
        (hot + cold) / 2.0 * 0.5
    };
    temperature_part + wet * 0.3 + windy * 0.3
}

/// Heuristic report from geography and calendar alone. The year never
/// matters and neither does the day of month.
pub fn simulate_report<R: Rng + ?Sized>(
    location: Location,
    day: CalendarDay,
    rng: &mut R,
) -> ProbabilityReport {
    let (hot_band, cold_band) =
        temperature_bands(location.climate_zone(), location.season(day.month));
    let hot = hot_band.draw(rng);
    let cold = cold_band.draw(rng);
    let wet = wet_band(location).draw(rng);

    let (_, windy) = draw_wind(rng);

    let comfort = comfort_score(hot, cold, wet, windy);

    ProbabilityReport {
        temperature: TemperatureOutlook {
            very_hot_probability: Probability::from_score(hot),
            very_cold_probability: Probability::from_score(cold),
            historical: synthesize(TEMPERATURE_SERIES, SIMULATED_SERIES_LENGTH, rng),
        },
        precipitation: PrecipitationOutlook {
            very_wet_probability: Probability::from_score(wet),
            historical: synthesize(PRECIPITATION_SERIES, SIMULATED_SERIES_LENGTH, rng),
        },
        wind: WindOutlook {
            very_windy_probability: Probability::from_score(windy),
            historical: synthesize(WIND_SERIES, SIMULATED_SERIES_LENGTH, rng),
        },
        comfort_index: ComfortOutlook {
            very_uncomfortable_probability: Probability::from_score(comfort),
            historical: synthesize(COMFORT_SERIES, SIMULATED_SERIES_LENGTH, rng),
        },
    }
}

/// Couples a sample provider with the simulation fallback.
pub struct ProbabilityEstimator<P, R> {
    provider: P,
    rng: R,
}

impl<P: SampleProvider, R: Rng> ProbabilityEstimator<P, R> {
    pub fn new(provider: P, rng: R) -> Self {
        Self { provider, rng }
    }

    /// Never fails: any acquisition error is logged and replaced by a
    /// simulated report.
    pub async fn estimate(&mut self, location: Location, date: NaiveDate) -> Estimate {
        let sample = self.provider.fetch_sample(location, date).await;
        match &sample {
            Ok(observed) => tracing::info!(
                temperature = observed.temperature,
                precipitation = observed.precipitation,
                wind_speed = observed.wind_speed,
                "using observed sample"
            ),
            Err(e) => tracing::warn!(error = %e, "sample acquisition failed, simulating instead"),
        }

        let origin = if sample.is_ok() {
            ReportOrigin::Observed
        } else {
            ReportOrigin::Simulated
        };
        Estimate {
            report: estimate(location, date, sample.as_ref().ok(), &mut self.rng),
            origin,
        }
    }
}
