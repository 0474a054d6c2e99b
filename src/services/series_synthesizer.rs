use rand::Rng;
use rand_distr::{Distribution, Uniform};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SeriesError {
    #[error("invalid series range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}

/// Closed interval the synthesized values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRange {
    min: f64,
    max: f64,
}

impl SeriesRange {
    pub fn new(min: f64, max: f64) -> Result<Self, SeriesError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(SeriesError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    // Only for literals known to satisfy `min <= max`.
    pub(crate) const fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Draws `count` values uniformly from `range`. The values have no
/// meteorological meaning; they only give charts some texture.
pub fn synthesize<R: Rng + ?Sized>(range: SeriesRange, count: usize, rng: &mut R) -> Vec<f64> {
    let distribution = Uniform::new_inclusive(range.min, range.max);
    distribution.sample_iter(rng).take(count).collect()
}

pub fn synthesize_between<R: Rng + ?Sized>(
    min: f64,
    max: f64,
    count: usize,
    rng: &mut R,
) -> Result<Vec<f64>, SeriesError> {
    let range = SeriesRange::new(min, max)?;
    Ok(synthesize(range, count, rng))
}
