use serde::Serialize;

/// Integer percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Probability(u8);

impl Probability {
    pub const MAX: Probability = Probability(100);

    /// Values above 100 saturate.
    pub const fn from_percent(value: u8) -> Self {
        if value > 100 { Self::MAX } else { Self(value) }
    }

    /// Rounds half away from zero and clamps into `[0, 100]`. NaN maps to 0.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Self(0);
        }
        Self(score.round().clamp(0.0, 100.0) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
