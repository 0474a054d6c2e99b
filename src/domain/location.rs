use chrono::{Datelike, NaiveDate};
use thiserror::Error;

const TROPIC_LATITUDE: f64 = 23.5;
const POLAR_CIRCLE_LATITUDE: f64 = 66.5;

#[derive(Error, Debug, PartialEq)]
pub enum LocationError {
    #[error("latitude must be within [-90, 90], got {0}")]
    InvalidLatitude(f64),
    #[error("longitude must be within [-180, 180], got {0}")]
    InvalidLongitude(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn hemisphere(&self) -> Hemisphere {
        if self.latitude > 0.0 {
            Hemisphere::Northern
        } else {
            Hemisphere::Southern
        }
    }

    pub fn climate_zone(&self) -> ClimateZone {
        let abs_latitude = self.latitude.abs();
        if abs_latitude < TROPIC_LATITUDE {
            ClimateZone::Equatorial
        } else if abs_latitude > POLAR_CIRCLE_LATITUDE {
            ClimateZone::Polar
        } else {
            ClimateZone::Temperate
        }
    }

    /// Season of `month` at this location, using meteorological seasons
    /// (JJA / DJF) mirrored across the equator.
    pub fn season(&self, month: u32) -> Season {
        let (summer, winter): (&[u32], &[u32]) = match self.hemisphere() {
            Hemisphere::Northern => (&[6, 7, 8], &[12, 1, 2]),
            Hemisphere::Southern => (&[12, 1, 2], &[6, 7, 8]),
        };
        if summer.contains(&month) {
            Season::Summer
        } else if winter.contains(&month) {
            Season::Winter
        } else {
            Season::Shoulder
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Latitude: {:.5}, Longitude: {:.5}",
            self.latitude, self.longitude
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    Northern,
    Southern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateZone {
    Equatorial,
    Temperate,
    Polar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
    Shoulder,
}

/// Month and day of a date with the year dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(latitude: f64, longitude: f64) -> Location {
        Location::new(latitude, longitude).unwrap()
    }

    #[test]
    fn new_rejects_out_of_range_coordinates() {
        assert_eq!(
            Location::new(90.5, 0.0),
            Err(LocationError::InvalidLatitude(90.5))
        );
        assert_eq!(
            Location::new(0.0, -180.1),
            Err(LocationError::InvalidLongitude(-180.1))
        );
        assert!(Location::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn equator_counts_as_southern_hemisphere() {
        assert_eq!(at(0.0, 0.0).hemisphere(), Hemisphere::Southern);
        assert_eq!(at(0.1, 0.0).hemisphere(), Hemisphere::Northern);
    }

    #[test]
    fn climate_zone_boundaries_are_temperate() {
        assert_eq!(at(23.4, 0.0).climate_zone(), ClimateZone::Equatorial);
        assert_eq!(at(23.5, 0.0).climate_zone(), ClimateZone::Temperate);
        assert_eq!(at(-66.5, 0.0).climate_zone(), ClimateZone::Temperate);
        assert_eq!(at(-66.6, 0.0).climate_zone(), ClimateZone::Polar);
    }

    #[test]
    fn seasons_are_mirrored_in_the_southern_hemisphere() {
        let berlin = at(52.5, 13.4);
        let sydney = at(-33.9, 151.2);

        assert_eq!(berlin.season(7), Season::Summer);
        assert_eq!(berlin.season(1), Season::Winter);
        assert_eq!(berlin.season(4), Season::Shoulder);
        assert_eq!(sydney.season(7), Season::Winter);
        assert_eq!(sydney.season(12), Season::Summer);
        assert_eq!(sydney.season(10), Season::Shoulder);
    }

    #[test]
    fn calendar_day_drops_the_year() {
        let day = CalendarDay::from(NaiveDate::from_ymd_opt(2031, 2, 28).unwrap());
        assert_eq!(day, CalendarDay { month: 2, day: 28 });
    }
}
