//! Birth instant to Julian Day conversion.
//!
//! The Julian Day is computed from the birth locale's clock reading. Two
//! conventions are supported and neither is silently assumed by callers:
//!
//! - [`TimeConvention::Local`] feeds the local clock reading straight into the
//!   Julian Day. Sign boundaries can therefore be off by the UTC offset. This
//!   reproduces the established behavior of existing profiles and is the default.
//! - [`TimeConvention::Utc`] subtracts the place's UTC offset first.
//!
//! Seconds are likewise dropped from the fractional hour unless
//! [`TimeSettings::include_seconds`] is set, which loses up to 59 s of precision.

use crate::person::BirthInstant;
use chrono::{Datelike, FixedOffset, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use swisseph::swe::julday;

/// Continuous astronomical time (Julian Day, UT scale).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AstronomicalTime(f64);

impl AstronomicalTime {
    pub fn from_julian_day(jd: f64) -> Self {
        Self(jd)
    }

    pub fn julian_day(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeConvention {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSettings {
    pub convention: TimeConvention,
    pub include_seconds: bool,
}

// GREG_CAL: interpret dates in the Gregorian calendar
const GREG_CAL: u32 = 1;

/// Julian Day for a Gregorian calendar date and fractional hour.
///
/// `hour` may fall outside `[0, 24)`; the result simply shifts by `hour / 24`
/// days, which is how UTC corrections crossing midnight are applied.
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    julday(year, month as i32, day as i32, hour, GREG_CAL)
}

pub fn fractional_hour(time: NaiveTime, include_seconds: bool) -> f64 {
    let mut hour = time.hour() as f64 + time.minute() as f64 / 60.0;
    if include_seconds {
        hour += time.second() as f64 / 3600.0;
    }
    hour
}

/// Convert a birth instant to the Julian Day used for every ephemeris query.
///
/// `utc_offset` is only consulted under [`TimeConvention::Utc`]; when it is
/// unknown the local reading is used and a warning is logged.
pub fn normalize(
    birth: &BirthInstant,
    settings: &TimeSettings,
    utc_offset: Option<FixedOffset>,
) -> AstronomicalTime {
    let date = birth.date();
    let mut hour = fractional_hour(birth.time(), settings.include_seconds);

    if settings.convention == TimeConvention::Utc {
        match utc_offset {
            Some(offset) => hour -= offset.local_minus_utc() as f64 / 3600.0,
            None => log::warn!(
                "UTC offset unknown for birth place; using local clock time for the Julian Day"
            ),
        }
    }

    let jd = julian_day(date.year(), date.month(), date.day(), hour);
    log::debug!("normalized {} to JD {:.6} ({:?})", birth, jd, settings);
    AstronomicalTime(jd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn birth(date: (i32, u32, u32), time: (u32, u32, u32)) -> BirthInstant {
        BirthInstant::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            NaiveTime::from_hms_opt(time.0, time.1, time.2).unwrap(),
        )
    }

    #[test]
    fn test_julian_day_epochs() {
        assert_eq!(julian_day(2000, 1, 1, 12.0), 2_451_545.0);
        assert_eq!(julian_day(1970, 1, 1, 0.0), 2_440_587.5);
        // Meeus, Astronomical Algorithms, example 7.a
        assert!((julian_day(1957, 10, 4, 19.0 + 26.0 / 60.0 + 24.0 / 3600.0) - 2_436_116.31).abs() < 1e-2);
    }

    #[test]
    fn test_julian_day_leap_day() {
        let feb29 = julian_day(2024, 2, 29, 0.0);
        let mar1 = julian_day(2024, 3, 1, 0.0);
        assert_eq!(mar1 - feb29, 1.0);
    }

    #[test]
    fn test_seconds_dropped_by_default() {
        let b = birth((1990, 5, 15), (10, 30, 45));
        let without = normalize(&b, &TimeSettings::default(), None);
        assert_eq!(without.julian_day(), julian_day(1990, 5, 15, 10.5));

        let settings = TimeSettings {
            include_seconds: true,
            ..TimeSettings::default()
        };
        let with = normalize(&b, &settings, None);
        assert!(with.julian_day() > without.julian_day());
    }

    #[test]
    fn test_local_convention_ignores_offset() {
        let b = birth((1990, 5, 15), (10, 30, 0));
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let local = normalize(&b, &TimeSettings::default(), Some(ist));
        assert_eq!(local.julian_day(), julian_day(1990, 5, 15, 10.5));
    }

    #[test]
    fn test_utc_convention_applies_offset() {
        let b = birth((1990, 5, 15), (2, 0, 0));
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let settings = TimeSettings {
            convention: TimeConvention::Utc,
            include_seconds: false,
        };
        let utc = normalize(&b, &settings, Some(ist));
        // 02:00 IST is 20:30 UTC on the previous day
        let expected = julian_day(1990, 5, 14, 20.5);
        assert!((utc.julian_day() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_utc_convention_without_offset_uses_local() {
        let b = birth((1990, 5, 15), (2, 0, 0));
        let settings = TimeSettings {
            convention: TimeConvention::Utc,
            include_seconds: false,
        };
        let jd = normalize(&b, &settings, None);
        assert_eq!(jd.julian_day(), julian_day(1990, 5, 15, 2.0));
    }
}
