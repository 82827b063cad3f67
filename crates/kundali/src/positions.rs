//! Sun, Moon and Ascendant longitudes for one instant and place.

use crate::ephemeris::{Body, EphemerisError, EphemerisProvider};
use crate::geo::GeoCoordinates;
use crate::time::AstronomicalTime;
use crate::vedic::rashi::normalize_degrees;
use serde::{Deserialize, Serialize};

/// Reference frame the longitudes are classified in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacMode {
    /// Longitudes as returned by the ephemeris.
    #[default]
    Tropical,
    /// Longitudes minus the ayanamsa.
    Sidereal,
}

/// Longitudes in [0, 360) plus the ayanamsa they were (or could be) corrected by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Positions {
    pub sun: f64,
    pub moon: f64,
    pub ascendant: f64,
    pub ayanamsa: f64,
    pub zodiac: ZodiacMode,
}

/// Query the provider for everything the classification needs.
///
/// Any provider failure or non-finite value aborts with [`EphemerisError`];
/// no partially populated result is returned.
pub fn resolve<P: EphemerisProvider + ?Sized>(
    provider: &P,
    time: AstronomicalTime,
    coords: GeoCoordinates,
    zodiac: ZodiacMode,
) -> Result<Positions, EphemerisError> {
    let jd = time.julian_day();
    let sun = finite("sun longitude", jd, provider.longitude_of(Body::Sun, time)?)?;
    let moon = finite("moon longitude", jd, provider.longitude_of(Body::Moon, time)?)?;
    let ascendant = finite("ascendant", jd, provider.ascendant_of(time, coords)?)?;
    let ayanamsa = finite("ayanamsa", jd, provider.ayanamsa_of(time)?)?;

    let correction = match zodiac {
        ZodiacMode::Tropical => 0.0,
        ZodiacMode::Sidereal => ayanamsa,
    };

    let positions = Positions {
        sun: normalize_degrees(sun - correction),
        moon: normalize_degrees(moon - correction),
        ascendant: normalize_degrees(ascendant - correction),
        ayanamsa,
        zodiac,
    };
    log::debug!("positions at JD {:.6}: {:?}", jd, positions);
    Ok(positions)
}

fn finite(quantity: &str, julian_day: f64, value: f64) -> Result<f64, EphemerisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::NonFinite {
            quantity: quantity.to_string(),
            julian_day,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::FixedEphemeris;

    fn time() -> AstronomicalTime {
        AstronomicalTime::from_julian_day(2_451_545.0)
    }

    fn delhi() -> GeoCoordinates {
        GeoCoordinates::default_fallback()
    }

    #[test]
    fn test_tropical_positions_normalized() {
        let provider = FixedEphemeris {
            sun: 375.0,
            moon: -20.0,
            ascendant: 100.0,
            ayanamsa: 23.85,
        };
        let p = resolve(&provider, time(), delhi(), ZodiacMode::Tropical).unwrap();
        assert_eq!(p.sun, 15.0);
        assert_eq!(p.moon, 340.0);
        assert_eq!(p.ascendant, 100.0);
        assert_eq!(p.ayanamsa, 23.85);
    }

    #[test]
    fn test_sidereal_correction() {
        let provider = FixedEphemeris {
            sun: 10.0,
            moon: 50.0,
            ascendant: 200.0,
            ayanamsa: 24.0,
        };
        let p = resolve(&provider, time(), delhi(), ZodiacMode::Sidereal).unwrap();
        assert_eq!(p.sun, 346.0);
        assert_eq!(p.moon, 26.0);
        assert_eq!(p.ascendant, 176.0);
    }

    #[test]
    fn test_non_finite_longitude_is_fatal() {
        let provider = FixedEphemeris {
            sun: 10.0,
            moon: f64::NAN,
            ascendant: 200.0,
            ayanamsa: 24.0,
        };
        let err = resolve(&provider, time(), delhi(), ZodiacMode::Tropical).unwrap_err();
        assert!(matches!(err, EphemerisError::NonFinite { ref quantity, .. } if quantity == "moon longitude"));
    }
}
