use crate::ephemeris::types::Body;
use crate::geo::GeoCoordinates;
use crate::time::AstronomicalTime;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate {quantity} at JD {julian_day}: {message}")]
    CalculationFailed {
        quantity: String,
        julian_day: f64,
        message: String,
    },
    #[error("Ephemeris returned non-finite {quantity} ({value}) at JD {julian_day}")]
    NonFinite {
        quantity: String,
        julian_day: f64,
        value: f64,
    },
}

/// Astronomical computation service consumed by the profile pipeline.
///
/// All angles are ecliptic degrees. Implementations may return values outside
/// `[0, 360)`; the position resolver normalizes them.
pub trait EphemerisProvider {
    fn longitude_of(&self, body: Body, time: AstronomicalTime) -> Result<f64, EphemerisError>;

    fn ascendant_of(
        &self,
        time: AstronomicalTime,
        coords: GeoCoordinates,
    ) -> Result<f64, EphemerisError>;

    /// Sidereal correction (ayanamsa) in degrees.
    fn ayanamsa_of(&self, time: AstronomicalTime) -> Result<f64, EphemerisError>;
}

/// Provider returning the same fixed values for every query.
///
/// Useful for replaying a known chart and for exercising the classification
/// pipeline without ephemeris data files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEphemeris {
    pub sun: f64,
    pub moon: f64,
    pub ascendant: f64,
    pub ayanamsa: f64,
}

impl EphemerisProvider for FixedEphemeris {
    fn longitude_of(&self, body: Body, _time: AstronomicalTime) -> Result<f64, EphemerisError> {
        Ok(match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
        })
    }

    fn ascendant_of(
        &self,
        _time: AstronomicalTime,
        _coords: GeoCoordinates,
    ) -> Result<f64, EphemerisError> {
        Ok(self.ascendant)
    }

    fn ayanamsa_of(&self, _time: AstronomicalTime) -> Result<f64, EphemerisError> {
        Ok(self.ayanamsa)
    }
}
