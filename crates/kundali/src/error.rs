use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Malformed birth data, rejected before the profile pipeline runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid date of birth '{input}': expected DD/MM/YYYY")]
    InvalidDate { input: String },
    #[error("Invalid time of birth '{input}': expected HH:MM or HH:MM:SS")]
    InvalidTime { input: String },
    #[error("Invalid gender '{input}'. Valid values: {valid:?}")]
    InvalidGender { input: String, valid: Vec<String> },
    #[error("Latitude {value} outside [-90, 90]")]
    LatitudeOutOfRange { value: f64 },
    #[error("Longitude {value} outside [-180, 180]")]
    LongitudeOutOfRange { value: f64 },
    #[error("UTC offset of {hours} hours is not a valid offset")]
    InvalidUtcOffset { hours: f64 },
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Profile computation aborted: {0}")]
    Computation(#[from] EphemerisError),
}
