//! Coordinates, geocoding outcomes, and the offline gazetteer.

use crate::error::InputError;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Used when the caller supplies no fallback of its own (New Delhi).
pub const DEFAULT_FALLBACK: (f64, f64) = (28.613, 77.209);

/// Validated geographic coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinates {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InputError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InputError::LatitudeOutOfRange { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InputError::LongitudeOutOfRange { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn default_fallback() -> Self {
        Self {
            latitude: DEFAULT_FALLBACK.0,
            longitude: DEFAULT_FALLBACK.1,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    /// Coordinates belong to the requested place.
    Exact,
    /// Geocoding failed and fallback coordinates were substituted.
    Approximate,
}

/// A geocoder hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoMatch {
    pub coords: GeoCoordinates,
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    Resolved(GeoMatch),
    NotFound,
    ServiceError(String),
}

/// Resolves a (city, country) pair to coordinates.
pub trait Geocoder {
    fn geocode(&self, city: &str, country: &str) -> GeocodeOutcome;
}

/// Coordinates handed to the profile pipeline, tagged with how they were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedPlace {
    pub coords: GeoCoordinates,
    pub utc_offset_minutes: Option<i32>,
    pub accuracy: Accuracy,
}

impl ResolvedPlace {
    pub fn exact(coords: GeoCoordinates, utc_offset_minutes: Option<i32>) -> Self {
        Self {
            coords,
            utc_offset_minutes,
            accuracy: Accuracy::Exact,
        }
    }

    /// Exact place with a UTC offset given in hours, as users type it.
    pub fn with_offset_hours(
        coords: GeoCoordinates,
        utc_offset_hours: Option<f64>,
    ) -> Result<Self, InputError> {
        let utc_offset_minutes = utc_offset_hours.map(offset_minutes).transpose()?;
        Ok(Self::exact(coords, utc_offset_minutes))
    }

    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
    }

    pub fn is_approximate(&self) -> bool {
        self.accuracy == Accuracy::Approximate
    }
}

/// Geocode a place, substituting `fallback` when the geocoder cannot help.
///
/// The fallback path never fails; it is reported through
/// [`Accuracy::Approximate`] and a warning log record.
pub fn resolve_place<G: Geocoder + ?Sized>(
    geocoder: &G,
    city: &str,
    country: &str,
    fallback: GeoCoordinates,
) -> ResolvedPlace {
    let reason = match geocoder.geocode(city, country) {
        GeocodeOutcome::Resolved(hit) => {
            log::debug!(
                "geocoded {}, {} to ({}, {})",
                city,
                country,
                hit.coords.latitude(),
                hit.coords.longitude()
            );
            return ResolvedPlace::exact(hit.coords, hit.utc_offset_minutes);
        }
        GeocodeOutcome::NotFound => "no match".to_string(),
        GeocodeOutcome::ServiceError(message) => format!("service error: {}", message),
    };

    log::warn!(
        "Geocoding unavailable for {}, {} ({}); using fallback coordinates ({}, {}). Results are approximate.",
        city,
        country,
        reason,
        fallback.latitude(),
        fallback.longitude()
    );
    ResolvedPlace {
        coords: fallback,
        utc_offset_minutes: None,
        accuracy: Accuracy::Approximate,
    }
}

/// Gazetteer record as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceEntry {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub utc_offset_hours: Option<f64>,
}

impl PlaceEntry {
    fn to_match(&self) -> Result<GeoMatch, InputError> {
        let coords = GeoCoordinates::new(self.latitude, self.longitude)?;
        let utc_offset_minutes = match self.utc_offset_hours {
            Some(hours) => Some(offset_minutes(hours)?),
            None => None,
        };
        Ok(GeoMatch {
            coords,
            utc_offset_minutes,
        })
    }
}

fn offset_minutes(hours: f64) -> Result<i32, InputError> {
    if !hours.is_finite() || hours.abs() >= 24.0 {
        return Err(InputError::InvalidUtcOffset { hours });
    }
    Ok((hours * 60.0).round() as i32)
}

fn entry(city: &str, country: &str, latitude: f64, longitude: f64, offset: f64) -> PlaceEntry {
    PlaceEntry {
        city: city.to_string(),
        country: country.to_string(),
        latitude,
        longitude,
        utc_offset_hours: Some(offset),
    }
}

lazy_static::lazy_static! {
    static ref BUILTIN_PLACES: Vec<PlaceEntry> = vec![
        entry("New Delhi", "India", 28.613, 77.209, 5.5),
        entry("Delhi", "India", 28.7041, 77.1025, 5.5),
        entry("Mumbai", "India", 19.076, 72.8777, 5.5),
        entry("Kolkata", "India", 22.5726, 88.3639, 5.5),
        entry("Chennai", "India", 13.0827, 80.2707, 5.5),
        entry("Bengaluru", "India", 12.9716, 77.5946, 5.5),
        entry("Hyderabad", "India", 17.385, 78.4867, 5.5),
        entry("Pune", "India", 18.5204, 73.8567, 5.5),
        entry("Jaipur", "India", 26.9124, 75.7873, 5.5),
        entry("Varanasi", "India", 25.3176, 82.9739, 5.5),
        entry("Kathmandu", "Nepal", 27.7172, 85.324, 5.75),
        entry("Colombo", "Sri Lanka", 6.9271, 79.8612, 5.5),
        entry("Dubai", "United Arab Emirates", 25.2048, 55.2708, 4.0),
        entry("Singapore", "Singapore", 1.3521, 103.8198, 8.0),
        entry("London", "United Kingdom", 51.5074, -0.1278, 0.0),
        entry("New York", "United States", 40.7128, -74.006, -5.0),
    ];
}

/// Offline geocoder over a fixed list of places.
///
/// Matching is case-insensitive on both city and country.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: Vec<(String, String, GeoMatch)>,
}

impl Gazetteer {
    pub fn new(places: &[PlaceEntry]) -> Result<Self, InputError> {
        let entries = places
            .iter()
            .map(|p| -> Result<_, InputError> {
                Ok((p.city.to_lowercase(), p.country.to_lowercase(), p.to_match()?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Gazetteer over the built-in city list.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PLACES
                .iter()
                .filter_map(|p| {
                    p.to_match()
                        .ok()
                        .map(|hit| (p.city.to_lowercase(), p.country.to_lowercase(), hit))
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Geocoder for Gazetteer {
    fn geocode(&self, city: &str, country: &str) -> GeocodeOutcome {
        let city = city.trim().to_lowercase();
        let country = country.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(c, k, _)| *c == city && *k == country)
            .map(|(_, _, hit)| GeocodeOutcome::Resolved(*hit))
            .unwrap_or(GeocodeOutcome::NotFound)
    }
}
