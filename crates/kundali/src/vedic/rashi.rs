//! Zodiac sign (rashi) lookups.
//!
//! Signs are twelve equal 30° sectors starting at 0° Mesha.

use crate::vedic::tables::{PAYAS, SIGN_LORDS, TATVAS, VASHYAS, ZODIAC_SIGNS};

pub const SIGN_SIZE: f64 = 30.0;

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Sign index (0-11) for an ecliptic longitude.
pub fn zodiac_index(longitude: f64) -> usize {
    (normalize_degrees(longitude) / SIGN_SIZE) as usize % 12
}

pub fn sign_name(index: usize) -> &'static str {
    ZODIAC_SIGNS[index % 12]
}

pub fn vashya(index: usize) -> &'static str {
    VASHYAS[index % 12]
}

pub fn sign_lord(index: usize) -> &'static str {
    SIGN_LORDS[index % 12]
}

pub fn tatva(index: usize) -> &'static str {
    TATVAS[index % TATVAS.len()]
}

pub fn paya(index: usize) -> &'static str {
    PAYAS[index % PAYAS.len()]
}
