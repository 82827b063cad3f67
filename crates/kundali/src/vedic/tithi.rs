//! Tithi (lunar day) from the Moon-Sun elongation.

use crate::vedic::rashi::normalize_degrees;

pub const TITHI_SIZE: f64 = 12.0;

/// Tithi number (1-30): the elongation of the Moon from the Sun in 12° steps.
pub fn tithi(sun_longitude: f64, moon_longitude: f64) -> u8 {
    let elongation = normalize_degrees(moon_longitude - sun_longitude);
    ((elongation / TITHI_SIZE) as u8).min(29) + 1
}
