//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 charans (quarters).

use crate::vedic::rashi::normalize_degrees;
use crate::vedic::tables::{GANS, NADIS, NAKSHATRAS, NAKSHATRA_LORDS, NAME_ALPHABETS, YONIS};
use serde::Serialize;

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;

/// Unreduced nakshatra count, `floor(longitude * 3 / 40)`.
///
/// 3/40 is the reciprocal of the 13°20' segment.
pub fn nakshatra_raw(longitude: f64) -> usize {
    (normalize_degrees(longitude) * 3.0 / 40.0) as usize
}

/// Nakshatra index (0-26) for an ecliptic longitude.
pub fn nakshatra_index(longitude: f64) -> usize {
    nakshatra_raw(longitude) % 27
}

/// Charan (1-4), the remainder of the unreduced count modulo 4.
pub fn charan(longitude: f64) -> u8 {
    (nakshatra_raw(longitude) % 4) as u8 + 1
}

pub fn nakshatra_name(index: usize) -> &'static str {
    NAKSHATRAS[index % 27]
}

pub fn yoni(index: usize) -> &'static str {
    YONIS[index % 27]
}

pub fn gan(index: usize) -> &'static str {
    GANS[index % GANS.len()]
}

pub fn nadi(index: usize) -> &'static str {
    NADIS[index % NADIS.len()]
}

pub fn nakshatra_lord(index: usize) -> &'static str {
    NAKSHATRA_LORDS[index % NAKSHATRA_LORDS.len()]
}

/// Naming syllable for a nakshatra index and charan (1-4).
pub fn name_alphabet(index: usize, charan: u8) -> &'static str {
    let quarter = (charan.clamp(1, 4) - 1) as usize;
    NAME_ALPHABETS[index % 27][quarter]
}

/// Nakshatra placement of a single longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraPlacement {
    pub index: usize,
    pub name: &'static str,
    pub lord: &'static str,
    pub charan: u8,
    #[serde(rename = "startDegree")]
    pub start_degree: f64,
    #[serde(rename = "endDegree")]
    pub end_degree: f64,
}

pub fn placement(longitude: f64) -> NakshatraPlacement {
    let index = nakshatra_index(longitude);
    let start_degree = index as f64 * NAKSHATRA_SEGMENT_SIZE;
    NakshatraPlacement {
        index,
        name: nakshatra_name(index),
        lord: nakshatra_lord(index),
        charan: charan(longitude),
        start_degree,
        end_degree: start_degree + NAKSHATRA_SEGMENT_SIZE,
    }
}
