use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Celestial bodies the profile pipeline queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
        }
    }

    /// Swiss Ephemeris planet number (SE_SUN = 0, SE_MOON = 1).
    pub fn swe_id(self) -> i32 {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
        }
    }
}

/// Settings for the Swiss Ephemeris adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisSettings {
    /// Directory holding the `.se1` data files. Falls back to
    /// `SWISS_EPHEMERIS_PATH`, then `/usr/local/share/swisseph`.
    pub path: Option<PathBuf>,
    /// House system name used for the ascendant
    pub house_system: String,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            path: None,
            house_system: "placidus".to_string(),
        }
    }
}
