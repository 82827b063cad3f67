//! Profile assembly and the end-to-end pipeline.

use crate::ephemeris::EphemerisProvider;
use crate::error::ProfileError;
use crate::geo::ResolvedPlace;
use crate::person::Person;
use crate::positions::{self, Positions, ZodiacMode};
use crate::time::{self, AstronomicalTime, TimeSettings};
use crate::vedic::{classify, Classification};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub time: TimeSettings,
    pub zodiac: ZodiacMode,
}

/// Immutable result of one profile computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstrologicalProfile {
    person: Person,
    place: ResolvedPlace,
    #[serde(rename = "julianDay")]
    julian_day: f64,
    positions: Positions,
    #[serde(flatten)]
    classification: Classification,
}

impl AstrologicalProfile {
    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn place(&self) -> &ResolvedPlace {
        &self.place
    }

    pub fn julian_day(&self) -> f64 {
        self.julian_day
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn ayanamsa(&self) -> f64 {
        self.positions.ayanamsa
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn aggregate(
    person: &Person,
    place: ResolvedPlace,
    time: AstronomicalTime,
    positions: Positions,
    classification: Classification,
) -> AstrologicalProfile {
    AstrologicalProfile {
        person: person.clone(),
        place,
        julian_day: time.julian_day(),
        positions,
        classification,
    }
}

/// Run the full pipeline: normalize time, resolve positions, classify, aggregate.
pub fn compute_profile<P: EphemerisProvider + ?Sized>(
    person: &Person,
    place: ResolvedPlace,
    provider: &P,
    settings: &ProfileSettings,
) -> Result<AstrologicalProfile, ProfileError> {
    let time = time::normalize(&person.birth, &settings.time, place.utc_offset());
    let positions = positions::resolve(provider, time, place.coords, settings.zodiac)?;
    let classification = classify(&positions);
    log::debug!(
        "classified {}: zodiac_index={} nakshatra_index={} charan={} tithi={}",
        person.full_name(),
        classification.zodiac_index,
        classification.nakshatra_index,
        classification.charan,
        classification.tithi
    );
    Ok(aggregate(person, place, time, positions, classification))
}

impl fmt::Display for AstrologicalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.person;
        let c = &self.classification;
        writeln!(f, "Vedic Astrological Profile for {}:", p.full_name())?;
        writeln!(f, "Date of Birth: {}", p.birth.date_string())?;
        writeln!(f, "Time of Birth: {}", p.birth.time_string())?;
        writeln!(f, "Place of Birth: {}, {}", p.city, p.country)?;
        writeln!(
            f,
            "Latitude: {}, Longitude: {}",
            self.place.coords.latitude(),
            self.place.coords.longitude()
        )?;
        if self.place.is_approximate() {
            writeln!(f, "Location Accuracy: approximate (fallback coordinates)")?;
        }
        writeln!(f, "Ayanamsa: {:.2}", self.positions.ayanamsa)?;
        writeln!(f, "Sun Sign (Rashi): {}", c.sign)?;
        writeln!(f, "Moon Sign (Janma Rashi): {}", c.moon_sign)?;
        writeln!(f, "Ascendant (Lagna): {}", c.ascendant)?;
        writeln!(f, "Nakshatra: {}", c.nakshatra)?;
        writeln!(f, "Vashya: {}", c.vashya)?;
        writeln!(f, "Yoni: {}", c.yoni)?;
        writeln!(f, "Gan: {}", c.gan)?;
        writeln!(f, "Nadi: {}", c.nadi)?;
        writeln!(f, "Sign Lord: {}", c.sign_lord)?;
        writeln!(f, "Nakshatra Lord: {}", c.nakshatra_lord)?;
        writeln!(f, "Charan: {}", c.charan)?;
        writeln!(f, "Tithi: {}", c.tithi)?;
        writeln!(f, "Tatva: {}", c.tatva)?;
        writeln!(f, "Name Alphabet: {}", c.name_alphabet)?;
        write!(f, "Paya: {}", c.paya)
    }
}
