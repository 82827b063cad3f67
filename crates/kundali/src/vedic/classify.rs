use crate::positions::Positions;
use crate::vedic::{nakshatra, rashi, tithi};
use serde::Serialize;

/// Every attribute derived from the Sun, Moon and Ascendant longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    #[serde(rename = "zodiacIndex")]
    pub zodiac_index: usize,
    #[serde(rename = "nakshatraIndex")]
    pub nakshatra_index: usize,
    pub sign: &'static str,
    #[serde(rename = "moonSign")]
    pub moon_sign: &'static str,
    pub ascendant: &'static str,
    pub nakshatra: &'static str,
    pub vashya: &'static str,
    pub yoni: &'static str,
    pub gan: &'static str,
    pub nadi: &'static str,
    #[serde(rename = "signLord")]
    pub sign_lord: &'static str,
    #[serde(rename = "nakshatraLord")]
    pub nakshatra_lord: &'static str,
    pub charan: u8,
    pub tithi: u8,
    pub tatva: &'static str,
    #[serde(rename = "nameAlphabet")]
    pub name_alphabet: &'static str,
    pub paya: &'static str,
}

/// Classify resolved positions.
///
/// Sign-keyed attributes follow the Sun's sign; nakshatra-keyed attributes
/// follow the Moon's nakshatra.
pub fn classify(positions: &Positions) -> Classification {
    let zodiac_index = rashi::zodiac_index(positions.sun);
    let moon = nakshatra::placement(positions.moon);

    Classification {
        zodiac_index,
        nakshatra_index: moon.index,
        sign: rashi::sign_name(zodiac_index),
        moon_sign: rashi::sign_name(rashi::zodiac_index(positions.moon)),
        ascendant: rashi::sign_name(rashi::zodiac_index(positions.ascendant)),
        nakshatra: moon.name,
        vashya: rashi::vashya(zodiac_index),
        yoni: nakshatra::yoni(moon.index),
        gan: nakshatra::gan(moon.index),
        nadi: nakshatra::nadi(moon.index),
        sign_lord: rashi::sign_lord(zodiac_index),
        nakshatra_lord: moon.lord,
        charan: moon.charan,
        tithi: tithi::tithi(positions.sun, positions.moon),
        tatva: rashi::tatva(zodiac_index),
        name_alphabet: nakshatra::name_alphabet(moon.index, moon.charan),
        paya: rashi::paya(zodiac_index),
    }
}
