//! Validated birth data.
//!
//! Everything here runs before the profile pipeline: raw strings are parsed
//! once and the core only ever sees well-formed values.

use crate::error::InputError;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

const GENDERS: &[(&str, Gender)] = &[
    ("m", Gender::Male),
    ("male", Gender::Male),
    ("f", Gender::Female),
    ("female", Gender::Female),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        GENDERS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, gender)| *gender)
            .ok_or_else(|| InputError::InvalidGender {
                input: s.to_string(),
                valid: GENDERS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Birth date plus local clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInstant {
    date: NaiveDate,
    time: NaiveTime,
}

impl BirthInstant {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        // Leap-second representations are folded back into the 59th second.
        let time = time.with_nanosecond(0).unwrap_or(time);
        Self { date, time }
    }

    /// Parse `DD/MM/YYYY` and `HH:MM` / `HH:MM:SS`.
    pub fn parse(date: &str, time: &str) -> Result<Self, InputError> {
        Ok(Self::new(parse_date(date)?, parse_time(time)?))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn time_string(&self) -> String {
        if self.time.second() == 0 {
            self.time.format("%H:%M").to_string()
        } else {
            self.time.format("%H:%M:%S").to_string()
        }
    }
}

impl fmt::Display for BirthInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date_string(), self.time_string())
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| InputError::InvalidDate {
        input: input.to_string(),
    })
}

pub fn parse_time(input: &str) -> Result<NaiveTime, InputError> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| InputError::InvalidTime {
            input: input.to_string(),
        })
}

/// The person a profile is computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birth: BirthInstant,
    pub city: String,
    pub country: String,
}

impl Person {
    pub fn new(
        first_name: &str,
        last_name: &str,
        gender: Gender,
        birth: BirthInstant,
        city: &str,
        country: &str,
    ) -> Result<Self, InputError> {
        Ok(Self {
            first_name: non_empty("first_name", first_name)?,
            last_name: non_empty("last_name", last_name)?,
            gender,
            birth,
            city: non_empty("city", city)?,
            country: non_empty("country", country)?,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_birth_instant() {
        let b = BirthInstant::parse("15/08/1990", "06:45").unwrap();
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(1990, 8, 15).unwrap());
        assert_eq!(b.time(), NaiveTime::from_hms_opt(6, 45, 0).unwrap());
        assert_eq!(b.to_string(), "15/08/1990 06:45");

        let with_seconds = BirthInstant::parse("01/01/2000", "23:59:59").unwrap();
        assert_eq!(with_seconds.time_string(), "23:59:59");
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(matches!(
            parse_date("31/02/2001"),
            Err(InputError::InvalidDate { .. })
        ));
        assert!(parse_date("10/13/2001").is_err());
        assert!(parse_date("2001-01-10").is_err());
        assert!(parse_date("29/02/2023").is_err());
        assert!(parse_date("29/02/2024").is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_times() {
        assert!(matches!(
            parse_time("24:00"),
            Err(InputError::InvalidTime { .. })
        ));
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("noon").is_err());
        assert!(parse_time(" 00:00 ").is_ok());
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" female ".parse::<Gender>().unwrap(), Gender::Female);
        let err = "x".parse::<Gender>().unwrap_err();
        assert!(matches!(err, InputError::InvalidGender { .. }));
    }

    #[test]
    fn test_person_requires_names() {
        let birth = BirthInstant::parse("15/08/1990", "06:45").unwrap();
        let p = Person::new(" Asha ", "Rao", Gender::Female, birth, "Pune", "India").unwrap();
        assert_eq!(p.full_name(), "Asha Rao");

        let err = Person::new("", "Rao", Gender::Female, birth, "Pune", "India").unwrap_err();
        assert_eq!(err, InputError::EmptyField { field: "first_name" });
    }
}
