use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{Body, EphemerisSettings};
use crate::geo::GeoCoordinates;
use crate::time::AstronomicalTime;
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, get_ayanamsa_ut, houses_ex, set_ephe_path};
use swisseph::AscMc;

// FLG_SWIEPH: use Swiss Ephemeris files
const FLG_SWIEPH: i32 = 2;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, u8)] = &[
    ("placidus", b'P'),
    ("whole_sign", b'W'),
    ("koch", b'K'),
    ("equal", b'E'),
    ("regiomontanus", b'R'),
    ("campanus", b'C'),
    ("alcabitius", b'A'),
    ("morinus", b'M'),
];

/// Swiss Ephemeris backed [`EphemerisProvider`]
#[derive(Debug)]
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    house_system: u8,
}

impl SwissEphemerisAdapter {
    /// Point Swiss Ephemeris at the configured data directory.
    ///
    /// The directory comes from `settings.path`, then `SWISS_EPHEMERIS_PATH`,
    /// then the system default. An explicitly chosen directory must exist. A
    /// missing default directory only logs a warning: without `.se1` files the
    /// library computes with its built-in Moshier ephemeris.
    pub fn new(settings: &EphemerisSettings) -> Result<Self, EphemerisError> {
        let house_system = house_system_byte(&settings.house_system)?;
        let (path, explicit) = resolve_ephemeris_path(settings);
        check_ephemeris_path(&path, explicit)?;

        let path_str = path.to_string_lossy();
        if path_str.contains('\0') {
            return Err(EphemerisError::FileNotFound {
                path: path_str.escape_default().to_string(),
                message: "Ephemeris path contains a NUL byte.".to_string(),
            });
        }
        set_ephe_path(&path_str);
        log::debug!(
            "Swiss Ephemeris adapter ready (path={}, house_system={})",
            path.display(),
            settings.house_system
        );

        Ok(Self {
            ephemeris_path: path,
            house_system,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    fn calc_longitude(
        &self,
        quantity: &str,
        planet_code: i32,
        jd: f64,
        flags: i32,
    ) -> Result<f64, EphemerisError> {
        let result = calc_ut(jd, planet_code as u32, flags as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                quantity: quantity.to_string(),
                julian_day: jd,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;
        Ok(result.out[0])
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn longitude_of(&self, body: Body, time: AstronomicalTime) -> Result<f64, EphemerisError> {
        self.calc_longitude(body.name(), body.swe_id(), time.julian_day(), FLG_SWIEPH)
    }

    fn ascendant_of(
        &self,
        time: AstronomicalTime,
        coords: GeoCoordinates,
    ) -> Result<f64, EphemerisError> {
        let (_cusps, ascmc) = houses_ex(
            time.julian_day(),
            FLG_SWIEPH,
            coords.latitude(),
            coords.longitude(),
            self.house_system as i32,
        );
        Ok(AscMc::from_array(ascmc).ascendant)
    }

    fn ayanamsa_of(&self, time: AstronomicalTime) -> Result<f64, EphemerisError> {
        Ok(get_ayanamsa_ut(time.julian_day()))
    }
}

/// Ephemeris directory for `settings` and whether the user chose it.
pub fn resolve_ephemeris_path(settings: &EphemerisSettings) -> (PathBuf, bool) {
    if let Some(path) = &settings.path {
        return (path.clone(), true);
    }
    match env::var("SWISS_EPHEMERIS_PATH") {
        Ok(path) => (PathBuf::from(path), true),
        Err(_) => (PathBuf::from(DEFAULT_EPHEMERIS_PATH), false),
    }
}

fn check_ephemeris_path(path: &Path, explicit: bool) -> Result<(), EphemerisError> {
    if path.exists() {
        return Ok(());
    }
    if explicit {
        return Err(EphemerisError::FileNotFound {
            path: path.display().to_string(),
            message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
        });
    }
    log::warn!(
        "Ephemeris directory {} not found; falling back to the built-in Moshier ephemeris",
        path.display()
    );
    Ok(())
}

/// Convert house system name to the Swiss Ephemeris byte code
pub fn house_system_byte(house_system: &str) -> Result<u8, EphemerisError> {
    HOUSE_SYSTEMS
        .iter()
        .find(|(name, _)| *name == house_system.to_lowercase())
        .map(|(_, byte)| *byte)
        .ok_or_else(|| EphemerisError::InvalidHouseSystem {
            system: house_system.to_string(),
            valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_system_byte() {
        assert_eq!(house_system_byte("placidus").unwrap(), b'P');
        assert_eq!(house_system_byte("Whole_Sign").unwrap(), b'W');
        assert!(matches!(
            house_system_byte("topocentric"),
            Err(EphemerisError::InvalidHouseSystem { .. })
        ));
    }

    #[test]
    fn test_missing_ephemeris_path() {
        let settings = EphemerisSettings {
            path: Some(PathBuf::from("/nonexistent/kundali/ephe")),
            ..EphemerisSettings::default()
        };
        let err = SwissEphemerisAdapter::new(&settings).unwrap_err();
        assert!(matches!(err, EphemerisError::FileNotFound { .. }));
    }

    #[test]
    fn test_missing_default_path_is_not_fatal() {
        let missing = Path::new("/nonexistent/kundali/ephe");
        assert!(check_ephemeris_path(missing, false).is_ok());
        assert!(check_ephemeris_path(missing, true).is_err());
    }

    #[test]
    fn test_configured_path_is_applied() {
        let dir = env::temp_dir();
        let settings = EphemerisSettings {
            path: Some(dir.clone()),
            ..EphemerisSettings::default()
        };
        assert_eq!(resolve_ephemeris_path(&settings), (dir.clone(), true));

        let adapter = SwissEphemerisAdapter::new(&settings).unwrap();
        assert_eq!(adapter.ephemeris_path(), dir.as_path());
    }

    #[test]
    fn test_ayanamsa_is_library_value() {
        let settings = EphemerisSettings {
            path: Some(env::temp_dir()),
            ..EphemerisSettings::default()
        };
        let adapter = SwissEphemerisAdapter::new(&settings).unwrap();
        let j2000 = AstronomicalTime::from_julian_day(2_451_545.0);
        let ayanamsa = adapter.ayanamsa_of(j2000).unwrap();
        assert_eq!(ayanamsa, get_ayanamsa_ut(2_451_545.0));
        // Fagan/Bradley, the library default, is about 24.74 degrees at J2000
        assert!((24.0..25.5).contains(&ayanamsa), "ayanamsa = {}", ayanamsa);
    }

    #[test]
    fn test_invalid_house_system_rejected() {
        let settings = EphemerisSettings {
            path: Some(env::temp_dir()),
            house_system: "unknown".to_string(),
        };
        let err = SwissEphemerisAdapter::new(&settings).unwrap_err();
        assert!(matches!(err, EphemerisError::InvalidHouseSystem { .. }));
    }
}
