use kundali::{
    EphemerisSettings, GeoCoordinates, Gazetteer, PlaceEntry, ProfileSettings, TimeSettings,
    ZodiacMode,
};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_PATHS: &[&str] = &["configs/kundali.toml", "../../configs/kundali.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct EphemerisToml {
    path: Option<PathBuf>,
    house_system: Option<String>,
    zodiac: ZodiacMode,
}

#[derive(Debug, Clone, Deserialize)]
struct FallbackToml {
    #[serde(default = "default_fallback_latitude")]
    latitude: f64,
    #[serde(default = "default_fallback_longitude")]
    longitude: f64,
}

impl Default for FallbackToml {
    fn default() -> Self {
        Self {
            latitude: default_fallback_latitude(),
            longitude: default_fallback_longitude(),
        }
    }
}

fn default_fallback_latitude() -> f64 {
    kundali::geo::DEFAULT_FALLBACK.0
}

fn default_fallback_longitude() -> f64 {
    kundali::geo::DEFAULT_FALLBACK.1
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RootConfigToml {
    ephemeris: EphemerisToml,
    time: TimeSettings,
    fallback: FallbackToml,
    places: Vec<PlaceEntry>,
}

/// Settings resolved from `kundali.toml`.
#[derive(Debug, Clone)]
pub struct KundaliSettings {
    pub ephemeris: EphemerisSettings,
    pub profile: ProfileSettings,
    pub fallback: GeoCoordinates,
    pub gazetteer: Gazetteer,
    /// File the settings were read from; `None` when built-in defaults apply.
    pub source: Option<PathBuf>,
}

/// Try the common relative locations for `configs/kundali.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Load settings from `path`, or from the first default location that exists.
///
/// An explicit path must exist. Without one, a missing file yields the
/// built-in defaults.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<KundaliSettings> {
    let source = match path {
        Some(p) => {
            if !p.is_file() {
                anyhow::bail!("Config file does not exist: {}", p.display());
            }
            Some(p.to_path_buf())
        }
        None => find_config_file(),
    };

    let text = match &source {
        Some(p) => fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", p.display()))?,
        None => String::new(),
    };

    let mut settings = parse_settings(&text)?;
    settings.source = source;
    Ok(settings)
}

pub fn parse_settings(text: &str) -> anyhow::Result<KundaliSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse kundali.toml: {e}"))?;
    let RootConfigToml {
        ephemeris,
        time,
        fallback,
        places,
    } = root;

    let mut ephemeris_settings = EphemerisSettings {
        path: ephemeris.path,
        ..EphemerisSettings::default()
    };
    if let Some(system) = ephemeris.house_system {
        kundali::ephemeris::adapter::house_system_byte(&system)?;
        ephemeris_settings.house_system = system;
    }

    let fallback = GeoCoordinates::new(fallback.latitude, fallback.longitude)
        .map_err(|e| anyhow::anyhow!("Invalid [fallback] coordinates: {e}"))?;

    let gazetteer = if places.is_empty() {
        Gazetteer::builtin()
    } else {
        Gazetteer::new(&places).map_err(|e| anyhow::anyhow!("Invalid [[places]] entry: {e}"))?
    };

    Ok(KundaliSettings {
        ephemeris: ephemeris_settings,
        profile: ProfileSettings {
            time,
            zodiac: ephemeris.zodiac,
        },
        fallback,
        gazetteer,
        source: None,
    })
}
