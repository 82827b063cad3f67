use anyhow::Context;
use clap::Parser;
use kundali::{
    compute_profile, resolve_place, BirthInstant, Gender, GeoCoordinates, Person, ResolvedPlace,
    SwissEphemerisAdapter,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Vedic astrological profile from birth data")]
struct Args {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long, help = "M, F, male or female")]
    gender: String,

    #[arg(long, help = "Date of birth, DD/MM/YYYY")]
    date: String,

    #[arg(long, help = "Local time of birth, HH:MM or HH:MM:SS")]
    time: String,

    #[arg(long)]
    city: String,

    #[arg(long)]
    country: String,

    #[arg(long, requires = "longitude", allow_hyphen_values = true)]
    latitude: Option<f64>,

    #[arg(long, requires = "latitude", allow_hyphen_values = true)]
    longitude: Option<f64>,

    #[arg(
        long,
        requires = "latitude",
        help = "UTC offset in hours for explicit coordinates",
        allow_hyphen_values = true
    )]
    utc_offset: Option<f64>,

    #[arg(long, help = "Path to kundali.toml")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the profile as JSON")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = kundali_config::load_settings(args.config.as_deref())?;
    match &settings.source {
        Some(path) => log::info!("Loaded settings from {}", path.display()),
        None => log::info!("No kundali.toml found; using defaults"),
    }

    let gender: Gender = args.gender.parse()?;
    let birth = BirthInstant::parse(&args.date, &args.time)?;
    let person = Person::new(
        &args.first_name,
        &args.last_name,
        gender,
        birth,
        &args.city,
        &args.country,
    )?;

    let place = match (args.latitude, args.longitude) {
        (Some(lat), Some(lon)) => {
            ResolvedPlace::with_offset_hours(GeoCoordinates::new(lat, lon)?, args.utc_offset)?
        }
        _ => resolve_place(
            &settings.gazetteer,
            &person.city,
            &person.country,
            settings.fallback,
        ),
    };

    let adapter = SwissEphemerisAdapter::new(&settings.ephemeris)
        .context("Failed to configure Swiss Ephemeris")?;
    log::debug!("Ephemeris search path: {}", adapter.ephemeris_path().display());
    let profile = compute_profile(&person, place, &adapter, &settings.profile)?;

    if args.json {
        println!("{}", profile.to_json_pretty()?);
    } else {
        println!("{}", profile);
    }
    Ok(())
}
