//! Vedic birth profiles.
//!
//! A profile is computed in four steps: the birth instant is converted to a
//! Julian Day ([`time`]), Sun/Moon/Ascendant longitudes are fetched from an
//! [`EphemerisProvider`] ([`positions`]), the longitudes are classified through
//! fixed lookup tables ([`vedic`]) and the result is assembled into an
//! [`AstrologicalProfile`] ([`profile`]).

pub mod ephemeris;
pub mod error;
pub mod geo;
pub mod person;
pub mod positions;
pub mod profile;
pub mod time;
pub mod vedic;

pub use ephemeris::{
    Body, EphemerisError, EphemerisProvider, EphemerisSettings, FixedEphemeris,
    SwissEphemerisAdapter,
};
pub use error::{InputError, ProfileError};
pub use geo::{
    resolve_place, Accuracy, GeoCoordinates, GeoMatch, GeocodeOutcome, Geocoder, Gazetteer,
    PlaceEntry, ResolvedPlace,
};
pub use person::{BirthInstant, Gender, Person};
pub use positions::{Positions, ZodiacMode};
pub use profile::{aggregate, compute_profile, AstrologicalProfile, ProfileSettings};
pub use time::{AstronomicalTime, TimeConvention, TimeSettings};
pub use vedic::{classify, Classification};
