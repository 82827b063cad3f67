pub mod classify;
pub mod nakshatra;
pub mod rashi;
pub mod tables;
pub mod tithi;

pub use classify::{classify, Classification};
pub use nakshatra::{charan, nakshatra_index, nakshatra_raw, NakshatraPlacement};
pub use rashi::{normalize_degrees, zodiac_index};
pub use tithi::tithi;
