//! Classical lookup tables.
//!
//! Ordering is significant: every table is indexed by the zodiac or nakshatra
//! index (Mesha / Ashwini first), cycled where the table is shorter.

pub const ZODIAC_SIGNS: [&str; 12] = [
    "Mesha",      // Aries
    "Vrishabha",  // Taurus
    "Mithuna",    // Gemini
    "Karka",      // Cancer
    "Simha",      // Leo
    "Kanya",      // Virgo
    "Tula",       // Libra
    "Vrishchika", // Scorpio
    "Dhanu",      // Sagittarius
    "Makara",     // Capricorn
    "Kumbha",     // Aquarius
    "Meena",      // Pisces
];

pub const NAKSHATRAS: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

pub const VASHYAS: [&str; 12] = [
    "Chatushpad",
    "Jalchar",
    "Vanchar",
    "Chatushpad",
    "Manav",
    "Keet",
    "Jalchar",
    "Keet",
    "Manav",
    "Chatushpad",
    "Manav",
    "Jalchar",
];

pub const YONIS: [&str; 27] = [
    "Horse", "Elephant", "Sheep", "Snake", "Dog", "Cat", "Rat", "Cow", "Buffalo",
    "Tiger", "Hare", "Monkey", "Mongoose", "Lion", "Horse", "Elephant", "Sheep", "Snake",
    "Dog", "Cat", "Rat", "Cow", "Buffalo", "Tiger", "Hare", "Monkey", "Mongoose",
];

pub const GANS: [&str; 3] = ["Deva", "Manushya", "Rakshasa"];

pub const NADIS: [&str; 3] = ["Aadi", "Madhya", "Antya"];

/// Traditional sign rulers
pub const SIGN_LORDS: [&str; 12] = [
    "Mars", "Venus", "Mercury", "Moon", "Sun", "Mercury",
    "Venus", "Mars", "Jupiter", "Saturn", "Saturn", "Jupiter",
];

/// Vimshottari sequence, repeating every nine nakshatras
pub const NAKSHATRA_LORDS: [&str; 9] = [
    "Ketu", "Venus", "Sun", "Moon", "Mars", "Rahu", "Jupiter", "Saturn", "Mercury",
];

pub const TATVAS: [&str; 5] = ["Fire", "Earth", "Air", "Water", "Ether"];

pub const PAYAS: [&str; 3] = ["Gold", "Silver", "Copper"];

/// Naming syllables per nakshatra, one per charan.
pub const NAME_ALPHABETS: [[&str; 4]; 27] = [
    ["Chu", "Che", "Cho", "La"],
    ["Li", "Lu", "Le", "Lo"],
    ["A", "I", "U", "E"],
    ["O", "Va", "Vi", "Vo"],
    ["Ma", "Mi", "Mu", "Me"],
    ["Mo", "Ta", "Ti", "Tu"],
    ["Te", "To", "Pa", "Pi"],
    ["Pu", "Sha", "Na", "Tha"],
    ["Pe", "Po", "Ra", "Ri"],
    ["Ru", "Re", "Ro", "Ta"],
    ["Ti", "Tu", "Te", "To"],
    ["Na", "Ni", "Nu", "Ne"],
    ["No", "Ya", "Yi", "Yu"],
    ["Ye", "Yo", "Bha", "Bhi"],
    ["Bhu", "Dha", "Pha", "Dha"],
    ["Bhe", "Bho", "Ja", "Ji"],
    ["Ju", "Je", "Jo", "Gha"],
    ["Ga", "Gi", "Gu", "Ge"],
    ["Go", "Sa", "Si", "Su"],
    ["Se", "So", "Da", "Di"],
    ["Du", "Tha", "Jha", "Jna"],
    ["De", "Do", "Cha", "Chi"],
    ["Chu", "Che", "Cho", "La"],
    ["Li", "Lu", "Le", "Lo"],
    ["A", "I", "U", "E"],
    ["O", "Va", "Vi", "Vo"],
    ["Ve", "Vo", "Ka", "Ki"],
];
