use kundali::vedic::nakshatra::{nakshatra_name, NAKSHATRA_SEGMENT_SIZE};
use kundali::vedic::rashi::sign_name;
use kundali::vedic::tables::{NAKSHATRAS, NAME_ALPHABETS, ZODIAC_SIGNS};
use kundali::vedic::{charan, classify, nakshatra_index, nakshatra_raw, tithi, zodiac_index};
use kundali::{Positions, ZodiacMode};

#[test]
fn test_indices_stay_in_range() {
    for step in 0..36_000 {
        let lon = step as f64 * 0.01;
        assert!(zodiac_index(lon) < 12);
        assert!(nakshatra_index(lon) < 27);
        assert!((1..=4).contains(&charan(lon)));
    }
}

#[test]
fn test_each_nakshatra_starts_at_its_segment() {
    for (index, name) in NAKSHATRAS.iter().enumerate() {
        let lon = index as f64 * NAKSHATRA_SEGMENT_SIZE + 0.01;
        assert_eq!(nakshatra_index(lon), index);
        assert_eq!(nakshatra_name(index), *name);
    }
}

#[test]
fn test_each_sign_starts_at_its_sector() {
    for (index, name) in ZODIAC_SIGNS.iter().enumerate() {
        assert_eq!(zodiac_index(index as f64 * 30.0), index);
        assert_eq!(sign_name(index), *name);
    }
}

#[test]
fn test_scenario_sun_15_moon_20() {
    assert_eq!(sign_name(zodiac_index(15.0)), "Mesha");
    assert_eq!(nakshatra_raw(20.0), 1);
    assert_eq!(nakshatra_name(nakshatra_index(20.0)), "Bharani");
    assert_eq!(charan(20.0), 2);
    assert_eq!(tithi(15.0, 20.0), 1);
}

#[test]
fn test_revati_boundary() {
    assert_eq!(nakshatra_index(360.0 * 26.0 / 27.0), 26);
    assert_eq!(nakshatra_name(nakshatra_index(346.9)), "Revati");
    assert_eq!(nakshatra_index(13.333), 0);
}

#[test]
fn test_tithi_covers_thirty_days() {
    let mut seen = [false; 30];
    for step in 0..360 {
        let t = tithi(0.0, step as f64 + 0.5);
        seen[(t - 1) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_name_alphabet_follows_charan() {
    for step in 0..3_600 {
        let moon = step as f64 * 0.1;
        let c = classify(&Positions {
            sun: 0.0,
            moon,
            ascendant: 0.0,
            ayanamsa: 0.0,
            zodiac: ZodiacMode::Tropical,
        });
        let expected = NAME_ALPHABETS[c.nakshatra_index][(c.charan - 1) as usize];
        assert_eq!(c.name_alphabet, expected);
    }
}
