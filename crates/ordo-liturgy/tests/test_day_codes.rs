//! Totality and disjointness of the day-code classifier.

use ordo_liturgy::day_code::{classify, matching_rules, CodeContext};
use ordo_liturgy::movable::FeastDates;
use ordo_time::{Date, LunarCalendar};

use proptest::prelude::*;

/// The reserved-literal rules must be pairwise exclusive; the seasonal
/// rules at the tail may overlap and are picked by priority.
const LITERAL_RULES: &[&str] = &[
    "tet",
    "epiphany",
    "post-epiphany",
    "baptism-of-lord",
    "ascension",
    "pentecost-eve",
    "pentecost",
    "trinity",
    "corpus-christi",
    "sacred-heart",
    "immaculate-heart",
];

fn assert_code_well_formed(code: &str, context: &str) {
    assert!(!code.is_empty(), "{context}: empty code");
    assert!(
        code.chars().all(|c| c.is_ascii_digit()),
        "{context}: non-digit code {code}"
    );
    match code.len() {
        4 => {
            let season = &code[..1];
            assert!(
                matches!(season, "1" | "2" | "3" | "4" | "5" | "8"),
                "{context}: bad 4-digit code {code}"
            );
        }
        5 => {
            let head = &code[..1];
            assert!(
                matches!(head, "2" | "7" | "8"),
                "{context}: bad 5-digit code {code}"
            );
        }
        n => panic!("{context}: unexpected code length {n} ({code})"),
    }
}

#[test]
fn every_date_gets_exactly_one_code() {
    let lunar = LunarCalendar::new();
    for year in [2023, 2024, 2025, 2026] {
        let feasts = FeastDates::for_year(year, &lunar).unwrap();
        let mut d = Date::from_ymd(year, 1, 1).unwrap();
        let end = Date::from_ymd(year, 12, 31).unwrap();
        while d <= end {
            let ctx = CodeContext::new(d, &feasts, &lunar);
            let matched = matching_rules(&ctx);
            assert!(!matched.is_empty(), "{d}: no rule fired");
            let literals: Vec<&&str> = matched
                .iter()
                .filter(|name| LITERAL_RULES.contains(*name))
                .collect();
            assert!(
                literals.len() <= 1,
                "{d}: multiple literal rules fired: {literals:?}"
            );
            let (_, code) = classify(&ctx);
            assert_code_well_formed(&code, &d.to_string());
            d += 1;
        }
    }
}

#[test]
fn codes_are_unique_within_a_year() {
    // Within one calendar year no two dates share a code: each day has
    // its own slot in the reading tables.
    let lunar = LunarCalendar::new();
    for year in [2024, 2026] {
        let feasts = FeastDates::for_year(year, &lunar).unwrap();
        let mut seen = std::collections::HashMap::new();
        let mut d = Date::from_ymd(year, 1, 1).unwrap();
        let end = Date::from_ymd(year, 12, 31).unwrap();
        while d <= end {
            let ctx = CodeContext::new(d, &feasts, &lunar);
            let (_, code) = classify(&ctx);
            if let Some(prev) = seen.insert(code.clone(), d) {
                panic!("{year}: code {code} claimed by both {prev} and {d}");
            }
            d += 1;
        }
    }
}

proptest! {
    #[test]
    fn classifier_is_total_for_arbitrary_dates(
        year in 1901i32..=2198,
        offset in 0i32..365,
    ) {
        let lunar = LunarCalendar::new();
        let feasts = FeastDates::for_year(year, &lunar).unwrap();
        let d = Date::from_ymd(year, 1, 1).unwrap() + offset;
        // Stay within the year the feast data describes.
        prop_assume!(d.year() == year);
        let ctx = CodeContext::new(d, &feasts, &lunar);
        let (_, code) = classify(&ctx);
        assert_code_well_formed(&code, &d.to_string());
    }
}
