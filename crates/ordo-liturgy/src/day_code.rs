//! Day-code classification.
//!
//! Maps a date to the canonical code string used as the key into the
//! external reading-text tables, and to the human-readable week label.
//!
//! Codes are either a season/week/weekday pattern (`S WW D`: season
//! digit 1–5, week, weekday digit with Sunday = 0) or a reserved
//! literal:
//!
//! * `70001..70003`: Tết Mùng 1–3
//! * `2030` / `203{d}`: Epiphany and the days before Baptism
//! * `4001`, `5000`, `5001`: Ascension, Pentecost eve, Pentecost
//! * `8411`, `8421`, `8431`, `8441`: Trinity, Corpus Christi,
//!   Sacred Heart, Immaculate Heart
//! * `2{DD}{MM}`: December 17–31, January 1, and the January days
//!   before Epiphany (unique daily lectionary texts)
//! * `3004..3007`: Ash Wednesday celebration through the Saturday
//!   after it
//!
//! The priority order is an explicit rule list evaluated first-match-
//! wins; the ordering is a design decision, not incidental.

use crate::movable::FeastDates;
use crate::season::Season;
use ordo_time::{Date, LunarCalendar, TetDay};

/// Everything a classification rule may look at.
pub struct CodeContext<'a> {
    /// The date being classified.
    pub date: Date,
    /// Movable feasts of the date's year.
    pub feasts: &'a FeastDates,
    /// Which Tết day this is, if any.
    pub tet: Option<TetDay>,
    /// The liturgical season.
    pub season: Season,
}

impl<'a> CodeContext<'a> {
    /// Build the context for a date.
    pub fn new(date: Date, feasts: &'a FeastDates, lunar: &LunarCalendar) -> Self {
        Self {
            date,
            feasts,
            tet: lunar.tet_day(date),
            season: Season::of(date, feasts),
        }
    }

    fn weekday_digit(&self) -> u8 {
        self.date.weekday().liturgical_number()
    }
}

struct CodeRule {
    name: &'static str,
    applies: fn(&CodeContext) -> bool,
    produce: fn(&CodeContext) -> String,
}

/// The classifier priority order. First match wins.
const RULES: &[CodeRule] = &[
    CodeRule {
        name: "tet",
        applies: |ctx| ctx.tet.is_some(),
        produce: |ctx| {
            let day = ctx.tet.map(|t| t.number()).unwrap_or(1);
            format!("7000{day}")
        },
    },
    CodeRule {
        name: "epiphany",
        applies: |ctx| ctx.date == ctx.feasts.epiphany,
        produce: |_| "2030".to_string(),
    },
    CodeRule {
        name: "post-epiphany",
        applies: |ctx| ctx.date > ctx.feasts.epiphany && ctx.date < ctx.feasts.baptism_of_lord,
        produce: |ctx| format!("203{}", ctx.weekday_digit()),
    },
    CodeRule {
        name: "baptism-of-lord",
        applies: |ctx| ctx.date == ctx.feasts.baptism_of_lord,
        produce: |ctx| format!("501{}", ctx.weekday_digit()),
    },
    CodeRule {
        name: "ascension",
        applies: |ctx| ctx.date == ctx.feasts.ascension,
        produce: |_| "4001".to_string(),
    },
    CodeRule {
        name: "pentecost-eve",
        applies: |ctx| ctx.date == ctx.feasts.pentecost - 1,
        produce: |_| "5000".to_string(),
    },
    CodeRule {
        name: "pentecost",
        applies: |ctx| ctx.date == ctx.feasts.pentecost,
        produce: |_| "5001".to_string(),
    },
    CodeRule {
        name: "trinity",
        applies: |ctx| ctx.date == ctx.feasts.trinity,
        produce: |_| "8411".to_string(),
    },
    CodeRule {
        name: "corpus-christi",
        applies: |ctx| ctx.date == ctx.feasts.corpus_christi,
        produce: |_| "8421".to_string(),
    },
    CodeRule {
        name: "sacred-heart",
        applies: |ctx| ctx.date == ctx.feasts.sacred_heart,
        produce: |_| "8431".to_string(),
    },
    CodeRule {
        name: "immaculate-heart",
        applies: |ctx| ctx.date == ctx.feasts.immaculate_heart,
        produce: |_| "8441".to_string(),
    },
    // Dec 17-31, Jan 1, and the January days before Epiphany carry
    // unique daily texts keyed by day and month. Sundays Dec 17-24 stay
    // regular Advent Sundays.
    CodeRule {
        name: "christmastide",
        applies: |ctx| {
            let (_, m, d) = ctx.date.ymd();
            (m == 12 && (17..=24).contains(&d) && !ctx.date.is_sunday())
                || (m == 12 && d >= 25)
                || (m == 1 && d == 1)
                || (m == 1 && d > 1 && ctx.date < ctx.feasts.epiphany)
        },
        produce: |ctx| {
            let (_, m, d) = ctx.date.ymd();
            format!("2{d:02}{m:02}")
        },
    },
    // Ash Wednesday celebration and the days up to the first Sunday of
    // Lent. In Tết-collision years the days between the original Ash
    // Wednesday and the transferred celebration are Tết days and were
    // already claimed by the first rule.
    CodeRule {
        name: "after-ashes",
        applies: |ctx| {
            ctx.season == Season::Lent
                && ctx.date >= ctx.feasts.ash_wednesday_celebration
                && ctx.date < ctx.feasts.first_lent_sunday()
        },
        produce: |ctx| {
            let offset = ctx.date - ctx.feasts.ash_wednesday_celebration;
            format!("{}", 3004 + offset)
        },
    },
    CodeRule {
        name: "holy-week",
        applies: |ctx| ctx.feasts.is_holy_week(ctx.date),
        produce: |ctx| format!("306{}", ctx.weekday_digit()),
    },
    CodeRule {
        name: "lent",
        applies: |ctx| ctx.season == Season::Lent,
        produce: |ctx| {
            let week = lent_week(ctx.date, ctx.feasts);
            format!("30{week}{}", ctx.weekday_digit())
        },
    },
    CodeRule {
        name: "easter-season",
        applies: |ctx| ctx.season == Season::Easter,
        produce: |ctx| {
            let week = easter_week(ctx.date, ctx.feasts);
            format!("40{week}{}", ctx.weekday_digit())
        },
    },
    CodeRule {
        name: "advent",
        applies: |ctx| ctx.season == Season::Advent,
        produce: |ctx| {
            let week = advent_week(ctx.date, ctx.feasts);
            format!("10{week}{}", ctx.weekday_digit())
        },
    },
    // Last resort doubles as the Ordinary Time rule and the generic
    // fallback: an unclassified date renders as an Ordinary weekday
    // rather than failing.
    CodeRule {
        name: "ordinary",
        applies: |_| true,
        produce: |ctx| {
            let week = ordinary_week(ctx.date, ctx.feasts);
            format!("5{week:02}{}", ctx.weekday_digit())
        },
    },
];

// ── Week numbering ────────────────────────────────────────────────────────────

/// Lent week number (1–6; 6 is Holy Week). Sunday starts the week.
pub fn lent_week(date: Date, feasts: &FeastDates) -> i32 {
    ((date - feasts.first_lent_sunday()) / 7 + 1).clamp(0, 6)
}

/// Easter season week number (1–7; 1 is the octave).
pub fn easter_week(date: Date, feasts: &FeastDates) -> i32 {
    ((date - feasts.easter) / 7 + 1).clamp(1, 7)
}

/// Advent week number (1–4).
pub fn advent_week(date: Date, feasts: &FeastDates) -> i32 {
    ((date - feasts.advent_start) / 7 + 1).clamp(1, 4)
}

/// Ordinary Time week number.
///
/// The early block counts forward from the week of the Baptism of the
/// Lord; the late block counts backward from Christ the King = 34, so
/// the count stays consistent no matter where Easter falls.
pub fn ordinary_week(date: Date, feasts: &FeastDates) -> i32 {
    use ordo_time::Weekday;
    if date < feasts.ash_wednesday {
        let baptism_sunday = feasts.baptism_of_lord.prev_or_same_weekday(Weekday::Sunday);
        ((date - baptism_sunday) / 7 + 1).clamp(1, 34)
    } else {
        let week_sunday = date.prev_or_same_weekday(Weekday::Sunday);
        (34 - (feasts.christ_king - week_sunday) / 7).clamp(1, 34)
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Names of every rule whose predicate holds for a date, in priority
/// order. The reserved-literal rules are pairwise exclusive; the
/// seasonal rules at the tail overlap by design and are disambiguated
/// by priority.
pub fn matching_rules(ctx: &CodeContext) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| rule.name)
        .collect()
}

/// Classify a date, returning the name of the matched rule and the code.
pub fn classify(ctx: &CodeContext) -> (&'static str, String) {
    for rule in RULES {
        if (rule.applies)(ctx) {
            return (rule.name, (rule.produce)(ctx));
        }
    }
    unreachable!("classifier rule list ends with a catch-all")
}

/// The liturgical day code for a date (`getLiturgicalDayCode`).
pub fn day_code(date: Date, feasts: &FeastDates, lunar: &LunarCalendar) -> String {
    classify(&CodeContext::new(date, feasts, lunar)).1
}

/// Sanctoral lookup code for a date: `7{DD}{MM}`.
pub fn sanctoral_day_code(date: Date) -> String {
    let (_, m, d) = date.ymd();
    format!("7{d:02}{m:02}")
}

/// Special-feast lookup code for a date: `8{DD}{MM}`.
pub fn special_feast_code(date: Date) -> String {
    let (_, m, d) = date.ymd();
    format!("8{d:02}{m:02}")
}

// ── Week labels ───────────────────────────────────────────────────────────────

/// Roman numeral for a week number (1–39).
pub fn roman(n: i32) -> String {
    let mut n = n.clamp(0, 39);
    let mut out = String::new();
    for (value, sym) in [(10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I")] {
        while n >= value {
            out.push_str(sym);
            n -= value;
        }
    }
    out
}

/// Human-readable week description for a date, e.g. `"Tuần III Mùa Chay"`.
pub fn week_label(date: Date, feasts: &FeastDates, lunar: &LunarCalendar) -> String {
    if let Some(tet) = lunar.tet_day(date) {
        return tet.vietnamese_name().to_string();
    }

    // Named high feasts.
    for (feast_date, label) in [
        (feasts.christmas, "Lễ Chúa Giáng Sinh"),
        (feasts.epiphany, "Lễ Chúa Hiển Linh"),
        (feasts.baptism_of_lord, "Lễ Chúa Giêsu Chịu Phép Rửa"),
        (feasts.palm_sunday, "Chúa Nhật Lễ Lá"),
        (feasts.easter, "Chúa Nhật Phục Sinh"),
        (feasts.ascension, "Lễ Chúa Thăng Thiên"),
        (feasts.pentecost, "Lễ Chúa Thánh Thần Hiện Xuống"),
        (feasts.trinity, "Lễ Chúa Ba Ngôi"),
        (feasts.corpus_christi, "Lễ Mình Máu Thánh Chúa Kitô"),
        (feasts.sacred_heart, "Lễ Thánh Tâm Chúa Giêsu"),
        (feasts.christ_king, "Lễ Chúa Kitô Vua Vũ Trụ"),
        (feasts.ash_wednesday_celebration, "Thứ Tư Lễ Tro"),
    ] {
        if date == feast_date {
            return label.to_string();
        }
    }

    let (_, m, d) = date.ymd();
    if feasts.is_holy_week(date) {
        return "Tuần Thánh".to_string();
    }
    if feasts.in_easter_octave(date) {
        return "Tuần Bát Nhật Phục Sinh".to_string();
    }
    if (m == 12 && d >= 25) || (m == 1 && d == 1) {
        return "Tuần Bát Nhật Giáng Sinh".to_string();
    }
    if m == 1 && date < feasts.epiphany {
        return "Mùa Giáng Sinh".to_string();
    }
    if date > feasts.epiphany && date < feasts.baptism_of_lord {
        return "Sau Lễ Hiển Linh".to_string();
    }

    match Season::of(date, feasts) {
        Season::Advent => format!("Tuần {} Mùa Vọng", roman(advent_week(date, feasts))),
        Season::Lent => {
            if date < feasts.first_lent_sunday() {
                "Sau Lễ Tro".to_string()
            } else {
                format!("Tuần {} Mùa Chay", roman(lent_week(date, feasts)))
            }
        }
        Season::Easter => format!("Tuần {} Phục Sinh", roman(easter_week(date, feasts))),
        Season::Christmas => "Mùa Giáng Sinh".to_string(),
        Season::OrdinaryTime => {
            format!("Tuần {} Thường Niên", roman(ordinary_week(date, feasts)))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movable::FeastDates;
    use ordo_time::LunarCalendar;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn code(lunar: &LunarCalendar, feasts: &FeastDates, y: i32, m: u8, d: u8) -> String {
        day_code(date(y, m, d), feasts, lunar)
    }

    #[test]
    fn codes_through_2024() {
        let lunar = LunarCalendar::new();
        let f = FeastDates::for_year(2024, &lunar).unwrap();

        assert_eq!(code(&lunar, &f, 2024, 1, 7), "2030"); // Epiphany
        assert_eq!(code(&lunar, &f, 2024, 1, 8), "5011"); // Baptism (Monday)
        assert_eq!(code(&lunar, &f, 2024, 1, 9), "5012"); // OT week 1 Tuesday
        assert_eq!(code(&lunar, &f, 2024, 1, 14), "5020"); // 2nd Sunday OT
        assert_eq!(code(&lunar, &f, 2024, 2, 10), "70001"); // Tết Mùng 1
        assert_eq!(code(&lunar, &f, 2024, 2, 12), "70003"); // Tết Mùng 3
        assert_eq!(code(&lunar, &f, 2024, 2, 14), "3004"); // Ash Wednesday
        assert_eq!(code(&lunar, &f, 2024, 2, 17), "3007"); // Saturday after ashes
        assert_eq!(code(&lunar, &f, 2024, 2, 18), "3010"); // 1st Sunday of Lent
        assert_eq!(code(&lunar, &f, 2024, 3, 24), "3060"); // Palm Sunday
        assert_eq!(code(&lunar, &f, 2024, 3, 29), "3065"); // Good Friday
        assert_eq!(code(&lunar, &f, 2024, 3, 31), "4010"); // Easter
        assert_eq!(code(&lunar, &f, 2024, 4, 1), "4011"); // Easter Monday
        assert_eq!(code(&lunar, &f, 2024, 5, 9), "4001"); // Ascension
        assert_eq!(code(&lunar, &f, 2024, 5, 18), "5000"); // Pentecost eve
        assert_eq!(code(&lunar, &f, 2024, 5, 19), "5001"); // Pentecost
        assert_eq!(code(&lunar, &f, 2024, 5, 20), "5071"); // OT week 7 Monday
        assert_eq!(code(&lunar, &f, 2024, 5, 26), "8411"); // Trinity
        assert_eq!(code(&lunar, &f, 2024, 6, 2), "8421"); // Corpus Christi
        assert_eq!(code(&lunar, &f, 2024, 6, 7), "8431"); // Sacred Heart
        assert_eq!(code(&lunar, &f, 2024, 6, 8), "8441"); // Immaculate Heart
        assert_eq!(code(&lunar, &f, 2024, 12, 1), "1010"); // 1st Advent Sunday
        assert_eq!(code(&lunar, &f, 2024, 12, 16), "1031"); // Advent week 3 Monday
        assert_eq!(code(&lunar, &f, 2024, 12, 17), "21712"); // late Advent weekday
        assert_eq!(code(&lunar, &f, 2024, 12, 22), "1040"); // 4th Advent Sunday
        assert_eq!(code(&lunar, &f, 2024, 12, 25), "22512"); // Christmas
        assert_eq!(code(&lunar, &f, 2024, 11, 24), "5340"); // Christ the King
    }

    #[test]
    fn january_first_and_pre_epiphany() {
        let lunar = LunarCalendar::new();
        let f = FeastDates::for_year(2025, &lunar).unwrap();
        assert_eq!(code(&lunar, &f, 2025, 1, 1), "20101");
        assert_eq!(code(&lunar, &f, 2025, 1, 3), "20301");
        assert_eq!(code(&lunar, &f, 2025, 1, 5), "2030"); // Epiphany
        assert_eq!(code(&lunar, &f, 2025, 1, 6), "2031"); // Monday after Epiphany
        assert_eq!(code(&lunar, &f, 2025, 1, 11), "2036"); // Saturday before Baptism
        assert_eq!(code(&lunar, &f, 2025, 1, 12), "5010"); // Baptism (Sunday)
    }

    #[test]
    fn tet_transfer_year_codes() {
        let lunar = LunarCalendar::new();
        let f = FeastDates::for_year(2026, &lunar).unwrap();
        // Ash Wednesday Feb 18 is Mùng 2; the Tết rule wins on the
        // original date and the celebration code lands on Feb 20.
        assert_eq!(code(&lunar, &f, 2026, 2, 17), "70001");
        assert_eq!(code(&lunar, &f, 2026, 2, 18), "70002");
        assert_eq!(code(&lunar, &f, 2026, 2, 19), "70003");
        assert_eq!(code(&lunar, &f, 2026, 2, 20), "3004");
        assert_eq!(code(&lunar, &f, 2026, 2, 21), "3005");
        assert_eq!(code(&lunar, &f, 2026, 2, 22), "3010");
    }

    #[test]
    fn classifier_names_specific_rules() {
        let lunar = LunarCalendar::new();
        let f = FeastDates::for_year(2024, &lunar).unwrap();
        let ctx = CodeContext::new(date(2024, 2, 10), &f, &lunar);
        assert_eq!(classify(&ctx).0, "tet");
        let ctx = CodeContext::new(date(2024, 7, 3), &f, &lunar);
        assert_eq!(classify(&ctx).0, "ordinary");
    }

    #[test]
    fn lookup_codes() {
        assert_eq!(sanctoral_day_code(date(2024, 8, 15)), "71508");
        assert_eq!(special_feast_code(date(2024, 11, 2)), "80211");
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(roman(1), "I");
        assert_eq!(roman(4), "IV");
        assert_eq!(roman(9), "IX");
        assert_eq!(roman(14), "XIV");
        assert_eq!(roman(34), "XXXIV");
    }

    #[test]
    fn week_labels() {
        let lunar = LunarCalendar::new();
        let f = FeastDates::for_year(2024, &lunar).unwrap();
        assert_eq!(week_label(date(2024, 3, 5), &f, &lunar), "Tuần III Mùa Chay");
        assert_eq!(week_label(date(2024, 3, 26), &f, &lunar), "Tuần Thánh");
        assert_eq!(week_label(date(2024, 4, 2), &f, &lunar), "Tuần Bát Nhật Phục Sinh");
        assert_eq!(week_label(date(2024, 12, 27), &f, &lunar), "Tuần Bát Nhật Giáng Sinh");
        assert_eq!(week_label(date(2024, 2, 15), &f, &lunar), "Sau Lễ Tro");
        assert_eq!(week_label(date(2024, 2, 10), &f, &lunar), "Mùng Một Tết");
        assert_eq!(week_label(date(2024, 6, 12), &f, &lunar), "Tuần X Thường Niên");
        assert_eq!(week_label(date(2024, 12, 25), &f, &lunar), "Lễ Chúa Giáng Sinh");
    }
}
