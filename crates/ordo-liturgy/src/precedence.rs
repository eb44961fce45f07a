//! Precedence and conflict resolution.
//!
//! Builds the temporal celebration for a date, gives any competing
//! sanctoral celebration its own rank from the same 13-level table
//! (the Table of Liturgical Days), and picks a winner:
//!
//! 1.  Paschal Triduum
//! 2.  Christmas, Epiphany, Ascension, Pentecost; Sundays of Advent,
//!     Lent, and Easter; Ash Wednesday; Holy Week weekdays; Easter
//!     octave days
//! 3.  Solemnities; All Souls
//! 4.  Proper solemnities
//! 5.  Feasts of the Lord
//! 6.  Sundays of Christmas season and Ordinary Time
//! 7.  Feasts
//! 8.  Proper feasts
//! 9.  Privileged weekdays (Dec 17-24, Christmas octave, Lent)
//! 10. Obligatory memorials
//! 11. Proper obligatory memorials
//! 12. Optional memorials
//! 13. Ordinary weekdays
//!
//! Ties break by category (Lord before Mary before saints), then grade,
//! then name in byte order, so the result is fully deterministic.

use crate::day_code::{self, roman};
use crate::movable::FeastDates;
use crate::rank::{Category, FeastRank, Grade};
use crate::sanctoral::FixedSaint;
use crate::season::{Color, Season};
use ordo_time::Date;

/// A celebration competing for a date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Stable identifier for bookkeeping (`"easter"`, `"saint-1508"`, …).
    pub key: String,
    /// Display name.
    pub name: String,
    /// Who the celebration is of.
    pub category: Category,
    /// How solemnly it is kept.
    pub grade: Grade,
    /// Precedence rank, 1–13 (lower wins).
    pub rank: u8,
    /// Vestment color.
    pub color: Color,
    /// `true` for bare Sunday/weekday placeholders with no proper title.
    pub placeholder: bool,
}

/// A demoted celebration retained as a commemoration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Commemoration {
    /// Display name.
    pub name: String,
    /// Grade it would have been kept at.
    pub grade: Grade,
}

/// The outcome of precedence resolution for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The winning celebration.
    pub winner: Candidate,
    /// Demoted celebrations worth noting.
    pub commemorations: Vec<Commemoration>,
    /// Why the winner won (bookkeeping, not for display).
    pub reason: String,
}

fn named(
    key: &str,
    name: &str,
    category: Category,
    grade: Grade,
    rank: u8,
    color: Color,
) -> Candidate {
    Candidate {
        key: key.to_string(),
        name: name.to_string(),
        category,
        grade,
        rank,
        color,
        placeholder: false,
    }
}

/// Seasonal color with the Gaudete/Laetare rose override.
fn seasonal_color(date: Date, feasts: &FeastDates, season: Season) -> Color {
    if date == feasts.advent_start + 14 || date == feasts.first_lent_sunday() + 21 {
        return Color::Rose;
    }
    season.default_color()
}

/// Build the temporal celebration for a date.
pub fn temporal_candidate(date: Date, feasts: &FeastDates, season: Season) -> Candidate {
    use Category::*;
    use Grade::*;

    // Triduum.
    if date == feasts.easter {
        return named("easter", "Chúa Nhật Phục Sinh", Lord, Solemnity, 1, Color::White);
    }
    if date == feasts.holy_thursday {
        return named("holy-thursday", "Thứ Năm Tuần Thánh", Lord, Solemnity, 1, Color::White);
    }
    if date == feasts.good_friday {
        return named("good-friday", "Thứ Sáu Tuần Thánh", Lord, Solemnity, 1, Color::Red);
    }
    if date == feasts.holy_saturday {
        return named("holy-saturday", "Thứ Bảy Tuần Thánh", Lord, Solemnity, 1, Color::Purple);
    }

    // Rank 2: the highest feasts and privileged days.
    if date == feasts.christmas {
        return named("christmas", "Lễ Chúa Giáng Sinh", Lord, Solemnity, 2, Color::White);
    }
    if date == feasts.epiphany {
        return named("epiphany", "Lễ Chúa Hiển Linh", Lord, Solemnity, 2, Color::White);
    }
    if date == feasts.ascension {
        return named("ascension", "Lễ Chúa Thăng Thiên", Lord, Solemnity, 2, Color::White);
    }
    if date == feasts.pentecost {
        return named(
            "pentecost",
            "Lễ Chúa Thánh Thần Hiện Xuống",
            Lord,
            Solemnity,
            2,
            Color::Red,
        );
    }
    if date == feasts.palm_sunday {
        return named("palm-sunday", "Chúa Nhật Lễ Lá", Lord, Solemnity, 2, Color::Red);
    }
    if date == feasts.ash_wednesday_celebration {
        return named("ash-wednesday", "Thứ Tư Lễ Tro", Other, Weekday, 2, Color::Purple);
    }
    if feasts.is_holy_week(date) {
        let name = format!("{} Tuần Thánh", date.weekday().vietnamese_name());
        let mut c = named("holy-week-weekday", &name, Lord, Weekday, 2, Color::Purple);
        c.key = format!("holy-week-{}", date.weekday().liturgical_number());
        return c;
    }
    if feasts.in_easter_octave(date) && !date.is_sunday() {
        let name = format!(
            "{} Tuần Bát Nhật Phục Sinh",
            date.weekday().vietnamese_name()
        );
        let mut c = named("easter-octave", &name, Lord, Weekday, 2, Color::White);
        c.key = format!("easter-octave-{}", date.weekday().liturgical_number());
        return c;
    }

    // Solemnities of the Lord in Ordinary Time.
    if date == feasts.trinity {
        return named("trinity", "Lễ Chúa Ba Ngôi", Lord, Solemnity, 3, Color::White);
    }
    if date == feasts.corpus_christi {
        return named(
            "corpus-christi",
            "Lễ Mình Máu Thánh Chúa Kitô",
            Lord,
            Solemnity,
            3,
            Color::White,
        );
    }
    if date == feasts.sacred_heart {
        return named(
            "sacred-heart",
            "Lễ Thánh Tâm Chúa Giêsu",
            Lord,
            Solemnity,
            3,
            Color::White,
        );
    }
    if date == feasts.christ_king {
        return named(
            "christ-king",
            "Lễ Chúa Kitô Vua Vũ Trụ",
            Lord,
            Solemnity,
            3,
            Color::White,
        );
    }
    // Proper solemnity for Vietnam, kept on its own Sunday.
    if date == feasts.vietnamese_martyrs {
        return named(
            "vietnamese-martyrs",
            "Các Thánh Tử Đạo Việt Nam",
            Saint,
            Solemnity,
            4,
            Color::Red,
        );
    }

    // Feasts of the Lord.
    if date == feasts.baptism_of_lord {
        return named(
            "baptism-of-lord",
            "Lễ Chúa Giêsu Chịu Phép Rửa",
            Lord,
            Feast,
            5,
            Color::White,
        );
    }
    if date == feasts.holy_family {
        return named("holy-family", "Lễ Thánh Gia Thất", Lord, Feast, 5, Color::White);
    }

    // Movable memorial.
    if date == feasts.immaculate_heart {
        return named(
            "immaculate-heart",
            "Trái Tim Vô Nhiễm Đức Mẹ Maria",
            Mary,
            Memorial,
            10,
            Color::White,
        );
    }

    // Sundays.
    if date.is_sunday() {
        let rank = match season {
            Season::Advent | Season::Lent | Season::Easter => 2,
            Season::Christmas | Season::OrdinaryTime => 6,
        };
        // Commemorative Ordinary Sundays keep their proper titles.
        if date == feasts.mission_sunday {
            return named(
                "mission-sunday",
                "Chúa Nhật Truyền Giáo",
                Other,
                Weekday,
                rank,
                Color::Green,
            );
        }
        if date == feasts.rosary_sunday {
            return named(
                "rosary-sunday",
                "Chúa Nhật Lễ Đức Mẹ Mân Côi",
                Mary,
                Weekday,
                rank,
                Color::Green,
            );
        }
        let week = match season {
            Season::Advent => day_code::advent_week(date, feasts),
            Season::Lent => day_code::lent_week(date, feasts),
            Season::Easter => day_code::easter_week(date, feasts),
            _ => day_code::ordinary_week(date, feasts),
        };
        let name = format!("Chúa Nhật {} {}", roman(week), season.vietnamese_name());
        return Candidate {
            key: format!("sunday-{}{:02}", season.number(), week),
            name,
            category: Category::Lord,
            grade: Grade::Weekday,
            rank,
            color: seasonal_color(date, feasts, season),
            placeholder: true,
        };
    }

    // Weekdays.
    let privileged = feasts.is_late_advent_weekday(date)
        || feasts.is_lenten_weekday(date)
        || (feasts.in_christmas_octave(date) && date != feasts.christmas);
    let rank = if privileged { 9 } else { 13 };
    Candidate {
        key: format!("weekday-{}", date.weekday().liturgical_number()),
        name: date.weekday().vietnamese_name().to_string(),
        category: Category::Other,
        grade: Grade::Weekday,
        rank,
        color: seasonal_color(date, feasts, season),
        placeholder: true,
    }
}

/// Rank a sanctoral celebration on the 13-level table.
///
/// A solemnity is always rank 3 no matter the season; what happens to it
/// there is the transfer engine's business, not the ranking's.
pub fn sanctoral_rank(rank: FeastRank, category: Category) -> u8 {
    match (rank, category) {
        (FeastRank::Trong, _) => 3,
        (FeastRank::Kinh, Category::Lord) => 5,
        (FeastRank::Kinh, _) => 7,
        (FeastRank::Nho, _) => 10,
        (FeastRank::NhoKb, _) => 12,
    }
}

/// Build the candidate for a fixed saint standing on `date`.
pub fn sanctoral_candidate(saint: &FixedSaint, date: Date) -> Candidate {
    let (_, m, d) = date.ymd();
    Candidate {
        key: format!("saint-{d:02}{m:02}"),
        name: saint.name.to_string(),
        category: saint.category,
        grade: saint.rank.grade(),
        rank: sanctoral_rank(saint.rank, saint.category),
        color: saint.color,
        placeholder: false,
    }
}

/// Resolve the temporal celebration against an optional sanctoral
/// competitor.
///
/// Deterministic: the ordering key is (rank, category weight, inverse
/// grade weight, name), with no reliance on map iteration order.
pub fn resolve(
    temporal: Candidate,
    sanctoral: Option<Candidate>,
    date: Date,
) -> Resolution {
    let mut candidates = vec![temporal];
    candidates.extend(sanctoral);
    candidates.sort_by(|a, b| {
        (a.rank, a.category.weight(), std::cmp::Reverse(a.grade.weight()))
            .cmp(&(b.rank, b.category.weight(), std::cmp::Reverse(b.grade.weight())))
            .then_with(|| a.name.cmp(&b.name))
    });

    let winner = candidates.remove(0);
    let mut commemorations = Vec::new();
    let mut reason = if candidates.is_empty() {
        format!("{} stands unopposed at rank {}", winner.key, winner.rank)
    } else {
        let loser_keys: Vec<&str> = candidates.iter().map(|c| c.key.as_str()).collect();
        format!(
            "{} (rank {}) precedes {}",
            winner.key,
            winner.rank,
            loser_keys.join(", ")
        )
    };

    for loser in candidates {
        let commemorated = match loser.grade {
            // Memorials are never commemorated against a Sunday.
            Grade::Memorial => !date.is_sunday(),
            // A solemnity bumped by something at or above its own level
            // is still worth noting.
            Grade::Solemnity => winner.rank <= 3,
            _ => false,
        };
        if commemorated {
            commemorations.push(Commemoration {
                name: loser.name,
                grade: loser.grade,
            });
        } else if !loser.placeholder {
            reason.push_str(&format!("; {} dropped", loser.key));
        }
    }

    Resolution {
        winner,
        commemorations,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_time::LunarCalendar;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn feasts(year: i32) -> FeastDates {
        FeastDates::for_year(year, &LunarCalendar::new()).unwrap()
    }

    fn temporal(y: i32, m: u8, d: u8) -> Candidate {
        let f = feasts(y);
        let dt = date(y, m, d);
        temporal_candidate(dt, &f, Season::of(dt, &f))
    }

    #[test]
    fn triduum_is_rank_one() {
        assert_eq!(temporal(2024, 3, 29).rank, 1); // Good Friday
        assert_eq!(temporal(2024, 3, 31).rank, 1); // Easter
    }

    #[test]
    fn season_sundays_outrank_ordinary_sundays() {
        assert_eq!(temporal(2024, 12, 8).rank, 2); // 2nd Advent Sunday
        assert_eq!(temporal(2024, 6, 16).rank, 6); // 11th OT Sunday
    }

    #[test]
    fn privileged_weekdays() {
        assert_eq!(temporal(2024, 12, 18).rank, 9); // late Advent
        assert_eq!(temporal(2024, 2, 20).rank, 9); // Lent weekday
        assert_eq!(temporal(2024, 6, 12).rank, 13); // Ordinary weekday
    }

    #[test]
    fn lower_rank_always_wins() {
        let f = feasts(2024);
        let dt = date(2024, 6, 16); // OT Sunday, rank 6
        let sunday = temporal_candidate(dt, &f, Season::of(dt, &f));
        let mut solemnity = named(
            "x",
            "Một Lễ Trọng",
            Category::Saint,
            Grade::Solemnity,
            3,
            Color::White,
        );
        let r = resolve(sunday.clone(), Some(solemnity.clone()), dt);
        assert_eq!(r.winner.key, "x");

        // Raise the rank number above the Sunday's and it loses even
        // with the better grade and category.
        solemnity.rank = 7;
        let r = resolve(sunday, Some(solemnity), dt);
        assert_eq!(r.winner.rank, 6);
    }

    #[test]
    fn category_breaks_rank_ties() {
        let dt = date(2024, 6, 12);
        let lord = named("a-lord", "Zz", Category::Lord, Grade::Feast, 5, Color::White);
        let saint = named("a-saint", "Aa", Category::Saint, Grade::Feast, 5, Color::Red);
        let r = resolve(saint, Some(lord), dt);
        assert_eq!(r.winner.key, "a-lord");
    }

    #[test]
    fn name_breaks_full_ties_deterministically() {
        let dt = date(2024, 6, 12);
        let a = named("k1", "An Tôn", Category::Saint, Grade::Memorial, 10, Color::White);
        let b = named("k2", "Bê Đa", Category::Saint, Grade::Memorial, 10, Color::White);
        for _ in 0..4 {
            let r = resolve(a.clone(), Some(b.clone()), dt);
            assert_eq!(r.winner.key, "k1");
        }
    }

    #[test]
    fn memorial_not_commemorated_on_sunday() {
        let f = feasts(2024);
        let dt = date(2024, 6, 16); // Sunday
        let sunday = temporal_candidate(dt, &f, Season::of(dt, &f));
        let memorial = named("m", "Thánh Nhớ", Category::Saint, Grade::Memorial, 10, Color::White);
        let r = resolve(sunday, Some(memorial), dt);
        assert!(r.winner.placeholder);
        assert!(r.commemorations.is_empty());
    }

    #[test]
    fn memorial_commemorated_on_weekday_of_lent() {
        let f = feasts(2024);
        let dt = date(2024, 2, 20); // Lenten weekday, rank 9
        let weekday = temporal_candidate(dt, &f, Season::of(dt, &f));
        let memorial = named("m", "Thánh Nhớ", Category::Saint, Grade::Memorial, 10, Color::White);
        let r = resolve(weekday, Some(memorial), dt);
        assert_eq!(r.winner.rank, 9);
        assert_eq!(r.commemorations.len(), 1);
        assert_eq!(r.commemorations[0].name, "Thánh Nhớ");
    }

    #[test]
    fn solemnity_losing_to_higher_solemnity_is_noted() {
        let dt = date(2024, 6, 24);
        let a = named("hi", "Lễ Trọng Cao", Category::Lord, Grade::Solemnity, 2, Color::White);
        let b = named("lo", "Lễ Trọng Thấp", Category::Saint, Grade::Solemnity, 3, Color::White);
        let r = resolve(a, Some(b), dt);
        assert_eq!(r.winner.key, "hi");
        assert_eq!(r.commemorations.len(), 1);
    }

    #[test]
    fn resolution_is_idempotent() {
        let f = feasts(2024);
        let dt = date(2024, 2, 20);
        let t = temporal_candidate(dt, &f, Season::of(dt, &f));
        let s = named("m", "Thánh Nhớ", Category::Saint, Grade::Memorial, 10, Color::White);
        let r1 = resolve(t.clone(), Some(s.clone()), dt);
        let r2 = resolve(t, Some(s), dt);
        assert_eq!(r1, r2);
    }

    #[test]
    fn gaudete_and_laetare_are_rose() {
        assert_eq!(temporal(2024, 12, 15).color, Color::Rose); // 3rd Advent Sunday
        assert_eq!(temporal(2024, 3, 10).color, Color::Rose); // 4th Lent Sunday
        assert_eq!(temporal(2024, 12, 8).color, Color::Purple);
    }
}
