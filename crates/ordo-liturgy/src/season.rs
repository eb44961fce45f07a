//! `Season` and `Color`: the five liturgical seasons and vestment colors.

use crate::movable::FeastDates;
use ordo_time::Date;

/// A liturgical season.
///
/// Variants are numbered 1–5, matching the leading digit of the regular
/// season/week/weekday day codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Season {
    /// Mùa Vọng (1).
    Advent = 1,
    /// Mùa Giáng Sinh (2).
    Christmas = 2,
    /// Mùa Chay (3).
    Lent = 3,
    /// Mùa Phục Sinh (4).
    Easter = 4,
    /// Mùa Thường Niên (5).
    OrdinaryTime = 5,
}

impl Season {
    /// Determine the season a date falls in.
    ///
    /// Lent starts on Ash Wednesday itself (the no-Alleluia start, which
    /// never moves even when the Ash Wednesday *celebration* is
    /// transferred for Tết).
    pub fn of(date: Date, feasts: &FeastDates) -> Season {
        if date >= feasts.christmas {
            Season::Christmas
        } else if date >= feasts.advent_start {
            Season::Advent
        } else if date <= feasts.baptism_of_lord {
            Season::Christmas
        } else if (feasts.easter..=feasts.pentecost).contains(&date) {
            Season::Easter
        } else if (feasts.ash_wednesday..feasts.easter).contains(&date) {
            Season::Lent
        } else {
            Season::OrdinaryTime
        }
    }

    /// The season digit used as the leading character of regular day
    /// codes (1–5).
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Default vestment color of the season.
    pub fn default_color(&self) -> Color {
        match self {
            Season::Advent | Season::Lent => Color::Purple,
            Season::Christmas | Season::Easter => Color::White,
            Season::OrdinaryTime => Color::Green,
        }
    }

    /// Vietnamese season name.
    pub fn vietnamese_name(&self) -> &'static str {
        match self {
            Season::Advent => "Mùa Vọng",
            Season::Christmas => "Mùa Giáng Sinh",
            Season::Lent => "Mùa Chay",
            Season::Easter => "Mùa Phục Sinh",
            Season::OrdinaryTime => "Mùa Thường Niên",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.vietnamese_name())
    }
}

/// Liturgical vestment color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Đỏ: martyrs, Passion, Pentecost.
    Red,
    /// Trắng: solemnities and feasts of the Lord, Mary, non-martyrs.
    White,
    /// Tím: Advent, Lent, penance.
    Purple,
    /// Xanh: Ordinary Time.
    Green,
    /// Hồng: Gaudete and Laetare Sundays.
    Rose,
}

impl Color {
    /// Vietnamese color name.
    pub fn vietnamese_name(&self) -> &'static str {
        match self {
            Color::Red => "đỏ",
            Color::White => "trắng",
            Color::Purple => "tím",
            Color::Green => "xanh",
            Color::Rose => "hồng",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.vietnamese_name())
    }
}
