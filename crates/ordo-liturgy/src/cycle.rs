//! Lectionary cycles.
//!
//! Sundays follow a three-year cycle (A/B/C) keyed to the liturgical
//! year, which begins on the first Sunday of Advent; weekdays follow a
//! two-year cycle keyed to calendar-year parity.

use crate::movable::FeastDates;
use ordo_time::Date;

/// The three-year Sunday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SundayCycle {
    /// Year A (Matthew).
    A,
    /// Year B (Mark).
    B,
    /// Year C (Luke).
    C,
}

impl SundayCycle {
    /// Cycle of a given liturgical year number.
    pub fn for_liturgical_year(year: i32) -> SundayCycle {
        match year.rem_euclid(3) {
            1 => SundayCycle::A,
            2 => SundayCycle::B,
            _ => SundayCycle::C,
        }
    }

    /// Cycle in effect on `date`.
    ///
    /// From the first Sunday of Advent onward the liturgical year is the
    /// following calendar year.
    pub fn for_date(date: Date, feasts: &FeastDates) -> SundayCycle {
        let lit_year = if date >= feasts.advent_start {
            date.year() + 1
        } else {
            date.year()
        };
        Self::for_liturgical_year(lit_year)
    }

    /// The letter (`"A"`, `"B"`, `"C"`).
    pub fn letter(&self) -> &'static str {
        match self {
            SundayCycle::A => "A",
            SundayCycle::B => "B",
            SundayCycle::C => "C",
        }
    }
}

impl std::fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The two-year weekday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeekdayCycle {
    /// Year I (odd calendar years).
    One,
    /// Year II (even calendar years).
    Two,
}

impl WeekdayCycle {
    /// Cycle of a calendar year.
    pub fn for_year(year: i32) -> WeekdayCycle {
        if year.rem_euclid(2) == 1 {
            WeekdayCycle::One
        } else {
            WeekdayCycle::Two
        }
    }

    /// The digit (`"1"` or `"2"`) used as a lectionary table key.
    pub fn digit(&self) -> &'static str {
        match self {
            WeekdayCycle::One => "1",
            WeekdayCycle::Two => "2",
        }
    }
}

impl std::fmt::Display for WeekdayCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digit())
    }
}
