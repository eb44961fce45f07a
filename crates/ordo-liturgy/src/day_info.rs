//! The resolved public record for one date.

use crate::cycle::{SundayCycle, WeekdayCycle};
use crate::precedence::Commemoration;
use crate::rank::FeastRank;
use crate::season::{Color, Season};
use ordo_time::{Date, LunarDate, TetDay};

/// A saint present on a date (whether or not it won precedence).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaintEntry {
    /// Name as printed in the ordo.
    pub name: String,
    /// Rank.
    pub rank: FeastRank,
    /// Vestment color of the celebration.
    pub color: Color,
}

/// Everything the engine resolves for one date.
///
/// A pure value: recomputed from `(date, year feast data)` and cached;
/// consumers own all formatting and persistence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayInfo {
    /// The date this record describes.
    pub date: Date,
    /// Liturgical season.
    pub season: Season,
    /// Vestment color of the day.
    pub color: Color,
    /// Human-readable week description (`"Tuần III Mùa Chay"`).
    pub week_label: String,
    /// Lookup key into the external reading-text tables.
    pub day_code: String,
    /// Sunday lectionary cycle in effect.
    pub sunday_cycle: SundayCycle,
    /// Weekday lectionary cycle in effect.
    pub weekday_cycle: WeekdayCycle,
    /// Winning celebration name, or `None` on a bare Sunday/weekday.
    pub special: Option<String>,
    /// Precedence rank (1–13) of the winning celebration.
    pub rank_code: Option<u8>,
    /// Saints present on this date (suppressed ones are omitted).
    pub saints: Vec<SaintEntry>,
    /// Demoted celebrations worth noting.
    pub commemorations: Vec<Commemoration>,
    /// Which day of Tết this is, if any.
    pub is_tet: Option<TetDay>,
    /// Note recorded when Tết is present but not liturgically celebrated.
    pub tet_note: Option<String>,
    /// Lunar date, filled for Tết days and New Year's Eve.
    pub tet_lunar: Option<LunarDate>,
    /// `true` when this date is affected by an Ash-Wednesday transfer.
    pub ash_wednesday_transferred: bool,
    /// Explanatory note for the transfer.
    pub ash_wednesday_note: Option<String>,
    /// Stable key of the winning celebration (bookkeeping).
    pub winner_key: Option<String>,
    /// Why the winner won (bookkeeping).
    pub precedence_reason: Option<String>,
}

/// Vigil Mass information for the four solemnities with a distinct
/// vigil (Christmas, Easter, Pentecost, All Saints).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VigilInfo {
    /// Name of the vigil Mass.
    pub vigil_name: String,
    /// Lookup code of the vigil's readings.
    pub vigil_code: String,
    /// Lookup code of the main feast's readings.
    pub main_feast_code: String,
}
