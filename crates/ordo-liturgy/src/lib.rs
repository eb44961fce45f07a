//! # ordo-liturgy
//!
//! The liturgical core: movable feast calculation, day-code
//! classification, sanctoral lookup with suppression and transfer,
//! precedence resolution, and the Tết overlay, assembled by the caching
//! [`LiturgicalCalendar`] engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The caching engine.
pub mod calendar;

/// Sunday (A/B/C) and weekday (I/II) lectionary cycles.
pub mod cycle;

/// Day-code classification and week labels.
pub mod day_code;

/// The resolved per-date record.
pub mod day_info;

/// Movable feast calculation.
pub mod movable;

/// Precedence and conflict resolution.
pub mod precedence;

/// Celebration ranks, categories, and grades.
pub mod rank;

/// Fixed-date sanctoral calendar and transfer engine.
pub mod sanctoral;

/// Seasons and vestment colors.
pub mod season;

/// Tết overlay.
pub mod tet;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{CalendarConfig, LiturgicalCalendar};
pub use cycle::{SundayCycle, WeekdayCycle};
pub use day_code::{day_code, sanctoral_day_code, special_feast_code, week_label};
pub use day_info::{DayInfo, SaintEntry, VigilInfo};
pub use movable::{easter_sunday, FeastDates};
pub use precedence::{Candidate, Commemoration, Resolution};
pub use rank::{Category, FeastRank, Grade};
pub use sanctoral::{lookup_fixed, FixedSaint, TransferredFeast};
pub use season::{Color, Season};
