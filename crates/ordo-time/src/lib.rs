//! # ordo-time
//!
//! Gregorian date arithmetic (serial-number `Date`, `Weekday`), Julian
//! Day Number conversion, and the Vietnamese lunar calendar converter
//! used for Tết detection.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Julian Day Number conversions.
pub mod julian;

/// Vietnamese lunar calendar conversion and Tết helpers.
pub mod lunar;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use lunar::{LunarCalendar, LunarDate, TetDay};
pub use weekday::Weekday;
