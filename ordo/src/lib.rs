//! # ordo
//!
//! Roman Catholic liturgical calendar engine for Vietnam, combining the
//! temporal cycle, the fixed sanctoral calendar, Vietnamese lunar New
//! Year (Tết) observances, and the feast precedence rules of the
//! Vietnamese Bishops' Conference.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ordo-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use ordo::liturgy::LiturgicalCalendar;
//! use ordo::time::Date;
//!
//! let calendar = LiturgicalCalendar::new();
//! let easter = calendar.year_data(2024).unwrap().easter;
//! assert_eq!(easter, Date::from_ymd(2024, 3, 31).unwrap());
//!
//! let info = calendar.day_info(easter).unwrap();
//! assert_eq!(info.day_code, "4010");
//! assert_eq!(info.special.as_deref(), Some("Chúa Nhật Phục Sinh"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core error types and the bounded cache.
pub use ordo_core as core;

/// Date arithmetic and the Vietnamese lunar converter.
pub use ordo_time as time;

/// Seasons, movable feasts, precedence, and the calendar engine.
pub use ordo_liturgy as liturgy;
