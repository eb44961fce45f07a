//! `Date` type.
//!
//! Dates are stored as a serial number of days since an epoch, in the
//! style of spreadsheet serial dates:
//!
//! * Serial 0 is the "null date" sentinel.
//! * Serial 1 = January 1, 1900.
//! * The valid range is 1900-01-01 to 2199-12-31, which covers the
//!   civil era the liturgical calendar is queried for.

use crate::julian::{jdn_from_ymd, ymd_from_jdn, EPOCH_1900_JDN};
use crate::weekday::Weekday;
use ordo_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial <= 0` (the null sentinel or before
    /// the epoch) or past [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date((jdn_from_ymd(day, month, year) - EPOCH_1900_JDN) as i32 + 1))
    }

    /// Create a date from a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Result<Self> {
        let serial = jdn - EPOCH_1900_JDN + 1;
        if !(1..=Self::MAX.0 as i64).contains(&serial) {
            return Err(Error::Date(format!("JDN {jdn} out of supported range")));
        }
        Ok(Date(serial as i32))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return the Julian Day Number.
    pub fn jdn(&self) -> i64 {
        EPOCH_1900_JDN + self.0 as i64 - 1
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> i32 {
        ymd_from_jdn(self.jdn()).2
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_jdn(self.jdn()).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_jdn(self.jdn()).0
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (i32, u8, u8) {
        let (d, m, y) = ymd_from_jdn(self.jdn());
        (y, m, d)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (January 1, 1900) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return `true` if this date falls on a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.weekday().is_sunday()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first occurrence of `weekday` strictly after this date.
    pub fn next_weekday(self, weekday: Weekday) -> Date {
        let gap = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32 - 1).rem_euclid(7);
        self + (gap + 1)
    }

    /// Return the first occurrence of `weekday` on or after this date.
    pub fn next_or_same_weekday(self, weekday: Weekday) -> Date {
        let gap = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self + gap
    }

    /// Return the last occurrence of `weekday` on or before this date.
    pub fn prev_or_same_weekday(self, weekday: Weekday) -> Date {
        let gap = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self - gap
    }

    /// Return the *n*-th occurrence of `weekday` in the month of
    /// `year`/`month` (e.g. the first Sunday of October).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32).rem_euclid(7) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday:?} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "Date(null)");
        }
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.jdn(), crate::julian::EPOCH_1900_JDN);
    }

    #[test]
    fn max_serial_matches_ymd() {
        let d = Date::from_ymd(2199, 12, 31).unwrap();
        assert_eq!(d, Date::MAX);
    }

    #[test]
    fn roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2024, 2, 10),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "roundtrip {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn invalid_dates_rejected() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_serial(0).is_err());
    }

    #[test]
    fn weekday() {
        // 2024-01-01 is a Monday, 2024-02-10 a Saturday.
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(
            Date::from_ymd(2024, 2, 10).unwrap().weekday(),
            Weekday::Saturday
        );
        assert!(Date::from_ymd(2024, 3, 31).unwrap().is_sunday());
    }

    #[test]
    fn arithmetic_across_year_rollover() {
        let d = Date::from_ymd(2023, 12, 31).unwrap();
        let next = d + 1;
        assert_eq!(next.ymd(), (2024, 1, 1));
        assert_eq!(next - d, 1);
    }

    #[test]
    fn weekday_search() {
        // 2024-12-25 is a Wednesday.
        let christmas = Date::from_ymd(2024, 12, 25).unwrap();
        assert_eq!(
            christmas.prev_or_same_weekday(Weekday::Sunday).ymd(),
            (2024, 12, 22)
        );
        assert_eq!(
            christmas.next_weekday(Weekday::Sunday).ymd(),
            (2024, 12, 29)
        );
        assert_eq!(
            christmas.next_or_same_weekday(Weekday::Wednesday),
            christmas
        );
        // On a Sunday, prev_or_same is the date itself.
        let sunday = Date::from_ymd(2024, 12, 22).unwrap();
        assert_eq!(sunday.prev_or_same_weekday(Weekday::Sunday), sunday);
        assert_eq!(sunday.next_weekday(Weekday::Sunday).ymd(), (2024, 12, 29));
    }

    #[test]
    fn nth_weekday() {
        // First Sunday of October 2024 = October 6.
        let d = Date::nth_weekday(1, Weekday::Sunday, 2024, 10).unwrap();
        assert_eq!(d.ymd(), (2024, 10, 6));
        // There is no 5th Wednesday in February 2023.
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2023, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn display_is_iso() {
        let d = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(d.to_string(), "2024-03-31");
        assert_eq!(format!("{d:?}"), "Date(2024-03-31)");
    }
}
