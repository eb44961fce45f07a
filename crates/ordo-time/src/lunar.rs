//! Vietnamese lunar calendar conversion.
//!
//! Implements the published Vietnamese civil lunar-calendar algorithm:
//! new moons from a truncated trigonometric series over the lunation
//! number, lunar-year boundaries anchored on the month containing the
//! winter solstice ("month 11"), and leap months detected by a repeated
//! sun-longitude sector between consecutive lunations.
//!
//! The timezone offset is an explicit parameter everywhere (7.0 for
//! Vietnam); the same functions produce the Chinese calendar at 8.0.
//!
//! Accuracy is that of the civil almanac: exact day-level agreement for
//! the era the engine is queried for, not an ephemeris.

use crate::date::Date;
use crate::julian::jdn_from_ymd;
use ordo_core::BoundedCache;

use std::f64::consts::PI;

/// Timezone offset for Vietnam (UTC+7), the default for all lunar math.
pub const VIETNAM_TZ: f64 = 7.0;

/// Mean length of a synodic month in days.
const SYNODIC_MONTH: f64 = 29.530_588_853;

/// JD of the lunation-number epoch (the January 1900 new moon).
const LUNATION_EPOCH_JD: f64 = 2_415_021.076_998_695;

// ── Value types ───────────────────────────────────────────────────────────────

/// A date in the Vietnamese lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    /// Day of the lunar month (1–30).
    pub day: u8,
    /// Lunar month (1–12).
    pub month: u8,
    /// Lunar year (the year whose Tết starts it).
    pub year: i32,
    /// `true` if this is the intercalary (leap) month.
    pub leap_month: bool,
}

impl LunarDate {
    /// Vietnamese name of the lunar month (`"Giêng"` … `"Chạp"`).
    pub fn month_name(&self) -> &'static str {
        lunar_month_name(self.month)
    }

    /// Sexagenary (can-chi) name of the lunar year, e.g. `"Giáp Thìn"`.
    pub fn year_name(&self) -> String {
        can_chi_year_name(self.year)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ngày {} tháng {}{} năm {}",
            self.day,
            self.month_name(),
            if self.leap_month { " (nhuận)" } else { "" },
            self.year_name()
        )
    }
}

/// One of the first three days of Tết.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TetDay {
    /// Mùng 1 Tết: lunar New Year's Day.
    Mung1,
    /// Mùng 2 Tết.
    Mung2,
    /// Mùng 3 Tết.
    Mung3,
}

impl TetDay {
    /// Day number within Tết (1–3).
    pub fn number(&self) -> u8 {
        match self {
            TetDay::Mung1 => 1,
            TetDay::Mung2 => 2,
            TetDay::Mung3 => 3,
        }
    }

    /// Construct from a lunar day-of-month in month 1.
    pub fn from_lunar_day(day: u8) -> Option<Self> {
        match day {
            1 => Some(TetDay::Mung1),
            2 => Some(TetDay::Mung2),
            3 => Some(TetDay::Mung3),
            _ => None,
        }
    }

    /// Vietnamese name (`"Mùng Một Tết"`, …).
    pub fn vietnamese_name(&self) -> &'static str {
        match self {
            TetDay::Mung1 => "Mùng Một Tết",
            TetDay::Mung2 => "Mùng Hai Tết",
            TetDay::Mung3 => "Mùng Ba Tết",
        }
    }
}

// ── Astronomical series ───────────────────────────────────────────────────────

/// JD (with fractional part) of the `k`-th new moon after the January
/// 1900 new moon.
fn new_moon_jd(k: i32) -> f64 {
    let t = k as f64 / 1236.85; // centuries from 1900 January 0.5
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = PI / 180.0;

    let mut jd1 = 2_415_020.759_33 + 29.530_588_68 * k as f64 + 0.000_117_8 * t2
        - 0.000_000_155 * t3;
    jd1 += 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * dr).sin();

    // Mean anomalies of sun and moon, moon's argument of latitude.
    let m = 359.2242 + 29.105_356_08 * k as f64 - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    let mpr = 306.0253 + 385.816_918_06 * k as f64 + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    let f = 21.2964 + 390.670_506_46 * k as f64 - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    let mut c1 = (0.1734 - 0.000_393 * t) * (m * dr).sin() + 0.0021 * (2.0 * dr * m).sin();
    c1 -= 0.4068 * (mpr * dr).sin() + 0.0161 * (dr * 2.0 * mpr).sin();
    c1 -= 0.0004 * (dr * 3.0 * mpr).sin();
    c1 += 0.0104 * (dr * 2.0 * f).sin() - 0.0051 * (dr * (m + mpr)).sin();
    c1 -= 0.0074 * (dr * (m - mpr)).sin() + 0.0004 * (dr * (2.0 * f + m)).sin();
    c1 -= 0.0004 * (dr * (2.0 * f - m)).sin() - 0.0006 * (dr * (2.0 * f + mpr)).sin();
    c1 += 0.0010 * (dr * (2.0 * f - mpr)).sin() + 0.0005 * (dr * (2.0 * mpr + m)).sin();

    let deltat = if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    };

    jd1 + c1 - deltat
}

/// Ecliptic longitude of the sun at JD `jd`, in radians normalized to
/// `[0, 2π)`.
fn sun_longitude(jd: f64) -> f64 {
    let t = (jd - 2_451_545.0) / 36525.0; // centuries from J2000.0
    let t2 = t * t;
    let dr = PI / 180.0;

    let m = 357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t * t2;
    let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let mut dl = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * (dr * m).sin();
    dl += (0.019_993 - 0.000_101 * t) * (dr * 2.0 * m).sin() + 0.000_290 * (dr * 3.0 * m).sin();

    let l = (l0 + dl) * dr;
    l - 2.0 * PI * (l / (2.0 * PI)).floor()
}

/// Calendar day (JDN) on which the `k`-th new moon falls in the given
/// timezone.
fn new_moon_day(k: i32, tz: f64) -> i64 {
    (new_moon_jd(k) + 0.5 + tz / 24.0).floor() as i64
}

/// Sun-longitude sector (0–11, 30° each) at local midnight starting the
/// given calendar day. Sector 9 begins at the winter solstice.
fn sun_longitude_sector(day_number: i64, tz: f64) -> u8 {
    let l = sun_longitude(day_number as f64 - 0.5 - tz / 24.0);
    (l / PI * 6.0).floor() as u8
}

/// JDN of the first day of the lunar month containing the winter
/// solstice of `year` ("month 11", the lunar-year anchor).
fn lunar_month_11(year: i32, tz: f64) -> i64 {
    let off = jdn_from_ymd(31, 12, year) - 2_415_021;
    let k = (off as f64 / SYNODIC_MONTH).floor() as i32;
    let mut nm = new_moon_day(k, tz);
    if sun_longitude_sector(nm, tz) >= 9 {
        nm = new_moon_day(k - 1, tz);
    }
    nm
}

/// Offset (in lunations after `a11`) of the leap month, found as the
/// first lunation whose sun-longitude sector repeats.
///
/// Returns `None` if the bounded search does not converge; callers fall
/// back to "no leap month".
fn leap_month_offset(a11: i64, tz: f64) -> Option<i32> {
    let k = ((a11 as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH + 0.5).floor() as i32;
    let mut i = 1;
    let mut arc = sun_longitude_sector(new_moon_day(k + i, tz), tz);
    loop {
        let last = arc;
        i += 1;
        arc = sun_longitude_sector(new_moon_day(k + i, tz), tz);
        if arc == last {
            return Some(i - 1);
        }
        if i >= 14 {
            return None;
        }
    }
}

/// Convert a Gregorian date to the Vietnamese lunar calendar.
///
/// `tz` is the timezone offset in hours ([`VIETNAM_TZ`] for the civil
/// Vietnamese calendar).
pub fn solar_to_lunar(day: u8, month: u8, year: i32, tz: f64) -> LunarDate {
    let day_number = jdn_from_ymd(day, month, year);
    let k = ((day_number as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH).floor() as i32;
    let mut month_start = new_moon_day(k + 1, tz);
    if month_start > day_number {
        month_start = new_moon_day(k, tz);
    }

    let mut a11 = lunar_month_11(year, tz);
    let mut b11 = a11;
    let mut lunar_year;
    if a11 >= month_start {
        lunar_year = year;
        a11 = lunar_month_11(year - 1, tz);
    } else {
        lunar_year = year + 1;
        b11 = lunar_month_11(year + 1, tz);
    }

    let lunar_day = (day_number - month_start + 1) as u8;
    let diff = ((month_start - a11) as f64 / 29.0).floor() as i32;
    let mut leap = false;
    let mut lunar_month = diff + 11;
    if b11 - a11 > 365 {
        if let Some(leap_off) = leap_month_offset(a11, tz) {
            if diff >= leap_off {
                lunar_month = diff + 10;
                if diff == leap_off {
                    leap = true;
                }
            }
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }

    LunarDate {
        day: lunar_day,
        month: lunar_month as u8,
        year: lunar_year,
        leap_month: leap,
    }
}

// ── Naming ────────────────────────────────────────────────────────────────────

// Indexed by year % 10 and year % 12 respectively.
const CAN: [&str; 10] = [
    "Canh", "Tân", "Nhâm", "Quý", "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ",
];
const CHI: [&str; 12] = [
    "Thân", "Dậu", "Tuất", "Hợi", "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi",
];

/// Sexagenary (can-chi) name of a lunar year, e.g. `"Giáp Thìn"` for 2024.
pub fn can_chi_year_name(year: i32) -> String {
    let can = CAN[year.rem_euclid(10) as usize];
    let chi = CHI[year.rem_euclid(12) as usize];
    format!("{can} {chi}")
}

/// Vietnamese name of a lunar month (1 = `"Giêng"` … 12 = `"Chạp"`).
pub fn lunar_month_name(month: u8) -> &'static str {
    match month {
        1 => "Giêng",
        2 => "Hai",
        3 => "Ba",
        4 => "Tư",
        5 => "Năm",
        6 => "Sáu",
        7 => "Bảy",
        8 => "Tám",
        9 => "Chín",
        10 => "Mười",
        11 => "Mười Một",
        12 => "Chạp",
        _ => "?",
    }
}

// ── Caching wrapper ───────────────────────────────────────────────────────────

/// Lunar converter with a bounded per-date cache.
///
/// The new-moon search is iterative and too slow to run per render cell
/// (365+ cells/year); conversions are memoized by date serial. Entries
/// stay valid across Gregorian-year navigation since they are keyed by
/// the date itself.
#[derive(Debug)]
pub struct LunarCalendar {
    timezone_offset: f64,
    cache: BoundedCache<i32, LunarDate>,
}

impl LunarCalendar {
    /// Default cache capacity: a handful of years of daily conversions.
    pub const DEFAULT_CACHE_CAPACITY: usize = 2048;

    /// Converter for the Vietnamese civil calendar (UTC+7).
    pub fn new() -> Self {
        Self::with_config(VIETNAM_TZ, Self::DEFAULT_CACHE_CAPACITY)
    }

    /// Converter with an explicit timezone offset and cache capacity.
    pub fn with_config(timezone_offset: f64, cache_capacity: usize) -> Self {
        Self {
            timezone_offset,
            cache: BoundedCache::new(cache_capacity),
        }
    }

    /// The timezone offset in hours.
    pub fn timezone_offset(&self) -> f64 {
        self.timezone_offset
    }

    /// Convert `date` to its lunar equivalent (cached).
    pub fn lunar_date(&self, date: Date) -> LunarDate {
        let tz = self.timezone_offset;
        self.cache.get_or_insert_with(date.serial(), || {
            let (y, m, d) = date.ymd();
            solar_to_lunar(d, m, y, tz)
        })
    }

    /// Which day of Tết (Mùng 1–3) `date` is, if any.
    pub fn tet_day(&self, date: Date) -> Option<TetDay> {
        let lunar = self.lunar_date(date);
        if lunar.month == 1 && !lunar.leap_month {
            TetDay::from_lunar_day(lunar.day)
        } else {
            None
        }
    }

    /// `true` if `date` is the lunar New Year's Eve (last day of the
    /// non-leap twelfth month; handles 29-day months).
    pub fn is_new_year_eve(&self, date: Date) -> bool {
        let lunar = self.lunar_date(date);
        if lunar.month != 12 || lunar.leap_month {
            return false;
        }
        match date.add_days(1) {
            Ok(tomorrow) => {
                let next = self.lunar_date(tomorrow);
                next.month == 1 && next.day == 1 && !next.leap_month
            }
            Err(_) => false,
        }
    }

    /// `true` if `date` is the first day of its lunar month.
    pub fn is_first_day_of_lunar_month(&self, date: Date) -> bool {
        self.lunar_date(date).day == 1
    }
}

impl Default for LunarCalendar {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn tet_giap_thin_2024() {
        let lunar = solar_to_lunar(10, 2, 2024, VIETNAM_TZ);
        assert_eq!(
            lunar,
            LunarDate {
                day: 1,
                month: 1,
                year: 2024,
                leap_month: false
            }
        );
        assert_eq!(lunar.year_name(), "Giáp Thìn");
        assert_eq!(lunar.month_name(), "Giêng");
    }

    #[test]
    fn tet_days_recent_years() {
        // Published Tết Mùng 1 dates.
        let tets = [
            (2020, 1, 25),
            (2021, 2, 12),
            (2022, 2, 1),
            (2023, 1, 22),
            (2025, 1, 29),
            (2026, 2, 17),
        ];
        for (y, m, d) in tets {
            let lunar = solar_to_lunar(d, m, y, VIETNAM_TZ);
            assert_eq!(
                (lunar.day, lunar.month, lunar.year, lunar.leap_month),
                (1, 1, y, false),
                "Tết of {y}"
            );
        }
    }

    #[test]
    fn leap_month_2023() {
        // Lunar year 2023 (Quý Mão) has a leap month 2 starting March 22.
        let leap_start = solar_to_lunar(22, 3, 2023, VIETNAM_TZ);
        assert_eq!(
            (leap_start.day, leap_start.month, leap_start.leap_month),
            (1, 2, true)
        );
        // The day before belongs to the regular month 2.
        let before = solar_to_lunar(21, 3, 2023, VIETNAM_TZ);
        assert_eq!((before.month, before.leap_month), (2, false));
    }

    #[test]
    fn month_boundary_2020() {
        // New moon of Nov 15, 2020 starts lunar month 10.
        let lunar = solar_to_lunar(15, 11, 2020, VIETNAM_TZ);
        assert_eq!((lunar.day, lunar.month, lunar.year), (1, 10, 2020));
    }

    #[test]
    fn new_year_eve() {
        let cal = LunarCalendar::new();
        // Feb 9, 2024 is the eve of Tết Giáp Thìn.
        assert!(cal.is_new_year_eve(date(2024, 2, 9)));
        assert!(!cal.is_new_year_eve(date(2024, 2, 10)));
        assert!(!cal.is_new_year_eve(date(2024, 2, 8)));
    }

    #[test]
    fn tet_day_helper() {
        let cal = LunarCalendar::new();
        assert_eq!(cal.tet_day(date(2024, 2, 10)), Some(TetDay::Mung1));
        assert_eq!(cal.tet_day(date(2024, 2, 11)), Some(TetDay::Mung2));
        assert_eq!(cal.tet_day(date(2024, 2, 12)), Some(TetDay::Mung3));
        assert_eq!(cal.tet_day(date(2024, 2, 13)), None);
        assert_eq!(cal.tet_day(date(2024, 6, 1)), None);
    }

    #[test]
    fn first_day_of_lunar_month() {
        let cal = LunarCalendar::new();
        assert!(cal.is_first_day_of_lunar_month(date(2020, 11, 15)));
        assert!(!cal.is_first_day_of_lunar_month(date(2020, 11, 16)));
    }

    #[test]
    fn conversion_is_cached() {
        let cal = LunarCalendar::new();
        let d = date(2024, 2, 10);
        let first = cal.lunar_date(d);
        let second = cal.lunar_date(d);
        assert_eq!(first, second);
    }

    #[test]
    fn sun_longitude_vanishes_at_march_equinox() {
        use approx::assert_abs_diff_eq;
        // March equinox 2024: Mar 20, 03:06 UTC.
        let jd = 2_460_389.5 + 3.1 / 24.0;
        let l = sun_longitude(jd);
        assert_abs_diff_eq!(l.sin(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn winter_solstice_opens_sector_nine() {
        // The 2023 solstice is Dec 22, 03:27 UTC (10:27 in Vietnam), so
        // sector 9 starts with the local day of Dec 23.
        let dec22 = jdn_from_ymd(22, 12, 2023);
        assert_eq!(sun_longitude_sector(dec22, VIETNAM_TZ), 8);
        assert_eq!(sun_longitude_sector(dec22 + 1, VIETNAM_TZ), 9);
    }

    #[test]
    fn can_chi_names() {
        assert_eq!(can_chi_year_name(2024), "Giáp Thìn");
        assert_eq!(can_chi_year_name(2023), "Quý Mão");
        assert_eq!(can_chi_year_name(2025), "Ất Tỵ");
        assert_eq!(can_chi_year_name(2026), "Bính Ngọ");
    }

    #[test]
    fn chinese_timezone_shifts_some_dates() {
        // The algorithm takes the offset as a parameter; using UTC+8
        // must still produce a valid month 1 day 1 for Tết 2024 (both
        // calendars agree that year).
        let lunar = solar_to_lunar(10, 2, 2024, 8.0);
        assert_eq!((lunar.day, lunar.month), (1, 1));
    }
}
