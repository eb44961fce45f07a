//! Julian Day Number conversions.
//!
//! The JDN is the integer day count used by the lunar converter's
//! astronomical series. Conversion switches from the Julian to the
//! Gregorian calendar at JDN 2299161 (October 15, 1582); dates before
//! the switch use the proleptic Julian formula.

/// JDN of the Gregorian calendar switch (October 15, 1582).
pub const GREGORIAN_SWITCH_JDN: i64 = 2_299_161;

/// JDN of January 1, 1900: the epoch of [`crate::Date`] serial 1.
pub const EPOCH_1900_JDN: i64 = 2_415_021;

/// Compute the Julian Day Number of a calendar day.
///
/// Inputs are a day-of-month, month (1–12), and (astronomical) year.
/// Results before [`GREGORIAN_SWITCH_JDN`] are computed with the Julian
/// calendar formula.
pub fn jdn_from_ymd(day: u8, month: u8, year: i32) -> i64 {
    let d = day as i64;
    let mth = month as i64;
    let a = (14 - mth) / 12;
    let y = year as i64 + 4800 - a;
    let m = mth + 12 * a - 3;
    let jd = d + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    if jd < GREGORIAN_SWITCH_JDN {
        d + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083
    } else {
        jd
    }
}

/// Decompose a Julian Day Number into `(day, month, year)`.
pub fn ymd_from_jdn(jdn: i64) -> (u8, u8, i32) {
    let (b, c) = if jdn > GREGORIAN_SWITCH_JDN - 1 {
        // Gregorian
        let a = jdn + 32044;
        let b = (4 * a + 3) / 146_097;
        (b, a - (b * 146_097) / 4)
    } else {
        // Julian
        (0, jdn + 32082)
    };
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = b * 100 + d - 4800 + m / 10;
    (day as u8, month as u8, year as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_1900() {
        assert_eq!(jdn_from_ymd(1, 1, 1900), EPOCH_1900_JDN);
    }

    #[test]
    fn known_jdn_values() {
        // J2000.0 reference day.
        assert_eq!(jdn_from_ymd(1, 1, 2000), 2_451_545);
        // Tết Giáp Thìn.
        assert_eq!(jdn_from_ymd(10, 2, 2024), 2_460_351);
    }

    #[test]
    fn gregorian_switch() {
        // Oct 4, 1582 (Julian) is immediately followed by Oct 15, 1582.
        assert_eq!(jdn_from_ymd(4, 10, 1582) + 1, jdn_from_ymd(15, 10, 1582));
        assert_eq!(jdn_from_ymd(15, 10, 1582), GREGORIAN_SWITCH_JDN);
    }

    #[test]
    fn roundtrip() {
        for &(d, m, y) in &[
            (1u8, 1u8, 1900i32),
            (29, 2, 2000),
            (28, 2, 2100),
            (31, 12, 2199),
            (10, 2, 2024),
            (15, 10, 1582),
            (4, 10, 1582),
        ] {
            let jdn = jdn_from_ymd(d, m, y);
            assert_eq!(ymd_from_jdn(jdn), (d, m, y), "roundtrip {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn consecutive_days_are_consecutive_jdns() {
        let start = jdn_from_ymd(28, 12, 1999);
        for offset in 0..8 {
            let (d, m, y) = ymd_from_jdn(start + offset);
            assert_eq!(jdn_from_ymd(d, m, y), start + offset);
        }
    }
}
