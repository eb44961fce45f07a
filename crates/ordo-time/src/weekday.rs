//! `Weekday`: day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7). The liturgical
/// day-code convention counts Sunday as 0 instead; see
/// [`Weekday::liturgical_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// The digit used in liturgical day codes: Sunday = 0, Monday = 1,
    /// …, Saturday = 6.
    pub fn liturgical_number(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Return `true` if this is Sunday.
    pub fn is_sunday(&self) -> bool {
        matches!(self, Weekday::Sunday)
    }

    /// Vietnamese weekday name (`"Chúa Nhật"`, `"Thứ Hai"`, …).
    pub fn vietnamese_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Thứ Hai",
            Weekday::Tuesday => "Thứ Ba",
            Weekday::Wednesday => "Thứ Tư",
            Weekday::Thursday => "Thứ Năm",
            Weekday::Friday => "Thứ Sáu",
            Weekday::Saturday => "Thứ Bảy",
            Weekday::Sunday => "Chúa Nhật",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.vietnamese_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_roundtrip() {
        for n in 1..=7u8 {
            assert_eq!(Weekday::from_ordinal(n).unwrap().ordinal(), n);
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn liturgical_numbering_starts_at_sunday() {
        assert_eq!(Weekday::Sunday.liturgical_number(), 0);
        assert_eq!(Weekday::Monday.liturgical_number(), 1);
        assert_eq!(Weekday::Saturday.liturgical_number(), 6);
    }

    #[test]
    fn vietnamese_names() {
        assert_eq!(Weekday::Sunday.vietnamese_name(), "Chúa Nhật");
        assert_eq!(Weekday::Wednesday.vietnamese_name(), "Thứ Tư");
    }
}
