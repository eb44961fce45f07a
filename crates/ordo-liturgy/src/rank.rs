//! Celebration ranks, categories, and grades.
//!
//! `FeastRank` is the rank printed in the ordo (Lễ Trọng / Lễ Kính /
//! Lễ Nhớ / Lễ Nhớ Không Buộc); `Category` and `Grade` are the
//! tie-break dimensions of the precedence engine.

/// Rank of a sanctoral celebration as printed in the ordo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeastRank {
    /// Lễ Trọng: solemnity.
    Trong,
    /// Lễ Kính: feast.
    Kinh,
    /// Lễ Nhớ: obligatory memorial.
    Nho,
    /// Lễ Nhớ Không Buộc: optional memorial.
    NhoKb,
}

impl FeastRank {
    /// Vietnamese rank name.
    pub fn vietnamese_name(&self) -> &'static str {
        match self {
            FeastRank::Trong => "Lễ Trọng",
            FeastRank::Kinh => "Lễ Kính",
            FeastRank::Nho => "Lễ Nhớ",
            FeastRank::NhoKb => "Lễ Nhớ Không Buộc",
        }
    }

    /// The grade this rank celebrates at.
    pub fn grade(&self) -> Grade {
        match self {
            FeastRank::Trong => Grade::Solemnity,
            FeastRank::Kinh => Grade::Feast,
            FeastRank::Nho | FeastRank::NhoKb => Grade::Memorial,
        }
    }
}

impl std::fmt::Display for FeastRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.vietnamese_name())
    }
}

/// Who a celebration is of: the first precedence tie-break.
///
/// Lower weight wins: the Lord beats Mary beats the saints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Celebrations of the Lord.
    Lord,
    /// Celebrations of the Blessed Virgin Mary.
    Mary,
    /// Celebrations of saints.
    Saint,
    /// Everything else (bare Sundays, weekdays, dedications).
    Other,
}

impl Category {
    /// Tie-break weight (lower wins).
    pub fn weight(&self) -> u8 {
        match self {
            Category::Lord => 0,
            Category::Mary => 1,
            Category::Saint => 2,
            Category::Other => 3,
        }
    }
}

/// How solemnly a celebration is kept: the second precedence tie-break.
///
/// Higher weight wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    /// A bare weekday or Sunday placeholder.
    Weekday,
    /// Memorial.
    Memorial,
    /// Feast.
    Feast,
    /// Solemnity.
    Solemnity,
}

impl Grade {
    /// Tie-break weight (higher wins).
    pub fn weight(&self) -> u8 {
        match self {
            Grade::Weekday => 0,
            Grade::Memorial => 1,
            Grade::Feast => 2,
            Grade::Solemnity => 3,
        }
    }
}
