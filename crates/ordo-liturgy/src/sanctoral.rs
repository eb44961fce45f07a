//! Fixed-date sanctoral calendar and the solemnity transfer engine.
//!
//! The table is the General Roman Calendar as kept in Vietnam, keyed by
//! month and day. It is loaded once into an immutable map at first use.
//!
//! St Joseph (Mar 19), the Annunciation (Mar 25), and the Immaculate
//! Conception (Dec 8) are *not* in this table: their observed dates
//! carry their own override rules and live on [`FeastDates`].

use crate::movable::FeastDates;
use crate::rank::{Category, FeastRank};
use crate::season::Color;
use ordo_time::Date;

use std::collections::HashMap;
use std::sync::OnceLock;

/// A fixed-date celebration from the sanctoral calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedSaint {
    /// Vietnamese name as printed in the ordo.
    pub name: &'static str,
    /// Rank (Trọng / Kính / Nhớ / Nhớ không buộc).
    pub rank: FeastRank,
    /// Vestment color.
    pub color: Color,
    /// Who the celebration is of.
    pub category: Category,
}

/// A solemnity observed away from its nominal date.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferredFeast {
    /// The saint record.
    pub saint: &'static FixedSaint,
    /// The nominal (impeded) date.
    pub original_date: Date,
}

const fn saint(name: &'static str, rank: FeastRank, color: Color, category: Category) -> FixedSaint {
    FixedSaint {
        name,
        rank,
        color,
        category,
    }
}

use Category::{Lord, Mary, Other, Saint};
use Color::{Red, White};
use FeastRank::{Kinh, Nho, NhoKb, Trong};

/// The fixed sanctoral table, one entry per (month, day).
const SAINTS: &[((u8, u8), FixedSaint)] = &[
    // January
    ((1, 1), saint("Đức Maria, Mẹ Thiên Chúa", Trong, White, Mary)),
    ((1, 2), saint("Thánh Basiliô Cả và thánh Grêgôriô Nazianzênô", Nho, White, Saint)),
    ((1, 17), saint("Thánh Antôn, viện phụ", Nho, White, Saint)),
    ((1, 21), saint("Thánh Anê, trinh nữ tử đạo", Nho, Red, Saint)),
    ((1, 24), saint("Thánh Phanxicô Salêsiô, giám mục tiến sĩ", Nho, White, Saint)),
    ((1, 25), saint("Thánh Phaolô tông đồ trở lại", Kinh, White, Saint)),
    ((1, 26), saint("Thánh Timôthêô và thánh Titô, giám mục", Nho, White, Saint)),
    ((1, 28), saint("Thánh Tôma Aquinô, linh mục tiến sĩ", Nho, White, Saint)),
    ((1, 31), saint("Thánh Gioan Boscô, linh mục", Nho, White, Saint)),
    // February
    ((2, 2), saint("Dâng Chúa Giêsu Trong Đền Thánh", Kinh, White, Lord)),
    ((2, 5), saint("Thánh Agata, trinh nữ tử đạo", Nho, Red, Saint)),
    ((2, 6), saint("Thánh Phaolô Miki và các bạn tử đạo", Nho, Red, Saint)),
    ((2, 11), saint("Đức Mẹ Lộ Đức", NhoKb, White, Mary)),
    ((2, 14), saint("Thánh Cyrillô, đan sĩ và thánh Mêtôđiô, giám mục", Nho, White, Saint)),
    ((2, 22), saint("Lập Tông Tòa Thánh Phêrô", Kinh, White, Saint)),
    // March
    ((3, 7), saint("Thánh Perpetua và thánh Fêlicita, tử đạo", Nho, Red, Saint)),
    // April
    ((4, 7), saint("Thánh Gioan La San, linh mục", Nho, White, Saint)),
    ((4, 25), saint("Thánh Máccô, tác giả sách Tin Mừng", Kinh, Red, Saint)),
    ((4, 29), saint("Thánh Catarina Siêna, trinh nữ tiến sĩ", Nho, White, Saint)),
    // May
    ((5, 1), saint("Thánh Giuse Thợ", NhoKb, White, Saint)),
    ((5, 3), saint("Thánh Philipphê và thánh Giacôbê, tông đồ", Kinh, Red, Saint)),
    ((5, 14), saint("Thánh Matthia, tông đồ", Kinh, Red, Saint)),
    ((5, 31), saint("Đức Maria Thăm Viếng Bà Êlisabét", Kinh, White, Mary)),
    // June
    ((6, 1), saint("Thánh Justinô, tử đạo", Nho, Red, Saint)),
    ((6, 3), saint("Thánh Carôlô Lwanga và các bạn tử đạo", Nho, Red, Saint)),
    ((6, 5), saint("Thánh Bônifatiô, giám mục tử đạo", Nho, Red, Saint)),
    ((6, 11), saint("Thánh Barnaba, tông đồ", Nho, Red, Saint)),
    ((6, 13), saint("Thánh Antôn Pađôva, linh mục tiến sĩ", Nho, White, Saint)),
    ((6, 21), saint("Thánh Luy Gonzaga, tu sĩ", Nho, White, Saint)),
    ((6, 24), saint("Sinh Nhật Thánh Gioan Tẩy Giả", Trong, White, Saint)),
    ((6, 28), saint("Thánh Irênê, giám mục tử đạo", Nho, Red, Saint)),
    ((6, 29), saint("Thánh Phêrô và thánh Phaolô, tông đồ", Trong, Red, Saint)),
    ((6, 30), saint("Các thánh tử đạo tiên khởi của giáo đoàn Rôma", NhoKb, Red, Saint)),
    // July
    ((7, 3), saint("Thánh Tôma, tông đồ", Kinh, Red, Saint)),
    ((7, 11), saint("Thánh Bênêđictô, viện phụ", Nho, White, Saint)),
    ((7, 15), saint("Thánh Bônaventura, giám mục tiến sĩ", Nho, White, Saint)),
    ((7, 22), saint("Thánh Maria Mađalêna", Kinh, White, Saint)),
    ((7, 25), saint("Thánh Giacôbê, tông đồ", Kinh, Red, Saint)),
    ((7, 26), saint("Thánh Gioakim và thánh Anna, song thân Đức Maria", Nho, White, Saint)),
    ((7, 29), saint("Thánh Mácta, Maria và Ladarô", Nho, White, Saint)),
    ((7, 31), saint("Thánh Ignatiô Loyola, linh mục", Nho, White, Saint)),
    // August
    ((8, 1), saint("Thánh Anphongsô Maria Liguori, giám mục tiến sĩ", Nho, White, Saint)),
    ((8, 4), saint("Thánh Gioan Maria Vianney, linh mục", Nho, White, Saint)),
    ((8, 6), saint("Chúa Hiển Dung", Kinh, White, Lord)),
    ((8, 8), saint("Thánh Đa Minh, linh mục", Nho, White, Saint)),
    ((8, 10), saint("Thánh Laurensô, phó tế tử đạo", Kinh, Red, Saint)),
    ((8, 11), saint("Thánh Clara, trinh nữ", Nho, White, Saint)),
    ((8, 14), saint("Thánh Maximilianô Maria Kolbê, linh mục tử đạo", Nho, Red, Saint)),
    ((8, 15), saint("Đức Mẹ Hồn Xác Lên Trời", Trong, White, Mary)),
    ((8, 20), saint("Thánh Bênađô, viện phụ tiến sĩ", Nho, White, Saint)),
    ((8, 21), saint("Thánh Piô X, giáo hoàng", Nho, White, Saint)),
    ((8, 22), saint("Đức Maria Nữ Vương", Nho, White, Mary)),
    ((8, 24), saint("Thánh Batôlômêô, tông đồ", Kinh, Red, Saint)),
    ((8, 27), saint("Thánh Mônica", Nho, White, Saint)),
    ((8, 28), saint("Thánh Augustinô, giám mục tiến sĩ", Nho, White, Saint)),
    ((8, 29), saint("Thánh Gioan Tẩy Giả bị trảm quyết", Nho, Red, Saint)),
    // September
    ((9, 3), saint("Thánh Grêgôriô Cả, giáo hoàng tiến sĩ", Nho, White, Saint)),
    ((9, 8), saint("Sinh Nhật Đức Maria", Kinh, White, Mary)),
    ((9, 13), saint("Thánh Gioan Kim Khẩu, giám mục tiến sĩ", Nho, White, Saint)),
    ((9, 14), saint("Suy Tôn Thánh Giá", Kinh, Red, Lord)),
    ((9, 15), saint("Đức Mẹ Sầu Bi", Nho, White, Mary)),
    ((9, 16), saint("Thánh Cornêliô, giáo hoàng và thánh Cyprianô, giám mục", Nho, Red, Saint)),
    ((9, 21), saint("Thánh Matthêô, tông đồ, tác giả sách Tin Mừng", Kinh, Red, Saint)),
    ((9, 27), saint("Thánh Vinh Sơn Phaolô, linh mục", Nho, White, Saint)),
    ((9, 29), saint("Các Tổng Lãnh Thiên Thần Micae, Gabriel và Raphael", Kinh, White, Other)),
    ((9, 30), saint("Thánh Giêrônimô, linh mục tiến sĩ", Nho, White, Saint)),
    // October
    ((10, 1), saint("Thánh Têrêsa Hài Đồng Giêsu, trinh nữ tiến sĩ", Nho, White, Saint)),
    ((10, 2), saint("Các Thiên Thần Bản Mệnh", Nho, White, Other)),
    ((10, 4), saint("Thánh Phanxicô Assisi", Nho, White, Saint)),
    ((10, 7), saint("Đức Mẹ Mân Côi", Nho, White, Mary)),
    ((10, 15), saint("Thánh Têrêsa Giêsu, trinh nữ tiến sĩ", Nho, White, Saint)),
    ((10, 17), saint("Thánh Ignatiô Antiôkia, giám mục tử đạo", Nho, Red, Saint)),
    ((10, 18), saint("Thánh Luca, tác giả sách Tin Mừng", Kinh, Red, Saint)),
    ((10, 28), saint("Thánh Simon và thánh Giuđa, tông đồ", Kinh, Red, Saint)),
    // November
    ((11, 1), saint("Các Thánh Nam Nữ", Trong, White, Saint)),
    ((11, 2), saint("Cầu Cho Các Tín Hữu Đã Qua Đời", Trong, Color::Purple, Other)),
    ((11, 4), saint("Thánh Carôlô Borrômêô, giám mục", Nho, White, Saint)),
    ((11, 9), saint("Cung Hiến Đền Thờ Latêranô", Kinh, White, Other)),
    ((11, 10), saint("Thánh Lêô Cả, giáo hoàng tiến sĩ", Nho, White, Saint)),
    ((11, 11), saint("Thánh Máctinô thành Tours, giám mục", Nho, White, Saint)),
    ((11, 12), saint("Thánh Jôsaphat, giám mục tử đạo", Nho, Red, Saint)),
    ((11, 21), saint("Đức Mẹ Dâng Mình Trong Đền Thờ", Nho, White, Mary)),
    ((11, 22), saint("Thánh Cêcilia, trinh nữ tử đạo", Nho, Red, Saint)),
    ((11, 24), saint("Các Thánh Tử Đạo Việt Nam", Kinh, Red, Saint)),
    ((11, 30), saint("Thánh Anrê, tông đồ", Kinh, Red, Saint)),
    // December
    ((12, 3), saint("Thánh Phanxicô Xaviê, linh mục", Nho, White, Saint)),
    ((12, 7), saint("Thánh Ambrôsiô, giám mục tiến sĩ", Nho, White, Saint)),
    ((12, 13), saint("Thánh Lucia, trinh nữ tử đạo", Nho, Red, Saint)),
    ((12, 14), saint("Thánh Gioan Thánh Giá, linh mục tiến sĩ", Nho, White, Saint)),
    ((12, 21), saint("Thánh Phêrô Canisiô, linh mục tiến sĩ", NhoKb, White, Saint)),
    ((12, 23), saint("Thánh Gioan Kêty, linh mục", NhoKb, White, Saint)),
    ((12, 26), saint("Thánh Stêphanô, tử đạo tiên khởi", Kinh, Red, Saint)),
    ((12, 27), saint("Thánh Gioan, tông đồ, tác giả sách Tin Mừng", Kinh, White, Saint)),
    ((12, 28), saint("Các Thánh Anh Hài, tử đạo", Kinh, Red, Saint)),
];

fn table() -> &'static HashMap<(u8, u8), &'static FixedSaint> {
    static TABLE: OnceLock<HashMap<(u8, u8), &'static FixedSaint>> = OnceLock::new();
    TABLE.get_or_init(|| SAINTS.iter().map(|(key, s)| (*key, s)).collect())
}

/// Look up the fixed celebration for a month/day, if any.
pub fn lookup_fixed(month: u8, day: u8) -> Option<&'static FixedSaint> {
    table().get(&(month, day)).copied()
}

/// Where a solemnity nominally on `original` is actually observed.
///
/// Returns `None` when it stands on its own date. Mary Mother of God
/// (Jan 1) and All Souls (Nov 2) are never moved: the first is the
/// octave-day celebration itself and the second is kept even on Sunday.
pub fn transfer_date_for(original: Date, feasts: &FeastDates) -> Option<Date> {
    let (year, m, d) = original.ymd();
    if (m, d) == (1, 1) || (m, d) == (11, 2) {
        return None;
    }
    if feasts.is_holy_week(original) || feasts.in_easter_octave(original) {
        // Monday after the Easter octave; the Monday right after Easter
        // is still inside the octave.
        return Some(feasts.easter_octave_end() + 1);
    }
    if feasts.in_christmas_octave(original) {
        // Jan 2 of the year the octave runs into.
        let jan2_year = if m == 12 { year + 1 } else { year };
        return Date::from_ymd(jan2_year, 1, 2).ok();
    }
    if original.is_sunday() {
        return Some(original + 1);
    }
    None
}

/// Find a transferred solemnity landing on `date`, if any.
///
/// A bounded backward scan: the nine preceding days cover every
/// destination a fixed solemnity can reach (Sunday to Monday is one
/// day, Christmas octave to Jan 2 at most eight).
pub fn transferred_feast_landing_on(date: Date, feasts: &FeastDates) -> Option<TransferredFeast> {
    for offset in 1..=9 {
        let Ok(original) = date.add_days(-offset) else {
            break;
        };
        let (_, m, d) = original.ymd();
        let Some(s) = lookup_fixed(m, d) else {
            continue;
        };
        if s.rank != FeastRank::Trong {
            continue;
        }
        if transfer_date_for(original, feasts) == Some(date) {
            return Some(TransferredFeast {
                saint: s,
                original_date: original,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_time::LunarCalendar;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn feasts(year: i32) -> FeastDates {
        FeastDates::for_year(year, &LunarCalendar::new()).unwrap()
    }

    #[test]
    fn lookup_hits_and_misses() {
        let assumption = lookup_fixed(8, 15).unwrap();
        assert_eq!(assumption.rank, FeastRank::Trong);
        assert_eq!(assumption.category, Category::Mary);
        assert!(lookup_fixed(8, 16).is_none());
        // Movable-rule solemnities are deliberately absent.
        assert!(lookup_fixed(3, 19).is_none());
        assert!(lookup_fixed(3, 25).is_none());
        assert!(lookup_fixed(12, 8).is_none());
    }

    #[test]
    fn one_entry_per_month_day() {
        let mut seen = std::collections::HashSet::new();
        for (key, _) in SAINTS {
            assert!(seen.insert(*key), "duplicate sanctoral key {key:?}");
        }
    }

    #[test]
    fn solemnity_on_sunday_moves_to_monday() {
        // Aug 15, 2021 is a Sunday.
        let f = feasts(2021);
        let nominal = date(2021, 8, 15);
        assert_eq!(transfer_date_for(nominal, &f), Some(date(2021, 8, 16)));
        let landed = transferred_feast_landing_on(date(2021, 8, 16), &f).unwrap();
        assert_eq!(landed.original_date, nominal);
        assert_eq!(landed.saint.name, "Đức Mẹ Hồn Xác Lên Trời");
    }

    #[test]
    fn solemnity_on_weekday_stands() {
        let f = feasts(2024);
        assert_eq!(transfer_date_for(date(2024, 8, 15), &f), None);
        assert!(transferred_feast_landing_on(date(2024, 8, 16), &f).is_none());
    }

    #[test]
    fn all_souls_never_moves() {
        // Nov 2, 2025 is a Sunday.
        let f = feasts(2025);
        assert_eq!(transfer_date_for(date(2025, 11, 2), &f), None);
    }

    #[test]
    fn mary_mother_of_god_never_moves() {
        // Jan 1, 2023 is a Sunday inside the Christmas octave.
        let f = feasts(2023);
        assert_eq!(transfer_date_for(date(2023, 1, 1), &f), None);
    }

    #[test]
    fn holy_week_destination_is_after_the_octave() {
        let f = feasts(2024);
        // A hypothetical solemnity on Palm Sunday 2024 (Mar 24) would
        // land on Apr 8, not on Easter Monday.
        assert_eq!(
            transfer_date_for(date(2024, 3, 24), &f),
            Some(date(2024, 4, 8))
        );
        assert_eq!(
            transfer_date_for(date(2024, 4, 2), &f),
            Some(date(2024, 4, 8))
        );
    }
}
