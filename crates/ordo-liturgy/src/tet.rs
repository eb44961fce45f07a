//! Tết overlay.
//!
//! The lunar New Year celebrations (Giao Thừa and Mùng 1–3) carry
//! nominal ranks and conditionally override the already-resolved day:
//!
//! * inside the Triduum or Holy Week, Tết is never celebrated
//!   liturgically and is recorded as a note only;
//! * inside Lent (not a Sunday), it is celebrated demoted to
//!   feast-equivalent rank;
//! * on an Ordinary-Time Sunday, it is celebrated at full solemnity
//!   rank and wins outright;
//! * otherwise it wins when its rank is at or above the resolved
//!   celebration's, or when the day is a bare placeholder.

use crate::day_info::DayInfo;
use crate::movable::FeastDates;
use crate::precedence::{Candidate, Commemoration};
use crate::season::{Color, Season};
use ordo_time::{Date, LunarCalendar, TetDay};

/// Nominal precedence rank of the Mùng 1–3 Masses.
const TET_RANK: u8 = 3;

/// Nominal precedence rank of the New Year's Eve Mass.
const TET_EVE_RANK: u8 = 6;

/// Mass theme names for the three days of Tết.
pub fn tet_mass_name(day: TetDay) -> &'static str {
    match day {
        TetDay::Mung1 => "Mùng Một Tết: Cầu Bình An Cho Năm Mới",
        TetDay::Mung2 => "Mùng Hai Tết: Kính Nhớ Tổ Tiên Và Ông Bà Cha Mẹ",
        TetDay::Mung3 => "Mùng Ba Tết: Thánh Hóa Công Ăn Việc Làm",
    }
}

/// Apply the Tết overlay to a resolved day. `prior_winner` is the
/// celebration that won the temporal/sanctoral resolution.
pub fn apply_tet(
    info: &mut DayInfo,
    prior_winner: &Candidate,
    date: Date,
    feasts: &FeastDates,
    lunar: &LunarCalendar,
) {
    let tet = lunar.tet_day(date);
    let eve = lunar.is_new_year_eve(date);
    if tet.is_none() && !eve {
        return;
    }

    info.is_tet = tet;
    info.tet_lunar = Some(lunar.lunar_date(date));

    let (key, name, nominal_rank) = match tet {
        Some(day) => (
            format!("tet-{}", day.number()),
            tet_mass_name(day).to_string(),
            TET_RANK,
        ),
        None => ("tet-eve".to_string(), "Lễ Giao Thừa".to_string(), TET_EVE_RANK),
    };

    if feasts.is_triduum(date) || feasts.is_holy_week(date) {
        info.tet_note = Some(format!(
            "{name} không cử hành phụng vụ trong Tuần Thánh, chỉ ghi nhận"
        ));
        return;
    }

    let season = Season::of(date, feasts);
    let ordinary_sunday = season == Season::OrdinaryTime && date.is_sunday();
    let demoted_in_lent = season == Season::Lent && !date.is_sunday();
    let effective_rank = if ordinary_sunday {
        TET_RANK
    } else if demoted_in_lent {
        nominal_rank.max(7)
    } else {
        nominal_rank
    };

    let current_rank = info.rank_code.unwrap_or(13);
    let bare = prior_winner.placeholder && prior_winner.rank >= 6;
    let wins = ordinary_sunday || effective_rank <= current_rank || bare;

    if !wins {
        info.tet_note = Some(format!(
            "{name} chỉ ghi nhận, không thay thế cử hành phụng vụ trong ngày"
        ));
        return;
    }

    // A suppressed Sunday keeps its label as a commemoration even
    // though a bare Sunday has no `special` entry of its own.
    let prev_name = info.special.take().or_else(|| {
        if prior_winner.placeholder && date.is_sunday() {
            Some(prior_winner.name.clone())
        } else {
            None
        }
    });
    if let Some(prev) = prev_name {
        if prev != name {
            info.commemorations.insert(
                0,
                Commemoration {
                    name: prev,
                    grade: prior_winner.grade,
                },
            );
        }
    }
    info.special = Some(name);
    info.color = Color::White;
    info.rank_code = Some(effective_rank);
    info.winner_key = Some(key);
    match &mut info.precedence_reason {
        Some(reason) => reason.push_str("; tết override"),
        None => info.precedence_reason = Some("tết override".to_string()),
    }
}
