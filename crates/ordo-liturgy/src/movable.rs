//! Movable feast calculation.
//!
//! One [`FeastDates`] record per Gregorian year holds every date that
//! depends on Easter or another movable anchor. Every field is a
//! deterministic function of the year (and, for the Ash-Wednesday
//! transfer fields, of the lunar converter); records are computed once
//! per year and cached by the engine.

use crate::rank::FeastRank;
use ordo_core::errors::Result;
use ordo_core::ensure;
use ordo_time::{Date, LunarCalendar, Weekday};

/// The movable feasts and season anchors of one Gregorian year.
///
/// Immutable once computed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeastDates {
    /// The Gregorian year the record belongs to.
    pub year: i32,
    /// Easter Sunday.
    pub easter: Date,
    /// Ash Wednesday: the start of Lent (no-Alleluia, purple). Never
    /// moves, even when the celebration is transferred for Tết.
    pub ash_wednesday: Date,
    /// The day the Ash Wednesday Mass and fast/abstinence obligation are
    /// actually kept. Equals `ash_wednesday` except in Tết-collision
    /// years, when it moves to Mùng 4 Tết.
    pub ash_wednesday_celebration: Date,
    /// `true` when the Ash Wednesday celebration was moved for Tết.
    pub ash_wednesday_transferred: bool,
    /// Explanatory note for the transfer, when it happened.
    pub ash_wednesday_note: Option<String>,
    /// Palm Sunday (Easter − 7).
    pub palm_sunday: Date,
    /// Holy Thursday (Easter − 3).
    pub holy_thursday: Date,
    /// Good Friday (Easter − 2).
    pub good_friday: Date,
    /// Holy Saturday (Easter − 1).
    pub holy_saturday: Date,
    /// Ascension (Easter + 39).
    pub ascension: Date,
    /// Pentecost (Easter + 49).
    pub pentecost: Date,
    /// Trinity Sunday (Pentecost + 7).
    pub trinity: Date,
    /// Corpus Christi (Trinity + 7).
    pub corpus_christi: Date,
    /// Sacred Heart (Corpus Christi + 5).
    pub sacred_heart: Date,
    /// Immaculate Heart of Mary (Sacred Heart + 1).
    pub immaculate_heart: Date,
    /// First Sunday of Advent.
    pub advent_start: Date,
    /// Christ the King (last Ordinary-Time Sunday).
    pub christ_king: Date,
    /// Christmas (fixed December 25).
    pub christmas: Date,
    /// Holy Family (Sunday in the Christmas octave, or December 30).
    pub holy_family: Date,
    /// Epiphany (first Sunday of January; January 8 when January 1 is a
    /// Sunday).
    pub epiphany: Date,
    /// Baptism of the Lord.
    pub baptism_of_lord: Date,
    /// Vietnamese Martyrs Sunday (Christ the King − 7).
    pub vietnamese_martyrs: Date,
    /// Mission Sunday (last Sunday of October − 7).
    pub mission_sunday: Date,
    /// Rosary Sunday (first Sunday on/after October 1).
    pub rosary_sunday: Date,
    /// Annunciation as observed (March 25 with override rules).
    pub annunciation: Date,
    /// St Joseph as observed (March 19 with override rules).
    pub st_joseph: Date,
    /// Immaculate Conception as observed (December 8, +1 on Sunday).
    pub imm_conception: Date,
}

impl FeastDates {
    /// Compute the record for a Gregorian year.
    pub fn for_year(year: i32, lunar: &LunarCalendar) -> Result<FeastDates> {
        ensure!(
            (1900..=2199).contains(&year),
            "year {year} out of range [1900, 2199]"
        );

        let easter = easter_sunday(year)?;
        let ash_wednesday = easter - 46;
        let palm_sunday = easter - 7;

        // Advent / Christmas anchors.
        let christmas = Date::from_ymd(year, 12, 25)?;
        let fourth_advent = (christmas - 1).prev_or_same_weekday(Weekday::Sunday);
        let advent_start = fourth_advent - 21;
        let christ_king = advent_start - 7;

        // Epiphany: the Sunday strictly after January 1, which lands on
        // January 8 when January 1 is itself a Sunday.
        let jan1 = Date::from_ymd(year, 1, 1)?;
        let epiphany = jan1.next_weekday(Weekday::Sunday);
        let baptism_of_lord = if epiphany.day_of_month() >= 7 {
            epiphany + 1
        } else {
            epiphany + 7
        };

        let holy_family = {
            let sunday = christmas.next_weekday(Weekday::Sunday);
            if sunday.month() == 12 {
                sunday
            } else {
                Date::from_ymd(year, 12, 30)?
            }
        };

        // October Sundays.
        let oct1 = Date::from_ymd(year, 10, 1)?;
        let oct31 = Date::from_ymd(year, 10, 31)?;
        let rosary_sunday = oct1.next_or_same_weekday(Weekday::Sunday);
        let mission_sunday = oct31.prev_or_same_weekday(Weekday::Sunday) - 7;

        // Fixed solemnities with their own override rules.
        let annunciation = {
            let nominal = Date::from_ymd(year, 3, 25)?;
            if (palm_sunday..=easter + 7).contains(&nominal) {
                easter + 8
            } else if nominal.is_sunday() && nominal < palm_sunday {
                nominal + 1
            } else {
                nominal
            }
        };
        let st_joseph = {
            let nominal = Date::from_ymd(year, 3, 19)?;
            if (palm_sunday..easter).contains(&nominal) {
                palm_sunday - 1
            } else if nominal.is_sunday() && nominal < palm_sunday {
                nominal + 1
            } else {
                nominal
            }
        };
        let imm_conception = {
            let nominal = Date::from_ymd(year, 12, 8)?;
            if nominal.is_sunday() {
                nominal + 1
            } else {
                nominal
            }
        };

        // Ash-Wednesday/Tết transfer: when Ash Wednesday falls on Mùng
        // 1–3 Tết, the Mass and fast move to Mùng 4; Lent itself still
        // starts on the original date.
        let ash_lunar = lunar.lunar_date(ash_wednesday);
        let collides = ash_lunar.month == 1 && !ash_lunar.leap_month && ash_lunar.day <= 3;
        let (ash_wednesday_celebration, ash_wednesday_transferred, ash_wednesday_note) = if collides
        {
            let celebration = ash_wednesday + (4 - ash_lunar.day as i32);
            let note = format!(
                "Thứ Tư Lễ Tro trùng Mùng {} Tết; thánh lễ và việc giữ chay \
                 kiêng thịt dời sang Mùng 4 Tết ({})",
                ash_lunar.day, celebration
            );
            (celebration, true, Some(note))
        } else {
            (ash_wednesday, false, None)
        };

        Ok(FeastDates {
            year,
            easter,
            ash_wednesday,
            ash_wednesday_celebration,
            ash_wednesday_transferred,
            ash_wednesday_note,
            palm_sunday,
            holy_thursday: easter - 3,
            good_friday: easter - 2,
            holy_saturday: easter - 1,
            ascension: easter + 39,
            pentecost: easter + 49,
            trinity: easter + 56,
            corpus_christi: easter + 63,
            sacred_heart: easter + 68,
            immaculate_heart: easter + 69,
            advent_start,
            christ_king,
            christmas,
            holy_family,
            epiphany,
            baptism_of_lord,
            vietnamese_martyrs: christ_king - 7,
            mission_sunday,
            rosary_sunday,
            annunciation,
            st_joseph,
            imm_conception,
        })
    }

    // ── Window helpers ───────────────────────────────────────────────────────

    /// First Sunday of Lent.
    pub fn first_lent_sunday(&self) -> Date {
        self.ash_wednesday + 4
    }

    /// Divine Mercy Sunday: the last day of the Easter octave.
    pub fn easter_octave_end(&self) -> Date {
        self.easter + 7
    }

    /// Palm Sunday through Holy Saturday.
    pub fn is_holy_week(&self, date: Date) -> bool {
        (self.palm_sunday..=self.holy_saturday).contains(&date)
    }

    /// Holy Thursday through Easter Sunday.
    pub fn is_triduum(&self, date: Date) -> bool {
        (self.holy_thursday..=self.easter).contains(&date)
    }

    /// Easter Sunday through Divine Mercy Sunday.
    pub fn in_easter_octave(&self, date: Date) -> bool {
        (self.easter..=self.easter_octave_end()).contains(&date)
    }

    /// December 25 through January 1 (checked by month/day, so the
    /// January side works without next-year data).
    pub fn in_christmas_octave(&self, date: Date) -> bool {
        let (_, m, d) = date.ymd();
        (m == 12 && d >= 25) || (m == 1 && d == 1)
    }

    /// Privileged late-Advent weekday (December 17–24, not a Sunday).
    pub fn is_late_advent_weekday(&self, date: Date) -> bool {
        let (_, m, d) = date.ymd();
        m == 12 && (17..=24).contains(&d) && !date.is_sunday()
    }

    /// Lenten weekday (inside Lent, not a Sunday, before Holy Thursday).
    pub fn is_lenten_weekday(&self, date: Date) -> bool {
        (self.ash_wednesday..self.holy_thursday).contains(&date) && !date.is_sunday()
    }

    /// Whether `rank` is suppressed outright on `date` (omitted, not
    /// merely demoted).
    pub fn suppresses(&self, rank: FeastRank, date: Date) -> bool {
        let hard = self.is_holy_week(date) || self.is_triduum(date) || self.in_easter_octave(date);
        match rank {
            FeastRank::Trong => false,
            FeastRank::Kinh => hard,
            FeastRank::Nho | FeastRank::NhoKb => {
                hard
                    || self.is_late_advent_weekday(date)
                    || self.is_lenten_weekday(date)
                    || self.in_christmas_octave(date)
            }
        }
    }
}

/// Easter Sunday of a Gregorian year by the anonymous Gregorian
/// computus (Meeus/Jones/Butcher integer arithmetic).
pub fn easter_sunday(year: i32) -> Result<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}
