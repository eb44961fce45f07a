//! The caching liturgical calendar engine.
//!
//! Ties the pieces together for one date: movable feasts for the year
//! (cached), day-code classification, sanctoral lookup with suppression
//! and transfer, precedence resolution, and the Tết overlay. All
//! results are pure derivations of the date, so every cache here is a
//! best-effort memoization layer.

use crate::cycle::{SundayCycle, WeekdayCycle};
use crate::day_code;
use crate::day_info::{DayInfo, SaintEntry, VigilInfo};
use crate::movable::FeastDates;
use crate::precedence::{self, Candidate};
use crate::rank::{Category, FeastRank, Grade};
use crate::sanctoral;
use crate::season::{Color, Season};
use crate::tet;
use ordo_core::errors::Result;
use ordo_core::BoundedCache;
use ordo_time::{Date, LunarCalendar};

use std::sync::Arc;

/// Engine construction parameters.
///
/// Cache capacities are injectable so tests can run with effectively
/// no caching; correctness never depends on them.
#[derive(Debug, Clone, Copy)]
pub struct CalendarConfig {
    /// Timezone offset for the lunar converter (7.0 for Vietnam).
    pub timezone_offset_hours: f64,
    /// Capacity of the per-year movable-feast cache.
    pub year_cache_capacity: usize,
    /// Capacity of the per-date day-info cache.
    pub day_cache_capacity: usize,
    /// Capacity of the per-date lunar conversion cache.
    pub lunar_cache_capacity: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone_offset_hours: ordo_time::lunar::VIETNAM_TZ,
            year_cache_capacity: 8,
            day_cache_capacity: 800,
            lunar_cache_capacity: LunarCalendar::DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// The liturgical calendar engine for Vietnam.
#[derive(Debug)]
pub struct LiturgicalCalendar {
    lunar: LunarCalendar,
    years: BoundedCache<i32, Arc<FeastDates>>,
    days: BoundedCache<i32, DayInfo>,
}

impl LiturgicalCalendar {
    /// Engine with the default (Vietnam) configuration.
    pub fn new() -> Self {
        Self::with_config(CalendarConfig::default())
    }

    /// Engine with explicit configuration.
    pub fn with_config(config: CalendarConfig) -> Self {
        Self {
            lunar: LunarCalendar::with_config(
                config.timezone_offset_hours,
                config.lunar_cache_capacity,
            ),
            years: BoundedCache::new(config.year_cache_capacity),
            days: BoundedCache::new(config.day_cache_capacity),
        }
    }

    /// The lunar converter in use.
    pub fn lunar(&self) -> &LunarCalendar {
        &self.lunar
    }

    /// Movable feasts and season anchors of a year (`getLiturgicalData`).
    pub fn year_data(&self, year: i32) -> Result<Arc<FeastDates>> {
        if let Some(data) = self.years.get(&year) {
            return Ok(data);
        }
        let data = Arc::new(FeastDates::for_year(year, &self.lunar)?);
        self.years.insert(year, Arc::clone(&data));
        Ok(data)
    }

    /// Fully resolved record for a date (`getDayInfo`).
    pub fn day_info(&self, date: Date) -> Result<DayInfo> {
        if let Some(cached) = self.days.get(&date.serial()) {
            return Ok(cached);
        }
        let info = self.compute_day_info(date)?;
        self.days.insert(date.serial(), info.clone());
        Ok(info)
    }

    /// Reading-table lookup key for a date (`getLiturgicalDayCode`).
    pub fn day_code(&self, date: Date) -> Result<String> {
        let feasts = self.year_data(date.year())?;
        Ok(day_code::day_code(date, &feasts, &self.lunar))
    }

    /// Human-readable week description for a date.
    pub fn week_label(&self, date: Date) -> Result<String> {
        let feasts = self.year_data(date.year())?;
        Ok(day_code::week_label(date, &feasts, &self.lunar))
    }

    /// Sunday lectionary cycle in effect on a date.
    pub fn sunday_cycle(&self, date: Date) -> Result<SundayCycle> {
        let feasts = self.year_data(date.year())?;
        Ok(SundayCycle::for_date(date, &feasts))
    }

    /// Vigil Mass information, for the four solemnities that have one.
    pub fn vigil_info(&self, date: Date) -> Result<Option<VigilInfo>> {
        let feasts = self.year_data(date.year())?;
        let (_, m, d) = date.ymd();
        let vigil = if m == 12 && d == 24 {
            Some(VigilInfo {
                vigil_name: "Lễ Vọng Giáng Sinh".to_string(),
                vigil_code: "82412".to_string(),
                main_feast_code: "22512".to_string(),
            })
        } else if date == feasts.holy_saturday {
            Some(VigilInfo {
                vigil_name: "Canh Thức Vượt Qua".to_string(),
                vigil_code: "3066".to_string(),
                main_feast_code: "4010".to_string(),
            })
        } else if date == feasts.pentecost - 1 {
            Some(VigilInfo {
                vigil_name: "Lễ Vọng Chúa Thánh Thần Hiện Xuống".to_string(),
                vigil_code: "5000".to_string(),
                main_feast_code: "5001".to_string(),
            })
        } else if m == 10 && d == 31 {
            Some(VigilInfo {
                vigil_name: "Lễ Vọng Các Thánh Nam Nữ".to_string(),
                vigil_code: "83110".to_string(),
                main_feast_code: "70111".to_string(),
            })
        } else {
            None
        };
        Ok(vigil)
    }

    /// Drop the per-date cache (year navigation). The per-year and
    /// lunar caches stay valid since they are keyed by their own
    /// year/date.
    pub fn clear_day_cache(&self) {
        self.days.clear();
    }

    fn compute_day_info(&self, date: Date) -> Result<DayInfo> {
        let feasts = self.year_data(date.year())?;
        let season = Season::of(date, &feasts);
        let code = day_code::day_code(date, &feasts, &self.lunar);
        let week_label = day_code::week_label(date, &feasts, &self.lunar);
        let temporal = precedence::temporal_candidate(date, &feasts, season);

        let mut saints: Vec<SaintEntry> = Vec::new();
        let mut competitor: Option<Candidate> = None;

        // Solemnities whose observed date carries its own override rule.
        if let Some(c) = movable_solemnity(date, &feasts) {
            saints.push(SaintEntry {
                name: c.name.clone(),
                rank: FeastRank::Trong,
                color: c.color,
            });
            competitor = Some(c);
        }

        // A fixed solemnity transferred onto this date.
        if competitor.is_none() {
            if let Some(tf) = sanctoral::transferred_feast_landing_on(date, &feasts) {
                saints.push(SaintEntry {
                    name: tf.saint.name.to_string(),
                    rank: tf.saint.rank,
                    color: tf.saint.color,
                });
                competitor = Some(precedence::sanctoral_candidate(tf.saint, tf.original_date));
            }
        }

        // The fixed celebration of this month-day, unless suppressed or
        // itself transferred away.
        let (_, m, d) = date.ymd();
        if let Some(s) = sanctoral::lookup_fixed(m, d) {
            let transferred_away = s.rank == FeastRank::Trong
                && sanctoral::transfer_date_for(date, &feasts).is_some();
            if !transferred_away && !feasts.suppresses(s.rank, date) {
                saints.push(SaintEntry {
                    name: s.name.to_string(),
                    rank: s.rank,
                    color: s.color,
                });
                if competitor.is_none() {
                    competitor = Some(precedence::sanctoral_candidate(s, date));
                }
            }
        }

        let resolution = precedence::resolve(temporal, competitor, date);
        let winner = resolution.winner;

        let mut info = DayInfo {
            date,
            season,
            color: winner.color,
            week_label,
            day_code: code,
            sunday_cycle: SundayCycle::for_date(date, &feasts),
            weekday_cycle: WeekdayCycle::for_year(date.year()),
            special: if winner.placeholder {
                None
            } else {
                Some(winner.name.clone())
            },
            rank_code: Some(winner.rank),
            saints,
            commemorations: resolution.commemorations,
            is_tet: None,
            tet_note: None,
            tet_lunar: None,
            ash_wednesday_transferred: false,
            ash_wednesday_note: None,
            winner_key: Some(winner.key.clone()),
            precedence_reason: Some(resolution.reason),
        };

        if feasts.ash_wednesday_transferred
            && (feasts.ash_wednesday..=feasts.ash_wednesday_celebration).contains(&date)
        {
            info.ash_wednesday_transferred = true;
            info.ash_wednesday_note = feasts.ash_wednesday_note.clone();
        }

        tet::apply_tet(&mut info, &winner, date, &feasts, &self.lunar);
        Ok(info)
    }
}

impl Default for LiturgicalCalendar {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate for the three solemnities observed on dates computed with
/// their own override rules (kept out of the fixed table).
fn movable_solemnity(date: Date, feasts: &FeastDates) -> Option<Candidate> {
    let (key, name, category) = if date == feasts.annunciation {
        ("annunciation", "Lễ Truyền Tin", Category::Lord)
    } else if date == feasts.st_joseph {
        (
            "st-joseph",
            "Thánh Giuse, Bạn Trăm Năm Đức Maria",
            Category::Saint,
        )
    } else if date == feasts.imm_conception {
        (
            "imm-conception",
            "Đức Mẹ Vô Nhiễm Nguyên Tội",
            Category::Mary,
        )
    } else {
        return None;
    };
    Some(Candidate {
        key: key.to_string(),
        name: name.to_string(),
        category,
        grade: Grade::Solemnity,
        rank: 3,
        color: Color::White,
        placeholder: false,
    })
}
