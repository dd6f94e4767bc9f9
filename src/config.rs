// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Business-day configuration.
//!
//! Two types split the configuration lifecycle:
//!
//! - [`Config`] is the plain, editable record: business weekdays, the daily
//!   work window, and the holiday list. It performs no computation.
//! - [`Schedule`] is the validated, normalised snapshot the engine runs on.
//!   Weekdays are kept as a bitmask and holidays in a hash set (plus a
//!   sorted list for iteration), so the per-call predicates never
//!   re-validate anything.
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use workhours::{Config, Schedule};
//!
//! let schedule = Config::default()
//!     .with_workday(
//!         NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
//!         NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
//!     )
//!     .with_holiday(NaiveDate::from_ymd_opt(2010, 7, 5).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(schedule.is_holiday(NaiveDate::from_ymd_opt(2010, 7, 5).unwrap()));
//! ```

use crate::error::{ConfigError, Result};
use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// ═══════════════════════════════════════════════════════════════════════════
// WeekdaySet
// ═══════════════════════════════════════════════════════════════════════════

/// A set of weekdays stored as a 7-bit mask (bit 0 = Monday).
///
/// With the `serde` feature the set is (de)serialised as a list of weekdays,
/// e.g. `["Mon", "Tue"]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Weekday>", into = "Vec<Weekday>")
)]
pub struct WeekdaySet {
    mask: u8,
}

impl WeekdaySet {
    /// No weekdays at all. Not a valid business week on its own.
    pub const EMPTY: Self = Self { mask: 0 };

    /// Monday through Friday.
    pub const MON_TO_FRI: Self = Self { mask: 0b001_1111 };

    /// Every day of the week.
    pub const ALL: Self = Self { mask: 0b111_1111 };

    #[inline]
    const fn bit(day: Weekday) -> u8 {
        1 << (day as u8)
    }

    /// Build a set from a slice of weekdays.
    pub const fn from_days(days: &[Weekday]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < days.len() {
            mask |= Self::bit(days[i]);
            i += 1;
        }
        Self { mask }
    }

    #[inline]
    pub const fn contains(&self, day: Weekday) -> bool {
        self.mask & Self::bit(day) != 0
    }

    /// Adds `day`; returns `true` if it was not already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let was_absent = !self.contains(day);
        self.mask |= Self::bit(day);
        was_absent
    }

    /// Removes `day`; returns `true` if it was present.
    pub fn remove(&mut self, day: Weekday) -> bool {
        let was_present = self.contains(day);
        self.mask &= !Self::bit(day);
        was_present
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Weekdays in the set, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.iter().copied().filter(move |day| self.contains(*day))
    }
}

impl Default for WeekdaySet {
    fn default() -> Self {
        Self::MON_TO_FRI
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl From<Vec<Weekday>> for WeekdaySet {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for day in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{day}")?;
            first = false;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Config
// ═══════════════════════════════════════════════════════════════════════════

/// Editable business-time configuration.
///
/// Defaults to a 09:00–17:00 workday, Monday to Friday, without holidays.
/// Nothing here is checked until the record is turned into a [`Schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    pub weekdays: WeekdaySet,
    pub beginning_of_workday: NaiveTime,
    pub end_of_workday: NaiveTime,
    pub holidays: BTreeSet<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weekdays: WeekdaySet::MON_TO_FRI,
            beginning_of_workday: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
            end_of_workday: NaiveTime::from_hms_opt(17, 0, 0).expect("17:00 is a valid time"),
            holidays: BTreeSet::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workday(mut self, beginning: NaiveTime, end: NaiveTime) -> Self {
        self.beginning_of_workday = beginning;
        self.end_of_workday = end;
        self
    }

    pub fn with_weekdays(mut self, weekdays: WeekdaySet) -> Self {
        self.weekdays = weekdays;
        self
    }

    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.insert(date);
        self
    }

    pub fn with_holidays<I: IntoIterator<Item = NaiveDate>>(mut self, dates: I) -> Self {
        self.holidays.extend(dates);
        self
    }

    /// Adds a holiday; returns `true` if the date was new.
    pub fn add_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.insert(date)
    }

    /// Removes a holiday; returns `true` if the date was listed.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove(&date)
    }

    /// Checks the two structural invariants without building a schedule.
    pub fn validate(&self) -> Result<()> {
        if self.beginning_of_workday >= self.end_of_workday {
            return Err(ConfigError::InvertedWorkday {
                beginning: self.beginning_of_workday,
                end: self.end_of_workday,
            });
        }
        if self.weekdays.is_empty() {
            return Err(ConfigError::NoBusinessDays);
        }
        Ok(())
    }

    /// Validates and normalises this record into a [`Schedule`].
    pub fn build(self) -> Result<Schedule> {
        Schedule::new(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Schedule
// ═══════════════════════════════════════════════════════════════════════════

/// A validated business-time schedule.
///
/// Immutable once built; every engine operation (classification, rolling,
/// stepping) is a method taking `&Schedule`. To change a schedule, recover
/// its [`Config`] with [`Schedule::config`], edit, and build again.
///
/// Invariants: `beginning_of_workday < end_of_workday` and at least one
/// business weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub(crate) weekdays: WeekdaySet,
    pub(crate) beginning: NaiveTime,
    pub(crate) end: NaiveTime,
    pub(crate) holidays: HashSet<NaiveDate>,
    holiday_list: Vec<NaiveDate>,
}

impl Schedule {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        // BTreeSet iteration is already chronological.
        let holiday_list: Vec<NaiveDate> = config.holidays.into_iter().collect();
        Ok(Self {
            weekdays: config.weekdays,
            beginning: config.beginning_of_workday,
            end: config.end_of_workday,
            holidays: holiday_list.iter().copied().collect(),
            holiday_list,
        })
    }

    /// An equivalent editable record.
    pub fn config(&self) -> Config {
        Config {
            weekdays: self.weekdays,
            beginning_of_workday: self.beginning,
            end_of_workday: self.end,
            holidays: self.holiday_list.iter().copied().collect(),
        }
    }

    #[inline]
    pub fn weekdays(&self) -> WeekdaySet {
        self.weekdays
    }

    #[inline]
    pub fn beginning_of_workday(&self) -> NaiveTime {
        self.beginning
    }

    #[inline]
    pub fn end_of_workday(&self) -> NaiveTime {
        self.end
    }

    /// Holidays in chronological order.
    pub fn holidays(&self) -> impl ExactSizeIterator<Item = NaiveDate> + '_ {
        self.holiday_list.iter().copied()
    }

    #[inline]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Length of one full business day.
    #[inline]
    pub fn workday_length(&self) -> Duration {
        self.end - self.beginning
    }
}

impl Default for Schedule {
    fn default() -> Self {
        let config = Config::default();
        Self {
            weekdays: config.weekdays,
            beginning: config.beginning_of_workday,
            end: config.end_of_workday,
            holidays: HashSet::new(),
            holiday_list: Vec::new(),
        }
    }
}

impl TryFrom<Config> for Schedule {
    type Error = ConfigError;

    fn try_from(config: Config) -> Result<Self> {
        Self::new(config)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}–{} on {}",
            self.beginning.format("%H:%M"),
            self.end.format("%H:%M"),
            self.weekdays
        )?;
        if !self.holidays.is_empty() {
            write!(f, " ({} holidays)", self.holidays.len())?;
        }
        Ok(())
    }
}
