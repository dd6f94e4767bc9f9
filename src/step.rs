// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Stepping instants by business hours and business days.
//!
//! A step first normalises the start instant, rolling it forward for a
//! non-negative quantity and backward for a negative one, then consumes the
//! quantity window by window:
//!
//! - **hours** (and arbitrary [`Duration`]s) are spent inside
//!   `[beginning_of_workday, end_of_workday]`; whatever does not fit in the
//!   current day carries over to the opposite boundary of the next (or
//!   previous) business day. A step may land exactly on a boundary, so
//!   09:00 + 8 business hours is 17:00 the same day.
//! - **days** move the date across business days only, keeping the rolled
//!   time of day.
//!
//! Subtraction is addition of the negated quantity, so
//! `business_hours_after(q, t) == business_hours_before(-q, t)` for every
//! `q`, zero included.
//!
//! The unit is a compile-time marker, mirroring how [`BusinessDuration<U>`]
//! is parameterised:
//!
//! | Marker | Alias | Step |
//! |--------|-------|------|
//! | [`Hour`] | [`BusinessHours`] | one business hour |
//! | [`Day`] | [`BusinessDays`] | one business day |

use crate::config::Schedule;
use crate::local::localize;
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Neg;
use tracing::trace;

// ═══════════════════════════════════════════════════════════════════════════
// BusinessUnit trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for business-time units.
pub trait BusinessUnit: Copy + Clone + fmt::Debug + PartialEq + Eq + Hash + 'static {
    /// Display label for a quantity of one.
    const SINGULAR: &'static str;

    /// Display label for any other quantity.
    const PLURAL: &'static str;

    /// Shift a wall-clock instant by `quantity` units of this kind.
    fn shift(schedule: &Schedule, local: NaiveDateTime, quantity: i64) -> NaiveDateTime;
}

/// One business hour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Hour;

impl BusinessUnit for Hour {
    const SINGULAR: &'static str = "business hour";
    const PLURAL: &'static str = "business hours";

    #[inline]
    fn shift(schedule: &Schedule, local: NaiveDateTime, quantity: i64) -> NaiveDateTime {
        schedule.shift_time_local(local, Duration::hours(quantity))
    }
}

/// One business day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Day;

impl BusinessUnit for Day {
    const SINGULAR: &'static str = "business day";
    const PLURAL: &'static str = "business days";

    #[inline]
    fn shift(schedule: &Schedule, local: NaiveDateTime, quantity: i64) -> NaiveDateTime {
        schedule.shift_days_local(local, quantity)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BusinessDuration<U>
// ═══════════════════════════════════════════════════════════════════════════

/// A signed quantity of business units.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use workhours::{BusinessHours, Schedule};
///
/// let schedule = Schedule::default();
/// let friday_afternoon = Utc.with_ymd_and_hms(2010, 4, 9, 16, 50, 0).unwrap();
/// let monday_morning = BusinessHours::new(1).after(&friday_afternoon, &schedule);
/// assert_eq!(monday_morning, Utc.with_ymd_and_hms(2010, 4, 12, 9, 50, 0).unwrap());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BusinessDuration<U: BusinessUnit> {
    quantity: i64,
    _unit: PhantomData<U>,
}

/// Business hours — `BusinessDuration<Hour>`.
pub type BusinessHours = BusinessDuration<Hour>;

/// Business days — `BusinessDuration<Day>`.
pub type BusinessDays = BusinessDuration<Day>;

impl<U: BusinessUnit> BusinessDuration<U> {
    #[inline]
    pub const fn new(quantity: i64) -> Self {
        Self {
            quantity,
            _unit: PhantomData,
        }
    }

    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.quantity == 0
    }

    /// The instant this many business units after `instant`.
    pub fn after<Tz: TimeZone>(&self, instant: &DateTime<Tz>, schedule: &Schedule) -> DateTime<Tz> {
        schedule.step::<U, Tz>(instant, self.quantity)
    }

    /// The instant this many business units before `instant`.
    pub fn before<Tz: TimeZone>(&self, instant: &DateTime<Tz>, schedule: &Schedule) -> DateTime<Tz> {
        schedule.step::<U, Tz>(instant, self.quantity.saturating_neg())
    }
}

impl<U: BusinessUnit> Neg for BusinessDuration<U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(self.quantity.saturating_neg())
    }
}

impl<U: BusinessUnit> From<i64> for BusinessDuration<U> {
    #[inline]
    fn from(quantity: i64) -> Self {
        Self::new(quantity)
    }
}

impl<U: BusinessUnit> fmt::Display for BusinessDuration<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.quantity.unsigned_abs() == 1 {
            U::SINGULAR
        } else {
            U::PLURAL
        };
        write!(f, "{} {}", self.quantity, label)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Schedule stepping operations
// ═══════════════════════════════════════════════════════════════════════════

impl Schedule {
    /// Shift `instant` by a signed quantity of `U` units.
    ///
    /// # Panics
    ///
    /// If the result leaves chrono's representable range, or (for hours) the
    /// quantity does not fit in a [`Duration`].
    pub fn step<U: BusinessUnit, Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        quantity: i64,
    ) -> DateTime<Tz> {
        let local = instant.naive_local();
        let shifted = U::shift(self, local, quantity);
        trace!(quantity, unit = U::PLURAL, from = %local, to = %shifted, "business step");
        localize(&instant.timezone(), shifted)
    }

    /// `hours` business hours after `instant`. Negative values go back.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use workhours::Schedule;
    ///
    /// let schedule = Schedule::default();
    /// let wednesday = Utc.with_ymd_and_hms(2010, 8, 4, 9, 35, 0).unwrap();
    /// let thursday = Utc.with_ymd_and_hms(2010, 8, 5, 9, 35, 0).unwrap();
    /// assert_eq!(schedule.business_hours_after(8, &wednesday), thursday);
    /// assert_eq!(schedule.business_hours_after(-8, &thursday), wednesday);
    /// ```
    pub fn business_hours_after<Tz: TimeZone>(
        &self,
        hours: i64,
        instant: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.step::<Hour, Tz>(instant, hours)
    }

    /// `hours` business hours before `instant`. Negative values go forward.
    pub fn business_hours_before<Tz: TimeZone>(
        &self,
        hours: i64,
        instant: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.step::<Hour, Tz>(instant, hours.saturating_neg())
    }

    /// `days` business days after `instant`, keeping the rolled time of day.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use workhours::Schedule;
    ///
    /// let schedule = Schedule::default();
    /// let friday = Utc.with_ymd_and_hms(2010, 4, 9, 10, 0, 0).unwrap();
    /// let tuesday = Utc.with_ymd_and_hms(2010, 4, 13, 10, 0, 0).unwrap();
    /// assert_eq!(schedule.business_days_after(2, &friday), tuesday);
    /// ```
    pub fn business_days_after<Tz: TimeZone>(
        &self,
        days: i64,
        instant: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.step::<Day, Tz>(instant, days)
    }

    /// `days` business days before `instant`. Negative values go forward.
    pub fn business_days_before<Tz: TimeZone>(
        &self,
        days: i64,
        instant: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.step::<Day, Tz>(instant, days.saturating_neg())
    }

    /// Add an arbitrary amount of business time; negative amounts go back.
    ///
    /// Unlike the hour operations this keeps minute and second precision of
    /// `amount`, e.g. 90 business minutes from 16:00 is 09:30 the next
    /// business day.
    pub fn add_business_time<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        amount: Duration,
    ) -> DateTime<Tz> {
        let local = instant.naive_local();
        let shifted = self.shift_time_local(local, amount);
        trace!(%amount, from = %local, to = %shifted, "business time added");
        localize(&instant.timezone(), shifted)
    }

    /// Subtract an arbitrary amount of business time.
    pub fn sub_business_time<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        amount: Duration,
    ) -> DateTime<Tz> {
        self.add_business_time(instant, -amount)
    }

    pub(crate) fn shift_time_local(&self, local: NaiveDateTime, amount: Duration) -> NaiveDateTime {
        if amount < Duration::zero() {
            self.retreat_local(self.roll_backward_local(local), -amount)
        } else {
            self.advance_local(self.roll_forward_local(local), amount)
        }
    }

    pub(crate) fn shift_days_local(&self, local: NaiveDateTime, days: i64) -> NaiveDateTime {
        let start = if days < 0 {
            self.roll_backward_local(local)
        } else {
            self.roll_forward_local(local)
        };
        let mut date = start.date();
        for _ in 0..days.unsigned_abs() {
            date = if days < 0 {
                self.previous_business_day(date)
            } else {
                self.next_business_day(date)
            };
        }
        date.and_time(start.time())
    }

    // `cursor` must lie on a business day within [beginning, end].
    fn advance_local(&self, mut cursor: NaiveDateTime, mut remaining: Duration) -> NaiveDateTime {
        loop {
            let left_today = cursor.date().and_time(self.end) - cursor;
            if remaining <= left_today {
                return cursor + remaining;
            }
            remaining = remaining - left_today;
            cursor = self.next_business_day(cursor.date()).and_time(self.beginning);
        }
    }

    // `cursor` must lie on a business day within [beginning, end].
    fn retreat_local(&self, mut cursor: NaiveDateTime, mut remaining: Duration) -> NaiveDateTime {
        loop {
            let spent_today = cursor - cursor.date().and_time(self.beginning);
            if remaining <= spent_today {
                return cursor - remaining;
            }
            remaining = remaining - spent_today;
            cursor = self.previous_business_day(cursor.date()).and_time(self.end);
        }
    }
}
