// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Business-day and business-hour predicates.
//!
//! The daily window is half-open: `beginning_of_workday` is business time,
//! `end_of_workday` is not. With the default 09:00–17:00 schedule, 16:59:59
//! on a Monday is a business hour and 17:00:00 is not.

use crate::config::Schedule;
use crate::local::localize;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone};

impl Schedule {
    /// `true` iff `date` falls on a business weekday and is not a holiday.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use workhours::Schedule;
    ///
    /// let schedule = Schedule::default();
    /// assert!(schedule.is_business_day(NaiveDate::from_ymd_opt(2010, 4, 9).unwrap())); // Friday
    /// assert!(!schedule.is_business_day(NaiveDate::from_ymd_opt(2010, 4, 10).unwrap())); // Saturday
    /// ```
    #[inline]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        self.weekdays.contains(date.weekday()) && !self.holidays.contains(&date)
    }

    /// `true` iff the instant's local date is a business day and its local
    /// time lies in `[beginning_of_workday, end_of_workday)`.
    pub fn is_business_hour<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let local = instant.naive_local();
        self.is_business_day(local.date()) && self.within_workday(local.time())
    }

    /// `true` if the local time is earlier than `beginning_of_workday`,
    /// whatever the day.
    pub fn is_before_business_hours<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        instant.naive_local().time() < self.beginning
    }

    /// `true` if the local time is at or past `end_of_workday`, whatever the
    /// day.
    pub fn is_after_business_hours<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        instant.naive_local().time() >= self.end
    }

    /// Start of the work window on the instant's local date.
    pub fn workday_start_on<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<Tz> {
        let date = instant.naive_local().date();
        localize(&instant.timezone(), date.and_time(self.beginning))
    }

    /// End of the work window on the instant's local date.
    pub fn workday_end_on<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<Tz> {
        let date = instant.naive_local().date();
        localize(&instant.timezone(), date.and_time(self.end))
    }

    #[inline]
    pub(crate) fn within_workday(&self, time: NaiveTime) -> bool {
        self.beginning <= time && time < self.end
    }
}
