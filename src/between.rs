// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Elapsed business time between two points.
//!
//! These are the inverse of the stepping operations: for a business instant
//! `t` and a non-negative `d`,
//! `business_time_between(t, add_business_time(t, d)) == d`.

use crate::config::Schedule;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone};
use qtty::Seconds;

impl Schedule {
    /// Business time elapsed from `from` to `to`.
    ///
    /// Both ends are rolled forward first, so time outside business hours
    /// never counts. The result is negative when `to` precedes `from`.
    /// Both ends are read on the wall clock of `from`'s zone, so two
    /// instants carrying different offsets are compared as instants.
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use workhours::Schedule;
    ///
    /// let schedule = Schedule::default();
    /// let friday = Utc.with_ymd_and_hms(2010, 4, 9, 16, 0, 0).unwrap();
    /// let monday = Utc.with_ymd_and_hms(2010, 4, 12, 10, 0, 0).unwrap();
    /// assert_eq!(schedule.business_time_between(&friday, &monday), Duration::hours(2));
    /// assert_eq!(schedule.business_time_between(&monday, &friday), Duration::hours(-2));
    /// ```
    pub fn business_time_between<Tz: TimeZone>(
        &self,
        from: &DateTime<Tz>,
        to: &DateTime<Tz>,
    ) -> Duration {
        let to = to.with_timezone(&from.timezone());
        if to < *from {
            return -self.business_time_between(&to, from);
        }
        let start = self.roll_forward_local(from.naive_local());
        let end = self.roll_forward_local(to.naive_local());
        self.elapsed_local(start, end)
    }

    /// [`business_time_between`](Self::business_time_between) as a typed
    /// quantity of seconds.
    pub fn business_seconds_between<Tz: TimeZone>(
        &self,
        from: &DateTime<Tz>,
        to: &DateTime<Tz>,
    ) -> Seconds {
        let elapsed = self.business_time_between(from, to);
        Seconds::new(elapsed.num_milliseconds() as f64 / 1_000.0)
    }

    /// Number of business days in `[from, to)`; negative when `to < from`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use workhours::Schedule;
    ///
    /// let schedule = Schedule::default();
    /// let monday = NaiveDate::from_ymd_opt(2010, 4, 12).unwrap();
    /// let next_monday = NaiveDate::from_ymd_opt(2010, 4, 19).unwrap();
    /// assert_eq!(schedule.business_days_between(monday, next_monday), 5);
    /// ```
    pub fn business_days_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        if to < from {
            return -self.business_days_between(to, from);
        }
        from.iter_days()
            .take_while(|day| *day < to)
            .filter(|day| self.is_business_day(*day))
            .count() as i64
    }

    // Both ends must already be rolled forward onto business time.
    fn elapsed_local(&self, start: NaiveDateTime, end: NaiveDateTime) -> Duration {
        if end <= start {
            return Duration::zero();
        }
        if start.date() == end.date() {
            return end - start;
        }
        let mut total = start.date().and_time(self.end) - start;
        let mut day = self.next_business_day(start.date());
        while day < end.date() {
            total = total + self.workday_length();
            day = self.next_business_day(day);
        }
        total + (end - end.date().and_time(self.beginning))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, Schedule};
    use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
    use qtty::{Day, Days, Seconds};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_between_same_day() {
        let schedule = Schedule::default();
        assert_eq!(
            schedule.business_time_between(&utc(2010, 4, 12, 9, 50), &utc(2010, 4, 12, 12, 50)),
            Duration::hours(3)
        );
    }

    #[test]
    fn test_between_ignores_off_hours() {
        let schedule = Schedule::default();
        // Monday 18:00 rolls to Tuesday 09:00.
        assert_eq!(
            schedule.business_time_between(&utc(2010, 4, 26, 10, 0), &utc(2010, 4, 26, 18, 0)),
            Duration::hours(7)
        );
        // Entirely outside business hours.
        assert_eq!(
            schedule.business_time_between(&utc(2010, 4, 24, 8, 0), &utc(2010, 4, 25, 20, 0)),
            Duration::zero()
        );
    }

    #[test]
    fn test_between_mixed_offsets_measures_the_instants() {
        let schedule = Schedule::default();
        let utc0 = FixedOffset::east_opt(0).unwrap();
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
        let from = utc0.with_ymd_and_hms(2010, 4, 12, 10, 0, 0).unwrap();
        // 16:00+05:00 is 11:00 on `from`'s clock.
        let to = plus_five.with_ymd_and_hms(2010, 4, 12, 16, 0, 0).unwrap();
        assert_eq!(schedule.business_time_between(&from, &to), Duration::hours(1));
        assert_eq!(schedule.business_time_between(&to, &from), Duration::hours(-1));
    }

    #[test]
    fn test_between_same_instant_in_two_offsets_is_zero() {
        let schedule = Schedule::default();
        let minus_four = FixedOffset::west_opt(4 * 3600).unwrap();
        let utc0 = FixedOffset::east_opt(0).unwrap();
        let a = utc0.with_ymd_and_hms(2010, 4, 12, 13, 0, 0).unwrap();
        let b = minus_four.with_ymd_and_hms(2010, 4, 12, 9, 0, 0).unwrap();
        assert_eq!(a, b);
        assert_eq!(schedule.business_time_between(&a, &b), Duration::zero());
        assert_eq!(schedule.business_time_between(&b, &a), Duration::zero());
    }

    #[test]
    fn test_between_spans_holiday() {
        let schedule = Config::default()
            .with_holiday(date(2010, 7, 5))
            .build()
            .unwrap();
        assert_eq!(
            schedule.business_time_between(&utc(2010, 7, 2, 16, 50), &utc(2010, 7, 6, 9, 50)),
            Duration::hours(1)
        );
    }

    #[test]
    fn test_between_full_week() {
        let schedule = Schedule::default();
        assert_eq!(
            schedule.business_time_between(&utc(2010, 4, 12, 10, 0), &utc(2010, 4, 19, 10, 0)),
            Duration::hours(40)
        );
    }

    #[test]
    fn test_between_inverts_add_business_time() {
        let schedule = Schedule::default();
        let start = utc(2010, 8, 4, 9, 35);
        for minutes in [0, 25, 60, 205, 480, 481, 2_400, 10_000] {
            let d = Duration::minutes(minutes);
            let end = schedule.add_business_time(&start, d);
            assert_eq!(schedule.business_time_between(&start, &end), d, "{minutes} min");
        }
    }

    #[test]
    fn test_business_seconds_between() {
        let schedule = Schedule::default();
        let secs = schedule
            .business_seconds_between(&utc(2010, 4, 12, 9, 0), &utc(2010, 4, 12, 17, 0));
        assert_eq!(secs, Seconds::new(28_800.0));
        let as_days: Days = secs.to::<Day>();
        assert!((as_days - Days::new(1.0 / 3.0)).abs() < Days::new(1e-12));
    }

    #[test]
    fn test_business_days_between() {
        let schedule = Config::default()
            .with_holiday(date(2010, 7, 5))
            .build()
            .unwrap();
        assert_eq!(schedule.business_days_between(date(2010, 7, 1), date(2010, 7, 8)), 4);
        assert_eq!(schedule.business_days_between(date(2010, 7, 8), date(2010, 7, 1)), -4);
        assert_eq!(schedule.business_days_between(date(2010, 7, 3), date(2010, 7, 3)), 0);
    }
}
