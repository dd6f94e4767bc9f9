// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rolling instants onto business time.
//!
//! [`Schedule::roll_forward`] moves an instant to the nearest business
//! instant at or after it; [`Schedule::roll_backward`] to the nearest one at
//! or before it. Non-business days never keep their time of day: any instant
//! on a weekend or holiday rolls to the *start* of the next business day
//! (forward) or the *end* of the previous one (backward).
//!
//! Because the work window is half-open, `end_of_workday` itself is not
//! business time. [`Schedule::roll_backward`] still returns it as the
//! backward boundary of a day, standing in for "the last instant before
//! closing".

use crate::config::Schedule;
use crate::local::localize;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

impl Schedule {
    /// Nearest business instant at or after `instant`.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use workhours::Schedule;
    ///
    /// let schedule = Schedule::default();
    /// let monday_evening = Utc.with_ymd_and_hms(2010, 4, 26, 18, 0, 0).unwrap();
    /// let tuesday_morning = Utc.with_ymd_and_hms(2010, 4, 27, 9, 0, 0).unwrap();
    /// assert_eq!(schedule.roll_forward(&monday_evening), tuesday_morning);
    /// ```
    pub fn roll_forward<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<Tz> {
        if self.is_business_hour(instant) {
            return instant.clone();
        }
        let rolled = self.roll_forward_local(instant.naive_local());
        localize(&instant.timezone(), rolled)
    }

    /// Nearest business instant at or before `instant`, with
    /// `end_of_workday` as the closing boundary of each day.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use workhours::Schedule;
    ///
    /// let schedule = Schedule::default();
    /// let sunday = Utc.with_ymd_and_hms(2010, 4, 25, 12, 6, 56).unwrap();
    /// let friday_close = Utc.with_ymd_and_hms(2010, 4, 23, 17, 0, 0).unwrap();
    /// assert_eq!(schedule.roll_backward(&sunday), friday_close);
    /// ```
    pub fn roll_backward<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<Tz> {
        if self.is_business_hour(instant) {
            return instant.clone();
        }
        let rolled = self.roll_backward_local(instant.naive_local());
        localize(&instant.timezone(), rolled)
    }

    /// First business day strictly after `date`.
    ///
    /// # Panics
    ///
    /// If the search runs past the last date chrono can represent.
    pub fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut day = following(date);
        while !self.is_business_day(day) {
            day = following(day);
        }
        day
    }

    /// Last business day strictly before `date`.
    ///
    /// # Panics
    ///
    /// If the search runs past the first date chrono can represent.
    pub fn previous_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut day = preceding(date);
        while !self.is_business_day(day) {
            day = preceding(day);
        }
        day
    }

    /// `date` itself if it is a business day, otherwise the next one.
    pub fn first_business_day(&self, date: NaiveDate) -> NaiveDate {
        if self.is_business_day(date) {
            date
        } else {
            self.next_business_day(date)
        }
    }

    /// `date` itself if it is a business day, otherwise the previous one.
    pub fn last_business_day(&self, date: NaiveDate) -> NaiveDate {
        if self.is_business_day(date) {
            date
        } else {
            self.previous_business_day(date)
        }
    }

    pub(crate) fn roll_forward_local(&self, local: NaiveDateTime) -> NaiveDateTime {
        let (date, time) = (local.date(), local.time());
        if self.is_business_day(date) {
            if time < self.beginning {
                return date.and_time(self.beginning);
            }
            if time < self.end {
                return local;
            }
        }
        self.next_business_day(date).and_time(self.beginning)
    }

    pub(crate) fn roll_backward_local(&self, local: NaiveDateTime) -> NaiveDateTime {
        let (date, time) = (local.date(), local.time());
        if self.is_business_day(date) {
            if time >= self.end {
                return date.and_time(self.end);
            }
            if time >= self.beginning {
                return local;
            }
        }
        self.previous_business_day(date).and_time(self.end)
    }
}

fn following(date: NaiveDate) -> NaiveDate {
    date.succ_opt()
        .expect("date out of chrono::NaiveDate representable range")
}

fn preceding(date: NaiveDate) -> NaiveDate {
    date.pred_opt()
        .expect("date out of chrono::NaiveDate representable range")
}

#[cfg(test)]
mod tests {
    use crate::{Config, Schedule};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_roll_forward_keeps_business_instant() {
        let schedule = Schedule::default();
        let t = utc(2010, 4, 12, 9, 50, 0);
        assert_eq!(schedule.roll_forward(&t), t);
    }

    #[test]
    fn test_roll_forward_early_morning_snaps_to_opening() {
        let schedule = Schedule::default();
        assert_eq!(
            schedule.roll_forward(&utc(2010, 4, 26, 4, 30, 0)),
            utc(2010, 4, 26, 9, 0, 0)
        );
    }

    #[test]
    fn test_roll_forward_at_closing_moves_to_next_day() {
        let schedule = Schedule::default();
        assert_eq!(
            schedule.roll_forward(&utc(2010, 4, 26, 17, 0, 0)),
            utc(2010, 4, 27, 9, 0, 0)
        );
    }

    #[test]
    fn test_roll_forward_over_weekend() {
        let schedule = Schedule::default();
        let friday_night = utc(2010, 4, 9, 20, 0, 0);
        let saturday_noon = utc(2010, 4, 10, 12, 0, 0);
        let sunday_dawn = utc(2010, 4, 11, 4, 0, 0);
        let monday_open = utc(2010, 4, 12, 9, 0, 0);
        assert_eq!(schedule.roll_forward(&friday_night), monday_open);
        assert_eq!(schedule.roll_forward(&saturday_noon), monday_open);
        assert_eq!(schedule.roll_forward(&sunday_dawn), monday_open);
    }

    #[test]
    fn test_roll_forward_skips_holiday() {
        let schedule = Config::default()
            .with_holiday(date(2010, 7, 5))
            .build()
            .unwrap();
        assert_eq!(
            schedule.roll_forward(&utc(2010, 7, 2, 17, 30, 0)),
            utc(2010, 7, 6, 9, 0, 0)
        );
        assert_eq!(
            schedule.roll_forward(&utc(2010, 7, 5, 10, 0, 0)),
            utc(2010, 7, 6, 9, 0, 0)
        );
    }

    #[test]
    fn test_roll_backward_after_hours_snaps_to_closing() {
        let schedule = Schedule::default();
        assert_eq!(
            schedule.roll_backward(&utc(2010, 4, 26, 18, 0, 0)),
            utc(2010, 4, 26, 17, 0, 0)
        );
        assert_eq!(
            schedule.roll_backward(&utc(2010, 4, 26, 17, 0, 0)),
            utc(2010, 4, 26, 17, 0, 0)
        );
    }

    #[test]
    fn test_roll_backward_early_morning_goes_to_previous_close() {
        let schedule = Schedule::default();
        // Monday dawn → Friday close.
        assert_eq!(
            schedule.roll_backward(&utc(2010, 4, 26, 4, 30, 0)),
            utc(2010, 4, 23, 17, 0, 0)
        );
        // Tuesday dawn → Monday close.
        assert_eq!(
            schedule.roll_backward(&utc(2010, 4, 27, 4, 30, 0)),
            utc(2010, 4, 26, 17, 0, 0)
        );
    }

    #[test]
    fn test_roll_backward_keeps_opening_instant() {
        let schedule = Schedule::default();
        let t = utc(2010, 4, 26, 9, 0, 0);
        assert_eq!(schedule.roll_backward(&t), t);
    }

    #[test]
    fn test_rolling_is_idempotent() {
        let schedule = Schedule::default();
        let samples = [
            utc(2010, 4, 24, 0, 0, 0),
            utc(2010, 4, 25, 12, 6, 56),
            utc(2010, 4, 26, 4, 30, 0),
            utc(2010, 4, 26, 9, 0, 0),
            utc(2010, 4, 26, 16, 59, 59),
            utc(2010, 4, 26, 17, 0, 0),
            utc(2010, 4, 26, 23, 59, 59),
        ];
        for t in samples {
            let fwd = schedule.roll_forward(&t);
            assert_eq!(schedule.roll_forward(&fwd), fwd, "forward from {t}");
            let back = schedule.roll_backward(&t);
            assert_eq!(schedule.roll_backward(&back), back, "backward from {t}");
        }
    }

    #[test]
    fn test_business_day_neighbours() {
        let schedule = Config::default()
            .with_holiday(date(2010, 7, 5))
            .build()
            .unwrap();
        assert_eq!(schedule.next_business_day(date(2010, 7, 2)), date(2010, 7, 6));
        assert_eq!(
            schedule.previous_business_day(date(2010, 7, 6)),
            date(2010, 7, 2)
        );
        assert_eq!(schedule.first_business_day(date(2010, 7, 3)), date(2010, 7, 6));
        assert_eq!(schedule.first_business_day(date(2010, 7, 6)), date(2010, 7, 6));
        assert_eq!(schedule.last_business_day(date(2010, 7, 5)), date(2010, 7, 2));
        assert_eq!(schedule.last_business_day(date(2010, 7, 2)), date(2010, 7, 2));
    }

    #[test]
    fn test_roll_forward_into_dst_gap_never_moves_backward() {
        use crate::WeekdaySet;
        use chrono::NaiveTime;
        use chrono_tz::Europe::Berlin;

        // Berlin skips 02:00–03:00 on 2010-03-28, so an opening at 02:30
        // resolves to 03:30 CEST.
        let schedule = Config::default()
            .with_weekdays(WeekdaySet::ALL)
            .with_workday(
                NaiveTime::from_hms_opt(2, 30, 0).unwrap(),
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            )
            .build()
            .unwrap();
        let t = Berlin.with_ymd_and_hms(2010, 3, 28, 1, 45, 0).unwrap();
        let rolled = schedule.roll_forward(&t);
        assert!(rolled >= t);
        assert_eq!(rolled, utc(2010, 3, 28, 1, 30, 0));
        assert_eq!(rolled.naive_local().time(), NaiveTime::from_hms_opt(3, 30, 0).unwrap());
        assert!(schedule.is_business_hour(&rolled));
    }
}
