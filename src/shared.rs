// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Process-wide schedule.
//!
//! Most callers should hold a [`Schedule`] and call its methods directly.
//! When a single shared configuration is more convenient, [`configure`]
//! returns a lazily created global [`SharedSchedule`], and any number of
//! private [`SharedSchedule`] values can be created as well.
//!
//! Each top-level operation on a [`SharedSchedule`] takes one snapshot of the
//! current schedule and runs entirely against it, so a concurrent
//! [`SharedSchedule::update`] can never be observed half-way through a
//! multi-day step.
//!
//! ```
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use workhours::SharedSchedule;
//!
//! let shared = SharedSchedule::default();
//! shared
//!     .update(|cfg| {
//!         cfg.add_holiday(NaiveDate::from_ymd_opt(2010, 7, 5).unwrap());
//!     })
//!     .unwrap();
//!
//! let friday = Utc.with_ymd_and_hms(2010, 7, 2, 16, 50, 0).unwrap();
//! let tuesday = Utc.with_ymd_and_hms(2010, 7, 6, 9, 50, 0).unwrap();
//! assert_eq!(shared.business_hours_after(1, &friday), tuesday);
//! ```

use crate::config::{Config, Schedule};
use crate::error::Result;
use chrono::{DateTime, NaiveDate, TimeZone};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// A lock-guarded, swappable [`Schedule`].
#[derive(Debug, Default)]
pub struct SharedSchedule {
    current: RwLock<Arc<Schedule>>,
}

impl SharedSchedule {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            current: RwLock::new(Arc::new(schedule)),
        }
    }

    /// The schedule in force right now.
    pub fn snapshot(&self) -> Arc<Schedule> {
        Arc::clone(&self.read())
    }

    /// An editable copy of the current configuration.
    pub fn config(&self) -> Config {
        self.read().config()
    }

    /// Edit the configuration in place and install the result.
    ///
    /// The edit runs on a copy; if the edited record fails validation the
    /// error is returned and the previous schedule stays in force.
    pub fn update<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut current = self.write();
        let mut config = current.config();
        edit(&mut config);
        match Schedule::new(config) {
            Ok(schedule) => {
                debug!(schedule = %schedule, "business schedule updated");
                *current = Arc::new(schedule);
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "business schedule update rejected");
                Err(err)
            }
        }
    }

    /// Install an already validated schedule.
    pub fn replace(&self, schedule: Schedule) {
        debug!(schedule = %schedule, "business schedule replaced");
        *self.write() = Arc::new(schedule);
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        self.snapshot().is_business_day(date)
    }

    pub fn is_business_hour<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        self.snapshot().is_business_hour(instant)
    }

    pub fn roll_forward<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<Tz> {
        self.snapshot().roll_forward(instant)
    }

    pub fn roll_backward<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<Tz> {
        self.snapshot().roll_backward(instant)
    }

    pub fn business_hours_after<Tz: TimeZone>(
        &self,
        hours: i64,
        instant: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.snapshot().business_hours_after(hours, instant)
    }

    pub fn business_hours_before<Tz: TimeZone>(
        &self,
        hours: i64,
        instant: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.snapshot().business_hours_before(hours, instant)
    }

    pub fn business_days_after<Tz: TimeZone>(
        &self,
        days: i64,
        instant: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.snapshot().business_days_after(days, instant)
    }

    pub fn business_days_before<Tz: TimeZone>(
        &self,
        days: i64,
        instant: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.snapshot().business_days_before(days, instant)
    }

    // The guarded value is always a complete `Arc<Schedule>`, so a poisoned
    // lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Arc<Schedule>> {
        self.current.read().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned business schedule lock");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<Schedule>> {
        self.current.write().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned business schedule lock");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl From<Schedule> for SharedSchedule {
    fn from(schedule: Schedule) -> Self {
        Self::new(schedule)
    }
}

/// The process-wide schedule, created with [`Schedule::default`] on first
/// use.
pub fn configure() -> &'static SharedSchedule {
    static GLOBAL: OnceLock<SharedSchedule> = OnceLock::new();
    GLOBAL.get_or_init(SharedSchedule::default)
}
