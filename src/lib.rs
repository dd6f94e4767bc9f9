// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Business Time
//!
//! This crate performs time arithmetic restricted to *business time*: the
//! configured working hours on the configured working days, minus holidays.
//!
//! # Core types
//!
//! - [`Config`] — editable record: business weekdays, daily work window,
//!   holiday dates.
//! - [`Schedule`] — validated snapshot of a [`Config`]; every engine
//!   operation is a method on it.
//! - [`WeekdaySet`] — compact set of [`chrono::Weekday`]s.
//! - [`BusinessDuration<U>`] — signed quantity of business units,
//!   parameterised by a [`BusinessUnit`] marker.
//! - [`SharedSchedule`] — lock-guarded schedule for process-wide use; see
//!   [`configure`].
//!
//! # Operations
//!
//! | Question | Method |
//! |----------|--------|
//! | Is this a business day / hour? | [`Schedule::is_business_day`], [`Schedule::is_business_hour`] |
//! | Nearest business instant? | [`Schedule::roll_forward`], [`Schedule::roll_backward`] |
//! | N business hours later / earlier? | [`Schedule::business_hours_after`], [`Schedule::business_hours_before`] |
//! | N business days later / earlier? | [`Schedule::business_days_after`], [`Schedule::business_days_before`] |
//! | Business time elapsed? | [`Schedule::business_time_between`], [`Schedule::business_days_between`] |
//!
//! Instants are `chrono::DateTime<Tz>` for any time zone; working hours are
//! evaluated on the instant's local wall clock and results come back in the
//! same zone.
//!
//! ```
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use workhours::{Config, BusinessHours};
//!
//! let schedule = Config::default()
//!     .with_holiday(NaiveDate::from_ymd_opt(2010, 7, 5).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let friday_afternoon = Utc.with_ymd_and_hms(2010, 7, 2, 16, 50, 0).unwrap();
//! let tuesday_morning = Utc.with_ymd_and_hms(2010, 7, 6, 9, 50, 0).unwrap();
//! assert_eq!(schedule.business_hours_after(1, &friday_afternoon), tuesday_morning);
//! assert_eq!(BusinessHours::new(1).before(&tuesday_morning, &schedule), friday_afternoon);
//! ```

mod between;
mod classify;
mod config;
mod error;
mod local;
mod roll;
mod shared;
mod step;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use config::{Config, Schedule, WeekdaySet};
pub use error::{ConfigError, Result};
pub use shared::{configure, SharedSchedule};
pub use step::{BusinessDays, BusinessDuration, BusinessHours, BusinessUnit, Day, Hour};
