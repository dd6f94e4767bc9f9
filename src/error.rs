// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Configuration errors.
//!
//! The engine itself is infallible: every instant and every signed quantity
//! has a defined result. The only failure mode is an unusable schedule, which
//! is reported once when a [`Config`](crate::Config) is turned into a
//! [`Schedule`](crate::Schedule).

use chrono::NaiveTime;
use thiserror::Error;

/// Reasons a [`Config`](crate::Config) cannot become a [`Schedule`](crate::Schedule).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("workday must begin before it ends (beginning {beginning}, end {end})")]
    InvertedWorkday { beginning: NaiveTime, end: NaiveTime },

    #[error("at least one business weekday is required")]
    NoBusinessDays,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_workday_message_names_both_bounds() {
        let err = ConfigError::InvertedWorkday {
            beginning: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("17:00:00"));
        assert!(msg.contains("09:00:00"));
    }

    #[test]
    fn test_no_business_days_message() {
        assert_eq!(
            ConfigError::NoBusinessDays.to_string(),
            "at least one business weekday is required"
        );
    }
}
