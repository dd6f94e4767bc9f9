// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock → instant conversion.
//!
//! Work hours are a wall-clock notion, so the engine reasons on
//! `DateTime::naive_local()` and only maps the result back into the caller's
//! zone at the end. Daylight-saving transitions make that mapping partial:
//!
//! - in an overlap (clocks set back) the earlier instant is chosen;
//! - in a gap (clocks set forward) the wall-clock time is read with the
//!   offset in force before the jump, which lands just past the gap.

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone};

/// Interpret `local` as wall-clock time in `tz`.
pub(crate) fn localize<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    tz.from_local_datetime(&local).earliest().unwrap_or_else(|| {
        // A day back is before the transition for every real-world offset
        // (at most ±14h), and no zone changes offset twice within a day.
        let before_jump = local - Duration::days(1);
        let offset = tz.offset_from_utc_datetime(&before_jump).fix();
        let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
        tz.from_utc_datetime(&utc)
    })
}
