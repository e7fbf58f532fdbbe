// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar dates.

use chrono::{NaiveDate, Utc};

/// Today's date in UTC, used as the default visit date for new pins.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date as `YYYY-MM-DD` for popups.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
