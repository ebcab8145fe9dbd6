//! Date and time formatting for user-facing task display.
//!
//! Tasks are stored with second-precision timestamps; these helpers render
//! them the way the planner presents schedules, with the day first and the
//! month written out ("03 January 2024, 09:00:00"). Formatting is pure and
//! never fails, so callers can use it directly in display paths.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats a due timestamp for display.
///
/// The output follows the "DD Month YYYY, HH:MM:SS" pattern with the day
/// zero-padded and the month spelled out in full.
///
/// # Examples
///
/// ```rust
/// use dayplan::libs::formatter::format_due_date;
/// use chrono::NaiveDate;
///
/// let due = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// assert_eq!(format_due_date(&due), "03 January 2024, 09:00:00");
/// ```
pub fn format_due_date(due_at: &NaiveDateTime) -> String {
    due_at.format("%d %B %Y, %H:%M:%S").to_string()
}

/// Formats a calendar date the same way, without the time part.
///
/// Used for schedule headers ("Tasks for 03 January 2024").
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}
