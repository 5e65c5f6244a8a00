//! Calendar helpers for date entry
//!
//! Month lengths, the picker's year range and the default selection.

use chrono::{Datelike, NaiveDate};

use crate::types::{BirthDate, DateError};
use crate::{PICKER_YEAR_MAX, PICKER_YEAR_MIN, YEAR_MAX, YEAR_MIN};

/// Gregorian length of a month, leap years included.
///
/// `None` for a month outside 1..=12 or a year chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// Years offered by the picker, newest first
pub fn picker_years() -> impl Iterator<Item = i32> {
    (PICKER_YEAR_MIN..=PICKER_YEAR_MAX).rev()
}

/// Valid days for a year/month selection; empty when the month is invalid
pub fn picker_days(year: i32, month: u32) -> Vec<u32> {
    match days_in_month(year, month) {
        Some(max) => (1..=max).collect(),
        None => Vec::new(),
    }
}

/// Valid days for raw year/month fields, rejecting what `BirthDate` would
pub fn month_days(year: i64, month: i64) -> Result<Vec<u32>, DateError> {
    if year < YEAR_MIN as i64 || year > YEAR_MAX as i64 {
        return Err(DateError::YearOutOfRange { year });
    }
    if !(1..=12).contains(&month) {
        return Err(DateError::MonthOutOfRange { month });
    }
    Ok(picker_days(year as i32, month as u32))
}

/// Initial picker selection: today's year and month, today's day clamped
/// to the month length. The year is clamped into the picker range.
pub fn default_selection(today: NaiveDate) -> BirthDate {
    let year = today.year().clamp(PICKER_YEAR_MIN, PICKER_YEAR_MAX);
    let month = today.month();
    let max = days_in_month(year, month).unwrap_or(28);
    let day = today.day().min(max);
    BirthDate::new(year as i64, month as i64, day as i64)
        .unwrap_or_else(|_| BirthDate::unchecked(year, month, day))
}
