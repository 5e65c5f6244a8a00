//! Validated birth dates and their digit decomposition

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::core::calendar::days_in_month;
use crate::types::DateError;
use crate::{YEAR_MAX, YEAR_MIN};

/// A calendar date the calculator is allowed to see.
///
/// Only constructible through validation, so the year always fits the
/// 4-slot decomposition and the day always exists in its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BirthDate {
    year: i32,
    month: u32,
    day: u32,
}

impl BirthDate {
    /// Validate raw fields. Zero fields count as missing.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        if year == 0 {
            return Err(DateError::incomplete("year"));
        }
        if month == 0 {
            return Err(DateError::incomplete("month"));
        }
        if day == 0 {
            return Err(DateError::incomplete("day"));
        }
        if year < YEAR_MIN as i64 || year > YEAR_MAX as i64 {
            return Err(DateError::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange { month });
        }

        let (year, month) = (year as i32, month as u32);
        let max = days_in_month(year, month).ok_or(DateError::MonthOutOfRange {
            month: month as i64,
        })?;
        if day < 1 || day > max as i64 {
            return Err(DateError::DayOutOfRange { year, month, day, max });
        }

        Ok(Self {
            year,
            month,
            day: day as u32,
        })
    }

    /// Build without validation, for the raw calculator entry point
    pub(crate) fn unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Convert from a chrono date (fails only outside 1..=9999)
    pub fn from_naive(date: NaiveDate) -> Result<Self, DateError> {
        Self::new(date.year() as i64, date.month() as i64, date.day() as i64)
    }

    pub fn to_naive(&self) -> NaiveDate {
        // Fields were validated against chrono's calendar in `new`.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// The eight date digits A..H.
///
/// A,B = day tens/ones; C,D = month tens/ones; E,F,G,H = year digits,
/// zero-padded to four places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct DateDigits {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub g: u32,
    pub h: u32,
}

impl DateDigits {
    /// Day as printed under the triangle ("05")
    pub fn day_label(&self) -> String {
        format!("{}{}", self.a, self.b)
    }

    pub fn month_label(&self) -> String {
        format!("{}{}", self.c, self.d)
    }

    /// Century half of the year ("19")
    pub fn year_head_label(&self) -> String {
        format!("{}{}", self.e, self.f)
    }

    /// Last two year digits ("90")
    pub fn year_tail_label(&self) -> String {
        format!("{}{}", self.g, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let date = BirthDate::new(1990, 5, 15).unwrap();
        assert_eq!(date.year(), 1990);
        assert_eq!(date.month(), 5);
        assert_eq!(date.day(), 15);
        assert_eq!(date.to_string(), "1990-05-15");
    }

    #[test]
    fn test_zero_fields_are_incomplete() {
        assert_eq!(BirthDate::new(0, 5, 15).unwrap_err().code(), "INCOMPLETE_DATE");
        assert_eq!(BirthDate::new(1990, 0, 15).unwrap_err().code(), "INCOMPLETE_DATE");
        assert_eq!(BirthDate::new(1990, 5, 0).unwrap_err().code(), "INCOMPLETE_DATE");
    }

    #[test]
    fn test_year_bounds() {
        assert!(BirthDate::new(1, 1, 1).is_ok());
        assert!(BirthDate::new(9999, 12, 31).is_ok());
        assert_eq!(
            BirthDate::new(10000, 1, 1).unwrap_err(),
            DateError::YearOutOfRange { year: 10000 }
        );
        assert_eq!(
            BirthDate::new(-5, 1, 1).unwrap_err(),
            DateError::YearOutOfRange { year: -5 }
        );
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            BirthDate::new(2000, 13, 1).unwrap_err(),
            DateError::MonthOutOfRange { month: 13 }
        );
    }

    #[test]
    fn test_leap_day() {
        assert!(BirthDate::new(2024, 2, 29).is_ok());
        assert!(BirthDate::new(2000, 2, 29).is_ok());
        assert_eq!(
            BirthDate::new(1900, 2, 29).unwrap_err(),
            DateError::DayOutOfRange { year: 1900, month: 2, day: 29, max: 28 }
        );
    }

    #[test]
    fn test_naive_roundtrip() {
        let naive = NaiveDate::from_ymd_opt(1985, 11, 3).unwrap();
        let date = BirthDate::from_naive(naive).unwrap();
        assert_eq!(date.to_naive(), naive);
    }

    #[test]
    fn test_serializes_as_fields() {
        let date = BirthDate::new(2000, 1, 1).unwrap();
        let json = serde_json::to_value(date).unwrap();
        assert_eq!(json, serde_json::json!({"year": 2000, "month": 1, "day": 1}));
    }

    #[test]
    fn test_digit_labels() {
        let digits = DateDigits { a: 0, b: 5, c: 1, d: 2, e: 1, f: 9, g: 0, h: 7 };
        assert_eq!(digits.day_label(), "05");
        assert_eq!(digits.month_label(), "12");
        assert_eq!(digits.year_head_label(), "19");
        assert_eq!(digits.year_tail_label(), "07");
    }
}
