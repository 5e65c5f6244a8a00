//! Date validation errors
//!
//! The calculator itself never fails; everything here is raised by the
//! collaborators that build a `BirthDate` (calendar, parser, CLI, API).

use serde::Serialize;
use thiserror::Error;

/// Why a date input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateError {
    /// Year does not fit the 4-digit decomposition
    #[error("year {year} is out of range (expected 1..=9999)")]
    YearOutOfRange { year: i64 },

    #[error("month {month} is out of range (expected 1..=12)")]
    MonthOutOfRange { month: i64 },

    /// Day is not valid for the given month (leap years included)
    #[error("day {day} is out of range for {year:04}-{month:02} (expected 1..={max})")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: i64,
        max: u32,
    },

    /// A field was missing, empty or zero
    #[error("incomplete birth date: `{field}` is missing")]
    Incomplete { field: String },

    #[error("cannot parse `{input}` as a date")]
    Unparseable { input: String },
}

impl DateError {
    /// Stable machine code (API error bodies, logs)
    pub fn code(&self) -> &'static str {
        match self {
            Self::YearOutOfRange { .. } => "YEAR_OUT_OF_RANGE",
            Self::MonthOutOfRange { .. } => "MONTH_OUT_OF_RANGE",
            Self::DayOutOfRange { .. } => "DAY_OUT_OF_RANGE",
            Self::Incomplete { .. } => "INCOMPLETE_DATE",
            Self::Unparseable { .. } => "UNPARSEABLE_DATE",
        }
    }

    pub(crate) fn incomplete(field: &str) -> Self {
        Self::Incomplete {
            field: field.to_string(),
        }
    }

    pub(crate) fn unparseable(input: &str) -> Self {
        Self::Unparseable {
            input: input.to_string(),
        }
    }
}
