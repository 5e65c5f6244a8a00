//! Date parser: free-text dates and URL query strings
//!
//! Accepted text forms: `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD`
//! (1-4 digit year, 1-2 digit month and day).
//! Accepted query form: `year=..&month=..&day=..`, any order, optional `?`.
//! A repeated key keeps its first value. Values are not percent-decoded.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::types::{BirthDate, DateError};

lazy_static! {
    static ref RE_DATE: Regex = Regex::new(
        r"^\s*([0-9]{1,4})\s*[-/.]\s*([0-9]{1,2})\s*[-/.]\s*([0-9]{1,2})\s*$"
    ).unwrap();

    static ref RE_NUMBER: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
}

/// Parser for user-supplied dates
#[derive(Debug, Default, Clone, Copy)]
pub struct DateParser;

impl DateParser {
    /// Create new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a `YYYY-MM-DD`-style string
    pub fn parse(&self, input: &str) -> Result<BirthDate, DateError> {
        let caps = RE_DATE
            .captures(input)
            .ok_or_else(|| DateError::unparseable(input))?;

        // Each group is at most 4 ASCII digits.
        let field = |i: usize| -> i64 { caps[i].parse().unwrap_or(0) };
        let date = BirthDate::new(field(1), field(2), field(3))?;
        debug!("event=date_parsed input={:?} date={}", input.trim(), date);
        Ok(date)
    }

    /// Parse `year=..&month=..&day=..`; unknown keys are ignored
    pub fn parse_query(&self, query: &str) -> Result<BirthDate, DateError> {
        let year = parse_field("year", query_value(query, "year"))?;
        let month = parse_field("month", query_value(query, "month"))?;
        let day = parse_field("day", query_value(query, "day"))?;
        BirthDate::new(year, month, day)
    }
}

/// First value of `key` in a query string, `Some("")` for a bare key
pub fn query_value<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .trim()
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v)
}

/// Missing or empty → `Incomplete`, non-numeric → `Unparseable`
pub fn parse_field(name: &str, value: Option<&str>) -> Result<i64, DateError> {
    let value = value.map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Err(DateError::incomplete(name));
    }
    if !RE_NUMBER.is_match(value) {
        return Err(DateError::unparseable(value));
    }
    value.parse().map_err(|_| DateError::unparseable(value))
}

/// `true`/`false`; missing or empty means `false`
pub fn parse_flag(value: Option<&str>) -> Result<bool, DateError> {
    match value.map(str::trim).unwrap_or("") {
        "" | "false" => Ok(false),
        "true" => Ok(true),
        other => Err(DateError::unparseable(other)),
    }
}
