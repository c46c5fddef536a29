//! Calendar dates and the `YYYY-MM-DD` text codec
//!
//! Dates are day-granular points on the proleptic Gregorian calendar,
//! implicitly at UTC midnight. The only accepted text form is the dashed
//! ISO 8601 calendar date with a four digit year, e.g. `2018-01-31`.

use crate::error::{StrideError, StrideResult};
use crate::interval::{CalendarUnit, Interval};
use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Days, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Process-wide codec, built on first use
static SHARED_CODEC: Lazy<DateCodec> = Lazy::new(DateCodec::new);

/// A calendar date at UTC midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Earliest date chrono can represent
    pub const MIN: CalendarDate = CalendarDate(NaiveDate::MIN);
    /// Latest date chrono can represent
    pub const MAX: CalendarDate = CalendarDate(NaiveDate::MAX);

    /// Create a date from its year, month (1-12) and day (1-31) parts
    pub fn new(year: i32, month: u32, day: u32) -> StrideResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| StrideError::InvalidString(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Step forward by `interval` using calendar rules.
    ///
    /// Month based units keep the day of month where possible and otherwise
    /// clamp to the last day of the target month, so 2018-01-31 plus one
    /// month is 2018-02-28. Returns `None` when the result falls outside
    /// the representable range.
    pub fn advance(&self, interval: Interval) -> Option<CalendarDate> {
        let quantity = u64::try_from(interval.quantity()).ok()?;
        let stepped = match interval.unit() {
            CalendarUnit::Day => self.0.checked_add_days(Days::new(quantity)),
            CalendarUnit::Week => self.0.checked_add_days(Days::new(quantity.checked_mul(7)?)),
            CalendarUnit::Month => self.0.checked_add_months(Months::new(months(quantity, 1)?)),
            CalendarUnit::Quarter => self.0.checked_add_months(Months::new(months(quantity, 3)?)),
            CalendarUnit::Year => self.0.checked_add_months(Months::new(months(quantity, 12)?)),
        };
        stepped.map(CalendarDate)
    }
}

fn months(quantity: u64, per_unit: u64) -> Option<u32> {
    u32::try_from(quantity.checked_mul(per_unit)?).ok()
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SHARED_CODEC.format_display(*self))
    }
}

impl FromStr for CalendarDate {
    type Err = StrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = StrideError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_date(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        format_date(date)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

/// Strict `YYYY-MM-DD` parser and formatter.
///
/// Holds its compiled pattern and format items, so one instance can be built
/// up front and handed to whatever needs it. [`DateCodec::shared`] returns a
/// lazily initialized process-wide instance for callers that don't.
#[derive(Debug, Clone)]
pub struct DateCodec {
    pattern: Regex,
    items: Vec<Item<'static>>,
}

impl DateCodec {
    pub fn new() -> Self {
        // ASCII classes only: `\d` would also admit non-ASCII digits
        let pattern = Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$")
            .expect("date pattern is a valid regex");
        let items = StrftimeItems::new(DATE_FORMAT).collect();
        DateCodec { pattern, items }
    }

    /// The process-wide codec used by [`parse_date`] and [`format_date`]
    pub fn shared() -> &'static DateCodec {
        &SHARED_CODEC
    }

    /// Parse exactly `YYYY-MM-DD` into a date.
    ///
    /// No whitespace trimming, alternate separators, week or ordinal dates,
    /// or time components are accepted. The day is validated against the
    /// month length, leap years included.
    pub fn parse(&self, text: &str) -> StrideResult<CalendarDate> {
        let invalid = || StrideError::InvalidString(text.to_string());
        let caps = self.pattern.captures(text).ok_or_else(invalid)?;

        let year: i32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let day: u32 = caps[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(invalid)
    }

    pub fn format(&self, date: CalendarDate) -> String {
        self.format_display(date).to_string()
    }

    fn format_display(&self, date: CalendarDate) -> impl fmt::Display + '_ {
        date.0.format_with_items(self.items.iter())
    }
}

impl Default for DateCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `YYYY-MM-DD` string with the shared codec
pub fn parse_date(text: &str) -> StrideResult<CalendarDate> {
    SHARED_CODEC.parse(text)
}

/// Format a date as `YYYY-MM-DD` with the shared codec
pub fn format_date(date: CalendarDate) -> String {
    SHARED_CODEC.format(date)
}
