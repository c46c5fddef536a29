//! Step intervals: a positive quantity of a calendar unit

use crate::error::{StrideError, StrideResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar units a sequence can step by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Day,
    Week,
    Month,
    /// Three months
    Quarter,
    Year,
}

impl CalendarUnit {
    pub fn name(&self) -> &'static str {
        match self {
            CalendarUnit::Day => "day",
            CalendarUnit::Week => "week",
            CalendarUnit::Month => "month",
            CalendarUnit::Quarter => "quarter",
            CalendarUnit::Year => "year",
        }
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarUnit {
    type Err = StrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "day" | "days" | "daily" => Ok(CalendarUnit::Day),
            "w" | "wk" | "week" | "weeks" | "weekly" => Ok(CalendarUnit::Week),
            "m" | "mo" | "month" | "months" | "monthly" => Ok(CalendarUnit::Month),
            "q" | "quarter" | "quarters" | "quarterly" => Ok(CalendarUnit::Quarter),
            "y" | "yr" | "year" | "years" | "yearly" => Ok(CalendarUnit::Year),
            _ => Err(StrideError::InvalidUnit(s.to_string())),
        }
    }
}

/// Distance between consecutive dates of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct Interval {
    quantity: i64,
    unit: CalendarUnit,
}

impl Interval {
    /// Create an interval, rejecting a quantity of zero or less
    pub fn new(quantity: i64, unit: CalendarUnit) -> StrideResult<Self> {
        if quantity <= 0 {
            return Err(StrideError::InvalidInterval { quantity, unit });
        }
        Ok(Interval { quantity, unit })
    }

    pub fn days(quantity: i64) -> StrideResult<Self> {
        Self::new(quantity, CalendarUnit::Day)
    }

    pub fn weeks(quantity: i64) -> StrideResult<Self> {
        Self::new(quantity, CalendarUnit::Week)
    }

    pub fn months(quantity: i64) -> StrideResult<Self> {
        Self::new(quantity, CalendarUnit::Month)
    }

    pub fn years(quantity: i64) -> StrideResult<Self> {
        Self::new(quantity, CalendarUnit::Year)
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit(&self) -> CalendarUnit {
        self.unit
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quantity == 1 {
            write!(f, "1 {}", self.unit)
        } else {
            write!(f, "{} {}s", self.quantity, self.unit)
        }
    }
}

/// Parses period text such as `7 days`, `1 month`, `2w` or a bare `week`
impl FromStr for Interval {
    type Err = StrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits_end = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '-' || c == '+'))
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(digits_end);
        let unit: CalendarUnit = unit.trim().parse()?;

        let quantity = if number.is_empty() {
            1
        } else {
            number
                .parse::<i64>()
                .map_err(|_| StrideError::InvalidUnit(s.to_string()))?
        };

        Interval::new(quantity, unit)
    }
}

#[derive(Serialize, Deserialize)]
struct RawInterval {
    quantity: i64,
    unit: CalendarUnit,
}

impl TryFrom<RawInterval> for Interval {
    type Error = StrideError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.quantity, raw.unit)
    }
}

impl From<Interval> for RawInterval {
    fn from(interval: Interval) -> Self {
        RawInterval { quantity: interval.quantity, unit: interval.unit }
    }
}
