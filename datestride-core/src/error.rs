//! Error type shared by the codec, interval and sequence modules

use crate::date::CalendarDate;
use crate::interval::CalendarUnit;
use thiserror::Error;

/// Errors raised while parsing dates or building date sequences
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrideError {
    #[error("Invalid date string: {0:?} (expected YYYY-MM-DD)")]
    InvalidString(String),
    #[error("Invalid interval: {quantity} {unit} (quantity must be positive)")]
    InvalidInterval { quantity: i64, unit: CalendarUnit },
    #[error("Unknown calendar unit: {0:?}")]
    InvalidUnit(String),
    #[error("Invalid bounds: end date {end} precedes start date {start}")]
    InvalidBounds { start: CalendarDate, end: CalendarDate },
    #[error("Invalid request: {0}")]
    InvalidRequest(&'static str),
}

pub type StrideResult<T> = Result<T, StrideError>;
