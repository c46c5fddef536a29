//! Calendar-aware date sequences
//!
//! This crate generates successive calendar dates from a start date, stepping
//! by a fixed interval such as "7 days" or "1 month". Sequences are either
//! unbounded or stop at an end date that is excluded (`to`) or included
//! (`through`). Dates travel as strict `YYYY-MM-DD` strings on the way in and
//! out.

#![warn(clippy::all)]

pub mod bound;
pub mod date;
pub mod error;
pub mod interval;
pub mod sequence;

// Re-export main types
pub use bound::{Bound, Closed, HalfOpen, Termination, Unbounded};
pub use date::{format_date, parse_date, CalendarDate, DateCodec};
pub use error::{StrideError, StrideResult};
pub use interval::{CalendarUnit, Interval};
pub use sequence::DateSequence;
