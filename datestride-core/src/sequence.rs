//! Lazily stepped date sequences
//!
//! A [`DateSequence`] is a pull-based cursor: every call to `next` considers
//! the current date, asks the termination predicate whether iteration is
//! over, and if not emits the date and steps the cursor forward by the
//! interval. Sequences are not restartable. Re-iterating from the start
//! means building a new sequence (or cloning one before consuming it).
//!
//! ```
//! use datestride_core::{CalendarUnit, DateSequence};
//!
//! let weeks: Vec<String> = DateSequence::through("2018-01-01", "2018-01-29", 7, CalendarUnit::Day)?
//!     .map(|date| date.to_string())
//!     .collect();
//! assert_eq!(weeks, ["2018-01-01", "2018-01-08", "2018-01-15", "2018-01-22", "2018-01-29"]);
//! # Ok::<(), datestride_core::StrideError>(())
//! ```

use crate::bound::{Bound, Termination};
use crate::date::{parse_date, CalendarDate};
use crate::error::{StrideError, StrideResult};
use crate::interval::{CalendarUnit, Interval};
use log::{debug, trace};
use std::iter::FusedIterator;

/// Calendar dates from a start date, spaced by a fixed interval
#[derive(Debug, Clone)]
pub struct DateSequence<T = Bound> {
    /// Next candidate; `None` once stepping left the representable range
    current: Option<CalendarDate>,
    end: Option<CalendarDate>,
    interval: Interval,
    termination: T,
}

impl DateSequence<Bound> {
    /// An infinite sequence starting at `start`
    pub fn unbounded(start: &str, quantity: i64, unit: CalendarUnit) -> StrideResult<Self> {
        let start = parse_date(start)?;
        Self::unbounded_from(start, Interval::new(quantity, unit)?)
    }

    /// A sequence over `[start, end)`
    pub fn to(start: &str, end: &str, quantity: i64, unit: CalendarUnit) -> StrideResult<Self> {
        Self::bounded(start, end, quantity, unit, Bound::HalfOpen)
    }

    /// A sequence over `[start, end]`; `end` is emitted only when it falls on
    /// the step grid from `start`
    pub fn through(start: &str, end: &str, quantity: i64, unit: CalendarUnit) -> StrideResult<Self> {
        Self::bounded(start, end, quantity, unit, Bound::Closed)
    }

    pub fn unbounded_from(start: CalendarDate, interval: Interval) -> StrideResult<Self> {
        debug!("unbounded date sequence from {} every {}", start, interval);
        Ok(DateSequence {
            current: Some(start),
            end: None,
            interval,
            termination: Bound::Unbounded,
        })
    }

    pub fn to_dates(start: CalendarDate, end: CalendarDate, interval: Interval) -> StrideResult<Self> {
        Self::bounded_dates(start, end, interval, Bound::HalfOpen)
    }

    pub fn through_dates(start: CalendarDate, end: CalendarDate, interval: Interval) -> StrideResult<Self> {
        Self::bounded_dates(start, end, interval, Bound::Closed)
    }
}

impl<T: Termination> DateSequence<T> {
    /// Build a bounded sequence with a caller supplied termination predicate.
    ///
    /// Validates, in order: both dates parse, `end` is not before `start`,
    /// and the interval quantity is positive.
    pub fn bounded(
        start: &str,
        end: &str,
        quantity: i64,
        unit: CalendarUnit,
        termination: T,
    ) -> StrideResult<Self> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if end < start {
            return Err(StrideError::InvalidBounds { start, end });
        }
        Self::bounded_dates(start, end, Interval::new(quantity, unit)?, termination)
    }

    pub fn bounded_dates(
        start: CalendarDate,
        end: CalendarDate,
        interval: Interval,
        termination: T,
    ) -> StrideResult<Self> {
        if end < start {
            return Err(StrideError::InvalidBounds { start, end });
        }
        debug!("date sequence from {} to {} every {}", start, end, interval);
        Ok(DateSequence {
            current: Some(start),
            end: Some(end),
            interval,
            termination,
        })
    }

    pub fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn is_bounded(&self) -> bool {
        self.end.is_some()
    }

    /// The date the next call to `next` would return, without consuming it
    pub fn peek(&self) -> Option<CalendarDate> {
        self.current
            .filter(|current| !self.termination.is_finished(*current, self.end))
    }

    /// Whether `date` is still ahead in the sequence.
    ///
    /// The search starts from the current position, so dates already
    /// consumed are not found. It stops at the first emitted date past
    /// `date`, which keeps it finite on unbounded sequences too. The cursor
    /// is restored before returning.
    pub fn contains(&mut self, date: CalendarDate) -> bool {
        let saved = self.current;
        let found = self
            .by_ref()
            .take_while(|candidate| *candidate <= date)
            .any(|candidate| candidate == date);
        self.current = saved;
        found
    }

    /// [`contains`](Self::contains) for a `YYYY-MM-DD` string
    pub fn contains_str(&mut self, text: &str) -> StrideResult<bool> {
        let date = parse_date(text)?;
        Ok(self.contains(date))
    }

    /// Collect the remaining dates and test them against `predicate`.
    ///
    /// Leaves the sequence exhausted. Fails on an unbounded sequence.
    pub fn contains_matching<P>(&mut self, predicate: P) -> StrideResult<bool>
    where
        P: FnMut(&CalendarDate) -> bool,
    {
        if !self.is_bounded() {
            return Err(StrideError::InvalidRequest(
                "cannot search an unbounded date sequence",
            ));
        }
        let dates: Vec<CalendarDate> = self.by_ref().collect();
        Ok(dates.iter().any(predicate))
    }

    /// The remaining dates, last first.
    ///
    /// Leaves the sequence exhausted. Fails on an unbounded sequence.
    pub fn reversed(&mut self) -> StrideResult<Vec<CalendarDate>> {
        if !self.is_bounded() {
            return Err(StrideError::InvalidRequest(
                "cannot reverse an unbounded date sequence",
            ));
        }
        let mut dates: Vec<CalendarDate> = self.by_ref().collect();
        dates.reverse();
        Ok(dates)
    }
}

impl<T: Termination> Iterator for DateSequence<T> {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.current?;
        if self.termination.is_finished(candidate, self.end) {
            trace!("date sequence finished at {}", candidate);
            return None;
        }

        // Past the calendar's range a bounded sequence is necessarily beyond
        // its end; an unbounded one saturates at the last representable date.
        self.current = match candidate.advance(self.interval) {
            Some(next) => Some(next),
            None if self.end.is_none() => Some(CalendarDate::MAX),
            None => None,
        };
        Some(candidate)
    }
}

impl<T: Termination> FusedIterator for DateSequence<T> {}
