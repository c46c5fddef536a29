//! Termination predicates deciding where a date sequence stops
//!
//! A predicate is asked about the next candidate date before it is emitted.
//! Returning `true` ends the sequence. Predicates must be pure: the same
//! `(current, end)` pair always yields the same answer, which is what makes
//! an exhausted sequence stay exhausted.

use crate::date::CalendarDate;

/// Decides whether iteration is finished when `current` is the next candidate
pub trait Termination {
    fn is_finished(&self, current: CalendarDate, end: Option<CalendarDate>) -> bool;
}

/// Any pure closure over `(current, end)` can serve as a predicate
impl<F> Termination for F
where
    F: Fn(CalendarDate, Option<CalendarDate>) -> bool,
{
    fn is_finished(&self, current: CalendarDate, end: Option<CalendarDate>) -> bool {
        self(current, end)
    }
}

/// Never finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl Termination for Unbounded {
    fn is_finished(&self, _current: CalendarDate, _end: Option<CalendarDate>) -> bool {
        false
    }
}

/// Excludes the end date: `[start, end)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfOpen;

impl Termination for HalfOpen {
    fn is_finished(&self, current: CalendarDate, end: Option<CalendarDate>) -> bool {
        current >= required_end(end)
    }
}

/// Includes the end date when it lies on the step grid: `[start, end]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Closed;

impl Termination for Closed {
    fn is_finished(&self, current: CalendarDate, end: Option<CalendarDate>) -> bool {
        current > required_end(end)
    }
}

// Bounded predicates are only wired in by the bounded constructors, which
// always store an end date.
fn required_end(end: Option<CalendarDate>) -> CalendarDate {
    match end {
        Some(end) => end,
        None => unreachable!("bounded termination predicate evaluated without an end date"),
    }
}

/// The three built-in predicates behind one type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Unbounded,
    HalfOpen,
    Closed,
}

impl Termination for Bound {
    fn is_finished(&self, current: CalendarDate, end: Option<CalendarDate>) -> bool {
        match self {
            Bound::Unbounded => Unbounded.is_finished(current, end),
            Bound::HalfOpen => HalfOpen.is_finished(current, end),
            Bound::Closed => Closed.is_finished(current, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_date;

    fn date(text: &str) -> CalendarDate {
        parse_date(text).unwrap()
    }

    #[test]
    fn test_unbounded_never_finishes() {
        assert!(!Unbounded.is_finished(CalendarDate::MAX, None));
        assert!(!Bound::Unbounded.is_finished(date("2018-01-01"), Some(date("2017-01-01"))));
    }

    #[test]
    fn test_half_open_excludes_end() {
        let end = Some(date("2018-01-31"));
        assert!(!HalfOpen.is_finished(date("2018-01-30"), end));
        assert!(HalfOpen.is_finished(date("2018-01-31"), end));
        assert!(Bound::HalfOpen.is_finished(date("2018-02-01"), end));
    }

    #[test]
    fn test_closed_includes_end() {
        let end = Some(date("2018-01-31"));
        assert!(!Closed.is_finished(date("2018-01-31"), end));
        assert!(Closed.is_finished(date("2018-02-01"), end));
        assert!(!Bound::Closed.is_finished(date("2018-01-31"), end));
    }

    #[test]
    #[should_panic(expected = "without an end date")]
    fn test_bounded_predicate_without_end_is_a_bug() {
        HalfOpen.is_finished(date("2018-01-01"), None);
    }

    #[test]
    fn test_closure_predicate() {
        let mid_month = |current: CalendarDate, _end: Option<CalendarDate>| current.day() > 15;
        assert!(!mid_month.is_finished(date("2018-01-15"), None));
        assert!(mid_month.is_finished(date("2018-01-16"), None));
    }
}
