//! Tests for the `YYYY-MM-DD` codec and calendar arithmetic
//!
//! Covers the strict date grammar, month length validation and the
//! round-trip law between parsing and formatting.

use datestride_core::*;
use proptest::prelude::*;

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_accepts_dashed_dates() {
        let date = parse_date("2018-01-31").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2018, 1, 31));
        assert_eq!(date, CalendarDate::new(2018, 1, 31).unwrap());
        assert_eq!("2018-01-31".parse::<CalendarDate>().unwrap(), date);
    }

    #[test]
    fn test_four_digit_year_extremes() {
        assert_eq!(parse_date("0000-01-01").unwrap().year(), 0);
        assert_eq!(parse_date("9999-12-31").unwrap().year(), 9999);
    }

    #[test]
    fn test_rejects_invalid_calendar_dates() {
        for text in ["2018-13-01", "2018-12-32", "2018-13-40", "2019-02-29", "2018-06-31"] {
            assert_eq!(
                parse_date(text),
                Err(StrideError::InvalidString(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn test_rejects_lenient_forms() {
        // other separators, short parts, times, week and ordinal dates
        for text in [
            "2018/01/31",
            "2018-1-31",
            "2018-01-3",
            "02018-01-31",
            "2018-01-31T00:00:00Z",
            "2018-01-31Z",
            "2018-W05-3",
            "2018-031",
            "not-a-date",
        ] {
            assert!(parse_date(text).is_err(), "{text} should be rejected");
        }
    }

    #[test]
    fn test_error_message_names_the_input() {
        let err = parse_date("31/01/2018").unwrap_err();
        assert!(err.to_string().contains("31/01/2018"));
    }
}

#[cfg(test)]
mod codec_tests {
    use super::*;

    #[test]
    fn test_shared_codec_is_reused() {
        let first = DateCodec::shared() as *const DateCodec;
        let second = DateCodec::shared() as *const DateCodec;
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_codec_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let text = format!("2018-0{}-15", i + 1);
                    format_date(parse_date(&text).unwrap()) == text
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_format_beyond_four_digit_years() {
        // expanded years render with a sign and are outside the parse grammar
        let far = CalendarDate::new(12018, 1, 1).unwrap();
        let text = format_date(far);
        assert_eq!(text, "+12018-01-01");
        assert!(parse_date(&text).is_err());
    }
}

#[cfg(test)]
mod arithmetic_tests {
    use super::*;

    #[test]
    fn test_month_end_clamping() {
        let jan31 = parse_date("2019-01-31").unwrap();
        let cases = [
            (Interval::months(1).unwrap(), "2019-02-28"),
            (Interval::months(2).unwrap(), "2019-03-31"),
            (Interval::months(3).unwrap(), "2019-04-30"),
            (Interval::new(1, CalendarUnit::Quarter).unwrap(), "2019-04-30"),
            (Interval::years(1).unwrap(), "2020-01-31"),
        ];
        for (interval, expected) in cases {
            assert_eq!(jan31.advance(interval).unwrap().to_string(), expected, "{interval}");
        }
    }

    #[test]
    fn test_week_equals_seven_days() {
        let date = parse_date("2018-12-30").unwrap();
        assert_eq!(
            date.advance(Interval::weeks(3).unwrap()),
            date.advance(Interval::days(21).unwrap())
        );
    }
}

fn four_digit_date() -> impl Strategy<Value = CalendarDate> {
    (0i32..=9999, 1u32..=12, 1u32..=31).prop_filter_map("valid calendar date", |(y, m, d)| {
        CalendarDate::new(y, m, d).ok()
    })
}

proptest! {
    #[test]
    fn prop_parse_inverts_format(date in four_digit_date()) {
        prop_assert_eq!(parse_date(&format_date(date)).unwrap(), date);
    }

    #[test]
    fn prop_format_inverts_parse(y in 0i32..=9999, m in 1u32..=12, d in 1u32..=28) {
        let text = format!("{:04}-{:02}-{:02}", y, m, d);
        prop_assert_eq!(format_date(parse_date(&text).unwrap()), text);
    }

    #[test]
    fn prop_order_matches_text_order(a in four_digit_date(), b in four_digit_date()) {
        prop_assert_eq!(a.cmp(&b), format_date(a).cmp(&format_date(b)));
    }

    #[test]
    fn prop_advance_moves_forward(date in four_digit_date(), q in 1i64..500, unit_idx in 0usize..5) {
        let unit = [
            CalendarUnit::Day,
            CalendarUnit::Week,
            CalendarUnit::Month,
            CalendarUnit::Quarter,
            CalendarUnit::Year,
        ][unit_idx];
        let next = date.advance(Interval::new(q, unit).unwrap()).unwrap();
        prop_assert!(next > date);
    }
}
