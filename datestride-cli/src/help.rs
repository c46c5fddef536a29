//! Help topics for the datestride CLI

use std::fmt;

/// Help topics available through `datestride help-topic`
#[derive(Debug, Clone, PartialEq)]
pub enum HelpTopic {
    General,
    Dates,
    Intervals,
    Bounds,
    Environment,
}

impl HelpTopic {
    /// Look up a topic by name or common abbreviation
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "general" | "overview" => Some(HelpTopic::General),
            "dates" | "date" | "format" => Some(HelpTopic::Dates),
            "intervals" | "interval" | "every" => Some(HelpTopic::Intervals),
            "bounds" | "bound" | "to" | "through" => Some(HelpTopic::Bounds),
            "environment" | "env" | "config" => Some(HelpTopic::Environment),
            _ => None,
        }
    }

    pub fn get_help_text(&self) -> &'static str {
        match self {
            HelpTopic::General => GENERAL_HELP,
            HelpTopic::Dates => DATES_HELP,
            HelpTopic::Intervals => INTERVALS_HELP,
            HelpTopic::Bounds => BOUNDS_HELP,
            HelpTopic::Environment => ENVIRONMENT_HELP,
        }
    }
}

impl fmt::Display for HelpTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_help_text())
    }
}

const GENERAL_HELP: &str = r#"
OVERVIEW:
datestride prints calendar dates from a start date, stepping by a fixed
interval, optionally stopping at an end date.

USAGE:
    datestride [global-options] COMMAND [command-options] [ARGS]

EXAMPLES:
    datestride list 2018-01-01 --through 2018-06-04 --every "7 days"
    datestride list 2018-01-31 --every month --limit 6
    datestride list 2018-01-01 --to 2019-01-01 --every quarter --reverse
    datestride list 2018-01-01 --to 2018-01-08 --separator ,
    datestride contains 2018-01-01 2018-03-05 --through 2018-06-04 --every 1w

COMMANDS:
    list, ls                 Print the dates of a sequence
    contains                 Check whether a date is in a sequence
    completion SHELL         Generate a shell completion script
    help-topic TOPIC         Show help on dates, intervals, bounds, environment
"#;

const DATES_HELP: &str = r#"
DATES:
Dates are written exactly as YYYY-MM-DD: a four digit year, two digit month
and two digit day separated by ASCII hyphens, e.g. 2018-03-05. Days are
checked against the month length, leap years included. Times, time zones,
week dates (2018-W10) and ordinal dates (2018-064) are not accepted.
"#;

const INTERVALS_HELP: &str = r#"
INTERVALS:
The --every option takes a positive quantity and a calendar unit:

    7 days, 7d               seven days
    2 weeks, 2w              fourteen days
    1 month, month, m        one calendar month
    1 quarter, q             three calendar months
    1 year, y                one calendar year

Month, quarter and year steps keep the day of month when possible and
otherwise clamp to the month's last day; each step starts from the previous
date, so 2018-01-31 monthly gives 2018-02-28, 2018-03-28, ...
"#;

const BOUNDS_HELP: &str = r#"
BOUNDS:
    --to END                 Stop before END; END itself is never printed
    --through END            Stop after END; END is printed when it falls on
                             the step grid from the start date
    (neither)                Never stop; list requires --limit

END may not precede the start date. --reverse only applies to bounded
sequences.
"#;

const ENVIRONMENT_HELP: &str = r#"
ENVIRONMENT:
    DATESTRIDE_INTERVAL      Default for --every (fallback: 1 day)
    DATESTRIDE_LIMIT         Default for --limit
    DATESTRIDE_SEPARATOR     Default for --separator (fallback: newline)
    RUST_LOG                 Log filter, e.g. RUST_LOG=debug

Command-line options take precedence. --args-only ignores the DATESTRIDE_*
variables entirely.
"#;
