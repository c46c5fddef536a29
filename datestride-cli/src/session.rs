//! Session state and configuration management
//!
//! Settings come from command-line flags first and `DATESTRIDE_*`
//! environment variables second, unless `--args-only` is given.

use crate::cli::{Cli, RangeArgs};
use anyhow::{Context, Result};
use datestride_core::{CalendarUnit, Interval};
use log::debug;
use std::env;

pub const INTERVAL_VAR: &str = "DATESTRIDE_INTERVAL";
pub const LIMIT_VAR: &str = "DATESTRIDE_LIMIT";
pub const SEPARATOR_VAR: &str = "DATESTRIDE_SEPARATOR";

/// Configuration loaded from environment variables
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// Step used when `--every` is absent
    pub interval: Option<Interval>,

    /// Cap on printed dates when `--limit` is absent
    pub limit: Option<usize>,

    /// Separator used when `--separator` is absent
    pub separator: Option<String>,
}

impl Config {
    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(text) = lookup(INTERVAL_VAR) {
            let interval = text
                .parse::<Interval>()
                .with_context(|| format!("Invalid {}: {:?}", INTERVAL_VAR, text))?;
            config.interval = Some(interval);
        }

        if let Some(text) = lookup(LIMIT_VAR) {
            let limit = text
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid {}: {:?}", LIMIT_VAR, text))?;
            config.limit = Some(limit);
        }

        if let Some(separator) = lookup(SEPARATOR_VAR) {
            config.separator = Some(unescape(&separator));
        }

        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }
}

/// Global session state for the datestride application
pub struct Session {
    pub config: Config,

    /// Whether verbose mode is enabled
    pub verbose_enabled: bool,
}

impl Session {
    /// Create a new session from command-line arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = if cli.args_only {
            Config::default()
        } else {
            Config::from_env().context("Failed to load environment configuration")?
        };
        debug!("session configuration: {:?}", config);

        Ok(Session { config, verbose_enabled: cli.verbose })
    }

    pub fn with_config(config: Config) -> Self {
        Session { config, verbose_enabled: false }
    }

    /// The step for a sequence: `--every`, then the environment, then one day
    pub fn resolve_interval(&self, range: &RangeArgs) -> Result<Interval> {
        match &range.every {
            Some(text) => text
                .parse::<Interval>()
                .with_context(|| format!("Invalid --every value: {:?}", text)),
            None => match self.config.interval {
                Some(interval) => Ok(interval),
                None => Ok(Interval::new(1, CalendarUnit::Day)?),
            },
        }
    }

    pub fn resolve_limit(&self, flag: Option<usize>) -> Option<usize> {
        flag.or(self.config.limit)
    }

    pub fn resolve_separator(&self, flag: Option<&str>) -> String {
        match flag {
            Some(separator) => unescape(separator),
            None => self.config.separator.clone().unwrap_or_else(|| "\n".to_string()),
        }
    }
}

/// Expand `\n`, `\t` and `\\` so separators can be given on a shell line
fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    fn range(every: Option<&str>) -> RangeArgs {
        RangeArgs {
            start: "2018-01-01".to_string(),
            to: None,
            through: None,
            every: every.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_environment() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_environment_values() {
        let config = config_from(&[
            (INTERVAL_VAR, "2 weeks"),
            (LIMIT_VAR, " 12 "),
            (SEPARATOR_VAR, ",\\t"),
        ])
        .unwrap();
        assert_eq!(config.interval, Some(Interval::weeks(2).unwrap()));
        assert_eq!(config.limit, Some(12));
        assert_eq!(config.separator.as_deref(), Some(",\t"));
    }

    #[test]
    fn test_invalid_environment_values() {
        let err = config_from(&[(INTERVAL_VAR, "0 days")]).unwrap_err();
        assert!(err.to_string().contains(INTERVAL_VAR));

        let err = config_from(&[(LIMIT_VAR, "many")]).unwrap_err();
        assert!(err.to_string().contains(LIMIT_VAR));
    }

    #[test]
    fn test_flags_override_environment() {
        let session = Session::with_config(Config {
            interval: Some(Interval::months(1).unwrap()),
            limit: Some(5),
            separator: Some(",".to_string()),
        });

        assert_eq!(session.resolve_interval(&range(Some("3d"))).unwrap(), Interval::days(3).unwrap());
        assert_eq!(session.resolve_interval(&range(None)).unwrap(), Interval::months(1).unwrap());
        assert_eq!(session.resolve_limit(Some(2)), Some(2));
        assert_eq!(session.resolve_limit(None), Some(5));
        assert_eq!(session.resolve_separator(Some("\\n")), "\n");
        assert_eq!(session.resolve_separator(None), ",");
    }

    #[test]
    fn test_defaults() {
        let session = Session::with_config(Config::default());
        assert_eq!(session.resolve_interval(&range(None)).unwrap(), Interval::days(1).unwrap());
        assert_eq!(session.resolve_limit(None), None);
        assert_eq!(session.resolve_separator(None), "\n");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("a\\nb"), "a\nb");
        assert_eq!(unescape("\\\\"), "\\");
        assert_eq!(unescape("\\x"), "\\x");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }
}
