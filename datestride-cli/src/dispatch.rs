//! Command dispatch
//!
//! Turns parsed arguments into date sequences and writes their output.

use crate::cli::{Cli, Command, CompletionArgs, ContainsArgs, HelpTopicArgs, ListArgs, RangeArgs};
use crate::completion;
use crate::help::HelpTopic;
use crate::session::Session;
use anyhow::{anyhow, bail, Context, Result};
use clap::CommandFactory;
use datestride_core::{parse_date, CalendarDate, DateSequence};
use log::{debug, info};
use std::io::{self, Write};

/// Main command dispatcher
pub struct Dispatcher {
    session: Session,
}

impl Dispatcher {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Execute the command specified in the CLI arguments, writing to stdout
    pub fn execute(&mut self, cli: &Cli) -> Result<i32> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute_to(cli, &mut out)
    }

    /// Execute the command, writing its output to `out`. Returns the exit code.
    pub fn execute_to<W: Write>(&mut self, cli: &Cli, out: &mut W) -> Result<i32> {
        debug!("executing {} command", cli.command.command_name());
        match &cli.command {
            Command::List(args) => self.execute_list_command(args, out),
            Command::Contains(args) => self.execute_contains_command(args, out),
            Command::Completion(args) => self.execute_completion_command(args),
            Command::HelpTopic(args) => self.execute_help_topic_command(args, out),
        }
    }

    /// Build the sequence described by `range`
    fn build_sequence(&self, range: &RangeArgs) -> Result<DateSequence> {
        let interval = self.session.resolve_interval(range)?;
        let start = parse_date(&range.start).context("Invalid start date")?;

        let sequence = match (&range.to, &range.through) {
            (Some(end), _) => {
                let end = parse_date(end).context("Invalid --to date")?;
                DateSequence::to_dates(start, end, interval)?
            }
            (None, Some(end)) => {
                let end = parse_date(end).context("Invalid --through date")?;
                DateSequence::through_dates(start, end, interval)?
            }
            (None, None) => DateSequence::unbounded_from(start, interval)?,
        };
        Ok(sequence)
    }

    fn execute_list_command<W: Write>(&mut self, args: &ListArgs, out: &mut W) -> Result<i32> {
        let mut sequence = self.build_sequence(&args.range)?;
        let limit = self.session.resolve_limit(args.limit);

        let dates: Vec<CalendarDate> = if args.reverse {
            let mut dates = sequence
                .reversed()
                .map_err(|e| anyhow!(e).context("--reverse needs --to or --through"))?;
            if let Some(limit) = limit {
                dates.truncate(limit);
            }
            dates
        } else {
            match limit {
                Some(limit) => sequence.take(limit).collect(),
                None if sequence.is_bounded() => sequence.collect(),
                None => bail!(
                    "Unbounded sequence needs a limit: pass --to, --through or --limit, or set {}",
                    crate::session::LIMIT_VAR
                ),
            }
        };
        info!("listing {} dates", dates.len());

        if args.json {
            serde_json::to_writer(&mut *out, &dates).context("Failed to write JSON output")?;
            writeln!(out)?;
        } else if !dates.is_empty() {
            let separator = self.session.resolve_separator(args.separator.as_deref());
            let text: Vec<String> = dates.iter().map(ToString::to_string).collect();
            writeln!(out, "{}", text.join(&separator))?;
        }

        Ok(0)
    }

    fn execute_contains_command<W: Write>(&mut self, args: &ContainsArgs, out: &mut W) -> Result<i32> {
        let mut sequence = self.build_sequence(&args.range)?;
        let found = sequence
            .contains_str(&args.date)
            .context("Invalid date to look for")?;

        writeln!(out, "{}", found)?;
        Ok(if found { 0 } else { 1 })
    }

    fn execute_completion_command(&mut self, args: &CompletionArgs) -> Result<i32> {
        let mut cmd = Cli::command();

        if let Some(ref output_dir) = args.output_dir {
            let output_path = std::path::Path::new(output_dir);
            if !output_path.exists() {
                std::fs::create_dir_all(output_path)
                    .with_context(|| format!("Failed to create output directory: {}", output_dir))?;
            }

            let written = completion::save_completions(args.shell, &mut cmd, output_path)?;
            info!("saved {} completion to {}", args.shell, written.display());
        } else {
            completion::generate_completion(args.shell, &mut cmd);
        }

        Ok(0)
    }

    fn execute_help_topic_command<W: Write>(&mut self, args: &HelpTopicArgs, out: &mut W) -> Result<i32> {
        let topic = HelpTopic::from_name(&args.topic)
            .with_context(|| format!("Unknown help topic: {}", args.topic))?;

        writeln!(out, "{}", topic)?;
        Ok(0)
    }
}
