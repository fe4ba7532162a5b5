//! `slots` CLI -- query meeting availability from the command line.
//!
//! Events are a JSON array of `{"start", "end", "attendees"}` objects with
//! minute-of-day bounds, read from a file or stdin. The request comes from
//! flags. Output is a JSON array of `{"start", "end"}` bounds, or one
//! `HH:MM-HH:MM` line per interval with `--clock`.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots for a 30-minute meeting with ana and bo (events on stdin)
//! cat events.json | slots find --duration 30 --mandatory ana,bo
//!
//! # Include an optional attendee; falls back to mandatory-only when she
//! # has no free slot
//! slots find -i events.json --duration 60 --mandatory ana --optional carmen
//!
//! # Free intervals for a fixed attendee set (no fallback policy)
//! slots free -i events.json --attendees ana,bo --min-duration 15
//!
//! # Merged busy cover for an attendee set, as clock times
//! slots busy -i events.json --attendees ana --clock
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slotwise::freebusy::{busy_intervals, merge_intervals};
use slotwise::{Event, Interval, MeetingRequest};
use std::collections::HashSet;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Meeting availability queries over day-calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every slot where the requested meeting fits
    Find {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Meeting duration in minutes
        #[arg(long)]
        duration: u32,
        /// Comma-separated mandatory attendee ids
        #[arg(long)]
        mandatory: Option<String>,
        /// Comma-separated optional attendee ids
        #[arg(long)]
        optional: Option<String>,
        /// Print HH:MM-HH:MM lines instead of JSON
        #[arg(long)]
        clock: bool,
    },
    /// Free intervals for a fixed attendee set (no fallback)
    Free {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated attendee ids
        #[arg(long)]
        attendees: Option<String>,
        /// Minimum slot length in minutes
        #[arg(long, default_value_t = 1)]
        min_duration: u32,
        /// Print HH:MM-HH:MM lines instead of JSON
        #[arg(long)]
        clock: bool,
    },
    /// Merged busy cover for an attendee set
    Busy {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated attendee ids
        #[arg(long)]
        attendees: Option<String>,
        /// Print HH:MM-HH:MM lines instead of JSON
        #[arg(long)]
        clock: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            output,
            duration,
            mandatory,
            optional,
            clock,
        } => {
            let events = read_events(input.as_deref())?;
            let request = MeetingRequest {
                duration_minutes: duration,
                mandatory: split_ids(mandatory.as_deref()),
                optional: split_ids(optional.as_deref()),
            };
            let slots = slotwise::find_meeting_times(&events, &request)
                .context("Failed to resolve meeting times")?;
            write_output(output.as_deref(), &render(&slots, clock)?)?;
        }
        Commands::Free {
            input,
            output,
            attendees,
            min_duration,
            clock,
        } => {
            let events = read_events(input.as_deref())?;
            let attendees = split_ids(attendees.as_deref());
            let slots = slotwise::open_slots(&events, &attendees, min_duration);
            write_output(output.as_deref(), &render(&slots, clock)?)?;
        }
        Commands::Busy {
            input,
            output,
            attendees,
            clock,
        } => {
            let events = read_events(input.as_deref())?;
            let attendees = split_ids(attendees.as_deref());
            let busy = merge_intervals(busy_intervals(&events, &attendees));
            write_output(output.as_deref(), &render(&busy, clock)?)?;
        }
    }

    Ok(())
}

/// Render intervals as pretty JSON bounds, or one clock line each.
fn render(intervals: &[Interval], clock: bool) -> Result<String> {
    if clock {
        let mut out = String::new();
        for interval in intervals {
            out.push_str(&interval.to_string());
            out.push('\n');
        }
        Ok(out)
    } else {
        serde_json::to_string_pretty(intervals).context("Failed to serialize intervals")
    }
}

/// Split a comma-separated id list into a set.
///
/// An omitted or empty flag yields an empty set; surrounding whitespace and
/// empty segments are dropped.
fn split_ids(raw: Option<&str>) -> HashSet<String> {
    let mut ids = HashSet::new();
    if let Some(raw) = raw {
        for part in raw.split(',') {
            let trimmed = part.trim();
            if !trimmed.is_empty() {
                ids.insert(trimmed.to_string());
            }
        }
    }
    ids
}

fn read_events(path: Option<&str>) -> Result<Vec<Event>> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to decode events JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
