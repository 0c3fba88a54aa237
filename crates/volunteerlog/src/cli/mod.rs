//! Command-line interface for volunteerlog.
//!
//! This module provides the CLI structure for the `vlog` binary and the
//! rendering of volunteer listings.

mod commands;

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ListCommand, LogCommand, OutputFormat, RegisterCommand};

use crate::error::Result;
use crate::storage::format;
use crate::volunteer::VolunteerRecord;

/// vlog - Track volunteers and the hours they serve
///
/// Registers volunteers, logs their shifts, and keeps running totals in
/// `VolunteerLog.csv` in the current directory.
#[derive(Debug, Parser)]
#[command(name = "vlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to listing volunteers)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new volunteer
    Register(RegisterCommand),

    /// Log a shift for a volunteer
    Log(LogCommand),

    /// List all volunteers and their hours
    List(ListCommand),

    /// Write the volunteer log to disk
    Save,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// The command to run, falling back to a table listing.
    #[must_use]
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::List(ListCommand::default()))
    }
}

const HEADERS: [&str; 4] = ["Name", "Email", "Phone", "Total Hours"];

/// Render records in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_records(records: &[VolunteerRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(records
            .iter()
            .map(|r| format::encode_line(r) + "\n")
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)? + "\n"),
        OutputFormat::Table => Ok(render_table(records)),
    }
}

fn render_table(records: &[VolunteerRecord]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.identifier.clone(),
                r.contact.clone(),
                r.total_hours.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(String::from);
    for row in std::iter::once(&header).chain(&rows) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}
