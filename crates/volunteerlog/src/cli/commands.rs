//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Register command arguments.
#[derive(Debug, Args)]
pub struct RegisterCommand {
    /// Volunteer's name (first and last)
    #[arg(short, long)]
    pub name: String,

    /// Volunteer's email, used to identify them when logging hours
    #[arg(short, long)]
    pub email: String,

    /// Volunteer's phone number
    #[arg(short, long, default_value = "")]
    pub phone: String,
}

impl RegisterCommand {
    /// The inputs with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> (&str, &str, &str) {
        (self.name.trim(), self.email.trim(), self.phone.trim())
    }
}

/// Log hours command arguments.
#[derive(Debug, Args)]
pub struct LogCommand {
    /// Volunteer's email
    pub email: String,

    /// Shift start time (HH:MM, 24-hour)
    pub start: String,

    /// Shift end time (HH:MM, 24-hour)
    pub end: String,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl Default for ListCommand {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
        }
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The log file's own line format
    Plain,
    /// Aligned table with a header
    #[default]
    Table,
    /// JSON array
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
        assert_eq!(ListCommand::default().format, OutputFormat::Table);
    }

    #[test]
    fn test_register_trimmed() {
        let cmd = RegisterCommand {
            name: "  Ana Ruiz ".to_string(),
            email: " ana@x.org".to_string(),
            phone: "555-1111  ".to_string(),
        };
        assert_eq!(cmd.trimmed(), ("Ana Ruiz", "ana@x.org", "555-1111"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
