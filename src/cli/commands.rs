//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Format a date, e.g. "2024-03-15T14:30:00" -> "March 15, 2024 at 02:30 PM"
    Date {
        /// Date or timestamp; omitted or empty prints an empty line
        input: Option<String>,
    },
    /// Turn a status label into a CSS class token, e.g. "In Progress" -> "in-progress"
    Status {
        /// Status label; omitted or empty prints an empty line
        input: Option<String>,
    },
}

impl Commands {
    pub fn input(&self) -> Option<&str> {
        match self {
            Commands::Date { input } | Commands::Status { input } => input.as_deref(),
        }
    }
}
