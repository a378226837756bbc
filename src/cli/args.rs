//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::AppError;
use crate::format::{DateFormatOptions, StatusClassOptions};
use crate::utils::{DateLocale, Timezone};

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "formatutils")]
#[command(about = "Format dates and status labels for display", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Timezone for date display (e.g., "Asia/Shanghai", "UTC", "America/New_York")
    #[arg(long, global = true, value_name = "TZ")]
    pub timezone: Option<String>,

    /// Locale for date display (only "en-US" is supported)
    #[arg(long, global = true, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Trim surrounding whitespace from status labels before converting
    #[arg(long, global = true)]
    pub trim: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub fn with_config(mut self, config: &Config) -> Self {
        if !self.trim && config.trim_status {
            self.trim = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }
        self
    }

    pub fn date_options(&self) -> Result<DateFormatOptions, AppError> {
        Ok(DateFormatOptions::new(
            DateLocale::parse(self.locale.as_deref())?,
            Timezone::parse(self.timezone.as_deref())?,
        ))
    }

    pub fn status_options(&self) -> StatusClassOptions {
        StatusClassOptions { trim: self.trim }
    }
}
