use serde::Serialize;

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::format::{format_date, status_class_with};
use crate::utils::debug_enabled;

#[derive(Debug, Serialize)]
struct FormatOutput<'a> {
    command: &'static str,
    input: Option<&'a str>,
    output: &'a str,
}

/// Run the selected command and return the text to print.
pub fn render(cli: &Cli) -> Result<String, AppError> {
    let input = cli.command.input();
    let (name, output) = match &cli.command {
        Commands::Date { .. } => {
            let options = cli.date_options()?;
            if debug_enabled() {
                eprintln!(
                    "[DEBUG] locale={} timezone={:?}",
                    options.locale.tag(),
                    options.timezone
                );
            }
            ("date", format_date(input, &options))
        }
        Commands::Status { .. } => ("status", status_class_with(input, &cli.status_options())),
    };

    if cli.json {
        let value = FormatOutput {
            command: name,
            input,
            output: &output,
        };
        Ok(serde_json::to_string_pretty(&value).unwrap_or_else(|e| {
            eprintln!("Failed to serialize JSON output: {}", e);
            "{}".to_string()
        }))
    } else {
        Ok(output)
    }
}
