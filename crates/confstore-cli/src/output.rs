//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use confstore_conformance::ConformanceReport;

/// Output format for the conformance report
#[derive(Debug, Clone, Copy, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Boxed text report with a colored verdict
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Render a report in the requested format
pub fn render_report(report: &ConformanceReport, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Json => report.to_json()?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    })
}

/// Print a report followed, for text output, by a one-line verdict
pub fn print_report(report: &ConformanceReport, format: OutputFormat) -> CliResult<()> {
    println!("{}", render_report(report, format)?);

    if format == OutputFormat::Text {
        for failure in report.failures() {
            print_error(&format!(
                "{}: {}",
                failure.name,
                failure.error.as_deref().unwrap_or("failed")
            ));
        }
        if report.is_conformant() {
            print_success(&format!("{} is conformant", report.store_name));
        }
    }
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
