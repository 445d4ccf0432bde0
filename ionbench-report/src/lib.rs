#![warn(missing_docs)]
//! ionbench Report - Results Log Parsing and Rendering
//!
//! Turns the harness's plain-text results log into a [`ResultsReport`] and
//! renders it in one of several formats:
//! - Text (terminal table)
//! - Google Code wiki table
//! - CSV (spreadsheet-compatible)
//! - LaTeX tabular
//! - JSON (machine-readable)

mod csv;
mod error;
mod gwiki;
mod json;
mod normalize;
mod parser;
mod report;
mod tex;
mod text;

pub use csv::generate_csv_report;
pub use error::ReportError;
pub use gwiki::generate_gwiki_report;
pub use json::generate_json_report;
pub use normalize::{ValueClass, classify_value, normalize_value};
pub use parser::parse_results;
pub use report::{BenchmarkResult, FlagRun, MISSING_VALUE, ResultsReport, Suite};
pub use tex::generate_tex_report;
pub use text::format_text_report;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Space-separated table on stdout
    #[default]
    Text,
    /// CSV for spreadsheets
    Csv,
    /// Google Code wiki table
    GWiki,
    /// LaTeX tabular
    Tex,
    /// JSON dump of the parsed report
    Json,
}

impl OutputFormat {
    /// File extension appended to the output base path
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::GWiki => "wiki",
            OutputFormat::Tex => "tex",
            OutputFormat::Json => "json",
        }
    }

    /// Whether the report goes to a file by default instead of stdout
    pub fn writes_file(self) -> bool {
        matches!(self, OutputFormat::GWiki)
    }

    /// Render a report in this format.
    pub fn render(self, report: &ResultsReport) -> Result<String, ReportError> {
        tracing::debug!(format = ?self, suites = report.suites.len(), "rendering report");
        Ok(match self {
            OutputFormat::Text => format_text_report(report),
            OutputFormat::Csv => generate_csv_report(report),
            OutputFormat::GWiki => generate_gwiki_report(report),
            OutputFormat::Tex => generate_tex_report(report),
            OutputFormat::Json => generate_json_report(report)?,
        })
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "human" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "gwiki" | "wiki" => Ok(OutputFormat::GWiki),
            "tex" | "latex" => Ok(OutputFormat::Tex),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
