//! Plain-Text Output
//!
//! ```text
//! BENCHMARK\SHELL_VERSION base opt
//! sunspider
//! 3d-cube 1.05 0.92
//! ```
//!
//! Values are printed raw, without normalization.

use crate::report::ResultsReport;

/// Header cell of the first column
pub const TEXT_HEADER: &str = "BENCHMARK\\SHELL_VERSION";

/// Format a report as a space-separated table
pub fn format_text_report(report: &ResultsReport) -> String {
    let mut output = String::new();

    output.push_str(TEXT_HEADER);
    for flag in &report.flags {
        output.push(' ');
        output.push_str(flag);
    }
    output.push('\n');

    for suite in &report.suites {
        output.push_str(&suite.name);
        output.push('\n');

        for (bench, cells) in suite.rows() {
            output.push_str(bench);
            for cell in cells {
                output.push(' ');
                output.push_str(&cell.value);
            }
            output.push('\n');
        }
    }

    output
}
