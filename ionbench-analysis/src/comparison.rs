//! Comparison Output Normalization
//!
//! The comparison tool prints a fixed-size header, then each category twice
//! with blank lines between. Deltas look like `1.05x` for slowdowns and
//! `*1.05x` for speedups; they are rewritten to `1.05` and `-1.05`.

use crate::error::AnalysisError;

/// Header lines printed by the comparison tool before the first row
pub const DEFAULT_HEADER_LINES: usize = 10;

/// One normalized comparison row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    /// Category or benchmark name
    pub name: String,
    /// Rewritten delta
    pub delta: String,
}

/// Normalize a comparison report.
///
/// Skips `header_lines` lines, drops empty lines, keeps every other remaining
/// line and rewrites the delta column.
pub fn normalize_comparison(
    input: &str,
    header_lines: usize,
) -> Result<Vec<ComparisonRow>, AnalysisError> {
    input
        .lines()
        .enumerate()
        .skip(header_lines)
        .filter(|(_, line)| !line.is_empty())
        .step_by(2)
        .map(|(idx, line)| {
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(name), Some(delta)) => Ok(ComparisonRow {
                    name: name.to_string(),
                    delta: normalize_delta(delta),
                }),
                _ => Err(AnalysisError::MalformedLine {
                    line_no: idx + 1,
                    line: line.to_string(),
                }),
            }
        })
        .collect()
}

fn normalize_delta(delta: &str) -> String {
    let mut delta = match delta.strip_prefix('*') {
        Some(rest) => format!("-{}", rest),
        None => delta.to_string(),
    };
    if delta.ends_with('x') {
        delta.pop();
    }
    delta
}

/// Format rows as `name delta` lines
pub fn format_comparison(rows: &[ComparisonRow]) -> String {
    let mut output = String::new();
    for row in rows {
        output.push_str(&format!("{} {}\n", row.name, row.delta));
    }
    output
}
