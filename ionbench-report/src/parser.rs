//! Results Log Parser
//!
//! The log is delimited by literal markers:
//!
//! ```text
//! suite: <suite name>
//! flags: <flag label>
//! <benchmark>: <value>
//! ...
//! flags: <next flag label>
//! ...
//! suite: <next suite>
//! ```
//!
//! Markers are not escaped, so a benchmark name containing `suite: ` or
//! `flags: ` splits the log in the wrong place.

use crate::error::ReportError;
use crate::report::{BenchmarkResult, FlagRun, ResultsReport, Suite};

const SUITE_MARKER: &str = "suite: ";
const FLAGS_MARKER: &str = "flags: ";

/// Parse a results log into an immutable report.
///
/// Every suite must list the same flag labels in the same order as the first
/// suite; every flag run in a suite must list the same number of benchmarks.
pub fn parse_results(input: &str) -> Result<ResultsReport, ReportError> {
    let mut suites = Vec::new();
    let mut flags: Option<Vec<String>> = None;

    for chunk in split_marker(input, SUITE_MARKER) {
        let (name, body) = split_header(chunk);
        let runs = parse_runs(name, body)?;
        let labels: Vec<String> = runs.iter().map(|r| r.label.clone()).collect();

        if let Some(expected) = &flags {
            if *expected != labels {
                return Err(ReportError::FlagMismatch {
                    suite: name.to_string(),
                    expected: expected.clone(),
                    found: labels,
                });
            }
        } else {
            flags = Some(labels);
        }

        check_benchmark_counts(name, &runs)?;

        tracing::debug!(suite = name, runs = runs.len(), "parsed suite");
        suites.push(Suite {
            name: name.to_string(),
            runs,
        });
    }

    Ok(ResultsReport {
        flags: flags.unwrap_or_default(),
        suites,
    })
}

fn parse_runs(suite: &str, body: &str) -> Result<Vec<FlagRun>, ReportError> {
    split_marker(body, FLAGS_MARKER)
        .map(|chunk| {
            let (label, block) = split_header(chunk);
            let results = block
                .split('\n')
                .map(strip_cr)
                .filter(|line| !line.trim().is_empty())
                .map(|line| parse_line(suite, label, line))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(FlagRun {
                label: label.to_string(),
                results,
            })
        })
        .collect()
}

/// `name` is the text before the first `:`, `value` the second
/// whitespace-separated token of the whole line.
fn parse_line(suite: &str, flag: &str, line: &str) -> Result<BenchmarkResult, ReportError> {
    let name = line.split_once(':').map_or(line, |(name, _)| name);
    let value = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ReportError::MissingValue {
            suite: suite.to_string(),
            flag: flag.to_string(),
            line: line.to_string(),
        })?;

    Ok(BenchmarkResult {
        name: name.to_string(),
        value: value.to_string(),
        line: line.to_string(),
    })
}

fn check_benchmark_counts(suite: &str, runs: &[FlagRun]) -> Result<(), ReportError> {
    let Some(first) = runs.first() else {
        return Ok(());
    };
    let expected = first.results.len();
    for run in &runs[1..] {
        if run.results.len() != expected {
            return Err(ReportError::BenchmarkCountMismatch {
                suite: suite.to_string(),
                flag: run.label.clone(),
                expected,
                found: run.results.len(),
            });
        }
    }
    Ok(())
}

/// Split on a marker and drop blank chunks.
fn split_marker<'a>(text: &'a str, marker: &'a str) -> impl Iterator<Item = &'a str> {
    text.split(marker).filter(|chunk| !chunk.trim().is_empty())
}

/// First line and the remainder after it. A chunk without a newline is all header.
fn split_header(chunk: &str) -> (&str, &str) {
    match chunk.split_once('\n') {
        Some((header, rest)) => (strip_cr(header), rest),
        None => (strip_cr(chunk), ""),
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
