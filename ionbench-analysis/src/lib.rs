#![warn(missing_docs)]
//! ionbench Analysis - Companion Harness Tools
//!
//! Small text transforms used next to the report formatter:
//! - Comparison output normalization (strip headers, rewrite deltas)
//! - Missing-test detection (suite directory vs `LIST` manifest)
//! - Profile aggregation (per-script, per-pass timings into CSV)

mod comparison;
mod error;
mod missing;
mod profile;

pub use comparison::{
    ComparisonRow, DEFAULT_HEADER_LINES, format_comparison, normalize_comparison,
};
pub use error::AnalysisError;
pub use missing::{
    DEFAULT_SUITE_PATHS, SuiteMissingTests, collect_test_names, find_missing_tests,
    format_missing_tests, missing_from_manifest, read_manifest,
};
pub use profile::{MISSING_TIME, ProfileTable, ScriptProfile, parse_profile};
