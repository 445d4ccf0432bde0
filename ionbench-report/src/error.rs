//! Report Errors

use thiserror::Error;

/// Errors produced while building a [`crate::ResultsReport`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A suite was run under a different flag list than the first suite
    #[error("Suite '{suite}' has flags {found:?}, expected {expected:?}")]
    FlagMismatch {
        /// Offending suite
        suite: String,
        /// Flag labels of the first suite
        expected: Vec<String>,
        /// Flag labels of the offending suite
        found: Vec<String>,
    },

    /// A flag run lists a different number of benchmarks than the suite's first run
    #[error("Suite '{suite}' flags '{flag}' has {found} benchmarks, expected {expected}")]
    BenchmarkCountMismatch {
        /// Offending suite
        suite: String,
        /// Offending flag label
        flag: String,
        /// Benchmark count of the first flag run
        expected: usize,
        /// Benchmark count of this flag run
        found: usize,
    },

    /// A result line has no value token after the benchmark name
    #[error("Suite '{suite}' flags '{flag}': no value in line '{line}'")]
    MissingValue {
        /// Suite containing the line
        suite: String,
        /// Flag label containing the line
        flag: String,
        /// The raw line
        line: String,
    },

    /// Serialization failure while rendering JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ReportError {
    /// Whether this is the structural inconsistency the harness treats as fatal
    pub fn is_fatal(&self) -> bool {
        matches!(self, ReportError::FlagMismatch { .. })
    }
}
