//! Analysis Errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the companion tools
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Filesystem access failed
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A comparison line has no delta column
    #[error("Malformed comparison line {line_no}: '{line}'")]
    MalformedLine {
        /// 1-based line number in the input
        line_no: usize,
        /// The raw line
        line: String,
    },

    /// A profile entry is not a `<pass> <time>` pair
    #[error("Malformed profile line for script '{script}': '{line}'")]
    MalformedProfileLine {
        /// Script the entry belongs to
        script: String,
        /// The raw line
        line: String,
    },
}

impl AnalysisError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalysisError::Io {
            path: path.into(),
            source,
        }
    }
}
