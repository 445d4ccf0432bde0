//! Missing-Test Detection
//!
//! Each suite directory holds its `.js` tests and a `LIST` manifest naming the
//! tests the harness actually runs. Tests present on disk but absent from the
//! manifest are reported. Files whose stem ends in `data` are test inputs, not
//! tests.

use crate::error::AnalysisError;
use std::path::Path;

/// Suite directories checked when none are configured
pub const DEFAULT_SUITE_PATHS: &[&str] = &[
    "default/tests/sunspider-1.0",
    "default/tests/v8-v6",
    "default/tests/pbench-0.9",
    "kraken/tests/kraken-1.1",
];

const MANIFEST_FILE: &str = "LIST";

/// Tests of one suite that are not listed in its manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteMissingTests {
    /// Last component of the suite directory
    pub suite: String,
    /// Test names without the `.js` extension
    pub tests: Vec<String>,
}

/// List test names (stems of `.js` files) in a suite directory, sorted.
pub fn collect_test_names(dir: &Path) -> Result<Vec<String>, AnalysisError> {
    let entries = std::fs::read_dir(dir).map_err(|e| AnalysisError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AnalysisError::io(dir, e))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if let Some(stem) = file_name.strip_suffix(".js") {
            if !stem.ends_with("data") {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Read the `LIST` manifest of a suite directory.
pub fn read_manifest(dir: &Path) -> Result<Vec<String>, AnalysisError> {
    let path = dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| AnalysisError::io(&path, e))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Tests that are not named in the manifest, in input order
pub fn missing_from_manifest(tests: &[String], manifest: &[String]) -> Vec<String> {
    tests
        .iter()
        .filter(|test| !manifest.contains(*test))
        .cloned()
        .collect()
}

/// Check every suite directory against its manifest.
pub fn find_missing_tests<P: AsRef<Path>>(
    dirs: &[P],
) -> Result<Vec<SuiteMissingTests>, AnalysisError> {
    dirs.iter()
        .map(|dir| {
            let dir = dir.as_ref();
            let tests = collect_test_names(dir)?;
            let manifest = read_manifest(dir)?;
            let missing = missing_from_manifest(&tests, &manifest);
            tracing::debug!(
                suite = %dir.display(),
                tests = tests.len(),
                missing = missing.len(),
                "checked suite manifest"
            );
            Ok(SuiteMissingTests {
                suite: suite_name(dir),
                tests: missing,
            })
        })
        .collect()
}

fn suite_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

/// Format the warning banner followed by each suite's unlisted tests
pub fn format_missing_tests(suites: &[SuiteMissingTests]) -> String {
    let rule = "-".repeat(51);
    let mut output = String::new();

    output.push_str(&rule);
    output.push('\n');
    output.push_str("WARNING: the following tests are not being executed\n");
    output.push_str(&rule);
    output.push('\n');

    for suite in suites {
        output.push_str(&format!("{}:\n", suite.suite));
        for test in &suite.tests {
            output.push_str(&format!("\t{}\n", test));
        }
    }

    output
}
