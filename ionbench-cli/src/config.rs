//! Configuration loading from ionbench.toml
//!
//! The configuration is discovered by walking up from the current directory.
//! Every field has a default, so an empty or missing file is valid.

use ionbench_analysis::{DEFAULT_HEADER_LINES, DEFAULT_SUITE_PATHS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for during discovery
pub const CONFIG_FILE: &str = "ionbench.toml";

/// ionbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IonbenchConfig {
    /// Report output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Comparison normalizer configuration
    #[serde(default)]
    pub comparison: ComparisonConfig,
    /// Missing-tests reporter configuration
    #[serde(default)]
    pub missing_tests: MissingTestsConfig,
    /// Profile aggregator configuration
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base path for file output; the format extension is appended
    #[serde(default = "default_base")]
    pub base: String,
    /// Format used when no format flag is given: "text", "csv", "gwiki", "tex", "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            format: default_format(),
        }
    }
}

fn default_base() -> String {
    "results".to_string()
}
fn default_format() -> String {
    "text".to_string()
}

/// Comparison normalizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Number of header lines to drop
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            header_lines: default_header_lines(),
        }
    }
}

fn default_header_lines() -> usize {
    DEFAULT_HEADER_LINES
}

/// Missing-tests reporter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingTestsConfig {
    /// Directory suite paths are relative to
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Suite directories to check
    #[serde(default = "default_suites")]
    pub suites: Vec<PathBuf>,
}

impl Default for MissingTestsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            suites: default_suites(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}
fn default_suites() -> Vec<PathBuf> {
    DEFAULT_SUITE_PATHS.iter().map(PathBuf::from).collect()
}

/// Profile aggregator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Profiler dump to read
    #[serde(default = "default_profile_input")]
    pub input: PathBuf,
    /// CSV file to write
    #[serde(default = "default_profile_output")]
    pub output: PathBuf,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            input: default_profile_input(),
            output: default_profile_output(),
        }
    }
}

fn default_profile_input() -> PathBuf {
    PathBuf::from("/tmp/ionprofile.out")
}
fn default_profile_output() -> PathBuf {
    PathBuf::from("results.csv")
}

impl IonbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "loaded config");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), "ignoring config: {}", e);
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Suite directories resolved against the configured root
    pub fn suite_dirs(&self) -> Vec<PathBuf> {
        self.missing_tests
            .suites
            .iter()
            .map(|suite| self.missing_tests.root.join(suite))
            .collect()
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# ionbench Configuration

[output]
# Base path for file output; the format extension is appended
base = "results"
# Default format: text, csv, gwiki, tex, json
format = "text"

[comparison]
# Header lines printed by the comparison tool
header_lines = 10

[missing_tests]
# Suite paths are relative to this directory
root = "."
suites = [
    "default/tests/sunspider-1.0",
    "default/tests/v8-v6",
    "default/tests/pbench-0.9",
    "kraken/tests/kraken-1.1",
]

[profile]
# Profiler dump to aggregate
input = "/tmp/ionprofile.out"
# CSV pivot table
output = "results.csv"
"#
        .to_string()
    }
}
