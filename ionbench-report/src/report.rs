//! Report Data Structures

use serde::{Deserialize, Serialize};

/// Placeholder the harness writes when a benchmark produced no value
pub const MISSING_VALUE: &str = "??";

/// Parsed results log: every suite, run under the same flag configurations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsReport {
    /// Flag labels shared by all suites, in log order
    pub flags: Vec<String>,
    /// Suites in log order
    pub suites: Vec<Suite>,
}

/// A named group of benchmarks for one workload category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    /// Suite name (e.g., "sunspider-1.0")
    pub name: String,
    /// One run per flag configuration, same order as [`ResultsReport::flags`]
    pub runs: Vec<FlagRun>,
}

/// Results of one suite under one shell/engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagRun {
    /// Flag label as written after `flags: `
    pub label: String,
    /// One entry per benchmark
    pub results: Vec<BenchmarkResult>,
}

/// Single benchmark result line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Text before the first `:`
    pub name: String,
    /// Second whitespace-separated token of the line
    pub value: String,
    /// The raw line
    pub line: String,
}

impl BenchmarkResult {
    /// Whether the harness recorded no value for this benchmark
    pub fn is_missing(&self) -> bool {
        self.value == MISSING_VALUE
    }
}

impl ResultsReport {
    /// Suite names in log order
    pub fn suite_names(&self) -> Vec<&str> {
        self.suites.iter().map(|s| s.name.as_str()).collect()
    }

    /// Flag labels shared by every suite
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Number of benchmarks in each suite
    pub fn benchmark_counts(&self) -> Vec<usize> {
        self.suites.iter().map(Suite::benchmark_count).collect()
    }

    /// Name of benchmark `bench` in suite `suite`, taken from the first flag run
    pub fn benchmark_name(&self, suite: usize, bench: usize) -> Option<&str> {
        self.suites
            .get(suite)?
            .runs
            .first()?
            .results
            .get(bench)
            .map(|r| r.name.as_str())
    }

    /// Raw value of benchmark `bench` in suite `suite` under flag `flag`
    pub fn value(&self, suite: usize, flag: usize, bench: usize) -> Option<&str> {
        self.suites
            .get(suite)?
            .runs
            .get(flag)?
            .results
            .get(bench)
            .map(|r| r.value.as_str())
    }
}

impl Suite {
    /// Benchmark count, taken from the first flag run
    pub fn benchmark_count(&self) -> usize {
        self.runs.first().map_or(0, |run| run.results.len())
    }

    /// Iterate benchmark rows: the benchmark name and its result under each flag.
    pub fn rows(&self) -> impl Iterator<Item = (&str, Vec<&BenchmarkResult>)> + '_ {
        (0..self.benchmark_count()).filter_map(move |bench| {
            let name = self.runs.first()?.results.get(bench)?.name.as_str();
            let cells = self
                .runs
                .iter()
                .filter_map(|run| run.results.get(bench))
                .collect();
            Some((name, cells))
        })
    }
}
