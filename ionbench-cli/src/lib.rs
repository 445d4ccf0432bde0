#![warn(missing_docs)]
//! ionbench CLI Library
//!
//! Front end for the benchmark report tools. The default invocation formats a
//! results log:
//!
//! ```text
//! ionbench results.log            # plain table on stdout
//! ionbench results.log -gwiki     # results.wiki
//! ionbench results.log -csv       # CSV on stdout
//! ionbench results.log -tex       # LaTeX on stdout
//! ```
//!
//! The companion tools are subcommands: `compare`, `missing-tests`, `profile`.

mod config;

pub use config::*;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use ionbench_analysis::{
    find_missing_tests, format_comparison, format_missing_tests, normalize_comparison,
    parse_profile,
};
use ionbench_report::{OutputFormat, ReportError, ResultsReport, parse_results};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Single-dash format flags accepted for compatibility with existing harness scripts
const LEGACY_FORMAT_FLAGS: &[(&str, &str)] = &[
    ("-csv", "--format=csv"),
    ("-gwiki", "--format=gwiki"),
    ("-tex", "--format=tex"),
];

/// ionbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "ionbench")]
#[command(author, version, about = "ionbench - benchmark report tools")]
#[command(args_override_self = true)]
pub struct Cli {
    /// Optional subcommand; defaults to formatting a results log
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Report formatting options for the default invocation
    #[command(flatten)]
    pub format: FormatArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options of the results-log formatter
#[derive(Args, Debug, Clone, Default)]
pub struct FormatArgs {
    /// Results log to format
    pub input: Option<PathBuf>,

    /// Output format: text, csv, gwiki, tex, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (format default if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a results log (default)
    Format(FormatArgs),
    /// Normalize comparison tool output
    Compare {
        /// Comparison output to normalize
        input: PathBuf,
        /// Header lines to drop
        #[arg(long)]
        header_lines: Option<usize>,
    },
    /// List tests that exist on disk but are missing from their suite's LIST
    MissingTests {
        /// Directory suite paths are relative to
        #[arg(long)]
        root: Option<PathBuf>,
        /// Suite directories (configured suites if none given)
        suites: Vec<PathBuf>,
    },
    /// Aggregate a profiler dump into a CSV pivot table
    Profile {
        /// Profiler dump
        input: Option<PathBuf>,
        /// CSV file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a default ionbench.toml
    InitConfig,
}

/// Rewrite legacy single-dash format flags (`-csv`, `-gwiki`, `-tex`) to `--format=`.
pub fn normalize_legacy_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            LEGACY_FORMAT_FLAGS
                .iter()
                .find(|(legacy, _)| *legacy == arg)
                .map_or(arg, |(_, modern)| modern.to_string())
        })
        .collect()
}

/// Run the ionbench CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_legacy_args(std::env::args()));
    run_with_cli(cli)
}

/// Run the ionbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    // Discover ionbench.toml configuration (CLI flags override)
    let config = IonbenchConfig::discover().unwrap_or_default();

    match cli.command {
        Some(Commands::Format(ref args)) => format_results(args, &config),
        Some(Commands::Compare {
            ref input,
            header_lines,
        }) => {
            let header_lines = header_lines.unwrap_or(config.comparison.header_lines);
            normalize_comparison_file(input, header_lines)
        }
        Some(Commands::MissingTests {
            ref root,
            ref suites,
        }) => report_missing_tests(root.as_deref(), suites, &config),
        Some(Commands::Profile {
            ref input,
            ref output,
        }) => {
            let input = input.as_ref().unwrap_or(&config.profile.input);
            let output = output.as_ref().unwrap_or(&config.profile.output);
            aggregate_profile(input, output)
        }
        Some(Commands::InitConfig) => {
            print!("{}", IonbenchConfig::default_toml());
            Ok(())
        }
        None => format_results(&cli.format, &config),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "ionbench=debug"
    } else {
        "ionbench=info"
    };
    // Report output owns stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// How a failed run is reported by the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A fatal report error: only `FATAL ERROR!` is printed, on stdout
    Fatal,
    /// Any other error, printed with its context chain on stderr
    Error(String),
}

/// Decide how an error returned by [`run`] is reported.
pub fn classify_failure(err: &anyhow::Error) -> Failure {
    let fatal = err
        .downcast_ref::<ReportError>()
        .is_some_and(ReportError::is_fatal);
    if fatal {
        Failure::Fatal
    } else {
        Failure::Error(format!("{:#}", err))
    }
}

/// Resolve the output format: `--format` wins, then ionbench.toml, then text.
///
/// An unknown `--format` is an error. An unknown format in ionbench.toml falls
/// back to text with a warning.
pub fn resolve_format(
    cli_format: Option<&str>,
    config: &IonbenchConfig,
) -> anyhow::Result<OutputFormat> {
    if let Some(name) = cli_format {
        return name.parse().map_err(anyhow::Error::msg);
    }
    Ok(config.output.format.parse().unwrap_or_else(|e| {
        tracing::warn!("{} in {}; falling back to text", e, CONFIG_FILE);
        OutputFormat::Text
    }))
}

/// Suite directories to check: explicit suites under `--root` (or the
/// configured root), else the configured suites under `--root`, else the
/// configured suites under the configured root.
pub fn resolve_suite_dirs(
    root: Option<&Path>,
    suites: &[PathBuf],
    config: &IonbenchConfig,
) -> Vec<PathBuf> {
    if suites.is_empty() {
        match root {
            Some(root) => config
                .missing_tests
                .suites
                .iter()
                .map(|suite| root.join(suite))
                .collect(),
            None => config.suite_dirs(),
        }
    } else {
        let root = root.unwrap_or(config.missing_tests.root.as_path());
        suites.iter().map(|suite| root.join(suite)).collect()
    }
}

/// Where a rendered report goes: an explicit path, the format's default file, or stdout.
pub fn output_path(
    cli_output: Option<&Path>,
    format: OutputFormat,
    config: &IonbenchConfig,
) -> Option<PathBuf> {
    match cli_output {
        Some(path) => Some(path.to_path_buf()),
        None if format.writes_file() => Some(PathBuf::from(format!(
            "{}.{}",
            config.output.base,
            format.extension()
        ))),
        None => None,
    }
}

/// Read and parse a results log.
pub fn load_results(path: &Path) -> anyhow::Result<ResultsReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read results log {}", path.display()))?;
    let report = parse_results(&content)?;
    tracing::info!(
        suites = report.suites.len(),
        flags = report.flags.len(),
        "parsed {}",
        path.display()
    );
    Ok(report)
}

fn format_results(args: &FormatArgs, config: &IonbenchConfig) -> anyhow::Result<()> {
    let input = args.input.as_deref().ok_or_else(|| {
        anyhow::anyhow!("no results log given (usage: ionbench <input> [-csv|-gwiki|-tex])")
    })?;
    let format = resolve_format(args.format.as_deref(), config)?;

    // Parse errors abort before anything is written
    let report = load_results(input)?;
    let output = format.render(&report)?;

    match output_path(args.output.as_deref(), format, config) {
        Some(path) => {
            write_output(&path, &output)?;
            println!("Results are located at {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

fn write_output(path: &Path, output: &str) -> anyhow::Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(output.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = output.len(), "wrote output");
    Ok(())
}

fn normalize_comparison_file(input: &Path, header_lines: usize) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read comparison output {}", input.display()))?;
    let rows = normalize_comparison(&content, header_lines)?;
    tracing::debug!(rows = rows.len(), "normalized comparison output");
    print!("{}", format_comparison(&rows));
    Ok(())
}

fn report_missing_tests(
    root: Option<&Path>,
    suites: &[PathBuf],
    config: &IonbenchConfig,
) -> anyhow::Result<()> {
    let dirs = resolve_suite_dirs(root, suites, config);
    let missing = find_missing_tests(&dirs)?;
    print!("{}", format_missing_tests(&missing));
    Ok(())
}

fn aggregate_profile(input: &Path, output: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read profile {}", input.display()))?;
    let table = parse_profile(&content)?;
    tracing::info!(
        scripts = table.scripts.len(),
        executions = table.execution_count(),
        passes = table.passes.len(),
        "aggregated profile"
    );
    write_output(output, &table.to_csv())?;
    println!("Results are located at {}", output.display());
    Ok(())
}
