//! Integration tests for ionbench
//!
//! These tests drive the CLI entry point against results logs on disk.

use clap::Parser;
use ionbench_analysis::{SuiteMissingTests, find_missing_tests};
use ionbench_cli::{
    Cli, IonbenchConfig, load_results, normalize_legacy_args, resolve_suite_dirs, run_with_cli,
};
use ionbench_report::{OutputFormat, ReportError};
use std::path::{Path, PathBuf};

const RESULTS_LOG: &str = "\
suite: sunspider-1.0
flags: -m
3d-cube: 1.00
crypto-md5: ??
flags: -m -n
3d-cube: 0.90
crypto-md5: 1.10
suite: v8-v6
flags: -m
richards: 1.00
flags: -m -n
richards: 1.25
";

fn write_log(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("results.log");
    std::fs::write(&path, content).unwrap();
    path
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["ionbench".to_string()];
    argv.extend(args.iter().map(|s| s.to_string()));
    Cli::parse_from(normalize_legacy_args(argv))
}

/// Parsing a log from disk yields one suite per marker and a shared flag list
#[test]
fn test_load_results() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), RESULTS_LOG);

    let report = load_results(&log).unwrap();
    assert_eq!(report.suite_names(), vec!["sunspider-1.0", "v8-v6"]);
    assert_eq!(report.flags(), &["-m".to_string(), "-m -n".to_string()]);
    assert_eq!(report.benchmark_counts(), vec![2, 1]);
}

/// Plain-text output keeps the raw values
#[test]
fn test_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), RESULTS_LOG);

    let report = load_results(&log).unwrap();
    let output = OutputFormat::Text.render(&report).unwrap();
    assert_eq!(
        output,
        "BENCHMARK\\SHELL_VERSION -m -m -n\n\
         sunspider-1.0\n\
         3d-cube 1.00 0.90\n\
         crypto-md5 ?? 1.10\n\
         v8-v6\n\
         richards 1.00 1.25\n"
    );
}

/// The legacy `-gwiki` flag writes a wiki table to the requested path
#[test]
fn test_gwiki_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), RESULTS_LOG);
    let out = dir.path().join("results.wiki");

    run_with_cli(cli(&[
        log.to_str().unwrap(),
        "-gwiki",
        "-o",
        out.to_str().unwrap(),
    ]))
    .unwrap();

    let wiki = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = wiki.lines().collect();
    assert_eq!(lines[0], "|| *BENCHMARK \\ SHELL VERSION* || *-m* || *-m -n* ||");
    assert_eq!(lines[1], "|| _*sunspider-1.0*_ ||");
    assert_eq!(
        lines[2],
        "|| *3d-cube* || <font color=\"green\">0</font> || <font color=\"red\">-10</font> ||"
    );
    assert_eq!(
        lines[3],
        "|| *crypto-md5* || ?? || <font color=\"green\">10</font> ||"
    );
    assert_eq!(lines[4], "|| _*v8-v6*_ ||");
}

/// Rendering the same log twice produces byte-identical files
#[test]
fn test_gwiki_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), RESULTS_LOG);
    let first = dir.path().join("first.wiki");
    let second = dir.path().join("second.wiki");

    for out in [&first, &second] {
        run_with_cli(cli(&[
            "format",
            log.to_str().unwrap(),
            "--format",
            "gwiki",
            "-o",
            out.to_str().unwrap(),
        ]))
        .unwrap();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

/// A flag mismatch between suites is fatal and nothing is written
#[test]
fn test_flag_mismatch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "suite: A\nflags: base\nb: 1\nsuite: B\nflags: opt\nb: 1\n",
    );
    let out = dir.path().join("results.wiki");

    let err = run_with_cli(cli(&[
        log.to_str().unwrap(),
        "-gwiki",
        "-o",
        out.to_str().unwrap(),
    ]))
    .unwrap_err();

    let report_err = err.downcast_ref::<ReportError>().unwrap();
    assert!(report_err.is_fatal());
    assert!(!out.exists());
}

/// CSV and LaTeX render the same normalized values
#[test]
fn test_csv_and_tex_output() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), RESULTS_LOG);
    let report = load_results(&log).unwrap();

    let csv = OutputFormat::Csv.render(&report).unwrap();
    assert_eq!(
        csv,
        "Suite,Benchmark,-m,-m -n\n\
         sunspider-1.0,3d-cube,0,-10\n\
         sunspider-1.0,crypto-md5,??,10\n\
         v8-v6,richards,0,25\n"
    );

    let tex = OutputFormat::Tex.render(&report).unwrap();
    assert!(tex.starts_with("\\begin{tabular}{lrr}\n"));
    assert!(tex.contains("3d-cube & \\textcolor{green}{0} & \\textcolor{red}{-10} \\\\\n"));
    assert!(tex.contains("crypto-md5 & ?? & \\textcolor{green}{10} \\\\\n"));
    assert!(tex.ends_with("\\end{tabular}\n"));
}

/// Missing input file is reported as an error, not a panic
#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.log");
    let err = load_results(&missing).unwrap_err();
    assert!(err.to_string().contains("failed to read results log"));
}

/// The profile subcommand writes the CSV pivot table
#[test]
fn test_profile_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("ionprofile.out");
    std::fs::write(&dump, "Script a.js:1\nGVN 3\nLICM 1\nScript b.js:2\nGVN 7\n").unwrap();
    let out = dir.path().join("profile.csv");

    run_with_cli(cli(&[
        "profile",
        dump.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]))
    .unwrap();

    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "Script,GVN,LICM\na.js:1,3,1\nb.js:2,7,-\n"
    );
}

/// Missing-tests reports the unlisted tests of explicit suites under a root
#[test]
fn test_missing_tests_subcommand() {
    let root = tempfile::tempdir().unwrap();
    let suite = root.path().join("pbench-0.9");
    std::fs::create_dir(&suite).unwrap();
    for file in ["strim.js", "unlisted.js", "input-data.js"] {
        std::fs::write(suite.join(file), "").unwrap();
    }
    std::fs::write(suite.join("LIST"), "strim\n").unwrap();

    let suites = vec![PathBuf::from("pbench-0.9")];
    let dirs = resolve_suite_dirs(Some(root.path()), &suites, &IonbenchConfig::default());
    assert_eq!(dirs, vec![suite.clone()]);
    assert_eq!(
        find_missing_tests(&dirs).unwrap(),
        vec![SuiteMissingTests {
            suite: "pbench-0.9".to_string(),
            tests: vec!["unlisted".to_string()],
        }]
    );

    run_with_cli(cli(&[
        "missing-tests",
        "--root",
        root.path().to_str().unwrap(),
        "pbench-0.9",
    ]))
    .unwrap();
}

/// A suite without a LIST manifest fails the missing-tests run
#[test]
fn test_missing_tests_without_manifest() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir(root.path().join("kraken-1.1")).unwrap();

    let err = run_with_cli(cli(&[
        "missing-tests",
        "--root",
        root.path().to_str().unwrap(),
        "kraken-1.1",
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("LIST"));
}

/// An unknown `--format` fails instead of silently rendering text
#[test]
fn test_unknown_format_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), RESULTS_LOG);
    let out = dir.path().join("results.pdf");

    let err = run_with_cli(cli(&[
        log.to_str().unwrap(),
        "--format",
        "pdf",
        "-o",
        out.to_str().unwrap(),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("Unknown output format: pdf"));
    assert!(!out.exists());
}
