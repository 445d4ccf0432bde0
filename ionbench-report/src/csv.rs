//! CSV Output

use crate::normalize::normalize_value;
use crate::report::ResultsReport;

/// Generate a CSV table with one row per benchmark.
///
/// Columns: `Suite,Benchmark,<flag>...`. Values are normalized percentages.
pub fn generate_csv_report(report: &ResultsReport) -> String {
    let mut output = String::new();

    output.push_str("Suite,Benchmark");
    for flag in &report.flags {
        output.push(',');
        output.push_str(&escape_csv(flag));
    }
    output.push('\n');

    for suite in &report.suites {
        let suite_name = escape_csv(&suite.name);
        for (bench, cells) in suite.rows() {
            output.push_str(&format!("{},{}", suite_name, escape_csv(bench)));
            for cell in cells {
                output.push(',');
                output.push_str(&escape_csv(&normalize_value(&cell.value)));
            }
            output.push('\n');
        }
    }

    output
}

/// Quote a field only when it contains a separator, quote or line break.
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::report;

    #[test]
    fn test_csv_rows() {
        let r = report(
            &["base", "opt"],
            &[
                ("sunspider", &[("3d-cube", &["1.10", "0.90"])]),
                ("v8", &[("richards", &["??", "1.25"])]),
            ],
        );
        assert_eq!(
            generate_csv_report(&r),
            "Suite,Benchmark,base,opt\nsunspider,3d-cube,10,-10\nv8,richards,??,25\n"
        );
    }

    #[test]
    fn test_csv_quotes_only_when_needed() {
        assert_eq!(escape_csv("plain -n"), "plain -n");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
