//! Google Code Wiki Output

use crate::normalize::{ValueClass, classify_value, normalize_value};
use crate::report::ResultsReport;

/// Generate a Google Code wiki table.
///
/// Values are normalized to percentages and wrapped in `<font>` tags by sign.
pub fn generate_gwiki_report(report: &ResultsReport) -> String {
    let mut output = String::new();

    output.push_str("|| *BENCHMARK \\ SHELL VERSION* ||");
    for flag in &report.flags {
        output.push_str(&format!(" *{}* ||", flag));
    }
    output.push('\n');

    for suite in &report.suites {
        output.push_str(&format!("|| _*{}*_ ||\n", suite.name));

        for (bench, cells) in suite.rows() {
            output.push_str(&format!("|| *{}* ||", bench));
            for cell in cells {
                output.push_str(&wiki_cell(&normalize_value(&cell.value)));
            }
            output.push('\n');
        }
    }

    output
}

fn wiki_cell(value: &str) -> String {
    match classify_value(value) {
        ValueClass::Missing => format!(" {} ||", value),
        class => format!(
            " <font color=\"{}\">{}</font> ||",
            class.color().unwrap_or_default(),
            value
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::report;

    #[test]
    fn test_wiki_table() {
        let r = report(
            &["base", "opt"],
            &[("sunspider", &[("3d-cube", &["1.10", "0.90"]), ("crypto", &["??", "1"])])],
        );
        let expected = "\
|| *BENCHMARK \\ SHELL VERSION* || *base* || *opt* ||
|| _*sunspider*_ ||
|| *3d-cube* || <font color=\"green\">10</font> || <font color=\"red\">-10</font> ||
|| *crypto* || ?? || <font color=\"green\">0</font> ||
";
        assert_eq!(generate_gwiki_report(&r), expected);
    }

    #[test]
    fn test_dash_is_blue() {
        assert_eq!(wiki_cell("-"), " <font color=\"blue\">-</font> ||");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let r = report(&["a", "b"], &[("S", &[("x", &["0.5", "??"]), ("y", &["-", "3"])])]);
        assert_eq!(generate_gwiki_report(&r), generate_gwiki_report(&r));
    }
}
