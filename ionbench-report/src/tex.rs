//! LaTeX Output
//!
//! Emits a bare `tabular` for inclusion in a document. Colored cells need
//! `\usepackage{xcolor}` in the preamble.

use crate::normalize::{classify_value, normalize_value};
use crate::report::ResultsReport;

/// Generate a LaTeX table with normalized, colorized values
pub fn generate_tex_report(report: &ResultsReport) -> String {
    let mut output = String::new();
    let columns = report.flags.len() + 1;

    output.push_str(&format!("\\begin{{tabular}}{{l{}}}\n", "r".repeat(report.flags.len())));
    output.push_str("\\hline\n");
    output.push_str("\\textbf{Benchmark}");
    for flag in &report.flags {
        output.push_str(&format!(" & \\textbf{{{}}}", escape_tex(flag)));
    }
    output.push_str(" \\\\\n\\hline\n");

    for suite in &report.suites {
        output.push_str(&format!(
            "\\multicolumn{{{}}}{{l}}{{\\textit{{{}}}}} \\\\\n",
            columns,
            escape_tex(&suite.name)
        ));

        for (bench, cells) in suite.rows() {
            output.push_str(&escape_tex(bench));
            for cell in cells {
                output.push_str(" & ");
                output.push_str(&tex_cell(&normalize_value(&cell.value)));
            }
            output.push_str(" \\\\\n");
        }
    }

    output.push_str("\\hline\n");
    output.push_str("\\end{tabular}\n");
    output
}

fn tex_cell(value: &str) -> String {
    let escaped = escape_tex(value);
    match classify_value(value).color() {
        Some(color) => format!("\\textcolor{{{}}}{{{}}}", color, escaped),
        None => escaped,
    }
}

fn escape_tex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '\\' => escaped.push_str("\\textbackslash{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::report;

    #[test]
    fn test_tex_table() {
        let r = report(&["base", "opt"], &[("v8", &[("earley_boyer", &["1.10", "??"])])]);
        let expected = "\
\\begin{tabular}{lrr}
\\hline
\\textbf{Benchmark} & \\textbf{base} & \\textbf{opt} \\\\
\\hline
\\multicolumn{3}{l}{\\textit{v8}} \\\\
earley\\_boyer & \\textcolor{green}{10} & ?? \\\\
\\hline
\\end{tabular}
";
        assert_eq!(generate_tex_report(&r), expected);
    }

    #[test]
    fn test_negative_cells_are_red() {
        assert_eq!(tex_cell("-10"), "\\textcolor{red}{-10}");
        assert_eq!(tex_cell("-"), "\\textcolor{blue}{-}");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_tex("50% & more"), "50\\% \\& more");
        assert_eq!(escape_tex("a\\b"), "a\\textbackslash{}b");
    }
}
