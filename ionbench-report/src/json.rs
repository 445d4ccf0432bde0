//! JSON Output

use crate::error::ReportError;
use crate::report::ResultsReport;

/// Generate a prettified JSON dump of the parsed report.
pub fn generate_json_report(report: &ResultsReport) -> Result<String, ReportError> {
    serde_json::to_string_pretty(report).map_err(|e| ReportError::Serialization(e.to_string()))
}
