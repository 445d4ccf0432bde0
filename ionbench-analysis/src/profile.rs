//! Profile Aggregation
//!
//! The JIT profiler appends one block per compiled script execution:
//!
//! ```text
//! Script <name>
//! <pass> <time>
//! <pass> <time>
//! ```
//!
//! Blocks are pivoted into a CSV table with one column per compiler pass.

use crate::error::AnalysisError;

/// Cell value for a pass that did not run in an execution
pub const MISSING_TIME: &str = "-";

const SCRIPT_MARKER: &str = "Script ";

/// All executions of one script, with cells aligned to [`ProfileTable::passes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptProfile {
    /// Script name
    pub script: String,
    /// One row per execution, one cell per pass
    pub executions: Vec<Vec<String>>,
}

/// Pivoted profile: scripts in first-seen order, passes in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileTable {
    /// Pass names
    pub passes: Vec<String>,
    /// Per-script rows
    pub scripts: Vec<ScriptProfile>,
}

/// Parse a profiler dump into a pivot table.
pub fn parse_profile(input: &str) -> Result<ProfileTable, AnalysisError> {
    // script name -> executions -> (pass, time)
    let mut raw: Vec<(String, Vec<Vec<(String, String)>>)> = Vec::new();

    for chunk in input.split(SCRIPT_MARKER) {
        let Some((script, body)) = chunk.split_once('\n') else {
            continue;
        };
        if body.is_empty() {
            continue;
        }

        let entries = parse_entries(script, body)?;
        match raw.iter_mut().find(|(name, _)| name == script) {
            Some((_, executions)) => executions.push(entries),
            None => raw.push((script.to_string(), vec![entries])),
        }
    }

    let mut passes: Vec<String> = Vec::new();
    for (_, executions) in &raw {
        for (pass, _) in executions.iter().flatten() {
            if !passes.contains(pass) {
                passes.push(pass.clone());
            }
        }
    }

    let scripts = raw
        .into_iter()
        .map(|(script, executions)| ScriptProfile {
            script,
            executions: executions
                .into_iter()
                .map(|entries| {
                    let mut row = vec![MISSING_TIME.to_string(); passes.len()];
                    for (pass, time) in entries {
                        if let Some(idx) = passes.iter().position(|p| *p == pass) {
                            row[idx] = time;
                        }
                    }
                    row
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        scripts = scripts.len(),
        passes = passes.len(),
        "aggregated profile"
    );

    Ok(ProfileTable { passes, scripts })
}

/// Entries are the complete lines of the body; text after the final newline
/// belongs to a truncated block and is discarded.
fn parse_entries(script: &str, body: &str) -> Result<Vec<(String, String)>, AnalysisError> {
    let complete = body.rsplit_once('\n').map_or("", |(lines, _)| lines);
    complete
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(pass), Some(time)) => Ok((pass.to_string(), time.to_string())),
                _ => Err(AnalysisError::MalformedProfileLine {
                    script: script.to_string(),
                    line: line.to_string(),
                }),
            }
        })
        .collect()
}

impl ProfileTable {
    /// Render as CSV. Only a script's first execution carries its name.
    pub fn to_csv(&self) -> String {
        let mut output = String::from("Script");
        for pass in &self.passes {
            output.push(',');
            output.push_str(pass);
        }
        output.push('\n');

        for profile in &self.scripts {
            for (idx, row) in profile.executions.iter().enumerate() {
                if idx == 0 {
                    output.push_str(&profile.script);
                }
                for cell in row {
                    output.push(',');
                    output.push_str(cell);
                }
                output.push('\n');
            }
        }

        output
    }

    /// Total number of executions across all scripts
    pub fn execution_count(&self) -> usize {
        self.scripts.iter().map(|s| s.executions.len()).sum()
    }
}
