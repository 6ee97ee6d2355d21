//! Outcome reporting for one-shot maintenance tasks.
//!
//! Every task run ends in exactly one [`TaskReport`]: either the rows it
//! produced or the error that stopped it. A successful run with no rows
//! still reports a line saying so.

use std::fmt::Display;
use std::process::ExitCode;

use tracing::{error, info};

/// Line reported when a task succeeds without producing output.
pub const NO_ROWS: &str = "(no rows)";

/// The single outcome of a maintenance task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskReport {
    Succeeded { task: String, lines: Vec<String> },
    Failed { task: String, message: String },
}

impl TaskReport {
    /// Fold a task's result into a report.
    pub fn from_result<E: Display>(task: &str, result: Result<Vec<String>, E>) -> Self {
        match result {
            Ok(lines) if lines.is_empty() => Self::Succeeded {
                task: task.to_owned(),
                lines: vec![NO_ROWS.to_owned()],
            },
            Ok(lines) => Self::Succeeded {
                task: task.to_owned(),
                lines,
            },
            Err(e) => Self::Failed {
                task: task.to_owned(),
                message: e.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Write the report to the log stream: result lines at `info`, or the
    /// error message once at `error`.
    pub fn emit(&self) {
        match self {
            Self::Succeeded { task, lines } => {
                for line in lines {
                    info!(task = %task, "{line}");
                }
            }
            Self::Failed { task, message } => {
                error!(task = %task, "Task failed: {message}");
            }
        }
    }

    /// 0 on success, 1 on failure.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
