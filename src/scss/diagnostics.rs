//! SCSS Diagnostics
//!
//! Findings produced by parsing (recovered anomalies) and by validation
//! (unused variables). Neither kind is fatal.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::scss::ast::Position;
use crate::scss::constants::{CODE_ANOMALOUS_STATEMENT, CODE_UNUSED_VARIABLE, DIAGNOSTIC_SOURCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => f.write_str("error"),
            DiagnosticSeverity::Warning => f.write_str("warning"),
            DiagnosticSeverity::Information => f.write_str("info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub code: String,
    pub source: String,
    pub message: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub position: Position,
}

impl Diagnostic {
    /// A statement kept as a raw placeholder in the tree
    pub fn anomalous_statement(path: &Path, position: Position, text: &str) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            code: CODE_ANOMALOUS_STATEMENT.to_string(),
            source: DIAGNOSTIC_SOURCE.to_string(),
            message: format!("Unrecognized statement kept as raw text: '{}'", text),
            path: path.to_path_buf(),
            position,
        }
    }

    pub fn unused_variable(path: &Path, position: Position, name: &str) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            code: CODE_UNUSED_VARIABLE.to_string(),
            source: DIAGNOSTIC_SOURCE.to_string(),
            message: format!(
                "Unused var: ${} at line {} and column {}",
                name, position.line, position.col
            ),
            path: path.to_path_buf(),
            position,
        }
    }

    pub fn is_code(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.path.display(),
            self.position.line,
            self.position.col,
            self.severity,
            self.code,
            self.message
        )
    }
}
