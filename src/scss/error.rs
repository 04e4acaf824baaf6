//! Error types for the SCSS pipeline
//!
//! Fatal conditions abort the whole top-level parse, including every import
//! being parsed underneath it. Recovered anomalies are not errors; they are
//! reported through [`crate::scss::diagnostics`].

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for SCSS parsing operations
#[derive(Error, Debug)]
pub enum ScssError {
    /// The file is missing, unreadable or empty
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unbalanced or otherwise malformed block structure
    #[error("Parse error in file {path:?} at line {line}, column {col}: {message}")]
    StructuralParse {
        path: PathBuf,
        line: usize,
        col: usize,
        message: String,
    },

    /// A file imports itself, directly or through other imports
    #[error("Import cycle detected in {path:?}: {chain}")]
    ImportCycle { path: PathBuf, chain: String },

    /// Configuration file could not be deserialized
    #[error("Invalid configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for SCSS operations
pub type ScssResult<T> = Result<T, ScssError>;

impl ScssError {
    pub fn structural(path: &Path, line: usize, col: usize, message: impl Into<String>) -> Self {
        ScssError::StructuralParse {
            path: path.to_path_buf(),
            line,
            col,
            message: message.into(),
        }
    }

    /// Empty files are reported through the I/O kind
    pub fn empty_file(path: &Path) -> Self {
        ScssError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "file is empty"),
        }
    }

    /// Stable label for the error kind, printed by the CLI
    pub fn kind(&self) -> &'static str {
        match self {
            ScssError::Io { .. } => "IOError",
            ScssError::StructuralParse { .. } => "StructuralParseError",
            ScssError::ImportCycle { .. } => "ImportCycleError",
            ScssError::Config { .. } => "ConfigError",
        }
    }

    /// The file the error was raised for
    pub fn path(&self) -> &Path {
        match self {
            ScssError::Io { path, .. }
            | ScssError::StructuralParse { path, .. }
            | ScssError::ImportCycle { path, .. }
            | ScssError::Config { path, .. } => path,
        }
    }

    /// Process exit code used by the command line wrapper
    pub fn exit_code(&self) -> i32 {
        match self {
            ScssError::Io { .. } => 2,
            ScssError::StructuralParse { .. } | ScssError::ImportCycle { .. } => 3,
            ScssError::Config { .. } => 1,
        }
    }
}

/// Helper trait for converting IO errors with the offending path
pub trait IoContext<T> {
    fn with_io_context(self, path: &Path) -> ScssResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, path: &Path) -> ScssResult<T> {
        self.map_err(|e| ScssError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
