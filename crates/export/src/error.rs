//! Error types for export and replay.

use std::path::PathBuf;

use tennis_scorer_core::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A point line that could not be read
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: EngineError,
    },

    #[error("line {line}: expected `<winner> [<serve> <point-type> [<rally>]]`, got {text:?}")]
    Malformed { line: usize, text: String },

    #[error("point source contains no points")]
    Empty,
}

pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
