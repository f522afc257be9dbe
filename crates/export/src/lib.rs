//! Match export and replay
//!
//! - [`document`]: the `match-statistics.json` / `match-score.json` documents
//! - [`source`]: point sources (digit strings, event lines, JSON)
//! - [`replay`]: rebuild a match from a point source with named frames
//!
//! # Example
//!
//! ```
//! use tennis_scorer_export::{replay, PointSource};
//! use tennis_scorer_types::MatchConfigPatch;
//!
//! let source = PointSource::parse("1111 2222").unwrap();
//! let replay = replay(&source.points, &MatchConfigPatch::default()).unwrap();
//!
//! assert_eq!(replay.frames[0].to_string(), "000_match_opener");
//! assert_eq!(replay.engine.state().player2.games, 1);
//! ```

pub mod document;
pub mod error;
pub mod replay;
pub mod source;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tennis_scorer_core::MatchEngine;
use tracing::info;

pub use document::{
    timestamp, ExportFinalScore, ExportMatchDetails, ExportPlayers, ExportStatistics,
    MatchScoreExport, MatchStatisticsExport, SCORE_FILE, STATISTICS_FILE,
};
pub use error::{ExportError, Result};
pub use tennis_scorer_types::PlayerNames;
pub use replay::{replay, replay_with, Frame, Replay};
pub use source::{PointSource, SourcePoint};

/// Both export documents for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchExport {
    pub statistics: MatchStatisticsExport,
    pub score: MatchScoreExport,
}

impl MatchExport {
    pub fn new(engine: &MatchEngine, names: &PlayerNames, generated_at: DateTime<Utc>) -> Self {
        let state = engine.state();
        let config = engine.config();
        Self {
            statistics: MatchStatisticsExport::new(&state, &config, names, generated_at),
            score: MatchScoreExport::new(&state, &config, names, generated_at),
        }
    }

    pub fn now(engine: &MatchEngine, names: &PlayerNames) -> Self {
        Self::new(engine, names, Utc::now())
    }

    /// Write both documents (pretty-printed) into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<[PathBuf; 2]> {
        fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;
        let statistics = write_json(&dir.join(STATISTICS_FILE), &self.statistics)?;
        let score = write_json(&dir.join(SCORE_FILE), &self.score)?;
        Ok([statistics, score])
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text).map_err(|e| ExportError::io(path, e))?;
    info!(path = %path.display(), "export written");
    Ok(path.to_path_buf())
}
