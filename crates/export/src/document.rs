//! JSON export documents
//!
//! Both documents share a header (`$schema`, `$id`, `generatedAt`), the match
//! format, the player names and the final score. The statistics document adds
//! both players' counters; the score document adds the full point history.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tennis_scorer_core::{MatchState, PlayerStatistics, PointMetadata, SetScore};
use tennis_scorer_types::{MatchConfig, MatchConfigPatch, PlayerNames};

pub const JSON_SCHEMA: &str = "https://json-schema.org/draft/2020-12/schema";
pub const STATISTICS_SCHEMA_ID: &str = "match-statistics-schema.json";
pub const SCORE_SCHEMA_ID: &str = "match-score-schema.json";

pub const STATISTICS_FILE: &str = "match-statistics.json";
pub const SCORE_FILE: &str = "match-score.json";

/// `2024-05-01T12:00:00.000Z`
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMatchDetails {
    pub sets_to_win: u32,
    pub games_per_set: u32,
    pub tie_break_points: u32,
}

impl From<&MatchConfig> for ExportMatchDetails {
    fn from(config: &MatchConfig) -> Self {
        Self {
            sets_to_win: config.sets_to_win,
            games_per_set: config.games_per_set,
            tie_break_points: config.tie_break_points,
        }
    }
}

impl ExportMatchDetails {
    /// The format as a patch, for rebuilding an engine from an export.
    pub fn to_patch(self) -> MatchConfigPatch {
        MatchConfigPatch::default()
            .with_sets_to_win(self.sets_to_win)
            .with_games_per_set(self.games_per_set)
            .with_tie_break_points(self.tie_break_points)
    }
}

pub type ExportPlayers = PlayerNames;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFinalScore {
    pub player1_sets: u32,
    pub player2_sets: u32,
    pub set_scores: Vec<SetScore>,
    /// Winner's display name
    pub match_winner: Option<String>,
}

impl ExportFinalScore {
    pub fn new(state: &MatchState, names: &PlayerNames) -> Self {
        Self {
            player1_sets: state.player1.sets,
            player2_sets: state.player2.sets,
            set_scores: state.past_set_scores.clone(),
            match_winner: state.match_winner.map(|p| names.get(p).to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStatistics {
    pub player1: PlayerStatistics,
    pub player2: PlayerStatistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatisticsExport {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "$id")]
    pub id: String,
    pub generated_at: String,
    pub match_details: ExportMatchDetails,
    pub players: ExportPlayers,
    pub final_score: ExportFinalScore,
    pub statistics: ExportStatistics,
}

impl MatchStatisticsExport {
    pub fn new(
        state: &MatchState,
        config: &MatchConfig,
        names: &PlayerNames,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            schema: JSON_SCHEMA.to_string(),
            id: STATISTICS_SCHEMA_ID.to_string(),
            generated_at: timestamp(generated_at),
            match_details: config.into(),
            players: names.clone(),
            final_score: ExportFinalScore::new(state, names),
            statistics: ExportStatistics {
                player1: state.statistics.player1,
                player2: state.statistics.player2,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreExport {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "$id")]
    pub id: String,
    pub generated_at: String,
    pub match_details: ExportMatchDetails,
    pub players: ExportPlayers,
    pub final_score: ExportFinalScore,
    pub points_history: Vec<PointMetadata>,
}

impl MatchScoreExport {
    pub fn new(
        state: &MatchState,
        config: &MatchConfig,
        names: &PlayerNames,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            schema: JSON_SCHEMA.to_string(),
            id: SCORE_SCHEMA_ID.to_string(),
            generated_at: timestamp(generated_at),
            match_details: config.into(),
            players: names.clone(),
            final_score: ExportFinalScore::new(state, names),
            points_history: state.points_history.clone(),
        }
    }
}
