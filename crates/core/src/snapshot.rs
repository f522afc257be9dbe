use serde::{Deserialize, Serialize};

use crate::point::PointMetadata;
use crate::score::{PlayerScore, SetScore};
use crate::stats::{MatchStatistics, PlayerStatistics};
use crate::types::Player;

/// Where the match stands: set, game and point counters of the point
/// about to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// 1-based set number
    pub set: usize,
    /// 1-based game number within the set
    pub game: u32,
    /// Points already played in the current game or tie-break
    pub point: u32,
}

/// Complete state of a match.
///
/// The engine owns the live instance; everything handed out is a copy.
#[derive(Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub player1: PlayerScore,
    pub player2: PlayerScore,
    pub statistics: MatchStatistics,
    pub server: Player,
    pub past_set_scores: Vec<SetScore>,
    pub match_winner: Option<Player>,
    pub is_tie_break: bool,
    pub points_history: Vec<PointMetadata>,
}

impl Clone for MatchState {
    fn clone(&self) -> Self {
        Self {
            player1: self.player1,
            player2: self.player2,
            statistics: self.statistics,
            server: self.server,
            past_set_scores: self.past_set_scores.clone(),
            match_winner: self.match_winner,
            is_tie_break: self.is_tie_break,
            points_history: self.points_history.clone(),
        }
    }

    /// Reuses the history buffers of `self`.
    fn clone_from(&mut self, source: &Self) {
        self.player1 = source.player1;
        self.player2 = source.player2;
        self.statistics = source.statistics;
        self.server = source.server;
        self.past_set_scores.clone_from(&source.past_set_scores);
        self.match_winner = source.match_winner;
        self.is_tie_break = source.is_tie_break;
        self.points_history.clone_from(&source.points_history);
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the opening state, keeping allocations.
    pub fn clear(&mut self) {
        self.player1 = PlayerScore::default();
        self.player2 = PlayerScore::default();
        self.statistics = MatchStatistics::default();
        self.server = Player::One;
        self.past_set_scores.clear();
        self.match_winner = None;
        self.is_tie_break = false;
        self.points_history.clear();
    }

    pub fn score(&self, player: Player) -> &PlayerScore {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    pub(crate) fn score_mut(&mut self, player: Player) -> &mut PlayerScore {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }

    pub fn stats(&self, player: Player) -> &PlayerStatistics {
        self.statistics.get(player)
    }

    pub fn is_finished(&self) -> bool {
        self.match_winner.is_some()
    }

    /// 1-based number of the set in progress.
    pub fn current_set(&self) -> usize {
        self.past_set_scores.len() + 1
    }

    /// 1-based number of the game in progress within the current set.
    pub fn current_game(&self) -> u32 {
        self.player1.games + self.player2.games + 1
    }

    /// Points played so far in the current game or tie-break.
    pub fn points_in_game(&self) -> u32 {
        self.player1.points + self.player2.points
    }

    pub fn position(&self) -> Position {
        Position {
            set: self.current_set(),
            game: self.current_game(),
            point: self.points_in_game(),
        }
    }

    pub(crate) fn set_points(&mut self, points: u32) {
        self.player1.points = points;
        self.player2.points = points;
    }

    pub(crate) fn set_games(&mut self, games: u32) {
        self.player1.games = games;
        self.player2.games = games;
    }
}
