//! Match engine - owns the match state and applies tennis rules
//!
//! Every scored point runs the same cascade: point → (tie-break entry) →
//! game → set → match. Points scored with statistics additionally compute the
//! break-point flag, credit counters before any score changes, and rotate the
//! server inside tie-breaks.

use tracing::{debug, info, trace};

use crate::error::{EngineError, Result};
use crate::point::PointMetadata;
use crate::rules;
use crate::score::SetScore;
use crate::snapshot::{MatchState, Position};
use crate::stats::MatchStatistics;
use crate::types::{
    MatchConfig, MatchConfigPatch, Player, PointInput, DEUCE_POINTS, UNDO_SET_GAMES,
};

/// Scoring engine for one match.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: MatchConfig,
    state: MatchState,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    /// Create an engine with the default format (6 games, 2 sets, 7-point tie-break).
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
            state: MatchState::new(),
        }
    }

    /// Create an engine from a partial config; missing fields take defaults.
    pub fn with_config(patch: &MatchConfigPatch) -> Result<Self> {
        let config = MatchConfig::default().merged(patch);
        validate_config(&config)?;
        Ok(Self {
            config,
            state: MatchState::new(),
        })
    }

    pub fn config(&self) -> MatchConfig {
        self.config.clone()
    }

    /// Shallow-merge `patch` into the config. Applies from the next point on;
    /// the current score is never re-evaluated.
    ///
    /// An invalid result leaves the config untouched.
    pub fn update_config(&mut self, patch: &MatchConfigPatch) -> Result<()> {
        let next = self.config.merged(patch);
        validate_config(&next)?;
        debug!(?patch, "match config updated");
        self.config = next;
        Ok(())
    }

    /// Copy of the full match state, history included.
    pub fn state(&self) -> MatchState {
        self.state.clone()
    }

    /// Refresh a caller-owned copy of the state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut MatchState) {
        out.clone_from(&self.state);
    }

    pub fn statistics(&self) -> MatchStatistics {
        self.state.statistics
    }

    pub fn server(&self) -> Player {
        self.state.server
    }

    pub fn match_winner(&self) -> Option<Player> {
        self.state.match_winner
    }

    pub fn is_tie_break(&self) -> bool {
        self.state.is_tie_break
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Set, game and point number of the next point.
    pub fn position(&self) -> Position {
        self.state.position()
    }

    pub fn points_played(&self) -> usize {
        self.state.points_history.len()
    }

    /// Discard the match and start over with the same config.
    pub fn reset(&mut self) {
        self.state.clear();
        debug!("match reset");
    }

    /// Award a point without statistics.
    ///
    /// Returns `false` (and changes nothing) once the match is decided.
    pub fn score_point(&mut self, player: Player) -> bool {
        if self.ignore_when_finished("score_point") {
            return false;
        }

        let point = PointMetadata::plain(player, self.state.server);
        self.state.points_history.push(point);
        trace!(winner = player.number(), "point");
        self.advance(player, false);
        true
    }

    /// Award an annotated point and update both players' statistics.
    ///
    /// The break-point flag is computed here from the score before the point.
    pub fn score_point_with_stats(&mut self, player: Player, input: PointInput) -> bool {
        if self.ignore_when_finished("score_point_with_stats") {
            return false;
        }

        let server = self.state.server;
        let was_break_point = rules::is_break_point(
            self.state.score(server).points,
            self.state.score(server.opponent()).points,
            self.state.is_tie_break,
        );
        let point = PointMetadata::annotated(player, server, input, was_break_point);

        self.state.statistics.apply(&point);
        self.state.points_history.push(point);
        trace!(
            winner = player.number(),
            server = server.number(),
            point_type = input.point_type.as_str(),
            serve = input.serve_result.as_str(),
            was_break_point,
            "point"
        );
        self.advance(player, true);
        true
    }

    /// Undo the most recent point, charging the score change to `player`.
    ///
    /// Only the current game's points are tracked, so stepping back across a
    /// game restores both players to 40-40, and across a set to 5-5 / 40-40.
    /// Statistics are reverted exactly from the popped history entry.
    pub fn remove_point(&mut self, player: Player) -> bool {
        if self.ignore_when_finished("remove_point") {
            return false;
        }

        let score = self.state.score_mut(player);
        if score.points > 0 {
            score.points -= 1;
        } else if score.games > 0 {
            score.games -= 1;
            self.state.set_points(DEUCE_POINTS);
            self.switch_server();
        } else if score.sets > 0 {
            score.sets -= 1;
            self.state.past_set_scores.pop();
            self.state.set_games(UNDO_SET_GAMES);
            self.state.set_points(DEUCE_POINTS);
        }

        if let Some(point) = self.state.points_history.pop() {
            if point.detail.is_some() {
                self.state.statistics.reverse(&point);
            }
        }

        debug!(player = player.number(), "point removed");
        true
    }

    fn ignore_when_finished(&self, op: &'static str) -> bool {
        if let Some(winner) = self.state.match_winner {
            debug!(op, winner = winner.number(), "match already decided; ignoring");
            return true;
        }
        false
    }

    fn is_deciding_set(&self) -> bool {
        rules::is_deciding_set(
            self.state.player1.sets,
            self.state.player2.sets,
            self.config.sets_to_win,
        )
    }

    fn switch_server(&mut self) {
        self.state.server = self.state.server.opponent();
    }

    /// Point → tie-break entry → game/tie-break → set → match.
    fn advance(&mut self, player: Player, rotate_in_tie_break: bool) {
        let opponent = player.opponent();
        self.state.score_mut(player).points += 1;

        let deciding = self.is_deciding_set();
        if !self.state.is_tie_break
            && rules::enters_tie_break(
                self.state.player1.games,
                self.state.player2.games,
                self.config.games_per_set,
                deciding,
            )
        {
            self.state.is_tie_break = true;
            self.state.set_points(0);
            self.state.score_mut(player).points = 1;
            debug!(deciding, "tie-break started");
        }

        let points = self.state.score(player).points;
        let opponent_points = self.state.score(opponent).points;

        if self.state.is_tie_break {
            let target = rules::tie_break_target(&self.config, deciding);
            if rules::wins_tie_break(points, opponent_points, target) {
                self.close_tie_break(player);
            } else if rotate_in_tie_break
                && rules::switches_tie_break_server(self.state.points_in_game())
            {
                self.switch_server();
            }
        } else if rules::wins_game(points, opponent_points) {
            self.close_game(player);
        }
    }

    fn close_tie_break(&mut self, player: Player) {
        self.state.score_mut(player).sets += 1;

        // The tie-break counts as the deciding game of the set.
        let mut set = SetScore::new(self.state.player1.games, self.state.player2.games);
        match player {
            Player::One => set.player1 += 1,
            Player::Two => set.player2 += 1,
        }
        self.state.past_set_scores.push(set);
        debug!(
            winner = player.number(),
            player1 = set.player1,
            player2 = set.player2,
            "set won in tie-break"
        );

        if self.check_match_win(player) {
            return;
        }

        self.state.player1.next_set();
        self.state.player2.next_set();
        self.state.is_tie_break = false;
    }

    fn close_game(&mut self, player: Player) {
        let opponent = player.opponent();
        self.state.score_mut(player).games += 1;
        self.state.set_points(0);
        self.switch_server();
        trace!(
            winner = player.number(),
            player1 = self.state.player1.games,
            player2 = self.state.player2.games,
            "game"
        );

        let games = self.state.score(player).games;
        let opponent_games = self.state.score(opponent).games;
        if !rules::wins_set(games, opponent_games, self.config.games_per_set) {
            return;
        }

        self.state.score_mut(player).sets += 1;
        let set = SetScore::new(self.state.player1.games, self.state.player2.games);
        self.state.past_set_scores.push(set);
        self.state.set_games(0);
        debug!(
            winner = player.number(),
            player1 = set.player1,
            player2 = set.player2,
            "set won"
        );

        self.check_match_win(player);
    }

    fn check_match_win(&mut self, player: Player) -> bool {
        if !rules::wins_match(self.state.score(player).sets, self.config.sets_to_win) {
            return false;
        }
        self.state.match_winner = Some(player);
        info!(
            winner = player.number(),
            sets = self.state.past_set_scores.len(),
            "match won"
        );
        true
    }
}

fn validate_config(config: &MatchConfig) -> Result<()> {
    let fields = [
        ("games_per_set", config.games_per_set),
        ("sets_to_win", config.sets_to_win),
        ("tie_break_points", config.tie_break_points),
    ];
    for (field, value) in fields {
        if value == 0 {
            return Err(EngineError::InvalidConfig { field, value });
        }
    }
    Ok(())
}
