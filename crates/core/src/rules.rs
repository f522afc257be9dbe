//! Rules module - pure tennis scoring predicates
//!
//! Every function here is a stateless check over plain counts. The engine
//! decides *when* to ask; these functions only answer *whether*.
//!
//! - Games are won at 4+ points with a 2-point lead (deuce/advantage).
//! - Sets are won at `games_per_set`+ games with a 2-game lead, or through a
//!   tie-break once both players hold `games_per_set` games.
//! - A set is deciding when both players are one set away from the match;
//!   its tie-break is played to [`SUPER_TIE_BREAK_POINTS`].

use crate::types::{
    MatchConfig, DEUCE_POINTS, GAME_POINTS, SUPER_TIE_BREAK_POINTS, WIN_MARGIN,
};

fn leads_by_margin(score: u32, opponent: u32) -> bool {
    score >= opponent + WIN_MARGIN
}

/// Check whether `points` closes a regular game against `opponent`.
pub fn wins_game(points: u32, opponent: u32) -> bool {
    points >= GAME_POINTS && leads_by_margin(points, opponent)
}

/// Check whether `games` closes a set outside a tie-break.
pub fn wins_set(games: u32, opponent: u32, games_per_set: u32) -> bool {
    games >= games_per_set && leads_by_margin(games, opponent)
}

/// Both players are exactly one set away from the match.
///
/// With `sets_to_win == 1` the threshold is clamped to 1, which neither
/// player can hold while the match is still live, so no set is deciding.
pub fn is_deciding_set(sets1: u32, sets2: u32, sets_to_win: u32) -> bool {
    let threshold = sets_to_win.saturating_sub(1).max(1);
    sets1 == threshold && sets2 == threshold
}

/// Check whether the current set switches to tie-break scoring.
///
/// A deciding set is played as a tie-break from its first point.
pub fn enters_tie_break(games1: u32, games2: u32, games_per_set: u32, deciding: bool) -> bool {
    (games1 == games_per_set && games2 == games_per_set) || deciding
}

/// Points needed to win the current tie-break.
pub fn tie_break_target(config: &MatchConfig, deciding: bool) -> u32 {
    if deciding {
        SUPER_TIE_BREAK_POINTS
    } else {
        config.tie_break_points
    }
}

pub fn wins_tie_break(points: u32, opponent: u32, target: u32) -> bool {
    points >= target && leads_by_margin(points, opponent)
}

pub fn wins_match(sets: u32, sets_to_win: u32) -> bool {
    sets >= sets_to_win
}

/// Check whether the next point is a break point for the returner.
///
/// Uses the scores *before* the point is played. Tie-break points are never
/// break points.
pub fn is_break_point(server_points: u32, returner_points: u32, tie_break: bool) -> bool {
    if tie_break {
        return false;
    }
    if returner_points >= DEUCE_POINTS && server_points < DEUCE_POINTS {
        return true;
    }
    server_points >= DEUCE_POINTS
        && returner_points >= DEUCE_POINTS
        && returner_points == server_points + 1
}

/// Tie-break service: one serve for the opener, then two each.
///
/// `total_points` is the tie-break point count after the point was played.
/// Only valid while tie-breaks start at a total of 1.
pub fn switches_tie_break_server(total_points: u32) -> bool {
    total_points % 2 == 1
}
