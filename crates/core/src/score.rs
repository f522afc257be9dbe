use serde::{Deserialize, Serialize};

use crate::types::{Player, DEUCE_POINTS};

/// Points, games and sets for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlayerScore {
    pub points: u32,
    pub games: u32,
    pub sets: u32,
}

impl PlayerScore {
    /// Clear points and games for the next set.
    pub fn next_set(&mut self) {
        self.points = 0;
        self.games = 0;
    }
}

/// Games won by each player in a completed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SetScore {
    pub player1: u32,
    pub player2: u32,
}

impl SetScore {
    pub fn new(player1: u32, player2: u32) -> Self {
        Self { player1, player2 }
    }

    pub fn games(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.player1.cmp(&self.player2) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Scoreboard label for a player's points in the current game.
///
/// Regular games use 0/15/30/40 with "AD" for advantage; tie-breaks show the
/// raw point count.
///
/// ```
/// use tennis_scorer_core::point_label;
///
/// assert_eq!(point_label(2, 0, false), "30");
/// assert_eq!(point_label(4, 3, false), "AD");
/// assert_eq!(point_label(3, 4, false), "40");
/// assert_eq!(point_label(5, 3, true), "5");
/// ```
pub fn point_label(points: u32, opponent: u32, tie_break: bool) -> String {
    if tie_break {
        return points.to_string();
    }

    if points >= DEUCE_POINTS && opponent >= DEUCE_POINTS {
        return if points > opponent { "AD" } else { "40" }.to_string();
    }

    match points {
        1 => "15",
        2 => "30",
        3 => "40",
        _ => "0",
    }
    .to_string()
}
