use serde::{Deserialize, Serialize};

use crate::Player;

/// Display names for the two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    pub player1: String,
    pub player2: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            player1: default_name(Player::One),
            player2: default_name(Player::Two),
        }
    }
}

fn default_name(player: Player) -> String {
    format!("Player {}", player.number())
}

impl PlayerNames {
    /// Blank or missing names fall back to "Player 1" / "Player 2".
    pub fn new(player1: Option<&str>, player2: Option<&str>) -> Self {
        Self {
            player1: clean(player1).unwrap_or_else(|| default_name(Player::One)),
            player2: clean(player2).unwrap_or_else(|| default_name(Player::Two)),
        }
    }

    pub fn get(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    /// `"Rafa Nadal"` vs `"Roger"` → `rafa_nadal_vs_roger`
    pub fn file_stem(&self) -> String {
        format!("{}_vs_{}", slug(&self.player1), slug(&self.player2))
    }
}

fn clean(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}
