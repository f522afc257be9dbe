//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond parsing and small helpers,
//! making them usable in any context (scoring engine, terminal view, exporter).
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GAMES_PER_SET` | 6 | Games needed to take a set (win by 2) |
//! | `DEFAULT_SETS_TO_WIN` | 2 | Sets needed to take the match |
//! | `DEFAULT_TIE_BREAK_POINTS` | 7 | Points needed to win a standard tie-break |
//! | `SUPER_TIE_BREAK_POINTS` | 10 | Points needed to win the deciding-set tie-break |
//! | `GAME_POINTS` | 4 | Minimum points to win a regular game |
//! | `WIN_MARGIN` | 2 | Lead required for games, sets and tie-breaks |
//! | `DEUCE_POINTS` | 3 | Point count displayed as "40" |
//!
//! # Examples
//!
//! ```
//! use tennis_scorer_types::{MatchConfig, MatchConfigPatch, Player, PointType, ServeResult};
//!
//! let p = Player::from_number(2).unwrap();
//! assert_eq!(p.opponent(), Player::One);
//!
//! assert_eq!(PointType::from_str("double-fault"), Some(PointType::DoubleFault));
//! assert_eq!(ServeResult::from_str("second"), Some(ServeResult::Second));
//!
//! let config = MatchConfig::default().merged(&MatchConfigPatch::default().with_sets_to_win(3));
//! assert_eq!(config.games_per_set, 6);
//! assert_eq!(config.sets_to_win, 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

mod names;

pub use names::PlayerNames;

/// Default games per set (6, win by 2)
pub const DEFAULT_GAMES_PER_SET: u32 = 6;

/// Default sets needed to win the match (best of three)
pub const DEFAULT_SETS_TO_WIN: u32 = 2;

/// Default points needed to win a standard tie-break
pub const DEFAULT_TIE_BREAK_POINTS: u32 = 7;

/// Points needed to win the tie-break of a deciding set
pub const SUPER_TIE_BREAK_POINTS: u32 = 10;

/// Minimum points to win a regular game
pub const GAME_POINTS: u32 = 4;

/// Lead required to close a game, set or tie-break
pub const WIN_MARGIN: u32 = 2;

/// Point count shown as "40"; both players at or above it is deuce territory
pub const DEUCE_POINTS: u32 = 3;

/// Games both players are reset to when an undo crosses a set boundary
pub const UNDO_SET_GAMES: u32 = 5;

/// Theme used when none is configured
pub const DEFAULT_THEME: &str = "default";

/// Themes known to the terminal view.
pub const THEMES: [&str; 5] = ["default", "sunset", "forest", "royal", "dark"];

/// One of the two players in the match.
///
/// Serialized as the bare numbers `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Parse a player from its 1-based number.
    ///
    /// ```
    /// use tennis_scorer_types::Player;
    ///
    /// assert_eq!(Player::from_number(1), Some(Player::One));
    /// assert_eq!(Player::from_number(3), None);
    /// ```
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// 0-based index, for per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

impl Serialize for Player {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Player {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct V;
        impl<'de> serde::de::Visitor<'de> for V {
            type Value = Player;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "player number 1 or 2")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u8::try_from(v)
                    .ok()
                    .and_then(Player::from_number)
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u8::try_from(v)
                    .ok()
                    .and_then(Player::from_number)
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_u8(V)
    }
}

/// Which serve landed on the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServeResult {
    #[default]
    First,
    Second,
}

impl ServeResult {
    /// Parse a serve result (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first" | "1st" => Some(ServeResult::First),
            "second" | "2nd" => Some(ServeResult::Second),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServeResult::First => "first",
            ServeResult::Second => "second",
        }
    }
}

/// How a point ended.
///
/// The serialized names (`"double_fault"`, `"missed_return"`, ...) are the
/// ones used in exported point histories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointType {
    /// Serve not touched by the returner
    Ace,
    /// Both serves missed
    DoubleFault,
    /// Unreturnable shot by the point winner
    Winner,
    /// Point lost by the loser's own mistake
    UnforcedError,
    /// Point lost under pressure from the winner
    ForcedError,
    /// Point won at the net
    Net,
    /// Returner failed to put the serve back in play
    MissedReturn,
}

impl PointType {
    pub const ALL: [PointType; 7] = [
        PointType::Ace,
        PointType::DoubleFault,
        PointType::Winner,
        PointType::UnforcedError,
        PointType::ForcedError,
        PointType::Net,
        PointType::MissedReturn,
    ];

    /// Parse a point type (case-insensitive, `_` and `-` both accepted)
    ///
    /// ```
    /// use tennis_scorer_types::PointType;
    ///
    /// assert_eq!(PointType::from_str("ace"), Some(PointType::Ace));
    /// assert_eq!(PointType::from_str("unforced-error"), Some(PointType::UnforcedError));
    /// assert_eq!(PointType::from_str("lob"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ace" => Some(PointType::Ace),
            "double_fault" => Some(PointType::DoubleFault),
            "winner" => Some(PointType::Winner),
            "unforced_error" => Some(PointType::UnforcedError),
            "forced_error" => Some(PointType::ForcedError),
            "net" => Some(PointType::Net),
            "missed_return" => Some(PointType::MissedReturn),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PointType::Ace => "ace",
            PointType::DoubleFault => "double_fault",
            PointType::Winner => "winner",
            PointType::UnforcedError => "unforced_error",
            PointType::ForcedError => "forced_error",
            PointType::Net => "net",
            PointType::MissedReturn => "missed_return",
        }
    }

    /// Rally length implied by the point type, when it is fixed.
    ///
    /// Aces and missed returns never get past the serve.
    pub fn implied_rally_length(&self) -> Option<u32> {
        match self {
            PointType::Ace | PointType::MissedReturn => Some(1),
            _ => None,
        }
    }
}

/// Caller-supplied annotation for a point scored with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointInput {
    pub serve_result: ServeResult,
    pub point_type: PointType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rally_length: Option<u32>,
}

impl PointInput {
    pub fn new(serve_result: ServeResult, point_type: PointType) -> Self {
        Self {
            serve_result,
            point_type,
            rally_length: point_type.implied_rally_length(),
        }
    }

    pub fn with_rally_length(mut self, rally_length: u32) -> Self {
        self.rally_length = Some(rally_length);
        self
    }
}

/// Match format. The theme is opaque to scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    pub games_per_set: u32,
    pub sets_to_win: u32,
    pub tie_break_points: u32,
    pub theme: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games_per_set: DEFAULT_GAMES_PER_SET,
            sets_to_win: DEFAULT_SETS_TO_WIN,
            tie_break_points: DEFAULT_TIE_BREAK_POINTS,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl MatchConfig {
    /// Shallow-merge `patch` into this config; unset fields keep their value.
    pub fn apply(&mut self, patch: &MatchConfigPatch) {
        if let Some(v) = patch.games_per_set {
            self.games_per_set = v;
        }
        if let Some(v) = patch.sets_to_win {
            self.sets_to_win = v;
        }
        if let Some(v) = patch.tie_break_points {
            self.tie_break_points = v;
        }
        if let Some(v) = &patch.theme {
            self.theme = v.clone();
        }
    }

    pub fn merged(&self, patch: &MatchConfigPatch) -> Self {
        let mut out = self.clone();
        out.apply(patch);
        out
    }
}

/// Partial [`MatchConfig`] used for construction and updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_per_set: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets_to_win: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie_break_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl MatchConfigPatch {
    pub fn with_games_per_set(mut self, v: u32) -> Self {
        self.games_per_set = Some(v);
        self
    }

    pub fn with_sets_to_win(mut self, v: u32) -> Self {
        self.sets_to_win = Some(v);
        self
    }

    pub fn with_tie_break_points(mut self, v: u32) -> Self {
        self.tie_break_points = Some(v);
        self
    }

    pub fn with_theme(mut self, v: impl Into<String>) -> Self {
        self.theme = Some(v.into());
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn overlay(mut self, other: &MatchConfigPatch) -> Self {
        if other.games_per_set.is_some() {
            self.games_per_set = other.games_per_set;
        }
        if other.sets_to_win.is_some() {
            self.sets_to_win = other.sets_to_win;
        }
        if other.tie_break_points.is_some() {
            self.tie_break_points = other.tie_break_points;
        }
        if other.theme.is_some() {
            self.theme = other.theme.clone();
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.games_per_set.is_none()
            && self.sets_to_win.is_none()
            && self.tie_break_points.is_none()
            && self.theme.is_none()
    }
}

impl From<MatchConfig> for MatchConfigPatch {
    fn from(value: MatchConfig) -> Self {
        Self {
            games_per_set: Some(value.games_per_set),
            sets_to_win: Some(value.sets_to_win),
            tie_break_points: Some(value.tie_break_points),
            theme: Some(value.theme),
        }
    }
}

/// Scorer actions that can be triggered from the keyboard.
///
/// Annotation actions (`SelectServe`, `SelectPointType`, `ClearAnnotation`)
/// only change what the next `Score` records; they never touch the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAction {
    /// Award the next point to the player
    Score(Player),
    /// Undo the last point, charged against the player
    Undo(Player),
    /// Choose which serve the next point was played on
    SelectServe(ServeResult),
    /// Annotate how the next point ends
    SelectPointType(PointType),
    /// Drop any pending annotation
    ClearAnnotation,
    /// Start a fresh match with the same format
    Reset,
}

impl ScoreAction {
    /// Parse action from string (for scripted input)
    ///
    /// ```
    /// use tennis_scorer_types::{Player, PointType, ScoreAction};
    ///
    /// assert_eq!(ScoreAction::from_str("score1"), Some(ScoreAction::Score(Player::One)));
    /// assert_eq!(ScoreAction::from_str("undo2"), Some(ScoreAction::Undo(Player::Two)));
    /// assert_eq!(ScoreAction::from_str("net"), Some(ScoreAction::SelectPointType(PointType::Net)));
    /// assert_eq!(ScoreAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "score1" => Some(ScoreAction::Score(Player::One)),
            "score2" => Some(ScoreAction::Score(Player::Two)),
            "undo1" => Some(ScoreAction::Undo(Player::One)),
            "undo2" => Some(ScoreAction::Undo(Player::Two)),
            "clear" => Some(ScoreAction::ClearAnnotation),
            "reset" => Some(ScoreAction::Reset),
            other => ServeResult::from_str(other)
                .map(ScoreAction::SelectServe)
                .or_else(|| PointType::from_str(other).map(ScoreAction::SelectPointType)),
        }
    }
}
