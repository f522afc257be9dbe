//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the tennis rules, match state, statistics and undo.
//! It has **zero dependencies** on UI, files, or the terminal, making it:
//!
//! - **Deterministic**: The same point sequence always yields the same state
//! - **Reversible**: Undo restores statistics exactly from the point history
//! - **Portable**: Runs in the terminal frontend, the replay tool, or headless
//!
//! # Module Structure
//!
//! - [`engine`]: [`MatchEngine`], the only owner of live match state
//! - [`rules`]: stateless game/set/tie-break/match predicates
//! - [`score`]: per-player counts, completed set scores, point labels
//! - [`point`]: point history entries and their annotations
//! - [`stats`]: the 20 per-player counters and the point → counter table
//! - [`snapshot`]: [`MatchState`], the full copyable match state
//! - [`error`]: [`EngineError`] and string parsing helpers
//!
//! # Rules
//!
//! - **Games**: 4 points with a 2-point lead; deuce and advantage beyond 40-40
//! - **Sets**: `games_per_set` games with a 2-game lead
//! - **Tie-break**: entered at `games_per_set` all, first to `tie_break_points` by two
//! - **Deciding set**: played as a tie-break to 10 from its first point
//! - **Service**: alternates each game; inside a tie-break, after the first
//!   point and then every two points (annotated scoring only)
//!
//! # Example
//!
//! ```
//! use tennis_scorer_core::MatchEngine;
//! use tennis_scorer_types::{Player, PointInput, PointType, ServeResult};
//!
//! let mut engine = MatchEngine::new();
//!
//! engine.score_point(Player::One);
//! engine.score_point_with_stats(
//!     Player::One,
//!     PointInput::new(ServeResult::First, PointType::Ace),
//! );
//!
//! let state = engine.state();
//! assert_eq!(state.player1.points, 2);
//! assert_eq!(state.statistics.player1.aces, 1);
//! ```

pub mod engine;
pub mod error;
pub mod point;
pub mod rules;
pub mod score;
pub mod snapshot;
pub mod stats;

pub use tennis_scorer_types as types;

// Re-export commonly used types for convenience
pub use engine::MatchEngine;
pub use error::{parse_player, parse_point_input, EngineError, Result};
pub use point::{PointDetail, PointMetadata};
pub use score::{point_label, PlayerScore, SetScore};
pub use snapshot::{MatchState, Position};
pub use stats::{
    first_serve_percentage, second_serve_percentage, MatchStatistics, PlayerStatistics,
    StatCounter,
};
