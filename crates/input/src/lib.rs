//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::ScoreAction`] and stages
//! point annotations until a score key is pressed. Nothing here touches the
//! match itself.

pub mod composer;
pub mod map;

pub use tennis_scorer_types as types;

pub use composer::{PointComposer, ScoreCommand};
pub use map::{handle_key_event, should_quit};
