//! Error types for the scoring engine.
//!
//! Scoring after the match is decided is not an error; those calls are
//! ignored. Errors are reserved for inputs the engine cannot interpret.

use thiserror::Error;

use crate::types::{Player, PointInput, PointType, ServeResult};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A format value that would make a game, set or match unwinnable
    #[error("invalid match config: {field} must be at least 1 (got {value})")]
    InvalidConfig { field: &'static str, value: u32 },

    #[error("unknown player: {0:?} (expected 1 or 2)")]
    UnknownPlayer(String),

    #[error("unknown point type: {0:?}")]
    UnknownPointType(String),

    #[error("unknown serve result: {0:?}")]
    UnknownServeResult(String),

    /// A history entry with only half of its annotation
    #[error(
        "point detail needs both serveResult and pointType (got {serve_result:?}, {point_type:?})"
    )]
    IncompleteDetail {
        serve_result: Option<ServeResult>,
        point_type: Option<PointType>,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Parse a player token such as `"1"` or `"2"`.
pub fn parse_player(s: &str) -> Result<Player> {
    s.trim()
        .parse::<u8>()
        .ok()
        .and_then(Player::from_number)
        .ok_or_else(|| EngineError::UnknownPlayer(s.to_string()))
}

/// Parse a serve lane and point type pair into a [`PointInput`].
pub fn parse_point_input(serve: &str, point_type: &str) -> Result<PointInput> {
    let serve_result = ServeResult::from_str(serve)
        .ok_or_else(|| EngineError::UnknownServeResult(serve.to_string()))?;
    let point_type = PointType::from_str(point_type)
        .ok_or_else(|| EngineError::UnknownPointType(point_type.to_string()))?;
    Ok(PointInput::new(serve_result, point_type))
}
