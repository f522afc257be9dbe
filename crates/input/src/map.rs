//! Key mapping from terminal events to scorer actions.

use crate::types::{Player, PointType, ScoreAction, ServeResult};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to scorer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ScoreAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Scoring
        KeyCode::Char('1') => Some(ScoreAction::Score(Player::One)),
        KeyCode::Char('2') => Some(ScoreAction::Score(Player::Two)),

        // Undo (shift+1 / shift+2)
        KeyCode::Char('!') => Some(ScoreAction::Undo(Player::One)),
        KeyCode::Char('@') => Some(ScoreAction::Undo(Player::Two)),

        // Serve lane
        KeyCode::Char('f') | KeyCode::Char('F') => Some(ScoreAction::SelectServe(ServeResult::First)),
        KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(ScoreAction::SelectServe(ServeResult::Second))
        }

        // Point type
        KeyCode::Char('a') | KeyCode::Char('A') => point_type(PointType::Ace),
        KeyCode::Char('d') | KeyCode::Char('D') => point_type(PointType::DoubleFault),
        KeyCode::Char('w') | KeyCode::Char('W') => point_type(PointType::Winner),
        KeyCode::Char('u') | KeyCode::Char('U') => point_type(PointType::UnforcedError),
        KeyCode::Char('e') | KeyCode::Char('E') => point_type(PointType::ForcedError),
        KeyCode::Char('n') | KeyCode::Char('N') => point_type(PointType::Net),
        KeyCode::Char('m') | KeyCode::Char('M') => point_type(PointType::MissedReturn),

        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc => Some(ScoreAction::ClearAnnotation),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ScoreAction::Reset),

        _ => None,
    }
}

fn point_type(point_type: PointType) -> Option<ScoreAction> {
    Some(ScoreAction::SelectPointType(point_type))
}

/// Check if key should quit the scorer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
