//! Point composer - collects an optional annotation before a point is scored.
//!
//! Annotation keys only stage a serve lane and point type. The next score key
//! turns the staged annotation into a [`ScoreCommand`] and clears it.

use crate::types::{Player, PointInput, PointType, ScoreAction, ServeResult};

/// A match-changing command produced by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCommand {
    /// `input` is `None` for a plain point
    Score {
        player: Player,
        input: Option<PointInput>,
    },
    Undo(Player),
    Reset,
}

/// Staged annotation for the next point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointComposer {
    serve: Option<ServeResult>,
    point_type: Option<PointType>,
}

impl PointComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(&self) -> Option<ServeResult> {
        self.serve
    }

    pub fn point_type(&self) -> Option<PointType> {
        self.point_type
    }

    pub fn is_empty(&self) -> bool {
        self.serve.is_none() && self.point_type.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The annotation a score key would record right now.
    ///
    /// A point type is required. Without a staged serve, a double fault is
    /// recorded on the second serve and everything else on the first.
    pub fn pending_input(&self) -> Option<PointInput> {
        let point_type = self.point_type?;
        let serve = self.serve.unwrap_or(match point_type {
            PointType::DoubleFault => ServeResult::Second,
            _ => ServeResult::First,
        });
        Some(PointInput::new(serve, point_type))
    }

    /// Feed one action. Returns a command when the match should change.
    pub fn apply(&mut self, action: ScoreAction) -> Option<ScoreCommand> {
        match action {
            ScoreAction::SelectServe(serve) => {
                self.serve = Some(serve);
                None
            }
            ScoreAction::SelectPointType(point_type) => {
                // Pressing the staged type again unstages it.
                self.point_type = if self.point_type == Some(point_type) {
                    None
                } else {
                    Some(point_type)
                };
                None
            }
            ScoreAction::ClearAnnotation => {
                self.clear();
                None
            }
            ScoreAction::Score(player) => {
                let input = self.pending_input();
                self.clear();
                Some(ScoreCommand::Score { player, input })
            }
            ScoreAction::Undo(player) => {
                self.clear();
                Some(ScoreCommand::Undo(player))
            }
            ScoreAction::Reset => {
                self.clear();
                Some(ScoreCommand::Reset)
            }
        }
    }
}
