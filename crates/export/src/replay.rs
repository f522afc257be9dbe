//! Replay module - rebuild a match from its points, frame by frame
//!
//! A replay starts from a fresh engine and emits an opener frame, then one
//! frame per point named after the position *before* the point was played.
//! Double faults are scored but produce no frame.

use std::fmt;

use tennis_scorer_core::{MatchEngine, Position};
use tennis_scorer_types::{MatchConfigPatch, PointType};
use tracing::{debug, info};

use crate::error::Result;
use crate::source::SourcePoint;

/// One replay frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// The empty match before the first point
    Opener,
    Point {
        /// 1-based index of the point in the source
        number: usize,
        position: Position,
    },
}

impl fmt::Display for Frame {
    /// `000_match_opener` or `007_set_1_game_2_point_3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Opener => write!(f, "000_match_opener"),
            Frame::Point { number, position } => write!(
                f,
                "{:03}_set_{}_game_{}_point_{}",
                number, position.set, position.game, position.point
            ),
        }
    }
}

/// Result of a replay.
#[derive(Debug, Clone)]
pub struct Replay {
    pub engine: MatchEngine,
    pub frames: Vec<Frame>,
    /// Points the engine ignored because the match was already decided
    pub ignored: usize,
}

/// Replay `points` on a fresh engine configured by `config`.
pub fn replay(points: &[SourcePoint], config: &MatchConfigPatch) -> Result<Replay> {
    replay_with(points, config, |_, _| {})
}

/// Like [`replay`], calling `on_frame` with the engine right after each frame.
pub fn replay_with<F>(
    points: &[SourcePoint],
    config: &MatchConfigPatch,
    mut on_frame: F,
) -> Result<Replay>
where
    F: FnMut(&Frame, &MatchEngine),
{
    let mut engine = MatchEngine::with_config(config)?;
    let mut frames = Vec::with_capacity(points.len() + 1);
    let mut ignored = 0;

    frames.push(Frame::Opener);
    on_frame(&Frame::Opener, &engine);

    for (idx, point) in points.iter().enumerate() {
        let position = engine.position();
        let applied = match point.input {
            Some(input) => engine.score_point_with_stats(point.winner, input),
            None => engine.score_point(point.winner),
        };
        if !applied {
            ignored += 1;
            continue;
        }

        if point.input.map(|i| i.point_type) == Some(PointType::DoubleFault) {
            debug!(number = idx + 1, "double fault; no frame");
            continue;
        }

        let frame = Frame::Point {
            number: idx + 1,
            position,
        };
        on_frame(&frame, &engine);
        frames.push(frame);
    }

    info!(
        points = points.len(),
        frames = frames.len(),
        ignored,
        winner = ?engine.match_winner(),
        "replay finished"
    );
    Ok(Replay {
        engine,
        frames,
        ignored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tennis_scorer_types::{Player, PointInput, ServeResult};

    fn names(replay: &Replay) -> Vec<String> {
        replay.frames.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn frames_are_named_from_pre_point_position() {
        let points: Vec<_> = std::iter::repeat(SourcePoint::plain(Player::One))
            .take(5)
            .collect();
        let replay = replay(&points, &MatchConfigPatch::default()).unwrap();
        assert_eq!(
            names(&replay),
            vec![
                "000_match_opener",
                "001_set_1_game_1_point_0",
                "002_set_1_game_1_point_1",
                "003_set_1_game_1_point_2",
                "004_set_1_game_1_point_3",
                "005_set_1_game_2_point_0",
            ]
        );
    }

    #[test]
    fn double_faults_are_scored_without_frames() {
        let df = PointInput::new(ServeResult::Second, PointType::DoubleFault);
        let points = vec![
            SourcePoint::annotated(Player::Two, df),
            SourcePoint::plain(Player::One),
        ];
        let replay = replay(&points, &MatchConfigPatch::default()).unwrap();
        assert_eq!(
            names(&replay),
            vec!["000_match_opener", "002_set_1_game_1_point_1"]
        );
        assert_eq!(replay.engine.statistics().player1.double_faults, 1);
        assert_eq!(replay.engine.points_played(), 2);
    }

    #[test]
    fn points_after_match_are_counted_as_ignored() {
        let mut points: Vec<_> = std::iter::repeat(SourcePoint::plain(Player::Two))
            .take(48)
            .collect();
        points.push(SourcePoint::plain(Player::One));
        let replay = replay(&points, &MatchConfigPatch::default()).unwrap();
        assert_eq!(replay.engine.match_winner(), Some(Player::Two));
        assert_eq!(replay.ignored, 1);
        assert_eq!(replay.frames.len(), 49);
    }

    #[test]
    fn invalid_config_fails_before_scoring() {
        let points = vec![SourcePoint::plain(Player::One)];
        let config = MatchConfigPatch::default().with_tie_break_points(0);
        assert!(replay(&points, &config).is_err());
    }

    #[test]
    fn callback_sees_every_frame() {
        let points = vec![SourcePoint::plain(Player::One); 3];
        let mut seen = Vec::new();
        replay_with(&points, &MatchConfigPatch::default(), |frame, engine| {
            seen.push((*frame, engine.points_played()));
        })
        .unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], (Frame::Opener, 0));
        assert_eq!(seen[3].1, 3);
    }
}
