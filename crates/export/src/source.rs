//! Point sources for replay
//!
//! Three text forms are accepted:
//!
//! - **Digits**: `"1121 2212"`. Each `1`/`2` is a point won by that player,
//!   other characters are ignored.
//! - **Event lines**: one point per line, `<winner> [<serve> <point-type>
//!   [<rally>]]`. `#` starts a comment.
//! - **JSON**: a bare point history array (either history entries or the
//!   older list of winner numbers `[1, 2, 1]`), or a full match-score export
//!   (which also carries the match format and player names).

use serde::Deserialize;
use tennis_scorer_core::{parse_player, parse_point_input, PointMetadata};
use tennis_scorer_types::{MatchConfigPatch, Player, PlayerNames, PointInput};

use crate::document::MatchScoreExport;
use crate::error::{ExportError, Result};

/// One point to replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePoint {
    pub winner: Player,
    /// `None` replays through plain scoring.
    pub input: Option<PointInput>,
}

impl SourcePoint {
    pub fn plain(winner: Player) -> Self {
        Self {
            winner,
            input: None,
        }
    }

    pub fn annotated(winner: Player, input: PointInput) -> Self {
        Self {
            winner,
            input: Some(input),
        }
    }
}

impl From<&PointMetadata> for SourcePoint {
    fn from(point: &PointMetadata) -> Self {
        Self {
            winner: point.winner,
            input: point.input(),
        }
    }
}

/// A parsed point source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSource {
    pub points: Vec<SourcePoint>,
    /// Present when the source was a full export.
    pub config: Option<MatchConfigPatch>,
    pub names: Option<PlayerNames>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonSource {
    Winners(Vec<Player>),
    History(Vec<PointMetadata>),
    Export(Box<MatchScoreExport>),
}

impl PointSource {
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim_start();
        let source = if trimmed.starts_with('[') || trimmed.starts_with('{') {
            Self::parse_json(trimmed)?
        } else if text.chars().any(|c| c.is_ascii_alphabetic()) {
            Self::parse_lines(text)?
        } else {
            Self::parse_digits(text)
        };

        if source.points.is_empty() {
            return Err(ExportError::Empty);
        }
        Ok(source)
    }

    pub fn parse_digits(text: &str) -> Self {
        let points = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .filter_map(|d| Player::from_number(d as u8))
            .map(SourcePoint::plain)
            .collect();
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn parse_lines(text: &str) -> Result<Self> {
        let mut points = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }
            points.push(parse_event(line, content)?);
        }
        Ok(Self {
            points,
            ..Self::default()
        })
    }

    pub fn parse_json(text: &str) -> Result<Self> {
        let source = match serde_json::from_str::<JsonSource>(text)? {
            JsonSource::Winners(winners) => Self {
                points: winners.into_iter().map(SourcePoint::plain).collect(),
                ..Self::default()
            },
            JsonSource::History(history) => Self {
                points: history.iter().map(SourcePoint::from).collect(),
                ..Self::default()
            },
            JsonSource::Export(export) => Self {
                points: export.points_history.iter().map(SourcePoint::from).collect(),
                config: Some(export.match_details.to_patch()),
                names: Some(export.players),
            },
        };
        Ok(source)
    }
}

fn parse_event(line: usize, content: &str) -> Result<SourcePoint> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let with_line = |source| ExportError::Line { line, source };

    match tokens.as_slice() {
        [winner] => Ok(SourcePoint::plain(parse_player(winner).map_err(with_line)?)),
        [winner, serve, point_type, rest @ ..] if rest.len() <= 1 => {
            let winner = parse_player(winner).map_err(with_line)?;
            let mut input = parse_point_input(serve, point_type).map_err(with_line)?;
            if let Some(rally) = rest.first() {
                let rally = rally.parse::<u32>().map_err(|_| ExportError::Malformed {
                    line,
                    text: content.to_string(),
                })?;
                input = input.with_rally_length(rally);
            }
            Ok(SourcePoint::annotated(winner, input))
        }
        _ => Err(ExportError::Malformed {
            line,
            text: content.to_string(),
        }),
    }
}
