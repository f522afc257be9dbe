use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{Player, PointInput, PointType, ServeResult};

/// Annotation recorded for a point scored with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDetail {
    pub serve_result: ServeResult,
    pub point_type: PointType,
    /// Set by the engine from the score before the point was played.
    #[serde(default)]
    pub was_break_point: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rally_length: Option<u32>,
}

/// One entry of the point history.
///
/// Points scored without annotation carry no `detail` and never touch the
/// statistics. Serialized flat: `{"winner":1,"server":2,"serveResult":...}`.
///
/// Reading back is strict: an entry must carry both `serveResult` and
/// `pointType` or neither, and both must be known values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct PointMetadata {
    pub winner: Player,
    pub server: Player,
    #[serde(flatten)]
    pub detail: Option<PointDetail>,
}

impl PointMetadata {
    pub fn plain(winner: Player, server: Player) -> Self {
        Self {
            winner,
            server,
            detail: None,
        }
    }

    pub fn annotated(
        winner: Player,
        server: Player,
        input: PointInput,
        was_break_point: bool,
    ) -> Self {
        Self {
            winner,
            server,
            detail: Some(PointDetail {
                serve_result: input.serve_result,
                point_type: input.point_type,
                was_break_point,
                rally_length: input.rally_length,
            }),
        }
    }

    pub fn returner(&self) -> Player {
        self.server.opponent()
    }

    pub fn loser(&self) -> Player {
        self.winner.opponent()
    }

    pub fn server_won(&self) -> bool {
        self.winner == self.server
    }

    pub fn point_type(&self) -> Option<PointType> {
        self.detail.map(|d| d.point_type)
    }

    pub fn was_break_point(&self) -> bool {
        self.detail.is_some_and(|d| d.was_break_point)
    }

    /// The caller-facing annotation, for replaying this point.
    pub fn input(&self) -> Option<PointInput> {
        self.detail.map(|d| PointInput {
            serve_result: d.serve_result,
            point_type: d.point_type,
            rally_length: d.rally_length,
        })
    }
}

/// Wire shape of a history entry before the annotation is validated.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPoint {
    winner: Player,
    server: Player,
    #[serde(default)]
    serve_result: Option<ServeResult>,
    #[serde(default)]
    point_type: Option<PointType>,
    #[serde(default)]
    was_break_point: bool,
    #[serde(default)]
    rally_length: Option<u32>,
}

impl TryFrom<RawPoint> for PointMetadata {
    type Error = EngineError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        let detail = match (raw.serve_result, raw.point_type) {
            (None, None) => None,
            (Some(serve_result), Some(point_type)) => Some(PointDetail {
                serve_result,
                point_type,
                was_break_point: raw.was_break_point,
                rally_length: raw.rally_length,
            }),
            (serve_result, point_type) => {
                return Err(EngineError::IncompleteDetail {
                    serve_result,
                    point_type,
                })
            }
        };
        Ok(Self {
            winner: raw.winner,
            server: raw.server,
            detail,
        })
    }
}
