//! Statistics module - per-player counters derived from annotated points
//!
//! A point never mutates counters directly. It is first expanded into an
//! ordered list of [`StatDelta`]s by [`point_deltas`]; applying a point
//! increments each delta and undoing it decrements the very same list, so the
//! inverse cannot drift from the forward path.
//!
//! Expansion order:
//!
//! 1. Serve attempts on the lane used (skipped for double faults)
//! 2. Double fault: both serve attempts plus the fault
//! 3-4. Point-type counters from [`point_type_effects`]
//! 5. Server won: points won on the serve lane
//! 6. Returner won: return made and point won on the lane; server won: the
//!    loser's return attempt, unless the return was missed
//! 7. Break point opportunity (and conversion) for the returner

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::point::{PointDetail, PointMetadata};
use crate::types::{Player, PointType, ServeResult};

/// Upper bound on counters touched by a single point.
pub const MAX_POINT_DELTAS: usize = 12;

/// Counters tracked for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    // Serve
    pub first_serves_in: u32,
    pub first_serves_total: u32,
    pub second_serves_in: u32,
    pub second_serves_total: u32,
    pub aces: u32,
    pub double_faults: u32,

    // Point outcomes
    pub unforced_errors: u32,
    pub forced_errors: u32,
    pub winners: u32,
    pub points_won_at_net: u32,

    // Service points won
    pub points_won_on_first_serve: u32,
    pub points_won_on_second_serve: u32,

    // Return games
    pub first_serve_returns: u32,
    pub second_serve_returns: u32,
    pub points_won_on_first_serve_return: u32,
    pub points_won_on_second_serve_return: u32,
    pub first_serve_missed_returns: u32,
    pub second_serve_missed_returns: u32,

    // Break points, as returner
    pub break_points_won: u32,
    pub break_points_total: u32,
}

/// Addresses one field of [`PlayerStatistics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatCounter {
    FirstServesIn,
    FirstServesTotal,
    SecondServesIn,
    SecondServesTotal,
    Aces,
    DoubleFaults,
    UnforcedErrors,
    ForcedErrors,
    Winners,
    PointsWonAtNet,
    PointsWonOnFirstServe,
    PointsWonOnSecondServe,
    FirstServeReturns,
    SecondServeReturns,
    PointsWonOnFirstServeReturn,
    PointsWonOnSecondServeReturn,
    FirstServeMissedReturns,
    SecondServeMissedReturns,
    BreakPointsWon,
    BreakPointsTotal,
}

impl StatCounter {
    pub const ALL: [StatCounter; 20] = [
        StatCounter::FirstServesIn,
        StatCounter::FirstServesTotal,
        StatCounter::SecondServesIn,
        StatCounter::SecondServesTotal,
        StatCounter::Aces,
        StatCounter::DoubleFaults,
        StatCounter::UnforcedErrors,
        StatCounter::ForcedErrors,
        StatCounter::Winners,
        StatCounter::PointsWonAtNet,
        StatCounter::PointsWonOnFirstServe,
        StatCounter::PointsWonOnSecondServe,
        StatCounter::FirstServeReturns,
        StatCounter::SecondServeReturns,
        StatCounter::PointsWonOnFirstServeReturn,
        StatCounter::PointsWonOnSecondServeReturn,
        StatCounter::FirstServeMissedReturns,
        StatCounter::SecondServeMissedReturns,
        StatCounter::BreakPointsWon,
        StatCounter::BreakPointsTotal,
    ];

    /// Field name as it appears in exported JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatCounter::FirstServesIn => "firstServesIn",
            StatCounter::FirstServesTotal => "firstServesTotal",
            StatCounter::SecondServesIn => "secondServesIn",
            StatCounter::SecondServesTotal => "secondServesTotal",
            StatCounter::Aces => "aces",
            StatCounter::DoubleFaults => "doubleFaults",
            StatCounter::UnforcedErrors => "unforcedErrors",
            StatCounter::ForcedErrors => "forcedErrors",
            StatCounter::Winners => "winners",
            StatCounter::PointsWonAtNet => "pointsWonAtNet",
            StatCounter::PointsWonOnFirstServe => "pointsWonOnFirstServe",
            StatCounter::PointsWonOnSecondServe => "pointsWonOnSecondServe",
            StatCounter::FirstServeReturns => "firstServeReturns",
            StatCounter::SecondServeReturns => "secondServeReturns",
            StatCounter::PointsWonOnFirstServeReturn => "pointsWonOnFirstServeReturn",
            StatCounter::PointsWonOnSecondServeReturn => "pointsWonOnSecondServeReturn",
            StatCounter::FirstServeMissedReturns => "firstServeMissedReturns",
            StatCounter::SecondServeMissedReturns => "secondServeMissedReturns",
            StatCounter::BreakPointsWon => "breakPointsWon",
            StatCounter::BreakPointsTotal => "breakPointsTotal",
        }
    }
}

impl PlayerStatistics {
    pub fn get(&self, counter: StatCounter) -> u32 {
        match counter {
            StatCounter::FirstServesIn => self.first_serves_in,
            StatCounter::FirstServesTotal => self.first_serves_total,
            StatCounter::SecondServesIn => self.second_serves_in,
            StatCounter::SecondServesTotal => self.second_serves_total,
            StatCounter::Aces => self.aces,
            StatCounter::DoubleFaults => self.double_faults,
            StatCounter::UnforcedErrors => self.unforced_errors,
            StatCounter::ForcedErrors => self.forced_errors,
            StatCounter::Winners => self.winners,
            StatCounter::PointsWonAtNet => self.points_won_at_net,
            StatCounter::PointsWonOnFirstServe => self.points_won_on_first_serve,
            StatCounter::PointsWonOnSecondServe => self.points_won_on_second_serve,
            StatCounter::FirstServeReturns => self.first_serve_returns,
            StatCounter::SecondServeReturns => self.second_serve_returns,
            StatCounter::PointsWonOnFirstServeReturn => self.points_won_on_first_serve_return,
            StatCounter::PointsWonOnSecondServeReturn => self.points_won_on_second_serve_return,
            StatCounter::FirstServeMissedReturns => self.first_serve_missed_returns,
            StatCounter::SecondServeMissedReturns => self.second_serve_missed_returns,
            StatCounter::BreakPointsWon => self.break_points_won,
            StatCounter::BreakPointsTotal => self.break_points_total,
        }
    }

    fn slot_mut(&mut self, counter: StatCounter) -> &mut u32 {
        match counter {
            StatCounter::FirstServesIn => &mut self.first_serves_in,
            StatCounter::FirstServesTotal => &mut self.first_serves_total,
            StatCounter::SecondServesIn => &mut self.second_serves_in,
            StatCounter::SecondServesTotal => &mut self.second_serves_total,
            StatCounter::Aces => &mut self.aces,
            StatCounter::DoubleFaults => &mut self.double_faults,
            StatCounter::UnforcedErrors => &mut self.unforced_errors,
            StatCounter::ForcedErrors => &mut self.forced_errors,
            StatCounter::Winners => &mut self.winners,
            StatCounter::PointsWonAtNet => &mut self.points_won_at_net,
            StatCounter::PointsWonOnFirstServe => &mut self.points_won_on_first_serve,
            StatCounter::PointsWonOnSecondServe => &mut self.points_won_on_second_serve,
            StatCounter::FirstServeReturns => &mut self.first_serve_returns,
            StatCounter::SecondServeReturns => &mut self.second_serve_returns,
            StatCounter::PointsWonOnFirstServeReturn => &mut self.points_won_on_first_serve_return,
            StatCounter::PointsWonOnSecondServeReturn => {
                &mut self.points_won_on_second_serve_return
            }
            StatCounter::FirstServeMissedReturns => &mut self.first_serve_missed_returns,
            StatCounter::SecondServeMissedReturns => &mut self.second_serve_missed_returns,
            StatCounter::BreakPointsWon => &mut self.break_points_won,
            StatCounter::BreakPointsTotal => &mut self.break_points_total,
        }
    }

    pub fn increment(&mut self, counter: StatCounter) {
        let slot = self.slot_mut(counter);
        *slot = slot.saturating_add(1);
    }

    /// Decrement, clamped at zero.
    pub fn decrement(&mut self, counter: StatCounter) {
        let slot = self.slot_mut(counter);
        *slot = slot.saturating_sub(1);
    }

    pub fn first_serve_percentage(&self) -> u32 {
        first_serve_percentage(self)
    }

    pub fn second_serve_percentage(&self) -> u32 {
        second_serve_percentage(self)
    }
}

/// Rounded percentage of `part` over `total`; 0 when nothing was attempted.
pub fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

pub fn first_serve_percentage(stats: &PlayerStatistics) -> u32 {
    percentage(stats.first_serves_in, stats.first_serves_total)
}

pub fn second_serve_percentage(stats: &PlayerStatistics) -> u32 {
    percentage(stats.second_serves_in, stats.second_serves_total)
}

/// Both players' counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub player1: PlayerStatistics,
    pub player2: PlayerStatistics,
}

impl MatchStatistics {
    pub fn get(&self, player: Player) -> &PlayerStatistics {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    pub fn get_mut(&mut self, player: Player) -> &mut PlayerStatistics {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }

    /// Credit every counter the point touches.
    pub fn apply(&mut self, point: &PointMetadata) {
        for delta in point_deltas(point) {
            self.get_mut(delta.player).increment(delta.counter);
        }
    }

    /// Exact inverse of [`MatchStatistics::apply`] for the same point.
    pub fn reverse(&mut self, point: &PointMetadata) {
        for delta in point_deltas(point) {
            self.get_mut(delta.player).decrement(delta.counter);
        }
    }
}

/// One counter increment, resolved to a concrete player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDelta {
    pub player: Player,
    pub counter: StatCounter,
}

pub type PointDeltas = ArrayVec<StatDelta, MAX_POINT_DELTAS>;

/// Who a counter is credited to, relative to the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Server,
    Returner,
    Winner,
    Loser,
}

/// A counter, possibly split by the serve lane the point was played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Fixed(StatCounter),
    Lane {
        first: StatCounter,
        second: StatCounter,
    },
}

impl Slot {
    fn resolve(self, lane: ServeResult) -> StatCounter {
        match (self, lane) {
            (Slot::Fixed(c), _) => c,
            (Slot::Lane { first, .. }, ServeResult::First) => first,
            (Slot::Lane { second, .. }, ServeResult::Second) => second,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub role: Role,
    pub slot: Slot,
}

const fn fixed(role: Role, counter: StatCounter) -> Effect {
    Effect {
        role,
        slot: Slot::Fixed(counter),
    }
}

const fn lane(role: Role, first: StatCounter, second: StatCounter) -> Effect {
    Effect {
        role,
        slot: Slot::Lane { first, second },
    }
}

const MISSED_RETURN: (StatCounter, StatCounter) = (
    StatCounter::FirstServeMissedReturns,
    StatCounter::SecondServeMissedReturns,
);

const ACE: [Effect; 2] = [
    fixed(Role::Server, StatCounter::Aces),
    lane(Role::Loser, MISSED_RETURN.0, MISSED_RETURN.1),
];
const DOUBLE_FAULT: [Effect; 3] = [
    fixed(Role::Server, StatCounter::FirstServesTotal),
    fixed(Role::Server, StatCounter::SecondServesTotal),
    fixed(Role::Server, StatCounter::DoubleFaults),
];
const WINNER: [Effect; 1] = [fixed(Role::Winner, StatCounter::Winners)];
const UNFORCED_ERROR: [Effect; 1] = [fixed(Role::Loser, StatCounter::UnforcedErrors)];
const FORCED_ERROR: [Effect; 1] = [fixed(Role::Loser, StatCounter::ForcedErrors)];
const NET: [Effect; 1] = [fixed(Role::Winner, StatCounter::PointsWonAtNet)];
const MISSED: [Effect; 1] = [lane(Role::Loser, MISSED_RETURN.0, MISSED_RETURN.1)];

const FIRST_SERVE_IN: [Effect; 2] = [
    fixed(Role::Server, StatCounter::FirstServesTotal),
    fixed(Role::Server, StatCounter::FirstServesIn),
];
const SECOND_SERVE_IN: [Effect; 3] = [
    fixed(Role::Server, StatCounter::FirstServesTotal),
    fixed(Role::Server, StatCounter::SecondServesTotal),
    fixed(Role::Server, StatCounter::SecondServesIn),
];

const SERVER_WON: Effect = lane(
    Role::Winner,
    StatCounter::PointsWonOnFirstServe,
    StatCounter::PointsWonOnSecondServe,
);
const RETURN_ATTEMPT_LOST: Effect = lane(
    Role::Loser,
    StatCounter::FirstServeReturns,
    StatCounter::SecondServeReturns,
);
const RETURNER_WON: [Effect; 2] = [
    lane(
        Role::Winner,
        StatCounter::FirstServeReturns,
        StatCounter::SecondServeReturns,
    ),
    lane(
        Role::Winner,
        StatCounter::PointsWonOnFirstServeReturn,
        StatCounter::PointsWonOnSecondServeReturn,
    ),
];

/// Counters specific to how the point ended (steps 2-4).
pub fn point_type_effects(point_type: PointType) -> &'static [Effect] {
    match point_type {
        PointType::Ace => &ACE,
        PointType::DoubleFault => &DOUBLE_FAULT,
        PointType::Winner => &WINNER,
        PointType::UnforcedError => &UNFORCED_ERROR,
        PointType::ForcedError => &FORCED_ERROR,
        PointType::Net => &NET,
        PointType::MissedReturn => &MISSED,
    }
}

/// Serve attempts credited to the server (step 1).
///
/// A double fault never counts a serve in; its attempts come from
/// [`point_type_effects`] instead.
pub fn serve_effects(serve_result: ServeResult, point_type: PointType) -> &'static [Effect] {
    match (point_type, serve_result) {
        (PointType::DoubleFault, _) => &[],
        (_, ServeResult::First) => &FIRST_SERVE_IN,
        (_, ServeResult::Second) => &SECOND_SERVE_IN,
    }
}

/// Expand a point into the counters it credits. Unannotated points credit
/// nothing.
pub fn point_deltas(point: &PointMetadata) -> PointDeltas {
    let mut out = PointDeltas::new();
    let Some(detail) = point.detail else {
        return out;
    };

    let mut push = |effect: &Effect| {
        out.push(StatDelta {
            player: role_player(point, effect.role),
            counter: effect.slot.resolve(detail.serve_result),
        });
    };

    serve_effects(detail.serve_result, detail.point_type)
        .iter()
        .for_each(&mut push);
    point_type_effects(detail.point_type)
        .iter()
        .for_each(&mut push);

    if point.server_won() {
        push(&SERVER_WON);
        if detail.point_type != PointType::MissedReturn {
            push(&RETURN_ATTEMPT_LOST);
        }
    } else {
        RETURNER_WON.iter().for_each(&mut push);
    }

    push_break_point(&mut out, point, &detail);
    out
}

fn push_break_point(out: &mut PointDeltas, point: &PointMetadata, detail: &PointDetail) {
    if !detail.was_break_point {
        return;
    }
    let returner = point.returner();
    out.push(StatDelta {
        player: returner,
        counter: StatCounter::BreakPointsTotal,
    });
    if point.winner == returner {
        out.push(StatDelta {
            player: returner,
            counter: StatCounter::BreakPointsWon,
        });
    }
}

fn role_player(point: &PointMetadata, role: Role) -> Player {
    match role {
        Role::Server => point.server,
        Role::Returner => point.returner(),
        Role::Winner => point.winner,
        Role::Loser => point.loser(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointInput;

    fn point(
        winner: Player,
        server: Player,
        serve: ServeResult,
        point_type: PointType,
        break_point: bool,
    ) -> PointMetadata {
        PointMetadata::annotated(
            winner,
            server,
            PointInput::new(serve, point_type),
            break_point,
        )
    }

    #[test]
    fn test_first_serve_winner_by_server() {
        let mut stats = MatchStatistics::default();
        stats.apply(&point(
            Player::One,
            Player::One,
            ServeResult::First,
            PointType::Winner,
            false,
        ));

        let p1 = stats.player1;
        assert_eq!(p1.first_serves_total, 1);
        assert_eq!(p1.first_serves_in, 1);
        assert_eq!(p1.winners, 1);
        assert_eq!(p1.points_won_on_first_serve, 1);

        let p2 = stats.player2;
        assert_eq!(p2.first_serve_returns, 1);
        assert_eq!(p2.first_serve_missed_returns, 0);
    }

    #[test]
    fn test_second_serve_counts_missed_first() {
        let mut stats = MatchStatistics::default();
        stats.apply(&point(
            Player::One,
            Player::One,
            ServeResult::Second,
            PointType::ForcedError,
            false,
        ));

        let p1 = stats.player1;
        assert_eq!(p1.first_serves_total, 1);
        assert_eq!(p1.first_serves_in, 0);
        assert_eq!(p1.second_serves_total, 1);
        assert_eq!(p1.second_serves_in, 1);
        assert_eq!(p1.points_won_on_second_serve, 1);
        assert_eq!(stats.player2.forced_errors, 1);
        assert_eq!(stats.player2.second_serve_returns, 1);
    }

    #[test]
    fn test_double_fault_is_not_a_serve_in() {
        let mut stats = MatchStatistics::default();
        stats.apply(&point(
            Player::Two,
            Player::One,
            ServeResult::Second,
            PointType::DoubleFault,
            false,
        ));

        let p1 = stats.player1;
        assert_eq!(p1.double_faults, 1);
        assert_eq!(p1.first_serves_total, 1);
        assert_eq!(p1.second_serves_total, 1);
        assert_eq!(p1.first_serves_in, 0);
        assert_eq!(p1.second_serves_in, 0);
        assert_eq!(first_serve_percentage(&p1), 0);

        let p2 = stats.player2;
        assert_eq!(p2.second_serve_returns, 1);
        assert_eq!(p2.points_won_on_second_serve_return, 1);
    }

    #[test]
    fn test_ace_credits_missed_return_to_loser() {
        let mut stats = MatchStatistics::default();
        stats.apply(&point(
            Player::One,
            Player::One,
            ServeResult::Second,
            PointType::Ace,
            false,
        ));

        assert_eq!(stats.player1.aces, 1);
        assert_eq!(stats.player1.points_won_on_second_serve, 1);
        assert_eq!(stats.player2.second_serve_missed_returns, 1);
        assert_eq!(stats.player2.first_serve_missed_returns, 0);
    }

    #[test]
    fn test_missed_return_is_not_a_return_attempt() {
        let mut stats = MatchStatistics::default();
        stats.apply(&point(
            Player::One,
            Player::One,
            ServeResult::First,
            PointType::MissedReturn,
            false,
        ));

        assert_eq!(stats.player2.first_serve_missed_returns, 1);
        assert_eq!(stats.player2.first_serve_returns, 0);
    }

    #[test]
    fn test_break_point_converted() {
        let mut stats = MatchStatistics::default();
        stats.apply(&point(
            Player::Two,
            Player::One,
            ServeResult::First,
            PointType::Net,
            true,
        ));

        let p2 = stats.player2;
        assert_eq!(p2.break_points_total, 1);
        assert_eq!(p2.break_points_won, 1);
        assert_eq!(p2.points_won_at_net, 1);
        assert_eq!(p2.first_serve_returns, 1);
        assert_eq!(p2.points_won_on_first_serve_return, 1);
    }

    #[test]
    fn test_break_point_saved() {
        let mut stats = MatchStatistics::default();
        stats.apply(&point(
            Player::One,
            Player::One,
            ServeResult::First,
            PointType::UnforcedError,
            true,
        ));

        assert_eq!(stats.player2.break_points_total, 1);
        assert_eq!(stats.player2.break_points_won, 0);
        assert_eq!(stats.player2.unforced_errors, 1);
    }

    #[test]
    fn test_reverse_restores_every_point_type() {
        for server in Player::BOTH {
            for winner in Player::BOTH {
                for serve in [ServeResult::First, ServeResult::Second] {
                    for t in PointType::ALL {
                        for bp in [false, true] {
                            let mut stats = MatchStatistics::default();
                            let p = point(winner, server, serve, t, bp);
                            stats.apply(&p);
                            assert_ne!(stats, MatchStatistics::default());
                            stats.reverse(&p);
                            assert_eq!(stats, MatchStatistics::default(), "{:?}", p);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_deltas_fit_capacity() {
        let mut max = 0;
        for t in PointType::ALL {
            for serve in [ServeResult::First, ServeResult::Second] {
                let p = point(Player::Two, Player::One, serve, t, true);
                max = max.max(point_deltas(&p).len());
            }
        }
        assert!(max <= MAX_POINT_DELTAS);
    }

    #[test]
    fn test_plain_point_has_no_deltas() {
        assert!(point_deltas(&PointMetadata::plain(Player::One, Player::Two)).is_empty());
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut stats = PlayerStatistics::default();
        stats.decrement(StatCounter::Aces);
        assert_eq!(stats.aces, 0);
    }

    #[test]
    fn test_counter_names_match_serialized_fields() {
        let mut stats = PlayerStatistics::default();
        for (i, c) in StatCounter::ALL.iter().enumerate() {
            for _ in 0..=i {
                stats.increment(*c);
            }
        }
        let v = serde_json::to_value(stats).unwrap();
        for (i, c) in StatCounter::ALL.iter().enumerate() {
            assert_eq!(v[c.as_str()], (i + 1) as u64);
            assert_eq!(stats.get(*c), (i + 1) as u32);
        }
    }

    #[test]
    fn test_percentages() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 2), 50);
        let stats = PlayerStatistics {
            second_serves_in: 3,
            second_serves_total: 4,
            ..Default::default()
        };
        assert_eq!(stats.second_serve_percentage(), 75);
        assert_eq!(stats.first_serve_percentage(), 0);
    }

    #[test]
    fn test_get_reads_only_the_addressed_counter() {
        for counter in StatCounter::ALL {
            let mut stats = PlayerStatistics::default();
            stats.increment(counter);
            stats.increment(counter);
            for other in StatCounter::ALL {
                let expected = if other == counter { 2 } else { 0 };
                assert_eq!(
                    stats.get(other),
                    expected,
                    "{} after {}",
                    other.as_str(),
                    counter.as_str()
                );
            }
        }
    }
}
