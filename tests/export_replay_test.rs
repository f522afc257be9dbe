//! Export documents and replay, end to end

use std::path::PathBuf;

use serde_json::Value;

use tennis_scorer::core::MatchEngine;
use tennis_scorer::export::{
    replay, replay_with, MatchExport, PointSource, SourcePoint, SCORE_FILE, STATISTICS_FILE,
};
use tennis_scorer::types::{
    MatchConfigPatch, Player, PlayerNames, PointInput, PointType, ServeResult,
};

fn names() -> PlayerNames {
    PlayerNames::new(Some("Ana Ivanovic"), Some("Jelena"))
}

/// A short-set match won 4-1 4-2 by player 1, with a few annotated points.
fn finished_engine() -> MatchEngine {
    let config = MatchConfigPatch::default().with_games_per_set(4);
    let mut engine = MatchEngine::with_config(&config).unwrap();
    let ace = PointInput::new(ServeResult::First, PointType::Ace);
    let error =
        PointInput::new(ServeResult::Second, PointType::UnforcedError).with_rally_length(9);

    let game = |engine: &mut MatchEngine, winner: Player, annotate: bool| {
        for i in 0..4 {
            if annotate && i == 0 {
                engine.score_point_with_stats(winner, ace);
            } else if annotate && i == 1 {
                engine.score_point_with_stats(winner, error);
            } else {
                engine.score_point(winner);
            }
        }
    };

    for (idx, winner) in [1, 1, 2, 1, 1].iter().enumerate() {
        game(&mut engine, Player::from_number(*winner).unwrap(), idx == 0);
    }
    for winner in [2, 1, 1, 2, 1, 1] {
        game(&mut engine, Player::from_number(winner).unwrap(), false);
    }
    assert_eq!(engine.match_winner(), Some(Player::One));
    engine
}

fn temp_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tennis-scorer-{}-{}", tag, std::process::id()))
}

#[test]
fn test_score_export_replays_to_same_state() {
    let engine = finished_engine();
    let export = MatchExport::now(&engine, &names());
    let json = serde_json::to_string(&export.score).unwrap();

    let source = PointSource::parse(&json).unwrap();
    assert_eq!(source.names.as_ref(), Some(&names()));
    let config = source.config.clone().unwrap();
    assert_eq!(config.games_per_set, Some(4));

    let replayed = replay(&source.points, &config).unwrap();
    assert_eq!(replayed.ignored, 0);
    assert_eq!(replayed.engine.state(), engine.state());
    assert_eq!(replayed.engine.statistics(), engine.statistics());
}

#[test]
fn test_export_documents_header_and_final_score() {
    let engine = finished_engine();
    let export = MatchExport::now(&engine, &names());

    let stats: Value = serde_json::to_value(&export.statistics).unwrap();
    assert_eq!(stats["$schema"], "https://json-schema.org/draft/2020-12/schema");
    assert_eq!(stats["$id"], "match-statistics-schema.json");
    assert!(stats["generatedAt"].as_str().unwrap().ends_with('Z'));
    assert_eq!(stats["matchDetails"]["gamesPerSet"], 4);
    assert_eq!(stats["players"]["player1"], "Ana Ivanovic");
    assert_eq!(stats["finalScore"]["player1Sets"], 2);
    assert_eq!(stats["finalScore"]["matchWinner"], "Ana Ivanovic");
    assert_eq!(stats["finalScore"]["setScores"].as_array().unwrap().len(), 2);
    assert_eq!(stats["statistics"]["player1"]["aces"], 1);
    assert_eq!(stats["statistics"]["player2"]["unforcedErrors"], 1);

    let score: Value = serde_json::to_value(&export.score).unwrap();
    assert_eq!(score["$id"], "match-score-schema.json");
    let history = score["pointsHistory"].as_array().unwrap();
    assert_eq!(history.len(), engine.points_played());
    assert_eq!(history[0]["pointType"], "ace");
    assert_eq!(history[1]["rallyLength"], 9);
    assert!(history[2].get("pointType").is_none());
}

#[test]
fn test_write_to_creates_both_files() {
    let dir = temp_dir("write");
    let _ = std::fs::remove_dir_all(&dir);

    let engine = finished_engine();
    let written = MatchExport::now(&engine, &names()).write_to(&dir).unwrap();
    assert_eq!(written[0], dir.join(STATISTICS_FILE));
    assert_eq!(written[1], dir.join(SCORE_FILE));

    let text = std::fs::read_to_string(&written[1]).unwrap();
    let source = PointSource::parse(&text).unwrap();
    assert_eq!(source.points.len(), engine.points_played());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_points_after_match_point_are_ignored() {
    // 6-0 6-0 takes 48 points.
    let mut points = vec![SourcePoint::plain(Player::One); 48];
    points.push(SourcePoint::plain(Player::Two));

    let replayed = replay(&points, &MatchConfigPatch::default()).unwrap();
    assert_eq!(replayed.engine.match_winner(), Some(Player::One));
    assert_eq!(replayed.ignored, 1);
    assert_eq!(replayed.frames.len(), 49);
}

#[test]
fn test_frame_names_follow_score() {
    let text = "1 first ace\n2 second double_fault\n2\n2\n1\n1\n";
    let source = PointSource::parse(text).unwrap();

    let mut seen = Vec::new();
    let replayed = replay_with(&source.points, &MatchConfigPatch::default(), |frame, engine| {
        seen.push((frame.to_string(), engine.points_played()));
    })
    .unwrap();

    let names: Vec<String> = replayed.frames.iter().map(|f| f.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "000_match_opener",
            "001_set_1_game_1_point_0",
            "003_set_1_game_1_point_2",
            "004_set_1_game_1_point_3",
            "005_set_1_game_1_point_4",
            "006_set_1_game_1_point_5",
        ]
    );
    assert_eq!(seen[0], ("000_match_opener".to_string(), 0));
    assert_eq!(seen[2], ("003_set_1_game_1_point_2".to_string(), 3));
    let state = replayed.engine.state();
    assert_eq!((state.player1.points, state.player2.points), (3, 3));
    assert_eq!(replayed.engine.points_played(), 6);
}

#[test]
fn test_invalid_config_fails_replay() {
    let points = [SourcePoint::plain(Player::One)];
    let config = MatchConfigPatch::default().with_sets_to_win(0);
    assert!(replay(&points, &config).is_err());
}
