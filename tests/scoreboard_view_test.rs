use tennis_scorer::core::MatchEngine;
use tennis_scorer::term::{AnnotationView, FrameBuffer, ScoreboardView, Theme, Viewport};
use tennis_scorer::types::{
    MatchConfig, MatchConfigPatch, Player, PlayerNames, PointInput, PointType, ServeResult,
};

const VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

// Panel geometry for default names on an 80x24 terminal.
const LEFT: u16 = 20;
const RIGHT: u16 = 59;
const TOP: u16 = 1;
const BOTTOM: u16 = 6;
const POINTS_COLUMN: std::ops::Range<u16> = 51..58;

fn render(engine: &MatchEngine) -> FrameBuffer {
    ScoreboardView::new().render(
        &engine.state(),
        &engine.config(),
        &PlayerNames::default(),
        VIEWPORT,
    )
}

fn score(engine: &mut MatchEngine, player: Player, points: usize) {
    for _ in 0..points {
        engine.score_point(player);
    }
}

/// Trimmed contents of the POINTS column on row `y`.
fn points(fb: &FrameBuffer, y: u16) -> String {
    POINTS_COLUMN.map(|x| ch(fb, x, y)).collect::<String>().trim().to_string()
}

fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).map(|c| c.ch).unwrap_or(' ')
}

#[test]
fn test_fresh_match_layout() {
    let engine = MatchEngine::new();
    let fb = render(&engine);

    assert_eq!(ch(&fb, LEFT, TOP), '┌');
    assert_eq!(ch(&fb, RIGHT, TOP), '┐');
    assert_eq!(ch(&fb, LEFT, BOTTOM), '└');
    assert_eq!(ch(&fb, RIGHT, BOTTOM), '┘');

    let header = fb.row_text(TOP + 1);
    for label in ["PLAYER", "S1", "S2", "S3", "GAMES", "POINTS"] {
        assert!(header.contains(label), "missing {label} in {header:?}");
    }
    assert!(!header.contains("S4"));

    let p1 = fb.row_text(TOP + 2);
    let p2 = fb.row_text(TOP + 3);
    assert!(p1.contains('●') && p1.contains("Player 1"));
    assert!(!p2.contains('●') && p2.contains("Player 2"));
    assert!(fb.row_text(TOP + 4).contains("Set 1 · Game 1"));

    assert!(fb.row_text(TOP + 7).contains("STATISTICS"));
    assert!(fb.row_text(VIEWPORT.height - 1).starts_with("1/2 point"));
}

#[test]
fn test_point_labels_and_server_marker() {
    let mut engine = MatchEngine::new();
    score(&mut engine, Player::One, 2);
    score(&mut engine, Player::Two, 1);
    let fb = render(&engine);
    assert_eq!(points(&fb, TOP + 2), "30");
    assert_eq!(points(&fb, TOP + 3), "15");

    // 30-40, 40-40, then advantage player 2.
    score(&mut engine, Player::Two, 2);
    score(&mut engine, Player::One, 1);
    score(&mut engine, Player::Two, 1);
    let fb = render(&engine);
    assert_eq!(points(&fb, TOP + 2), "40");
    assert_eq!(points(&fb, TOP + 3), "AD");

    score(&mut engine, Player::Two, 1);
    let fb = render(&engine);
    assert!(fb.row_text(TOP + 3).contains('●'));
    assert!(fb.row_text(TOP + 4).contains("Set 1 · Game 2"));
}

#[test]
fn test_tie_break_status() {
    let mut engine = MatchEngine::new();
    for _ in 0..6 {
        score(&mut engine, Player::One, 4);
        score(&mut engine, Player::Two, 4);
    }
    engine.score_point(Player::Two);
    assert!(engine.is_tie_break());

    let fb = render(&engine);
    assert!(fb.row_text(TOP + 4).contains("Set 1 · TIE-BREAK"));
    assert_eq!(points(&fb, TOP + 3), "1");
    assert_eq!(points(&fb, TOP + 2), "0");
}

#[test]
fn test_winner_banner() {
    let mut engine = MatchEngine::new();
    score(&mut engine, Player::One, 48);
    assert!(engine.is_finished());

    let fb = render(&engine);
    assert!(fb.row_text(TOP + 4).contains("Player 1 wins the match!"));
    let p1 = fb.row_text(TOP + 2);
    assert!(!p1.contains('●'));
    assert!(p1.contains("6   6   -"));
    assert!(fb.row_text(TOP + 3).contains("0   0   -"));
}

#[test]
fn test_statistics_panel_values() {
    let mut engine = MatchEngine::new();
    engine.score_point_with_stats(
        Player::One,
        PointInput::new(ServeResult::First, PointType::Ace),
    );
    let fb = render(&engine);
    let text = fb.to_text();
    let aces = text.lines().find(|l| l.contains("Aces")).unwrap();
    let values: Vec<&str> = aces.split_whitespace().skip(1).collect();
    assert_eq!(values, vec!["1", "0"]);
    let first = text.lines().find(|l| l.contains("1st serve in")).unwrap();
    assert!(first.contains("100%"));
}

#[test]
fn test_annotation_and_help_line() {
    let engine = MatchEngine::new();
    let mut fb = FrameBuffer::new(0, 0);
    let staged = AnnotationView {
        serve: Some(ServeResult::First),
        point_type: Some(PointType::Ace),
    };
    ScoreboardView::new().render_into_with_annotation(
        &engine.state(),
        &engine.config(),
        &PlayerNames::default(),
        Some(&staged),
        VIEWPORT,
        &mut fb,
    );
    assert!(fb.to_text().contains("Next point: first serve, ace"));

    let fb = ScoreboardView::new().without_help().render(
        &engine.state(),
        &engine.config(),
        &PlayerNames::default(),
        VIEWPORT,
    );
    assert_eq!(fb.row_text(VIEWPORT.height - 1), "");
}

#[test]
fn test_theme_lookup_and_fallback() {
    assert_eq!(Theme::by_name("neon"), Theme::default());
    assert_eq!(Theme::by_name("Sunset").name, "sunset");

    let config = MatchConfig {
        theme: "forest".to_string(),
        ..MatchConfig::default()
    };
    let engine = MatchEngine::new();
    let fb = ScoreboardView::new().render(
        &engine.state(),
        &config,
        &PlayerNames::default(),
        VIEWPORT,
    );
    let corner = fb.get(LEFT, TOP).unwrap();
    assert_eq!(corner.style, Theme::by_name("forest").frame());
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let engine = MatchEngine::new();
    for (w, h) in [(0, 0), (10, 3), (30, 8)] {
        let fb = render_at(&engine, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn test_long_match_format_renders_within_viewport() {
    let patch = MatchConfigPatch::default().with_sets_to_win(20000);
    let engine = MatchEngine::with_config(&patch).unwrap();

    let fb = render_at(&engine, VIEWPORT);
    let header = fb.row_text(2);
    assert!(header.contains("S13"));
    assert!(!header.contains("S14"));
    assert!(fb.to_text().contains("Set 1 · Game 1"));

    for (w, h) in [(0, 0), (10, 3), (u16::MAX, 4)] {
        let fb = render_at(&engine, Viewport::new(w, h));
        assert_eq!(fb.width(), w);
    }
}

fn render_at(engine: &MatchEngine, viewport: Viewport) -> FrameBuffer {
    ScoreboardView::new().render(
        &engine.state(),
        &engine.config(),
        &PlayerNames::default(),
        viewport,
    )
}
