use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tennis_scorer::core::{MatchEngine, MatchState};
use tennis_scorer::export::{replay, PointSource};
use tennis_scorer::term::{FrameBuffer, ScoreboardView, Viewport};
use tennis_scorer::types::{
    MatchConfigPatch, Player, PlayerNames, PointInput, PointType, ServeResult,
};

/// A deuce-heavy first set for a realistic history length.
fn played_engine() -> MatchEngine {
    let mut engine = MatchEngine::new();
    for game in 0..10 {
        let winner = Player::BOTH[game % 2];
        for _ in 0..3 {
            engine.score_point(Player::One);
            engine.score_point(Player::Two);
        }
        engine.score_point(winner);
        engine.score_point(winner);
    }
    engine
}

fn bench_score_point(c: &mut Criterion) {
    let mut engine = MatchEngine::new();

    c.bench_function("score_point", |b| {
        b.iter(|| {
            if !engine.score_point(black_box(Player::One)) {
                engine.reset();
            }
        })
    });
}

fn bench_score_point_with_stats(c: &mut Criterion) {
    let mut engine = MatchEngine::new();
    let input = PointInput::new(ServeResult::Second, PointType::UnforcedError);

    c.bench_function("score_point_with_stats", |b| {
        b.iter(|| {
            if !engine.score_point_with_stats(black_box(Player::Two), input) {
                engine.reset();
            }
        })
    });
}

fn bench_score_and_remove(c: &mut Criterion) {
    let mut engine = played_engine();
    let input = PointInput::new(ServeResult::First, PointType::Ace);

    c.bench_function("score_and_remove_point", |b| {
        b.iter(|| {
            engine.score_point_with_stats(Player::One, input);
            engine.remove_point(black_box(Player::One));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let engine = played_engine();
    let mut state = MatchState::new();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(black_box(&mut state));
        })
    });
}

fn bench_replay(c: &mut Criterion) {
    let text = "11112222".repeat(6) + &"1".repeat(28);
    let source = PointSource::parse(&text).unwrap();
    let config = MatchConfigPatch::default();

    c.bench_function("replay_digits", |b| {
        b.iter(|| replay(black_box(&source.points), &config).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let engine = played_engine();
    let state = engine.state();
    let config = engine.config();
    let names = PlayerNames::default();
    let view = ScoreboardView::new();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_scoreboard", |b| {
        b.iter(|| {
            view.render_into(&state, &config, &names, Viewport::new(80, 24), &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_score_point,
    bench_score_point_with_stats,
    bench_score_and_remove,
    bench_snapshot_into,
    bench_replay,
    bench_render
);
criterion_main!(benches);
