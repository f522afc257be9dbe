//! Interactive tennis scorer (default binary).
//!
//! Scores a live match from the keyboard and draws the scoreboard with a
//! framebuffer-based crossterm renderer. Logs go to `TENNIS_LOG_PATH` only,
//! since the terminal is in raw mode.

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tennis_scorer::core::{MatchEngine, MatchState};
use tennis_scorer::input::{handle_key_event, should_quit, PointComposer, ScoreCommand};
use tennis_scorer::term::{AnnotationView, FrameBuffer, ScoreboardView, TerminalRenderer, Viewport};
use tennis_scorer::types::PlayerNames;
use tennis_scorer::{logging, AppConfig};

fn main() -> Result<()> {
    let mut config = AppConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let rest = config.apply_args("tennis-scorer", &args)?;
    if let Some(extra) = rest.first() {
        return Err(anyhow!("tennis-scorer: unexpected argument: {}", extra));
    }

    if let Some(path) = config.log_path.as_deref() {
        logging::init_file(path)?;
    }

    let engine = MatchEngine::with_config(&config.match_config)?;
    let names = config.names();
    info!(?names, config = ?engine.config(), "scorer started");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, engine, &names);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut engine: MatchEngine, names: &PlayerNames) -> Result<()> {
    let view = ScoreboardView::new();
    let mut composer = PointComposer::new();
    let mut state = MatchState::new();
    let mut fb = FrameBuffer::new(0, 0);
    let match_config = engine.config();

    loop {
        // Render.
        engine.snapshot_into(&mut state);
        let annotation = AnnotationView {
            serve: composer.serve(),
            point_type: composer.point_type(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into_with_annotation(
            &state,
            &match_config,
            names,
            Some(&annotation),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        // Block until the next input.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(points = engine.points_played(), "scorer closed");
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                if let Some(command) = composer.apply(action) {
                    apply_command(&mut engine, command);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn apply_command(engine: &mut MatchEngine, command: ScoreCommand) {
    let applied = match command {
        ScoreCommand::Score {
            player,
            input: Some(input),
        } => engine.score_point_with_stats(player, input),
        ScoreCommand::Score {
            player,
            input: None,
        } => engine.score_point(player),
        ScoreCommand::Undo(player) => engine.remove_point(player),
        ScoreCommand::Reset => {
            engine.reset();
            true
        }
    };
    debug!(?command, applied, "command");
}
