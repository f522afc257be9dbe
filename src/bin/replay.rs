//! Replay a recorded match and write its JSON exports.
//!
//! Usage: `replay <source> [--games N] [--sets N] [--tie-break N] [--theme T]
//! [--player1 NAME] [--player2 NAME] [--out DIR] [--log FILE]`
//!
//! `<source>` is a file path, `-` for stdin, or an inline digit string such as
//! `11112222`. Frame names go to stdout, followed by the final scoreboard.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use tennis_scorer::export::{replay, MatchExport, PointSource};
use tennis_scorer::term::{ScoreboardView, Viewport};
use tennis_scorer::{logging, AppConfig};

const USAGE: &str = "usage: replay <source> [--games N] [--sets N] [--tie-break N] [--theme T] \
                     [--player1 NAME] [--player2 NAME] [--out DIR] [--log FILE]";

fn main() -> Result<()> {
    let mut config = AppConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let rest = config.apply_args("replay", &args)?;
    let [source_arg] = rest.as_slice() else {
        return Err(anyhow!("{}", USAGE));
    };

    match config.log_path.as_deref() {
        Some(path) => logging::init_file(path)?,
        None => logging::init_stderr()?,
    }

    let text = read_source(source_arg)?;
    let source = PointSource::parse(&text).with_context(|| format!("replay: {}", source_arg))?;

    let match_config = source
        .config
        .clone()
        .unwrap_or_default()
        .overlay(&config.match_config);
    let names = config.names_over(source.names.as_ref());

    let replay = replay(&source.points, &match_config)?;
    for frame in &replay.frames {
        println!("{}", frame);
    }
    if replay.ignored > 0 {
        info!(ignored = replay.ignored, "points after match point were ignored");
    }

    let state = replay.engine.state();
    let fb = ScoreboardView::new().without_help().render(
        &state,
        &replay.engine.config(),
        &names,
        Viewport::new(72, 20),
    );
    print!("\n{}", fb.to_text().trim_end_matches('\n'));
    println!();

    let out_dir = config
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(names.file_stem()));
    let written = MatchExport::now(&replay.engine, &names).write_to(&out_dir)?;
    for path in written {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn read_source(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("replay: reading stdin")?;
        return Ok(text);
    }

    let path = Path::new(arg);
    if path.exists() {
        return std::fs::read_to_string(path)
            .with_context(|| format!("replay: reading {}", path.display()));
    }
    if arg.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
        return Ok(arg.to_string());
    }
    Err(anyhow!("replay: no such file: {}", arg))
}
