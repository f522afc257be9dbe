//! Runtime configuration: environment variables, then command-line flags.
//!
//! | Variable | Flag | Meaning |
//! |----------|------|---------|
//! | `TENNIS_GAMES_PER_SET` | `--games` | games per set |
//! | `TENNIS_SETS_TO_WIN` | `--sets` | sets needed to win |
//! | `TENNIS_TIE_BREAK_POINTS` | `--tie-break` | standard tie-break length |
//! | `TENNIS_THEME` | `--theme` | scoreboard theme |
//! | `TENNIS_PLAYER1` / `TENNIS_PLAYER2` | `--player1` / `--player2` | display names |
//! | `TENNIS_LOG_PATH` | `--log` | log file |
//! | | `--out` | export directory (`replay` only) |
//!
//! Unparsable numbers in the environment are ignored; on the command line
//! they are errors.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::{MatchConfigPatch, PlayerNames};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub match_config: MatchConfigPatch,
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub log_path: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read the `TENNIS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let number = |key: &str| text(key).and_then(|s| s.parse::<u32>().ok());

        Self {
            match_config: MatchConfigPatch {
                games_per_set: number("TENNIS_GAMES_PER_SET"),
                sets_to_win: number("TENNIS_SETS_TO_WIN"),
                tie_break_points: number("TENNIS_TIE_BREAK_POINTS"),
                theme: text("TENNIS_THEME"),
            },
            player1: text("TENNIS_PLAYER1"),
            player2: text("TENNIS_PLAYER2"),
            log_path: text("TENNIS_LOG_PATH").map(PathBuf::from),
            out_dir: None,
        }
    }

    /// Apply command-line flags on top. Returns the positional arguments.
    pub fn apply_args(&mut self, prog: &str, args: &[String]) -> Result<Vec<String>> {
        let mut positional = Vec::new();
        let mut i = 0usize;
        while i < args.len() {
            let arg = args[i].as_str();
            if !arg.starts_with("--") {
                positional.push(args[i].clone());
                i += 1;
                continue;
            }

            i += 1;
            let value = args
                .get(i)
                .ok_or_else(|| anyhow!("{}: missing value for {}", prog, arg))?;
            match arg {
                "--games" => self.match_config.games_per_set = Some(parse_count(prog, arg, value)?),
                "--sets" => self.match_config.sets_to_win = Some(parse_count(prog, arg, value)?),
                "--tie-break" => {
                    self.match_config.tie_break_points = Some(parse_count(prog, arg, value)?)
                }
                "--theme" => self.match_config.theme = Some(value.clone()),
                "--player1" => self.player1 = Some(value.clone()),
                "--player2" => self.player2 = Some(value.clone()),
                "--log" => self.log_path = Some(PathBuf::from(value)),
                "--out" => self.out_dir = Some(PathBuf::from(value)),
                other => return Err(anyhow!("{}: unknown argument: {}", prog, other)),
            }
            i += 1;
        }
        Ok(positional)
    }

    pub fn names(&self) -> PlayerNames {
        PlayerNames::new(self.player1.as_deref(), self.player2.as_deref())
    }

    /// Names given here win over names carried by a source.
    pub fn names_over(&self, fallback: Option<&PlayerNames>) -> PlayerNames {
        let p1 = self
            .player1
            .as_deref()
            .or(fallback.map(|n| n.player1.as_str()));
        let p2 = self
            .player2
            .as_deref()
            .or(fallback.map(|n| n.player2.as_str()));
        PlayerNames::new(p1, p2)
    }
}

fn parse_count(prog: &str, flag: &str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(anyhow!("{}: invalid {} value: {}", prog, flag, value)),
    }
}
