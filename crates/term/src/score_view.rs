//! ScoreboardView: maps `core::MatchState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{first_serve_percentage, point_label, second_serve_percentage};
use crate::core::{MatchState, PlayerStatistics};
use crate::fb::FrameBuffer;
use crate::theme::Theme;
use crate::types::{MatchConfig, Player, PlayerNames, PointType, ServeResult};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Annotation staged for the next point, shown under the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnnotationView {
    pub serve: Option<ServeResult>,
    pub point_type: Option<PointType>,
}

const MIN_NAME_W: u16 = 6;
const MAX_NAME_W: u16 = 18;
const SET_COL_W: u16 = 4;
const GAMES_W: u16 = 6;
const POINTS_W: u16 = 7;
const STAT_VALUE_W: u16 = 10;

/// One row of the statistics panel.
struct StatRow {
    label: &'static str,
    value: fn(&PlayerStatistics) -> String,
}

const STAT_ROWS: [StatRow; 11] = [
    StatRow {
        label: "1st serve in",
        value: |s| format!("{}%", first_serve_percentage(s)),
    },
    StatRow {
        label: "2nd serve in",
        value: |s| format!("{}%", second_serve_percentage(s)),
    },
    StatRow {
        label: "Aces",
        value: |s| s.aces.to_string(),
    },
    StatRow {
        label: "Double faults",
        value: |s| s.double_faults.to_string(),
    },
    StatRow {
        label: "Winners",
        value: |s| s.winners.to_string(),
    },
    StatRow {
        label: "Unforced errors",
        value: |s| s.unforced_errors.to_string(),
    },
    StatRow {
        label: "Forced errors",
        value: |s| s.forced_errors.to_string(),
    },
    StatRow {
        label: "Net points won",
        value: |s| s.points_won_at_net.to_string(),
    },
    StatRow {
        label: "1st serve pts won",
        value: |s| s.points_won_on_first_serve.to_string(),
    },
    StatRow {
        label: "2nd serve pts won",
        value: |s| s.points_won_on_second_serve.to_string(),
    },
    StatRow {
        label: "Break points won",
        value: |s| format!("{}/{}", s.break_points_won, s.break_points_total),
    },
];

const HELP: &str = "1/2 point  !/@ undo  f/s serve  a d w u e n m type  c clear  r reset  q quit";

/// Terminal renderer for the match scoreboard and statistics panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreboardView {
    hide_help: bool,
}

/// Column positions of the scoreboard panel.
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    name_x: u16,
    name_w: u16,
    sets_x: u16,
    set_cols: u16,
    /// Index of the set shown in the first set column
    first_set: usize,
    games_right: u16,
    points_right: u16,
}

impl Layout {
    /// Set columns are capped to what fits the viewport; when they run out,
    /// the window slides so the set in play stays visible.
    fn new(
        config: &MatchConfig,
        names: &PlayerNames,
        sets_reached: usize,
        viewport: Viewport,
    ) -> Self {
        let longest = names.player1.chars().count().max(names.player2.chars().count());
        let name_w = (longest.min(MAX_NAME_W as usize) as u16).max(MIN_NAME_W);

        let fixed_w = 2 + 3 + name_w + 1 + GAMES_W + POINTS_W + 1;
        let room = viewport.width.saturating_sub(fixed_w) / SET_COL_W;
        let set_cols = max_sets(config).min(u32::from(room)).max(1) as u16;
        let first_set = sets_reached.saturating_sub(usize::from(set_cols));

        let frame_w = fixed_w + set_cols * SET_COL_W;
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = u16::from(viewport.height > 20);

        let name_x = x.saturating_add(4);
        let sets_x = name_x.saturating_add(name_w + 1);
        let games_right = sets_x.saturating_add(set_cols * SET_COL_W + GAMES_W);
        let points_right = games_right.saturating_add(POINTS_W);
        Self {
            x,
            y,
            frame_w,
            name_x,
            name_w,
            sets_x,
            set_cols,
            first_set,
            games_right,
            points_right,
        }
    }

    /// Right edge of set column `col`.
    fn set_right(&self, col: u16) -> u16 {
        self.sets_x.saturating_add((col + 1) * SET_COL_W - 1)
    }
}

/// Longest possible match in sets.
fn max_sets(config: &MatchConfig) -> u32 {
    config.sets_to_win.saturating_mul(2).saturating_sub(1).max(1)
}

impl ScoreboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the key help line (used for replay frames).
    pub fn without_help(mut self) -> Self {
        self.hide_help = true;
        self
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        state: &MatchState,
        config: &MatchConfig,
        names: &PlayerNames,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.render_into_with_annotation(state, config, names, None, viewport, fb);
    }

    pub fn render_into_with_annotation(
        &self,
        state: &MatchState,
        config: &MatchConfig,
        names: &PlayerNames,
        annotation: Option<&AnnotationView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let theme = Theme::by_name(&config.theme);
        fb.resize(viewport.width, viewport.height);
        fb.clear(theme.body().cell(' '));

        // Completed sets plus the one in play.
        let sets_reached = state.past_set_scores.len() + usize::from(!state.is_finished());
        let layout = Layout::new(config, names, sets_reached, viewport);
        self.draw_scoreboard(fb, state, names, &layout, &theme);

        let stats_y = layout.y + 7;
        let stats_end = self.draw_statistics(fb, state, names, &layout, &theme, stats_y, viewport);

        if let Some(annotation) = annotation {
            let y = stats_end.saturating_add(1);
            if y < viewport.height.saturating_sub(1) {
                fb.put_str(layout.x, y, &annotation_text(annotation), theme.body());
            }
        }

        if !self.hide_help && viewport.height > 0 {
            fb.put_str(0, viewport.height - 1, HELP, theme.body().dim());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        state: &MatchState,
        config: &MatchConfig,
        names: &PlayerNames,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, config, names, viewport, &mut fb);
        fb
    }

    fn draw_scoreboard(
        &self,
        fb: &mut FrameBuffer,
        state: &MatchState,
        names: &PlayerNames,
        layout: &Layout,
        theme: &Theme,
    ) {
        let Layout { x, y, frame_w, .. } = *layout;
        let inner_w = frame_w.saturating_sub(2);

        fb.fill_rect(x + 1, y + 1, inner_w, 4, ' ', theme.panel());
        draw_border(fb, x, y, frame_w, 6, theme);

        // Header row.
        let header = theme.header();
        fb.fill_rect(x + 1, y + 1, inner_w, 1, ' ', header);
        fb.put_str(layout.name_x, y + 1, "PLAYER", header);
        for i in 0..layout.set_cols {
            let label = format!("S{}", layout.first_set + usize::from(i) + 1);
            fb.put_str_right(layout.set_right(i), y + 1, &label, header);
        }
        fb.put_str_right(layout.games_right, y + 1, "GAMES", header);
        fb.put_str_right(layout.points_right, y + 1, "POINTS", header);

        for (row, player) in Player::BOTH.into_iter().enumerate() {
            self.draw_player_row(fb, state, names, layout, theme, player, y + 2 + row as u16);
        }

        // Status row.
        let status = status_text(state, names);
        let status_style = if state.is_finished() {
            theme.highlight()
        } else {
            theme.muted()
        };
        fb.put_str(layout.name_x, y + 4, &status, status_style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_player_row(
        &self,
        fb: &mut FrameBuffer,
        state: &MatchState,
        names: &PlayerNames,
        layout: &Layout,
        theme: &Theme,
        player: Player,
        y: u16,
    ) {
        let panel = theme.panel();
        let bright = theme.highlight();

        if !state.is_finished() && state.server == player {
            fb.put_char(layout.x + 2, y, '●', bright);
        }
        let name_style = if state.match_winner == Some(player) {
            bright
        } else {
            panel
        };
        fb.put_str_fixed(layout.name_x, y, layout.name_w, names.get(player), name_style);

        for i in 0..layout.set_cols {
            let set = state.past_set_scores.get(layout.first_set + usize::from(i));
            let text = set
                .map(|set| set.games(player).to_string())
                .unwrap_or_else(|| "-".to_string());
            let won = set.is_some_and(|set| set.winner() == Some(player));
            let style = if won { bright } else { panel };
            fb.put_str_right(layout.set_right(i), y, &text, style);
        }

        let score = state.score(player);
        let opponent = state.score(player.opponent());
        fb.put_str_right(layout.games_right, y, &score.games.to_string(), panel);
        if !state.is_finished() {
            let label = point_label(score.points, opponent.points, state.is_tie_break);
            fb.put_str_right(layout.points_right, y, &label, bright);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_statistics(
        &self,
        fb: &mut FrameBuffer,
        state: &MatchState,
        names: &PlayerNames,
        layout: &Layout,
        theme: &Theme,
        y: u16,
        viewport: Viewport,
    ) -> u16 {
        // Keep the help line free.
        let last_row = viewport.height.saturating_sub(2);
        if y > last_row {
            return y;
        }

        let label_x = layout.x.saturating_add(1);
        let col1_right = label_x.saturating_add(18 + STAT_VALUE_W);
        let col2_right = col1_right.saturating_add(STAT_VALUE_W);

        let label = theme.label();
        fb.put_str(label_x, y, "STATISTICS", label);
        fb.put_str_right(col1_right, y, &short_name(names.get(Player::One)), label);
        fb.put_str_right(col2_right, y, &short_name(names.get(Player::Two)), label);

        let body = theme.body();
        let mut row_y = y;
        for row in STAT_ROWS.iter() {
            if row_y + 1 > last_row {
                break;
            }
            row_y += 1;
            fb.put_str(label_x, row_y, row.label, body);
            fb.put_str_right(col1_right, row_y, &(row.value)(state.stats(Player::One)), body);
            fb.put_str_right(col2_right, row_y, &(row.value)(state.stats(Player::Two)), body);
        }
        row_y
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, theme: &Theme) {
    if w < 2 || h < 2 {
        return;
    }
    let style = theme.frame();
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn status_text(state: &MatchState, names: &PlayerNames) -> String {
    if let Some(winner) = state.match_winner {
        return format!("{} wins the match!", names.get(winner));
    }
    let position = state.position();
    if state.is_tie_break {
        format!("Set {} · TIE-BREAK", position.set)
    } else {
        format!("Set {} · Game {}", position.set, position.game)
    }
}

fn annotation_text(annotation: &AnnotationView) -> String {
    match annotation.point_type {
        None if annotation.serve.is_none() => "Next point: plain".to_string(),
        None => format!(
            "Next point: {} serve, pick a point type",
            annotation.serve.map(|s| s.as_str()).unwrap_or("-")
        ),
        Some(point_type) => format!(
            "Next point: {} serve, {}",
            annotation.serve.map(|s| s.as_str()).unwrap_or("auto"),
            point_type.as_str().replace('_', " ")
        ),
    }
}

fn short_name(name: &str) -> String {
    name.chars().take(STAT_VALUE_W as usize - 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reports_set_and_game() {
        let state = MatchState::new();
        assert_eq!(status_text(&state, &PlayerNames::default()), "Set 1 · Game 1");
    }

    #[test]
    fn annotation_text_variants() {
        assert_eq!(annotation_text(&AnnotationView::default()), "Next point: plain");
        let staged = AnnotationView {
            serve: Some(ServeResult::Second),
            point_type: Some(PointType::UnforcedError),
        };
        assert_eq!(
            annotation_text(&staged),
            "Next point: second serve, unforced error"
        );
    }

    #[test]
    fn set_columns_cover_longest_match() {
        let mut config = MatchConfig::default();
        assert_eq!(max_sets(&config), 3);
        config.sets_to_win = 3;
        assert_eq!(max_sets(&config), 5);
        config.sets_to_win = 1;
        assert_eq!(max_sets(&config), 1);
    }

    #[test]
    fn stat_rows_read_counters() {
        let stats = PlayerStatistics {
            first_serves_in: 3,
            first_serves_total: 4,
            break_points_won: 1,
            break_points_total: 3,
            ..Default::default()
        };
        let first = STAT_ROWS.iter().find(|r| r.label == "1st serve in").unwrap();
        assert_eq!((first.value)(&stats), "75%");
        let bp = STAT_ROWS.iter().find(|r| r.label == "Break points won").unwrap();
        assert_eq!((bp.value)(&stats), "1/3");
    }

    #[test]
    fn set_columns_fit_the_viewport() {
        let names = PlayerNames::default();
        let config = MatchConfig {
            sets_to_win: 20000,
            ..MatchConfig::default()
        };
        let layout = Layout::new(&config, &names, 1, Viewport::new(80, 24));
        assert_eq!(layout.set_cols, 13);
        assert_eq!(layout.first_set, 0);
        assert!(layout.x + layout.frame_w <= 80);

        let narrow = Layout::new(&config, &names, 1, Viewport::new(10, 5));
        assert_eq!(narrow.set_cols, 1);
    }

    #[test]
    fn set_window_slides_to_set_in_play() {
        let config = MatchConfig {
            sets_to_win: 20,
            ..MatchConfig::default()
        };
        let layout = Layout::new(&config, &PlayerNames::default(), 20, Viewport::new(80, 24));
        assert_eq!(layout.first_set, 7);
    }
}
