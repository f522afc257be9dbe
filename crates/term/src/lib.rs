//! Terminal scoreboard module.
//!
//! A small rendering layer for the scorer: the match state is drawn into a
//! plain framebuffer, which is then flushed to the terminal with crossterm.
//! Nothing here changes the match.
//!
//! - [`score_view`]: scoreboard panel, statistics panel, staged annotation
//! - [`theme`]: named color themes
//! - [`fb`]: styled character framebuffer
//! - [`renderer`]: raw-mode terminal output with diffed redraws

pub mod fb;
pub mod renderer;
pub mod score_view;
pub mod theme;

pub use tennis_scorer_core as core;
pub use tennis_scorer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use score_view::{AnnotationView, ScoreboardView, Viewport};
pub use theme::Theme;
