//! Color themes for the scoreboard.

use crate::fb::{CellStyle, Rgb};
use crate::types::DEFAULT_THEME;

/// A two-color theme: the scoreboard panel is drawn on `primary`, accents
/// (frame, highlights) use `secondary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub text: Rgb,
}

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);

pub const THEMES: [Theme; 5] = [
    Theme {
        name: "default",
        primary: Rgb::new(0x66, 0x7e, 0xea),
        secondary: Rgb::new(0x76, 0x4b, 0xa2),
        text: WHITE,
    },
    Theme {
        name: "sunset",
        primary: Rgb::new(0xff, 0x7e, 0x5f),
        secondary: Rgb::new(0xfe, 0xb4, 0x7b),
        text: WHITE,
    },
    Theme {
        name: "forest",
        primary: Rgb::new(0x11, 0x99, 0x8e),
        secondary: Rgb::new(0x38, 0xef, 0x7d),
        text: WHITE,
    },
    Theme {
        name: "royal",
        primary: Rgb::new(0x66, 0x7e, 0xea),
        secondary: Rgb::new(0x76, 0x4b, 0xa2),
        text: WHITE,
    },
    Theme {
        name: "dark",
        primary: Rgb::new(0x2c, 0x3e, 0x50),
        secondary: Rgb::new(0x34, 0x49, 0x5e),
        text: WHITE,
    },
];

impl Default for Theme {
    fn default() -> Self {
        THEMES[0]
    }
}

impl Theme {
    /// Look up a theme by name; unknown names get the default theme.
    pub fn by_name(name: &str) -> Self {
        let name = name.trim();
        THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .or_else(|| THEMES.iter().find(|t| t.name == DEFAULT_THEME))
            .copied()
            .unwrap_or_default()
    }

    pub fn panel(&self) -> CellStyle {
        CellStyle::plain(self.text, self.primary)
    }

    pub fn header(&self) -> CellStyle {
        CellStyle::plain(self.text, self.secondary).bold()
    }

    pub fn frame(&self) -> CellStyle {
        CellStyle::plain(self.secondary, BLACK)
    }

    /// Live point score and server marker.
    pub fn highlight(&self) -> CellStyle {
        CellStyle::plain(self.text, self.primary).bold()
    }

    pub fn muted(&self) -> CellStyle {
        CellStyle::plain(self.text, self.primary).dim()
    }

    /// Text outside the scoreboard panel.
    pub fn body(&self) -> CellStyle {
        CellStyle::plain(Rgb::new(220, 220, 220), BLACK)
    }

    pub fn label(&self) -> CellStyle {
        CellStyle::plain(self.secondary, BLACK).bold()
    }
}
