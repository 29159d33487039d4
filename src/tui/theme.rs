//! Theme colors. A `ThemeId` resolves to one foreground/background pair;
//! the banner art also swaps its outline color per theme.

use crossterm::style::Color;

use crate::core::state::ThemeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

/// Both pairs use basic ANSI palette entries, so the terminal's own scheme
/// decides the exact shade.
pub fn resolve(theme: ThemeId) -> ColorPair {
    match theme {
        ThemeId::Light => ColorPair::new(Color::Black, Color::Grey),
        ThemeId::Dark => ColorPair::new(Color::DarkGreen, Color::Black),
    }
}

/// Near-black so the art outline stays visible on a black background.
const GRAY5: Color = Color::Rgb { r: 13, g: 13, b: 13 };

/// Outline color of the banner art.
pub fn outline(theme: ThemeId) -> Color {
    match theme {
        ThemeId::Light => Color::Black,
        ThemeId::Dark => GRAY5,
    }
}
