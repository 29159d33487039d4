//! Strawberry pixel art with the site title above it and two links below.

use crossterm::style::Color;

use crate::core::config::ResolvedConfig;
use crate::core::state::ThemeId;
use crate::tui::dashboard::DashboardError;
use crate::tui::layout::{ART_HEIGHT, ART_WIDTH, BANNER_COLUMN, BANNER_ROW, PIXEL_WIDTH};
use crate::tui::panel::Panel;
use crate::tui::surface::TerminalSurface;
use crate::tui::theme::{self, ColorPair};

pub const SHOW_ME_THE_CODE_URL: &str = "https://github.com/fragaria/karmen/blob/feat/backend2/src/components/printers/webcam-stream.js#L1";

const TITLE: &str = "FRAGARIA.CZ";
const TITLE_COLUMN: u16 = 24;
const TALK_IS_CHEAP: &str = "TALK IS CHEAP";
const TALK_IS_CHEAP_COLUMN: u16 = 23;
const SHOW_ME_THE_CODE: &str = "SHOW ME THE CODE";
const SHOW_ME_THE_CODE_COLUMN: u16 = 21;

/// Rows between the title and the first art row.
const ART_OFFSET: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pixel {
    Outline,
    Stalk,
    Leaf,
    LeafLight,
    Shade,
    Flesh,
    Seed,
}

impl Pixel {
    fn color(self, theme: ThemeId) -> Color {
        match self {
            Pixel::Outline => theme::outline(theme),
            // X11 peachpuff4
            Pixel::Stalk => Color::Rgb { r: 139, g: 119, b: 101 },
            // X11 khaki4
            Pixel::Leaf => Color::Rgb { r: 139, g: 134, b: 78 },
            // X11 darkolivegreen1
            Pixel::LeafLight => Color::Rgb { r: 202, g: 255, b: 112 },
            // X11 brown
            Pixel::Shade => Color::Rgb { r: 165, g: 42, b: 42 },
            Pixel::Flesh => Color::DarkRed,
            Pixel::Seed => Color::Grey,
        }
    }
}

const O: Pixel = Pixel::Outline;
const S: Pixel = Pixel::Stalk;
const K: Pixel = Pixel::Leaf;
const L: Pixel = Pixel::LeafLight;
const B: Pixel = Pixel::Shade;
const R: Pixel = Pixel::Flesh;
const W: Pixel = Pixel::Seed;

#[rustfmt::skip]
const STRAWBERRY: [&[Pixel]; ART_HEIGHT as usize] = [
    &[O],
    &[O, S, O],
    &[O, O, S, K, L, O, O],
    &[O, S, S, L, O, L, L, K, O],
    &[O, O, O, K, L, L, O, O, O],
    &[O, B, B, R, O, K, O, R, B, B, O],
    &[O, B, R, R, R, R, O, R, R, R, B, R, O],
    &[O, B, R, W, R, R, R, R, R, W, R, R, O],
    &[O, B, R, R, R, R, W, R, R, R, R, R, O],
    &[O, B, R, R, R, R, R, R, R, R, R, B, O],
    &[O, B, R, W, R, R, R, W, R, B, O],
    &[O, B, R, R, R, R, R, R, R, B, O],
    &[O, B, R, R, W, R, R, R, O],
    &[O, B, B, R, R, R, R, B, O],
    &[O, B, B, R, R, B, O],
    &[O, B, B, B, O],
    &[O, O, O],
];

#[derive(Debug, Default)]
pub struct Banner;

impl Banner {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for Banner {
    fn draw(
        &self,
        surface: &mut dyn TerminalSurface,
        config: &ResolvedConfig,
        theme: ThemeId,
    ) -> Result<(), DashboardError> {
        let title = surface.hyperlink(&config.site_url, TITLE);
        surface.print_at(TITLE_COLUMN, BANNER_ROW, &title)?;

        let art_row = BANNER_ROW + ART_OFFSET;
        let cell = " ".repeat(PIXEL_WIDTH as usize);
        for (row, pixels) in (art_row..).zip(STRAWBERRY.iter()) {
            let indent = PIXEL_WIDTH * (ART_WIDTH - pixels.len() as u16) / 2;
            surface.move_cursor(BANNER_COLUMN + indent, row)?;
            for pixel in pixels.iter() {
                surface.set_colors(ColorPair::new(Color::Grey, pixel.color(theme)))?;
                surface.print(&cell)?;
            }
        }

        surface.set_colors(theme::resolve(theme))?;
        let below = art_row + ART_HEIGHT;
        let talk_url = format!("{}/", config.site_url.trim_end_matches('/'));
        let talk = surface.hyperlink(&talk_url, TALK_IS_CHEAP);
        surface.print_at(TALK_IS_CHEAP_COLUMN, below + 1, &talk)?;
        let code = surface.hyperlink(SHOW_ME_THE_CODE_URL, SHOW_ME_THE_CODE);
        surface.print_at(SHOW_ME_THE_CODE_COLUMN, below + 2, &code)?;
        Ok(())
    }
}
