//! Fixed screen layout.
//!
//! ```text
//! col 0        10                      49      60                 width-15
//! row 0                                                           🕰 Log time
//! row 2          FRAGARIA.CZ                   MENU: / MEMBERS: …
//! row 4        ┌ strawberry art ────────┐      item lines
//!   …          └────────────────────────┘      …
//! row 22/23        TALK IS CHEAP / SHOW ME THE CODE
//! ```
//!
//! Banner, side panel and clock regions never overlap for widths of at
//! least [`MIN_WIDTH`]. The clock sits on row 0 to stay clear of the side
//! panel title on row 2.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

pub const BANNER_COLUMN: u16 = 10;
pub const BANNER_ROW: u16 = 2;
/// Terminal cells per art pixel.
pub const PIXEL_WIDTH: u16 = 3;
/// Widest art row, in pixels.
pub const ART_WIDTH: u16 = 13;
pub const ART_HEIGHT: u16 = 17;
/// Title row, a gap, the art, a gap, two link rows.
pub const BANNER_HEIGHT: u16 = 1 + 1 + ART_HEIGHT + 1 + 2;

pub const PANEL_COLUMN: u16 = 60;
pub const PANEL_ROW: u16 = 2;
/// Items start this many rows below the panel title.
pub const PANEL_ITEMS_OFFSET: u16 = 2;

pub const CLOCK_ROW: u16 = 0;
/// Distance of the clock link from the right edge.
pub const CLOCK_OFFSET: u16 = 15;

pub fn banner_area() -> Rect {
    Rect::new(BANNER_COLUMN, BANNER_ROW, ART_WIDTH * PIXEL_WIDTH, BANNER_HEIGHT)
}

pub fn panel_area(width: u16, height: u16) -> Rect {
    Rect::new(
        PANEL_COLUMN,
        PANEL_ROW,
        width.saturating_sub(PANEL_COLUMN),
        height.saturating_sub(PANEL_ROW),
    )
}

pub fn clock_area(width: u16) -> Rect {
    Rect::new(width.saturating_sub(CLOCK_OFFSET), CLOCK_ROW, CLOCK_OFFSET, 1)
}

/// Cuts `text` to at most `max` display columns, ending with `…` when cut.
/// Control characters are dropped since they have no fixed display width.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let text: String = text.chars().filter(|c| !c.is_control()).collect();
    if text.width() <= max {
        return text;
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_disjoint_for_supported_sizes() {
        for width in MIN_WIDTH..=400 {
            for height in [MIN_HEIGHT, 40, 120] {
                let banner = banner_area();
                let panel = panel_area(width, height);
                let clock = clock_area(width);
                assert!(!banner.intersects(panel), "banner/panel at {width}x{height}");
                assert!(!banner.intersects(clock), "banner/clock at {width}x{height}");
                assert!(!panel.intersects(clock), "panel/clock at {width}x{height}");
            }
        }
    }

    #[test]
    fn test_banner_ends_left_of_panel() {
        assert!(banner_area().right() <= PANEL_COLUMN);
    }

    #[test]
    fn test_clock_is_right_aligned() {
        let clock = clock_area(120);
        assert_eq!(clock.x, 105);
        assert_eq!(clock.right(), 120);
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_drops_control_chars() {
        let cut = truncate_to_width("a\tb\tc\td\te\tf\tg\th", 6);
        assert_eq!(cut, "abcde…");
        assert!(!cut.contains('\t'));
        assert_eq!(truncate_to_width("x\ny", 10), "xy");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns wide
        let cut = truncate_to_width("日本語テキスト", 7);
        assert_eq!(cut, "日本語…");
        assert!(cut.width() <= 7);
    }
}
