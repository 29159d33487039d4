//! # Panels
//!
//! Everything the dashboard draws:
//!
//! ```text
//! components/
//! ├── mod.rs            (this file, shared list drawing)
//! ├── banner.rs         (strawberry art and site links, always drawn)
//! ├── clock_link.rs     (time-logging link, top right, always drawn)
//! ├── menu.rs           (list of registered panels)
//! └── content_panel.rs  (provider-backed list: members, blogs, videos)
//! ```
//!
//! Panels receive the surface, config and theme as parameters and keep no
//! state between draws.

mod banner;
mod clock_link;
mod content_panel;
mod menu;

pub use banner::Banner;
pub use clock_link::ClockLink;
pub use content_panel::ContentPanel;
pub use menu::MenuPanel;

use log::debug;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::tui::layout::{PANEL_ITEMS_OFFSET, truncate_to_width};
use crate::tui::surface::TerminalSurface;

/// One line of a side-panel list.
pub(crate) struct ListLine<'a> {
    pub icon: &'a str,
    pub label: String,
    pub link: Option<&'a str>,
}

/// Draws `title` (linked when `title_url` is given) at the top of `area` and the lines
/// below it. Labels are cut to the area width; lines past the bottom edge
/// are dropped.
pub(crate) fn draw_list(
    surface: &mut dyn TerminalSurface,
    area: Rect,
    title: &str,
    title_url: Option<&str>,
    lines: &[ListLine<'_>],
) -> std::io::Result<()> {
    let max = area.width as usize;
    let heading = truncate_to_width(title, max);
    let heading = match title_url {
        Some(url) => surface.hyperlink(url, &heading),
        None => heading,
    };
    surface.print_at(area.x, area.y, &heading)?;

    let first_row = area.y.saturating_add(PANEL_ITEMS_OFFSET);
    let visible = area.bottom().saturating_sub(first_row) as usize;
    if lines.len() > visible {
        debug!(
            "Panel '{}' shows {} of {} lines",
            title,
            visible,
            lines.len()
        );
    }

    for (row, line) in (first_row..).zip(lines.iter().take(visible)) {
        let room = max.saturating_sub(line.icon.width() + 1);
        let label = truncate_to_width(&line.label, room);
        let label = match line.link {
            Some(url) => surface.hyperlink(url, &label),
            None => label,
        };
        surface.print_at(area.x, row, &format!("{} {}", line.icon, label))?;
    }
    Ok(())
}
