//! # TUI Adapter
//!
//! The terminal-specific layer. Draws panels through a [`surface::TerminalSurface`]
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about crossterm and ratatui.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop never repaints on a timer. A frame is drawn
//! on the first tick and after that only when the theme or the selected
//! panel changes. Content panels fetch during their draw, so an idle
//! dashboard makes no network requests.

mod components;
pub mod dashboard;
mod event;
pub mod layout;
pub mod panel;
pub mod registry;
pub mod surface;
pub mod theme;

use log::info;

use crate::core::config::ResolvedConfig;
use crate::tui::dashboard::{Dashboard, DashboardError};
use crate::tui::surface::{CrosstermSurface, supports_hyperlinks};

pub use components::{Banner, ClockLink, ContentPanel, MenuPanel};

/// Builds the default panels and runs the dashboard on the real terminal.
pub fn run(config: ResolvedConfig) -> Result<(), DashboardError> {
    let registry = registry::default_registry()?;
    let hyperlinks = config
        .hyperlinks
        .unwrap_or_else(|| supports_hyperlinks(|name| std::env::var(name).ok()));
    info!("Hyperlinks {}", if hyperlinks { "enabled" } else { "disabled" });

    let mut surface = CrosstermSurface::new(hyperlinks);
    let mut dashboard = Dashboard::new(registry, config)?;
    dashboard.run(&mut surface)
}
