//! # Actions
//!
//! Every key the dashboard reads becomes an `Action`.
//! `l` pressed? That's `Action::SetTheme(ThemeId::Light)`.
//! Nothing pressed within the tick? That's `Action::Idle`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the loop should perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  Effect (Redraw | Quit | None)
//! ```

use log::debug;

use crate::core::state::{DashboardState, PanelKey, ThemeId};

pub const THEME_LIGHT_KEY: char = 'l';
pub const THEME_DARK_KEY: char = 'd';
pub const QUIT_KEYS: [char; 2] = ['q', 'Q'];

/// Keys that can never be bound to a panel.
pub const RESERVED_KEYS: [char; 4] = [THEME_LIGHT_KEY, THEME_DARK_KEY, QUIT_KEYS[0], QUIT_KEYS[1]];

/// A key read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl+C. Raw mode swallows SIGINT, so it arrives as a key.
    Interrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetTheme(ThemeId),
    SelectPanel(PanelKey),
    Quit,
    Idle,
}

/// What the loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

/// Maps a key (or the absence of one) to an action.
///
/// `panels` is the set of registered panel keys; anything outside it and the
/// theme/quit bindings is ignored.
pub fn action_for_key(key: Option<Key>, panels: &[PanelKey]) -> Action {
    match key {
        None => Action::Idle,
        Some(Key::Interrupt) => Action::Quit,
        Some(Key::Char(c)) if QUIT_KEYS.contains(&c) => Action::Quit,
        Some(Key::Char(THEME_LIGHT_KEY)) => Action::SetTheme(ThemeId::Light),
        Some(Key::Char(THEME_DARK_KEY)) => Action::SetTheme(ThemeId::Dark),
        Some(Key::Char(c)) if panels.contains(&PanelKey(c)) => Action::SelectPanel(PanelKey(c)),
        Some(Key::Char(_)) => Action::Idle,
    }
}

/// Applies `action` and decides whether the tick must repaint.
pub fn update(state: &mut DashboardState, action: Action) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::SetTheme(theme) => {
            if state.theme != theme {
                debug!("Theme {:?} -> {:?}", state.theme, theme);
            }
            state.theme = theme;
        }
        Action::SelectPanel(panel) => {
            if state.panel != panel {
                debug!("Panel {} -> {}", state.panel, panel);
            }
            state.panel = panel;
        }
        Action::Idle => {}
    }

    if state.needs_redraw() {
        Effect::Redraw
    } else {
        Effect::None
    }
}
