//! # Dashboard State
//!
//! Everything the controller needs to decide what is on screen.
//!
//! ```text
//! DashboardState
//! ├── theme: ThemeId                        // current color theme
//! ├── panel: PanelKey                       // currently selected panel
//! └── last_drawn: Option<(ThemeId, PanelKey)> // None until the first frame lands
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// Color theme identifier. The actual colors live in the TUI adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Light,
    #[default]
    Dark,
}

impl ThemeId {
    /// Parses a theme name as used in config and env vars.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeId::Light),
            "dark" => Some(ThemeId::Dark),
            _ => None,
        }
    }
}

// Config files accept any casing, the same as `FTERM_THEME`
impl<'de> Deserialize<'de> for ThemeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ThemeId::from_name(&name)
            .ok_or_else(|| de::Error::unknown_variant(&name, &["light", "dark"]))
    }
}

/// Single-character key selecting a registered panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelKey(pub char);

impl PanelKey {
    /// The menu panel, selected at startup.
    pub const MENU: PanelKey = PanelKey('m');

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub theme: ThemeId,
    pub panel: PanelKey,
    last_drawn: Option<(ThemeId, PanelKey)>,
}

impl DashboardState {
    pub fn new(theme: ThemeId, panel: PanelKey) -> Self {
        Self {
            theme,
            panel,
            last_drawn: None,
        }
    }

    /// True on the first frame, or when `(theme, panel)` differs from what was last drawn.
    pub fn needs_redraw(&self) -> bool {
        self.last_drawn != Some((self.theme, self.panel))
    }

    /// Records the current `(theme, panel)` as on screen. Call only after a successful redraw.
    pub fn mark_drawn(&mut self) {
        self.last_drawn = Some((self.theme, self.panel));
    }

    pub fn has_drawn_once(&self) -> bool {
        self.last_drawn.is_some()
    }

    /// Forgets what is on screen, so the next tick repaints. Used when a
    /// fresh surface is entered, since it starts blank.
    pub fn invalidate(&mut self) {
        self.last_drawn = None;
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(ThemeId::default(), PanelKey::MENU)
    }
}
