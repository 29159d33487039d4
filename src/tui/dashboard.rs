//! # Dashboard Controller
//!
//! Owns the panel registry and the dashboard state, and drives the loop:
//!
//! ```text
//! read_key(poll_interval) → action_for_key → update → Effect
//!                                                     ├── Redraw → reset, banner, panel, clock, flush
//!                                                     ├── Quit   → return
//!                                                     └── None   → next tick
//! ```
//!
//! The surface is held through a [`SurfaceGuard`] for the whole loop, so the
//! terminal is restored whether the loop quits, a fetch fails, or a write
//! errors out.

use std::fmt;
use std::io;

use log::info;

use crate::content::FetchError;
use crate::core::action::{Effect, action_for_key, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{DashboardState, PanelKey};
use crate::tui::components::{Banner, ClockLink};
use crate::tui::panel::Panel;
use crate::tui::registry::{PanelRegistry, RegistryError};
use crate::tui::surface::{SurfaceGuard, TerminalSurface};
use crate::tui::theme;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum DashboardError {
    Registry(RegistryError),
    /// A content provider failed while its panel was drawing.
    Fetch { panel: String, source: FetchError },
    /// Terminal I/O failed (entering raw mode, drawing, reading keys).
    Render(io::Error),
}

impl DashboardError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DashboardError::Render(_) => 1,
            DashboardError::Fetch { .. } => 2,
            DashboardError::Registry(_) => 3,
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Registry(e) => write!(f, "Panel registry error: {}", e),
            DashboardError::Fetch { panel, source } => {
                write!(f, "Failed to load {} panel: {}", panel, source)
            }
            DashboardError::Render(e) => write!(f, "Terminal error: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Registry(e) => Some(e),
            DashboardError::Fetch { source, .. } => Some(source),
            DashboardError::Render(e) => Some(e),
        }
    }
}

impl From<io::Error> for DashboardError {
    fn from(e: io::Error) -> Self {
        DashboardError::Render(e)
    }
}

impl From<RegistryError> for DashboardError {
    fn from(e: RegistryError) -> Self {
        DashboardError::Registry(e)
    }
}

// ============================================================================
// Controller
// ============================================================================

pub struct Dashboard {
    registry: PanelRegistry,
    banner: Banner,
    clock: ClockLink,
    config: ResolvedConfig,
    state: DashboardState,
}

impl Dashboard {
    /// Starts on the menu in the configured theme. The registry must
    /// contain the menu key.
    pub fn new(registry: PanelRegistry, config: ResolvedConfig) -> Result<Self, DashboardError> {
        if registry.get(PanelKey::MENU).is_none() {
            return Err(RegistryError::Unregistered(PanelKey::MENU.as_char()).into());
        }
        let state = DashboardState::new(config.theme, PanelKey::MENU);
        Ok(Self {
            registry,
            banner: Banner::new(),
            clock: ClockLink::new(),
            config,
            state,
        })
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Runs until a quit key. The surface is restored on every exit path.
    pub fn run<S: TerminalSurface>(&mut self, surface: &mut S) -> Result<(), DashboardError> {
        let mut surface = SurfaceGuard::acquire(surface)?;
        // A newly entered surface is blank, whatever an earlier run drew
        self.state.invalidate();
        let keys = self.registry.keys();
        info!(
            "Dashboard running ({} panels, poll every {:?})",
            keys.len(),
            self.config.poll_interval
        );

        loop {
            let key = surface.read_key(self.config.poll_interval)?;
            let action = action_for_key(key, &keys);
            match update(&mut self.state, action) {
                Effect::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Effect::Redraw => self.redraw(&mut *surface)?,
                Effect::None => {}
            }
        }
    }

    /// Full-frame repaint in fixed order: banner, selected panel, clock.
    fn redraw(&mut self, surface: &mut dyn TerminalSurface) -> Result<(), DashboardError> {
        let theme = self.state.theme;
        let panel = self.state.panel;
        let entry = self
            .registry
            .get(panel)
            .ok_or(RegistryError::Unregistered(panel.as_char()))?;
        info!(
            "Redrawing '{}' panel in {:?} theme (first frame: {})",
            entry.entry.label,
            theme,
            !self.state.has_drawn_once()
        );

        surface.reset(theme::resolve(theme))?;
        self.banner.draw(surface, &self.config, theme)?;
        entry.panel.draw(surface, &self.config, theme)?;
        self.clock.draw(surface, &self.config, theme)?;
        surface.flush()?;

        self.state.mark_drawn();
        Ok(())
    }
}
