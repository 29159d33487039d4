//! # Terminal Surface
//!
//! The drawing primitives panels use: cursor moves, colors, text and
//! clickable links. `CrosstermSurface` is the real terminal; tests use a
//! recording surface from `test_support`.
//!
//! Raw mode and the hidden cursor are scoped: [`SurfaceGuard`] enters them
//! on creation and restores the terminal when dropped, on every exit path.

use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetColors};
use crossterm::terminal::{Clear, ClearType};
use log::{debug, info, warn};
use ratatui::DefaultTerminal;
use ratatui::backend::CrosstermBackend;

use crate::core::action::Key;
use crate::tui::event::poll_key_timeout;
use crate::tui::theme::ColorPair;

pub trait TerminalSurface {
    /// Enters raw input mode and hides the cursor.
    fn enter(&mut self) -> io::Result<()>;

    /// Resets colors, clears the screen, shows the cursor and leaves raw mode.
    fn restore(&mut self) -> io::Result<()>;

    /// Cursor home, apply `colors`, clear the screen.
    fn reset(&mut self, colors: ColorPair) -> io::Result<()>;

    fn move_cursor(&mut self, col: u16, row: u16) -> io::Result<()>;

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()>;

    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Wraps `label` in a clickable link, or returns it unchanged when the
    /// terminal has no link support.
    fn hyperlink(&self, url: &str, label: &str) -> String;

    /// Current `(width, height)`, measured on every call.
    fn size(&mut self) -> io::Result<(u16, u16)>;

    fn width(&mut self) -> io::Result<u16> {
        Ok(self.size()?.0)
    }

    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;

    fn flush(&mut self) -> io::Result<()>;

    fn print_at(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        self.move_cursor(col, row)?;
        self.print(text)
    }
}

// ============================================================================
// Hyperlinks
// ============================================================================

/// OSC 8 hyperlink: `ESC ] 8 ; ; url ST label ESC ] 8 ; ; ST`.
pub fn osc8(url: &str, label: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{label}\x1b]8;;\x1b\\")
}

const LINK_TERM_PROGRAMS: [&str; 5] = ["iTerm.app", "WezTerm", "vscode", "Hyper", "ghostty"];
const LINK_TERMS: [&str; 4] = ["kitty", "wezterm", "foot", "alacritty"];

/// Guesses OSC 8 support from the environment. `FTERM_HYPERLINKS` is handled
/// by config resolution before this is consulted.
pub fn supports_hyperlinks(env: impl Fn(&str) -> Option<String>) -> bool {
    if let Some(program) = env("TERM_PROGRAM")
        && LINK_TERM_PROGRAMS.contains(&program.as_str())
    {
        return true;
    }
    if env("WT_SESSION").is_some() || env("KITTY_WINDOW_ID").is_some() {
        return true;
    }
    if let Some(vte) = env("VTE_VERSION")
        && vte.trim().parse::<u32>().is_ok_and(|v| v >= 5000)
    {
        return true;
    }
    env("TERM").is_some_and(|term| LINK_TERMS.iter().any(|t| term.contains(t)))
}

// ============================================================================
// Crossterm surface
// ============================================================================

/// The real terminal. Holds a ratatui terminal while entered so ratatui's
/// panic hook restores the screen even if drawing panics.
pub struct CrosstermSurface {
    terminal: Option<DefaultTerminal>,
    hyperlinks: bool,
}

impl CrosstermSurface {
    pub fn new(hyperlinks: bool) -> Self {
        Self {
            terminal: None,
            hyperlinks,
        }
    }

    fn backend(&mut self) -> io::Result<&mut CrosstermBackend<Stdout>> {
        self.terminal
            .as_mut()
            .map(|t| t.backend_mut())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "terminal not entered"))
    }
}

/// Blanks the screen before leaving it. Nothing is written while a panic
/// unwinds, so the message printed by the panic hook stays readable.
fn queue_exit_screen(out: &mut impl Write, panicking: bool) -> io::Result<()> {
    if panicking {
        return Ok(());
    }
    queue!(out, ResetColor, Clear(ClearType::All), MoveTo(0, 0))
}

impl TerminalSurface for CrosstermSurface {
    fn enter(&mut self) -> io::Result<()> {
        let mut terminal = ratatui::try_init()?;
        if let Err(e) = terminal.hide_cursor() {
            let _ = ratatui::try_restore();
            return Err(e);
        }
        self.terminal = Some(terminal);
        info!("Terminal entered raw mode (hyperlinks: {})", self.hyperlinks);
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        let mut result = Ok(());
        if let Some(mut terminal) = self.terminal.take() {
            result = queue_exit_screen(terminal.backend_mut(), thread::panicking())
                .and_then(|_| terminal.show_cursor())
                .and_then(|_| terminal.backend_mut().flush());
        }
        let restored = ratatui::try_restore();
        info!("Terminal restored");
        result.and(restored)
    }

    fn reset(&mut self, colors: ColorPair) -> io::Result<()> {
        queue!(
            self.backend()?,
            MoveTo(0, 0),
            SetColors(colors.into()),
            Clear(ClearType::All)
        )
    }

    fn move_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        queue!(self.backend()?, MoveTo(col, row))
    }

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()> {
        queue!(self.backend()?, SetColors(colors.into()))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        queue!(self.backend()?, Print(text))
    }

    fn hyperlink(&self, url: &str, label: &str) -> String {
        if self.hyperlinks {
            osc8(url, label)
        } else {
            label.to_string()
        }
    }

    fn size(&mut self) -> io::Result<(u16, u16)> {
        let size = match self.terminal.as_ref() {
            Some(terminal) => terminal.size()?,
            None => {
                let (width, height) = crossterm::terminal::size()?;
                ratatui::layout::Size::new(width, height)
            }
        };
        Ok((size.width, size.height))
    }

    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        poll_key_timeout(timeout)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.backend()?.flush()
    }
}

// ============================================================================
// Scope guard
// ============================================================================

/// Holds a surface in raw mode; restores it exactly once on drop.
pub struct SurfaceGuard<'a, S: TerminalSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: TerminalSurface + ?Sized> SurfaceGuard<'a, S> {
    pub fn acquire(surface: &'a mut S) -> io::Result<Self> {
        surface.enter()?;
        debug!("Surface guard acquired");
        Ok(Self { surface })
    }
}

impl<S: TerminalSurface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: TerminalSurface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: TerminalSurface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        if let Err(e) = self.surface.restore() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

impl From<ColorPair> for crossterm::style::Colors {
    fn from(pair: ColorPair) -> Self {
        crossterm::style::Colors::new(pair.fg, pair.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingSurface;

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_osc8_format() {
        assert_eq!(
            osc8("https://example.com", "Example"),
            "\x1b]8;;https://example.com\x1b\\Example\x1b]8;;\x1b\\"
        );
    }

    #[test]
    fn test_supports_hyperlinks_detection() {
        assert!(supports_hyperlinks(env_of(&[("TERM_PROGRAM", "WezTerm")])));
        assert!(supports_hyperlinks(env_of(&[("WT_SESSION", "abc")])));
        assert!(supports_hyperlinks(env_of(&[("VTE_VERSION", "6003")])));
        assert!(supports_hyperlinks(env_of(&[("TERM", "xterm-kitty")])));
        assert!(!supports_hyperlinks(env_of(&[("VTE_VERSION", "4800")])));
        assert!(!supports_hyperlinks(env_of(&[("TERM", "xterm-256color")])));
        assert!(!supports_hyperlinks(env_of(&[])));
    }

    #[test]
    fn test_exit_screen_cleared_on_normal_exit() {
        let mut out = Vec::new();
        queue_exit_screen(&mut out, false).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[2J"));
        assert!(written.ends_with("\x1b[1;1H"));
    }

    #[test]
    fn test_exit_screen_untouched_while_panicking() {
        let mut out = Vec::new();
        queue_exit_screen(&mut out, true).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_crossterm_surface_link_fallback() {
        assert_eq!(CrosstermSurface::new(false).hyperlink("https://x.test", "X"), "X");
        assert_eq!(
            CrosstermSurface::new(true).hyperlink("https://x.test", "X"),
            osc8("https://x.test", "X")
        );
    }

    #[test]
    fn test_unentered_surface_refuses_to_draw() {
        let mut surface = CrosstermSurface::new(false);
        let err = surface.print("x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
    }

    #[test]
    fn test_guard_restores_once_on_drop() {
        let mut surface = RecordingSurface::new(80, 24);
        {
            let mut guard = SurfaceGuard::acquire(&mut surface).unwrap();
            assert!(guard.raw_mode);
            guard.print("hello").unwrap();
        }
        assert!(!surface.raw_mode);
        assert_eq!(surface.enter_count, 1);
        assert_eq!(surface.restore_count, 1);
    }
}
