//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::collections::{BTreeMap, VecDeque};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use unicode_width::UnicodeWidthStr;

use crate::content::{ContentProvider, FetchError, Item};
use crate::core::action::Key;
use crate::core::config::ResolvedConfig;
use crate::tui::surface::TerminalSurface;
use crate::tui::theme::ColorPair;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Reset(ColorPair),
    Move(u16, u16),
    Colors(ColorPair),
    Print(String),
    Flush,
}

/// In-memory surface that records every primitive and replays scripted keys.
///
/// Once the scripted keys run out it answers `q`, so a dashboard loop under
/// test always terminates.
pub struct RecordingSurface {
    pub keys: VecDeque<Option<Key>>,
    pub ops: Vec<SurfaceOp>,
    pub raw_mode: bool,
    pub enter_count: usize,
    pub restore_count: usize,
    pub width: u16,
    pub height: u16,
    pub hyperlinks: bool,
    /// Number of key reads so far, i.e. the current tick.
    pub reads: usize,
    /// Tick number of every `reset`, i.e. of every redraw.
    pub redraw_ticks: Vec<usize>,
    /// Prints fail with `BrokenPipe` once this many have succeeded.
    pub fail_prints_after: Option<usize>,
    prints: usize,
    cursor: (u16, u16),
    /// Text printed since the last reset, keyed by (row, col).
    screen: BTreeMap<(u16, u16), String>,
}

impl RecordingSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            keys: VecDeque::new(),
            ops: Vec::new(),
            raw_mode: false,
            enter_count: 0,
            restore_count: 0,
            width,
            height,
            hyperlinks: false,
            reads: 0,
            redraw_ticks: Vec::new(),
            fail_prints_after: None,
            prints: 0,
            cursor: (0, 0),
            screen: BTreeMap::new(),
        }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Option<Key>>) -> Self {
        self.keys = keys.into_iter().collect();
        self
    }

    /// Scripts one character key per tick; `' '` stands for "no key".
    pub fn with_chars(self, chars: &str) -> Self {
        self.with_keys(
            chars
                .chars()
                .map(|c| if c == ' ' { None } else { Some(Key::Char(c)) }),
        )
    }

    /// Text printed on `row` since the last reset, joined in column order.
    pub fn row_text(&self, row: u16) -> String {
        self.screen
            .range((row, 0)..=(row, u16::MAX))
            .map(|(_, text)| text.as_str())
            .collect()
    }

    /// Rows with text starting exactly at `col`, in row order.
    pub fn texts_at_column(&self, col: u16) -> Vec<(u16, String)> {
        self.screen
            .iter()
            .filter(|((_, c), _)| *c == col)
            .map(|((row, _), text)| (*row, text.clone()))
            .collect()
    }

    /// Leftmost and rightmost columns written on any row, if anything was printed.
    pub fn written_columns(&self) -> Vec<(u16, u16, u16)> {
        self.screen
            .iter()
            .map(|((row, col), text)| (*row, *col, col + text.width() as u16))
            .collect()
    }
}

impl TerminalSurface for RecordingSurface {
    fn enter(&mut self) -> io::Result<()> {
        self.raw_mode = true;
        self.enter_count += 1;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        self.raw_mode = false;
        self.restore_count += 1;
        Ok(())
    }

    fn reset(&mut self, colors: ColorPair) -> io::Result<()> {
        self.redraw_ticks.push(self.reads);
        self.screen.clear();
        self.cursor = (0, 0);
        self.ops.push(SurfaceOp::Reset(colors));
        Ok(())
    }

    fn move_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.cursor = (col, row);
        self.ops.push(SurfaceOp::Move(col, row));
        Ok(())
    }

    fn set_colors(&mut self, colors: ColorPair) -> io::Result<()> {
        self.ops.push(SurfaceOp::Colors(colors));
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        if self.fail_prints_after.is_some_and(|n| self.prints >= n) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "surface closed"));
        }
        self.prints += 1;
        let (col, row) = self.cursor;
        if !text.trim().is_empty() {
            self.screen.insert((row, col), text.to_string());
        }
        self.cursor = (col + text.width() as u16, row);
        self.ops.push(SurfaceOp::Print(text.to_string()));
        Ok(())
    }

    fn hyperlink(&self, url: &str, label: &str) -> String {
        if self.hyperlinks {
            format!("[{label}]({url})")
        } else {
            label.to_string()
        }
    }

    fn size(&mut self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn read_key(&mut self, _timeout: Duration) -> io::Result<Option<Key>> {
        self.reads += 1;
        Ok(self.keys.pop_front().unwrap_or(Some(Key::Char('q'))))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::Flush);
        Ok(())
    }
}

/// Provider returning a fixed list of items. `fetches` is shared so tests
/// can still read it after the provider is boxed into a panel.
pub struct StubProvider {
    pub items: Vec<Item>,
    pub fetches: Rc<Cell<usize>>,
}

impl StubProvider {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            fetches: Rc::new(Cell::new(0)),
        }
    }
}

impl ContentProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn title(&self) -> &str {
        "STUB:"
    }

    fn title_url(&self, _config: &ResolvedConfig) -> String {
        "https://stub.test/".to_string()
    }

    fn fetch(&self, _config: &ResolvedConfig) -> Result<Vec<Item>, FetchError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.items.clone())
    }
}

/// Provider whose every fetch fails with a network error.
pub struct FailingProvider;

impl ContentProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn title(&self) -> &str {
        "FAILING:"
    }

    fn title_url(&self, _config: &ResolvedConfig) -> String {
        "https://failing.test/".to_string()
    }

    fn fetch(&self, _config: &ResolvedConfig) -> Result<Vec<Item>, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}
