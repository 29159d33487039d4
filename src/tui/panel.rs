use crate::core::config::ResolvedConfig;
use crate::core::state::ThemeId;
use crate::tui::dashboard::DashboardError;
use crate::tui::surface::TerminalSurface;

/// A fixed region of the dashboard that knows how to draw itself.
///
/// Panels own their screen region and their cursor rows; they never read
/// or write controller state. Everything a draw needs comes in as
/// parameters:
///
/// - `surface`: where to draw
/// - `config`: handed through to content providers
/// - `theme`: for panels that pick colors themselves
///
/// An empty panel (no items) is not an error; it draws its bare title.
pub trait Panel {
    fn draw(
        &self,
        surface: &mut dyn TerminalSurface,
        config: &ResolvedConfig,
        theme: ThemeId,
    ) -> Result<(), DashboardError>;
}
