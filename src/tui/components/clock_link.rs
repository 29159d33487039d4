use crate::core::config::ResolvedConfig;
use crate::core::state::ThemeId;
use crate::tui::dashboard::DashboardError;
use crate::tui::layout::clock_area;
use crate::tui::panel::Panel;
use crate::tui::surface::TerminalSurface;

pub const LOG_TIME_URL: &str = "https://www.google.com/search?q=logtime";
const LABEL: &str = "🕰  Log time";

/// Time-logging link pinned to the top-right corner. Re-measures the
/// terminal width on each draw, so resizes take effect on the next redraw.
#[derive(Debug, Default)]
pub struct ClockLink;

impl ClockLink {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for ClockLink {
    fn draw(
        &self,
        surface: &mut dyn TerminalSurface,
        _config: &ResolvedConfig,
        _theme: ThemeId,
    ) -> Result<(), DashboardError> {
        let area = clock_area(surface.width()?);
        let link = surface.hyperlink(LOG_TIME_URL, LABEL);
        surface.print_at(area.x, area.y, &link)?;
        Ok(())
    }
}
