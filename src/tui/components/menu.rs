use crate::core::config::ResolvedConfig;
use crate::core::state::ThemeId;
use crate::tui::components::{ListLine, draw_list};
use crate::tui::dashboard::DashboardError;
use crate::tui::layout::panel_area;
use crate::tui::panel::Panel;
use crate::tui::registry::MenuEntry;
use crate::tui::surface::TerminalSurface;

const TITLE: &str = "MENU:";

/// Lists the registered panels as `icon label (key)`.
///
/// Holds a snapshot of the registry taken when the menu was registered.
pub struct MenuPanel {
    entries: Vec<MenuEntry>,
}

impl MenuPanel {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }
}

impl Panel for MenuPanel {
    fn draw(
        &self,
        surface: &mut dyn TerminalSurface,
        _config: &ResolvedConfig,
        _theme: ThemeId,
    ) -> Result<(), DashboardError> {
        let (width, height) = surface.size()?;
        let lines: Vec<ListLine<'_>> = self
            .entries
            .iter()
            .map(|entry| ListLine {
                icon: &entry.icon,
                label: format!("{} ({})", entry.label, entry.key),
                link: None,
            })
            .collect();
        draw_list(surface, panel_area(width, height), TITLE, None, &lines)?;
        Ok(())
    }
}
