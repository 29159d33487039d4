use log::debug;

use crate::content::ContentProvider;
use crate::core::config::ResolvedConfig;
use crate::core::state::ThemeId;
use crate::tui::components::{ListLine, draw_list};
use crate::tui::dashboard::DashboardError;
use crate::tui::layout::panel_area;
use crate::tui::panel::Panel;
use crate::tui::surface::TerminalSurface;

/// Side panel backed by a content provider. Fetches on every draw; the
/// controller only draws when theme or panel changed, so this never polls.
pub struct ContentPanel {
    provider: Box<dyn ContentProvider>,
    icon: String,
}

impl ContentPanel {
    pub fn new(provider: Box<dyn ContentProvider>, icon: &str) -> Self {
        Self {
            provider,
            icon: icon.to_string(),
        }
    }
}

impl Panel for ContentPanel {
    fn draw(
        &self,
        surface: &mut dyn TerminalSurface,
        config: &ResolvedConfig,
        _theme: ThemeId,
    ) -> Result<(), DashboardError> {
        let (width, height) = surface.size()?;
        let items = self
            .provider
            .fetch(config)
            .map_err(|source| DashboardError::Fetch {
                panel: self.provider.name().to_string(),
                source,
            })?;
        debug!("Provider '{}' returned {} items", self.provider.name(), items.len());

        let lines: Vec<ListLine<'_>> = items
            .iter()
            .map(|item| ListLine {
                icon: item.icon.as_deref().unwrap_or(&self.icon),
                label: item.label(),
                link: item.link.as_deref(),
            })
            .collect();
        let title_url = self.provider.title_url(config);
        draw_list(
            surface,
            panel_area(width, height),
            self.provider.title(),
            Some(title_url.as_str()),
            &lines,
        )?;
        Ok(())
    }
}
