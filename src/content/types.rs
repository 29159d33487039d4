use serde::{Deserialize, Serialize};

/// One display line produced by a content provider.
///
/// Items are built fresh on every fetch and live only for the draw call that
/// requested them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    pub name: String,
    pub date: Option<String>,
    pub link: Option<String>,
    /// Overrides the panel icon for this line.
    pub icon: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// `name (date)`, or just `name` when there is no date.
    pub fn label(&self) -> String {
        match &self.date {
            Some(date) => format!("{} ({})", self.name, date),
            None => self.name.clone(),
        }
    }
}
