//! # Panel Registry
//!
//! Ordered map from `PanelKey` to a boxed [`Panel`], plus the icon and label
//! the menu shows for it. Insertion order is menu order.

use std::fmt;

use crate::content::{BlogsProvider, MembersProvider, VideosProvider};
use crate::core::action::RESERVED_KEYS;
use crate::core::state::PanelKey;
use crate::tui::components::{ContentPanel, MenuPanel};
use crate::tui::panel::Panel;

pub const MENU_ICON: &str = "🍓";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Key is bound to a theme or quit action.
    Reserved(char),
    Duplicate(char),
    Unregistered(char),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Reserved(c) => write!(f, "key '{c}' is reserved"),
            RegistryError::Duplicate(c) => write!(f, "key '{c}' is already registered"),
            RegistryError::Unregistered(c) => write!(f, "no panel registered for key '{c}'"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// What the menu shows for one registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: PanelKey,
    pub icon: String,
    pub label: String,
}

pub struct PanelEntry {
    pub entry: MenuEntry,
    pub panel: Box<dyn Panel>,
}

#[derive(Default)]
pub struct PanelRegistry {
    entries: Vec<PanelEntry>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        key: PanelKey,
        icon: &str,
        label: &str,
        panel: Box<dyn Panel>,
    ) -> Result<(), RegistryError> {
        if RESERVED_KEYS.contains(&key.as_char()) {
            return Err(RegistryError::Reserved(key.as_char()));
        }
        if self.get(key).is_some() {
            return Err(RegistryError::Duplicate(key.as_char()));
        }
        self.entries.push(PanelEntry {
            entry: MenuEntry {
                key,
                icon: icon.to_string(),
                label: label.to_string(),
            },
            panel,
        });
        Ok(())
    }

    pub fn get(&self, key: PanelKey) -> Option<&PanelEntry> {
        self.entries.iter().find(|e| e.entry.key == key)
    }

    pub fn keys(&self) -> Vec<PanelKey> {
        self.entries.iter().map(|e| e.entry.key).collect()
    }

    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.entries.iter().map(|e| e.entry.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Members (`e`), Blogs (`b`), Videos (`v`), then the menu (`m`) listing all four.
pub fn default_registry() -> Result<PanelRegistry, RegistryError> {
    let mut registry = PanelRegistry::new();
    registry.register(
        PanelKey('e'),
        "👨‍💻",
        "Members",
        Box::new(ContentPanel::new(Box::new(MembersProvider::new()), "👨‍💻")),
    )?;
    registry.register(
        PanelKey('b'),
        "📝",
        "Blogs",
        Box::new(ContentPanel::new(Box::new(BlogsProvider::new()), "📝")),
    )?;
    registry.register(
        PanelKey('v'),
        "📺",
        "Videos",
        Box::new(ContentPanel::new(Box::new(VideosProvider::new()), "📺")),
    )?;
    register_menu(&mut registry)?;
    Ok(registry)
}

/// Registers the menu last so it can list every entry, itself included.
pub fn register_menu(registry: &mut PanelRegistry) -> Result<(), RegistryError> {
    let mut entries = registry.menu_entries();
    entries.push(MenuEntry {
        key: PanelKey::MENU,
        icon: MENU_ICON.to_string(),
        label: "Menu".to_string(),
    });
    registry.register(
        PanelKey::MENU,
        MENU_ICON,
        "Menu",
        Box::new(MenuPanel::new(entries)),
    )
}
