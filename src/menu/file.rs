//! # Menu Files
//!
//! JSON menu definitions for the `termenu` command.
//!
//! ```json
//! {
//!   "header": "Lunch",
//!   "items": [
//!     { "kind": "item", "id": 1, "text": "Coffee", "alt": "hot" },
//!     { "kind": "separator" },
//!     { "kind": "exit", "id": 0, "text": "Exit" }
//!   ]
//! }
//! ```

use crate::menu::item::{MenuItem, MenuItems};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Id given to the exit item appended to label-only menus
pub const EXIT_ID: u32 = 0;

/// Text of the exit item appended to label-only menus
pub const EXIT_TEXT: &str = "Back";

/// One entry of a menu file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemDef {
    Item {
        id: u32,
        text: String,
        #[serde(default)]
        alt: String,
    },
    Separator,
    Exit {
        id: u32,
        text: String,
        #[serde(default)]
        alt: String,
    },
}

impl From<ItemDef> for MenuItem {
    fn from(def: ItemDef) -> Self {
        match def {
            ItemDef::Item { id, text, alt } => MenuItem::selectable(id, text).with_alt(alt),
            ItemDef::Separator => MenuItem::separator(),
            ItemDef::Exit { id, text, alt } => MenuItem::exit(id, text).with_alt(alt),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub items: Vec<ItemDef>,
}

impl MenuFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse menu file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid menu definition")
    }

    /// Build a menu from plain labels: ids `1..=n` followed by a "Back" exit
    pub fn from_labels(labels: &[String]) -> Self {
        let mut items: Vec<ItemDef> = labels
            .iter()
            .zip(1u32..)
            .map(|(label, id)| ItemDef::Item {
                id,
                text: label.clone(),
                alt: String::new(),
            })
            .collect();

        items.push(ItemDef::Separator);
        items.push(ItemDef::Exit {
            id: EXIT_ID,
            text: EXIT_TEXT.to_string(),
            alt: String::new(),
        });

        Self {
            header: None,
            items,
        }
    }

    /// Convert the definitions into a validated item collection
    pub fn into_items(self) -> Result<MenuItems> {
        MenuItems::new(self.items.into_iter().map(MenuItem::from).collect())
    }
}
