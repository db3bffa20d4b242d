//! # Menu Items
//!
//! The item model shown by the navigator.
//!
//! ## Item Kinds
//!
//! | Kind | Selectable | Rendered as |
//! |------|------------|-------------|
//! | [`ItemKind::Selectable`] | yes | text + right-aligned alt text |
//! | [`ItemKind::Separator`] | no | horizontal rule |
//! | [`ItemKind::Exit`] | yes (ends the menu) | text + right-aligned alt text |
//!
//! Control items are a distinct kind rather than reserved id values, so a
//! domain id can never be mistaken for "separator" or "exit".
//!
//! ## Formatting
//!
//! Every item in a collection is formatted against one [`ItemFormat`]. The alt
//! text is capped at `alt_max_width` columns (ending in `…` when cut) and the
//! main text is truncated or right-padded to fill the rest of the line.

use crate::menu::utils::{fit_width, truncate_with_ellipsis};
use anyhow::{bail, Result};
use std::collections::HashSet;
use unicode_width::UnicodeWidthStr;

/// Default content width of a formatted item, in columns
pub const DEFAULT_ITEM_WIDTH: usize = 40;

/// Default maximum width of an item's alt text, in columns
pub const DEFAULT_ALT_MAX_WIDTH: usize = 12;

/// Character used to draw separators and frame rules
pub const RULE_CHAR: char = '─';

/// Width constraints shared by every item in a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemFormat {
    /// Total columns occupied by a formatted item
    pub width: usize,
    /// Alt text longer than this is truncated with an ellipsis
    pub alt_max_width: usize,
}

impl Default for ItemFormat {
    fn default() -> Self {
        Self {
            width: DEFAULT_ITEM_WIDTH,
            alt_max_width: DEFAULT_ALT_MAX_WIDTH,
        }
    }
}

/// What an item does when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A regular entry carrying a caller-defined id
    Selectable(u32),
    /// A non-interactive divider
    Separator,
    /// The back/cancel entry, conventionally id 0
    Exit(u32),
}

/// A single line of a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    kind: ItemKind,
    text: String,
    alt: String,
}

impl MenuItem {
    pub fn selectable(id: u32, text: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Selectable(id),
            text: text.into(),
            alt: String::new(),
        }
    }

    pub fn separator() -> Self {
        Self {
            kind: ItemKind::Separator,
            text: String::new(),
            alt: String::new(),
        }
    }

    pub fn exit(id: u32, text: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Exit(id),
            text: text.into(),
            alt: String::new(),
        }
    }

    /// Builder-style setter for the right-aligned alt text
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// The item's id, or `None` for separators
    pub fn id(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Selectable(id) | ItemKind::Exit(id) => Some(id),
            ItemKind::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.kind == ItemKind::Separator
    }

    pub fn is_exit(&self) -> bool {
        matches!(self.kind, ItemKind::Exit(_))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_alt(&mut self, alt: impl Into<String>) {
        self.alt = alt.into();
    }

    /// Combine text and alt text into one line of exactly `format.width` columns
    pub fn format_line(&self, format: &ItemFormat) -> String {
        if self.is_separator() {
            return std::iter::repeat(RULE_CHAR).take(format.width).collect();
        }

        if self.alt.is_empty() {
            return fit_width(&self.text, format.width);
        }

        let alt = truncate_with_ellipsis(&self.alt, format.alt_max_width.min(format.width));
        let alt_width = alt.width();
        if alt_width >= format.width {
            return fit_width(&alt, format.width);
        }

        // One column of spacing between the main text and the alt text
        let main_width = format.width - alt_width - 1;
        format!("{} {}", fit_width(&self.text, main_width), alt)
    }
}

/// An ordered collection of menu items; insertion order is display order
///
/// Ids must be unique across selectable and exit items. Duplicates would make
/// multi-select ambiguous, so they are rejected when the collection is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItems {
    items: Vec<MenuItem>,
}

impl MenuItems {
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if let Some(id) = item.id() {
                if !seen.insert(id) {
                    bail!("Duplicate menu item id: {}", id);
                }
            }
        }

        Ok(Self { items })
    }

    /// Append an item, rejecting an id that is already present
    pub fn push(&mut self, item: MenuItem) -> Result<()> {
        if let Some(id) = item.id() {
            if self.position_of(id).is_some() {
                bail!("Duplicate menu item id: {}", id);
            }
        }
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MenuItem> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MenuItem> {
        self.items.iter_mut()
    }

    /// Index of the item carrying `id`
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow() -> ItemFormat {
        ItemFormat {
            width: 20,
            alt_max_width: 6,
        }
    }

    #[test]
    fn test_item_ids() {
        assert_eq!(MenuItem::selectable(7, "Tea").id(), Some(7));
        assert_eq!(MenuItem::exit(0, "Back").id(), Some(0));
        assert_eq!(MenuItem::separator().id(), None);
        assert!(MenuItem::separator().is_separator());
        assert!(MenuItem::exit(0, "Back").is_exit());
    }

    #[test]
    fn test_format_line_pads_plain_text() {
        let line = MenuItem::selectable(1, "Coffee").format_line(&narrow());
        assert_eq!(line, format!("{:<20}", "Coffee"));
        assert_eq!(line.width(), 20);
    }

    #[test]
    fn test_format_line_truncates_long_text() {
        let item = MenuItem::selectable(1, "An extremely long menu entry title");
        let line = item.format_line(&narrow());
        assert_eq!(line, "An extremely long me");
    }

    #[test]
    fn test_format_line_right_aligns_alt() {
        let item = MenuItem::selectable(1, "Coffee").with_alt("$3");
        let line = item.format_line(&narrow());
        assert_eq!(line.width(), 20);
        assert!(line.starts_with("Coffee "));
        assert!(line.ends_with(" $3"));
    }

    #[test]
    fn test_format_line_truncates_alt_with_ellipsis() {
        let item = MenuItem::selectable(1, "Coffee with plenty of milk").with_alt("extra large");
        let line = item.format_line(&narrow());
        assert_eq!(line.width(), 20);
        assert!(line.ends_with("extra…"));
        assert!(line.starts_with("Coffee with p "));
    }

    #[test]
    fn test_format_line_alt_at_max_is_kept() {
        let item = MenuItem::selectable(1, "Tea").with_alt("sixsix");
        let line = item.format_line(&narrow());
        assert!(line.ends_with(" sixsix"));
        assert!(!line.contains('…'));
    }

    #[test]
    fn test_format_line_separator_is_rule() {
        let line = MenuItem::separator().format_line(&narrow());
        assert_eq!(line.chars().count(), 20);
        assert!(line.chars().all(|c| c == RULE_CHAR));
    }

    #[test]
    fn test_set_alt_reformats() {
        let mut item = MenuItem::selectable(1, "Coffee");
        item.set_alt("[x]");
        assert_eq!(item.alt(), "[x]");
        assert!(item.format_line(&narrow()).ends_with(" [x]"));
        item.set_text("Espresso");
        assert!(item.format_line(&narrow()).starts_with("Espresso "));
    }

    #[test]
    fn test_menu_items_rejects_duplicate_ids() {
        let result = MenuItems::new(vec![
            MenuItem::selectable(1, "Coffee"),
            MenuItem::separator(),
            MenuItem::selectable(1, "Tea"),
        ]);
        assert!(result.is_err());

        let result = MenuItems::new(vec![
            MenuItem::selectable(0, "Coffee"),
            MenuItem::exit(0, "Back"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_menu_items_allows_many_separators() {
        let items = MenuItems::new(vec![
            MenuItem::separator(),
            MenuItem::selectable(1, "Coffee"),
            MenuItem::separator(),
        ])
        .unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_menu_items_push_and_position() {
        let mut items = MenuItems::default();
        assert!(items.is_empty());
        items.push(MenuItem::selectable(3, "Pork")).unwrap();
        items.push(MenuItem::exit(0, "Exit")).unwrap();
        assert!(items.push(MenuItem::selectable(3, "Pasta")).is_err());
        assert_eq!(items.position_of(0), Some(1));
        assert_eq!(items.position_of(9), None);
    }
}
