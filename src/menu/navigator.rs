//! # Navigator
//!
//! The key-driven state machine behind a menu session. It holds the cursor
//! index and, in multi-select mode, the list of toggled ids. It knows nothing
//! about the terminal; [`crate::menu::MenuSession`] feeds it key codes and
//! draws whatever state it ends up in.
//!
//! ## Single-select
//!
//! - `Up` / `Down` move the cursor and wrap around at either end
//! - `Enter` on a separator does nothing; on any other item it finishes with
//!   that item's id
//! - `Esc` finishes with [`MenuOutcome::Cancelled`]
//!
//! ## Multi-select
//!
//! - `Space` or `Enter` on a selectable item toggles it
//! - `Enter` on the exit item, or `Esc`, finishes with the toggled ids in the
//!   order they were (most recently) toggled on

use crate::menu::item::{ItemKind, MenuItems};
use crate::menu::page::MIN_PAGE_SIZE;
use crossterm::event::KeyCode;

/// Whether one item or a set of items is being chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Single,
    Multi,
}

/// How a menu session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Single-select finished on the item with this id
    Selected(u32),
    /// Multi-select finished; ids in toggle order
    MultiSelected(Vec<u32>),
    /// Single-select was dismissed with Escape
    Cancelled,
    /// The terminal failed mid-session
    Fault(String),
}

/// Result of feeding one key to the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(MenuOutcome),
}

/// Alt text shown next to multi-select items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub selected: String,
    pub unselected: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            selected: "[x]".to_string(),
            unselected: "[ ]".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    mode: SelectMode,
    index: usize,
    selected: Vec<u32>,
    markers: Markers,
    page_size: usize,
}

impl Navigator {
    pub fn single() -> Self {
        Self {
            mode: SelectMode::Single,
            index: 0,
            selected: Vec::new(),
            markers: Markers::default(),
            page_size: MIN_PAGE_SIZE,
        }
    }

    /// Start a multi-select navigator, marking every selectable item as
    /// deselected
    pub fn multi(items: &mut MenuItems, markers: Markers) -> Self {
        for item in items.iter_mut() {
            if let ItemKind::Selectable(_) = item.kind() {
                item.set_alt(markers.unselected.clone());
            }
        }

        Self {
            mode: SelectMode::Multi,
            index: 0,
            selected: Vec::new(),
            markers,
            page_size: MIN_PAGE_SIZE,
        }
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Ids toggled on so far, oldest first
    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    /// Rows per page used by `PageUp` / `PageDown`
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index > 0 {
            self.index - 1
        } else {
            len - 1
        };
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index + 1 < len { self.index + 1 } else { 0 };
    }

    pub fn move_first(&mut self) {
        self.index = 0;
    }

    pub fn move_last(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }

    pub fn page_up(&mut self) {
        self.index = self.index.saturating_sub(self.page_size);
    }

    pub fn page_down(&mut self, len: usize) {
        self.index = (self.index + self.page_size).min(len.saturating_sub(1));
    }

    /// Apply one key press
    pub fn handle_key(&mut self, items: &mut MenuItems, key: KeyCode) -> Step {
        let len = items.len();
        match key {
            KeyCode::Up => self.move_up(len),
            KeyCode::Down => self.move_down(len),
            KeyCode::Home => self.move_first(),
            KeyCode::End => self.move_last(len),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(len),
            KeyCode::Esc => return Step::Finished(self.finish_cancelled()),
            KeyCode::Enter => return self.confirm(items),
            KeyCode::Char(' ') if self.mode == SelectMode::Multi => self.toggle_current(items),
            _ => {}
        }
        Step::Continue
    }

    fn confirm(&mut self, items: &mut MenuItems) -> Step {
        let Some(kind) = items.get(self.index).map(|item| item.kind()) else {
            return Step::Continue;
        };

        match (self.mode, kind) {
            (_, ItemKind::Separator) => Step::Continue,
            (SelectMode::Single, ItemKind::Selectable(id) | ItemKind::Exit(id)) => {
                Step::Finished(MenuOutcome::Selected(id))
            }
            (SelectMode::Multi, ItemKind::Exit(_)) => {
                Step::Finished(MenuOutcome::MultiSelected(self.selected.clone()))
            }
            (SelectMode::Multi, ItemKind::Selectable(_)) => {
                self.toggle_current(items);
                Step::Continue
            }
        }
    }

    fn finish_cancelled(&self) -> MenuOutcome {
        match self.mode {
            SelectMode::Single => MenuOutcome::Cancelled,
            SelectMode::Multi => MenuOutcome::MultiSelected(self.selected.clone()),
        }
    }

    fn toggle_current(&mut self, items: &mut MenuItems) {
        let Some(item) = items.get_mut(self.index) else {
            return;
        };
        let ItemKind::Selectable(id) = item.kind() else {
            return;
        };

        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
            item.set_alt(self.markers.unselected.clone());
        } else {
            self.selected.push(id);
            item.set_alt(self.markers.selected.clone());
        }
    }
}
