//! # Configuration Persistence
//!
//! Manages menu presentation settings stored in `~/.config/termenu/config.json`.
//!
//! ## Overview
//!
//! The [`MenuConfig`] struct is serialized to / deserialized from a JSON file
//! in the user's XDG config directory. Every field has a default, so a file
//! only needs the settings it changes:
//!
//! ```json
//! { "item_width": 50, "selected_marker": "(*)" }
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::menu::item::{ItemFormat, DEFAULT_ALT_MAX_WIDTH, DEFAULT_ITEM_WIDTH};
use crate::menu::navigator::Markers;
use crate::menu::page::MIN_PAGE_SIZE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted menu settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    /// Columns occupied by each formatted item.
    #[serde(default = "default_item_width")]
    pub item_width: usize,

    /// Alt text wider than this is cut with an ellipsis.
    #[serde(default = "default_alt_max_width")]
    pub alt_max_width: usize,

    /// Fewest item rows a page shows.
    #[serde(default = "default_min_page_size")]
    pub min_page_size: usize,

    /// Show the key help line under the status line.
    #[serde(default = "default_true")]
    pub show_help: bool,

    /// Terminal row of the journal status line; `None` means the bottom row.
    #[serde(default)]
    pub log_row: Option<u16>,

    /// Alt text of a toggled-on item in multi-select mode.
    #[serde(default = "default_selected_marker")]
    pub selected_marker: String,

    /// Alt text of a toggled-off item in multi-select mode.
    #[serde(default = "default_unselected_marker")]
    pub unselected_marker: String,
}

fn default_item_width() -> usize {
    DEFAULT_ITEM_WIDTH
}

fn default_alt_max_width() -> usize {
    DEFAULT_ALT_MAX_WIDTH
}

fn default_min_page_size() -> usize {
    MIN_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

fn default_selected_marker() -> String {
    "[x]".to_string()
}

fn default_unselected_marker() -> String {
    "[ ]".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            item_width: default_item_width(),
            alt_max_width: default_alt_max_width(),
            min_page_size: default_min_page_size(),
            show_help: true,
            log_row: None,
            selected_marker: default_selected_marker(),
            unselected_marker: default_unselected_marker(),
        }
    }
}

impl MenuConfig {
    /// Load configuration from disk. Returns `MenuConfig::default()` if the
    /// file does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `MenuConfig::default()`
    /// if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Width constraints applied to every item.
    pub fn item_format(&self) -> ItemFormat {
        ItemFormat {
            width: self.item_width,
            alt_max_width: self.alt_max_width,
        }
    }

    pub fn markers(&self) -> Markers {
        Markers {
            selected: self.selected_marker.clone(),
            unselected: self.unselected_marker.clone(),
        }
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "termenu")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
