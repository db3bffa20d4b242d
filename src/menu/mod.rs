//! # Menu Module
//!
//! An interactive terminal menu that redraws in place.
//!
//! ## Components
//!
//! - [`MenuItem`] / [`MenuItems`] - the item model and its formatting
//! - [`Navigator`] - key-driven cursor and selection state machine
//! - [`mod@page`] - which slice of the items fits on screen
//! - [`mod@render`] - frame composition and ANSI output
//! - [`MenuSession`] - the blocking loop tying it all to a [`Console`]
//! - [`MenuConfig`] - persisted presentation settings
//! - [`MenuFile`] - JSON menu definitions
//!
//! ## Usage
//!
//! ```no_run
//! use termenu::menu::{CrosstermConsole, MenuConfig, MenuItem, MenuItems, MenuOutcome, MenuSession};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut items = MenuItems::new(vec![
//!     MenuItem::selectable(1, "Coffee").with_alt("$3"),
//!     MenuItem::selectable(2, "Tea").with_alt("$2"),
//!     MenuItem::separator(),
//!     MenuItem::exit(0, "Exit"),
//! ])?;
//!
//! let mut console = CrosstermConsole::new()?;
//! let mut session = MenuSession::new(MenuConfig::load());
//! match session.select(&mut console, "Pick a drink", &mut items) {
//!     MenuOutcome::Selected(id) => println!("picked {id}"),
//!     other => println!("{other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod console;
pub mod file;
pub mod item;
pub mod navigator;
pub mod page;
pub mod render;
pub mod session;
pub mod utils;

pub use config::MenuConfig;
pub use console::{Console, CrosstermConsole, HiddenCursor};
pub use file::{ItemDef, MenuFile};
pub use item::{ItemFormat, ItemKind, MenuItem, MenuItems};
pub use navigator::{Markers, MenuOutcome, Navigator, SelectMode, Step};
pub use session::MenuSession;
