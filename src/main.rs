//! # termenu CLI Entry Point
//!
//! Shows an interactive menu in the terminal and prints what was chosen, so
//! shell scripts can offer menus without a TUI of their own.
//!
//! ## Usage
//!
//! ```bash
//! # Pick one of a few labels (ids 1..=n, plus "Back" with id 0)
//! termenu Coffee Tea Pork Pasta
//!
//! # Toggle several entries
//! termenu --multi Coffee Tea Pork Pasta
//!
//! # Use a JSON menu definition
//! termenu --file lunch.json
//!
//! # Print the most recent journal entry and exit
//! termenu --last-log
//! ```
//!
//! ## Output
//!
//! - Single-select prints the chosen id
//! - Multi-select prints the toggled ids, space-separated, in toggle order
//!
//! ## Exit Codes
//!
//! - `0` - an item (or a set of items) was chosen
//! - `1` - the menu was cancelled with Esc
//! - `2` - the terminal failed while the menu was open
//!
//! ## Key Bindings
//!
//! - `Up` / `Down` - Move the highlight (wraps around)
//! - `Home` / `End` / `PgUp` / `PgDn` - Jump through the list
//! - `Enter` - Select (multi-select: toggle, or finish on the exit item)
//! - `Space` - Toggle (multi-select only)
//! - `Esc` / `Ctrl+c` - Cancel (multi-select: finish with the current selection)

use termenu::journal::{self, Journal};
use termenu::menu::{CrosstermConsole, MenuConfig, MenuFile, MenuOutcome, MenuSession};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{cursor::Show, execute, terminal::disable_raw_mode};
use log::LevelFilter;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_HEADER: &str = "Select an item";

/// termenu - pick items from an in-place terminal menu
#[derive(Parser, Debug)]
#[command(name = "termenu")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick items from an in-place terminal menu", long_about = None)]
struct Args {
    /// Menu entries; each gets an id from 1 upwards
    #[arg(value_name = "ITEM", conflicts_with = "file")]
    items: Vec<String>,

    /// JSON menu definition to show instead of ITEMs
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Allow toggling several entries
    #[arg(short, long)]
    multi: bool,

    /// Header line shown above the menu
    #[arg(long, value_name = "TEXT")]
    header: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Journal file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    journal: Option<PathBuf>,

    /// Record debug messages in the journal
    #[arg(short, long)]
    verbose: bool,

    /// Print the most recent journal entry and exit
    #[arg(long)]
    last_log: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), Show);

        original_hook(panic_info);
    }));

    let code = run_application(args)?;

    // Restore panic hook
    let _ = panic::take_hook();

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn run_application(args: Args) -> Result<i32> {
    let journal = Arc::new(match &args.journal {
        Some(path) => Journal::open_at(path.clone())?,
        None => Journal::open().context("Failed to open journal")?,
    });

    if args.last_log {
        match journal.entries()?.last() {
            Some(entry) => println!("{} {}", entry.timestamp.to_rfc3339(), entry),
            None => println!("Journal is empty: {}", journal.path().display()),
        }
        return Ok(0);
    }

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    journal::install(journal.clone(), level)?;

    let config = match &args.config {
        Some(path) => MenuConfig::load_from(path)?,
        None => MenuConfig::load(),
    };

    let menu_file = load_menu(&args)?;
    let header = args
        .header
        .clone()
        .or_else(|| menu_file.header.clone())
        .unwrap_or_else(|| DEFAULT_HEADER.to_string());
    let mut items = menu_file.into_items()?;

    let mut session = MenuSession::new(config).with_log_sink(journal);

    // The console restores cooked mode when dropped, before anything is printed
    let outcome = {
        let mut console = CrosstermConsole::new()?;
        if args.multi {
            session.select_many(&mut console, &header, &mut items)
        } else {
            session.select(&mut console, &header, &mut items)
        }
    };

    Ok(report(&outcome))
}

fn load_menu(args: &Args) -> Result<MenuFile> {
    if let Some(path) = &args.file {
        return MenuFile::load(path);
    }
    if args.items.is_empty() {
        bail!("No menu items given; pass ITEMs or --file");
    }
    Ok(MenuFile::from_labels(&args.items))
}

/// Print the outcome and return the process exit code
fn report(outcome: &MenuOutcome) -> i32 {
    match outcome {
        MenuOutcome::Selected(id) => {
            println!("{}", id);
            0
        }
        MenuOutcome::MultiSelected(ids) => {
            let ids: Vec<String> = ids.iter().map(u32::to_string).collect();
            println!("{}", ids.join(" "));
            0
        }
        MenuOutcome::Cancelled => 1,
        MenuOutcome::Fault(reason) => {
            eprintln!("Error: menu aborted: {}", reason);
            2
        }
    }
}
