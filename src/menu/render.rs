//! # Frame Rendering
//!
//! Builds the lines of one menu frame and writes them to the terminal as
//! ANSI escape sequences.
//!
//! ## Frame Layout
//!
//! ```text
//! Pick a drink                  <- header
//!   ▲ more                      <- or a rule when the page starts at item 0
//!   Coffee                 [x]
//!   Tea                    [ ]  <- highlighted item in reverse video
//!   ────────────────────────
//!   ▼ more                      <- or a rule when the page reaches the end
//!
//!   item 2 of 6
//!   ↑/↓ move · Enter select · Esc back
//! ```
//!
//! Every line is padded to one column short of the terminal width so a
//! shorter line fully overwrites a longer one from the previous frame.

use crate::journal::{JournalEntry, Severity};
use crate::menu::item::{ItemFormat, MenuItems, RULE_CHAR};
use crate::menu::navigator::SelectMode;
use crate::menu::utils::{fit_width, strip_controls};
use crossterm::{
    cursor::{MoveTo, RestorePosition, SavePosition},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};
use std::ops::Range;

const INDENT: &str = "  ";
const MORE_ABOVE: &str = "▲ more";
const MORE_BELOW: &str = "▼ more";
const SINGLE_HELP: &str = "↑/↓ move · Enter select · Esc back";
const MULTI_HELP: &str = "↑/↓ move · Space toggle · Enter on exit to finish · Esc done";

/// How a frame line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Highlight,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub text: String,
    pub style: LineStyle,
}

impl FrameLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Plain,
        }
    }

    fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Muted,
        }
    }
}

/// Everything needed to compose one frame
pub struct FrameView<'a> {
    pub header: &'a str,
    pub items: &'a MenuItems,
    pub index: usize,
    pub window: Range<usize>,
    pub mode: SelectMode,
    pub format: ItemFormat,
    pub show_help: bool,
}

/// Rows a frame uses besides the items themselves
pub fn chrome_rows(show_help: bool) -> usize {
    // header, top marker, bottom marker, blank, status
    let rows = 5;
    if show_help {
        rows + 1
    } else {
        rows
    }
}

pub fn compose(view: &FrameView) -> Vec<FrameLine> {
    let rule: String = std::iter::repeat(RULE_CHAR).take(view.format.width).collect();
    let mut lines = Vec::with_capacity(view.window.len() + chrome_rows(view.show_help));

    lines.push(FrameLine::plain(view.header));

    if view.window.start > 0 {
        lines.push(FrameLine::muted(format!("{INDENT}{MORE_ABOVE}")));
    } else {
        lines.push(FrameLine::muted(format!("{INDENT}{rule}")));
    }

    for i in view.window.clone() {
        let Some(item) = view.items.get(i) else {
            break;
        };
        let text = format!("{INDENT}{}", item.format_line(&view.format));
        let style = if i == view.index {
            LineStyle::Highlight
        } else if item.is_separator() {
            LineStyle::Muted
        } else {
            LineStyle::Plain
        };
        lines.push(FrameLine { text, style });
    }

    if view.window.end < view.items.len() {
        lines.push(FrameLine::muted(format!("{INDENT}{MORE_BELOW}")));
    } else {
        lines.push(FrameLine::muted(format!("{INDENT}{rule}")));
    }

    lines.push(FrameLine::plain(""));

    let position = if view.items.is_empty() { 0 } else { view.index + 1 };
    lines.push(FrameLine::plain(format!(
        "{INDENT}item {} of {}",
        position,
        view.items.len()
    )));

    if view.show_help {
        let help = match view.mode {
            SelectMode::Single => SINGLE_HELP,
            SelectMode::Multi => MULTI_HELP,
        };
        lines.push(FrameLine::muted(format!("{INDENT}{help}")));
    }

    lines
}

/// Queue the frame at the current cursor position, one line per row
///
/// The cursor ends at the start of the row below the frame.
pub fn write_frame<W: Write>(out: &mut W, lines: &[FrameLine], width: u16) -> io::Result<()> {
    let columns = usize::from(width.saturating_sub(1));

    for line in lines {
        let text = fit_width(&line.text, columns);
        match line.style {
            LineStyle::Plain => queue!(out, Print(text))?,
            LineStyle::Highlight => queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(text),
                SetAttribute(Attribute::Reset)
            )?,
            LineStyle::Muted => queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print(text),
                ResetColor
            )?,
        }
        queue!(out, Print("\r\n"))?;
    }

    Ok(())
}

/// Queue the journal's last entry at a fixed terminal row, leaving the cursor
/// where it was
pub fn write_status_row<W: Write>(
    out: &mut W,
    entry: &JournalEntry,
    row: u16,
    width: u16,
) -> io::Result<()> {
    // Journal messages are free text; a stray newline or escape would tear
    // the frame
    let text = fit_width(
        &strip_controls(&entry.to_string()),
        usize::from(width.saturating_sub(1)),
    );
    let color = match entry.severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Reset,
        Severity::Debug => Color::DarkGrey,
    };

    queue!(
        out,
        SavePosition,
        MoveTo(0, row),
        SetForegroundColor(color),
        Print(text),
        ResetColor,
        RestorePosition
    )
}
