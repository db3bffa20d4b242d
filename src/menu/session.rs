//! # Menu Session
//!
//! Runs a navigator against a [`Console`] until the user confirms or cancels.
//!
//! ## Redraw In Place
//!
//! The session remembers where the menu started on screen (its anchor) and
//! moves back there before every frame, so key presses refresh the menu
//! instead of scrolling the terminal. The anchor belongs to the session, not
//! to the process, so independent sessions never disturb each other.
//!
//! - No anchor yet: the cursor row becomes the anchor; a cursor left mid-line
//!   moves to the start of the next row first
//! - Cursor found above the anchor: the screen was cleared behind our back,
//!   so the anchor is recaptured at the cursor
//! - Frame ran past the bottom row: the terminal scrolled, so the anchor moves
//!   up by the same number of rows
//!
//! ## Faults
//!
//! Terminal errors inside the loop (resizes racing cursor queries, redirected
//! I/O, ...) never escape. They are recorded in the log sink and returned as
//! [`MenuOutcome::Fault`]. The cursor is shown again on every exit path.

use crate::journal::{LogSink, Severity};
use crate::menu::config::MenuConfig;
use crate::menu::console::{Console, HiddenCursor};
use crate::menu::item::MenuItems;
use crate::menu::navigator::{MenuOutcome, Navigator, Step};
use crate::menu::page::visible_window;
use crate::menu::render::{self, FrameLine, FrameView};
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    event::{Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use log::{debug, error};
use std::io::{self, Write};
use std::sync::Arc;

/// Tag attached to faults recorded in the log sink
pub const FAULT_TAG: &str = "menu";

pub struct MenuSession {
    config: MenuConfig,
    anchor: Option<(u16, u16)>,
    log_sink: Option<Arc<dyn LogSink>>,
}

impl MenuSession {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            anchor: None,
            log_sink: None,
        }
    }

    /// Show the sink's last entry on the status row and record faults in it
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = Some(sink);
        self
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Top-left position of the menu on screen, once it has been drawn
    pub fn anchor(&self) -> Option<(u16, u16)> {
        self.anchor
    }

    /// Forget the anchor; the next frame is drawn at the cursor
    pub fn reset_anchor(&mut self) {
        self.anchor = None;
    }

    /// Let the user pick one item
    ///
    /// An empty collection returns [`MenuOutcome::Cancelled`] without drawing.
    pub fn select<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        header: &str,
        items: &mut MenuItems,
    ) -> MenuOutcome {
        if items.is_empty() {
            debug!("select called with no items");
            return MenuOutcome::Cancelled;
        }
        self.run(console, header, items, Navigator::single())
    }

    /// Let the user toggle any number of items
    ///
    /// An empty collection returns an empty selection without drawing.
    pub fn select_many<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        header: &str,
        items: &mut MenuItems,
    ) -> MenuOutcome {
        if items.is_empty() {
            debug!("select_many called with no items");
            return MenuOutcome::MultiSelected(Vec::new());
        }
        let navigator = Navigator::multi(items, self.config.markers());
        self.run(console, header, items, navigator)
    }

    fn run<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        header: &str,
        items: &mut MenuItems,
        navigator: Navigator,
    ) -> MenuOutcome {
        debug!(
            "menu session started: {} items, {:?} mode",
            items.len(),
            navigator.mode()
        );

        match self.interact(console, header, items, navigator) {
            Ok(outcome) => {
                debug!("menu session finished: {:?}", outcome);
                outcome
            }
            Err(err) => {
                let reason = format!("{:#}", err);
                self.record_fault(&reason);
                MenuOutcome::Fault(reason)
            }
        }
    }

    fn interact<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        header: &str,
        items: &mut MenuItems,
        mut navigator: Navigator,
    ) -> Result<MenuOutcome> {
        let mut console = HiddenCursor::new(console)?;

        loop {
            self.draw(&mut *console, header, items, &mut navigator)?;

            match console.read_event()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let code = if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        KeyCode::Esc
                    } else {
                        key.code
                    };

                    if let Step::Finished(outcome) = navigator.handle_key(items, code) {
                        return Ok(outcome);
                    }
                }
                Event::Resize(columns, rows) => {
                    debug!("terminal resized to {}x{}, redrawing", columns, rows);
                }
                _ => {}
            }
        }
    }

    fn draw<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        header: &str,
        items: &MenuItems,
        navigator: &mut Navigator,
    ) -> Result<()> {
        let (width, height) = console.size()?;
        let cursor = console.cursor_position()?;

        let mut anchor = match self.anchor {
            Some(anchor) if cursor.1 >= anchor.1 => anchor,
            Some(_) => {
                debug!("cursor is above the menu start, recapturing anchor");
                capture_anchor(&mut console.writer(), cursor, height)?
            }
            None => capture_anchor(&mut console.writer(), cursor, height)?,
        };

        // Rows left below the anchor once the frame chrome and the trailing
        // cursor row are accounted for. The page never grows past what the
        // whole terminal can hold, so a frame scrolls at most once.
        let chrome = render::chrome_rows(self.config.show_help);
        let rows_available =
            usize::from(height).saturating_sub(usize::from(anchor.1) + chrome + 1);
        let max_rows = usize::from(height).saturating_sub(chrome + 1).max(1);
        let window = visible_window(
            items.len(),
            navigator.index(),
            rows_available.min(max_rows),
            self.config.min_page_size.min(max_rows),
        );
        navigator.set_page_size(window.len());

        let lines = render::compose(&FrameView {
            header,
            items,
            index: navigator.index(),
            window,
            mode: navigator.mode(),
            format: self.config.item_format(),
            show_help: self.config.show_help,
        });

        let mut out = console.writer();
        paint_frame(&mut out, anchor, &lines, width).context("Failed to draw menu")?;

        // Each line ends in a newline, so a frame reaching past the bottom row
        // scrolls the terminal by the overflow
        let bottom = usize::from(height.saturating_sub(1));
        let end_row = usize::from(anchor.1) + lines.len();
        if end_row > bottom {
            let row = usize::from(anchor.1).saturating_sub(end_row - bottom);
            anchor.1 = u16::try_from(row).unwrap_or(anchor.1);
        }
        let frame_rows = usize::from(anchor.1)..usize::from(anchor.1) + lines.len();

        let status_row = self.config.log_row.unwrap_or(height.saturating_sub(1));
        if status_row < height && !frame_rows.contains(&usize::from(status_row)) {
            if let Some(entry) = self.log_sink.as_ref().and_then(|sink| sink.last_entry()) {
                render::write_status_row(&mut out, &entry, status_row, width)
                    .context("Failed to draw status row")?;
            }
        }

        out.flush().context("Failed to flush terminal output")?;
        self.anchor = Some(anchor);

        Ok(())
    }

    fn record_fault(&self, reason: &str) {
        match &self.log_sink {
            Some(sink) => sink.record(Severity::Error, reason, Some(FAULT_TAG)),
            None => error!("menu session aborted: {}", reason),
        }
    }
}

/// Anchor a new frame at column 0 of the cursor row
///
/// A cursor left mid-line by the caller first moves to the next row, since
/// every frame line after the first starts at column 0.
fn capture_anchor<W: Write>(out: &mut W, cursor: (u16, u16), height: u16) -> Result<(u16, u16)> {
    if cursor.0 == 0 {
        return Ok(cursor);
    }

    queue!(out, Print("\r\n")).context("Failed to move below the cursor line")?;
    let row = cursor.1.saturating_add(1).min(height.saturating_sub(1));
    Ok((0, row))
}

fn paint_frame<W: Write>(
    out: &mut W,
    anchor: (u16, u16),
    lines: &[FrameLine],
    width: u16,
) -> io::Result<()> {
    queue!(out, MoveTo(anchor.0, anchor.1))?;
    render::write_frame(out, lines, width)?;
    queue!(out, Clear(ClearType::FromCursorDown))
}
