//! Editor: the notepad loop plus load-at-entry and reload-on-demand.
//!
//! Entering the editor tries to read `\sample.txt`; when that fails the
//! buffer is seeded with sample text instead. F3 re-reads the file and
//! jumps the cursor home; a failed reload keeps the buffer and cursor
//! untouched and reports on the status line.

use event_log::{EventLog, LogEntry, LogLevel};
use input_keys::{KeyEvent, NamedKey};
use line_buffer::{EditCursor, LineBuffer};
use text_grid::Rect;

use crate::chrome::{self, styles};
use crate::platform::{ShellPlatform, TextConsole};

const WINDOW: Rect = Rect::new(8, 2, 64, 20);
const TITLE: &str = " Editor - sample.txt ";
const HINT_TEXT: &str = "F2=Save, F3=Reload, ESC=Exit";
const SAVED_TEXT: &str = "Saved to \\sample.txt";
const SAVE_FAILED_TEXT: &str = "Save failed (filesystem unavailable)";
const RELOAD_FAILED_TEXT: &str = "Reload failed (filesystem unavailable)";

/// Document path on the boot volume.
pub const DOC_PATH: &str = "\\sample.txt";

/// Buffer contents when no stored document can be read.
pub const SEED_LINES: &[&str] = &[
    "This is a sample file.",
    "Edit this text and press F2 to save.",
];

const TEXT_X: usize = 10;
const TEXT_Y: usize = 3;
const HINT_Y: usize = 21;
const VISIBLE_LINES: usize = 18;
const VISIBLE_COLS: usize = 60;

/// What one key press asked of the editor loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Keep editing.
    Continue,
    /// Persist the buffer.
    Save,
    /// Re-read the stored document.
    Reload,
    /// Return to the menu.
    Exit,
}

/// Editor state around a loaded or seeded document.
pub struct EditorApp {
    buffer: LineBuffer,
    cursor: EditCursor,
    status: Option<&'static str>,
}

impl EditorApp {
    /// Editor over the given document lines.
    pub fn from_lines(lines: &[String]) -> Self {
        Self {
            buffer: LineBuffer::from_lines(lines),
            cursor: EditCursor::zero(),
            status: None,
        }
    }

    /// Editor over the built-in sample text.
    pub fn seeded() -> Self {
        Self {
            buffer: LineBuffer::from_lines(SEED_LINES),
            cursor: EditCursor::zero(),
            status: None,
        }
    }

    /// Pure key transition. Buffer edits happen here; I/O never does.
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        match key {
            KeyEvent::Named(NamedKey::Escape) => EditorAction::Exit,
            KeyEvent::Named(NamedKey::F2) => EditorAction::Save,
            KeyEvent::Named(NamedKey::F3) => EditorAction::Reload,
            KeyEvent::Named(NamedKey::Enter) => {
                self.buffer.newline(&mut self.cursor);
                EditorAction::Continue
            }
            KeyEvent::Named(NamedKey::Backspace) => {
                self.buffer.backspace(&mut self.cursor);
                EditorAction::Continue
            }
            KeyEvent::Printable(c) => {
                self.buffer.insert_char(&mut self.cursor, c);
                EditorAction::Continue
            }
            KeyEvent::Named(_) => EditorAction::Continue,
        }
    }

    /// Replace the document and jump the cursor home.
    pub fn replace_lines(&mut self, lines: &[String]) {
        self.buffer = LineBuffer::from_lines(lines);
        self.cursor = EditCursor::zero();
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> EditCursor {
        self.cursor
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    fn draw_content(&self, console: &mut dyn TextConsole) {
        for row in 0..VISIBLE_LINES {
            let line = self.buffer.line(row).unwrap_or("");
            let shown = super::pad_to_width(line, VISIBLE_COLS);
            console.write_text(TEXT_X, TEXT_Y + row, styles::NORMAL, &shown);
        }
        let hint = self.status.unwrap_or(HINT_TEXT);
        let shown = super::pad_to_width(hint, VISIBLE_COLS);
        console.write_text(TEXT_X, HINT_Y, styles::NORMAL, &shown);
        console.set_cursor(TEXT_X + self.cursor.col, TEXT_Y + self.cursor.line);
    }
}

/// Run the editor until the user leaves it.
pub fn run<P: ShellPlatform>(platform: &mut P, log: &mut EventLog) {
    let mut app = match super::load_document(platform.storage(), DOC_PATH) {
        Ok(lines) => {
            log.record(
                LogEntry::new(LogLevel::Info, "document loaded")
                    .with_field("path", DOC_PATH)
                    .with_field("lines", lines.len().to_string()),
            );
            EditorApp::from_lines(&lines)
        }
        Err(err) => {
            log.record(
                LogEntry::new(LogLevel::Info, "seed document used")
                    .with_field("path", DOC_PATH)
                    .with_field("reason", err.to_string()),
            );
            EditorApp::seeded()
        }
    };

    let time = platform.clock().now();
    let console = platform.console();
    console.clear(styles::NORMAL);
    chrome::draw_topbar(console, time);
    chrome::draw_window(console, WINDOW, TITLE, styles::WINDOW);

    loop {
        app.draw_content(platform.console());
        let key = platform.keys().read_key();
        match app.handle_key(key) {
            EditorAction::Continue => {}
            EditorAction::Exit => return,
            EditorAction::Save => {
                match super::store_document(platform.storage(), DOC_PATH, app.buffer.lines()) {
                    Ok(()) => {
                        app.status = Some(SAVED_TEXT);
                        log.record(
                            LogEntry::new(LogLevel::Info, "document saved")
                                .with_field("path", DOC_PATH)
                                .with_field("lines", app.buffer.line_count().to_string()),
                        );
                    }
                    Err(err) => {
                        app.status = Some(SAVE_FAILED_TEXT);
                        log.record(
                            LogEntry::new(LogLevel::Warn, "save failed")
                                .with_field("path", DOC_PATH)
                                .with_field("reason", err.to_string()),
                        );
                    }
                }
            }
            EditorAction::Reload => match super::load_document(platform.storage(), DOC_PATH) {
                Ok(lines) => {
                    app.replace_lines(&lines);
                    log.record(
                        LogEntry::new(LogLevel::Info, "document reloaded")
                            .with_field("path", DOC_PATH)
                            .with_field("lines", lines.len().to_string()),
                    );
                }
                Err(err) => {
                    app.status = Some(RELOAD_FAILED_TEXT);
                    log.record(
                        LogEntry::new(LogLevel::Warn, "reload failed")
                            .with_field("path", DOC_PATH)
                            .with_field("reason", err.to_string()),
                    );
                }
            },
        }
    }
}
