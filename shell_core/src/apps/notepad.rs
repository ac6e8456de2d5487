//! Notepad: free-form typing into a bounded line buffer, saved on demand.
//!
//! Every visit starts from an empty buffer. F2 writes the whole document to
//! `\notepad.txt`; the outcome replaces the hint line until the notepad is
//! left. Escape returns to the menu without saving.

use event_log::{EventLog, LogEntry, LogLevel};
use input_keys::{KeyEvent, NamedKey};
use line_buffer::{EditCursor, LineBuffer};
use text_grid::Rect;

use crate::chrome::{self, styles};
use crate::platform::{ShellPlatform, TextConsole};

const WINDOW: Rect = Rect::new(10, 3, 60, 18);
const TITLE: &str = " Notepad ";
const HINT_TEXT: &str = "Type text. F2=Save, ESC=Exit";
const SAVED_TEXT: &str = "Saved to \\notepad.txt";
const SAVE_FAILED_TEXT: &str = "Save failed (filesystem unavailable)";

/// Document path on the boot volume.
pub const DOC_PATH: &str = "\\notepad.txt";

const TEXT_X: usize = 12;
const TEXT_Y: usize = 4;
const HINT_Y: usize = 20;
const VISIBLE_LINES: usize = 16;
const VISIBLE_COLS: usize = 54;

/// What one key press asked of the notepad loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotepadAction {
    /// Keep editing.
    Continue,
    /// Persist the buffer.
    Save,
    /// Return to the menu.
    Exit,
}

/// Notepad editing state.
pub struct NotepadApp {
    buffer: LineBuffer,
    cursor: EditCursor,
    status: Option<&'static str>,
}

impl NotepadApp {
    pub fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
            cursor: EditCursor::zero(),
            status: None,
        }
    }

    /// Pure key transition. Buffer edits happen here; I/O never does.
    pub fn handle_key(&mut self, key: KeyEvent) -> NotepadAction {
        match key {
            KeyEvent::Named(NamedKey::Escape) => NotepadAction::Exit,
            KeyEvent::Named(NamedKey::F2) => NotepadAction::Save,
            KeyEvent::Named(NamedKey::Enter) => {
                self.buffer.newline(&mut self.cursor);
                NotepadAction::Continue
            }
            KeyEvent::Named(NamedKey::Backspace) => {
                self.buffer.backspace(&mut self.cursor);
                NotepadAction::Continue
            }
            KeyEvent::Printable(c) => {
                self.buffer.insert_char(&mut self.cursor, c);
                NotepadAction::Continue
            }
            KeyEvent::Named(_) => NotepadAction::Continue,
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> EditCursor {
        self.cursor
    }

    /// Status line shown instead of the hint after a save attempt.
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

impl Default for NotepadApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the notepad until the user leaves it.
pub fn run<P: ShellPlatform>(platform: &mut P, log: &mut EventLog) {
    let mut app = NotepadApp::new();

    let time = platform.clock().now();
    let console = platform.console();
    console.clear(styles::NORMAL);
    chrome::draw_topbar(console, time);
    chrome::draw_window(console, WINDOW, TITLE, styles::WINDOW);

    loop {
        app.draw_content(platform.console());
        let key = platform.keys().read_key();
        match app.handle_key(key) {
            NotepadAction::Continue => {}
            NotepadAction::Exit => return,
            NotepadAction::Save => {
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FakePlatform;

    #[test]
    fn test_typing_advances_cursor() {
        let mut app = NotepadApp::new();

        assert_eq!(app.handle_key(KeyEvent::Printable('h')), NotepadAction::Continue);
        assert_eq!(app.handle_key(KeyEvent::Printable('i')), NotepadAction::Continue);

        assert_eq!(app.buffer().line(0), Some("hi"));
        assert_eq!(app.cursor(), EditCursor::new(0, 2));
    }

    #[test]
    fn test_enter_opens_new_line() {
        let mut app = NotepadApp::new();
        app.handle_key(KeyEvent::Printable('a'));
        app.handle_key(KeyEvent::Named(NamedKey::Enter));
        app.handle_key(KeyEvent::Printable('b'));

        assert_eq!(app.buffer().line(0), Some("a"));
        assert_eq!(app.buffer().line(1), Some("b"));
        assert_eq!(app.cursor(), EditCursor::new(1, 1));
    }

    #[test]
    fn test_backspace_erases_last_glyph() {
        let mut app = NotepadApp::new();
        app.handle_key(KeyEvent::Printable('a'));
        app.handle_key(KeyEvent::Printable('b'));
        app.handle_key(KeyEvent::Named(NamedKey::Backspace));

        assert_eq!(app.buffer().line(0), Some("a"));
        assert_eq!(app.cursor(), EditCursor::new(0, 1));
    }

    #[test]
    fn test_escape_exits_and_f2_saves() {
        let mut app = NotepadApp::new();

        assert_eq!(
            app.handle_key(KeyEvent::Named(NamedKey::Escape)),
            NotepadAction::Exit
        );
        assert_eq!(
            app.handle_key(KeyEvent::Named(NamedKey::F2)),
            NotepadAction::Save
        );
    }

    #[test]
    fn test_arrow_keys_are_ignored() {
        let mut app = NotepadApp::new();
        app.handle_key(KeyEvent::Printable('x'));

        assert_eq!(
            app.handle_key(KeyEvent::Named(NamedKey::Left)),
            NotepadAction::Continue
        );
        assert_eq!(app.buffer().line(0), Some("x"));
        assert_eq!(app.cursor(), EditCursor::new(0, 1));
    }

    #[test]
    fn test_run_types_saves_and_exits() {
        let mut fake = FakePlatform::new();
        let mut log = EventLog::new(16);
        fake.script_text("hi");
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);

        run(&mut fake, &mut log);

        assert_eq!(fake.file_lines(DOC_PATH), Some(vec!["hi".to_string()]));
        let row: String = fake.grid().row_text(4).chars().skip(12).take(2).collect();
        assert_eq!(row, "hi");
        assert!(!fake.script_exhausted());
    }

    #[test]
    fn test_run_reports_save_status_inline() {
        let mut fake = FakePlatform::new();
        let mut log = EventLog::new(16);
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);

        run(&mut fake, &mut log);

        let hint: String = fake
            .grid()
            .row_text(HINT_Y)
            .chars()
            .skip(TEXT_X)
            .take(SAVED_TEXT.len())
            .collect();
        assert_eq!(hint, SAVED_TEXT);
        assert_eq!(log.latest().map(|e| e.message.as_str()), Some("document saved"));
    }

    #[test]
    fn test_run_without_storage_reports_failure() {
        let mut fake = FakePlatform::without_storage();
        let mut log = EventLog::new(16);
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);

        run(&mut fake, &mut log);

        let hint: String = fake
            .grid()
            .row_text(HINT_Y)
            .chars()
            .skip(TEXT_X)
            .take(SAVE_FAILED_TEXT.len())
            .collect();
        assert_eq!(hint, SAVE_FAILED_TEXT);
        let entry = log.latest().unwrap();
        assert_eq!(entry.message, "save failed");
        assert_eq!(entry.field("reason"), Some("storage capability absent"));
    }

    #[test]
    fn test_run_draws_window_and_hint() {
        let mut fake = FakePlatform::new();
        let mut log = EventLog::new(16);
        fake.script_named(NamedKey::Escape);

        run(&mut fake, &mut log);

        assert_eq!(fake.grid().glyph_at(10, 3), Some('\u{256d}'));
        assert!(fake.grid().row_text(3).contains(" Notepad "));
        assert!(fake.grid().row_text(HINT_Y).contains(HINT_TEXT));
        assert_eq!(fake.caret(), Some((TEXT_X, TEXT_Y)));
    }
}
