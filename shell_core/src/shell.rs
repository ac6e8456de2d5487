//! The shell state machine: one menu, four applications, one exit.
//!
//! The menu owns the screen and the keyboard until a hotkey hands them to
//! an application; the application's `run` loop hands them back when it
//! returns. Termination is the only absorbing state and is reached from
//! the menu alone.

use event_log::{EventLog, LogEntry, LogLevel};
use input_keys::{KeyEvent, NamedKey};
use serde::{Deserialize, Serialize};
use text_grid::Rect;

use crate::apps;
use crate::chrome::{self, styles};
use crate::platform::ShellPlatform;

const MENU_WINDOW: Rect = Rect::new(25, 8, 30, 10);
const MENU_TITLE: &str = " Main Menu ";
const MENU_ITEM_X: usize = 27;
const MENU_ITEM_Y: usize = 10;
const MENU_ITEMS: [&str; 5] = [
    "[N] Notepad",
    "[C] Calculator",
    "[E] Editor",
    "[D] Donut Animation",
    "[Q] Quit to Firmware",
];

// The overlay cursor roams between the top bar and the dock.
const CURSOR_MIN_Y: usize = 1;
const CURSOR_MAX_Y: usize = 23;
const CURSOR_MAX_X: usize = 79;

/// Top-level shell states. One is active at a time; `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellState {
    Menu,
    Notepad,
    Calculator,
    Editor,
    Donut,
    Terminated,
}

impl ShellState {
    /// Stable lowercase label for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            ShellState::Menu => "menu",
            ShellState::Notepad => "notepad",
            ShellState::Calculator => "calculator",
            ShellState::Editor => "editor",
            ShellState::Donut => "donut",
            ShellState::Terminated => "terminated",
        }
    }
}

/// Outcome of one menu key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Keep showing the menu.
    Stay,
    /// Hand the screen to an application.
    Launch(ShellState),
    /// Leave the shell.
    Quit,
}

/// Free-roaming menu cursor, drawn as `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayCursor {
    pub x: usize,
    pub y: usize,
}

impl OverlayCursor {
    /// Starts at the screen center.
    pub const fn new() -> Self {
        Self { x: 40, y: 12 }
    }

    /// One step in the arrow direction, clamped to the roaming band.
    pub fn step(&mut self, key: NamedKey) {
        match key {
            NamedKey::Up if self.y > CURSOR_MIN_Y => self.y -= 1,
            NamedKey::Down if self.y < CURSOR_MAX_Y => self.y += 1,
            NamedKey::Left if self.x > 0 => self.x -= 1,
            NamedKey::Right if self.x < CURSOR_MAX_X => self.x += 1,
            _ => {}
        }
    }
}

impl Default for OverlayCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Map one key press to a menu outcome, moving the overlay cursor.
///
/// Hotkeys are case-insensitive. Everything unrecognized stays put.
pub fn menu_transition(key: KeyEvent, cursor: &mut OverlayCursor) -> MenuOutcome {
    match key {
        KeyEvent::Named(named) => {
            cursor.step(named);
            MenuOutcome::Stay
        }
        KeyEvent::Printable(c) => match c.to_ascii_lowercase() {
            'n' => MenuOutcome::Launch(ShellState::Notepad),
            'c' => MenuOutcome::Launch(ShellState::Calculator),
            'e' => MenuOutcome::Launch(ShellState::Editor),
            'd' => MenuOutcome::Launch(ShellState::Donut),
            'q' => MenuOutcome::Quit,
            _ => MenuOutcome::Stay,
        },
    }
}

/// The application shell.
pub struct Shell {
    state: ShellState,
    cursor: OverlayCursor,
    log: EventLog,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            state: ShellState::Menu,
            cursor: OverlayCursor::new(),
            log: EventLog::new(64),
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn cursor(&self) -> OverlayCursor {
        self.cursor
    }

    /// Everything the shell recorded while running.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Run until the user quits, then draw the farewell screen.
    pub fn run<P: ShellPlatform>(&mut self, platform: &mut P) {
        self.log
            .record(LogEntry::new(LogLevel::Info, "shell started"));

        loop {
            self.state = match self.state {
                ShellState::Menu => self.run_menu(platform),
                ShellState::Notepad => self.run_app(platform, ShellState::Notepad),
                ShellState::Calculator => self.run_app(platform, ShellState::Calculator),
                ShellState::Editor => self.run_app(platform, ShellState::Editor),
                ShellState::Donut => self.run_app(platform, ShellState::Donut),
                ShellState::Terminated => break,
            };
        }

        chrome::draw_farewell(platform.console());
        self.log
            .record(LogEntry::new(LogLevel::Info, "shell terminated"));
    }

    fn run_menu<P: ShellPlatform>(&mut self, platform: &mut P) -> ShellState {
        loop {
            self.draw_menu(platform);
            let key = platform.keys().read_key();
            match menu_transition(key, &mut self.cursor) {
                MenuOutcome::Stay => {}
                MenuOutcome::Launch(state) => return state,
                MenuOutcome::Quit => {
                    self.log
                        .record(LogEntry::new(LogLevel::Info, "quit requested"));
                    return ShellState::Terminated;
                }
            }
        }
    }

    fn run_app<P: ShellPlatform>(&mut self, platform: &mut P, state: ShellState) -> ShellState {
        self.log.record(
            LogEntry::new(LogLevel::Info, "application entered").with_field("app", state.label()),
        );

        match state {
            ShellState::Notepad => apps::notepad::run(platform, &mut self.log),
            ShellState::Calculator => apps::calculator::run(platform, &mut self.log),
            ShellState::Editor => apps::editor::run(platform, &mut self.log),
            ShellState::Donut => apps::donut::run(platform, &mut self.log),
            ShellState::Menu | ShellState::Terminated => {}
        }

        self.log.record(
            LogEntry::new(LogLevel::Info, "application exited").with_field("app", state.label()),
        );
        ShellState::Menu
    }

    fn draw_menu<P: ShellPlatform>(&mut self, platform: &mut P) {
        let time = platform.clock().now();
        let console = platform.console();
        console.clear(styles::NORMAL);
        chrome::draw_topbar(console, time);
        chrome::draw_window(console, MENU_WINDOW, MENU_TITLE, styles::WINDOW);
        for (index, item) in MENU_ITEMS.iter().enumerate() {
            console.write_text(MENU_ITEM_X, MENU_ITEM_Y + index, styles::NORMAL, item);
        }
        chrome::draw_dock(console);
        console.write_text(self.cursor.x, self.cursor.y, styles::NORMAL, "+");
        console.set_cursor(self.cursor.x, self.cursor.y);
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FakePlatform;

    #[test]
    fn test_hotkeys_launch_apps_case_insensitive() {
        let mut cursor = OverlayCursor::new();

        assert_eq!(
            menu_transition(KeyEvent::Printable('n'), &mut cursor),
            MenuOutcome::Launch(ShellState::Notepad)
        );
        assert_eq!(
            menu_transition(KeyEvent::Printable('N'), &mut cursor),
            MenuOutcome::Launch(ShellState::Notepad)
        );
        assert_eq!(
            menu_transition(KeyEvent::Printable('C'), &mut cursor),
            MenuOutcome::Launch(ShellState::Calculator)
        );
        assert_eq!(
            menu_transition(KeyEvent::Printable('e'), &mut cursor),
            MenuOutcome::Launch(ShellState::Editor)
        );
        assert_eq!(
            menu_transition(KeyEvent::Printable('D'), &mut cursor),
            MenuOutcome::Launch(ShellState::Donut)
        );
        assert_eq!(
            menu_transition(KeyEvent::Printable('q'), &mut cursor),
            MenuOutcome::Quit
        );
    }

    #[test]
    fn test_unrecognized_keys_stay() {
        let mut cursor = OverlayCursor::new();

        assert_eq!(
            menu_transition(KeyEvent::Printable('z'), &mut cursor),
            MenuOutcome::Stay
        );
        assert_eq!(
            menu_transition(KeyEvent::Named(NamedKey::Enter), &mut cursor),
            MenuOutcome::Stay
        );
    }

    #[test]
    fn test_cursor_steps_and_clamps() {
        let mut cursor = OverlayCursor::new();
        assert_eq!((cursor.x, cursor.y), (40, 12));

        for _ in 0..100 {
            cursor.step(NamedKey::Up);
        }
        assert_eq!(cursor.y, CURSOR_MIN_Y);

        for _ in 0..100 {
            cursor.step(NamedKey::Down);
        }
        assert_eq!(cursor.y, CURSOR_MAX_Y);

        for _ in 0..100 {
            cursor.step(NamedKey::Left);
        }
        assert_eq!(cursor.x, 0);

        for _ in 0..100 {
            cursor.step(NamedKey::Right);
        }
        assert_eq!(cursor.x, CURSOR_MAX_X);
    }

    #[test]
    fn test_arrow_moves_overlay_without_launching() {
        let mut cursor = OverlayCursor::new();

        let outcome = menu_transition(KeyEvent::Named(NamedKey::Right), &mut cursor);

        assert_eq!(outcome, MenuOutcome::Stay);
        assert_eq!((cursor.x, cursor.y), (41, 12));
    }

    #[test]
    fn test_quit_terminates_without_reading_more_keys() {
        let mut shell = Shell::new();
        let mut fake = FakePlatform::new();
        fake.script_text("q");

        shell.run(&mut fake);

        assert_eq!(shell.state(), ShellState::Terminated);
        assert!(!fake.script_exhausted());
        assert_eq!(fake.remaining_keys(), 0);
        assert!(fake.grid().row_text(0).starts_with("Goodbye from GlyphOS!"));
    }

    #[test]
    fn test_menu_draws_items_dock_and_overlay() {
        let mut shell = Shell::new();
        let mut fake = FakePlatform::new();
        fake.set_time(10, 20, 30);

        shell.draw_menu(&mut fake);

        assert!(fake.grid().row_text(8).contains(MENU_TITLE));
        for (index, item) in MENU_ITEMS.iter().enumerate() {
            assert!(fake.grid().row_text(MENU_ITEM_Y + index).contains(item));
        }
        assert!(fake.grid().row_text(23).contains("[Q]uit"));
        assert!(fake.grid().row_text(0).contains("10:20:30"));
        assert_eq!(fake.grid().glyph_at(40, 12), Some('+'));
        assert_eq!(fake.caret(), Some((40, 12)));
    }

    #[test]
    fn test_session_log_records_quit() {
        let mut shell = Shell::new();
        let mut fake = FakePlatform::new();
        fake.script_named(NamedKey::Up);
        fake.script_text("q");

        shell.run(&mut fake);

        assert_eq!(shell.log().latest().unwrap().message, "shell terminated");
        assert!(shell.log().iter().any(|e| e.message == "quit requested"));
    }

    #[test]
    fn test_launch_enters_app_and_returns_to_menu() {
        let mut shell = Shell::new();
        let mut fake = FakePlatform::new();
        fake.script_text("c");
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");

        shell.run(&mut fake);

        assert_eq!(shell.state(), ShellState::Terminated);
        let entered: Vec<_> = shell
            .log()
            .iter()
            .filter(|e| e.message == "application entered")
            .filter_map(|e| e.field("app"))
            .collect();
        assert_eq!(entered, vec!["calculator"]);
        assert!(shell.log().iter().any(|e| e.message == "application exited"));
    }

    #[test]
    fn test_states_serialize_to_stable_names() {
        let json = serde_json::to_string(&ShellState::Donut).unwrap();
        assert_eq!(json, "\"Donut\"");
        let back: ShellState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ShellState::Donut);
    }
}
