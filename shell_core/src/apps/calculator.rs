//! Calculator: a one-line expression pad over the left-to-right evaluator.
//!
//! Only digits and the four operator glyphs reach the input line; anything
//! else is dropped at the keyboard. Enter evaluates, shows the result, and
//! clears the input for the next expression.

use event_log::{EventLog, LogEntry, LogLevel};
use input_keys::{KeyEvent, NamedKey};
use text_grid::Rect;

use crate::chrome::{self, styles};
use crate::platform::{ShellPlatform, TextConsole};

const WINDOW: Rect = Rect::new(15, 6, 50, 12);
const TITLE: &str = " Calculator ";
const PROMPT_TEXT: &str = "Enter expression (e.g., 5+3*2):";
const HINT_TEXT: &str = "ENTER=Calculate, ESC=Exit";

const PROMPT_X: usize = 17;
const PROMPT_Y: usize = 8;
const INPUT_Y: usize = 10;
const RESULT_Y: usize = 12;
const HINT_Y: usize = 15;
const VISIBLE_COLS: usize = 46;

/// Longest accepted expression, in glyphs.
pub const MAX_INPUT: usize = 127;

/// What one key press asked of the calculator loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcAction {
    /// Keep collecting input.
    Continue,
    /// Enter was pressed and a result is ready.
    Evaluated,
    /// Return to the menu.
    Exit,
}

/// Calculator state: the pending input line and the last result.
pub struct CalculatorApp {
    input: String,
    result: Option<i64>,
}

impl CalculatorApp {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            result: None,
        }
    }

    /// Pure key transition. Evaluation itself is pure, so it happens here.
    pub fn handle_key(&mut self, key: KeyEvent) -> CalcAction {
        match key {
            KeyEvent::Named(NamedKey::Escape) => CalcAction::Exit,
            KeyEvent::Named(NamedKey::Enter) => {
                self.result = Some(calc_core::evaluate(&self.input));
                self.input.clear();
                CalcAction::Evaluated
            }
            KeyEvent::Named(NamedKey::Backspace) => {
                self.input.pop();
                CalcAction::Continue
            }
            KeyEvent::Printable(c) if is_expression_char(c) => {
                if self.input.len() < MAX_INPUT {
                    self.input.push(c);
                }
                CalcAction::Continue
            }
            _ => CalcAction::Continue,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> Option<i64> {
        self.result
    }

    fn draw_content(&self, console: &mut dyn TextConsole) {
        let input = super::pad_to_width(&self.input, VISIBLE_COLS);
        console.write_text(PROMPT_X, INPUT_Y, styles::NORMAL, &input);

        let result = match self.result {
            Some(value) => format!("Result: {value}"),
            None => String::new(),
        };
        let result = super::pad_to_width(&result, VISIBLE_COLS);
        console.write_text(PROMPT_X, RESULT_Y, styles::NORMAL, &result);

        console.set_cursor(PROMPT_X + self.input.len(), INPUT_Y);
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

fn is_expression_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/')
}

/// Run the calculator until the user leaves it.
pub fn run<P: ShellPlatform>(platform: &mut P, log: &mut EventLog) {
    let mut app = CalculatorApp::new();

    let time = platform.clock().now();
    let console = platform.console();
    console.clear(styles::NORMAL);
    chrome::draw_topbar(console, time);
    chrome::draw_window(console, WINDOW, TITLE, styles::WINDOW);
    console.write_text(PROMPT_X, PROMPT_Y, styles::NORMAL, PROMPT_TEXT);
    console.write_text(PROMPT_X, HINT_Y, styles::NORMAL, HINT_TEXT);

    loop {
        app.draw_content(platform.console());
        let key = platform.keys().read_key();
        match app.handle_key(key) {
            CalcAction::Continue => {}
            CalcAction::Exit => return,
            CalcAction::Evaluated => {
                if let Some(value) = app.result() {
                    log.record(
                        LogEntry::new(LogLevel::Debug, "expression evaluated")
                            .with_field("result", value.to_string()),
                    );
                }
            }
        }
    }
}
