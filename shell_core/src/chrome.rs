//! Screen furniture: the top status bar, the dock, rounded window frames,
//! and the farewell screen.
//!
//! Window frames draw borders and a centered title only. The interior keeps
//! whatever the last clear left there, so applications paint their own
//! content without fighting the chrome.

use text_grid::{Rect, Style, GRID_WIDTH};

use crate::platform::{ClockTime, TextConsole};

/// Style presets for the stock screen elements.
pub mod styles {
    use text_grid::{Color, Style};

    /// Default text: light gray on black.
    pub const NORMAL: Style = Style::new(Color::LightGray, Color::Black);
    /// Top status bar: inverted.
    pub const TOPBAR: Style = Style::new(Color::Black, Color::LightGray);
    /// Dock hotkeys: yellow on black.
    pub const HIGHLIGHT: Style = Style::new(Color::Yellow, Color::Black);
    /// Window borders and titles: white on blue.
    pub const WINDOW: Style = Style::new(Color::White, Color::Blue);
}

/// Row reserved for the dock hotkey line.
pub const DOCK_ROW: usize = 23;

const TOPBAR_TEXT: &str = "GlyphOS  \u{2022}  Activities  \u{2022}  Files  \u{2022}  Apps";
const DOCK_TEXT: &str = "[N]otepad  [C]alc  [E]ditor  [D]onut  [Q]uit";
const FAREWELL_TEXT: &str = "Goodbye from GlyphOS!";
const CLOCK_X: usize = 60;

/// Draw the full-width top bar with the product strip and the clock.
pub fn draw_topbar(console: &mut dyn TextConsole, time: ClockTime) {
    let blank = " ".repeat(GRID_WIDTH);
    console.write_text(0, 0, styles::TOPBAR, &blank);
    console.write_text(1, 0, styles::TOPBAR, TOPBAR_TEXT);
    console.write_text(CLOCK_X, 0, styles::TOPBAR, &time.to_string());
}

/// Draw the dock hotkey line.
pub fn draw_dock(console: &mut dyn TextConsole) {
    console.write_text(2, DOCK_ROW, styles::HIGHLIGHT, DOCK_TEXT);
}

/// Draw a rounded window frame with a centered title.
///
/// Degenerate rectangles (under 2x2) draw nothing. A title wider than the
/// frame is skipped rather than spilled across the border.
pub fn draw_window(console: &mut dyn TextConsole, bounds: Rect, title: &str, style: Style) {
    if bounds.width < 2 || bounds.height < 2 {
        return;
    }

    let mut top = String::new();
    top.push('\u{256d}');
    for _ in 0..bounds.width - 2 {
        top.push('\u{2500}');
    }
    top.push('\u{256e}');
    console.write_text(bounds.x, bounds.y, style, &top);

    let title_len = title.chars().count();
    if title_len > 0 && title_len + 2 <= bounds.width {
        let title_x = bounds.x + (bounds.width - title_len) / 2;
        console.write_text(title_x, bounds.y, style, title);
    }

    for row in bounds.y + 1..bounds.bottom() - 1 {
        console.write_text(bounds.x, row, style, "\u{2502}");
        console.write_text(bounds.right() - 1, row, style, "\u{2502}");
    }

    let mut bottom = String::new();
    bottom.push('\u{2570}');
    for _ in 0..bounds.width - 2 {
        bottom.push('\u{2500}');
    }
    bottom.push('\u{256f}');
    console.write_text(bounds.x, bounds.bottom() - 1, style, &bottom);
}

/// Clear the screen and print the farewell line.
pub fn draw_farewell(console: &mut dyn TextConsole) {
    console.clear(styles::NORMAL);
    console.write_text(0, 0, styles::NORMAL, FAREWELL_TEXT);
    console.set_cursor(0, 1);
}
