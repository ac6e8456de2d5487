//! Donut: the spinning torus, paced at twenty frames per second.
//!
//! The only application that polls instead of blocking: every frame checks
//! for Escape, renders, blits the frame centered into the window interior,
//! advances the rotation, and sleeps. Keys other than Escape are consumed
//! and ignored.

use donut_render::{DonutFrame, DonutScene, FRAME_HEIGHT, FRAME_WIDTH};
use event_log::{EventLog, LogEntry, LogLevel};
use input_keys::NamedKey;
use text_grid::Rect;

use crate::chrome::{self, styles};
use crate::platform::{ShellPlatform, TextConsole};

const WINDOW: Rect = Rect::new(5, 2, 70, 21);
const TITLE: &str = " Donut Animation ";
const HINT_TEXT: &str = "Press ESC to exit";
const HINT_X: usize = 7;
const HINT_Y: usize = 22;

/// Delay between frames, roughly 20 frames per second.
pub const FRAME_MS: u64 = 50;

/// Run the animation until Escape is pressed.
pub fn run<P: ShellPlatform>(platform: &mut P, log: &mut EventLog) {
    let time = platform.clock().now();
    let console = platform.console();
    console.clear(styles::NORMAL);
    chrome::draw_topbar(console, time);
    chrome::draw_window(console, WINDOW, TITLE, styles::WINDOW);
    console.write_text(HINT_X, HINT_Y, styles::NORMAL, HINT_TEXT);

    let mut scene = DonutScene::new();
    let mut frames: u64 = 0;

    loop {
        if let Some(key) = platform.keys().poll_key() {
            if key.is_named(NamedKey::Escape) {
                break;
            }
        }

        let frame = scene.render();
        blit_frame(platform.console(), &frame);
        scene.advance();
        frames += 1;
        platform.pacer().sleep_ms(FRAME_MS);
    }

    log.record(LogEntry::new(LogLevel::Debug, "donut stopped").with_field("frames", frames.to_string()));
}

/// Copy the frame into the window interior, centered and clipped.
fn blit_frame(console: &mut dyn TextConsole, frame: &DonutFrame) {
    let interior = WINDOW.interior();
    let col_skip = (FRAME_WIDTH - interior.width) / 2;
    let row_skip = (FRAME_HEIGHT - interior.height) / 2;
    for row in 0..interior.height {
        let line: String = frame
            .row_text(row + row_skip)
            .chars()
            .skip(col_skip)
            .take(interior.width)
            .collect();
        console.write_text(interior.x, interior.y + row, styles::NORMAL, &line);
    }
}
