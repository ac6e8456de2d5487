//! Platform capability traits for the shell.
//!
//! The shell never talks to hardware or an OS directly. Everything it needs
//! from the outside world is expressed as a small trait here, and a
//! [`ShellPlatform`] bundles one implementation of each. Hosts bind real
//! consoles and clocks; tests bind the in-memory fakes from [`fake`].
//!
//! Storage is deliberately optional. A host that cannot reach a writable
//! volume still runs the full shell; saves fail inline and editing goes on.

pub mod fake;

pub use fake::FakePlatform;

use core::fmt;

use input_keys::KeyEvent;
use text_grid::Style;
use thiserror::Error;

/// Wall-clock time of day, as read from the platform clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Failure reported by a [`FileStore`] operation.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage capability absent")]
    Unavailable,
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("device error: {0}")]
    Device(String),
}

/// Styled text output to the 80x25 cell grid.
pub trait TextConsole {
    /// Reset every cell to a blank in the given style.
    fn clear(&mut self, style: Style);

    /// Write a run of glyphs starting at `(x, y)`.
    ///
    /// Output is clipped at the right edge and never wraps. Returns the
    /// number of glyphs written.
    fn write_text(&mut self, x: usize, y: usize, style: Style, text: &str) -> usize;

    /// Move the visible caret. Out-of-range positions are ignored.
    fn set_cursor(&mut self, x: usize, y: usize);
}

/// Keyboard input.
pub trait KeySource {
    /// Block until the next recognized key press.
    fn read_key(&mut self) -> KeyEvent;

    /// Return a pending key press without blocking.
    fn poll_key(&mut self) -> Option<KeyEvent>;
}

/// Time-of-day source for the status bar clock.
pub trait WallClock {
    fn now(&mut self) -> ClockTime;
}

/// Persistent document storage, keyed by path.
///
/// Lines are stored and retrieved as whole documents. The byte layout on
/// the backing medium is the codec's concern, not the caller's.
pub trait FileStore {
    fn write_lines(&mut self, path: &str, lines: &[String]) -> Result<(), StorageError>;

    fn read_lines(&mut self, path: &str) -> Result<Vec<String>, StorageError>;
}

/// Frame pacing for animations.
pub trait FramePacer {
    fn sleep_ms(&mut self, millis: u64);
}

/// One platform: a console, a key source, a clock, a pacer, and possibly
/// a file store.
///
/// Accessors borrow mutably so implementations can own their capabilities
/// directly; callers take one capability at a time.
pub trait ShellPlatform {
    fn console(&mut self) -> &mut dyn TextConsole;

    fn keys(&mut self) -> &mut dyn KeySource;

    fn clock(&mut self) -> &mut dyn WallClock;

    /// `None` means the storage capability was never granted.
    fn storage(&mut self) -> Option<&mut dyn FileStore>;

    fn pacer(&mut self) -> &mut dyn FramePacer;
}
