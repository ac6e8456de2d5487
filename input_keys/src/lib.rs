#![no_std]

//! # Input Keys
//!
//! This crate defines the key event types for the GlyphOS shell.
//!
//! ## Philosophy
//!
//! - **Events, not bytes**: Applications consume decoded key events, never raw firmware records
//! - **Small on purpose**: Only the keys the shell actually dispatches on are named
//! - **Testable**: Events are serializable and can be scripted for tests
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A scan-code table for PS/2 or USB HID hardware
//! - Modifier or key-release tracking (the firmware reports decoded presses only)
//! - A complete input subsystem (just the types)

#[cfg(test)]
extern crate alloc;

use core::fmt;
use serde::{Deserialize, Serialize};

/// Firmware scan-code assignments for the non-printing keys the shell consumes.
///
/// These match the simple text input protocol: printing keys arrive with a
/// zero scan code and a UTF-16 unit instead.
pub mod scan {
    pub const UP: u16 = 0x01;
    pub const DOWN: u16 = 0x02;
    pub const RIGHT: u16 = 0x03;
    pub const LEFT: u16 = 0x04;
    pub const F2: u16 = 0x0C;
    pub const F3: u16 = 0x0D;
    pub const ESCAPE: u16 = 0x17;
}

/// Raw key record as reported by the firmware's text input protocol.
///
/// A record carries a scan code for non-printing keys and a UTF-16 unit for
/// printing ones; at most one of the two is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawKey {
    /// Scan code for non-printing keys; zero for printing keys.
    pub scan_code: u16,
    /// UTF-16 unit for printing keys, carriage return, and backspace.
    pub unicode: u16,
}

impl RawKey {
    /// Creates a raw record from a scan code and a UTF-16 unit.
    pub fn new(scan_code: u16, unicode: u16) -> Self {
        Self { scan_code, unicode }
    }

    /// Creates a record for a non-printing key.
    pub fn from_scan(scan_code: u16) -> Self {
        Self::new(scan_code, 0)
    }

    /// Creates a record for a printing key.
    pub fn from_unicode(unicode: u16) -> Self {
        Self::new(0, unicode)
    }
}

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    /// A visible character in the range U+0020..=U+007E.
    Printable(char),
    /// A control or navigation key.
    Named(NamedKey),
}

/// Non-printing keys the shell dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedKey {
    Escape,
    Enter,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    F2,
    F3,
}

impl KeyEvent {
    /// Wraps a character if it is in the visible range, `None` otherwise.
    pub fn from_char(c: char) -> Option<Self> {
        if ('\u{20}'..='\u{7e}').contains(&c) {
            Some(Self::Printable(c))
        } else {
            None
        }
    }

    /// Decodes a firmware key record.
    ///
    /// The scan code is consulted first; a record that names neither a known
    /// scan code nor a usable UTF-16 unit decodes to `None` and is dropped by
    /// the caller.
    pub fn from_raw(raw: RawKey) -> Option<Self> {
        match raw.scan_code {
            scan::UP => Some(Self::Named(NamedKey::Up)),
            scan::DOWN => Some(Self::Named(NamedKey::Down)),
            scan::RIGHT => Some(Self::Named(NamedKey::Right)),
            scan::LEFT => Some(Self::Named(NamedKey::Left)),
            scan::F2 => Some(Self::Named(NamedKey::F2)),
            scan::F3 => Some(Self::Named(NamedKey::F3)),
            scan::ESCAPE => Some(Self::Named(NamedKey::Escape)),
            _ => match raw.unicode {
                0x000D => Some(Self::Named(NamedKey::Enter)),
                0x0008 => Some(Self::Named(NamedKey::Backspace)),
                0x0020..=0x007E => Some(Self::Printable(raw.unicode as u8 as char)),
                _ => None,
            },
        }
    }

    /// Returns true if this is a printable character event.
    pub fn is_printable(&self) -> bool {
        matches!(self, Self::Printable(_))
    }

    /// Returns the character if this is a printable event.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Printable(c) => Some(*c),
            Self::Named(_) => None,
        }
    }

    /// Returns true if this event is the given named key.
    pub fn is_named(&self, key: NamedKey) -> bool {
        matches!(self, Self::Named(k) if *k == key)
    }
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Printable(c) => write!(f, "'{}'", c),
            Self::Named(key) => write!(f, "{}", key),
        }
    }
}
