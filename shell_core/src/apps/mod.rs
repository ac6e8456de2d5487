//! The four applications the shell dispatches to.
//!
//! Each application is a state struct with a pure `handle_key` transition
//! returning an action enum, a content drawer, and a `run` loop that owns
//! the platform for as long as the application is active. The loops perform
//! every save and load; the state structs never touch a capability.

pub mod calculator;
pub mod donut;
pub mod editor;
pub mod notepad;

pub use calculator::{CalcAction, CalculatorApp};
pub use editor::{EditorAction, EditorApp};
pub use notepad::{NotepadAction, NotepadApp};

use crate::platform::{FileStore, StorageError};

/// Truncate `text` to `width` glyphs and pad the remainder with blanks.
///
/// Fixed-width rows overwrite stale glyphs without a full-screen clear.
pub(crate) fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars().take(width) {
        out.push(c);
        used += 1;
    }
    for _ in used..width {
        out.push(' ');
    }
    out
}

/// Write a document, treating absent storage as an error.
pub(crate) fn store_document(
    storage: Option<&mut dyn FileStore>,
    path: &str,
    lines: &[String],
) -> Result<(), StorageError> {
    match storage {
        Some(store) => store.write_lines(path, lines),
        None => Err(StorageError::Unavailable),
    }
}

/// Read a document, treating absent storage as an error.
pub(crate) fn load_document(
    storage: Option<&mut dyn FileStore>,
    path: &str,
) -> Result<Vec<String>, StorageError> {
    match storage {
        Some(store) => store.read_lines(path),
        None => Err(StorageError::Unavailable),
    }
}
