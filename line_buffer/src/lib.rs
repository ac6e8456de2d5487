#![no_std]

//! # Line Buffer
//!
//! Bounded line-oriented text model shared by the GlyphOS notepad and editor.
//!
//! ## Philosophy
//!
//! - **Fixed capacity**: 100 lines of 255 characters; overflow is silently dropped
//! - **Never shrinks**: Line usage only grows; content is truncated, never removed
//! - **Explicit cursor**: The caller owns the cursor and passes it into every edit
//! - **Deterministic**: Same edits give the same buffer; snapshots hash identically
//!
//! ## Non-Goals
//!
//! - Scrolling or viewports (hosts decide what to show)
//! - Line merging on backspace at column zero (a kept limitation)
//! - Undo, search, or selections

extern crate alloc;

pub mod buffer;
pub mod codec;
pub mod snapshot;

pub use buffer::{EditCursor, LineBuffer, MAX_LINES, MAX_LINE_LEN};
pub use snapshot::BufferSnapshot;
