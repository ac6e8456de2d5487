//! # Text Grid
//!
//! This crate provides the 80x25 styled cell grid the GlyphOS shell draws into.
//!
//! ## Philosophy
//!
//! This is NOT a terminal emulator. No ANSI escape codes, no scrolling, no TTY
//! model. It's a deterministic cell matrix: same writes, same cells.
//!
//! ## Design Principles
//!
//! 1. **Minimal and deterministic**: Fixed 80x25 text with per-cell styles
//! 2. **Bounds-checked primitives**: Out-of-range writes report `false` instead of wrapping
//! 3. **No wrapping**: A text run is clipped at the right edge, never continued
//! 4. **Readable back**: Rows can be read out for rendering and assertions

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

pub mod geometry;

pub use geometry::Rect;

/// Text mode dimensions
pub const GRID_WIDTH: usize = 80;
pub const GRID_HEIGHT: usize = 25;

/// Firmware text palette color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Foreground/background color pair applied to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
}

impl Style {
    /// Create a style from foreground and background colors
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Color::LightGray, Color::Black)
    }
}

/// A single grid cell: one glyph plus its style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub style: Style,
}

impl Cell {
    /// Create a cell
    pub const fn new(glyph: char, style: Style) -> Self {
        Self { glyph, style }
    }

    /// A space cell in the given style
    pub const fn blank(style: Style) -> Self {
        Self::new(' ', style)
    }
}

/// Fixed-size styled text grid
///
/// The grid owns `GRID_WIDTH * GRID_HEIGHT` cells. All write primitives are
/// bounds-checked; callers treat an out-of-bounds write as their own bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    cells: Vec<Cell>,
}

impl TextGrid {
    /// Create a grid cleared to the default style
    pub fn new() -> Self {
        let mut grid = Self { cells: Vec::new() };
        grid.cells
            .resize(GRID_WIDTH * GRID_HEIGHT, Cell::blank(Style::default()));
        grid
    }

    /// Clear every cell to a space in the given style
    pub fn clear(&mut self, style: Style) {
        for cell in &mut self.cells {
            *cell = Cell::blank(style);
        }
    }

    /// Write a single glyph at the given column and row
    ///
    /// Returns true if the glyph was written (within bounds)
    pub fn put(&mut self, x: usize, y: usize, glyph: char, style: Style) -> bool {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return false;
        }
        self.cells[y * GRID_WIDTH + x] = Cell::new(glyph, style);
        true
    }

    /// Write a run of glyphs starting at the given column and row
    ///
    /// The run is clipped at the right edge and never wraps to the next row.
    /// Returns the number of glyphs actually written.
    pub fn write_text(&mut self, x: usize, y: usize, style: Style, text: &str) -> usize {
        if y >= GRID_HEIGHT {
            return 0;
        }
        let mut written = 0;
        for (i, glyph) in text.chars().enumerate() {
            if !self.put(x + i, y, glyph, style) {
                break;
            }
            written += 1;
        }
        written
    }

    /// Read a cell, `None` when out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return None;
        }
        Some(&self.cells[y * GRID_WIDTH + x])
    }

    /// The glyph at a position, `None` when out of bounds
    pub fn glyph_at(&self, x: usize, y: usize) -> Option<char> {
        self.cell(x, y).map(|c| c.glyph)
    }

    /// The style at a position, `None` when out of bounds
    pub fn style_at(&self, x: usize, y: usize) -> Option<Style> {
        self.cell(x, y).map(|c| c.style)
    }

    /// A full row's glyphs as a string (styles dropped)
    ///
    /// Rows past the bottom read back as empty.
    pub fn row_text(&self, y: usize) -> String {
        let mut row = String::new();
        if y >= GRID_HEIGHT {
            return row;
        }
        for x in 0..GRID_WIDTH {
            row.push(self.cells[y * GRID_WIDTH + x].glyph);
        }
        row
    }
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}
