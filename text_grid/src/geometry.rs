//! # Geometry Module
//!
//! Rectangles in character coordinates, used for window placement on the grid.
//!
//! ## Philosophy
//!
//! - **Text-mode only**: No pixel units anywhere
//! - **Deterministic layout**: Same inputs, same rectangles
//! - **Borders are cells**: A window's interior is the rectangle inset by one cell

/// Rectangle in character coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Create a rectangle
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Check if a position is inside this rectangle
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The rectangle inset by one cell on every side
    ///
    /// Degenerate rectangles (too small to have an interior) collapse to a
    /// zero-sized rectangle at the same origin offset.
    pub fn interior(&self) -> Rect {
        if self.width < 2 || self.height < 2 {
            return Rect::new(self.x + 1, self.y + 1, 0, 0);
        }
        Rect::new(self.x + 1, self.y + 1, self.width - 2, self.height - 2)
    }

    /// Get the area of the rectangle in cells
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}
