#![cfg_attr(not(test), no_std)]

//! # Donut Render
//!
//! Ray-projected spinning torus for the GlyphOS donut application.
//!
//! ## Philosophy
//!
//! - **Pure math, fixed frame**: A frame is a function of two angles, nothing else
//! - **Depth-buffered**: Nearer samples win by strictly greater inverse depth
//! - **Deterministic**: Same angles give the same frame, cell for cell
//!
//! ## Non-Goals
//!
//! - Pixel graphics or shading beyond the 12-glyph luminance ramp
//! - Pacing and input (the hosting application owns its loop)

extern crate alloc;

use alloc::string::String;
use libm::{cosf, sinf};

/// Frame dimensions in glyph cells
pub const FRAME_WIDTH: usize = 80;
pub const FRAME_HEIGHT: usize = 22;

/// Luminance ramp, dimmest to brightest
pub const LUMINANCE_RAMP: &[u8; 12] = b".,-~:;=!*#$@";

/// Per-frame rotation increments
pub const A_STEP: f32 = 0.04;
pub const B_STEP: f32 = 0.02;

const TAU: f32 = 6.28;
const THETA_STEP: f32 = 0.07;
const PHI_STEP: f32 = 0.02;

/// One rendered frame: glyphs plus the inverse-depth buffer that chose them
pub struct DonutFrame {
    glyphs: [u8; FRAME_WIDTH * FRAME_HEIGHT],
    depth: [f32; FRAME_WIDTH * FRAME_HEIGHT],
}

impl DonutFrame {
    fn new() -> Self {
        Self {
            glyphs: [b' '; FRAME_WIDTH * FRAME_HEIGHT],
            depth: [0.0; FRAME_WIDTH * FRAME_HEIGHT],
        }
    }

    /// Record a sample, keeping the nearer of the old and new cell
    ///
    /// Only a strictly greater inverse depth overwrites. Returns whether the
    /// sample was kept.
    fn plot(&mut self, x: usize, y: usize, inv_depth: f32, ramp_index: usize) -> bool {
        let at = y * FRAME_WIDTH + x;
        if inv_depth > self.depth[at] {
            self.depth[at] = inv_depth;
            self.glyphs[at] = LUMINANCE_RAMP[ramp_index];
            true
        } else {
            false
        }
    }

    /// Glyph at a frame position, `None` out of bounds
    pub fn glyph_at(&self, x: usize, y: usize) -> Option<char> {
        if x >= FRAME_WIDTH || y >= FRAME_HEIGHT {
            return None;
        }
        Some(self.glyphs[y * FRAME_WIDTH + x] as char)
    }

    /// Inverse depth recorded at a position; 0.0 where nothing was drawn
    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        if x >= FRAME_WIDTH || y >= FRAME_HEIGHT {
            return None;
        }
        Some(self.depth[y * FRAME_WIDTH + x])
    }

    /// A full frame row as text; rows past the bottom read back as empty
    pub fn row_text(&self, y: usize) -> String {
        if y >= FRAME_HEIGHT {
            return String::new();
        }
        self.glyphs[y * FRAME_WIDTH..(y + 1) * FRAME_WIDTH]
            .iter()
            .map(|&b| b as char)
            .collect()
    }
}

/// The spinning torus: two accumulated rotation angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutScene {
    a: f32,
    b: f32,
}

impl DonutScene {
    /// A scene with both rotations at zero
    pub fn new() -> Self {
        Self { a: 0.0, b: 0.0 }
    }

    /// A scene at explicit angles
    pub fn with_angles(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.a, self.b)
    }

    /// Advance both rotations by their fixed per-frame increments
    pub fn advance(&mut self) {
        self.a += A_STEP;
        self.b += B_STEP;
    }

    /// Render the torus at the current angles
    ///
    /// The surface is sampled as a unit-radius tube swept around a ring of
    /// radius 2, rotated by the two angles, and projected from a camera 5
    /// units back. Each kept sample maps its surface luminance onto the
    /// glyph ramp.
    pub fn render(&self) -> DonutFrame {
        let mut frame = DonutFrame::new();

        let sin_a = sinf(self.a);
        let cos_a = cosf(self.a);
        let sin_b = sinf(self.b);
        let cos_b = cosf(self.b);

        let mut theta = 0.0_f32;
        while theta < TAU {
            let sin_theta = sinf(theta);
            let cos_theta = cosf(theta);
            // Distance of this tube point from the torus axis.
            let ring = cos_theta + 2.0;

            let mut phi = 0.0_f32;
            while phi < TAU {
                let sin_phi = sinf(phi);
                let cos_phi = cosf(phi);

                // The denominator stays within [1, 9]: the camera never
                // touches the surface.
                let inv_depth = 1.0 / (sin_phi * ring * sin_a + sin_theta * cos_a + 5.0);
                let swept = sin_phi * ring * cos_a - sin_theta * sin_a;

                let x = (40.0 + 30.0 * inv_depth * (cos_phi * ring * cos_b - swept * sin_b)) as i32;
                let y = (12.0 + 15.0 * inv_depth * (cos_phi * ring * sin_b + swept * cos_b)) as i32;

                // Surface normal dotted with the light direction, spread
                // over the ramp.
                let luminance = 8.0
                    * ((sin_theta * sin_a - sin_phi * cos_theta * cos_a) * cos_b
                        - sin_phi * cos_theta * sin_a
                        - sin_theta * cos_a
                        - cos_phi * cos_theta * sin_b);

                if x > 0 && x < FRAME_WIDTH as i32 && y > 0 && y < FRAME_HEIGHT as i32 {
                    let ramp_index =
                        (luminance as i32).clamp(0, LUMINANCE_RAMP.len() as i32 - 1) as usize;
                    frame.plot(x as usize, y as usize, inv_depth, ramp_index);
                }

                phi += PHI_STEP;
            }
            theta += THETA_STEP;
        }

        frame
    }
}

impl Default for DonutScene {
    fn default() -> Self {
        Self::new()
    }
}
