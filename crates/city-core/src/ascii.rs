//! Luminance-to-character conversion of a downsampled frame.

use thiserror::Error;

use crate::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX};

/// Character ramp ordered dark to bright.
pub const LUMA_RAMP: &[u8; 10] = b" .:-=+*#%@";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AsciiError {
    #[error("pixel buffer holds {actual} bytes, grid needs {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Character-cell dimensions of one ASCII frame. Derived from the viewport
/// and recomputed on every resize; never collapses below 1x1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsciiGrid {
    pub width: u32,
    pub height: u32,
}

impl AsciiGrid {
    pub fn from_viewport(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            width: (viewport_width / CELL_WIDTH_PX).max(1),
            height: (viewport_height / CELL_HEIGHT_PX).max(1),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Rec.601 luma, normalized to [0, 1].
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114) / 255.0
}

/// Map a normalized luminance onto the ramp.
#[inline]
pub fn ramp_char(luma: f32) -> char {
    let last = LUMA_RAMP.len() - 1;
    let idx = ((luma * last as f32).floor() as usize).min(last);
    LUMA_RAMP[idx] as char
}

/// Convert one RGBA frame at grid resolution into text, row-major with a
/// line break per row. The output replaces the previous frame in full.
pub fn frame_to_text(rgba: &[u8], grid: AsciiGrid) -> Result<String, AsciiError> {
    let expected = grid.cell_count() * 4;
    if rgba.len() != expected {
        return Err(AsciiError::BufferSize {
            expected,
            actual: rgba.len(),
        });
    }

    let mut out = String::with_capacity(grid.cell_count() + grid.height as usize);
    for row in rgba.chunks_exact(grid.width as usize * 4) {
        for px in row.chunks_exact(4) {
            out.push(ramp_char(luminance(px[0], px[1], px[2])));
        }
        out.push('\n');
    }
    Ok(out)
}
