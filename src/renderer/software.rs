//! Software (CPU) column renderer.
//!
//! Fills an internal `Vec<u32>` frame-buffer: two-tone ceiling/floor clear,
//! then one flat-shaded pixel column per wall slice, darker for hits on
//! horizontal grid lines so wall faces read as distinct at corners.

use crate::engine::{Side, WallSlice};
use crate::renderer::{Renderer, Rgba};

const CEILING: Rgba = 0xFF_33_33_59;
const FLOOR: Rgba = 0xFF_20_20_28;
const WALL_DIM: Rgba = 0xFF_66_00_B2; // horizontal-line hits
const WALL_LIT: Rgba = 0xFF_99_00_E6; // vertical-line hits

/// Flat-colour column renderer.
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
    /// Pixel width of one ray column (viewport width / ray count).
    col_px: usize,
}

impl Default for Software {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            width: 0,
            height: 0,
            col_px: 1,
        }
    }
}

impl Renderer for Software {
    fn begin_frame(&mut self, width: usize, height: usize, columns: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.scratch.resize(width * height, 0);
        }
        self.col_px = if columns == 0 {
            width.max(1)
        } else {
            (width / columns).max(1)
        };

        let mid = height / 2;
        self.scratch[..mid * width].fill(CEILING);
        self.scratch[mid * width..].fill(FLOOR);
    }

    fn draw_slice(&mut self, slice: &WallSlice) {
        let x0 = slice.column * self.col_px;
        let x1 = ((slice.column + 1) * self.col_px).min(self.width);
        if x0 >= x1 {
            return;
        }

        // An empty slice (no-hit sentinel) clips to an empty row range.
        let y0 = slice.top.max(0.0) as usize;
        let y1 = (slice.bottom.min(self.height as f32)) as usize;

        let colour = match slice.side {
            Side::Horizontal => WALL_DIM,
            Side::Vertical => WALL_LIT,
        };
        for y in y0..y1 {
            self.scratch[y * self.width + x0..y * self.width + x1].fill(colour);
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
