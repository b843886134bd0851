//! Rendering abstraction layer.
//!
//! *The engine never touches a pixel buffer.* Each frame it produces one
//! [`WallSlice`](crate::engine::WallSlice) per ray, in ray order, and hands
//! them to a type implementing [`Renderer`]. The binaries forward the
//! finished buffer to their window manager; a different back-end could
//! rasterise the same slices on a GPU without changing engine code.

use crate::engine::WallSlice;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// A renderer that owns an internal scratch buffer for the whole frame.
pub trait Renderer {
    /// (Re)allocate scratch for the resolution and ray-column count, then
    /// clear it to the background.
    fn begin_frame(&mut self, width: usize, height: usize, columns: usize);

    /// Rasterise one wall slice into the internal buffer.
    fn draw_slice(&mut self, slice: &WallSlice);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Callers typically pass `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, width: usize, height: usize, slices: &[WallSlice], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height, slices.len());
        for slice in slices {
            self.draw_slice(slice);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;
