//! Seams between the layout core and whatever measures and draws text.
//!
//! The layout only ever asks for word sizes through [`TextMeasurer`]. Drawing
//! happens once, after a layout is accepted, through [`RenderBackend`].

/// fontdue based CPU rasterizer.
pub mod cpu;

pub use cpu::{CpuBackend, RgbaImage};

use crate::{
    color::Color,
    error::Result,
    geometry::{CanvasPoint, CanvasSize},
    words::PlacedWord,
};

/// Measures the box a word occupies at a given font size.
///
/// Measuring must not have visible side effects; the fit search calls it
/// once per word per trial.
pub trait TextMeasurer {
    /// Returns `(width, height)` of `text` at `font_size` using `font`, or the
    /// backend default face when `font` is `None`.
    fn measure(&self, text: &str, font_size: f32, font: Option<fontdb::ID>) -> Result<CanvasSize>;
}

/// Produces the final image from an accepted layout.
///
/// Calls arrive in order: one [`Self::begin`], one [`Self::draw_word`] per
/// word, then [`Self::finish`].
pub trait RenderBackend: TextMeasurer {
    type Output;

    /// Starts a `width` x `height` image filled with `background`.
    fn begin(&mut self, width: u32, height: u32, background: Color) -> Result<()>;

    /// Draws `word` with its box's top-left corner at `origin`.
    fn draw_word(
        &mut self,
        word: &PlacedWord,
        origin: CanvasPoint,
        font: Option<fontdb::ID>,
    ) -> Result<()>;

    fn finish(&mut self) -> Self::Output;
}
