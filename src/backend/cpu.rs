mod shape;

use std::sync::Arc;

use parking_lot::Mutex;

pub use shape::{ShapedGlyph, ShapedWord, shape_word};

use crate::{
    backend::{RenderBackend, TextMeasurer},
    color::{self, Color},
    error::{Result, WordCloudError},
    font_storage::FontStorage,
    geometry::{CanvasPoint, CanvasSize},
    words::PlacedWord,
};

/// Straight-alpha RGBA8 image produced by [`CpuBackend`].
///
/// Pixels are arranged in row-major order with the origin at the top-left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    /// Creates an image filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let len = (width as usize).saturating_mul(height as usize);
        let texel = [fill.red, fill.green, fill.blue, fill.alpha];
        Self {
            width,
            height,
            pixels: texel.repeat(len),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.index(x, y)?;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }

    /// Blends `color` at `coverage` into the pixel at `(x, y)`. Out of bounds
    /// writes are dropped.
    pub fn blend(&mut self, x: u32, y: u32, color: Color, coverage: u8) {
        if let Some(idx) = self.index(x, y) {
            color::blend_over(&mut self.pixels[idx..idx + 4], color, coverage);
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

/// Measures and rasterizes words with `fontdue`, faces resolved through `fontdb`.
///
/// Measuring only needs `&self`, so the font storage sits behind a `Mutex`
/// to let faces be parsed lazily from a shared reference.
pub struct CpuBackend {
    pub font_storage: Mutex<FontStorage>,
    default_font: fontdb::ID,
    target: Option<RgbaImage>,
}

impl CpuBackend {
    /// Creates a backend drawing with `default_font` unless a run asks otherwise.
    pub fn new(font_storage: FontStorage, default_font: fontdb::ID) -> Self {
        Self {
            font_storage: Mutex::new(font_storage),
            default_font,
            target: None,
        }
    }

    /// Creates a backend using the storage's regular sans-serif face as default.
    pub fn from_storage(font_storage: FontStorage) -> Result<Self> {
        let default_font = font_storage
            .default_face()
            .ok_or(WordCloudError::FontUnavailable)?;
        Ok(Self::new(font_storage, default_font))
    }

    /// Loads the system fonts and picks a default face from them.
    pub fn with_system_fonts() -> Result<Self> {
        let mut font_storage = FontStorage::new();
        font_storage.load_system_fonts();
        Self::from_storage(font_storage)
    }

    pub fn default_font(&self) -> fontdb::ID {
        self.default_font
    }

    fn resolve(font_storage: &mut FontStorage, font: fontdb::ID) -> Result<Arc<fontdue::Font>> {
        font_storage.font(font).ok_or_else(|| {
            log::warn!("font {:?} could not be loaded", font);
            WordCloudError::FontUnavailable
        })
    }
}

impl TextMeasurer for CpuBackend {
    fn measure(&self, text: &str, font_size: f32, font: Option<fontdb::ID>) -> Result<CanvasSize> {
        let font = Self::resolve(
            &mut self.font_storage.lock(),
            font.unwrap_or(self.default_font),
        )?;
        let shaped = shape_word(&font, text, font_size);
        Ok(CanvasSize::new(shaped.width.ceil(), shaped.height().ceil()))
    }
}

impl RenderBackend for CpuBackend {
    type Output = RgbaImage;

    fn begin(&mut self, width: u32, height: u32, background: Color) -> Result<()> {
        // drop the previous image before allocating the next one
        self.target = None;
        self.target = Some(RgbaImage::new(width, height, background));
        Ok(())
    }

    fn draw_word(
        &mut self,
        word: &PlacedWord,
        origin: CanvasPoint,
        font: Option<fontdb::ID>,
    ) -> Result<()> {
        let font = Self::resolve(
            self.font_storage.get_mut(),
            font.unwrap_or(self.default_font),
        )?;
        let Some(target) = self.target.as_mut() else {
            log::warn!("Draw called before the cpu backend began an image.");
            return Ok(());
        };

        let shaped = shape_word(&font, &word.text, word.font_size);
        let baseline_y = origin.y + shaped.ascent;
        for glyph in &shaped.glyphs {
            let (metrics, coverage) = font.rasterize_indexed(glyph.glyph_index, word.font_size);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }
            draw_coverage(
                target,
                &coverage,
                metrics.width,
                metrics.height,
                origin.x + glyph.x,
                baseline_y + glyph.y,
                word.color,
            );
        }
        Ok(())
    }

    fn finish(&mut self) -> Self::Output {
        self.target.take().unwrap_or_else(|| {
            log::warn!("Finish called before the cpu backend began an image.");
            RgbaImage::default()
        })
    }
}

/// Blends a glyph coverage bitmap whose top-left corner is `(origin_x, origin_y)`.
fn draw_coverage(
    target: &mut RgbaImage,
    coverage: &[u8],
    glyph_width: usize,
    glyph_height: usize,
    origin_x: f32,
    origin_y: f32,
    color: Color,
) {
    for row in 0..glyph_height {
        let y = (origin_y + row as f32).floor();
        if y < 0.0 {
            continue;
        }

        for col in 0..glyph_width {
            let alpha = coverage[row * glyph_width + col];
            if alpha == 0 {
                continue;
            }

            let x = (origin_x + col as f32).floor();
            if x < 0.0 {
                continue;
            }

            // blend drops writes past the right and bottom edges
            target.blend(x as u32, y as u32, color, alpha);
        }
    }
}
