/// A glyph positioned relative to the start of the word's baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapedGlyph {
    pub glyph_index: u16,
    /// Left edge of the glyph bitmap.
    pub x: f32,
    /// Top edge of the glyph bitmap, negative above the baseline.
    pub y: f32,
}

/// A single line of text laid out with one font at one size.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedWord {
    pub glyphs: Vec<ShapedGlyph>,
    pub width: f32,
    pub ascent: f32,
    /// Distance below the baseline, negative as reported by `fontdue`.
    pub descent: f32,
}

impl ShapedWord {
    pub fn height(&self) -> f32 {
        (self.ascent - self.descent).max(0.0)
    }
}

/// Lays `text` out on one line, applying kerning between neighbouring glyphs.
///
/// The width covers both the inked extent and the advance of the last glyph
/// so trailing spaces still take room.
pub fn shape_word(font: &fontdue::Font, text: &str, font_size: f32) -> ShapedWord {
    let (ascent, descent) = font
        .horizontal_line_metrics(font_size)
        .map(|metrics| (metrics.ascent, metrics.descent))
        .unwrap_or((font_size, 0.0));

    let mut glyphs = Vec::with_capacity(text.len());
    let mut origin_x = 0.0f32;
    let mut width = 0.0f32;
    let mut previous: Option<(u16, f32)> = None;

    for ch in text.chars() {
        let glyph_index = font.lookup_glyph_index(ch);
        let metrics = font.metrics_indexed(glyph_index, font_size);

        if let Some((previous_index, advance)) = previous {
            let kerning = font
                .horizontal_kern_indexed(previous_index, glyph_index, font_size)
                .unwrap_or(0.0);
            origin_x += advance + kerning;
        }

        glyphs.push(ShapedGlyph {
            glyph_index,
            x: origin_x + metrics.xmin as f32,
            y: -(metrics.ymin as f32 + metrics.height as f32),
        });

        let inked = origin_x + metrics.xmin as f32 + metrics.width as f32;
        width = width.max(inked).max(origin_x + metrics.advance_width);
        previous = Some((glyph_index, metrics.advance_width));
    }

    ShapedWord {
        glyphs,
        width: width.max(0.0),
        ascent,
        descent,
    }
}
