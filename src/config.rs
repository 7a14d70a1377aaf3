use crate::{
    color::{self, Color},
    error::{Result, WordCloudError},
};

/// Configuration knobs for a single word cloud run.
///
/// All fields are read once at the start of [`crate::generate`]; the same
/// config can be reused for any number of runs.
#[derive(Clone, Debug, PartialEq)]
pub struct WordCloudConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Color for words without an explicit override.
    pub default_word_color: Color,
    pub background_color: Color,
    pub max_font_size: u32,
    pub min_font_size: u32,
    /// Upper alpha bound used when `auto_opacity` is on.
    pub max_alpha: u8,
    /// Lower alpha bound used when `auto_opacity` is on.
    pub min_alpha: u8,
    pub padding_x: f32,
    pub padding_y: f32,
    /// Derive each word's alpha from its frequency.
    pub auto_opacity: bool,
    /// Face to measure and draw with. `None` uses the backend default.
    pub font: Option<fontdb::ID>,
    /// Shrink text until it fits `canvas_height`. When off, the output grows
    /// to the packed height instead.
    pub bound_to_canvas_height: bool,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            canvas_width: 480,
            canvas_height: 640,
            default_word_color: color::black(),
            background_color: color::white(),
            max_font_size: 40,
            min_font_size: 10,
            max_alpha: 255,
            min_alpha: 50,
            padding_x: 1.0,
            padding_y: 1.0,
            auto_opacity: false,
            font: None,
            bound_to_canvas_height: true,
        }
    }
}

impl WordCloudConfig {
    /// Creates the default config with a custom canvas size.
    pub fn with_canvas(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Default::default()
        }
    }

    /// Rejects configurations the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(WordCloudError::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.min_font_size > self.max_font_size {
            return Err(WordCloudError::InvalidConfig(format!(
                "min font size {} exceeds max font size {}",
                self.min_font_size, self.max_font_size
            )));
        }
        if self.min_alpha > self.max_alpha {
            return Err(WordCloudError::InvalidConfig(format!(
                "min alpha {} exceeds max alpha {}",
                self.min_alpha, self.max_alpha
            )));
        }
        if !(self.padding_x >= 0.0 && self.padding_y >= 0.0) {
            return Err(WordCloudError::InvalidConfig(format!(
                "padding must be non-negative, got ({}, {})",
                self.padding_x, self.padding_y
            )));
        }
        Ok(())
    }

    /// Trial maximum font sizes, largest first.
    ///
    /// Starts at `max_font_size` itself and steps down to `min_font_size + 1`,
    /// so there are `max_font_size - min_font_size` trials: one more than a
    /// sequence starting at `max_font_size - 1`. A collapsed range yields the
    /// single trial `max_font_size`.
    pub fn trial_font_sizes(&self) -> impl Iterator<Item = u32> {
        let lowest = self.min_font_size.saturating_add(1).min(self.max_font_size);
        (lowest..=self.max_font_size).rev()
    }
}
