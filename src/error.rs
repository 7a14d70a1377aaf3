use thiserror::Error;

/// Failures reported by a word cloud run.
///
/// None of these are retried internally. A failed run produces no output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WordCloudError {
    /// A word carried a frequency the size mapper cannot interpolate.
    #[error("invalid frequency {frequency} for word {word:?}")]
    InvalidFrequency { word: String, frequency: u32 },

    /// The word set was empty.
    #[error("no words to place")]
    EmptyInput,

    /// Every trial font size overflowed the canvas.
    #[error("no layout fits the canvas with font sizes {min_font_size}..={max_font_size}")]
    NoFittingLayout {
        min_font_size: u32,
        max_font_size: u32,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The backend could not resolve a usable font face.
    #[error("no usable font available")]
    FontUnavailable,
}

/// Result type for word cloud operations.
pub type Result<T> = std::result::Result<T, WordCloudError>;
