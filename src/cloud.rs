use crate::{
    backend::{RenderBackend, TextMeasurer},
    config::WordCloudConfig,
    error::{Result, WordCloudError},
    geometry::CanvasVector,
    layout::{WordCloudLayout, fit},
    words::WordSet,
};

/// Lays out `words` and draws the result with `backend`.
///
/// The backend is not touched when `words` is empty. On success the output is
/// `canvas_width` x `canvas_height` with the packed block centered, or
/// `canvas_width` x packed height when `bound_to_canvas_height` is off.
pub fn generate<B: RenderBackend + ?Sized>(
    words: &WordSet,
    config: &WordCloudConfig,
    backend: &mut B,
) -> Result<B::Output> {
    if words.is_empty() {
        return Err(WordCloudError::EmptyInput);
    }

    let layout = fit(words, config, &*backend)?;
    render(&layout, config, backend)
}

/// Draws an accepted layout.
pub fn render<B: RenderBackend + ?Sized>(
    layout: &WordCloudLayout,
    config: &WordCloudConfig,
    backend: &mut B,
) -> Result<B::Output> {
    let (width, height) = output_size(layout, config);
    let offset = centering_offset(layout, width, height);

    log::debug!(
        "drawing {} words at font size {} into {}x{} (offset {:?})",
        layout.words.len(),
        layout.trial_font_size,
        width,
        height,
        offset
    );

    backend.begin(width, height, config.background_color)?;
    for word in &layout.words {
        backend.draw_word(word, word.rect.min + offset, config.font)?;
    }
    Ok(backend.finish())
}

fn output_size(layout: &WordCloudLayout, config: &WordCloudConfig) -> (u32, u32) {
    if config.bound_to_canvas_height {
        (config.canvas_width, config.canvas_height)
    } else {
        let packed_height = layout.extent.height.ceil().max(1.0) as u32;
        (config.canvas_width, packed_height)
    }
}

/// Offset that centers the packed block, never pushing it past the top-left.
fn centering_offset(layout: &WordCloudLayout, width: u32, height: u32) -> CanvasVector {
    let dx = ((width as f32 - layout.extent.width) / 2.0).floor().max(0.0);
    let dy = ((height as f32 - layout.extent.height) / 2.0).floor().max(0.0);
    CanvasVector::new(dx, dy)
}

/// A word set bundled with the configuration it is drawn with.
#[derive(Clone, Debug, Default)]
pub struct WordCloud {
    pub config: WordCloudConfig,
    pub words: WordSet,
}

impl WordCloud {
    pub fn new(config: WordCloudConfig) -> Self {
        Self {
            config,
            words: WordSet::new(),
        }
    }

    pub fn with_words(config: WordCloudConfig, words: WordSet) -> Self {
        Self { config, words }
    }

    /// Runs the fit search without drawing anything.
    pub fn layout<M: TextMeasurer + ?Sized>(&self, measurer: &M) -> Result<WordCloudLayout> {
        fit(&self.words, &self.config, measurer)
    }

    pub fn generate<B: RenderBackend + ?Sized>(&self, backend: &mut B) -> Result<B::Output> {
        generate(&self.words, &self.config, backend)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::test_util::{Call, RecordingBackend},
        color,
        geometry::CanvasPoint,
    };

    #[test]
    fn empty_input_never_reaches_the_backend() {
        let mut backend = RecordingBackend::default();
        let result = generate(&WordSet::new(), &WordCloudConfig::default(), &mut backend);
        assert!(matches!(result, Err(WordCloudError::EmptyInput)));
        assert_eq!(backend.measured.get(), 0);
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn bounded_output_is_centered_on_the_canvas() {
        let words: WordSet = [("a", 10), ("b", 1)].into_iter().collect();
        let config = WordCloudConfig::with_canvas(100, 100);
        let mut backend = RecordingBackend::default();
        let calls = generate(&words, &config, &mut backend).unwrap();

        // a is 20x40 at the origin, b is 5x10 at (21, 1): block is 26x40
        assert_eq!(calls[0], Call::Begin(100, 100, color::white()));
        assert_eq!(
            calls[1],
            Call::Draw("a".into(), CanvasPoint::new(37.0, 30.0), color::black())
        );
        assert_eq!(
            calls[2],
            Call::Draw("b".into(), CanvasPoint::new(58.0, 31.0), color::black())
        );
        assert_eq!(calls.len(), 3);
    }

    #[test]
    fn unbounded_output_grows_to_packed_height() {
        let words: WordSet = (1..=12u32).map(|i| (format!("w{i}"), i)).collect();
        let config = WordCloudConfig {
            canvas_width: 80,
            canvas_height: 30,
            bound_to_canvas_height: false,
            ..Default::default()
        };
        let mut backend = RecordingBackend::default();
        let calls = generate(&words, &config, &mut backend).unwrap();

        let Call::Begin(width, height, _) = calls[0] else {
            panic!("first call must begin the image");
        };
        assert_eq!(width, 80);
        assert!(height > 30);
        assert_eq!(calls.len(), 13);
    }

    #[test]
    fn failed_fit_draws_nothing() {
        let words: WordSet = [("incomprehensibilities", 3)].into_iter().collect();
        let mut backend = RecordingBackend::default();
        let result = generate(&words, &WordCloudConfig::with_canvas(10, 10), &mut backend);
        assert!(matches!(result, Err(WordCloudError::NoFittingLayout { .. })));
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn word_cloud_generates_the_same_output_twice() {
        let mut cloud = WordCloud::new(WordCloudConfig::with_canvas(250, 250));
        cloud.words.insert("oguzhan", 2);
        cloud.words.insert("is", 2);
        cloud.words.insert("on", 2);
        cloud.words.insert("the", 2);

        let first = cloud.generate(&mut RecordingBackend::default()).unwrap();
        let second = cloud.generate(&mut RecordingBackend::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            cloud.layout(&RecordingBackend::default()).unwrap().words.len(),
            4
        );
    }
}
