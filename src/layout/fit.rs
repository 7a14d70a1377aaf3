use crate::{
    backend::TextMeasurer,
    color,
    config::WordCloudConfig,
    error::{Result, WordCloudError},
    geometry::CanvasSize,
    layout::{
        pack::{PackedExtent, pack},
        size,
    },
    words::{PlacedWord, WordSet},
};

/// Accepted placement produced by [`fit`].
#[derive(Clone, Debug, PartialEq)]
pub struct WordCloudLayout {
    /// Words in input order with their final rectangles.
    pub words: Vec<PlacedWord>,
    pub extent: PackedExtent,
    /// Maximum font size of the accepted trial.
    pub trial_font_size: u32,
}

/// Searches for the largest trial font size whose packing fits the canvas.
///
/// Trials run from `config.max_font_size` down to `min_font_size + 1`. Every
/// trial resizes and re-measures all words from scratch before packing, so
/// no rectangle carries over from a rejected attempt. With
/// `bound_to_canvas_height` off the first trial is accepted as is.
pub fn fit<M: TextMeasurer + ?Sized>(
    words: &WordSet,
    config: &WordCloudConfig,
    measurer: &M,
) -> Result<WordCloudLayout> {
    config.validate()?;

    let Some(max_frequency) = words.max_frequency() else {
        return Err(WordCloudError::EmptyInput);
    };

    let mut placed = build_words(words, max_frequency, config)?;
    let canvas_width = config.canvas_width as f32;
    let canvas_height = config.canvas_height as f32;

    for trial in config.trial_font_sizes() {
        resize(&mut placed, max_frequency, trial, config, measurer)?;
        let mut extent = pack(&mut placed, canvas_width, config.padding_x, config.padding_y);

        log::debug!(
            "trial font size {}: packed {}x{} into {}x{}",
            trial,
            extent.width,
            extent.height,
            canvas_width,
            canvas_height
        );

        if !config.bound_to_canvas_height || extent.fits(canvas_width, canvas_height) {
            if extent.height <= 0.0 {
                log::warn!(
                    "packed height is zero for {} words, using canvas height",
                    placed.len()
                );
                extent.height = canvas_height;
            }

            return Ok(WordCloudLayout {
                words: placed,
                extent,
                trial_font_size: trial,
            });
        }
    }

    log::warn!(
        "no trial font size in {}..={} fits {} words into {}x{}",
        config.min_font_size,
        config.max_font_size,
        placed.len(),
        canvas_width,
        canvas_height
    );
    Err(WordCloudError::NoFittingLayout {
        min_font_size: config.min_font_size,
        max_font_size: config.max_font_size,
    })
}

/// Creates the per-attempt word list with colors resolved and sizes unset.
fn build_words(
    words: &WordSet,
    max_frequency: u32,
    config: &WordCloudConfig,
) -> Result<Vec<PlacedWord>> {
    words
        .iter()
        .map(|entry| {
            let base = entry.color.unwrap_or(config.default_word_color);
            let color = if config.auto_opacity {
                let alpha = size::alpha(
                    entry.frequency,
                    max_frequency,
                    config.max_alpha,
                    config.min_alpha,
                )
                .map_err(|_| invalid_frequency(&entry.text, entry.frequency))?;
                color::with_alpha(base, alpha)
            } else {
                base
            };

            Ok(PlacedWord::new(
                entry.text.clone(),
                entry.frequency,
                0.0,
                color,
                CanvasSize::zero(),
            ))
        })
        .collect()
}

/// Recomputes font sizes for `trial` and puts every rectangle back at the origin.
fn resize<M: TextMeasurer + ?Sized>(
    words: &mut [PlacedWord],
    max_frequency: u32,
    trial: u32,
    config: &WordCloudConfig,
    measurer: &M,
) -> Result<()> {
    for word in words {
        let font_size = size::font_size(
            word.frequency,
            max_frequency,
            trial as f32,
            config.min_font_size as f32,
        )
        .map_err(|_| invalid_frequency(&word.text, word.frequency))?;
        let measured = measurer.measure(&word.text, font_size, config.font)?;
        word.reset(font_size, measured);
    }
    Ok(())
}

fn invalid_frequency(word: &str, frequency: u32) -> WordCloudError {
    WordCloudError::InvalidFrequency {
        word: word.to_string(),
        frequency,
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::test_util::{FixedAdvanceMeasurer, FlatMeasurer},
        layout::first_intersection,
    };

    #[test]
    fn empty_set_is_reported() {
        let result = fit(&WordSet::new(), &WordCloudConfig::default(), &FixedAdvanceMeasurer);
        assert_eq!(result, Err(WordCloudError::EmptyInput));
    }

    #[test]
    fn zero_frequency_names_the_word() {
        let words: WordSet = [("ok", 3), ("bad", 0)].into_iter().collect();
        let result = fit(&words, &WordCloudConfig::default(), &FixedAdvanceMeasurer);
        assert_eq!(
            result,
            Err(WordCloudError::InvalidFrequency {
                word: "bad".into(),
                frequency: 0
            })
        );
    }

    #[test]
    fn two_words_fit_at_full_size() {
        let words: WordSet = [("a", 10), ("b", 1)].into_iter().collect();
        let config = WordCloudConfig::with_canvas(100, 100);
        let layout = fit(&words, &config, &FixedAdvanceMeasurer).unwrap();

        assert_eq!(layout.trial_font_size, 40);
        assert_eq!(layout.words[0].font_size, 40.0);
        assert_eq!(layout.words[1].font_size, 10.0);
        assert!(layout.extent.height <= 100.0);
        assert_eq!(first_intersection(0, &layout.words), None);
        assert_eq!(first_intersection(1, &layout.words), None);
    }

    #[test]
    fn shrinks_until_height_fits() {
        // five 40px lines cannot fit 100px, smaller trials must be used
        let words: WordSet = (1..=5u32).map(|i| (format!("word{i}"), 2)).collect();
        let config = WordCloudConfig::with_canvas(100, 100);
        let layout = fit(&words, &config, &FixedAdvanceMeasurer).unwrap();

        assert!(layout.trial_font_size < 40);
        assert!(layout.extent.height <= 100.0);
        for word in &layout.words {
            assert_eq!(word.font_size, layout.trial_font_size as f32);
        }
    }

    #[test]
    fn unplaced_words_do_not_shrink_the_first_trial() {
        // efgh still sits at the origin while cd is placed beside ab
        let words: WordSet = [("ab", 2), ("cd", 2), ("efgh", 2)].into_iter().collect();
        let config = WordCloudConfig::with_canvas(100, 90);
        let layout = fit(&words, &config, &FixedAdvanceMeasurer).unwrap();

        assert_eq!(layout.trial_font_size, 40);
        assert_eq!(layout.words[1].rect.min.y, 1.0);
        assert_eq!(layout.words[2].rect.min.y, 43.0);
        assert_eq!(layout.extent.height, 83.0);
    }

    #[test]
    fn single_rare_word_gets_min_size_at_origin() {
        let words: WordSet = [("once", 1)].into_iter().collect();
        let layout = fit(&words, &WordCloudConfig::default(), &FixedAdvanceMeasurer).unwrap();

        assert_eq!(layout.trial_font_size, 40);
        assert_eq!(layout.words[0].font_size, 10.0);
        assert_eq!(layout.words[0].rect.min.x, 0.0);
        assert_eq!(layout.words[0].rect.min.y, 0.0);
    }

    #[test]
    fn overlong_word_has_no_fitting_layout() {
        let words: WordSet = [("incomprehensibilities", 4)].into_iter().collect();
        let config = WordCloudConfig::with_canvas(10, 100);
        let result = fit(&words, &config, &FixedAdvanceMeasurer);
        assert_eq!(
            result,
            Err(WordCloudError::NoFittingLayout {
                min_font_size: 10,
                max_font_size: 40
            })
        );
    }

    #[test]
    fn unbounded_accepts_first_trial_even_if_it_overflows() {
        let words: WordSet = (1..=20u32).map(|i| (format!("w{i}"), i)).collect();
        let config = WordCloudConfig {
            canvas_width: 60,
            canvas_height: 20,
            bound_to_canvas_height: false,
            ..Default::default()
        };
        let layout = fit(&words, &config, &FixedAdvanceMeasurer).unwrap();

        assert_eq!(layout.trial_font_size, 40);
        assert!(layout.extent.height > 20.0);
    }

    #[test]
    fn zero_height_falls_back_to_canvas_height() {
        let words: WordSet = [("", 1)].into_iter().collect();
        let config = WordCloudConfig::with_canvas(50, 70);
        let layout = fit(&words, &config, &FlatMeasurer).unwrap();
        assert_eq!(layout.extent.height, 70.0);
    }

    #[test]
    fn auto_opacity_scales_alpha() {
        let words: WordSet = [("loud", 100), ("quiet", 1)].into_iter().collect();
        let config = WordCloudConfig {
            auto_opacity: true,
            ..Default::default()
        };
        let layout = fit(&words, &config, &FixedAdvanceMeasurer).unwrap();
        assert_eq!(layout.words[0].color.alpha, 255);
        assert_eq!(layout.words[1].color.alpha, 50);
    }

    #[test]
    fn color_override_is_kept() {
        let mut words = WordSet::new();
        words.insert_colored("red", 2, crate::color::Color::new(255, 0, 0, 255));
        words.insert("plain", 1);
        let layout = fit(&words, &WordCloudConfig::default(), &FixedAdvanceMeasurer).unwrap();
        assert_eq!(layout.words[0].color.red, 255);
        assert_eq!(layout.words[1].color, crate::color::black());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let words: WordSet = [("alpha", 9), ("beta", 4), ("gamma", 2), ("delta", 1)]
            .into_iter()
            .collect();
        let config = WordCloudConfig::with_canvas(120, 90);
        let first = fit(&words, &config, &FixedAdvanceMeasurer).unwrap();
        let second = fit(&words, &config, &FixedAdvanceMeasurer).unwrap();
        assert_eq!(first, second);
    }
}
