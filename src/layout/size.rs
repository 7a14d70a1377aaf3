//! Frequency to font size / alpha mapping.
//!
//! Both mappings interpolate on `ln(frequency) / ln(max_frequency)`, so the
//! most frequent word always lands exactly on the upper bound and a word seen
//! once lands on the lower bound.

use crate::error::{Result, WordCloudError};

/// Position of `frequency` on the logarithmic scale, in `[0, 1]`.
///
/// Returns `0.0` when `max_frequency <= 1`, which avoids dividing by `ln(1)`.
fn log_ratio(frequency: u32, max_frequency: u32) -> Result<f64> {
    if frequency == 0 || frequency > max_frequency {
        return Err(WordCloudError::InvalidFrequency {
            word: String::new(),
            frequency,
        });
    }
    if max_frequency <= 1 {
        return Ok(0.0);
    }
    Ok((frequency as f64).ln() / (max_frequency as f64).ln())
}

/// Font size for `frequency`, clamped into `[min_size, max_size]`.
pub fn font_size(frequency: u32, max_frequency: u32, max_size: f32, min_size: f32) -> Result<f32> {
    let ratio = log_ratio(frequency, max_frequency)?;
    let size = min_size as f64 + ratio * (max_size as f64 - min_size as f64);
    Ok((size as f32).clamp(min_size, max_size.max(min_size)))
}

/// Alpha channel value for `frequency`, truncated like an integer cast.
pub fn alpha(frequency: u32, max_frequency: u32, max_alpha: u8, min_alpha: u8) -> Result<u8> {
    let ratio = log_ratio(frequency, max_frequency)?;
    let value = min_alpha as f64 + ratio * (max_alpha as f64 - min_alpha as f64);
    Ok(value.clamp(min_alpha as f64, max_alpha.max(min_alpha) as f64) as u8)
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_frequency_gets_max_size() {
        assert_eq!(font_size(10, 10, 40.0, 10.0).unwrap(), 40.0);
        assert_eq!(font_size(1, 10, 40.0, 10.0).unwrap(), 10.0);
    }

    #[test]
    fn degenerate_max_frequency_gets_min_size() {
        assert_eq!(font_size(1, 1, 40.0, 10.0).unwrap(), 10.0);
        assert_eq!(alpha(1, 1, 255, 50).unwrap(), 50);
    }

    #[test]
    fn sizes_are_monotonic_and_bounded() {
        let max_frequency = 97;
        let mut previous = 0.0;
        for frequency in 1..=max_frequency {
            let size = font_size(frequency, max_frequency, 40.0, 10.0).unwrap();
            assert!((10.0..=40.0).contains(&size));
            assert!(size >= previous);
            previous = size;
        }
    }

    #[test]
    fn midpoint_on_log_scale() {
        // ln(10) / ln(100) == 0.5
        let size = font_size(10, 100, 40.0, 10.0).unwrap();
        assert!((size - 25.0).abs() < 1e-4);
    }

    #[test]
    fn alpha_truncates() {
        // 50 + 0.5 * 205 = 152.5
        assert_eq!(alpha(10, 100, 255, 50).unwrap(), 152);
        assert_eq!(alpha(100, 100, 255, 50).unwrap(), 255);
    }

    #[test]
    fn zero_frequency_is_rejected() {
        assert!(matches!(
            font_size(0, 10, 40.0, 10.0),
            Err(WordCloudError::InvalidFrequency { frequency: 0, .. })
        ));
        assert!(alpha(0, 10, 255, 50).is_err());
    }

    #[test]
    fn frequency_above_max_is_rejected() {
        assert!(font_size(11, 10, 40.0, 10.0).is_err());
    }
}
