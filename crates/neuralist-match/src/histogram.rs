//! Color-histogram feature extraction.

use image::DynamicImage;

use crate::types::{feature_len, FeatureVector, MatchResult, RawImage, HISTOGRAM_BINS};

/// Channel count used for images handed over as `DynamicImage`.
const RGB_CHANNELS: u32 = 3;

impl RawImage<'_> {
    /// Compute the normalized per-channel histogram of this image.
    ///
    /// Each channel's block of `HISTOGRAM_BINS` values sums to 1.0, so images
    /// of different resolutions produce comparable vectors. An image with no
    /// pixels yields an all-zero vector.
    pub fn histogram(&self) -> FeatureVector {
        let channels = self.channels() as usize;
        let mut features = vec![0.0f64; feature_len(self.channels())];

        let total_pixels = self.pixel_count();
        if total_pixels == 0 {
            return features;
        }

        for pixel in self.pixels().chunks_exact(channels) {
            for (c, &value) in pixel.iter().enumerate() {
                features[c * HISTOGRAM_BINS + value as usize] += 1.0;
            }
        }

        // Divide by pixel count, not by pixel count * channels
        let total = total_pixels as f64;
        for bin in features.iter_mut() {
            *bin /= total;
        }

        features
    }
}

/// Extract a color histogram from interleaved pixel data.
pub fn extract_color_histogram(
    data: &[u8],
    width: u32,
    height: u32,
    channels: u32,
) -> MatchResult<FeatureVector> {
    let image = RawImage::new(data, width, height, channels)?;
    let features = image.histogram();
    tracing::debug!(
        "Extracted {} histogram features from {width}x{height}x{channels} image",
        features.len()
    );
    Ok(features)
}

/// Extract an RGB color histogram from an already-decoded image.
pub fn extract_from_image(img: &DynamicImage) -> MatchResult<FeatureVector> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    extract_color_histogram(rgb.as_raw(), width, height, RGB_CHANNELS)
}

/// The histogram block belonging to `channel`, if the vector has one.
pub fn channel_block(features: &[f64], channel: usize) -> Option<&[f64]> {
    let start = channel.checked_mul(HISTOGRAM_BINS)?;
    let end = start.checked_add(HISTOGRAM_BINS)?;
    features.get(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchError;

    fn block_sum(features: &[f64], channel: usize) -> f64 {
        channel_block(features, channel).unwrap().iter().sum()
    }

    #[test]
    fn test_two_identical_pixels() {
        let data = [10, 20, 30, 10, 20, 30];
        let features = extract_color_histogram(&data, 2, 1, 3).unwrap();
        assert_eq!(features.len(), 768);

        for (i, &v) in features.iter().enumerate() {
            let expected = if i == 10 || i == 256 + 20 || i == 512 + 30 {
                1.0
            } else {
                0.0
            };
            assert_eq!(v, expected, "bin {i}");
        }
    }

    #[test]
    fn test_blocks_sum_to_one() {
        let data: Vec<u8> = (0..(7 * 5 * 3)).map(|i| (i * 37 % 256) as u8).collect();
        let features = extract_color_histogram(&data, 7, 5, 3).unwrap();
        for c in 0..3 {
            assert!((block_sum(&features, c) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_channel() {
        let data = [0, 255, 255, 0];
        let features = extract_color_histogram(&data, 2, 2, 1).unwrap();
        assert_eq!(features.len(), 256);
        assert_eq!(features[0], 0.5);
        assert_eq!(features[255], 0.5);
    }

    #[test]
    fn test_four_channels() {
        let data = [1, 2, 3, 4];
        let features = extract_color_histogram(&data, 1, 1, 4).unwrap();
        assert_eq!(features.len(), 1024);
        assert_eq!(features[1], 1.0);
        assert_eq!(features[256 + 2], 1.0);
        assert_eq!(features[512 + 3], 1.0);
        assert_eq!(features[768 + 4], 1.0);
    }

    #[test]
    fn test_size_independent() {
        let small = [50u8, 60, 70];
        let large: Vec<u8> = small.iter().copied().cycle().take(30 * 30 * 3).collect();
        let a = extract_color_histogram(&small, 1, 1, 3).unwrap();
        let b = extract_color_histogram(&large, 30, 30, 3).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_pixels_returns_zero_vector() {
        let features = extract_color_histogram(&[], 0, 4, 3).unwrap();
        assert_eq!(features.len(), 768);
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_short_buffer_rejected() {
        let data = [0u8; 5];
        let err = extract_color_histogram(&data, 2, 1, 3).unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput(_)));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let err = extract_color_histogram(&[], u32::MAX, u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput(_)));
    }

    #[test]
    fn test_from_dynamic_image() {
        let mut img = DynamicImage::new_rgb8(4, 2);
        if let Some(rgb) = img.as_mut_rgb8() {
            for pixel in rgb.pixels_mut() {
                *pixel = image::Rgb([200, 100, 0]);
            }
        }
        let features = extract_from_image(&img).unwrap();
        assert_eq!(features.len(), 768);
        assert_eq!(features[200], 1.0);
        assert_eq!(features[256 + 100], 1.0);
        assert_eq!(features[512], 1.0);
    }

    #[test]
    fn test_channel_block_out_of_range() {
        let features = vec![0.0; 768];
        assert!(channel_block(&features, 2).is_some());
        assert!(channel_block(&features, 3).is_none());
        assert!(channel_block(&features, usize::MAX).is_none());
    }
}
