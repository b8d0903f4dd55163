//! Core data types shared by the feature extractor and the matcher.

use serde::{Deserialize, Serialize};

/// Number of histogram bins per color channel.
pub const HISTOGRAM_BINS: usize = 256;

/// A color-histogram feature vector, `HISTOGRAM_BINS` values per channel,
/// channel blocks concatenated in channel order.
pub type FeatureVector = Vec<f64>;

/// Length of the feature vector produced for an image with `channels` channels.
pub fn feature_len(channels: u32) -> usize {
    HISTOGRAM_BINS * channels as usize
}

/// A borrowed view over interleaved 8-bit pixel data.
///
/// Pixels are stored pixel-major, channel-minor: the value of channel `c`
/// at pixel `p` lives at `p * channels + c`. Construction through
/// [`RawImage::new`] guarantees the buffer covers every pixel.
#[derive(Debug, Clone, Copy)]
pub struct RawImage<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    channels: u32,
}

impl<'a> RawImage<'a> {
    /// Validate dimensions against the buffer and wrap it.
    pub fn new(data: &'a [u8], width: u32, height: u32, channels: u32) -> MatchResult<Self> {
        if channels == 0 {
            return Err(MatchError::InvalidInput(
                "channel count must be at least 1".to_string(),
            ));
        }

        let required = required_len(width, height, channels).ok_or_else(|| {
            MatchError::InvalidInput(format!(
                "image dimensions overflow: {width}x{height}x{channels}"
            ))
        })?;

        if data.len() < required {
            return Err(MatchError::InvalidInput(format!(
                "pixel buffer too short: {} bytes, {width}x{height}x{channels} needs {required}",
                data.len()
            )));
        }

        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Total pixel count (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The pixel bytes actually covered by the declared dimensions.
    pub fn pixels(&self) -> &'a [u8] {
        &self.data[..self.pixel_count() * self.channels as usize]
    }
}

fn required_len(width: u32, height: u32, channels: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(channels as usize)
}

/// A ranked match: position in the caller's candidate slice plus its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub index: usize,
    pub score: f64,
}

/// Errors that can occur in the matching library.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Convenience result type.
pub type MatchResult<T> = Result<T, MatchError>;
