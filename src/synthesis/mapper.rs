//! Pixel to tone mapping.
//!
//! Each channel drives one property of the note:
//! - red: duration, from about 1 ms up to a quarter second
//! - green: octave multiplier, 1 through 8
//! - blue: harmonic index into the scale table, 1 through 12
//!
//! Amplitude is a gain-scaled weighted luma of all three channels.

use crate::types::{Pixel, ScaleTable, Tone, SCALE_LEN};

/// Default gain applied to the luma sum.
pub const DEFAULT_GAIN: f64 = 50.0;

/// Luma weights for red, green and blue.
///
/// The blue weight is 0.144, not the Rec. 601 value of 0.114, so the
/// weights sum to 1.03.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.144];

/// Width of one blue-channel bucket (255 / 12 in integer arithmetic).
pub const HARMONIC_BUCKET: u8 = 255 / 12;

/// Width of one green-channel bucket (255 / 8 in integer arithmetic).
pub const OCTAVE_BUCKET: u8 = 255 / 8;

/// Longest regular tone, in seconds. Red = 255 overshoots it slightly.
pub const MAX_DURATION: f64 = 0.25;

/// Maps pixels to tones using a fixed scale table and gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMapper {
    scale: ScaleTable,
    gain: f64,
}

impl PixelMapper {
    /// Creates a mapper with an explicit scale table and gain.
    pub fn new(scale: ScaleTable, gain: f64) -> Self {
        Self { scale, gain }
    }

    /// Creates a mapper over the chromatic scale with the given gain.
    pub fn with_gain(gain: f64) -> Self {
        Self::new(ScaleTable::chromatic(), gain)
    }

    /// Returns the gain applied to the luma sum.
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Maps one pixel to its tone.
    pub fn map(&self, pixel: Pixel) -> Tone {
        let octave = octave(pixel.g);
        let base = self
            .scale
            .frequency(harmonic_index(pixel.b))
            .unwrap_or(self.scale.notes()[SCALE_LEN - 1]);

        Tone::new(
            base * f64::from(octave),
            amplitude(pixel, self.gain),
            duration(pixel.r),
        )
    }
}

impl Default for PixelMapper {
    fn default() -> Self {
        Self::with_gain(DEFAULT_GAIN)
    }
}

/// Weighted luma of a pixel scaled by `gain`.
pub fn amplitude(pixel: Pixel, gain: f64) -> f64 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    (wr * f64::from(pixel.r) + wg * f64::from(pixel.g) + wb * f64::from(pixel.b)) * gain
}

/// 1-based harmonic index for a blue channel value.
///
/// Bucket 0 wraps to the top of the scale (12).
pub fn harmonic_index(blue: u8) -> u8 {
    match blue / HARMONIC_BUCKET {
        0 => 12,
        bucket => bucket,
    }
}

/// Octave multiplier for a green channel value.
///
/// Bucket 0 wraps up to octave 1 so no tone is ever silenced by a zero
/// multiplier.
pub fn octave(green: u8) -> u8 {
    match green / OCTAVE_BUCKET {
        0 => 1,
        bucket => bucket,
    }
}

/// Tone duration in seconds for a red channel value.
pub fn duration(red: u8) -> f64 {
    (f64::from(red) + 1.0) / 255.0 * MAX_DURATION
}
