//! Pixel type read from the source image.

use serde::{Deserialize, Serialize};

/// One RGB pixel of the source image.
///
/// Pixels are constructed once per scan position and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    /// Red channel. Drives the tone duration.
    pub r: u8,
    /// Green channel. Drives the octave.
    pub g: u8,
    /// Blue channel. Drives the harmonic index.
    pub b: u8,
}

impl Pixel {
    /// Creates a pixel from its red, green and blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure black (all channels 0).
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    /// Pure white (all channels 255).
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);
}

impl From<image::Rgb<u8>> for Pixel {
    fn from(rgb: image::Rgb<u8>) -> Self {
        let image::Rgb([r, g, b]) = rgb;
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb_keeps_channel_order() {
        let pixel = Pixel::from(image::Rgb([10, 20, 30]));
        assert_eq!(pixel, Pixel::new(10, 20, 30));
    }

    #[test]
    fn constants() {
        assert_eq!(Pixel::BLACK, Pixel::from([0, 0, 0]));
        assert_eq!(Pixel::WHITE, Pixel::from([255, 255, 255]));
    }
}
