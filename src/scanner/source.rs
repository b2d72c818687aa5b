//! Source image loading and pixel iteration.

use std::path::Path;

use image::RgbImage;

use crate::error::{PixelNoiseError, Result};
use crate::types::Pixel;

/// A decoded image held in memory for the duration of a scan.
#[derive(Debug, Clone)]
pub struct ImageScanner {
    image: RgbImage,
}

impl ImageScanner {
    /// Opens and decodes an image file.
    ///
    /// The format is picked from the file extension. Alpha is dropped and
    /// higher bit depths are reduced to 8 bits per channel.
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .map_err(|e| PixelNoiseError::image_load(path, e))?
            .to_rgb8();
        log::info!(
            "Loaded image {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self { image })
    }

    /// Wraps an already decoded image.
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Iterates rows top to bottom, each yielding its pixels left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Pixel> + '_> + '_ {
        self.image
            .rows()
            .map(|row| row.map(|rgb| Pixel::from(*rgb)))
    }

    /// Iterates every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.rows().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use image::Rgb;
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, (x + y) as u8]))
    }

    #[test]
    fn pixels_are_row_major() {
        let scanner = ImageScanner::from_image(gradient(3, 2));
        let order: Vec<(u8, u8)> = scanner.pixels().map(|p| (p.r, p.g)).collect();
        // r = column, g = row
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn rows_yield_full_width() {
        let scanner = ImageScanner::from_image(gradient(4, 3));
        let widths: Vec<usize> = scanner.rows().map(|row| row.count()).collect();
        assert_eq!(widths, vec![4, 4, 4]);
        assert_eq!(scanner.pixel_count(), 12);
    }

    #[test]
    fn open_decodes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.png");
        gradient(5, 2).save(&path).unwrap();

        let scanner = ImageScanner::open(&path).unwrap();
        assert_eq!(scanner.width(), 5);
        assert_eq!(scanner.height(), 2);
        assert_eq!(scanner.pixels().nth(6), Some(Pixel::new(1, 1, 2)));
    }

    #[test]
    fn open_unknown_extension_is_image_load_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.xyz");
        std::fs::write(&path, b"pixels").unwrap();

        let err = ImageScanner::open(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ImageLoadFailed);
    }

    #[test]
    fn open_missing_file_is_image_load_error() {
        let dir = tempdir().unwrap();
        let err = ImageScanner::open(&dir.path().join("missing.png")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ImageLoadFailed);
        assert!(err.message.contains("missing.png"));
    }

    #[test]
    fn open_corrupt_file_is_image_load_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();

        let err = ImageScanner::open(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ImageLoadFailed);
    }
}
