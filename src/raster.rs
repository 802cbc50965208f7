//! RGB pixel grid exchanged with the image boundary.

use image::RgbImage;

use crate::error::{CodecError, Result};

/// Channels per pixel (RGB)
pub const CHANNELS: usize = 3;

/// Height x width grid of RGB8 pixels, row-major, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Wrap a flat RGB buffer of exactly `width * height * 3` bytes
    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CodecError::format(format!(
                "raster must be non-empty, got {}x{}",
                width, height
            )));
        }
        let expected = width * height * CHANNELS;
        if pixels.len() != expected {
            return Err(CodecError::format(format!(
                "raster {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from nested rows of `[r, g, b]` pixels
    pub fn from_rows(rows: &[Vec<[u8; 3]>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(CodecError::format(format!(
                "row {} has {} pixels, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }
        let pixels = rows.iter().flatten().flatten().copied().collect();
        Self::from_raw(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat RGB bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row (`width * 3`)
    pub fn row_len(&self) -> usize {
        self.width * CHANNELS
    }

    /// Flat RGB bytes of one row
    pub fn row(&self, y: usize) -> &[u8] {
        let len = self.row_len();
        &self.pixels[y * len..(y + 1) * len]
    }

    /// Pixel at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * CHANNELS;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Convert to an `image` buffer for saving
    pub fn to_image(&self) -> Result<RgbImage> {
        let width = u32::try_from(self.width)
            .map_err(|_| CodecError::format("raster width exceeds u32"))?;
        let height = u32::try_from(self.height)
            .map_err(|_| CodecError::format("raster height exceeds u32"))?;
        RgbImage::from_raw(width, height, self.pixels.clone())
            .ok_or_else(|| CodecError::format("raster buffer does not match its dimensions"))
    }
}

impl TryFrom<RgbImage> for Raster {
    type Error = CodecError;

    fn try_from(img: RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width as usize, height as usize, img.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_layout() {
        let raster = Raster::from_rows(&[
            vec![[255, 0, 0], [0, 255, 0]],
            vec![[0, 0, 255], [255, 255, 255]],
        ])
        .unwrap();

        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.row(0), &[255, 0, 0, 0, 255, 0]);
        assert_eq!(raster.pixel(0, 1), [0, 0, 255]);
        assert_eq!(raster.row(1), &[0, 0, 255, 255, 255, 255]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Raster::from_rows(&[vec![[0; 3]; 2], vec![[0; 3]; 1]]).unwrap_err();
        assert!(matches!(err, CodecError::Format { .. }));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Raster::from_raw(0, 3, vec![]).is_err());
        assert!(Raster::from_rows(&[]).is_err());
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(Raster::from_raw(2, 2, vec![0; 11]).is_err());
    }

    #[test]
    fn test_image_conversion() {
        let raster = Raster::from_raw(3, 1, (0..9).collect()).unwrap();
        let img = raster.to_image().unwrap();
        assert_eq!(img.get_pixel(2, 0).0, [6, 7, 8]);

        let back = Raster::try_from(img).unwrap();
        assert_eq!(back, raster);
    }
}
