//! Image reading (any decodable format, as RGB8) and PNG writing.

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use log::debug;

use crate::error::Result;
use crate::raster::Raster;

/// Open an image file as an RGB raster (alpha dropped, grey expanded)
pub fn read_image(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    debug!("image: {}x{} {:?}", rgb.width(), rgb.height(), img.color());
    Raster::try_from(rgb)
}

/// Decode an in-memory image as an RGB raster
pub fn read_image_from_memory(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory(bytes)?;
    Raster::try_from(img.to_rgb8())
}

/// Save a raster as PNG
pub fn write_png(path: &Path, raster: &Raster) -> Result<()> {
    raster.to_image()?.save_with_format(path, ImageFormat::Png)?;
    debug!("image: wrote {}x{} PNG", raster.width(), raster.height());
    Ok(())
}

/// Encode a raster as PNG bytes
pub fn write_png_to_vec(raster: &Raster) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    raster.to_image()?.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    #[test]
    fn test_png_roundtrip() {
        let raster = Raster::from_raw(2, 1, vec![1, 2, 3, 250, 251, 252]).unwrap();
        let bytes = write_png_to_vec(&raster).unwrap();
        assert_eq!(read_image_from_memory(&bytes).unwrap(), raster);
    }

    #[test]
    fn test_alpha_is_dropped() {
        let rgba = RgbaImage::from_raw(1, 1, vec![10, 20, 30, 0]).unwrap();
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut cursor, ImageFormat::Png)
            .unwrap();

        let raster = read_image_from_memory(&cursor.into_inner()).unwrap();
        assert_eq!(raster.pixel(0, 0), [10, 20, 30]);
    }
}
