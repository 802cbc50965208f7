//! File boundary: WAV and image containers in and out of the codec types.

mod png;
mod wav;

use std::path::Path;

pub use png::{read_image, read_image_from_memory, write_png, write_png_to_vec};
pub use wav::{read_wav, read_wav_from, write_wav, write_wav_to_vec};

/// What kind of file an input path holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// WAV audio, to be decoded into an image
    Audio,

    /// Anything the image decoder understands, to be encoded into audio
    Image,
}

impl InputKind {
    /// Classify by extension (`.wav` is audio, known image extensions are images)
    pub fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if ext == "wav" || ext == "wave" {
            return Some(Self::Audio);
        }
        image::ImageFormat::from_extension(&ext).map(|_| Self::Image)
    }
}
