//! Pixelwave library - image <-> audio through per-row block spectra
//!
//! Each raster row maps to one fixed-size audio block. Encoding treats a
//! row's channel values as zero-phase spectral coefficients and synthesizes
//! the block; decoding takes a block's magnitude spectrum as the row. A
//! four-sample header at the front of the signal carries the geometry.

pub mod cli;
pub mod codec;
pub mod error;
pub mod header;
pub mod io;
pub mod params;
pub mod raster;
pub mod signal;
pub mod spectrum;

pub use codec::{decode_audio_to_image, encode_image_to_audio, Codec, Encoded};
pub use error::{CodecError, Result};
pub use header::Header;
pub use raster::Raster;
pub use signal::AudioSignal;
