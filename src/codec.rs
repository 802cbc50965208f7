//! Public decode/encode contract between signals and rasters.
//!
//! Pure and stateless: every call works on its own buffers, performs no
//! I/O and never logs. Failures come back as [`CodecError`] values for the
//! caller to report.

use crate::error::{CodecError, Result};
use crate::header::Header;
use crate::params::header::HEADER_LEN;
use crate::params::{CodecLimits, SAMPLE_RATE_HZ};
use crate::raster::Raster;
use crate::signal::AudioSignal;
use crate::spectrum::{self, Normalization};

/// Encoded signal plus what happened during normalization
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Header followed by the normalized body
    pub signal: AudioSignal,

    /// Header written at the front of `signal`
    pub header: Header,

    /// `Silent` when the body was all zero and left unscaled
    pub normalization: Normalization,
}

/// Codec bound to a set of resource ceilings
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    limits: CodecLimits,
}

impl Codec {
    /// Create a codec, validating its limits
    pub fn new(limits: CodecLimits) -> Result<Self> {
        limits.validate()?;
        Ok(Self { limits })
    }

    pub fn limits(&self) -> &CodecLimits {
        &self.limits
    }

    /// Read the header at the front of `samples`, validated against the limits
    pub fn read_header(&self, samples: &[f64]) -> Result<Header> {
        Header::unpack(samples, &self.limits)
    }

    /// Rebuild a raster from a signal whose first four samples are a header
    ///
    /// Fails with a format error when the header is missing or declares
    /// empty geometry, and with a resource limit error when it declares
    /// more than the limits allow. A body shorter than `height` blocks is
    /// zero-padded.
    pub fn decode_audio_to_image(&self, samples: &[f64], sample_rate: u32) -> Result<Raster> {
        if sample_rate == 0 {
            return Err(CodecError::format("sample rate must be > 0"));
        }

        let header = self.read_header(samples)?;
        let pixels = spectrum::forward_rows(&samples[HEADER_LEN..], &header);
        Raster::from_raw(header.width, header.height, pixels)
    }

    /// Synthesize a signal from a raster and prepend its header
    ///
    /// The stored scale is the body's peak before normalization, so a
    /// decode of the result lands magnitudes back near pixel range.
    pub fn encode(&self, raster: &Raster) -> Result<Encoded> {
        let width = raster.width();
        let height = raster.height();
        self.limits.check_raster(width, height)?;
        self.limits.check_block(spectrum::block_len(width))?;

        let synthesis = spectrum::inverse_rows(raster);
        let header = Header {
            width,
            height,
            samples_per_block: synthesis.samples_per_block,
            scale: synthesis.normalization.peak(),
        };

        let mut samples = Vec::with_capacity(HEADER_LEN + synthesis.samples.len());
        samples.extend_from_slice(&header.pack());
        samples.extend_from_slice(&synthesis.samples);

        Ok(Encoded {
            signal: AudioSignal::new(samples, SAMPLE_RATE_HZ),
            header,
            normalization: synthesis.normalization,
        })
    }

    /// Synthesize a signal from a raster, discarding normalization details
    pub fn encode_image_to_audio(&self, raster: &Raster) -> Result<AudioSignal> {
        self.encode(raster).map(|encoded| encoded.signal)
    }
}

/// Decode with default limits
pub fn decode_audio_to_image(samples: &[f64], sample_rate: u32) -> Result<Raster> {
    Codec::default().decode_audio_to_image(samples, sample_rate)
}

/// Encode with default limits
pub fn encode_image_to_audio(raster: &Raster) -> Result<AudioSignal> {
    Codec::default().encode_image_to_audio(raster)
}
