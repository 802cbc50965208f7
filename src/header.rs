//! Four-sample signal header carrying raster geometry and magnitude scale.
//!
//! Each field is mapped affinely into one audio sample (see
//! [`crate::params::header`]). Integers are recovered by rounding, so the
//! header is exact in memory (f64) and survives f32 storage for every
//! field except very small scales (see [`crate::io`]).

use crate::error::{CodecError, Result};
use crate::params::header::{BLOCK_SCALE, DIMENSION_SCALE, HEADER_LEN, MAGNITUDE_SCALE};
use crate::params::CodecLimits;
use crate::raster::CHANNELS;

/// Geometry and scale of an encoded raster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    /// Raster width (pixels)
    pub width: usize,

    /// Raster height (pixels, one block per row)
    pub height: usize,

    /// Samples per block
    pub samples_per_block: usize,

    /// Multiplier applied to spectral magnitudes on decode
    /// Encoders store the pre-normalization signal peak here
    pub scale: f64,
}

/// Header values as read from samples, before any validation
///
/// Out-of-range or non-finite samples show up here as negative or NaN
/// values rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawHeader {
    /// Rounded width (pixels)
    pub width: f64,

    /// Rounded height (pixels)
    pub height: f64,

    /// Rounded samples per block
    pub samples_per_block: f64,

    /// Magnitude scale, unrounded
    pub scale: f64,
}

impl Header {
    /// Pack into four samples
    pub fn pack(&self) -> [f64; HEADER_LEN] {
        [
            self.width as f64 / DIMENSION_SCALE - 1.0,
            self.height as f64 / DIMENSION_SCALE - 1.0,
            self.samples_per_block as f64 / BLOCK_SCALE - 1.0,
            self.scale / MAGNITUDE_SCALE - 1.0,
        ]
    }

    /// Unpack the leading samples of a signal without validating them
    pub fn unpack_raw(samples: &[f64]) -> Result<RawHeader> {
        let Some(s) = samples.get(..HEADER_LEN) else {
            return Err(CodecError::format(format!(
                "signal has {} samples, header needs {}",
                samples.len(),
                HEADER_LEN
            )));
        };

        Ok(RawHeader {
            width: ((s[0] + 1.0) * DIMENSION_SCALE).round(),
            height: ((s[1] + 1.0) * DIMENSION_SCALE).round(),
            samples_per_block: ((s[2] + 1.0) * BLOCK_SCALE).round(),
            scale: (s[3] + 1.0) * MAGNITUDE_SCALE,
        })
    }

    /// Unpack and validate a header against `limits`
    ///
    /// Rejects zero/negative/non-finite geometry with a format error and
    /// oversized geometry with a resource limit error, before the caller
    /// allocates anything.
    pub fn unpack(samples: &[f64], limits: &CodecLimits) -> Result<Self> {
        let raw = Self::unpack_raw(samples)?;

        let width = positive_dimension("width", raw.width)?;
        let height = positive_dimension("height", raw.height)?;
        let samples_per_block = positive_dimension("samples_per_block", raw.samples_per_block)?;

        if !raw.scale.is_finite() || raw.scale < 0.0 {
            return Err(CodecError::format(format!(
                "header scale {} is not a non-negative number",
                raw.scale
            )));
        }

        let header = Self {
            width,
            height,
            samples_per_block,
            scale: raw.scale,
        };
        header.validate(limits)?;
        Ok(header)
    }

    /// Check geometry against `limits`
    pub fn validate(&self, limits: &CodecLimits) -> Result<()> {
        limits.check_raster(self.width, self.height)?;
        limits.check_block(self.samples_per_block)
    }

    /// Number of magnitude bins a row needs (three channels per pixel)
    pub fn bins_per_row(&self) -> usize {
        self.width * CHANNELS
    }
}

fn positive_dimension(field: &str, value: f64) -> Result<usize> {
    if !value.is_finite() || value < 1.0 {
        return Err(CodecError::format(format!(
            "header {} decodes to {}, must be >= 1",
            field, value
        )));
    }
    // Values past usize range saturate and then trip the resource limits
    Ok(value as usize)
}
