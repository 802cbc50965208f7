//! Resource ceilings applied to header-declared and raster geometry.

use crate::error::{CodecError, Result};

/// Upper bounds checked before any raster or block buffer is allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum raster width (pixels)
    pub max_width: usize,

    /// Maximum raster height (pixels)
    pub max_height: usize,

    /// Maximum samples per block (one block per raster row)
    /// Encoding derives `width * 6`, so this also caps encodable width
    pub max_samples_per_block: usize,

    /// Maximum total pixel count (width * height)
    pub max_pixels: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_width: 8192,
            max_height: 8192,
            max_samples_per_block: 100_000, // Top of the header's nominal range
            max_pixels: 16_777_216,         // 4096 x 4096, ~48 MiB of RGB
        }
    }
}

impl CodecLimits {
    /// Validate configuration (every ceiling must be non-zero)
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("max_width", self.max_width),
            ("max_height", self.max_height),
            ("max_samples_per_block", self.max_samples_per_block),
            ("max_pixels", self.max_pixels),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(CodecError::config(name, "must be > 0"));
            }
        }
        Ok(())
    }

    /// Check a raster geometry against the width, height and pixel ceilings
    pub fn check_raster(&self, width: usize, height: usize) -> Result<()> {
        check("width", width, self.max_width)?;
        check("height", height, self.max_height)?;
        let pixels = width.saturating_mul(height);
        check("pixels", pixels, self.max_pixels)
    }

    /// Check a block length against the samples-per-block ceiling
    pub fn check_block(&self, samples_per_block: usize) -> Result<()> {
        check(
            "samples_per_block",
            samples_per_block,
            self.max_samples_per_block,
        )
    }
}

fn check(field: &'static str, value: usize, limit: usize) -> Result<()> {
    if value > limit {
        return Err(CodecError::resource_limit(field, value as u64, limit as u64));
    }
    Ok(())
}
