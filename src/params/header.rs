//! Affine scaling constants for the four-sample signal header.
//!
//! Each field `v` is stored as `v / SCALE - 1.0`, so the nominal sample
//! range [-1, 1] covers `0..=2 * SCALE`.

/// Number of samples occupied by the header
pub const HEADER_LEN: usize = 4;

/// Width and height scale (pixels per unit sample)
/// Representable range: 0..=20000 pixels
pub const DIMENSION_SCALE: f64 = 10_000.0;

/// Samples-per-block scale
/// Representable range: 0..=100000 samples
pub const BLOCK_SCALE: f64 = 50_000.0;

/// Magnitude scale factor scale
/// Representable range: 0.0..=200.0
pub const MAGNITUDE_SCALE: f64 = 100.0;
