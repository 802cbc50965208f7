//! Block spectrum transforms between raster rows and audio blocks.
//!
//! The two directions are deliberately asymmetric and are not inverses of
//! each other:
//! - forward (audio -> image) keeps only the magnitudes of each block's
//!   one-sided spectrum, discarding phase
//! - inverse (image -> audio) treats pixel values as zero-phase real
//!   coefficients and synthesizes a block from them
//!
//! Only the declared geometry round-trips; pixel and sample values do not.
//! Rows are independent, so both directions run rows in parallel and
//! assemble them in row order.

mod fft;
mod forward;
mod inverse;

// Re-export public types
pub use fft::{RealForward, RealInverse};
pub use forward::{forward_row, forward_rows};
pub use inverse::{block_len, inverse_row, inverse_rows, Normalization, Synthesis};

/// Number of one-sided spectrum bins for a block of `n` real samples
pub fn bin_count(n: usize) -> usize {
    n / 2 + 1
}
