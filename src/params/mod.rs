//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Units (samples, pixels, Hz)
//! - Documented ranges and meanings
//! - Validation where a bad value would break the transform

mod audio;
pub mod header;
mod limits;
mod output;

// Re-export all types
pub use audio::{AudioFormat, SAMPLE_RATE_HZ};
pub use limits::CodecLimits;
pub use output::OutputConfig;
