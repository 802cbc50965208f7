//! Error types for the codec and its file boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while packing, unpacking or transforming signals and rasters.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is too short, malformed, or declares impossible geometry.
    #[error("format error: {message}")]
    Format {
        /// What was wrong with the input.
        message: String,
    },

    /// Declared geometry exceeds a configured ceiling.
    #[error("{field} = {value} exceeds limit of {limit}")]
    ResourceLimit {
        /// Which quantity overflowed (width, height, samples_per_block, pixels).
        field: &'static str,
        /// The requested value.
        value: u64,
        /// The configured ceiling.
        limit: u64,
    },

    /// Invalid configuration value.
    #[error("invalid config '{name}': {message}")]
    Config {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: String,
    },

    /// A file could not be classified as audio or image.
    #[error("unsupported input: {}", .path.display())]
    UnsupportedInput {
        /// The offending path.
        path: PathBuf,
    },

    /// Some inputs of a batch conversion failed (each is logged as it fails).
    #[error("{failed} of {total} conversions failed")]
    Batch {
        /// Failed conversions.
        failed: usize,
        /// Attempted conversions.
        total: usize,
    },

    /// WAV container error.
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Image container error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Creates a resource limit error.
    pub fn resource_limit(field: &'static str, value: u64, limit: u64) -> Self {
        Self::ResourceLimit {
            field,
            value,
            limit,
        }
    }

    /// Creates a configuration error.
    pub fn config(name: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            name,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_limit_message() {
        let err = CodecError::resource_limit("width", 30_000, 8192);
        assert_eq!(err.to_string(), "width = 30000 exceeds limit of 8192");
    }

    #[test]
    fn test_unsupported_input_shows_path() {
        let err = CodecError::UnsupportedInput {
            path: PathBuf::from("notes.txt"),
        };
        assert_eq!(err.to_string(), "unsupported input: notes.txt");
    }
}
