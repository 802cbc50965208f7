//! Audio container configuration.

/// Fixed sample rate for every signal this system emits (Hz)
pub const SAMPLE_RATE_HZ: u32 = 44_100;

/// WAV layout used when storing an encoded signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Sample rate (Hz)
    pub sample_rate_hz: u32,

    /// Channel count (always mono on output)
    pub channels: u16,

    /// Bits per stored sample
    /// 32-bit float keeps the four header samples exact through storage;
    /// 16-bit PCM would quantize the block size beyond recovery
    pub bits_per_sample: u16,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self {
            sample_rate_hz: SAMPLE_RATE_HZ,
            channels: 1,
            bits_per_sample: 32,
        }
    }
}

impl AudioFormat {
    /// hound spec for writing this format
    pub fn wav_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate_hz,
            bits_per_sample: self.bits_per_sample,
            sample_format: hound::SampleFormat::Float,
        }
    }
}
