//! Mono audio signal exchanged with the WAV boundary.

/// Ordered mono samples in nominal range [-1, 1] plus their sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
}

impl AudioSignal {
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Fold interleaved frames of `channels` samples into mono by averaging
    ///
    /// A trailing partial frame is averaged over the samples it has.
    pub fn from_interleaved(interleaved: &[f64], channels: usize, sample_rate: u32) -> Self {
        let samples = if channels <= 1 {
            interleaved.to_vec()
        } else {
            interleaved
                .chunks(channels)
                .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
                .collect()
        };
        Self::new(samples, sample_rate)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Largest absolute sample value (0.0 for an empty slice)
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0f64, |acc, s| acc.max(s.abs()))
}
