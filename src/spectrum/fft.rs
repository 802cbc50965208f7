//! One-sided real transforms on top of rustfft's complex FFT.
//!
//! Conventions match the usual `rfft`/`irfft` pair: the forward transform
//! is unnormalized, the inverse scales by `1/n`, and the inverse ignores
//! any imaginary content in the DC and Nyquist bins.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

use super::bin_count;

/// Forward real transform of `n`-sample blocks, returning bin magnitudes
///
/// Planned once and shared read-only across worker threads; every call
/// owns its own buffers.
pub struct RealForward {
    len: usize,
    fft: Arc<dyn Fft<f64>>,
}

impl RealForward {
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(len);
        Self { len, fft }
    }

    /// Magnitudes of the `n/2 + 1` one-sided bins of `block`
    ///
    /// A block shorter than `n` is zero-padded on the right; extra samples
    /// beyond `n` are ignored.
    pub fn magnitudes(&self, block: &[f64]) -> Vec<f64> {
        let mut buffer = vec![Complex::new(0.0, 0.0); self.len];
        for (slot, &sample) in buffer.iter_mut().zip(block) {
            slot.re = sample;
        }

        let mut scratch = vec![Complex::new(0.0, 0.0); self.fft.get_inplace_scratch_len()];
        self.fft.process_with_scratch(&mut buffer, &mut scratch);

        buffer[..bin_count(self.len)]
            .iter()
            .map(|c| c.norm())
            .collect()
    }
}

/// Inverse real transform synthesizing `n` samples from real coefficients
pub struct RealInverse {
    len: usize,
    fft: Arc<dyn Fft<f64>>,
}

impl RealInverse {
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_inverse(len);
        Self { len, fft }
    }

    /// Synthesize one block into `out` from zero-phase coefficients
    ///
    /// `coeffs` fills the leading one-sided bins (missing bins are zero,
    /// extra ones are dropped). The spectrum is mirrored into Hermitian
    /// form so the time-domain result is real.
    pub fn synthesize(&self, coeffs: &[f64], out: &mut [f64]) {
        let n = self.len;
        let bins = bin_count(n).min(coeffs.len());

        let mut buffer = vec![Complex::new(0.0, 0.0); n];
        for (slot, &c) in buffer[..bins].iter_mut().zip(coeffs) {
            slot.re = c;
        }
        // Mirror bins 1..ceil(n/2); the Nyquist bin of an even block has no twin
        for k in 1..n.div_ceil(2) {
            buffer[n - k] = buffer[k].conj();
        }

        let mut scratch = vec![Complex::new(0.0, 0.0); self.fft.get_inplace_scratch_len()];
        self.fft.process_with_scratch(&mut buffer, &mut scratch);

        let norm = 1.0 / n as f64;
        for (o, c) in out.iter_mut().zip(&buffer) {
            *o = c.re * norm;
        }
    }
}
