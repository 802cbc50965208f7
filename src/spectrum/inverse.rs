//! Image -> audio: pixel rows become zero-phase synthesized blocks.

use rayon::prelude::*;

use super::fft::RealInverse;
use crate::raster::{Raster, CHANNELS};
use crate::signal::peak;

/// How the synthesized body was scaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Body was divided by this peak so its largest |sample| is 1.0
    Peak(f64),

    /// Body was all zero and left unscaled
    Silent,
}

impl Normalization {
    /// Peak before normalization (0.0 when silent)
    pub fn peak(&self) -> f64 {
        match *self {
            Self::Peak(p) => p,
            Self::Silent => 0.0,
        }
    }
}

/// Normalized audio body synthesized from a raster
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// Concatenated blocks, one per row, top row first
    pub samples: Vec<f64>,

    /// Block length (`width * 3 * 2`)
    pub samples_per_block: usize,

    pub normalization: Normalization,
}

/// Samples per block for a raster of `width` pixels
///
/// Twice the bin count a row fills, so the spectrum has room for every
/// channel value below the Nyquist bin.
pub fn block_len(width: usize) -> usize {
    width * CHANNELS * 2
}

/// Synthesize one block from one flat RGB row
pub fn inverse_row(inverse: &RealInverse, row: &[u8], block: &mut [f64]) {
    let coeffs: Vec<f64> = row.iter().map(|&p| p as f64).collect();
    inverse.synthesize(&coeffs, block);
}

/// Synthesize and peak-normalize the full body for `raster`
pub fn inverse_rows(raster: &Raster) -> Synthesis {
    let n = block_len(raster.width());
    let inverse = RealInverse::new(n);

    let mut samples = vec![0.0f64; n * raster.height()];
    samples
        .par_chunks_mut(n)
        .zip(raster.as_bytes().par_chunks_exact(raster.row_len()))
        .for_each(|(block, row)| inverse_row(&inverse, row, block));

    let max = peak(&samples);
    let normalization = if max > 0.0 {
        samples.par_iter_mut().for_each(|s| *s /= max);
        Normalization::Peak(max)
    } else {
        Normalization::Silent
    };

    Synthesis {
        samples,
        samples_per_block: n,
        normalization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Header;
    use crate::spectrum::forward_rows;

    #[test]
    fn test_block_len_from_width() {
        assert_eq!(block_len(1), 6);
        assert_eq!(block_len(640), 3840);
    }

    #[test]
    fn test_body_length_and_block_size() {
        let raster = Raster::from_raw(5, 3, vec![17; 45]).unwrap();
        let synthesis = inverse_rows(&raster);
        assert_eq!(synthesis.samples_per_block, 30);
        assert_eq!(synthesis.samples.len(), 90);
    }

    #[test]
    fn test_peak_normalized_to_one() {
        let pixels: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 37 % 256) as u8).collect();
        let raster = Raster::from_raw(4, 3, pixels).unwrap();
        let synthesis = inverse_rows(&raster);

        assert!(matches!(synthesis.normalization, Normalization::Peak(p) if p > 0.0));
        assert!((peak(&synthesis.samples) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_black_raster_is_silent() {
        let raster = Raster::from_raw(3, 2, vec![0; 18]).unwrap();
        let synthesis = inverse_rows(&raster);

        assert_eq!(synthesis.normalization, Normalization::Silent);
        assert_eq!(synthesis.normalization.peak(), 0.0);
        assert!(synthesis.samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_dc_only_row() {
        // Single red pixel: only the DC coefficient is set, so the block is flat
        let raster = Raster::from_raw(1, 1, vec![255, 0, 0]).unwrap();
        let synthesis = inverse_rows(&raster);

        // 255 / 6 before normalization
        assert!((synthesis.normalization.peak() - 42.5).abs() < 1e-4);
        for s in &synthesis.samples {
            assert!((s - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_forward_recovers_relative_channel_shape() {
        // Zero-phase synthesis is magnitude-preserving bin by bin, so scaling
        // the normalized body back by its peak recovers the row
        let row = vec![200, 10, 90, 0, 150, 60];
        let raster = Raster::from_raw(2, 1, row.clone()).unwrap();
        let synthesis = inverse_rows(&raster);

        let header = Header {
            width: 2,
            height: 1,
            samples_per_block: synthesis.samples_per_block,
            scale: synthesis.normalization.peak(),
        };
        let pixels = forward_rows(&synthesis.samples, &header);
        for (got, want) in pixels.iter().zip(&row) {
            assert!((*got as i32 - *want as i32).abs() <= 1, "{} vs {}", got, want);
        }
    }
}
