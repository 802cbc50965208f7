//! Audio -> image: block magnitude spectra become pixel rows.

use rayon::prelude::*;

use super::fft::RealForward;
use crate::header::Header;

/// Build one flat RGB row from one block
///
/// The first `width * 3` magnitudes are scaled by `scale`, clipped to
/// [0, 255] and truncated to u8. When the block's spectrum has fewer bins
/// than the row needs, the remaining channels stay zero.
pub fn forward_row(forward: &RealForward, block: &[f64], scale: f64, row: &mut [u8]) {
    if block.is_empty() {
        // All-zero block: every magnitude is 0
        row.fill(0);
        return;
    }

    let mags = forward.magnitudes(block);
    for (i, px) in row.iter_mut().enumerate() {
        *px = match mags.get(i) {
            Some(&m) => (m * scale).clamp(0.0, 255.0) as u8,
            None => 0,
        };
    }
}

/// Reconstruct all rows from the post-header body
///
/// Row `r` is built from body samples `r*N .. (r+1)*N`; a short or missing
/// block is zero-padded. Returns `height * width * 3` bytes, row-major.
pub fn forward_rows(body: &[f64], header: &Header) -> Vec<u8> {
    let n = header.samples_per_block;
    let row_len = header.bins_per_row();
    let forward = RealForward::new(n);

    let mut pixels = vec![0u8; row_len * header.height];
    pixels
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(r, row)| {
            let start = r.saturating_mul(n).min(body.len());
            let end = start.saturating_add(n).min(body.len());
            forward_row(&forward, &body[start..end], header.scale, row);
        });
    pixels
}
