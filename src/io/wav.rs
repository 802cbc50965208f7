//! WAV reading (any layout, folded to mono) and writing (mono 32-bit float).
//!
//! Samples are f64 in memory and f32 on disk. The f32 step keeps header
//! width, height and block size exact, and keeps the scale within 1e-3
//! relative error for scales above roughly 1.5e-3.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::params::AudioFormat;
use crate::signal::AudioSignal;

/// Read a WAV file into a mono signal
pub fn read_wav(path: &Path) -> Result<AudioSignal> {
    let file = BufReader::new(File::open(path)?);
    read_wav_from(file)
}

/// Read WAV bytes from any reader into a mono signal
///
/// Integer PCM is scaled to [-1, 1) by its full-scale value; multi-channel
/// frames are averaged.
pub fn read_wav_from<R: Read>(reader: R) -> Result<AudioSignal> {
    let mut reader = hound::WavReader::new(reader)?;
    let spec = reader.spec();

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let full_scale = (1u64 << (spec.bits_per_sample.saturating_sub(1))) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / full_scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    debug!(
        "WAV: {} ch, {} Hz, {}-bit {:?}, {} samples",
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format,
        interleaved.len()
    );

    Ok(AudioSignal::from_interleaved(
        &interleaved,
        spec.channels as usize,
        spec.sample_rate,
    ))
}

/// Write a signal as a mono 32-bit float WAV file
pub fn write_wav(path: &Path, signal: &AudioSignal) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);
    write_wav_to(file, signal)
}

/// Write a signal as WAV bytes into memory
pub fn write_wav_to_vec(signal: &AudioSignal) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_wav_to(&mut cursor, signal)?;
    Ok(cursor.into_inner())
}

fn write_wav_to<W: Write + Seek>(writer: W, signal: &AudioSignal) -> Result<()> {
    let format = AudioFormat {
        sample_rate_hz: signal.sample_rate,
        ..AudioFormat::default()
    };
    let mut writer = hound::WavWriter::new(writer, format.wav_spec())?;
    for &sample in &signal.samples {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;

    debug!(
        "WAV: wrote {} samples @ {} Hz",
        signal.len(),
        signal.sample_rate
    );
    Ok(())
}
