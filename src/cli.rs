//! Command-line argument parsing and command execution.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use log::{error, info, warn, LevelFilter};

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::io::{self, InputKind};
use crate::params::{CodecLimits, OutputConfig};
use crate::spectrum::Normalization;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "pixelwave")]
#[command(about = "Turn images into audio and audio back into images", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Maximum raster width in pixels
    #[arg(long, global = true, value_name = "PIXELS")]
    pub max_width: Option<usize>,

    /// Maximum raster height in pixels
    #[arg(long, global = true, value_name = "PIXELS")]
    pub max_height: Option<usize>,

    /// Maximum samples per block
    #[arg(long, global = true, value_name = "SAMPLES")]
    pub max_block: Option<usize>,

    /// Maximum total pixel count
    #[arg(long, global = true, value_name = "PIXELS")]
    pub max_pixels: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode an image into a WAV file
    Encode {
        /// Input image
        input: PathBuf,

        /// Output WAV (default: input with .wav extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a WAV file back into a PNG image
    Decode {
        /// Input WAV
        input: PathBuf,

        /// Output PNG (default: input with .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert each input by type: WAV -> PNG, image -> WAV
    Convert {
        /// Input files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for converted files (created if missing, never emptied)
        #[arg(long, value_name = "DIR", default_value = "outputs")]
        output_dir: PathBuf,
    },
}

impl Args {
    /// Resource ceilings with command-line overrides applied
    pub fn codec_limits(&self) -> CodecLimits {
        let defaults = CodecLimits::default();
        CodecLimits {
            max_width: self.max_width.unwrap_or(defaults.max_width),
            max_height: self.max_height.unwrap_or(defaults.max_height),
            max_samples_per_block: self.max_block.unwrap_or(defaults.max_samples_per_block),
            max_pixels: self.max_pixels.unwrap_or(defaults.max_pixels),
        }
    }

    /// Log level from -v / -q flags (RUST_LOG still overrides)
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Run the selected command
pub fn run(args: &Args) -> Result<()> {
    let codec = Codec::new(args.codec_limits())?;

    match &args.command {
        Command::Encode { input, output } => {
            let output = output
                .clone()
                .unwrap_or_else(|| input.with_extension("wav"));
            encode_file(&codec, input, &output)
        }
        Command::Decode { input, output } => {
            let output = output
                .clone()
                .unwrap_or_else(|| input.with_extension("png"));
            decode_file(&codec, input, &output)
        }
        Command::Convert { inputs, output_dir } => {
            convert_files(&codec, inputs, &OutputConfig::new(output_dir))
        }
    }
}

/// Image file -> WAV file
pub fn encode_file(codec: &Codec, input: &Path, output: &Path) -> Result<()> {
    let raster = io::read_image(input)?;
    let encoded = codec.encode(&raster)?;

    if encoded.normalization == Normalization::Silent {
        warn!(
            "{}: image is entirely black, audio body left unnormalized",
            input.display()
        );
    }

    io::write_wav(output, &encoded.signal)?;
    info!(
        "Encoded {} ({}x{}) -> {} ({} samples/block, {:.2}s)",
        input.display(),
        raster.width(),
        raster.height(),
        output.display(),
        encoded.header.samples_per_block,
        encoded.signal.duration_secs()
    );
    Ok(())
}

/// WAV file -> PNG file
pub fn decode_file(codec: &Codec, input: &Path, output: &Path) -> Result<()> {
    let signal = io::read_wav(input)?;
    let raster = codec.decode_audio_to_image(&signal.samples, signal.sample_rate)?;

    io::write_png(output, &raster)?;
    info!(
        "Decoded {} ({} samples) -> {} ({}x{})",
        input.display(),
        signal.len(),
        output.display(),
        raster.width(),
        raster.height()
    );
    Ok(())
}

/// Convert one input into `config.output_dir`, returning the written path
///
/// The output name is reserved before converting; a failed conversion
/// releases it again.
pub fn convert_file(codec: &Codec, input: &Path, config: &OutputConfig) -> Result<PathBuf> {
    let kind = InputKind::detect(input).ok_or_else(|| CodecError::UnsupportedInput {
        path: input.to_path_buf(),
    })?;

    std::fs::create_dir_all(&config.output_dir)?;
    let extension = match kind {
        InputKind::Audio => "png",
        InputKind::Image => "wav",
    };
    let output = config.claim_output_path(input, extension)?;

    let converted = match kind {
        InputKind::Audio => decode_file(codec, input, &output),
        InputKind::Image => encode_file(codec, input, &output),
    };
    if let Err(e) = converted {
        if let Err(rm) = std::fs::remove_file(&output) {
            warn!("{}: could not release {}: {}", input.display(), output.display(), rm);
        }
        return Err(e);
    }
    Ok(output)
}

/// Convert every input independently; one failure does not stop the rest
pub fn convert_files(codec: &Codec, inputs: &[PathBuf], config: &OutputConfig) -> Result<()> {
    let mut failed = 0;
    for input in inputs {
        if let Err(e) = convert_file(codec, input, config) {
            error!("{}: {}", input.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(CodecError::Batch {
            failed,
            total: inputs.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_overrides() {
        let args = Args::parse_from([
            "pixelwave",
            "--max-width",
            "640",
            "decode",
            "in.wav",
        ]);
        let limits = args.codec_limits();
        assert_eq!(limits.max_width, 640);
        assert_eq!(limits.max_height, CodecLimits::default().max_height);
    }

    #[test]
    fn test_log_level_flags() {
        let args = Args::parse_from(["pixelwave", "-vv", "encode", "a.png"]);
        assert_eq!(args.log_level(), LevelFilter::Trace);

        let args = Args::parse_from(["pixelwave", "encode", "a.png", "-q"]);
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_convert_requires_inputs() {
        assert!(Args::try_parse_from(["pixelwave", "convert"]).is_err());
    }

    #[test]
    fn test_convert_defaults() {
        let args = Args::parse_from(["pixelwave", "convert", "a.png", "b.wav"]);
        match args.command {
            Command::Convert { inputs, output_dir } => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(output_dir, PathBuf::from("outputs"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_input() {
        let codec = Codec::default();
        let err = convert_file(&codec, Path::new("notes.txt"), &OutputConfig::default())
            .unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedInput { .. }));
    }
}
