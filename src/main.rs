//! Pixelwave - turn images into sound and sound back into images
//!
//! Every pixel row becomes one block of audio whose spectrum is the row.

use std::process::ExitCode;

use clap::Parser;
use log::error;

use pixelwave::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
