//! `decompressor <input_file> <output_image>`
//!
//! Reads a jcodec container and writes the reconstructed raster as a 24-bit
//! BMP, honoring the row order of the container's passthrough header.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jcodec_bin::init_logger;
use log::{error, info};

#[derive(Parser)]
#[command(name = "decompressor")]
#[command(about = "Decompress a jcodec container back into a 24-bit BMP")]
struct Cli {
    /// Container file to read
    input_file: PathBuf,

    /// BMP file to write
    output_image: PathBuf,

    /// Raise log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8
}

fn run(cli: &Cli) -> Result<(), String> {
    let container_bytes = std::fs::read(&cli.input_file).map_err(|err| format!("reading {}: {err}", cli.input_file.display()))?;

    let decoded = jcodec::decode_image(&container_bytes).map_err(|err| format!("decoding container: {err}"))?;

    info!("reconstructed {}x{} image from {}", decoded.width, decoded.height, cli.input_file.display());

    let output_bytes = jcodec_bmp::encode_bmp_with_header(&decoded.header, &decoded.rgb);

    std::fs::write(&cli.output_image, &output_bytes).map_err(|err| format!("writing {}: {err}", cli.output_image.display()))?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(message) = run(&cli) {
        error!("{message}");
        eprintln!("Error: {message}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
