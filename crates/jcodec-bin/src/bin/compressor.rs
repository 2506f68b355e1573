//! `compressor <input_image> <output_file> [quality]`
//!
//! Reads a 24-bit uncompressed BMP, encodes it into a jcodec container at the
//! requested quality (default 50) and writes the container to `output_file`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jcodec_bin::{compression_ratio, init_logger};
use log::{error, info};

#[derive(Parser)]
#[command(name = "compressor")]
#[command(about = "Compress a 24-bit BMP into a jcodec container")]
struct Cli {
    /// BMP file to read
    input_image: PathBuf,

    /// Container file to write
    output_file: PathBuf,

    /// Encoding quality, 1..=100
    #[arg(default_value_t = 50)]
    quality: u8,

    /// Raise log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8
}

fn run(cli: &Cli) -> Result<(), String> {
    let input_bytes = std::fs::read(&cli.input_image).map_err(|err| format!("reading {}: {err}", cli.input_image.display()))?;

    let bmp = jcodec_bmp::decode_bmp(&input_bytes).map_err(|err| format!("decoding BMP: {err}"))?;

    info!("loaded {}x{} BMP from {}", bmp.width, bmp.height, cli.input_image.display());

    let container_bytes = jcodec::encode_image(&bmp.header, bmp.width as usize, bmp.height as usize, &bmp.rgb, cli.quality)
        .map_err(|err| format!("encoding image: {err}"))?;

    std::fs::write(&cli.output_file, &container_bytes).map_err(|err| format!("writing {}: {err}", cli.output_file.display()))?;

    let (cols, rows) = jcodec::macroblock::macroblock_grid(bmp.width as usize, bmp.height as usize);
    let ratio = compression_ratio(input_bytes.len() as u64, container_bytes.len() as u64);

    println!("Encoded {} macroblocks.", cols * rows);
    println!("The compressed file is {ratio:.2}% smaller than the original image.");

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if !(1..=100).contains(&cli.quality) {
        error!("quality {} is outside 1..=100", cli.quality);
        eprintln!("Error: quality must be between 1 and 100.");
        return ExitCode::FAILURE;
    }

    if let Err(message) = run(&cli) {
        error!("{message}");
        eprintln!("Error: {message}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
