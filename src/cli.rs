use crate::constants::{DEFAULT_FORMAT, DEFAULT_OUTPUT_DIR, DEFAULT_QUALITY};
use crate::processing::CompressionRequest;
use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "img-compress",
    about = "Image Compression Tool",
    long_about = "Re-encodes a single image at the given quality and format and writes it to \
                  <OUTPUT_DIR>/compressed_<input file name>. The file name keeps the input's \
                  extension whatever the output format is.",
    version,
    after_help = "EXAMPLES:\n  \
    img-compress photo.png\n  \
    img-compress photo.png -o ./out -q 60\n  \
    img-compress scan.tiff -f PNG"
)]
pub struct Args {
    #[arg(help = "Input image file")]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long = "output_dir",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Output directory for compressed image (default is './compressed')",
        long_help = "Directory the compressed image is written to. \
                     Created, including missing parents, if it does not exist."
    )]
    pub output_dir: PathBuf,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        allow_negative_numbers = true,
        help = "Compression quality (0-100, higher is better, default is 85)",
        long_help = "Compression quality handed to the encoder as is. \
                     JPEG and AVIF clamp it into 1-100; other formats ignore it."
    )]
    pub quality: i64,

    #[arg(
        short = 'f',
        long,
        default_value = DEFAULT_FORMAT,
        help = "Output image format (e.g., JPEG, PNG, default is JPEG)",
        long_help = "Output encoder, case-insensitive. \
                     Supported: JPEG/JPG, PNG, WEBP, BMP, GIF, TIFF/TIF, TGA, ICO, AVIF"
    )]
    pub format: String,

    #[arg(short = 'v', long, help = "Print debug logging to stderr")]
    pub verbose: bool,
}

impl Args {
    pub fn into_request(self) -> CompressionRequest {
        CompressionRequest::new(self.input, self.output_dir, self.quality, self.format)
    }
}

/// Creates the output directory and any missing parents.
pub fn prepare_output_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}
