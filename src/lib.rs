pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod processing;

pub use cli::{prepare_output_dir, Args};
pub use error::{CompressionError, Result};
pub use formats::{clamp_quality, EncoderFormat};
pub use processing::{
    compress_image, describe_result, load_image_with_metadata, output_path_for,
    resize_to_current_size, save_image, validate_file_exists, Compressed, CompressionRequest,
    CompressionResult,
};
