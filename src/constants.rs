pub const DEFAULT_QUALITY: i64 = 85;
pub const DEFAULT_FORMAT: &str = "JPEG";
pub const DEFAULT_OUTPUT_DIR: &str = "./compressed";

/// Prepended to the input's file name to build the output file name.
pub const OUTPUT_FILE_PREFIX: &str = "compressed_";

/// Prefix of the temporary file the encoder writes into before the rename.
pub const TEMP_FILE_PREFIX: &str = ".compressed-";

pub const MIN_QUALITY: i64 = 1;
pub const MAX_QUALITY: i64 = 100;

/// ravif speed, 1 (slowest) to 10 (fastest).
pub const AVIF_SPEED: u8 = 6;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

pub const SUCCESS_MESSAGE: &str = "Image compressed and saved as";
pub const ERROR_PREFIX: &str = "Error:";
