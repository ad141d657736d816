use crate::constants::{ERROR_PREFIX, OUTPUT_FILE_PREFIX, SUCCESS_MESSAGE, TEMP_FILE_PREFIX};
use crate::error::{CompressionError, Result};
use crate::formats::EncoderFormat;
use image::{DynamicImage, GenericImageView, ImageReader};
use log::{debug, info};
use std::ffi::OsString;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One compression job, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionRequest {
    input_path: PathBuf,
    output_dir: PathBuf,
    quality: i64,
    format: String,
}

impl CompressionRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        quality: i64,
        format: impl Into<String>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            quality,
            format: format.into(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Where the compressed image for this request is written.
    pub fn output_path(&self) -> PathBuf {
        output_path_for(&self.input_path, &self.output_dir)
    }
}

/// A successfully written image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    pub output_path: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
    pub dimensions: (u32, u32),
}

impl Compressed {
    /// Percentage of the input size saved; negative when the output grew.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (self.original_size as f64 - self.compressed_size as f64) / self.original_size as f64
            * 100.0
    }
}

pub type CompressionResult = Result<Compressed>;

/// Validates that a file exists at the given path.
///
/// # Example
/// ```
/// use std::path::Path;
/// use img_compress::validate_file_exists;
///
/// let result = validate_file_exists(Path::new("nonexistent.jpg"));
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CompressionError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Builds `<output_dir>/compressed_<file name of input>`.
///
/// The extension of the input is kept even when the image is re-encoded to
/// another format.
pub fn output_path_for(input_path: &Path, output_dir: &Path) -> PathBuf {
    let mut file_name = OsString::from(OUTPUT_FILE_PREFIX);
    file_name.push(input_path.file_name().unwrap_or_default());
    output_dir.join(file_name)
}

/// Loads an image file and returns it along with its size on disk.
///
/// The decoder is chosen from the file contents, not the extension.
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    validate_file_exists(input_path)?;

    let file_size = fs::metadata(input_path)?.len();
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()
        .map_err(CompressionError::decode)?;

    let (width, height) = img.dimensions();
    debug!(
        "Loaded {}: {}x{} pixels, color {:?}, {} bytes",
        input_path.display(),
        width,
        height,
        img.color(),
        file_size
    );

    Ok((img, file_size))
}

/// Resamples the image to the dimensions it already has.
pub fn resize_to_current_size(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    debug!("Resizing to current size {}x{}", width, height);
    img.resize_exact(width, height, image::imageops::FilterType::Lanczos3)
}

/// Encodes `img` next to `output_path` and renames it into place.
///
/// Returns the size of the written file. On failure the temporary file is
/// removed and nothing is created at `output_path`.
pub fn save_image(
    img: &DynamicImage,
    output_path: &Path,
    format: EncoderFormat,
    quality: i64,
) -> Result<u64> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_FILE_PREFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let mut temp = builder.tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        format.encode(img, &mut writer, quality)?;
        writer.flush()?;
    }

    let file = temp.persist(output_path).map_err(|e| e.error)?;
    Ok(file.metadata()?.len())
}

/// Decodes the requested input, re-encodes it, and writes it into the
/// request's output directory.
///
/// The output directory must already exist. An existing file at the output
/// path is overwritten.
pub fn compress_image(request: &CompressionRequest) -> CompressionResult {
    let (img, original_size) = load_image_with_metadata(request.input_path())?;
    let format = EncoderFormat::from_str(request.format())?;

    info!(
        "Compressing {} as {} (quality {})",
        request.input_path().display(),
        format,
        request.quality()
    );

    let img = resize_to_current_size(img);
    let dimensions = img.dimensions();

    let output_path = request.output_path();
    let compressed_size = save_image(&img, &output_path, format, request.quality())?;

    let compressed = Compressed {
        output_path,
        original_size,
        compressed_size,
        dimensions,
    };

    info!(
        "Wrote {} ({} -> {} bytes, {:.1}% saved)",
        compressed.output_path.display(),
        compressed.original_size,
        compressed.compressed_size,
        compressed.compression_ratio()
    );

    Ok(compressed)
}

/// The single line printed for a compression attempt.
pub fn describe_result(result: &CompressionResult) -> String {
    match result {
        Ok(compressed) => format!(
            "{} '{}'",
            SUCCESS_MESSAGE,
            compressed.output_path.display()
        ),
        Err(e) => format!("{} {}", ERROR_PREFIX, e),
    }
}
