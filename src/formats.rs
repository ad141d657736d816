//! Encoder lookup and format-specific encoding
//!
//! Format identifiers arrive as free-form strings from the command line. They
//! are resolved against a fixed set of encoders here, so an unknown name is an
//! explicit error instead of whatever the codec library would do with it.

use crate::constants::{AVIF_SPEED, MAX_QUALITY, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{DynamicImage, ImageError, ImageFormat};
use log::debug;
use std::fmt;
use std::io::{Seek, Write};
use std::str::FromStr;

/// Supported output encoders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderFormat {
    /// Lossy, honours quality
    Jpeg,
    Png,
    /// Lossless WebP
    WebP,
    Bmp,
    Gif,
    Tiff,
    Tga,
    /// At most 256x256 pixels
    Ico,
    /// Lossy, honours quality
    Avif,
}

impl EncoderFormat {
    pub fn all_formats() -> Vec<EncoderFormat> {
        vec![
            EncoderFormat::Jpeg,
            EncoderFormat::Png,
            EncoderFormat::WebP,
            EncoderFormat::Bmp,
            EncoderFormat::Gif,
            EncoderFormat::Tiff,
            EncoderFormat::Tga,
            EncoderFormat::Ico,
            EncoderFormat::Avif,
        ]
    }

    /// Convert to the image crate's ImageFormat
    pub fn to_image_format(&self) -> ImageFormat {
        match self {
            EncoderFormat::Jpeg => ImageFormat::Jpeg,
            EncoderFormat::Png => ImageFormat::Png,
            EncoderFormat::WebP => ImageFormat::WebP,
            EncoderFormat::Bmp => ImageFormat::Bmp,
            EncoderFormat::Gif => ImageFormat::Gif,
            EncoderFormat::Tiff => ImageFormat::Tiff,
            EncoderFormat::Tga => ImageFormat::Tga,
            EncoderFormat::Ico => ImageFormat::Ico,
            EncoderFormat::Avif => ImageFormat::Avif,
        }
    }

    /// Whether the encoder has a quality knob at all
    pub fn uses_quality(&self) -> bool {
        matches!(self, EncoderFormat::Jpeg | EncoderFormat::Avif)
    }

    /// Encodes `img` into `writer`.
    ///
    /// Quality is interpreted the way each codec does: JPEG and AVIF clamp it
    /// into 1..=100, every other encoder ignores it.
    pub fn encode<W: Write + Seek>(
        &self,
        img: &DynamicImage,
        writer: &mut W,
        quality: i64,
    ) -> Result<()> {
        let result = match self {
            EncoderFormat::Jpeg if img.color().has_alpha() => {
                // the JPEG encoder would silently drop the alpha channel
                Err(ImageError::Unsupported(UnsupportedError::from_format_and_kind(
                    ImageFormatHint::Exact(ImageFormat::Jpeg),
                    UnsupportedErrorKind::Color(img.color().into()),
                )))
            }
            EncoderFormat::Jpeg => {
                let quality = clamp_quality(quality);
                debug!("Encoding JPEG at quality {}", quality);
                img.write_with_encoder(JpegEncoder::new_with_quality(writer, quality))
            }
            EncoderFormat::Avif => {
                let quality = clamp_quality(quality);
                debug!("Encoding AVIF at quality {}, speed {}", quality, AVIF_SPEED);
                img.write_with_encoder(AvifEncoder::new_with_speed_quality(
                    writer, AVIF_SPEED, quality,
                ))
            }
            other => {
                if !other.uses_quality() {
                    debug!("{} encoder ignores quality {}", other, quality);
                }
                img.write_to(writer, other.to_image_format())
            }
        };

        result.map_err(|e| CompressionError::encode(*self, e))
    }
}

/// Maps any requested quality onto the 1..=100 range the lossy encoders accept.
pub fn clamp_quality(quality: i64) -> u8 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY) as u8
}

impl fmt::Display for EncoderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EncoderFormat::Jpeg => "JPEG",
            EncoderFormat::Png => "PNG",
            EncoderFormat::WebP => "WEBP",
            EncoderFormat::Bmp => "BMP",
            EncoderFormat::Gif => "GIF",
            EncoderFormat::Tiff => "TIFF",
            EncoderFormat::Tga => "TGA",
            EncoderFormat::Ico => "ICO",
            EncoderFormat::Avif => "AVIF",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for EncoderFormat {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(EncoderFormat::Jpeg),
            "png" => Ok(EncoderFormat::Png),
            "webp" => Ok(EncoderFormat::WebP),
            "bmp" => Ok(EncoderFormat::Bmp),
            "gif" => Ok(EncoderFormat::Gif),
            "tiff" | "tif" => Ok(EncoderFormat::Tiff),
            "tga" => Ok(EncoderFormat::Tga),
            "ico" => Ok(EncoderFormat::Ico),
            "avif" => Ok(EncoderFormat::Avif),
            _ => Err(CompressionError::UnsupportedFormat(s.to_string())),
        }
    }
}
