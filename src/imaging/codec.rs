//! Per-format decoding and encoding.
//!
//! The supported set is closed: JPEG, PNG and GIF. Each [`RasterFormat`]
//! variant knows how to decode a stream into a [`DynamicImage`] and encode one
//! back into bytes. Thumbnails are always written in the format of their
//! source, so the same tag drives both directions.
//!
//! | Format | Decode | Encode |
//! |---|---|---|
//! | JPEG | `JpegDecoder` | `JpegEncoder`, quality 100, 8-bit gray or RGB |
//! | PNG | `PngDecoder` | `PngEncoder` defaults |
//! | GIF | `GifDecoder` (first frame) | `GifEncoder`, single frame |
//!
//! Decoding runs under the `image` crate's default [`Limits`]: a header that
//! claims more pixel memory than the limit allows fails with
//! [`ImagingError::Decode`] before the buffer is allocated.

use super::backend::ImagingError;
use image::codecs::gif::{GifDecoder, GifEncoder};
use image::codecs::jpeg::{JpegDecoder, JpegEncoder};
use image::codecs::png::{PngDecoder, PngEncoder};
use image::{ColorType, DynamicImage, Frame, ImageDecoder, ImageError, ImageResult, Limits};
use std::io::{BufRead, Seek};

/// JPEG thumbnails are written at maximum quality.
pub const JPEG_QUALITY: u8 = 100;

/// Raster encodings a thumbnail can be made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    Jpeg,
    Png,
    Gif,
}

impl RasterFormat {
    /// Map the `image` crate's format tag onto the supported set.
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            image::ImageFormat::Png => Some(Self::Png),
            image::ImageFormat::Gif => Some(Self::Gif),
            _ => None,
        }
    }

    /// Lowercase name, as used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }

    /// Decode a complete image from `reader`.
    pub fn decode<R: BufRead + Seek>(self, reader: R) -> Result<DynamicImage, ImagingError> {
        let decoded = match self {
            Self::Jpeg => JpegDecoder::new(reader).and_then(decode_limited),
            Self::Png => PngDecoder::new(reader).and_then(decode_limited),
            Self::Gif => GifDecoder::new(reader).and_then(decode_limited),
        };
        decoded.map_err(decode_error)
    }

    /// Encode `img` into an in-memory buffer.
    pub fn encode(self, img: &DynamicImage) -> Result<Vec<u8>, ImagingError> {
        let mut buf = Vec::new();
        match self {
            Self::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
                let written = match img.color() {
                    ColorType::L8 | ColorType::Rgb8 => img.write_with_encoder(encoder),
                    ColorType::L16 | ColorType::La8 | ColorType::La16 => {
                        DynamicImage::ImageLuma8(img.to_luma8()).write_with_encoder(encoder)
                    }
                    _ => DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder),
                };
                written.map_err(encode_error)?;
            }
            Self::Png => {
                img.write_with_encoder(PngEncoder::new(&mut buf))
                    .map_err(encode_error)?;
            }
            Self::Gif => {
                // The trailer is written when the encoder drops.
                let mut encoder = GifEncoder::new(&mut buf);
                encoder
                    .encode_frame(Frame::new(img.to_rgba8()))
                    .map_err(encode_error)?;
            }
        }
        Ok(buf)
    }
}

impl std::fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserve the decoded buffer against the default limits before allocating it.
fn decode_limited(mut decoder: impl ImageDecoder) -> ImageResult<DynamicImage> {
    let mut limits = Limits::default();
    limits.reserve(decoder.total_bytes())?;
    decoder.set_limits(limits)?;
    DynamicImage::from_decoder(decoder)
}

fn decode_error(err: ImageError) -> ImagingError {
    match err {
        ImageError::IoError(e) => ImagingError::Io(e),
        ImageError::Unsupported(e) => ImagingError::UnsupportedFormat(e.to_string()),
        other => ImagingError::Decode(other.to_string()),
    }
}

fn encode_error(err: ImageError) -> ImagingError {
    match err {
        ImageError::IoError(e) => ImagingError::Io(e),
        ImageError::Unsupported(e) => ImagingError::UnsupportedFormat(e.to_string()),
        other => ImagingError::Encode(other.to_string()),
    }
}
