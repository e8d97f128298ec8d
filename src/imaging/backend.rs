//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify (header sniffing) and thumbnail (decode, resample, encode).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a recording mock so planning logic can be checked
//! without touching pixels.

use super::codec::RasterFormat;
use super::params::ThumbnailParams;
use std::path::Path;
use thiserror::Error;

/// Every way a single thumbnail conversion can fail.
#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("cannot read source: {0}")]
    UnreadableSource(#[source] std::io::Error),
    #[error("unknown image format (expected gif, jpeg or png)")]
    UnknownFormat,
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid thumbnail size {0}: must be a positive number of pixels")]
    InvalidSize(u32),
    #[error("thumbnail {width}x{height} is too large to resample")]
    TooLarge { width: u32, height: u32 },
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("destination {0} is the source file itself")]
    OverwritesSource(String),
    #[error("destination {0} already holds the thumbnail of an earlier input")]
    DestinationTaken(String),
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// The smaller of width and height.
    pub fn short_side(self) -> u32 {
        self.width.min(self.height)
    }
}

/// Result of an identify operation: what the header says about a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    pub format: RasterFormat,
    pub dimensions: Dimensions,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Sniff format and dimensions from the file header, without a full decode.
    fn identify(&self, path: &Path) -> Result<SourceInfo, ImagingError>;

    /// Execute a thumbnail operation: decode, resample, encode, write.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), ImagingError>;
}
