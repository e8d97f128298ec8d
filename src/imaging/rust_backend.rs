//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::with_guessed_format` + `into_dimensions` |
//! | Decode (JPEG, PNG, GIF) | `image` crate decoders via [`RasterFormat::decode`] |
//! | Resize | `DynamicImage::resize_exact` with `CatmullRom` filter |
//! | Encode | `image` crate encoders via [`RasterFormat::encode`] |
//! | Write | hidden sibling temp file, renamed into place |

use super::backend::{ImageBackend, ImagingError, SourceInfo};
use super::codec::RasterFormat;
use super::params::ThumbnailParams;
use super::{detect, scale};
use image::DynamicImage;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path, format: RasterFormat) -> Result<DynamicImage, ImagingError> {
    let file = File::open(path)?;
    format.decode(BufReader::new(file))
}

/// Encode `img` and put it at `path` without ever exposing a partial file.
fn save_image(img: &DynamicImage, format: RasterFormat, path: &Path) -> Result<(), ImagingError> {
    let bytes = format.encode(img)?;
    let temp_path = temp_path_for(path)?;
    if let Err(e) = write_and_rename(&temp_path, path, &bytes) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(ImagingError::Io(e));
    }
    log::debug!("committed {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn temp_path_for(path: &Path) -> Result<PathBuf, ImagingError> {
    let name = path.file_name().ok_or_else(|| {
        ImagingError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("destination {} has no file name", path.display()),
        ))
    })?;
    Ok(path.with_file_name(format!(".{}.blogthumbs-tmp", name.to_string_lossy())))
}

fn write_and_rename(temp_path: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_all()?;
    std::fs::rename(temp_path, path)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<SourceInfo, ImagingError> {
        detect::identify(path)
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), ImagingError> {
        let img = load_image(&params.source, params.format)?;
        let size = scale::scaled_dimensions(&img, params.short_edge)?;
        if (size.width, size.height) != (params.width, params.height) {
            log::debug!(
                "{}: raster is not the size its header claims, scaling to {}x{}",
                params.source.display(),
                size.width,
                size.height
            );
        }
        let resized = scale::resample(&img, size);
        save_image(&resized, params.format, &params.output)
    }
}
