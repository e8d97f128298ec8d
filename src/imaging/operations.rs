//! High-level image operations.
//!
//! These functions combine calculations with backend execution: identify the
//! source, plan the output, then hand the pixel work to the backend.

use super::backend::{ImageBackend, ImagingError, SourceInfo};
use super::params::ThumbnailParams;
use super::scale::target_dimensions;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ImagingError>;

/// Plan a thumbnail operation without executing it.
///
/// Fails with [`ImagingError::InvalidSize`] when `short_edge` cannot produce
/// an image and [`ImagingError::TooLarge`] when the output would not fit the
/// resample budget.
pub fn plan_thumbnail(
    source: &Path,
    output: &Path,
    info: SourceInfo,
    short_edge: u32,
) -> Result<ThumbnailParams> {
    let size = target_dimensions(info.dimensions, short_edge)?;

    Ok(ThumbnailParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        format: info.format,
        short_edge,
        width: size.width,
        height: size.height,
    })
}

/// Create a thumbnail of `source` at `output`, short side `short_edge` pixels.
///
/// The thumbnail keeps the source's format. Returns the output path.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    short_edge: u32,
) -> Result<PathBuf> {
    if is_same_file(source, output) {
        return Err(ImagingError::OverwritesSource(output.display().to_string()));
    }

    let info = backend.identify(source)?;
    log::debug!(
        "{}: {} {}x{}",
        source.display(),
        info.format,
        info.dimensions.width,
        info.dimensions.height
    );

    let params = plan_thumbnail(source, output, info, short_edge)?;
    log::debug!(
        "{}: thumbnail {}x{} → {}",
        source.display(),
        params.width,
        params.height,
        output.display()
    );

    backend.thumbnail(&params)?;
    Ok(params.output)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
