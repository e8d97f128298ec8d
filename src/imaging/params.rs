//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides the output size and location) and the
//! [`backend`](super::backend) (which does the actual pixel work).

use super::codec::RasterFormat;
use std::path::PathBuf;

/// Parameters for a thumbnail operation (decode, resample, encode).
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Format of the source; the thumbnail is written in the same format.
    pub format: RasterFormat,
    /// Requested short side.
    pub short_edge: u32,
    /// Thumbnail dimensions planned from the source header.
    pub width: u32,
    pub height: u32,
}
