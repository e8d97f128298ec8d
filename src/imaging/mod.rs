//! Image processing in pure Rust, on top of the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Detect** | `image::ImageReader::with_guessed_format` (header only) |
//! | **Decode / encode** | JPEG, PNG, GIF codecs from `image` |
//! | **Scale** | short side to target, `resize_exact` + Catmull-Rom |
//! | **Write** | temp file + rename, never a partial thumbnail |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod codec;
pub mod detect;
pub mod operations;
mod params;
pub mod rust_backend;
pub mod scale;

pub use backend::{Dimensions, ImageBackend, ImagingError, SourceInfo};
pub use calculations::calculate_scaled_dimensions;
pub use codec::RasterFormat;
pub use operations::{create_thumbnail, plan_thumbnail};
pub use params::ThumbnailParams;
pub use rust_backend::RustBackend;
