//! Shared test utilities for the blogthumbs test suite.
//!
//! Synthetic images are generated on the fly, so no binary fixtures are
//! checked in.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let path = tmp.path().join("wide.jpg");
//! write_test_image(&path, RasterFormat::Jpeg, 400, 200);
//! assert_eq!(dir_listing(tmp.path()), vec!["wide.jpg"]);
//! ```

use crate::imaging::RasterFormat;
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// An RGB gradient, so resampling has something to chew on.
pub fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    }))
}

/// Encode a gradient in `format` and write it to `path`.
pub fn write_test_image(path: &Path, format: RasterFormat, width: u32, height: u32) {
    let bytes = format.encode(&gradient(width, height)).unwrap();
    std::fs::write(path, bytes).unwrap();
}

/// A tiny PNG whose header claims `width` x `height` RGBA16 pixels.
///
/// The IDAT is an empty zlib stream, so only the header is believable.
pub fn oversized_png(width: u32, height: u32) -> Vec<u8> {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[16, 6, 0, 0, 0]);

    let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
    push_chunk(&mut png, b"IHDR", &ihdr);
    push_chunk(&mut png, b"IDAT", &[0x78, 0x9c, 0x03, 0x00, 0x00, 0x00, 0x00, 0x01]);
    push_chunk(&mut png, b"IEND", &[]);
    png
}

fn push_chunk(png: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(kind);
    hasher.update(data);
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(kind);
    png.extend_from_slice(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Sorted file names in `dir`.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
