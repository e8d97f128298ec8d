//! Source format detection from file headers.
//!
//! Only the magic bytes and the header needed for dimensions are read; the
//! pixel data is left for [`RasterFormat::decode`]. The file handle lives for
//! the duration of the call and is closed on every exit path.

use super::backend::{Dimensions, ImagingError, SourceInfo};
use super::codec::RasterFormat;
use image::ImageReader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Sniff the encoding and dimensions of `path`.
pub fn identify(path: &Path) -> Result<SourceInfo, ImagingError> {
    let file = File::open(path).map_err(ImagingError::UnreadableSource)?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(ImagingError::UnreadableSource)?;

    let format = reader
        .format()
        .and_then(RasterFormat::from_image_format)
        .ok_or(ImagingError::UnknownFormat)?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| ImagingError::Decode(e.to_string()))?;

    Ok(SourceInfo {
        format,
        dimensions: Dimensions { width, height },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{oversized_png, write_test_image};

    #[test]
    fn identifies_each_supported_format() {
        let tmp = tempfile::TempDir::new().unwrap();
        for format in [RasterFormat::Jpeg, RasterFormat::Png, RasterFormat::Gif] {
            // Deliberately misleading extension: detection goes by content.
            let path = tmp.path().join(format!("{format}.bin"));
            write_test_image(&path, format, 30, 20);

            let info = identify(&path).unwrap();
            assert_eq!(info.format, format);
            assert_eq!(info.dimensions, Dimensions { width: 30, height: 20 });
        }
    }

    #[test]
    fn oversized_header_still_identifies() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("huge.png");
        std::fs::write(&path, oversized_png(65_000, 65_000)).unwrap();

        let info = identify(&path).unwrap();
        assert_eq!(info.format, RasterFormat::Png);
        assert_eq!(info.dimensions, Dimensions { width: 65_000, height: 65_000 });
    }

    #[test]
    fn missing_file_is_unreadable() {
        let result = identify(Path::new("/nonexistent/image.jpg"));
        assert!(matches!(result, Err(ImagingError::UnreadableSource(_))));
    }

    #[test]
    fn directory_is_unreadable() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = identify(tmp.path());
        assert!(matches!(result, Err(ImagingError::UnreadableSource(_))));
    }

    #[test]
    fn text_file_is_unknown_format() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("notes.png");
        std::fs::write(&path, "definitely not pixels").unwrap();
        assert!(matches!(identify(&path), Err(ImagingError::UnknownFormat)));
    }

    #[test]
    fn empty_file_is_unknown_format() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("empty.jpg");
        std::fs::write(&path, b"").unwrap();
        assert!(matches!(identify(&path), Err(ImagingError::UnknownFormat)));
    }

    #[test]
    fn bmp_is_unknown_format() {
        // A BMP header is recognised by the sniffer but not supported here.
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("old.bmp");
        let mut header = b"BM".to_vec();
        header.extend_from_slice(&[0u8; 64]);
        std::fs::write(&path, header).unwrap();
        assert!(matches!(identify(&path), Err(ImagingError::UnknownFormat)));
    }
}
