//! Aspect-preserving scaling of decoded images.
//!
//! Target sizes are checked twice: once from the header while planning, and
//! again from the decoded raster right before resampling. Both checks go
//! through [`target_dimensions`], so a zero size or an output too large to
//! resample is refused before any pixel buffer is allocated.

use super::backend::{Dimensions, ImagingError};
use super::calculations::{calculate_scaled_dimensions, resample_bytes};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Memory one resample may use; the `image` crate's default decode limit.
pub const MAX_RESAMPLE_BYTES: u64 = 512 * 1024 * 1024;

/// Output dimensions for a `source` whose short side is scaled to `short_edge`.
pub fn target_dimensions(source: Dimensions, short_edge: u32) -> Result<Dimensions, ImagingError> {
    let size = calculate_scaled_dimensions(source, short_edge)
        .ok_or(ImagingError::InvalidSize(short_edge))?;
    if resample_bytes(source, size) > MAX_RESAMPLE_BYTES {
        return Err(ImagingError::TooLarge {
            width: size.width,
            height: size.height,
        });
    }
    Ok(size)
}

/// Dimensions `img` takes when its short side is scaled to `short_edge`.
pub fn scaled_dimensions(img: &DynamicImage, short_edge: u32) -> Result<Dimensions, ImagingError> {
    let (width, height) = img.dimensions();
    target_dimensions(Dimensions { width, height }, short_edge)
}

/// Resample `img` into a fresh buffer of exactly `size` with a Catmull-Rom kernel.
///
/// The output starts blank and every pixel is replaced by the filtered source,
/// so nothing is blended with prior content.
pub fn resample(img: &DynamicImage, size: Dimensions) -> DynamicImage {
    img.resize_exact(size.width, size.height, FilterType::CatmullRom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::gradient;
    use image::{RgbImage, RgbaImage};

    #[test]
    fn scaled_dimensions_follow_short_side() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(400, 200));
        assert_eq!(
            scaled_dimensions(&img, 100).unwrap(),
            Dimensions { width: 200, height: 100 }
        );
    }

    #[test]
    fn zero_size_is_invalid() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(400, 200));
        assert!(matches!(
            scaled_dimensions(&img, 0),
            Err(ImagingError::InvalidSize(0))
        ));
    }

    #[test]
    fn huge_upscale_is_too_large() {
        let result = target_dimensions(Dimensions { width: 4000, height: 3000 }, 100_000);
        assert!(matches!(
            result,
            Err(ImagingError::TooLarge { width: 133_333, height: 100_000 })
        ));
    }

    #[test]
    fn camera_sized_sources_fit_the_budget() {
        let size = target_dimensions(Dimensions { width: 8000, height: 6000 }, 1000).unwrap();
        assert_eq!(size, Dimensions { width: 1333, height: 1000 });
    }

    #[test]
    fn resample_produces_exact_dimensions() {
        let img = gradient(333, 127);
        let size = scaled_dimensions(&img, 50).unwrap();
        let out = resample(&img, size);
        assert_eq!(out.dimensions(), (size.width, size.height));
        assert_eq!(out.dimensions(), (131, 50));
    }

    #[test]
    fn resample_of_flat_color_stays_flat() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 48, image::Rgba([40, 80, 120, 255])));
        let out = resample(&img, Dimensions { width: 16, height: 12 });
        for (x, y, pixel) in out.pixels() {
            for (got, want) in pixel.0.iter().zip([40u8, 80, 120, 255]) {
                assert!(got.abs_diff(want) <= 1, "pixel ({x},{y}) drifted: {pixel:?}");
            }
        }
    }
}
