// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filter processor — decode an image, apply a color-vision-deficiency matrix,
// and encode the result. Operates on in-memory images using the `image` crate.

use farbsicht_core::error::FarbsichtError;
use farbsicht_core::filter::FilterKind;
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::{debug, instrument};

/// Filtering pipeline operating on a single in-memory image.
///
/// Each transformation consumes `self` and returns a new `FilterProcessor`
/// wrapping the result, so the source is never mutated in place.
///
/// ```ignore
/// let png = FilterProcessor::from_bytes(&bytes)?
///     .apply_filter(FilterKind::Deuteranopia)
///     .to_png_bytes()?;
/// ```
pub struct FilterProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl FilterProcessor {
    // -- Construction ---------------------------------------------------------

    /// Create a processor from raw encoded bytes (PNG, JPEG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, FarbsichtError> {
        let img = image::load_from_memory(data)
            .map_err(|err| FarbsichtError::ImageDecode(err.to_string()))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap raw RGBA8 pixels, e.g. from the clipboard.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, FarbsichtError> {
        let buffer = RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
            FarbsichtError::ImageDecode(format!(
                "pixel buffer does not match {width}x{height} RGBA"
            ))
        })?;
        Ok(Self {
            image: DynamicImage::ImageRgba8(buffer),
        })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations ------------------------------------------------------

    /// Apply a filter's color matrix to every pixel.
    ///
    /// `Normal` returns the image untouched. Every other filter yields an
    /// RGBA8 image of the same dimensions with alpha copied through.
    #[instrument(skip(self))]
    pub fn apply_filter(self, kind: FilterKind) -> Self {
        let Some(matrix) = kind.matrix() else {
            debug!("Normal filter, passing image through");
            return self;
        };

        let mut rgba = self.image.into_rgba8();
        for pixel in rgba.pixels_mut() {
            pixel.0 = matrix.apply_rgba(pixel.0);
        }
        debug!(filter = kind.key(), "Color matrix applied");

        Self {
            image: DynamicImage::ImageRgba8(rgba),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, FarbsichtError> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| FarbsichtError::ImageEncode(err.to_string()))?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        FilterProcessor::from_dynamic(image).to_png_bytes().unwrap()
    }

    #[test]
    fn normal_filter_is_bit_identical() {
        let mut src = RgbImage::new(7, 5);
        for (x, y, px) in src.enumerate_pixels_mut() {
            *px = Rgb([(x * 30) as u8, (y * 50) as u8, 99]);
        }
        let bytes = encode_png(DynamicImage::ImageRgb8(src));

        let decoded = FilterProcessor::from_bytes(&bytes).unwrap().into_dynamic();
        let filtered = FilterProcessor::from_bytes(&bytes)
            .unwrap()
            .apply_filter(FilterKind::Normal)
            .into_dynamic();

        assert_eq!(filtered, decoded);
    }

    #[test]
    fn achromatopsia_on_solid_red_is_uniform_gray() {
        let src = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));
        let bytes = encode_png(DynamicImage::ImageRgba8(src));

        let out = FilterProcessor::from_bytes(&bytes)
            .unwrap()
            .apply_filter(FilterKind::Achromatopsia)
            .into_dynamic()
            .into_rgba8();

        assert_eq!(out.dimensions(), (100, 100));
        assert!(out.pixels().all(|p| p.0 == [76, 76, 76, 255]));
    }

    #[test]
    fn every_pixel_matches_matrix_and_keeps_alpha() {
        let mut src = RgbaImage::new(16, 16);
        for (x, y, px) in src.enumerate_pixels_mut() {
            *px = Rgba([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8, (x * y) as u8]);
        }
        let original = src.clone();

        for kind in FilterKind::ALL.into_iter().skip(1) {
            let matrix = kind.matrix().unwrap();
            let out = FilterProcessor::from_dynamic(DynamicImage::ImageRgba8(src.clone()))
                .apply_filter(kind)
                .into_dynamic()
                .into_rgba8();

            for (before, after) in original.pixels().zip(out.pixels()) {
                assert_eq!(after.0, matrix.apply_rgba(before.0), "{kind}");
                assert_eq!(after.0[3], before.0[3]);
            }
        }
    }

    #[test]
    fn dimensions_are_preserved() {
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(33, 9, Rgb([1, 2, 3])));
        let out = FilterProcessor::from_dynamic(src).apply_filter(FilterKind::Tritanopia);
        assert_eq!((out.width(), out.height()), (33, 9));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = FilterProcessor::from_bytes(b"definitely not an image").err().unwrap();
        assert!(matches!(err, FarbsichtError::ImageDecode(_)));
    }

    #[test]
    fn rgba_buffer_size_is_checked() {
        assert!(FilterProcessor::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            FilterProcessor::from_rgba(2, 2, vec![0; 15]),
            Err(FarbsichtError::ImageDecode(_))
        ));
    }
}
