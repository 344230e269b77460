// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Clipboard paste — read image data from the system clipboard via `arboard`
// and re-encode it as PNG so it behaves like an uploaded file.

use farbsicht_core::error::{FarbsichtError, Result};
use farbsicht_core::types::{ImageOrigin, SourceImage};
use farbsicht_document::FilterProcessor;
use tracing::{debug, info};

/// Read an image from the clipboard.
///
/// Returns `Ok(None)` when the clipboard holds something other than an image;
/// such pastes are ignored.
pub fn read_clipboard_image() -> Result<Option<SourceImage>> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| FarbsichtError::Clipboard(e.to_string()))?;

    match clipboard.get_image() {
        Ok(data) => {
            let image = image_from_rgba(data.width, data.height, data.bytes.into_owned())?;
            info!(bytes = image.len(), "image pasted from clipboard");
            Ok(Some(image))
        }
        Err(arboard::Error::ContentNotAvailable) => {
            debug!("clipboard holds no image, ignoring paste");
            Ok(None)
        }
        Err(e) => Err(FarbsichtError::Clipboard(e.to_string())),
    }
}

/// Wrap raw RGBA8 clipboard pixels as a PNG-encoded source image.
pub fn image_from_rgba(width: usize, height: usize, pixels: Vec<u8>) -> Result<SourceImage> {
    let too_large = || FarbsichtError::ImageDecode(format!("{width}x{height} is too large"));
    let width = u32::try_from(width).map_err(|_| too_large())?;
    let height = u32::try_from(height).map_err(|_| too_large())?;

    let png = FilterProcessor::from_rgba(width, height, pixels)?.to_png_bytes()?;
    Ok(SourceImage::new(png, ImageOrigin::Clipboard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_pixels_become_png() {
        let pixels = [255u8, 0, 0, 255].repeat(6);
        let image = image_from_rgba(3, 2, pixels).unwrap();

        assert_eq!(image.origin(), &ImageOrigin::Clipboard);
        assert!(image.bytes().starts_with(b"\x89PNG"));
        let decoded = FilterProcessor::from_bytes(image.bytes()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }

    #[test]
    fn short_buffer_is_rejected() {
        let err = image_from_rgba(3, 2, vec![0; 5]).unwrap_err();
        assert!(matches!(err, FarbsichtError::ImageDecode(_)));
    }
}
