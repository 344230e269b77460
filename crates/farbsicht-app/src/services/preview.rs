// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Live preview helpers. The webview applies the filters itself through SVG
// `feColorMatrix` elements generated from the same matrices the export uses.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use farbsicht_core::error::{FarbsichtError, Result};
use farbsicht_core::{FilterKind, SourceImage};

/// Hidden `<svg>` with one `<filter>` per non-identity `FilterKind`.
///
/// Filters operate in sRGB so the preview matches the exported pixels.
pub fn preview_filter_svg() -> String {
    let filters: String = FilterKind::ALL
        .iter()
        .filter_map(|kind| kind.matrix().map(|m| (kind, m)))
        .map(|(kind, matrix)| {
            format!(
                r#"<filter id="{}" color-interpolation-filters="sRGB"><feColorMatrix in="SourceGraphic" type="matrix" values="{}"/></filter>"#,
                kind.key(),
                matrix.to_svg_values()
            )
        })
        .collect();
    format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0"><defs>{filters}</defs></svg>"#)
}

/// MIME type sniffed from the image's magic bytes.
pub fn mime_type(image: &SourceImage) -> Result<&'static str> {
    image::guess_format(image.bytes())
        .map(|format| format.to_mime_type())
        .map_err(|e| FarbsichtError::ImageDecode(e.to_string()))
}

/// `data:` URL for an `<img src>`.
pub fn data_url(image: &SourceImage) -> String {
    let mime = mime_type(image).unwrap_or("application/octet-stream");
    format!("data:{mime};base64,{}", B64.encode(image.bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use farbsicht_core::types::ImageOrigin;

    #[test]
    fn svg_has_four_filters_and_no_normal() {
        let svg = preview_filter_svg();
        assert_eq!(svg.matches("<filter ").count(), 4);
        assert!(svg.contains(r#"id="achromatopsia""#));
        assert!(!svg.contains(r#"id="normal""#));
        assert!(svg.contains("0.299 0.587 0.114 0 0"));
    }

    #[test]
    fn data_url_carries_sniffed_mime() {
        let png = crate::services::clipboard::image_from_rgba(1, 1, vec![0, 0, 0, 255]).unwrap();
        assert!(data_url(&png).starts_with("data:image/png;base64,iVBOR"));
    }

    #[test]
    fn unknown_bytes_have_no_mime() {
        let junk = SourceImage::new(b"plain text".to_vec(), ImageOrigin::Clipboard);
        assert!(matches!(mime_type(&junk), Err(FarbsichtError::ImageDecode(_))));
    }
}
