// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export pipeline — apply every filter to the current image, one after the
// other, and collect the results into a labelled multi-page document.
//
// Decoding and filtering run on the blocking pool as a single-shot task per
// filter. The pipeline awaits each task before starting the next, so page
// order is always the enumeration order of `FilterKind::ALL`.

use std::sync::Arc;
use std::time::Duration;

use farbsicht_core::error::{FarbsichtError, Result};
use farbsicht_core::{AppConfig, FilterKind, SourceImage};
use image::DynamicImage;
use tracing::{error, info, instrument};

use crate::image::processor::FilterProcessor;
use crate::pdf::writer::PdfWriter;

/// One page of the export: a filter, its label, and the filtered raster.
#[derive(Debug, Clone)]
pub struct ExportPage {
    pub kind: FilterKind,
    pub label: String,
    pub raster: DynamicImage,
}

impl ExportPage {
    pub fn new(kind: FilterKind, raster: DynamicImage) -> Self {
        Self {
            kind,
            label: kind.label(),
            raster,
        }
    }
}

/// The pages of one export run, in the order they will be written.
#[derive(Debug, Clone, Default)]
pub struct ExportDocument {
    pages: Vec<ExportPage>,
}

impl ExportDocument {
    pub fn new(pages: Vec<ExportPage>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[ExportPage] {
        &self.pages
    }

    /// Filters in page order.
    pub fn kinds(&self) -> Vec<FilterKind> {
        self.pages.iter().map(|p| p.kind).collect()
    }

    fn push(&mut self, page: ExportPage) {
        self.pages.push(page);
    }
}

/// Decode `bytes` and apply `kind` on the blocking pool.
///
/// Resolves with `ImageDecode` if the bytes are not a decodable image and with
/// `DecodeTimedOut` if the work does not finish within `timeout`.
pub async fn render_filtered(
    bytes: Arc<[u8]>,
    kind: FilterKind,
    timeout: Duration,
) -> Result<DynamicImage> {
    let task = tokio::task::spawn_blocking(move || {
        FilterProcessor::from_bytes(&bytes).map(|p| p.apply_filter(kind).into_dynamic())
    });

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(FarbsichtError::FilterTask(join_err.to_string())),
        Err(_) => Err(FarbsichtError::DecodeTimedOut {
            secs: timeout.as_secs(),
        }),
    }
}

/// Builds and renders the five-filter export.
pub struct ExportPipeline {
    writer: PdfWriter,
    decode_timeout: Duration,
}

impl ExportPipeline {
    pub fn new(writer: PdfWriter, decode_timeout: Duration) -> Self {
        Self {
            writer,
            decode_timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            PdfWriter::from_config(config),
            Duration::from_secs(config.decode_timeout_secs),
        )
    }

    /// Filter the image once per `FilterKind`, strictly in order.
    ///
    /// Returns `Ok(None)` without doing any work when no image is loaded. The
    /// first failing filter aborts the run.
    #[instrument(skip_all)]
    pub async fn build_document(&self, image: Option<&SourceImage>) -> Result<Option<ExportDocument>> {
        let Some(image) = image else {
            info!("Export requested with no image loaded, nothing to do");
            return Ok(None);
        };

        info!(source = %image.display_name(), bytes = image.len(), "Starting export");
        let mut document = ExportDocument::default();

        for kind in FilterKind::ALL {
            let raster = render_filtered(image.shared_bytes(), kind, self.decode_timeout)
                .await
                .inspect_err(|e| error!(filter = kind.key(), error = %e, "Export aborted"))?;
            document.push(ExportPage::new(kind, raster));
        }

        Ok(Some(document))
    }

    /// Build the document and serialise it as PDF bytes.
    pub async fn export(&self, image: Option<&SourceImage>) -> Result<Option<Vec<u8>>> {
        match self.build_document(image).await? {
            Some(document) => {
                let bytes = self.writer.render(&document)?;
                info!(pages = document.pages().len(), bytes = bytes.len(), "Export rendered");
                Ok(Some(bytes))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::reader::PdfReader;
    use farbsicht_core::types::ImageOrigin;
    use image::{Rgba, RgbaImage};

    fn red_square() -> SourceImage {
        let img = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));
        let png = FilterProcessor::from_dynamic(DynamicImage::ImageRgba8(img))
            .to_png_bytes()
            .unwrap();
        SourceImage::new(png, ImageOrigin::Clipboard)
    }

    fn pipeline() -> ExportPipeline {
        ExportPipeline::from_config(&AppConfig::default())
    }

    #[tokio::test]
    async fn no_image_means_no_document() {
        assert!(pipeline().build_document(None).await.unwrap().is_none());
        assert!(pipeline().export(None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn pages_follow_enumeration_order() {
        let image = red_square();
        let doc = pipeline().build_document(Some(&image)).await.unwrap().unwrap();

        assert_eq!(doc.kinds(), FilterKind::ALL.to_vec());
        let labels: Vec<&str> = doc.pages().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Normal Filter",
                "Protanopia Filter",
                "Deuteranopia Filter",
                "Tritanopia Filter",
                "Achromatopsia Filter"
            ]
        );
    }

    #[tokio::test]
    async fn achromatopsia_page_is_gray() {
        let image = red_square();
        let doc = pipeline().build_document(Some(&image)).await.unwrap().unwrap();
        let gray = doc.pages()[4].raster.to_rgba8();
        assert!(gray.pixels().all(|p| p.0 == [76, 76, 76, 255]));
    }

    #[tokio::test]
    async fn export_writes_five_pages() {
        let image = red_square();
        let bytes = pipeline().export(Some(&image)).await.unwrap().unwrap();
        assert_eq!(PdfReader::from_bytes(&bytes).unwrap().page_count(), 5);
    }

    #[tokio::test]
    async fn slow_decode_times_out() {
        let big = RgbaImage::from_pixel(2000, 2000, Rgba([10, 200, 30, 255]));
        let png = FilterProcessor::from_dynamic(DynamicImage::ImageRgba8(big))
            .to_png_bytes()
            .unwrap();
        let image = SourceImage::new(png, ImageOrigin::Clipboard);

        let pipeline = ExportPipeline::new(PdfWriter::default(), Duration::from_nanos(1));
        let err = pipeline.export(Some(&image)).await.unwrap_err();
        assert!(matches!(err, FarbsichtError::DecodeTimedOut { secs: 0 }));
    }

    #[tokio::test]
    async fn undecodable_image_aborts_with_error() {
        let image = SourceImage::new(b"GIF89a-truncated".to_vec(), ImageOrigin::Clipboard);
        let err = pipeline().export(Some(&image)).await.unwrap_err();
        assert!(matches!(err, FarbsichtError::ImageDecode(_)));
    }
}
