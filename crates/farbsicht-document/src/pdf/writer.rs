// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — lay out the filter export pages using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use farbsicht_core::AppConfig;
use farbsicht_core::error::FarbsichtError;
use farbsicht_core::types::{Orientation, PaperSize, page_dimensions_mm};
use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, RawImage,
    RawImageData, RawImageFormat, TextItem, XObjectTransform,
};
use tracing::{debug, info, instrument, warn};

use crate::export::ExportDocument;

/// Distance from the top edge to the label baseline, in mm.
const LABEL_TOP_MM: f32 = 10.0;
/// Distance from the top edge to the top of the image box, in mm.
const IMAGE_TOP_MM: f32 = 20.0;
/// Every image box is 16:9, whatever the source aspect ratio.
const BOX_ASPECT: f32 = 9.0 / 16.0;
/// At 72 dpi one image pixel is one point before scaling.
const PLACEMENT_DPI: f32 = 72.0;
/// Title metadata embedded in the PDF /Info dictionary.
const DOCUMENT_TITLE: &str = "Color Blindness Filters";

/// Where the filtered image lands on a page, measured from the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBox {
    pub x_mm: f32,
    pub top_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

/// Renders an [`ExportDocument`] as a PDF, one labelled page per filter.
pub struct PdfWriter {
    paper_size: PaperSize,
    orientation: Orientation,
    /// Horizontal margin on each side of the image.
    margin_mm: f32,
    label_font_size_pt: f32,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl PdfWriter {
    /// Create a writer for the given paper and orientation with a 10mm margin
    /// and a 16pt label.
    pub fn new(paper_size: PaperSize, orientation: Orientation) -> Self {
        Self {
            paper_size,
            orientation,
            margin_mm: 10.0,
            label_font_size_pt: 16.0,
        }
    }

    /// Create a writer from the export section of the app settings.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            paper_size: config.paper_size,
            orientation: config.orientation,
            margin_mm: config.margin_mm,
            label_font_size_pt: config.label_font_size_pt,
        }
    }

    /// Paper dimensions in printpdf's Mm units, orientation applied.
    fn page_dimensions(&self) -> (Mm, Mm) {
        let (w_mm, h_mm) = page_dimensions_mm(self.paper_size, self.orientation);
        (Mm(w_mm), Mm(h_mm))
    }

    /// The fixed 16:9 box spanning the page width minus both margins.
    pub fn image_box(&self) -> ImageBox {
        let (page_w, _) = self.page_dimensions();
        let width_mm = (page_w.0 - 2.0 * self.margin_mm).max(1.0);
        ImageBox {
            x_mm: self.margin_mm,
            top_mm: IMAGE_TOP_MM,
            width_mm,
            height_mm: width_mm * BOX_ASPECT,
        }
    }

    /// Serialise the document. Pages keep the order of `document.pages()`.
    #[instrument(skip_all, fields(pages = document.pages().len()))]
    pub fn render(&self, document: &ExportDocument) -> Result<Vec<u8>, FarbsichtError> {
        let (page_w, page_h) = self.page_dimensions();
        info!(
            paper = ?self.paper_size,
            orientation = ?self.orientation,
            "Rendering export PDF"
        );

        let page_h_pt = page_h.into_pt().0;
        let margin_pt = Mm(self.margin_mm).into_pt().0;
        let image_box = self.image_box();
        let box_w_pt = Mm(image_box.width_mm).into_pt().0;
        let box_h_pt = Mm(image_box.height_mm).into_pt().0;
        let box_bottom_pt = page_h_pt - Mm(image_box.top_mm).into_pt().0 - box_h_pt;
        let label_y_pt = page_h_pt - Mm(LABEL_TOP_MM).into_pt().0;

        let mut doc = PdfDocument::new(DOCUMENT_TITLE);
        let mut pages: Vec<PdfPage> = Vec::with_capacity(document.pages().len());

        for page in document.pages() {
            let rgb = page.raster.to_rgb8();
            let (img_width, img_height) = rgb.dimensions();
            if img_width == 0 || img_height == 0 {
                return Err(FarbsichtError::PdfError(format!(
                    "{} raster is empty",
                    page.kind.key()
                )));
            }

            let raw = RawImage {
                pixels: RawImageData::U8(rgb.into_raw()),
                width: img_width as usize,
                height: img_height as usize,
                data_format: RawImageFormat::RGB8,
                tag: Vec::new(),
            };
            let xobject_id = doc.add_image(&raw);

            // Stretch independently on each axis to fill the 16:9 box.
            let scale_x = box_w_pt / img_width as f32;
            let scale_y = box_h_pt / img_height as f32;

            let ops = vec![
                Op::StartTextSection,
                Op::SetTextCursor {
                    pos: Point {
                        x: Pt(margin_pt),
                        y: Pt(label_y_pt),
                    },
                },
                Op::SetFontSizeBuiltinFont {
                    size: Pt(self.label_font_size_pt),
                    font: BuiltinFont::Helvetica,
                },
                Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(page.label.clone())],
                    font: BuiltinFont::Helvetica,
                },
                Op::EndTextSection,
                Op::UseXobject {
                    id: xobject_id,
                    transform: XObjectTransform {
                        translate_x: Some(Pt(margin_pt)),
                        translate_y: Some(Pt(box_bottom_pt)),
                        scale_x: Some(scale_x),
                        scale_y: Some(scale_y),
                        dpi: Some(PLACEMENT_DPI),
                        rotate: None,
                    },
                },
            ];

            debug!(
                filter = page.kind.key(),
                img_width,
                img_height,
                scale_x,
                scale_y,
                "Page laid out"
            );
            pages.push(PdfPage::new(page_w, page_h, ops));
        }

        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "printpdf reported warnings");
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportPage;
    use crate::pdf::reader::PdfReader;
    use farbsicht_core::FilterKind;
    use image::{DynamicImage, Rgb, RgbImage};

    fn document_of(width: u32, height: u32) -> ExportDocument {
        let raster = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([9, 99, 199])));
        ExportDocument::new(
            FilterKind::ALL
                .into_iter()
                .map(|kind| ExportPage::new(kind, raster.clone()))
                .collect(),
        )
    }

    #[test]
    fn landscape_a4_box_is_sixteen_by_nine() {
        let image_box = PdfWriter::default().image_box();
        assert_eq!(image_box.x_mm, 10.0);
        assert_eq!(image_box.top_mm, 20.0);
        assert!((image_box.width_mm - 277.0).abs() < 1e-3);
        assert!((image_box.height_mm - 277.0 * 9.0 / 16.0).abs() < 1e-3);
    }

    #[test]
    fn box_ignores_source_aspect_ratio() {
        let writer = PdfWriter::new(PaperSize::A4, Orientation::Portrait);
        let image_box = writer.image_box();
        assert!((image_box.width_mm - 190.0).abs() < 1e-3);
        assert!((image_box.height_mm / image_box.width_mm - 0.5625).abs() < 1e-6);
    }

    #[test]
    fn renders_one_page_per_filter() {
        let bytes = PdfWriter::default().render(&document_of(40, 30)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let reader = PdfReader::from_bytes(&bytes).unwrap();
        assert_eq!(reader.page_count(), 5);
    }

    #[test]
    fn pages_are_landscape_a4() {
        let bytes = PdfWriter::default().render(&document_of(4, 4)).unwrap();
        let reader = PdfReader::from_bytes(&bytes).unwrap();
        let (w_pt, h_pt) = reader.page_size_pt(1).unwrap();
        assert!((w_pt - Mm(297.0).into_pt().0).abs() < 1.0, "width {w_pt}");
        assert!((h_pt - Mm(210.0).into_pt().0).abs() < 1.0, "height {h_pt}");
    }

    #[test]
    fn empty_raster_is_rejected() {
        let err = PdfWriter::default().render(&document_of(0, 0)).unwrap_err();
        assert!(matches!(err, FarbsichtError::PdfError(_)));
    }
}
