// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// farbsicht-document — Image filtering and PDF export for Farbsicht.
//
// Provides color-matrix filtering of decoded images, the sequential
// five-filter export pipeline, and PDF creation/inspection.

pub mod export;
pub mod image;
pub mod pdf;

// Re-export the primary structs so callers can use `farbsicht_document::PdfWriter` etc.
pub use export::{ExportDocument, ExportPage, ExportPipeline, render_filtered};
pub use crate::image::processor::FilterProcessor;
pub use pdf::reader::PdfReader;
pub use pdf::writer::PdfWriter;
