// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — open and inspect finished PDF documents using the `lopdf` crate.

use farbsicht_core::error::FarbsichtError;
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, instrument};

/// Inheritable attributes may sit this many levels up the page tree at most.
const MAX_TREE_DEPTH: usize = 32;

/// Read-only view of an existing PDF.
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
}

impl PdfReader {
    /// Create a reader from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, FarbsichtError> {
        let document = Document::load_mem(data).map_err(|err| {
            FarbsichtError::PdfError(format!("failed to load PDF from memory: {}", err))
        })?;
        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");
        Ok(Self { document })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Width and height of a page (1-indexed) in points, from its MediaBox.
    pub fn page_size_pt(&self, page_number: u32) -> Result<(f32, f32), FarbsichtError> {
        let pages = self.document.get_pages();
        let page_id: ObjectId = *pages.get(&page_number).ok_or_else(|| {
            FarbsichtError::PdfError(format!(
                "page {} out of range (document has {} pages)",
                page_number,
                pages.len()
            ))
        })?;

        let media_box = self.inherited_attribute(page_id, b"MediaBox")?;
        let values = media_box
            .as_array()
            .map_err(|err| FarbsichtError::PdfError(format!("bad MediaBox: {err}")))?
            .iter()
            .map(|obj| obj.as_float())
            .collect::<Result<Vec<f32>, _>>()
            .map_err(|err| FarbsichtError::PdfError(format!("bad MediaBox entry: {err}")))?;

        match values.as_slice() {
            [x0, y0, x1, y1] => Ok(((x1 - x0).abs(), (y1 - y0).abs())),
            other => Err(FarbsichtError::PdfError(format!(
                "MediaBox has {} entries",
                other.len()
            ))),
        }
    }

    /// Look up `key` on the page, walking `/Parent` links for inherited values.
    fn inherited_attribute(&self, page_id: ObjectId, key: &[u8]) -> Result<&Object, FarbsichtError> {
        let mut dict = self.dictionary(page_id)?;
        for _ in 0..MAX_TREE_DEPTH {
            if let Ok(value) = dict.get(key) {
                return self.resolve(value);
            }
            let parent = dict
                .get(b"Parent")
                .and_then(Object::as_reference)
                .map_err(|_| {
                    FarbsichtError::PdfError(format!(
                        "{} not found on page or its parents",
                        String::from_utf8_lossy(key)
                    ))
                })?;
            dict = self.dictionary(parent)?;
        }
        Err(FarbsichtError::PdfError("page tree too deep".into()))
    }

    fn dictionary(&self, id: ObjectId) -> Result<&Dictionary, FarbsichtError> {
        self.document
            .get_object(id)
            .and_then(Object::as_dict)
            .map_err(|err| FarbsichtError::PdfError(format!("object {id:?}: {err}")))
    }

    fn resolve<'a>(&'a self, value: &'a Object) -> Result<&'a Object, FarbsichtError> {
        match value {
            Object::Reference(id) => self
                .document
                .get_object(*id)
                .map_err(|err| FarbsichtError::PdfError(format!("object {id:?}: {err}"))),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_pdf_bytes() {
        let err = PdfReader::from_bytes(b"hello").err().unwrap();
        assert!(matches!(err, FarbsichtError::PdfError(_)));
    }
}
