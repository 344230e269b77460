// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Farbsicht.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FarbsichtError, Result};

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Portrait dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A3 => (297, 420),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Tabloid => (279, 432),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }

    /// Short name used by the settings selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::A4 => "A4",
            Self::A3 => "A3",
            Self::A5 => "A5",
            Self::Letter => "Letter",
            Self::Legal => "Legal",
            Self::Tabloid => "Tabloid",
            Self::Custom { .. } => "Custom",
        }
    }

    /// Inverse of [`PaperSize::label`] for the named sizes.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "A4" => Some(Self::A4),
            "A3" => Some(Self::A3),
            "A5" => Some(Self::A5),
            "Letter" => Some(Self::Letter),
            "Legal" => Some(Self::Legal),
            "Tabloid" => Some(Self::Tabloid),
            _ => None,
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Page (width, height) in millimetres for a paper size laid out in the given
/// orientation.
pub fn page_dimensions_mm(paper: PaperSize, orientation: Orientation) -> (f32, f32) {
    let (w, h) = paper.dimensions_mm();
    let (short, long) = (w.min(h) as f32, w.max(h) as f32);
    match orientation {
        Orientation::Portrait => (short, long),
        Orientation::Landscape => (long, short),
    }
}

/// Where the current image came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOrigin {
    /// Chosen through the file picker.
    File { path: PathBuf },
    /// Pasted from the system clipboard.
    Clipboard,
}

/// The image being previewed: encoded bytes plus their origin.
///
/// Never mutated after creation. A new upload or paste replaces it wholesale.
/// Clones share the underlying bytes.
#[derive(Clone)]
pub struct SourceImage {
    bytes: Arc<[u8]>,
    origin: ImageOrigin,
}

impl SourceImage {
    pub fn new(bytes: impl Into<Arc<[u8]>>, origin: ImageOrigin) -> Self {
        Self {
            bytes: bytes.into(),
            origin,
        }
    }

    /// Read an image file from disk. The bytes are not decoded here, but an
    /// empty file is rejected straight away.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = Self::new(
            std::fs::read(path)?,
            ImageOrigin::File {
                path: path.to_path_buf(),
            },
        );
        if image.is_empty() {
            return Err(FarbsichtError::ImageDecode(format!(
                "{} is empty",
                path.display()
            )));
        }
        Ok(image)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the encoded bytes, for moving into worker tasks.
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    pub fn origin(&self) -> &ImageOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File name for file uploads, "Pasted image" for clipboard content.
    pub fn display_name(&self) -> String {
        match &self.origin {
            ImageOrigin::File { path } => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            ImageOrigin::Clipboard => "Pasted image".to_string(),
        }
    }
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("len", &self.bytes.len())
            .field("origin", &self.origin)
            .finish()
    }
}

impl PartialEq for SourceImage {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.bytes == other.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_a4_is_wide() {
        assert_eq!(
            page_dimensions_mm(PaperSize::A4, Orientation::Landscape),
            (297.0, 210.0)
        );
        assert_eq!(
            page_dimensions_mm(PaperSize::A4, Orientation::Portrait),
            (210.0, 297.0)
        );
    }

    #[test]
    fn paper_labels_round_trip() {
        for paper in [
            PaperSize::A4,
            PaperSize::A3,
            PaperSize::A5,
            PaperSize::Letter,
            PaperSize::Legal,
            PaperSize::Tabloid,
        ] {
            assert_eq!(PaperSize::from_label(paper.label()), Some(paper));
        }
    }

    #[test]
    fn source_image_clones_share_bytes() {
        let img = SourceImage::new(vec![1u8, 2, 3], ImageOrigin::Clipboard);
        let copy = img.clone();
        assert!(Arc::ptr_eq(&img.shared_bytes(), &copy.shared_bytes()));
        assert_eq!(copy.display_name(), "Pasted image");
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn file_origin_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mockup.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let img = SourceImage::from_file(&path).unwrap();
        assert_eq!(img.display_name(), "mockup.png");
        assert_eq!(img.bytes(), b"not really a png");
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");
        std::fs::write(&path, b"").unwrap();

        let err = SourceImage::from_file(&path).unwrap_err();
        assert!(matches!(err, FarbsichtError::ImageDecode(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SourceImage::from_file("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, crate::FarbsichtError::Io(_)));
    }
}
