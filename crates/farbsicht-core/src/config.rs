// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::types::{Orientation, PaperSize};

/// Default name offered in the export save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "color_blindness_filters.pdf";

/// Which color scheme the window starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemePreference {
    /// Follow the operating system.
    #[default]
    System,
    Light,
    Dark,
}

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Paper size of exported pages.
    pub paper_size: PaperSize,
    /// Orientation of exported pages.
    pub orientation: Orientation,
    /// Left/right margin around the image on export pages, in mm.
    pub margin_mm: f32,
    /// Font size of the page label, in points.
    pub label_font_size_pt: f32,
    /// File name suggested when saving the export.
    pub export_file_name: String,
    /// Upper bound on decoding and filtering one image.
    pub decode_timeout_secs: u64,
    /// Initial color scheme.
    pub theme: ThemePreference,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Landscape,
            margin_mm: 10.0,
            label_font_size_pt: 16.0,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            decode_timeout_secs: 30,
            theme: ThemePreference::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_export_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paper_size, PaperSize::A4);
        assert_eq!(cfg.orientation, Orientation::Landscape);
        assert_eq!(cfg.export_file_name, "color_blindness_filters.pdf");
        assert_eq!(cfg.label_font_size_pt, 16.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{ "theme": "Dark" }"#).unwrap();
        assert_eq!(cfg.theme, ThemePreference::Dark);
        assert_eq!(cfg.margin_mm, 10.0);
        assert_eq!(cfg.decode_timeout_secs, 30);
    }
}
