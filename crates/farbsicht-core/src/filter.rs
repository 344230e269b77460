// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Color-vision-deficiency filters and their fixed 4x5 color matrices.
//
// The same constants drive both the export path (per-pixel transform) and the
// live preview (SVG `feColorMatrix` values), so the two can never disagree.

use serde::{Deserialize, Serialize};

/// One of the five simulated viewing modes, in fixed export order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Unfiltered view.
    #[default]
    Normal,
    /// Red-blind.
    Protanopia,
    /// Green-blind.
    Deuteranopia,
    /// Blue-blind.
    Tritanopia,
    /// Total color blindness.
    Achromatopsia,
}

impl FilterKind {
    /// Every filter in enumeration order. Export pages follow this order.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Normal,
        FilterKind::Protanopia,
        FilterKind::Deuteranopia,
        FilterKind::Tritanopia,
        FilterKind::Achromatopsia,
    ];

    /// Lowercase identifier, also used as the SVG filter element id.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    /// Capitalised name shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
            Self::Achromatopsia => "Achromatopsia",
        }
    }

    /// Heading used on export pages and compare panes, e.g. "Tritanopia Filter".
    pub fn label(&self) -> String {
        format!("{} Filter", self.display_name())
    }

    /// The transform for this filter, or `None` for the identity.
    pub fn matrix(&self) -> Option<&'static ColorMatrix> {
        match self {
            Self::Normal => None,
            Self::Protanopia => Some(&PROTANOPIA),
            Self::Deuteranopia => Some(&DEUTERANOPIA),
            Self::Tritanopia => Some(&TRITANOPIA),
            Self::Achromatopsia => Some(&ACHROMATOPSIA),
        }
    }

    /// CSS `filter` property value referencing the preview SVG filter.
    pub fn css_filter(&self) -> String {
        match self {
            Self::Normal => "none".to_string(),
            other => format!("url(#{})", other.key()),
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A 4x5 color matrix in `feColorMatrix` layout.
///
/// Rows are output R, G, B, A. Columns are input R, G, B, A and a constant
/// offset expressed on the 0..=1 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    rows: [[f32; 5]; 4],
}

pub const PROTANOPIA: ColorMatrix = ColorMatrix::new([
    [0.567, 0.433, 0.0, 0.0, 0.0],
    [0.558, 0.442, 0.0, 0.0, 0.0],
    [0.0, 0.242, 0.758, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
]);

pub const DEUTERANOPIA: ColorMatrix = ColorMatrix::new([
    [0.625, 0.375, 0.0, 0.0, 0.0],
    [0.7, 0.3, 0.0, 0.0, 0.0],
    [0.0, 0.3, 0.7, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
]);

pub const TRITANOPIA: ColorMatrix = ColorMatrix::new([
    [0.95, 0.05, 0.0, 0.0, 0.0],
    [0.0, 0.433, 0.567, 0.0, 0.0],
    [0.0, 0.475, 0.525, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
]);

pub const ACHROMATOPSIA: ColorMatrix = ColorMatrix::new([
    [0.299, 0.587, 0.114, 0.0, 0.0],
    [0.299, 0.587, 0.114, 0.0, 0.0],
    [0.299, 0.587, 0.114, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
]);

impl ColorMatrix {
    pub const fn new(rows: [[f32; 5]; 4]) -> Self {
        Self { rows }
    }

    /// Transform one RGBA pixel. RGB are rounded and clamped to 0..=255;
    /// alpha is returned untouched.
    pub fn apply_rgba(&self, pixel: [u8; 4]) -> [u8; 4] {
        let [r, g, b, a] = pixel;
        let input = [r as f32, g as f32, b as f32, a as f32, 255.0];
        let channel = |row: &[f32; 5]| -> u8 {
            let sum: f32 = row.iter().zip(input.iter()).map(|(m, v)| m * v).sum();
            sum.round().clamp(0.0, 255.0) as u8
        };
        [
            channel(&self.rows[0]),
            channel(&self.rows[1]),
            channel(&self.rows[2]),
            a,
        ]
    }

    /// Space-separated values for an SVG `feColorMatrix type="matrix"`.
    pub fn to_svg_values(&self) -> String {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_order_is_fixed() {
        let keys: Vec<&str> = FilterKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(
            keys,
            ["normal", "protanopia", "deuteranopia", "tritanopia", "achromatopsia"]
        );
    }

    #[test]
    fn normal_has_no_matrix() {
        assert!(FilterKind::Normal.matrix().is_none());
        assert_eq!(FilterKind::Normal.css_filter(), "none");
    }

    #[test]
    fn achromatopsia_turns_red_gray() {
        let out = ACHROMATOPSIA.apply_rgba([255, 0, 0, 200]);
        assert_eq!(out, [76, 76, 76, 200]);
    }

    #[test]
    fn protanopia_on_pure_red() {
        // 0.567 * 255 = 144.585, 0.558 * 255 = 142.29
        assert_eq!(PROTANOPIA.apply_rgba([255, 0, 0, 255]), [145, 142, 0, 255]);
    }

    #[test]
    fn deuteranopia_mixed_pixel() {
        // R: 6.25 + 75 = 81.25, G: 7 + 60 = 67, B: 60 + 21 = 81
        assert_eq!(DEUTERANOPIA.apply_rgba([10, 200, 30, 17]), [81, 67, 81, 17]);
    }

    #[test]
    fn white_stays_in_range() {
        for kind in FilterKind::ALL {
            if let Some(matrix) = kind.matrix() {
                let [r, g, b, a] = matrix.apply_rgba([255, 255, 255, 0]);
                assert_eq!(a, 0);
                assert!(r >= 254 && g >= 254 && b >= 254, "{kind}: {r} {g} {b}");
            }
        }
    }

    #[test]
    fn out_of_range_sums_are_clamped() {
        let boost = ColorMatrix::new([
            [2.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, -1.0],
            [0.0, 0.0, 1.0, 0.0, 0.5],
            [0.0, 0.0, 0.0, 1.0, 0.0],
        ]);
        assert_eq!(boost.apply_rgba([200, 100, 0, 9]), [255, 0, 128, 9]);
    }

    #[test]
    fn svg_values_match_constants() {
        assert_eq!(
            TRITANOPIA.to_svg_values(),
            "0.95 0.05 0 0 0 0 0.433 0.567 0 0 0 0.475 0.525 0 0 0 0 0 1 0"
        );
    }

    #[test]
    fn labels_and_keys() {
        assert_eq!(FilterKind::Deuteranopia.label(), "Deuteranopia Filter");
        assert_eq!(FilterKind::Tritanopia.key(), "tritanopia");
        assert_eq!(FilterKind::Achromatopsia.css_filter(), "url(#achromatopsia)");
    }
}
