// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the status line.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::FarbsichtError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worth simply trying again.
    Transient,
    /// User must do something (pick another file, load an image first).
    ActionRequired,
    /// Cannot be fixed by retrying.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Whether retrying the same action might succeed.
    pub retriable: bool,
    /// Drives the status line colour.
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Convert a `FarbsichtError` into a `HumanError`.
pub fn humanize_error(err: &FarbsichtError) -> HumanError {
    match err {
        FarbsichtError::ImageDecode(_) => HumanError {
            message: "This image couldn't be opened.".into(),
            suggestion: "The file may be damaged or in an unusual format. Try saving it as a PNG or JPEG first.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        FarbsichtError::ImageEncode(_) => HumanError {
            message: "The filtered image couldn't be prepared.".into(),
            suggestion: "Try again. If this keeps happening, try a smaller image.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        FarbsichtError::DecodeTimedOut { secs } => HumanError {
            message: "Processing the image took too long.".into(),
            suggestion: format!(
                "Export was stopped after {secs} seconds. Try a smaller image, or raise the timeout in settings."
            ),
            retriable: true,
            severity: Severity::Transient,
        },

        FarbsichtError::FilterTask(_) => HumanError {
            message: "Applying the filters stopped unexpectedly.".into(),
            suggestion: "Try exporting again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        FarbsichtError::PdfError(_) => HumanError {
            message: "The PDF couldn't be created.".into(),
            suggestion: "Try exporting again. If this keeps happening, try a different image.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        FarbsichtError::Clipboard(_) => HumanError {
            message: "The clipboard couldn't be read.".into(),
            suggestion: "Copy the image again, or save it to a file and use Select File.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        FarbsichtError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or choose a different folder.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        FarbsichtError::Serialization(_) => HumanError {
            message: "The settings file couldn't be read.".into(),
            suggestion: "Default settings are in use. Saving settings will replace the file.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}
