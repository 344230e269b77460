// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Farbsicht.

use thiserror::Error;

/// Top-level error type for all Farbsicht operations.
#[derive(Debug, Error)]
pub enum FarbsichtError {
    // -- Image errors --
    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    #[error("failed to encode image: {0}")]
    ImageEncode(String),

    #[error("image decode did not finish within {secs}s")]
    DecodeTimedOut { secs: u64 },

    #[error("filter task failed: {0}")]
    FilterTask(String),

    // -- Document errors --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    // -- Platform --
    #[error("clipboard error: {0}")]
    Clipboard(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FarbsichtError>;
