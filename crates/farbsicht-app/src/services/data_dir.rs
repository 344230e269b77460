// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "farbsicht";

/// Return the application data directory, creating it if needed.
///
/// `$XDG_DATA_HOME` on Linux, `Library/Application Support` on macOS,
/// `%APPDATA%` on Windows. Falls back to the temp directory when the platform
/// reports no data directory.
pub fn data_dir() -> PathBuf {
    let dir = app_dir_in(dirs::data_dir().as_deref());
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "could not create data directory");
    }
    dir
}

fn app_dir_in(base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) => base.join(APP_DIR),
        None => std::env::temp_dir().join(APP_DIR),
    }
}
