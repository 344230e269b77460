// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the persisted settings and provides the
// operations the Dioxus UI calls: picking and pasting images, detecting the
// OS theme, and running the PDF export.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use farbsicht_core::config::ThemePreference;
use farbsicht_core::error::Result;
use farbsicht_core::{AppConfig, SourceImage};
use farbsicht_document::ExportPipeline;
use tracing::{info, warn};

use super::{clipboard, data_dir, preview};

/// File extensions offered by the open dialog.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

/// What happened when the user asked for an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No image was loaded, so nothing was created.
    NothingToExport,
    /// The document was built but the save dialog was dismissed.
    Cancelled,
    /// The PDF was written to `path`.
    Saved { path: PathBuf, bytes: usize },
}

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// Cheaply cloneable so it can be moved into closures and async blocks.
#[derive(Clone)]
pub struct AppServices {
    data_dir: PathBuf,
    config: Arc<Mutex<AppConfig>>,
}

impl AppServices {
    /// Initialise services in the default data directory. Call once at startup.
    pub fn init() -> Self {
        Self::with_data_dir(data_dir::data_dir())
    }

    /// Initialise services rooted at `dir`, loading any saved settings.
    pub fn with_data_dir(dir: PathBuf) -> Self {
        let config = match load_config(&dir) {
            Ok(Some(config)) => config,
            Ok(None) => AppConfig::default(),
            Err(e) => {
                warn!(error = %e, "settings file unreadable, using defaults");
                AppConfig::default()
            }
        };

        Self {
            data_dir: dir,
            config: Arc::new(Mutex::new(config)),
        }
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Update and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().unwrap_or_else(PoisonError::into_inner) = config.clone();
        persist_config(&self.data_dir, config)
    }

    // -- Theme ---------------------------------------------------------------

    /// Whether the window should start dark.
    pub fn prefers_dark(&self, theme: ThemePreference) -> bool {
        match theme {
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
            ThemePreference::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => true,
                // Light, unspecified, or detection failure
                Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => false,
            },
        }
    }

    // -- Image input ---------------------------------------------------------

    /// Let the user choose an image file. `Ok(None)` if the dialog was dismissed.
    pub async fn pick_image(&self) -> Result<Option<SourceImage>> {
        let Some(handle) = rfd::AsyncFileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
            .await
        else {
            return Ok(None);
        };

        load_image_file(handle.path()).map(Some)
    }

    /// Read an image from the clipboard. `Ok(None)` for non-image content.
    pub fn paste_image(&self) -> Result<Option<SourceImage>> {
        clipboard::read_clipboard_image()
    }

    // -- Export --------------------------------------------------------------

    /// Filter `image` five times, render the PDF, and ask where to save it.
    ///
    /// With no image nothing is built and no dialog is shown.
    pub async fn export_pdf(
        &self,
        image: Option<SourceImage>,
        config: AppConfig,
    ) -> Result<ExportOutcome> {
        let pipeline = ExportPipeline::from_config(&config);
        let Some(bytes) = pipeline.export(image.as_ref()).await? else {
            return Ok(ExportOutcome::NothingToExport);
        };

        let Some(handle) = rfd::AsyncFileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(config.export_file_name.as_str())
            .save_file()
            .await
        else {
            info!("export save dialog dismissed");
            return Ok(ExportOutcome::Cancelled);
        };

        write_export(handle.path(), &bytes)
    }
}

/// Read `path` and reject it unless it starts like a known image format.
pub fn load_image_file(path: &Path) -> Result<SourceImage> {
    let image = SourceImage::from_file(path)?;
    preview::mime_type(&image)?;
    info!(path = %path.display(), bytes = image.len(), "image loaded from file");
    Ok(image)
}

/// Write finished PDF bytes to `path`.
pub fn write_export(path: &Path, bytes: &[u8]) -> Result<ExportOutcome> {
    std::fs::write(path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "export saved");
    Ok(ExportOutcome::Saved {
        path: path.to_path_buf(),
        bytes: bytes.len(),
    })
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> Result<Option<AppConfig>> {
    let path = data_dir.join(CONFIG_FILE);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}
