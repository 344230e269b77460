// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — a single reactive signal for the Dioxus UI.

use std::sync::Arc;

use farbsicht_core::human_errors::{Severity, humanize_error};
use farbsicht_core::{AppConfig, FarbsichtError, SourceImage, ViewState};

use crate::services::app_services::AppServices;
use crate::services::preview::data_url;

/// Outcome of the last user action, shown under the preview.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    /// `None` for success/info messages.
    pub severity: Option<Severity>,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: None,
        }
    }

    pub fn from_error(err: &FarbsichtError) -> Self {
        let human = humanize_error(err);
        Self {
            text: human.to_string(),
            severity: Some(human.severity),
        }
    }

    /// Text colour for the status line.
    pub fn color(&self) -> &'static str {
        match self.severity {
            None => "#34c759",
            Some(Severity::Transient) => "#ff9500",
            Some(Severity::ActionRequired) => "#007aff",
            Some(Severity::Permanent) => "#ff3b30",
        }
    }
}

/// Shared state accessible to all components via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The image being previewed, if any.
    pub image: Option<SourceImage>,
    /// `data:` URL of `image`, built once per load.
    pub preview_url: Option<Arc<str>>,
    /// Filter selection, compare mode, dark mode.
    pub view: ViewState,
    /// Settings as edited in the sidebar (saved explicitly).
    pub config: AppConfig,
    /// Whether an export is running.
    pub exporting: bool,
    pub status: Option<StatusMessage>,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        let config = svc.config();
        let dark = svc.prefers_dark(config.theme);
        Self {
            image: None,
            preview_url: None,
            view: ViewState::new(dark),
            config,
            exporting: false,
            status: None,
        }
    }

    /// Replace the current image wholesale.
    pub fn load_image(&mut self, image: SourceImage) {
        self.status = Some(StatusMessage::info(format!(
            "Loaded {} ({} KB)",
            image.display_name(),
            image.len() / 1024
        )));
        self.preview_url = Some(data_url(&image).into());
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
        self.preview_url = None;
        self.status = None;
    }

    pub fn report_error(&mut self, err: &FarbsichtError) {
        tracing::warn!(error = %err, "operation failed");
        self.status = Some(StatusMessage::from_error(err));
    }
}
