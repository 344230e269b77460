// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Farbsicht — Core types, filter matrices, view state, and error definitions
// shared across all crates.

pub mod config;
pub mod error;
pub mod filter;
pub mod human_errors;
pub mod types;
pub mod view;

pub use config::AppConfig;
pub use error::FarbsichtError;
pub use filter::{ColorMatrix, FilterKind};
pub use types::*;
pub use view::ViewState;
