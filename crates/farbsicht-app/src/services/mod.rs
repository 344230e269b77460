// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — bridges the Dioxus UI to the farbsicht backend crates and
// the desktop (file dialogs, clipboard, OS theme).

pub mod app_services;
pub mod clipboard;
pub mod data_dir;
pub mod preview;
