// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Farbsicht — Color Blindness Filter Preview
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::sidebar::Sidebar;
use pages::viewer::Viewer;
use services::app_services::AppServices;
use services::preview::preview_filter_svg;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Farbsicht starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| {
        let svc = AppServices::init();
        tracing::info!(path = %svc.data_dir().display(), "backend services initialised");
        svc
    });

    use_context_provider(|| svc.clone());
    let state = use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    let dark = state.read().view.dark_mode();
    let (background, foreground) = if dark {
        ("#1e1e1e", "#f0f0f0")
    } else {
        ("#ffffff", "#222222")
    };
    let filter_defs = preview_filter_svg();

    rsx! {
        div {
            style: "display: flex; height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: {background}; color: {foreground};",
            // Hidden SVG holding the live preview filters.
            div {
                style: "position: absolute; width: 0; height: 0; overflow: hidden;",
                dangerous_inner_html: "{filter_defs}",
            }
            Sidebar {}
            Viewer {}
        }
    }
}
