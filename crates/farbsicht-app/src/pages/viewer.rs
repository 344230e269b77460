// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Viewer — upload/paste target and the live filtered preview, either as a
// single image or as a normal/filtered pair in compare mode.

use std::sync::Arc;

use dioxus::prelude::*;

use farbsicht_core::FilterKind;
use farbsicht_core::view::ViewMode;

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Viewer() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let src = state.read().preview_url.clone();
    let mode = state.read().view.mode();
    let status = state.read().status.clone();

    rsx! {
        div { style: "flex: 1; padding: 16px; overflow: auto;",
            div {
                style: "border: 2px dashed #aaa; border-radius: 12px; padding: 48px; text-align: center; min-height: 60%;",
                tabindex: "0",
                onpaste: {
                    let svc = svc.clone();
                    move |_| paste_into(&svc, state)
                },

                if let Some(src) = src {
                    {
                        match mode {
                            ViewMode::Single { filter } => rsx! {
                                FilteredImage { src: src.clone(), filter: filter, alt: "Uploaded design" }
                            },
                            ViewMode::Compare { secondary } => rsx! {
                                div { style: "display: flex; flex-direction: row; gap: 16px;",
                                    div { style: "width: 50%;",
                                        h3 { "Normal View" }
                                        FilteredImage { src: src.clone(), filter: FilterKind::Normal, alt: "Original design" }
                                    }
                                    div { style: "width: 50%;",
                                        h3 { "{secondary.label()}" }
                                        FilteredImage { src: src.clone(), filter: secondary, alt: "Filtered design" }
                                    }
                                }
                            },
                        }
                    }
                    button {
                        style: "margin-top: 16px; padding: 8px 16px; border-radius: 8px; border: 1px solid #ff3b30; color: #ff3b30; background: transparent;",
                        onclick: move |_| state.write().clear_image(),
                        "Clear Image"
                    }
                } else {
                    p { style: "font-size: 48px; margin: 0;", "\u{1F5BC}" }
                    p { "Upload or paste your screenshot here" }
                    div { style: "display: flex; gap: 8px; justify-content: center;",
                        button {
                            style: "padding: 8px 16px; border-radius: 6px; border: none; background: #007aff; color: white;",
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    let svc = svc.clone();
                                    spawn(async move {
                                        match svc.pick_image().await {
                                            Ok(Some(image)) => state.write().load_image(image),
                                            Ok(None) => {}
                                            Err(e) => state.write().report_error(&e),
                                        }
                                    });
                                }
                            },
                            "Select File"
                        }
                        button {
                            style: "padding: 8px 16px; border-radius: 6px; border: 1px solid #007aff; color: #007aff; background: transparent;",
                            onclick: {
                                let svc = svc.clone();
                                move |_| paste_into(&svc, state)
                            },
                            "Paste"
                        }
                    }
                }
            }

            if let Some(status) = status {
                p { style: "margin-top: 12px; font-size: 14px; text-align: center; color: {status.color()};",
                    "{status.text}"
                }
            }
        }
    }
}

#[component]
fn FilteredImage(src: Arc<str>, filter: FilterKind, alt: &'static str) -> Element {
    let css = filter.css_filter();
    rsx! {
        img {
            src: "{src}",
            alt: alt,
            style: "max-width: 100%; height: auto; filter: {css};",
        }
    }
}

/// Load the clipboard image into state. Non-image content is ignored.
fn paste_into(svc: &AppServices, mut state: Signal<AppState>) {
    match svc.paste_image() {
        Ok(Some(image)) => state.write().load_image(image),
        Ok(None) => {}
        Err(e) => state.write().report_error(&e),
    }
}
