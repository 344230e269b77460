// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sidebar — filter selection, compare toggle, dark mode, and PDF export.

use dioxus::prelude::*;

use farbsicht_core::FilterKind;

use crate::pages::settings::{SettingRow, SettingsPanel};
use crate::services::app_services::{AppServices, ExportOutcome};
use crate::state::{AppState, StatusMessage};

#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let view = state.read().view;
    let has_image = state.read().image.is_some();
    let exporting = state.read().exporting;
    let panel_bg = if view.dark_mode() { "#2a2a2a" } else { "#f3f4f6" };
    let compare_label = if view.is_comparing() { "Exit Compare" } else { "Compare" };

    rsx! {
        div { style: "width: 256px; padding: 16px; background: {panel_bg}; overflow-y: auto;",
            h2 { style: "margin-top: 0;", "Color Blindness Filters" }

            for kind in FilterKind::ALL {
                FilterButton {
                    kind: kind,
                    selected: view.selected_filter() == kind,
                    onclick: move |_| {
                        let next = state.read().view.select_filter(kind);
                        state.write().view = next;
                    },
                }
            }

            button {
                style: "width: 100%; padding: 10px; margin-top: 16px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: transparent; font-size: 14px;",
                onclick: move |_| {
                    let next = state.read().view.toggle_compare();
                    tracing::debug!(comparing = next.is_comparing(), "compare toggled");
                    state.write().view = next;
                },
                "{compare_label}"
            }

            SettingRow {
                label: "Dark mode",
                checked: view.dark_mode(),
                on_toggle: move |_: bool| {
                    let next = state.read().view.toggle_dark_mode();
                    state.write().view = next;
                },
            }

            button {
                style: "width: 100%; padding: 12px; margin-top: 16px; border-radius: 8px; border: none; background: #34c759; color: white; font-size: 15px;",
                disabled: !has_image || exporting,
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let svc = svc.clone();
                        let (image, config) = {
                            let s = state.read();
                            (s.image.clone(), s.config.clone())
                        };
                        {
                            let mut s = state.write();
                            s.exporting = true;
                            s.status = Some(StatusMessage::info("Applying filters..."));
                        }
                        spawn(async move {
                            let outcome = svc.export_pdf(image, config).await;
                            let mut s = state.write();
                            s.exporting = false;
                            match outcome {
                                Ok(ExportOutcome::Saved { path, bytes }) => {
                                    s.status = Some(StatusMessage::info(format!(
                                        "Saved {} ({} KB)",
                                        path.display(),
                                        bytes / 1024
                                    )));
                                }
                                Ok(ExportOutcome::Cancelled) => {
                                    s.status = Some(StatusMessage::info("Export cancelled."));
                                }
                                Ok(ExportOutcome::NothingToExport) => s.status = None,
                                Err(e) => s.report_error(&e),
                            }
                        });
                    }
                },
                if exporting { "Exporting..." } else { "Download PDF" }
            }

            SettingsPanel {}
        }
    }
}

#[component]
fn FilterButton(kind: FilterKind, selected: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let (background, color) = if selected {
        ("#007aff", "white")
    } else {
        ("transparent", "inherit")
    };
    let name = kind.display_name();
    rsx! {
        button {
            style: "display: block; width: 100%; text-align: left; padding: 8px 12px; margin: 4px 0; border-radius: 6px; border: 1px solid #ccc; background: {background}; color: {color}; font-size: 14px;",
            onclick: move |evt| onclick.call(evt),
            "{name}"
        }
    }
}
