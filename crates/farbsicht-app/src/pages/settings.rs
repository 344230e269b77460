// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings panel — export layout and theme, saved to the data directory.

use dioxus::prelude::*;

use farbsicht_core::config::ThemePreference;
use farbsicht_core::types::{Orientation, PaperSize};

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn SettingsPanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<String>::None);

    let config = state.read().config.clone();

    rsx! {
        section { style: "margin-top: 24px; font-size: 14px;",
            h3 { "Export Settings" }

            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 0;",
                span { "Paper size" }
                select {
                    value: config.paper_size.label(),
                    onchange: move |evt| {
                        if let Some(ps) = PaperSize::from_label(&evt.value()) {
                            state.write().config.paper_size = ps;
                        }
                    },
                    option { value: "A4", "A4" }
                    option { value: "A3", "A3" }
                    option { value: "A5", "A5" }
                    option { value: "Letter", "Letter" }
                    option { value: "Legal", "Legal" }
                    option { value: "Tabloid", "Tabloid" }
                }
            }

            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 0;",
                span { "Orientation" }
                select {
                    value: orientation_label(config.orientation),
                    onchange: move |evt| {
                        if let Some(o) = orientation_from_label(&evt.value()) {
                            state.write().config.orientation = o;
                        }
                    },
                    option { value: "Landscape", "Landscape" }
                    option { value: "Portrait", "Portrait" }
                }
            }

            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 0;",
                span { "Timeout (s)" }
                input {
                    r#type: "number",
                    style: "width: 64px; text-align: right;",
                    value: "{config.decode_timeout_secs}",
                    onchange: move |evt| {
                        if let Ok(secs) = evt.value().parse::<u64>()
                            && secs > 0
                        {
                            state.write().config.decode_timeout_secs = secs;
                        }
                    },
                }
            }

            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 0;",
                span { "Start in" }
                select {
                    value: theme_label(config.theme),
                    onchange: move |evt| {
                        if let Some(theme) = theme_from_label(&evt.value()) {
                            state.write().config.theme = theme;
                        }
                    },
                    option { value: "System", "System theme" }
                    option { value: "Light", "Light" }
                    option { value: "Dark", "Dark" }
                }
            }

            button {
                style: "width: 100%; padding: 8px; border-radius: 8px; border: none; background: #007aff; color: white; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                save_msg.set(Some("Settings saved.".into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some(format!("Save failed: {e}")));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some(ref msg) = *save_msg.read() {
                p { style: "font-size: 13px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }
        }
    }
}

/// Labelled checkbox row.
#[component]
pub fn SettingRow(label: &'static str, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0;",
            span { "{label}" }
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt| {
                    on_toggle.call(evt.checked());
                },
            }
        }
    }
}

fn orientation_label(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Portrait => "Portrait",
        Orientation::Landscape => "Landscape",
    }
}

fn orientation_from_label(label: &str) -> Option<Orientation> {
    match label {
        "Portrait" => Some(Orientation::Portrait),
        "Landscape" => Some(Orientation::Landscape),
        _ => None,
    }
}

fn theme_label(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::System => "System",
        ThemePreference::Light => "Light",
        ThemePreference::Dark => "Dark",
    }
}

fn theme_from_label(label: &str) -> Option<ThemePreference> {
    match label {
        "System" => Some(ThemePreference::System),
        "Light" => Some(ThemePreference::Light),
        "Dark" => Some(ThemePreference::Dark),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_labels_round_trip() {
        for o in [Orientation::Portrait, Orientation::Landscape] {
            assert_eq!(orientation_from_label(orientation_label(o)), Some(o));
        }
        for t in [ThemePreference::System, ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(theme_from_label(theme_label(t)), Some(t));
        }
        assert_eq!(theme_from_label("Sepia"), None);
    }
}
