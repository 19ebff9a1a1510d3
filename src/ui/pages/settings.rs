use std::time::SystemTime;

use dioxus::prelude::*;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::{
    app::{request_catalog_reload, CatalogRequest, CatalogState},
    domain::{DisplayMode, TradeState},
    infra::cache::humanize_secs,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::{
        config::{config_file, save_config, AppConfig},
        version::version_label,
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let mut config = use_context::<Signal<AppConfig>>();
    let catalog = use_context::<Signal<CatalogState>>();
    let state = use_context::<Signal<TradeState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let catalog_request = use_context::<Signal<CatalogRequest>>();

    let initial = config.with(|cfg| cfg.clone());
    let mut url_input = use_signal(|| initial.catalog_url.clone().unwrap_or_default());
    let mut mode_input = use_signal(|| initial.default_mode);

    let (item_count, status, source, fetched_at) = catalog.with(|loaded| {
        (
            loaded.catalog.len(),
            loaded.status.map(|s| s.label()).unwrap_or("loading"),
            loaded
                .source
                .clone()
                .unwrap_or_else(|| "bundled catalog".to_string()),
            loaded.fetched_at,
        )
    });
    let (full_count, split_count, default_rules_only) = state.with(|st| {
        (
            st.exceptions().full_value_count(),
            st.exceptions().eighty_twenty_count(),
            st.exceptions().is_empty(),
        )
    });
    let fetched_label = fetched_at.map(describe_fetch_time);
    let config_path = config_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());

    let on_save = move |_| {
        let trimmed = url_input().trim().to_string();
        let updated = AppConfig {
            catalog_url: (!trimmed.is_empty()).then_some(trimmed),
            default_mode: mode_input(),
        };
        let source_changed = config.with(|cfg| cfg.catalog_url() != updated.catalog_url());

        match save_config(&updated) {
            Ok(()) => {
                config.set(updated);
                push_toast(toasts, ToastKind::Success, "Settings saved.");
                if source_changed {
                    request_catalog_reload(catalog_request, false);
                }
            }
            Err(err) => {
                push_toast(toasts, ToastKind::Error, format!("Failed to save settings: {err}"));
            }
        }
    };

    let on_refresh = move |_| {
        request_catalog_reload(catalog_request, true);
        push_toast(toasts, ToastKind::Info, "Reloading catalog...");
    };

    rsx! {
        div { class: "settings",
            section { class: "offer-panel",
                h2 { class: "offer-title", "Catalog Source" }
                label { "Base URL (serves ftf_items.json and shg_exceptions.json)" }
                div { class: "settings-row",
                    input {
                        class: "item-search",
                        value: url_input(),
                        placeholder: "leave empty to use the bundled catalog",
                        oninput: move |evt| url_input.set(evt.value()),
                    }
                }
                label { "Default display mode" }
                div { class: "settings-row",
                    for option in [DisplayMode::Fv, DisplayMode::Hv] {
                        button {
                            key: "{option}",
                            class: "{theme::nav_class(mode_input() == option)}",
                            onclick: move |_| mode_input.set(option),
                            "{option}"
                        }
                    }
                }
                div { class: "settings-row",
                    button { class: "btn primary", onclick: on_save, "Save" }
                    button { class: "btn", onclick: on_refresh, "Refresh catalog" }
                }
            }

            section { class: "offer-panel",
                h2 { class: "offer-title", "Loaded Data" }
                p { class: "settings-stat", "Source: {source} ({status})" }
                p { class: "settings-stat", "Items: {item_count}" }
                p { class: "settings-stat", "Full-value exceptions: {full_count}" }
                p { class: "settings-stat", "80/20 exceptions: {split_count}" }
                if default_rules_only {
                    p { class: "settings-stat", "No exception lists loaded; default rules apply." }
                }
                if let Some(fetched) = fetched_label {
                    p { class: "settings-stat", "Fetched: {fetched}" }
                }
            }

            section { class: "offer-panel",
                h2 { class: "offer-title", "About" }
                p { class: "settings-stat", "Version: {version_label()}" }
                p { class: "settings-stat", "Config file: {config_path}" }
            }
        }
    }
}

fn describe_fetch_time(fetched_at: SystemTime) -> String {
    let age = SystemTime::now()
        .duration_since(fetched_at)
        .map(|age| humanize_secs(age.as_secs()))
        .unwrap_or_else(|_| "0s".to_string());
    let stamp = OffsetDateTime::from(fetched_at)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown time".to_string());
    format!("{stamp} ({age} ago)")
}
