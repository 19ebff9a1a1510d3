use std::time::SystemTime;

use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::{Catalog, TradeState},
    infra::catalog_client::{load_catalog, CatalogStatus},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{SettingsPage, TradePage},
        shell::Shell,
    },
    util::{
        assets,
        config::{load_config, AppConfig},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Trade {},
    #[route("/settings")]
    Settings {},
}

/// Catalog currently offered by the picker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub catalog: Catalog,
    /// `None` until the first load finishes.
    pub status: Option<CatalogStatus>,
    /// Base URL in use, `None` for the bundled catalog.
    pub source: Option<String>,
    pub fetched_at: Option<SystemTime>,
}

/// Bumping `generation` re-runs the catalog loader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogRequest {
    pub generation: u64,
    pub force_refresh: bool,
}

pub fn request_catalog_reload(mut request: Signal<CatalogRequest>, force_refresh: bool) {
    request.with_mut(|req| {
        req.generation += 1;
        req.force_refresh = force_refresh;
    });
}

#[component]
pub fn App() -> Element {
    let config = use_signal(load_config);
    use_context_provider(|| config);

    let state = use_signal(|| TradeState::new(config.peek().default_mode));
    use_context_provider(|| state);

    let catalog = use_signal(CatalogState::default);
    use_context_provider(|| catalog);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let catalog_request = use_signal(CatalogRequest::default);
    use_context_provider(|| catalog_request);

    let _catalog = use_resource(move || async move {
        fetch_catalog(state, catalog, toasts, catalog_request, config).await
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

async fn fetch_catalog(
    mut state: Signal<TradeState>,
    mut catalog: Signal<CatalogState>,
    toasts: Signal<Vec<ToastMessage>>,
    request: Signal<CatalogRequest>,
    config: Signal<AppConfig>,
) -> Option<CatalogStatus> {
    let request = request();
    let source = config.peek().catalog_url().map(str::to_string);

    let payload = load_catalog(source.as_deref(), request.force_refresh).await;
    let status = payload.status;
    info!(
        items = payload.catalog.len(),
        status = status.label(),
        generation = request.generation,
        "catalog ready"
    );

    state.with_mut(|st| st.load_exceptions(payload.exceptions));
    catalog.set(CatalogState {
        catalog: payload.catalog,
        status: Some(status),
        source: source.clone().filter(|_| status != CatalogStatus::Bundled),
        fetched_at: payload.fetched_at,
    });

    match status {
        CatalogStatus::Stale => push_toast(
            toasts,
            ToastKind::Warning,
            "Catalog source unreachable; using the last downloaded copy.",
        ),
        CatalogStatus::Bundled if source.is_some() => push_toast(
            toasts,
            ToastKind::Warning,
            "Catalog source unreachable; using the bundled catalog.",
        ),
        CatalogStatus::Unavailable => {
            push_toast(toasts, ToastKind::Error, "Could not load items.")
        }
        CatalogStatus::Fresh if request.force_refresh => {
            push_toast(toasts, ToastKind::Success, "Catalog refreshed.")
        }
        _ => {}
    }

    Some(status)
}

#[component]
pub fn Trade() -> Element {
    rsx! { Shell { TradePage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
