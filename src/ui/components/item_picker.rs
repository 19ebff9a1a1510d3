use dioxus::prelude::*;

use crate::{
    app::CatalogState,
    domain::{apply_mode_scale, format_value, CatalogFilter, Item, Rarity, TradeState},
    ui::theme,
};

/// Modal listing the catalog with a rarity sidebar and search box. Filters
/// start fresh every time the modal opens.
#[component]
pub fn ItemPicker(on_pick: EventHandler<Item>, on_close: EventHandler<()>) -> Element {
    let state = use_context::<Signal<TradeState>>();
    let catalog = use_context::<Signal<CatalogState>>();

    let mut query = use_signal(String::new);
    let mut rarity = use_signal(|| None::<Rarity>);

    let filter = CatalogFilter {
        rarity: rarity(),
        query: query(),
    };
    let (mode, modifier) = state.with(|st| (st.mode(), st.modifier()));

    let entries: Vec<(Item, String)> = state.with(|st| {
        catalog.with(|loaded| {
            loaded
                .catalog
                .filter(&filter)
                .map(|item| {
                    let preview = apply_mode_scale(st.preview_value(item), mode);
                    (item.clone(), format!("{} {mode}", format_value(preview, mode)))
                })
                .collect()
        })
    });
    let empty_message = catalog.with(|loaded| {
        if loaded.catalog.is_empty() {
            "Could not load items."
        } else {
            "No items match your search."
        }
    });

    rsx! {
        div {
            class: "modal",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    input {
                        class: "item-search",
                        placeholder: "Search items...",
                        value: query(),
                        autofocus: true,
                        oninput: move |evt| query.set(evt.value()),
                    }
                    if let Some(tag) = modifier.tag() {
                        span { class: "{theme::modifier_tag_class(modifier)}", "{tag}" }
                    }
                    button {
                        class: "btn close-modal",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
                div { class: "rarity-sidebar",
                    button {
                        class: "{theme::rarity_filter_class(rarity().is_none())}",
                        onclick: move |_| rarity.set(None),
                        "All"
                    }
                    for tier in Rarity::FILTERABLE {
                        button {
                            key: "{tier.label()}",
                            class: "{theme::rarity_filter_class(rarity() == Some(tier))}",
                            style: "color: {theme::rarity_color(tier)}",
                            onclick: move |_| rarity.set(Some(tier)),
                            "{tier.label()}"
                        }
                    }
                }
                div { class: "item-list",
                    if entries.is_empty() {
                        p { class: "modal-empty", "{empty_message}" }
                    }
                    for (item, value_label) in entries {
                        div {
                            key: "{item.name}",
                            class: "modal-item",
                            onclick: {
                                let item = item.clone();
                                move |_| on_pick.call(item.clone())
                            },
                            div {
                                class: "modal-item-name",
                                style: "color: {theme::rarity_color(item.rarity)}",
                                "{item.name}"
                            }
                            div { class: "modal-item-value", "{value_label}" }
                        }
                    }
                }
            }
        }
    }
}
