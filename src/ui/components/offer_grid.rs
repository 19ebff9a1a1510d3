use dioxus::prelude::*;

use crate::domain::{FilledSlot, Side};
use crate::ui::theme;

/// One side of the trade: title, formatted total and the 3x3 slot grid.
/// Clicking an empty slot asks for a pick, clicking a filled one removes it.
#[component]
pub fn OfferGrid(
    side: Side,
    total_display: String,
    slots: Vec<Option<FilledSlot>>,
    on_open: EventHandler<usize>,
    on_remove: EventHandler<usize>,
) -> Element {
    rsx! {
        section { class: "offer-panel",
            h2 { class: "offer-title", "{side.title()}" }
            p { class: "offer-total", "{total_display}" }
            div { class: "offer-grid",
                for (index, slot) in slots.into_iter().enumerate() {
                    SlotCell {
                        key: "{index}",
                        index,
                        slot,
                        on_open,
                        on_remove,
                    }
                }
            }
        }
    }
}

#[component]
fn SlotCell(
    index: usize,
    slot: Option<FilledSlot>,
    on_open: EventHandler<usize>,
    on_remove: EventHandler<usize>,
) -> Element {
    let filled = slot.is_some();

    rsx! {
        div {
            class: "{theme::slot_class(filled)}",
            onclick: move |_| {
                if filled {
                    on_remove.call(index);
                } else {
                    on_open.call(index);
                }
            },
            match slot {
                Some(slot) => rsx! {
                    if let Some(tag) = slot.modifier.tag() {
                        span { class: "{theme::modifier_tag_class(slot.modifier)}", "{tag}" }
                    }
                    div { class: "item-slot-name", title: "{slot.item_name}", "{slot.item_name}" }
                },
                None => rsx! {
                    span { class: "item-slot-plus", "+" }
                },
            }
        }
    }
}
