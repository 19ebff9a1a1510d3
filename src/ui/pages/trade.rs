use dioxus::prelude::*;
use tracing::warn;

use crate::{
    domain::{format_value, Item, Side, TradeState},
    ui::components::{
        controls::{ModeSwitch, ModifierToggle},
        item_picker::ItemPicker,
        offer_grid::OfferGrid,
        outcome_indicator::OutcomeIndicator,
    },
};

#[component]
pub fn TradePage() -> Element {
    let mut state = use_context::<Signal<TradeState>>();
    // Slot whose click opened the picker.
    let mut picker_target = use_signal(|| None::<(Side, usize)>);

    let (outcome, (your_total, their_total), mode, modifier) =
        state.with(|st| (st.summary().outcome, st.totals(), st.mode(), st.modifier()));
    let your_slots = state.with(|st| st.grid(Side::YourOffer).slots().to_vec());
    let their_slots = state.with(|st| st.grid(Side::TheirOffer).slots().to_vec());

    let on_pick = move |item: Item| {
        let Some((side, index)) = picker_target() else {
            return;
        };
        state.with_mut(|st| {
            if st.grid(side).is_full() {
                warn!(side = ?side, item = %item.name, "pick ignored; side is full");
                return;
            }
            st.select_item_at(side, index, &item);
        });
        picker_target.set(None);
    };

    rsx! {
        div { class: "trade-layout",
            div { class: "modifier-column",
                ModifierToggle {
                    active: modifier,
                    on_select: move |choice| state.with_mut(|st| st.set_modifier(choice)),
                }
            }
            OfferGrid {
                side: Side::YourOffer,
                total_display: format_value(your_total, mode),
                slots: your_slots,
                on_open: move |index| picker_target.set(Some((Side::YourOffer, index))),
                on_remove: move |index| {
                    state.with_mut(|st| {
                        st.remove_item(Side::YourOffer, index);
                    });
                },
            }
            div { class: "wfl",
                OutcomeIndicator { outcome, mode }
                ModeSwitch {
                    mode,
                    on_toggle: move |_| state.with_mut(|st| st.toggle_mode()),
                }
                button {
                    id: "reset-trade-btn",
                    class: "btn danger",
                    onclick: move |_| state.with_mut(|st| st.reset()),
                    "Reset"
                }
            }
            OfferGrid {
                side: Side::TheirOffer,
                total_display: format_value(their_total, mode),
                slots: their_slots,
                on_open: move |index| picker_target.set(Some((Side::TheirOffer, index))),
                on_remove: move |index| {
                    state.with_mut(|st| {
                        st.remove_item(Side::TheirOffer, index);
                    });
                },
            }
        }
        if picker_target().is_some() {
            ItemPicker {
                on_pick,
                on_close: move |_| picker_target.set(None),
            }
        }
    }
}
