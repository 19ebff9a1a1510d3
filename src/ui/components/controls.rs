use dioxus::prelude::*;

use crate::domain::{DisplayMode, Modifier};
use crate::ui::theme;

/// H/G buttons. Clicking the active one clears it.
#[component]
pub fn ModifierToggle(active: Modifier, on_select: EventHandler<Modifier>) -> Element {
    rsx! {
        div { class: "shg-buttons",
            for modifier in [Modifier::Hammer, Modifier::Gem] {
                div {
                    key: "{modifier:?}",
                    class: "{theme::modifier_button_class(modifier, active == modifier)}",
                    title: modifier.label(),
                    onclick: move |_| on_select.call(modifier),
                    {modifier.tag().unwrap_or_default()}
                }
            }
        }
    }
}

#[component]
pub fn ModeSwitch(mode: DisplayMode, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        div { class: "fv-hv-switch",
            div {
                class: "fv-hv-toggle",
                title: "Toggle FV/HV",
                onclick: move |_| on_toggle.call(()),
                for option in [DisplayMode::Fv, DisplayMode::Hv] {
                    div {
                        key: "{option}",
                        class: "{theme::mode_option_class(option, mode)}",
                        "{option}"
                    }
                }
            }
        }
    }
}
