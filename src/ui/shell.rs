use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div {
                    span { class: "app-title", "{APP_NAME}" }
                    span { class: "app-version", "{version_label()}" }
                }
                nav { class: "nav",
                    NavButton {
                        active: matches!(current_route, Route::Trade {}),
                        onclick: move |_| { nav.push(Route::Trade {}); },
                        label: "Trade",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Settings {}),
                        onclick: move |_| { nav.push(Route::Settings {}); },
                        label: "Settings",
                    }
                }
            }
            main { class: "main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_class(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
