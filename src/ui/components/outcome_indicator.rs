use dioxus::prelude::*;

use crate::domain::{outcome_label, DisplayMode, Outcome};
use crate::ui::theme;

/// Win/fair/loss badge above a bar showing your share of the trade.
#[component]
pub fn OutcomeIndicator(outcome: Outcome, mode: DisplayMode) -> Element {
    let label = outcome_label(&outcome, mode);
    let fill_pct = format!("{:.1}", outcome.fill_ratio * 100.0);

    rsx! {
        div { class: "wfl",
            div {
                class: "{theme::verdict_class(outcome.verdict)}",
                "{label.headline}"
                if let Some(caption) = label.caption {
                    span { class: "wfl-mode", "{caption}" }
                }
            }
            div { class: "wfl-bar",
                div {
                    class: "{theme::bar_fill_class(outcome.verdict)}",
                    style: "width: {fill_pct}%",
                }
            }
        }
    }
}
