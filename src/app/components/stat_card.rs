//! Headline number card for dashboards.

use dioxus::prelude::*;

#[component]
pub fn StatCard(label: String, value: String, #[props(default)] hint: Option<String>) -> Element {
    rsx! {
        article { class: "card stat-card",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
            if let Some(hint) = hint {
                small { class: "text-muted", "{hint}" }
            }
        }
    }
}
