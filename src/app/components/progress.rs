//! Progress bar widget.

use dioxus::prelude::*;

use crate::stats::percent;

#[component]
pub fn ProgressBar(done: u32, total: u32, #[props(default)] label: String) -> Element {
    let pct = percent(done, total);
    rsx! {
        div { class: "progress",
            if !label.is_empty() {
                span { class: "progress-label", "{label}" }
            }
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuenow": "{pct}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                div { class: "progress-fill", style: "width: {pct}%" }
            }
            small { class: "text-muted", "{done}/{total} ({pct}%)" }
        }
    }
}
