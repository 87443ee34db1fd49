//! Live clock shown in dashboard headers.

use std::time::Duration;

use chrono::Local;
use dioxus::prelude::*;

use crate::app::hooks::use_ticker;

#[component]
pub fn Clock(tick: Duration) -> Element {
    let mut now = use_signal(Local::now);
    use_ticker(tick, move || now.set(Local::now()));

    let label = now.read().format("%a %d %b %Y, %H:%M:%S").to_string();
    rsx! {
        time { class: "clock", "{label}" }
    }
}
