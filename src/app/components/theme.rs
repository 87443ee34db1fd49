//! Light/dark mode switch.

use dioxus::prelude::*;

use crate::app::Session;

/// Toggles the theme mode; the choice is persisted by the theme controller.
#[component]
pub fn ThemeToggle(session: Session) -> Element {
    let mode = session.theme_mode();
    let next = mode.toggled();

    rsx! {
        button {
            class: "btn btn-ghost btn-sm theme-toggle",
            title: "Switch to {next.label()} mode",
            "aria-pressed": if mode == crate::theme::ThemeMode::Dark { "true" } else { "false" },
            onclick: move |_| session.toggle_theme(),
            "{mode.label()}"
        }
    }
}
