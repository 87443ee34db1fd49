//! In-app link that updates the session path instead of reloading the page.

use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use crate::app::Session;

/// Modified or non-primary clicks (new tab, new window, download) go to the
/// browser untouched.
fn leaves_to_browser(modifiers: Modifiers, button: Option<MouseButton>) -> bool {
    let opener = Modifiers::CONTROL | Modifiers::META | Modifiers::SHIFT | Modifiers::ALT;
    modifiers.intersects(opener) || !matches!(button, None | Some(MouseButton::Primary))
}

#[component]
pub fn AppLink(
    session: Session,
    /// Target path
    to: String,
    #[props(default)] class: String,
    /// Marks the link as the current page
    #[props(default = false)]
    current: bool,
    children: Element,
) -> Element {
    let target = to.clone();
    rsx! {
        a {
            href: "{to}",
            class: "{class}",
            "aria-current": if current { "page" } else { "false" },
            onclick: move |evt: MouseEvent| {
                if leaves_to_browser(evt.modifiers(), evt.trigger_button()) {
                    return;
                }
                evt.prevent_default();
                session.navigate(&target);
            },
            {children}
        }
    }
}
