//! Dismissable error alert component.

use dioxus::prelude::*;

/// Inline alert for a failed operation. Without `on_dismiss` it cannot be closed.
#[component]
pub fn ErrorAlert(
    /// The error message to display
    message: String,
    /// Called when the dismiss button is clicked
    on_dismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert",
            span { "{message}" }
            if let Some(on_dismiss) = on_dismiss {
                button {
                    class: "btn btn-ghost btn-sm",
                    "aria-label": "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}
