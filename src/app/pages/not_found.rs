use dioxus::prelude::*;

use crate::app::components::{AppLink, Layout};
use crate::app::Session;
use crate::routing::HOME_PATH;

#[component]
pub fn NotFoundPage(session: Session, path: String) -> Element {
    rsx! {
        Layout {
            session,
            title: "Not found".to_string(),
            nav_active: String::new(),

            h1 { "Page not found" }
            p { class: "text-muted", "Nothing lives at " code { "{path}" } "." }
            AppLink { session, to: HOME_PATH.to_string(), "Back to the start page" }
        }
    }
}
