//! Layout component wrapping every signed-in page.

use dioxus::prelude::*;

use super::nav::Nav;
use super::theme::ThemeToggle;
use crate::app::Session;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    pub session: Session,
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component: head tags, nav bar, user badge and footer.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("PORTAL_VERSION");
    let sha = env!("PORTAL_GIT_SHA");
    let full_title = format!("{} - Research Portal", props.title);
    let session = props.session;
    let identity = session.identity();

    rsx! {
        document::Title { "{full_title}" }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/portal.css")
        }

        header { class: "portal-header",
            Nav { session, active: props.nav_active.clone() }
            div { class: "portal-user",
                ThemeToggle { session }
                if let Some(identity) = identity {
                    span {
                        class: "avatar",
                        title: "{identity.display_name}",
                        "{identity.initials()}"
                    }
                    span { class: "portal-user-name",
                        "{identity.display_name}"
                        small { class: "text-muted", " · {identity.role.label()}" }
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| session.logout(),
                        "Log out"
                    }
                }
            }
        }
        main { class: "portal-main",
            {props.children}
        }
        footer { class: "portal-footer",
            small { class: "text-muted", "Research Portal v{version} ({sha})" }
        }
    }
}
