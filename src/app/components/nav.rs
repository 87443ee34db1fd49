//! Navigation bar, scoped to the signed-in role.

use dioxus::prelude::*;

use super::link::AppLink;
use crate::app::Session;
use crate::model::Role;
use crate::routing::AppPath;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    pub session: Session,
    /// The currently active page ID (e.g., "dashboard", "forum")
    pub active: String,
}

/// (id, label, target) for each entry a role can see
pub fn nav_items(role: Role) -> Vec<(&'static str, &'static str, AppPath)> {
    vec![
        (
            "dashboard",
            "Dashboard",
            AppPath::Dashboard { role: Some(role) },
        ),
        ("courses", "Courses", AppPath::Courses { role: Some(role) }),
        ("tasks", "Tasks", AppPath::Tasks { role: Some(role) }),
        ("forum", "Forum", AppPath::Forum),
        ("notifications", "Notifications", AppPath::Notifications),
    ]
}

#[component]
pub fn Nav(props: NavProps) -> Element {
    let session = props.session;
    let items = session.role().map(nav_items).unwrap_or_default();

    rsx! {
        nav { class: "portal-nav",
            ul {
                li {
                    strong { "Research Portal" }
                }
            }
            ul {
                for (id, label, target) in items {
                    if let Some(href) = target.href() {
                        li { key: "{id}",
                            AppLink {
                                session,
                                to: href,
                                current: props.active == id,
                                if props.active == id {
                                    strong { "{label}" }
                                } else {
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
