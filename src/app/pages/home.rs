//! Public landing page.

use dioxus::prelude::*;

use crate::app::components::{AppLink, Layout};
use crate::app::Session;
use crate::model::Role;
use crate::routing::{default_path, LOGIN_PATH};

#[component]
pub fn HomePage(session: Session) -> Element {
    let identity = session.identity();

    rsx! {
        Layout {
            session,
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            hgroup {
                h1 { "Research Program Portal" }
                p { "Courses, tasks, discussion and notifications for the research program." }
            }

            section { class: "role-grid",
                for role in Role::ALL {
                    article { key: "{role}", class: "card role-{role}",
                        h3 { "{role.label()}" }
                        p { class: "text-muted", "{role_blurb(role)}" }
                    }
                }
            }

            if let Some(identity) = identity {
                AppLink {
                    session,
                    to: default_path(identity.role),
                    class: "btn btn-primary",
                    "Go to your dashboard"
                }
            } else {
                AppLink {
                    session,
                    to: LOGIN_PATH.to_string(),
                    class: "btn btn-primary",
                    "Sign in"
                }
            }
        }
    }
}

fn role_blurb(role: Role) -> &'static str {
    match role {
        Role::Professor => "Run courses, review submissions and follow student progress.",
        Role::Student => "Track coursework, deadlines and discussions.",
        Role::Secretary => "Keep enrolment and the task board in order.",
        Role::Leader => "Oversee the whole program at a glance.",
    }
}
