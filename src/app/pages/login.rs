//! Sign-in form.

use dioxus::prelude::*;

use crate::app::components::{AppLink, ErrorAlert, Layout};
use crate::app::Session;
use crate::auth::LoginRequest;
use crate::model::Role;
use crate::routing::default_path;

#[component]
pub fn LoginPage(session: Session) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| None::<Role>);
    let mut error = use_signal(|| None::<String>);

    // Client-side only: preselect whatever role signed in last on this browser
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            if let Some(last) = session.auth.peek().restore_role() {
                role.set(Some(last));
            }
        });
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut request = LoginRequest::new(username(), password());
        if let Some(r) = role() {
            request = request.with_role(r);
        }
        match session.login(&request) {
            Ok(_) => {
                password.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    if let Some(identity) = session.identity() {
        return rsx! {
            Layout {
                session,
                title: "Sign in".to_string(),
                nav_active: "login".to_string(),
                article {
                    p { "Signed in as {identity.display_name} ({identity.role.label()})." }
                    AppLink {
                        session,
                        to: default_path(identity.role),
                        class: "btn btn-primary",
                        "Continue to dashboard"
                    }
                }
            }
        };
    }

    let selected = role().map(|r| r.as_str()).unwrap_or_default();

    rsx! {
        Layout {
            session,
            title: "Sign in".to_string(),
            nav_active: "login".to_string(),

            h1 { "Sign in" }

            if let Some(message) = error() {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            form { class: "card login-form", onsubmit: on_submit,
                label { r#for: "username", "Username" }
                input {
                    id: "username",
                    name: "username",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                label { r#for: "role", "Sign in as" }
                select {
                    id: "role",
                    name: "role",
                    value: "{selected}",
                    onchange: move |e| role.set(Role::parse(&e.value())),
                    option { value: "", "Account role" }
                    for r in Role::ALL {
                        option { key: "{r}", value: r.as_str(), "{r.label()}" }
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", "Sign in" }
            }
        }
    }
}
