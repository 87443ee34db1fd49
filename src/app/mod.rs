//! Dioxus application root.
//!
//! The root builds a [`Session`] once and passes it down to every page as a
//! prop. Routing is the view composer's job: each render asks
//! [`compose_view`] what the current auth state may see at the current path
//! and either renders that page or replaces the path with the redirect target.

use dioxus::prelude::*;

pub mod components;
pub mod history;
pub mod hooks;
pub mod pages;
pub mod session;

pub use session::{use_session, Session};

use crate::config::Config;
use crate::routing::{compose_view, AppPath, ViewDecision};
use pages::{
    CourseDetailPage, CoursesPage, DashboardPage, ForumPage, HomePage, LoginPage, NotFoundPage,
    NotificationsPage, TasksPage, ThreadPage,
};

/// Configuration for this build: embedded JSON in the browser, layered
/// file/env config on the server.
fn initial_config() -> Config {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(json) = option_env!("PORTAL_CONFIG_JSON") {
            match Config::from_json(json) {
                Ok(config) => return config,
                Err(e) => tracing::error!("Embedded configuration rejected: {}", e),
            }
        }
    }
    #[cfg(all(feature = "server", not(target_arch = "wasm32")))]
    {
        match crate::config::load_config() {
            Ok(config) => return config,
            Err(e) => tracing::error!("Failed to load configuration, using defaults: {:#}", e),
        }
    }
    Config::default()
}

/// Launch target
#[component]
pub fn Root() -> Element {
    let config = use_hook(initial_config);
    rsx! {
        App { config }
    }
}

#[component]
pub fn App(config: Config) -> Element {
    let session = use_session(config);

    // Keep the path in step with back/forward navigation
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let guard: Rc<RefCell<Option<history::PopStateGuard>>> =
            use_hook(|| Rc::new(RefCell::new(None)));
        use_effect(move || {
            if guard.borrow().is_some() {
                return;
            }
            let mut path = session.path;
            *guard.borrow_mut() = history::listen(move |p| path.set(p));
        });
    }

    let requested = session.path.read().clone();
    let decision = compose_view(session.auth.read().state(), &requested);

    let redirect = match &decision {
        ViewDecision::Redirect(to) => Some(to.clone()),
        ViewDecision::Render(_) => None,
    };
    use_effect(use_reactive((&redirect,), move |(redirect,)| {
        if let Some(to) = redirect {
            session.redirect(&to);
        }
    }));

    let resolved = session.resolved_theme();
    let style = resolved.css_variables();
    let class = format!(
        "portal theme-{} role-{}",
        session.theme_mode().as_str(),
        session.theme.read().role().as_str()
    );

    let view = match decision {
        ViewDecision::Redirect(_) => rsx! {
            article { aria_busy: "true", "Redirecting..." }
        },
        ViewDecision::Render(path) => render_path(session, path),
    };

    rsx! {
        div { class: "{class}", style: "{style}", {view} }
    }
}

fn render_path(session: Session, path: AppPath) -> Element {
    // Keyed on the href so switching between two courses or threads remounts
    // the page and its resources.
    let key = path.href().unwrap_or_default();
    match path {
        AppPath::Home => rsx! { HomePage { key: "{key}", session } },
        AppPath::Login => rsx! { LoginPage { key: "{key}", session } },
        AppPath::Dashboard { role: Some(role) } => rsx! {
            DashboardPage { key: "{key}", session, role }
        },
        AppPath::Courses { role: Some(role) } => rsx! {
            CoursesPage { key: "{key}", session, role }
        },
        AppPath::Course { role: Some(role), id } => rsx! {
            CourseDetailPage { key: "{key}", session, role, id }
        },
        AppPath::Tasks { role: Some(role) } => rsx! {
            TasksPage { key: "{key}", session, role }
        },
        AppPath::Forum => rsx! { ForumPage { key: "{key}", session } },
        AppPath::Thread { id } => rsx! { ThreadPage { key: "{key}", session, id } },
        AppPath::Notifications => rsx! { NotificationsPage { key: "{key}", session } },
        AppPath::NotFound { path } => rsx! { NotFoundPage { key: "{key}", session, path } },
        // compose_view only renders scoped paths whose role matches the caller
        AppPath::Dashboard { role: None }
        | AppPath::Courses { role: None }
        | AppPath::Course { role: None, .. }
        | AppPath::Tasks { role: None } => rsx! {
            NotFoundPage { session, path: session.path.read().clone() }
        },
    }
}
