//! Role-gated view composition.
//!
//! Paths under `/dashboard/{role}` are scoped to that role. Given the auth
//! state and a requested path, [`compose_view`] either renders the target or
//! names the path to redirect to:
//!
//! - unauthenticated callers asking for anything non-public go to `/login`
//! - authenticated callers asking for another role's scope go to their own
//!   dashboard (logged under the `access` target, never an error page)
//! - public paths render for everyone

use crate::auth::AuthState;
use crate::model::Role;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Landing view for a role
pub fn default_path(role: Role) -> String {
    format!("/dashboard/{}", role.as_str())
}

/// A parsed application path. Role segments that are not a known role parse
/// to `None` and are treated as belonging to someone else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppPath {
    Home,
    Login,
    Dashboard { role: Option<Role> },
    Courses { role: Option<Role> },
    Course { role: Option<Role>, id: String },
    Tasks { role: Option<Role> },
    Forum,
    Thread { id: String },
    Notifications,
    NotFound { path: String },
}

/// Who may see a path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Scoped(Option<Role>),
}

impl AppPath {
    pub fn parse(raw: &str) -> Self {
        let path = raw
            .split(&['?', '#'][..])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => AppPath::Home,
            ["login"] => AppPath::Login,
            ["dashboard", role] => AppPath::Dashboard {
                role: Role::parse(role),
            },
            ["dashboard", role, "courses"] => AppPath::Courses {
                role: Role::parse(role),
            },
            ["dashboard", role, "courses", id] => AppPath::Course {
                role: Role::parse(role),
                id: decode_segment(id),
            },
            ["dashboard", role, "tasks"] => AppPath::Tasks {
                role: Role::parse(role),
            },
            ["forum"] => AppPath::Forum,
            ["forum", id] => AppPath::Thread {
                id: decode_segment(id),
            },
            ["notifications"] => AppPath::Notifications,
            _ => AppPath::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn access(&self) -> Access {
        match self {
            AppPath::Home | AppPath::Login | AppPath::NotFound { .. } => Access::Public,
            AppPath::Forum | AppPath::Thread { .. } | AppPath::Notifications => {
                Access::Authenticated
            }
            AppPath::Dashboard { role }
            | AppPath::Courses { role }
            | AppPath::Course { role, .. }
            | AppPath::Tasks { role } => Access::Scoped(*role),
        }
    }

    /// Canonical href. Scoped paths with an unknown role have none.
    pub fn href(&self) -> Option<String> {
        let scoped = |role: &Option<Role>, rest: &str| {
            role.map(|r| format!("{}{}", default_path(r), rest))
        };
        match self {
            AppPath::Home => Some(HOME_PATH.to_string()),
            AppPath::Login => Some(LOGIN_PATH.to_string()),
            AppPath::Dashboard { role } => scoped(role, ""),
            AppPath::Courses { role } => scoped(role, "/courses"),
            AppPath::Course { role, id } => {
                scoped(role, &format!("/courses/{}", urlencoding::encode(id)))
            }
            AppPath::Tasks { role } => scoped(role, "/tasks"),
            AppPath::Forum => Some("/forum".to_string()),
            AppPath::Thread { id } => Some(format!("/forum/{}", urlencoding::encode(id))),
            AppPath::Notifications => Some("/notifications".to_string()),
            AppPath::NotFound { path } => Some(path.clone()),
        }
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewDecision {
    Render(AppPath),
    Redirect(String),
}

/// Decide what the given auth state may see at `requested`
pub fn compose_view(state: &AuthState, requested: &str) -> ViewDecision {
    let path = AppPath::parse(requested);

    match (path.access(), state.identity()) {
        (Access::Public, _) => ViewDecision::Render(path),
        (_, None) => {
            tracing::debug!("Unauthenticated request for {}, redirecting to login", requested);
            ViewDecision::Redirect(LOGIN_PATH.to_string())
        }
        (Access::Authenticated, Some(_)) => ViewDecision::Render(path),
        (Access::Scoped(Some(scope)), Some(identity)) if scope == identity.role => {
            ViewDecision::Render(path)
        }
        (Access::Scoped(_), Some(identity)) => {
            tracing::warn!(
                target: "access",
                "Cross-role request by {} ({}) for {}, redirecting to own dashboard",
                identity.id,
                identity.role,
                requested
            );
            ViewDecision::Redirect(default_path(identity.role))
        }
    }
}
