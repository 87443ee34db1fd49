//! Page components, one per routed view.

mod course_detail;
mod courses;
mod dashboard;
mod forum;
mod home;
mod login;
mod not_found;
mod notifications;
mod tasks;
mod thread;

pub use course_detail::CourseDetailPage;
pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use forum::ForumPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use notifications::NotificationsPage;
pub use tasks::TasksPage;
pub use thread::ThreadPage;

use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;

use crate::app::components::ErrorAlert;
use crate::data::DataError;

/// Placeholder while a resource is pending
fn loading(what: &str) -> Element {
    rsx! {
        article { aria_busy: "true", "Loading {what}..." }
    }
}

/// Inline alert for a failed fetch
fn fetch_failed(what: &str, error: &DataError) -> Element {
    let message = if error.is_not_found() {
        format!("{} not found", what)
    } else {
        format!("Could not load {}: {}", what.to_lowercase(), error)
    };
    rsx! {
        ErrorAlert { message }
    }
}

fn short_date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d %b %Y").to_string()
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d %b %Y %H:%M").to_string()
}
