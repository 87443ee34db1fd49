//! Course list with progress bars and a category breakdown.

use dioxus::prelude::*;

use super::{fetch_failed, loading};
use crate::app::components::{AppLink, Layout, ProgressBar};
use crate::app::Session;
use crate::model::Role;
use crate::routing::AppPath;
use crate::stats::category_breakdown;

#[component]
pub fn CoursesPage(session: Session, role: Role) -> Element {
    let courses = use_resource(move || {
        let data = session.data_source();
        async move { data.courses(role).await }
    });

    let content = match &*courses.read() {
        None => loading("courses"),
        Some(Err(e)) => fetch_failed("Courses", e),
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "text-muted", "No courses yet." }
        },
        Some(Ok(list)) => {
            let breakdown = category_breakdown(list);
            rsx! {
                section { class: "course-list",
                    for course in list.iter() {
                        article { key: "{course.id}", class: "card",
                            header {
                                small { class: "text-muted", "{course.code}" }
                                if let Some(href) = (AppPath::Course { role: Some(role), id: course.id.clone() }).href() {
                                    h3 { AppLink { session, to: href, "{course.title}" } }
                                }
                            }
                            p { "{course.instructor} · {course.enrolled} enrolled" }
                            ProgressBar { done: course.progress_done, total: course.progress_total }
                        }
                    }
                }
                aside { class: "card",
                    h3 { "By category" }
                    table {
                        tbody {
                            for (category, count) in breakdown {
                                tr { key: "{category}",
                                    td { "{category}" }
                                    td { "{count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            session,
            title: "Courses".to_string(),
            nav_active: "courses".to_string(),

            h1 { "Courses" }
            div { class: "two-column", {content} }
        }
    }
}
