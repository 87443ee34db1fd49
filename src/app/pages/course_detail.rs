//! Single course with its tasks.

use dioxus::prelude::*;

use super::{fetch_failed, loading};
use crate::app::components::{AppLink, Layout, ProgressBar};
use crate::app::Session;
use crate::model::Role;
use crate::routing::AppPath;

#[component]
pub fn CourseDetailPage(session: Session, role: Role, id: String) -> Element {
    let course = use_resource({
        let id = id.clone();
        move || {
            let data = session.data_source();
            let id = id.clone();
            async move { data.course(&id).await }
        }
    });
    let tasks = use_resource(move || {
        let data = session.data_source();
        async move { data.tasks(role).await }
    });

    let title = match &*course.read() {
        Some(Ok(c)) => c.title.clone(),
        _ => "Course".to_string(),
    };

    let summary = match &*course.read() {
        None => loading("course"),
        Some(Err(e)) => fetch_failed("Course", e),
        Some(Ok(c)) => rsx! {
            hgroup {
                h1 { "{c.code} {c.title}" }
                p { "{c.instructor} · {c.category}" }
            }
            p { "{c.enrolled} enrolled" }
            ProgressBar { done: c.progress_done, total: c.progress_total, label: "Milestones".to_string() }
        },
    };

    let task_list = match &*tasks.read() {
        None => loading("tasks"),
        Some(Err(e)) => fetch_failed("Tasks", e),
        Some(Ok(all)) => {
            let mine: Vec<_> = all.iter().filter(|t| t.course_id == id).collect();
            rsx! {
                h2 { "Tasks" }
                if mine.is_empty() {
                    p { class: "text-muted", "No tasks for this course." }
                }
                ul { class: "plain-list",
                    for task in mine {
                        li { key: "{task.id}",
                            span { class: "badge", "{task.status.label()}" }
                            " {task.title} "
                            small { class: "text-muted", "due {task.due}" }
                        }
                    }
                }
            }
        }
    };

    let back = (AppPath::Courses { role: Some(role) }).href();

    rsx! {
        Layout {
            session,
            title,
            nav_active: "courses".to_string(),

            if let Some(href) = back {
                AppLink { session, to: href, "← All courses" }
            }
            article { class: "card", {summary} }
            section { {task_list} }
        }
    }
}
