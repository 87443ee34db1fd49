//! Task board: status breakdown and overdue list.

use chrono::Local;
use dioxus::prelude::*;

use super::{fetch_failed, loading};
use crate::app::components::{Layout, ProgressBar, StatCard};
use crate::app::Session;
use crate::model::{Role, TaskStatus};
use crate::stats::{overdue, TaskBreakdown};

#[component]
pub fn TasksPage(session: Session, role: Role) -> Element {
    let tasks = use_resource(move || {
        let data = session.data_source();
        async move { data.tasks(role).await }
    });

    let content = match &*tasks.read() {
        None => loading("tasks"),
        Some(Err(e)) => fetch_failed("Tasks", e),
        Some(Ok(list)) => {
            let breakdown = TaskBreakdown::from_tasks(list);
            let late = overdue(list, Local::now().date_naive());
            rsx! {
                section { class: "stat-grid",
                    for status in TaskStatus::ALL {
                        StatCard {
                            key: "{status.label()}",
                            label: status.label().to_string(),
                            value: breakdown.count(status).to_string(),
                        }
                    }
                }
                ProgressBar {
                    done: breakdown.done as u32,
                    total: breakdown.total() as u32,
                    label: "Completed".to_string(),
                }

                section {
                    h2 { "Overdue" }
                    if late.is_empty() {
                        p { class: "text-muted", "Nothing overdue." }
                    } else {
                        ul { class: "plain-list overdue",
                            for task in late {
                                li { key: "{task.id}",
                                    strong { "{task.title}" }
                                    " due {task.due}"
                                    if let Some(who) = &task.assignee {
                                        small { class: "text-muted", " · {who}" }
                                    }
                                }
                            }
                        }
                    }
                }

                section {
                    h2 { "All tasks" }
                    table {
                        thead {
                            tr {
                                th { "Task" }
                                th { "Status" }
                                th { "Due" }
                                th { "Assignee" }
                            }
                        }
                        tbody {
                            for task in list.iter() {
                                tr { key: "{task.id}",
                                    td { "{task.title}" }
                                    td { "{task.status.label()}" }
                                    td { "{task.due}" }
                                    td { {task.assignee.clone().unwrap_or_default()} }
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
            title: "Tasks".to_string(),
            nav_active: "tasks".to_string(),

            h1 { "Tasks" }
            {content}
        }
    }
}
