//! Role dashboard: headline cards, live clock and periodic refresh.

use dioxus::prelude::*;

use super::{fetch_failed, loading};
use crate::app::components::{AppLink, Clock, Layout, ProgressBar, StatCard};
use crate::app::hooks::use_ticker;
use crate::app::Session;
use crate::model::{DashboardSummary, Role};
use crate::routing::AppPath;
use crate::stats::average_progress;

/// One headline card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub label: &'static str,
    pub value: u32,
    pub hint: Option<&'static str>,
}

fn card(label: &'static str, value: u32, hint: Option<&'static str>) -> Card {
    Card { label, value, hint }
}

/// Which numbers each role sees first
pub fn dashboard_cards(role: Role, summary: &DashboardSummary) -> Vec<Card> {
    match role {
        Role::Professor => vec![
            card("Courses taught", summary.active_courses, None),
            card("Awaiting review", summary.pending_reviews, Some("submissions")),
            card("Students", summary.students, None),
            card("Unread", summary.unread_notifications, Some("notifications")),
        ],
        Role::Student => vec![
            card("Enrolled courses", summary.active_courses, None),
            card("Open tasks", summary.open_tasks, None),
            card("Unread", summary.unread_notifications, Some("notifications")),
        ],
        Role::Secretary => vec![
            card("Active courses", summary.active_courses, None),
            card("Registered students", summary.students, None),
            card("Open tasks", summary.open_tasks, Some("across the program")),
        ],
        Role::Leader => vec![
            card("Active courses", summary.active_courses, None),
            card("Students", summary.students, None),
            card("Open tasks", summary.open_tasks, None),
            card("Awaiting review", summary.pending_reviews, None),
        ],
    }
}

#[component]
pub fn DashboardPage(session: Session, role: Role) -> Element {
    let config = session.config.read().clone();

    let mut summary = use_resource(move || {
        let data = session.data_source();
        async move { data.dashboard(role).await }
    });
    let mut courses = use_resource(move || {
        let data = session.data_source();
        async move { data.courses(role).await }
    });

    use_ticker(config.refresh_interval(), move || {
        tracing::debug!("Refreshing {} dashboard", role);
        summary.restart();
        courses.restart();
    });

    let cards = match &*summary.read() {
        None => loading("dashboard"),
        Some(Err(e)) => fetch_failed("Dashboard", e),
        Some(Ok(summary)) => {
            let cards = dashboard_cards(role, summary);
            rsx! {
                section { class: "stat-grid",
                    for c in cards {
                        StatCard {
                            key: "{c.label}",
                            label: c.label.to_string(),
                            value: c.value.to_string(),
                            hint: c.hint.map(str::to_string),
                        }
                    }
                }
            }
        }
    };

    let progress = match &*courses.read() {
        None => loading("courses"),
        Some(Err(e)) => fetch_failed("Courses", e),
        Some(Ok(list)) => {
            let avg = average_progress(list);
            rsx! {
                article { class: "card",
                    h3 { "Course progress" }
                    ProgressBar { done: u32::from(avg), total: 100, label: "Average across courses".to_string() }
                    ul { class: "plain-list",
                        for course in list.iter().take(5) {
                            li { key: "{course.id}",
                                ProgressBar {
                                    done: course.progress_done,
                                    total: course.progress_total,
                                    label: format!("{} {}", course.code, course.title),
                                }
                            }
                        }
                    }
                    if let Some(href) = (AppPath::Courses { role: Some(role) }).href() {
                        AppLink { session, to: href, "All courses" }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            session,
            title: format!("{} dashboard", role.label()),
            nav_active: "dashboard".to_string(),

            div { class: "page-heading",
                h1 { "{role.label()} dashboard" }
                Clock { tick: config.clock_tick() }
            }

            {cards}
            {progress}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> DashboardSummary {
        DashboardSummary {
            role: Role::Professor,
            active_courses: 3,
            open_tasks: 12,
            pending_reviews: 4,
            unread_notifications: 2,
            students: 57,
            course_ids: vec!["c1".into(), "c2".into(), "c3".into()],
        }
    }

    #[test]
    fn professor_sees_reviews_and_students() {
        let cards = dashboard_cards(Role::Professor, &summary());
        let labels: Vec<_> = cards.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            ["Courses taught", "Awaiting review", "Students", "Unread"]
        );
        assert_eq!(cards[1].value, 4);
    }

    #[test]
    fn student_cards_are_personal() {
        let cards = dashboard_cards(Role::Student, &summary());
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.label != "Students"));
        assert_eq!(cards[1].value, 12);
    }

    #[test]
    fn every_role_has_cards() {
        for role in Role::ALL {
            assert!(!dashboard_cards(role, &summary()).is_empty());
        }
    }
}
