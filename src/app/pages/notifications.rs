//! Notification center with a category filter.

use std::collections::HashSet;

use dioxus::prelude::*;

use super::{fetch_failed, loading, timestamp};
use crate::app::components::Layout;
use crate::app::Session;
use crate::model::{Notification, NotificationCategory};
use crate::stats::{filter_by_category, unread_count};

fn category_key(category: NotificationCategory) -> &'static str {
    match category {
        NotificationCategory::Course => "course",
        NotificationCategory::Task => "task",
        NotificationCategory::Forum => "forum",
        NotificationCategory::System => "system",
    }
}

fn parse_category(key: &str) -> Option<NotificationCategory> {
    NotificationCategory::ALL
        .into_iter()
        .find(|c| category_key(*c) == key)
}

/// Apply locally dismissed ids on top of the fetched read flags
fn with_local_reads(list: &[Notification], dismissed: &HashSet<String>) -> Vec<Notification> {
    list.iter()
        .cloned()
        .map(|mut n| {
            n.read |= dismissed.contains(&n.id);
            n
        })
        .collect()
}

#[component]
pub fn NotificationsPage(session: Session) -> Element {
    let user_id = session.identity().map(|i| i.id).unwrap_or_default();
    let mut category = use_signal(|| None::<NotificationCategory>);
    // Read state is local to the view; the backend has no write endpoint.
    let mut dismissed = use_signal(HashSet::<String>::new);

    let notifications = use_resource(move || {
        let data = session.data_source();
        let user_id = user_id.clone();
        async move { data.notifications(&user_id).await }
    });

    let content = match &*notifications.read() {
        None => loading("notifications"),
        Some(Err(e)) => fetch_failed("Notifications", e),
        Some(Ok(list)) => {
            let list = with_local_reads(list, &dismissed.read());
            let unread = unread_count(&list);
            let all_ids: Vec<String> = list.iter().map(|n| n.id.clone()).collect();
            let shown = filter_by_category(&list, category());
            rsx! {
                div { class: "toolbar",
                    span { class: "badge", "{unread} unread" }
                    select {
                        "aria-label": "Category",
                        value: category().map(category_key).unwrap_or_default(),
                        onchange: move |e| category.set(parse_category(&e.value())),
                        option { value: "", "All categories" }
                        for c in NotificationCategory::ALL {
                            option { key: "{category_key(c)}", value: category_key(c), "{c.label()}" }
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        disabled: unread == 0,
                        onclick: move |_| dismissed.write().extend(all_ids.iter().cloned()),
                        "Mark all read"
                    }
                }
                if shown.is_empty() {
                    p { class: "text-muted", "Nothing here." }
                }
                ul { class: "plain-list",
                    for n in shown {
                        li {
                            key: "{n.id}",
                            class: if n.read { "notification" } else { "notification unread" },
                            span { class: "badge", "{n.category.label()}" }
                            strong { " {n.title}" }
                            small { class: "text-muted", " · {timestamp(&n.created_at)}" }
                            if !n.body.is_empty() {
                                p { "{n.body}" }
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
            title: "Notifications".to_string(),
            nav_active: "notifications".to_string(),

            h1 { "Notifications" }
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(id: &str, read: bool) -> Notification {
        Notification {
            id: id.into(),
            title: id.into(),
            body: String::new(),
            category: NotificationCategory::Task,
            read,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn category_keys_round_trip() {
        for c in NotificationCategory::ALL {
            assert_eq!(parse_category(category_key(c)), Some(c));
        }
        assert_eq!(parse_category(""), None);
    }

    #[test]
    fn dismissed_ids_read_as_read() {
        let list = vec![note("a", false), note("b", false), note("c", true)];
        let dismissed: HashSet<String> = ["a".to_string()].into_iter().collect();
        let merged = with_local_reads(&list, &dismissed);
        assert_eq!(unread_count(&merged), 1);
        assert!(merged[0].read);
        assert!(!merged[1].read);
    }
}
