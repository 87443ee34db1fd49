//! One forum thread and its posts.

use dioxus::prelude::*;

use super::{fetch_failed, loading, timestamp};
use crate::app::components::{AppLink, Layout};
use crate::app::Session;
use crate::routing::AppPath;

#[component]
pub fn ThreadPage(session: Session, id: String) -> Element {
    let thread = use_resource({
        let id = id.clone();
        move || {
            let data = session.data_source();
            let id = id.clone();
            async move { data.thread(&id).await }
        }
    });
    let posts = use_resource(move || {
        let data = session.data_source();
        let id = id.clone();
        async move { data.thread_posts(&id).await }
    });

    let title = match &*thread.read() {
        Some(Ok(t)) => t.title.clone(),
        _ => "Thread".to_string(),
    };

    let heading = match &*thread.read() {
        None => loading("thread"),
        Some(Err(e)) => fetch_failed("Thread", e),
        Some(Ok(t)) => rsx! {
            hgroup {
                h1 { "{t.title}" }
                p { "Started by {t.author} · {t.replies} replies" }
            }
        },
    };

    let body = match &*posts.read() {
        None => loading("posts"),
        Some(Err(e)) => fetch_failed("Posts", e),
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "text-muted", "No posts yet." }
        },
        Some(Ok(list)) => rsx! {
            for post in list.iter() {
                article { key: "{post.id}", class: "card post",
                    header {
                        strong { "{post.author}" }
                        small { class: "text-muted", " · {timestamp(&post.created_at)}" }
                    }
                    p { "{post.body}" }
                }
            }
        },
    };

    rsx! {
        Layout {
            session,
            title,
            nav_active: "forum".to_string(),

            if let Some(href) = AppPath::Forum.href() {
                AppLink { session, to: href, "← Forum" }
            }
            {heading}
            section { {body} }
        }
    }
}
