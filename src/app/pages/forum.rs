//! Discussion forum: thread list with search.

use dioxus::prelude::*;

use super::{fetch_failed, loading, short_date};
use crate::app::components::{AppLink, Layout};
use crate::app::Session;
use crate::routing::AppPath;
use crate::stats::search_threads;

#[component]
pub fn ForumPage(session: Session) -> Element {
    let mut query = use_signal(String::new);
    let threads = use_resource(move || {
        let data = session.data_source();
        async move { data.threads().await }
    });

    let content = match &*threads.read() {
        None => loading("threads"),
        Some(Err(e)) => fetch_failed("Threads", e),
        Some(Ok(all)) => {
            let q = query.read().clone();
            let matches = search_threads(all, &q);
            rsx! {
                if matches.is_empty() {
                    p { class: "text-muted", "No threads match \"{q}\"." }
                }
                ul { class: "thread-list",
                    for thread in matches {
                        li { key: "{thread.id}", class: "card",
                            if let Some(href) = (AppPath::Thread { id: thread.id.clone() }).href() {
                                AppLink { session, to: href, strong { "{thread.title}" } }
                            }
                            p { class: "text-muted",
                                "{thread.author} · {thread.replies} replies · "
                                "{short_date(&thread.last_activity)}"
                            }
                            for tag in thread.tags.iter() {
                                span { key: "{tag}", class: "badge", "{tag}" }
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
            title: "Forum".to_string(),
            nav_active: "forum".to_string(),

            h1 { "Forum" }
            input {
                r#type: "search",
                placeholder: "Search titles and tags",
                "aria-label": "Search threads",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
            {content}
        }
    }
}
