//! Research Portal - Dioxus fullstack entry point.

use research_portal::app;

fn main() {
    // Initialize logging
    #[cfg(all(feature = "server", not(target_arch = "wasm32")))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        // The Dioxus launcher may already have installed a subscriber
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "research_portal=debug,access=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init();

        tracing::info!(
            "Starting Research Portal v{} ({})",
            env!("PORTAL_VERSION"),
            env!("PORTAL_GIT_SHA")
        );
    }

    #[cfg(target_arch = "wasm32")]
    {
        dioxus::logger::initialize_default();
    }

    dioxus::launch(app::Root);
}
