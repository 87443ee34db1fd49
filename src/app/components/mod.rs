//! Shared UI components for the portal.

pub mod clock;
pub mod error_alert;
pub mod layout;
pub mod link;
pub mod nav;
pub mod progress;
pub mod stat_card;
pub mod theme;

pub use clock::Clock;
pub use error_alert::ErrorAlert;
pub use layout::Layout;
pub use link::AppLink;
pub use nav::Nav;
pub use progress::ProgressBar;
pub use stat_card::StatCard;
pub use theme::ThemeToggle;
