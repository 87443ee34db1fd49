//! Research Portal
//!
//! Browser front end for a university research program: role dashboards for
//! professors, students, secretaries and program leaders, course and task
//! widgets, a discussion forum and a notification center.
//!
//! The framework-free core lives in the top-level modules:
//! - [`prefs`] – fail-silent preference store (theme mode, last role)
//! - [`theme`] – role/mode to visual token resolution
//! - [`auth`] – authentication and the auth state holder
//! - [`routing`] – role-gated view composition
//! - [`data`] – data-access collaborator for backend records
//! - [`stats`] – aggregates rendered by the widgets
//!
//! [`app`] is the Dioxus component tree built on top of them.

pub mod app;
pub mod auth;
pub mod config;
pub mod data;
pub mod model;
pub mod prefs;
pub mod routing;
pub mod stats;
pub mod theme;
pub mod ticker;
