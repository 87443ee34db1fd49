//! Domain records shared by the core and the UI.
//!
//! `Role` and `Identity` drive theming and access control. Everything else is
//! supplied by the backend through [`crate::data::DataSource`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Research-program role. Closed set: anything else is rejected at parse time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Professor,
    #[default]
    Student,
    Secretary,
    Leader,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Professor, Role::Student, Role::Secretary, Role::Leader];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Professor => "professor",
            Role::Student => "student",
            Role::Secretary => "secretary",
            Role::Leader => "leader",
        }
    }

    /// Parse a persisted or routed role segment. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "professor" => Some(Role::Professor),
            "student" => Some(Role::Student),
            "secretary" => Some(Role::Secretary),
            "leader" => Some(Role::Leader),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Professor => "Professor",
            Role::Student => "Student",
            Role::Secretary => "Secretary",
            Role::Leader => "Program Leader",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user for the current session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Identity {
    /// Two-letter badge shown when no avatar is configured
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

// =============================================================================
// Course / task records
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    pub instructor: String,
    #[serde(default)]
    pub enrolled: u32,
    /// Completed milestones
    #[serde(default)]
    pub progress_done: u32,
    /// Total milestones
    #[serde(default)]
    pub progress_total: u32,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Review => "In review",
            TaskStatus::Done => "Done",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub due: NaiveDate,
    #[serde(default)]
    pub assignee: Option<String>,
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Course,
    Task,
    Forum,
    #[default]
    System,
}

impl NotificationCategory {
    pub const ALL: [NotificationCategory; 4] = [
        NotificationCategory::Course,
        NotificationCategory::Task,
        NotificationCategory::Forum,
        NotificationCategory::System,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationCategory::Course => "Courses",
            NotificationCategory::Task => "Tasks",
            NotificationCategory::Forum => "Forum",
            NotificationCategory::System => "System",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub category: NotificationCategory,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Forum
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForumThread {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub replies: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub last_activity: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: String,
    pub thread_id: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Headline numbers for a role dashboard, computed by the backend
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub role: Role,
    #[serde(default)]
    pub active_courses: u32,
    #[serde(default)]
    pub open_tasks: u32,
    #[serde(default)]
    pub pending_reviews: u32,
    #[serde(default)]
    pub unread_notifications: u32,
    #[serde(default)]
    pub students: u32,
    #[serde(default)]
    pub course_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_closed() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("Professor"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serde_uses_lowercase() {
        let json = serde_json::to_string(&Role::Secretary).unwrap();
        assert_eq!(json, "\"secretary\"");
        let role: Role = serde_json::from_str("\"leader\"").unwrap();
        assert_eq!(role, Role::Leader);
    }

    #[test]
    fn initials_from_display_name() {
        let identity = Identity {
            id: "u1".into(),
            display_name: "ada lovelace byron".into(),
            email: "ada@uni.edu".into(),
            role: Role::Professor,
            avatar: None,
        };
        assert_eq!(identity.initials(), "AL");
    }

    #[test]
    fn task_status_defaults_when_missing() {
        let task: Task = serde_json::from_str(
            r#"{"id":"t1","course_id":"c1","title":"Draft","due":"2026-03-01"}"#,
        )
        .unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.assignee.is_none());
    }
}
