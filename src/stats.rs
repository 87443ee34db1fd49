//! Aggregates rendered by the dashboard widgets.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{Course, ForumThread, Notification, NotificationCategory, Task, TaskStatus};

/// Integer percentage for progress bars. Zero total reads as 0%, overshoot as 100%.
pub fn percent(done: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (u64::from(done) * 100) / u64::from(total);
    pct.min(100) as u8
}

/// Task counts per status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskBreakdown {
    pub todo: usize,
    pub in_progress: usize,
    pub review: usize,
    pub done: usize,
}

impl TaskBreakdown {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut acc, task| {
            match task.status {
                TaskStatus::Todo => acc.todo += 1,
                TaskStatus::InProgress => acc.in_progress += 1,
                TaskStatus::Review => acc.review += 1,
                TaskStatus::Done => acc.done += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.review + self.done
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Review => self.review,
            TaskStatus::Done => self.done,
        }
    }

    pub fn completion_percent(&self) -> u8 {
        percent(self.done as u32, self.total() as u32)
    }
}

/// Unfinished tasks due before `today`, earliest first
pub fn overdue(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    let mut late: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Done && t.due < today)
        .collect();
    late.sort_by_key(|t| t.due);
    late
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// `None` keeps everything
pub fn filter_by_category(
    notifications: &[Notification],
    category: Option<NotificationCategory>,
) -> Vec<&Notification> {
    notifications
        .iter()
        .filter(|n| category.map_or(true, |c| n.category == c))
        .collect()
}

/// Courses per category, largest first, ties by name. Blank categories
/// count as "Uncategorized".
pub fn category_breakdown(courses: &[Course]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for course in courses {
        let category = course.category.trim();
        let key = if category.is_empty() {
            "Uncategorized"
        } else {
            category
        };
        *counts.entry(key).or_default() += 1;
    }
    let mut breakdown: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    breakdown
}

/// Average progress across courses that have milestones
pub fn average_progress(courses: &[Course]) -> u8 {
    let tracked: Vec<u8> = courses
        .iter()
        .filter(|c| c.progress_total > 0)
        .map(|c| percent(c.progress_done, c.progress_total))
        .collect();
    if tracked.is_empty() {
        return 0;
    }
    let sum: u32 = tracked.iter().map(|&p| u32::from(p)).sum();
    (sum / tracked.len() as u32) as u8
}

/// Case-insensitive match on title or tags. A blank query matches everything.
pub fn search_threads<'a>(threads: &'a [ForumThread], query: &str) -> Vec<&'a ForumThread> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return threads.iter().collect();
    }
    threads
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}
