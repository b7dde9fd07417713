//! Task domain model.
//!
//! A [`Task`] is a user-owned unit of work with a title, optional
//! description and deadline, and a three-state status. Tasks live in the
//! in-memory [`store::TaskStore`] for the lifetime of the process.

pub mod extract;
pub mod format;
pub mod store;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-owned unit of work.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    /// Short opaque identifier, unique across the store
    pub id: String,

    /// Display title
    pub title: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Optional absolute deadline
    pub deadline: Option<DateTime<Local>>,

    /// Current status
    pub status: TaskStatus,

    /// Creation timestamp, immutable after creation
    pub created_at: DateTime<Local>,

    /// Subtask ids. Reserved for future use; no command populates it yet.
    pub subtasks: Vec<String>,
}

impl Task {
    /// Build a freshly-created task from extracted fields.
    pub fn new(parsed: extract::ParsedTask) -> Self {
        Self {
            id: generate_task_id(),
            title: parsed.title,
            description: parsed.description,
            deadline: parsed.deadline,
            status: TaskStatus::Pending,
            created_at: Local::now(),
            subtasks: Vec::new(),
        }
    }
}

/// Task status enumeration. The lowercase tokens are wire-visible in
/// `update` validation and in the store dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but not started
    Pending,
    /// Task is being worked on
    InProgress,
    /// Task is done
    Completed,
}

impl TaskStatus {
    /// Parse a wire token, case-insensitively. Returns `None` for anything
    /// outside the three known values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Human-readable label: underscores become spaces, words title-cased.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Status icon used in listings.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pending => "⏳",
            Self::InProgress => "🔄",
            Self::Completed => "✅",
        }
    }
}

/// Generate a unique short task id (first 8 hex chars of a v4 UUID).
fn generate_task_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(TaskStatus::parse("pending"), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::parse("In_Progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::parse("COMPLETED"), Some(TaskStatus::Completed));
    }

    #[test]
    fn test_status_parse_rejects_unknown_values() {
        assert_eq!(TaskStatus::parse("done"), None);
        assert_eq!(TaskStatus::parse(""), None);
        assert_eq!(TaskStatus::parse("in progress"), None);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TaskStatus::Pending.label(), "Pending");
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
        assert_eq!(TaskStatus::Completed.label(), "Completed");
    }

    #[test]
    fn test_generated_ids_are_short_and_unique() {
        let a = generate_task_id();
        let b = generate_task_id();
        assert_eq!(a.len(), 8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_new_task_starts_pending_with_empty_subtasks() {
        let task = Task::new(extract::ParsedTask {
            title: "Write report".to_string(),
            description: None,
            deadline: None,
        });
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.subtasks.is_empty());
        assert_eq!(task.title, "Write report");
    }
}
