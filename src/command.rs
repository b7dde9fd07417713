//! Slash-command dispatch.
//!
//! The [`Dispatcher`] tokenizes one raw command line, routes on the first
//! word (case-insensitive), and reads or mutates the shared
//! [`TaskStore`]. Every path returns a [`CommandReply`] whose visibility
//! tells the transport layer whether to answer only the caller or the whole
//! channel.

use std::sync::Arc;

use crate::task::extract;
use crate::task::format;
use crate::task::store::TaskStore;
use crate::task::{Task, TaskStatus};

/// Whether a reply is shown only to the caller or broadcast to the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Public,
}

/// A formatted reply ready for the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReply {
    pub text: String,
    pub visibility: Visibility,
}

impl CommandReply {
    pub fn private(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: Visibility::Private,
        }
    }

    pub fn public(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: Visibility::Public,
        }
    }
}

const HELP_TEXT: &str = "🤖 **Slack Productivity Bot Help**\n\n\
                         **Commands:**\n\
                         • `/task create <description>` - Create a new task\n\
                         • `/task list` - List all your tasks\n\
                         • `/task show <task_id>` - Show task details\n\
                         • `/task update <task_id> <status>` - Update task status (pending/in_progress/completed)\n\
                         • `/task delete <task_id>` - Delete a task\n\n\
                         **Examples:**\n\
                         • `/task create Review project proposal by tomorrow`\n\
                         • `/task create Set up meeting with client next week`\n\
                         • `/task update abc123 completed`";

/// Routes slash-command lines to task operations.
pub struct Dispatcher {
    store: Arc<TaskStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// Interpret one command line on behalf of `user_id`.
    ///
    /// Malformed input never panics; it produces a private usage or
    /// validation reply. An unexpected internal fault surfaces as `Err` for
    /// the transport boundary to convert into a private error message.
    pub async fn dispatch(&self, user_id: &str, raw: &str) -> anyhow::Result<CommandReply> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(CommandReply::private(HELP_TEXT));
        }

        // Python-style split: whitespace runs collapse for the first two
        // tokens, the remainder keeps its internal whitespace.
        let parts = split_args(text, 3);
        let action = parts[0].to_lowercase();

        match action.as_str() {
            "create" => self.create(user_id, &parts).await,
            "list" => self.list(user_id).await,
            "show" => self.show(&parts).await,
            "update" => self.update(&parts).await,
            "delete" => self.delete(user_id, &parts).await,
            _ => Ok(CommandReply::private(format!(
                "❌ Unknown action '{}'. Use `/task` without parameters to see help.",
                action
            ))),
        }
    }

    async fn create(&self, user_id: &str, parts: &[String]) -> anyhow::Result<CommandReply> {
        if parts.len() < 2 {
            return Ok(CommandReply::private(
                "❌ Please provide a task description. Example: `/task create Review documents by Friday`",
            ));
        }

        let task_input = parts[1..].join(" ");
        let parsed = extract::extract(&task_input);
        let task = Task::new(parsed);

        self.store.insert(user_id, task.clone()).await;
        tracing::info!("Created task {} for user {}", task.id, user_id);

        Ok(CommandReply::public(format::task_detail(&task)))
    }

    async fn list(&self, user_id: &str) -> anyhow::Result<CommandReply> {
        let (indexed, tasks) = self.store.snapshot_for_user(user_id).await;
        Ok(CommandReply::private(format::task_list(indexed, &tasks)))
    }

    async fn show(&self, parts: &[String]) -> anyhow::Result<CommandReply> {
        if parts.len() < 2 {
            return Ok(CommandReply::private(
                "❌ Please provide a task ID. Example: `/task show abc123`",
            ));
        }

        let task_id = &parts[1];
        match self.store.get(task_id).await {
            Some(task) => Ok(CommandReply::private(format::task_detail(&task))),
            None => Ok(CommandReply::private(not_found(task_id))),
        }
    }

    async fn update(&self, parts: &[String]) -> anyhow::Result<CommandReply> {
        if parts.len() < 3 {
            return Ok(CommandReply::private(
                "❌ Please provide task ID and status. Example: `/task update abc123 completed`",
            ));
        }

        let task_id = &parts[1];
        if self.store.get(task_id).await.is_none() {
            return Ok(CommandReply::private(not_found(task_id)));
        }

        let Some(status) = TaskStatus::parse(&parts[2]) else {
            return Ok(CommandReply::private(
                "❌ Status must be one of: pending, in_progress, completed",
            ));
        };

        let Some(task) = self.store.set_status(task_id, status).await else {
            return Ok(CommandReply::private(not_found(task_id)));
        };

        Ok(CommandReply::public(format!(
            "{}\n{}",
            format::status_confirmation(status),
            format::task_detail(&task)
        )))
    }

    async fn delete(&self, user_id: &str, parts: &[String]) -> anyhow::Result<CommandReply> {
        if parts.len() < 2 {
            return Ok(CommandReply::private(
                "❌ Please provide a task ID. Example: `/task delete abc123`",
            ));
        }

        let task_id = &parts[1];
        match self.store.remove(user_id, task_id).await {
            Some(task) => {
                tracing::info!("Deleted task {} for user {}", task_id, user_id);
                Ok(CommandReply::private(format!(
                    "🗑️ Task '{}' has been deleted.",
                    task.title
                )))
            }
            None => Ok(CommandReply::private(not_found(task_id))),
        }
    }
}

fn not_found(task_id: &str) -> String {
    format!("❌ Task '{}' not found.", task_id)
}

/// Split on whitespace runs, keeping at most `limit` pieces; the final piece
/// retains its internal whitespace. Mirrors `str.split(None, limit - 1)`.
fn split_args(text: &str, limit: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut rest = text.trim_start();

    while parts.len() + 1 < limit {
        match rest.find(char::is_whitespace) {
            Some(idx) => {
                parts.push(rest[..idx].to_string());
                rest = rest[idx..].trim_start();
                if rest.is_empty() {
                    return parts;
                }
            }
            None => {
                if !rest.is_empty() {
                    parts.push(rest.to_string());
                }
                return parts;
            }
        }
    }

    if !rest.is_empty() {
        parts.push(rest.to_string());
    }
    parts
}
