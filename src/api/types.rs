//! API request and response types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::command::{CommandReply, Visibility};
use crate::task::Task;

/// Slash-command payload Slack posts as form data.
///
/// Only `user_id` and `text` drive the bot; the remaining fields are listed
/// so the full Slack payload deserializes cleanly.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackCommandRequest {
    /// Stable identifier of the invoking user
    pub user_id: String,

    /// Raw text after the slash command, may be empty
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub team_domain: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub response_url: Option<String>,
}

/// Slack delivery mode for a slash-command reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Shown only to the invoking user
    Ephemeral,
    /// Broadcast to the channel
    InChannel,
}

impl From<Visibility> for ResponseType {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Private => Self::Ephemeral,
            Visibility::Public => Self::InChannel,
        }
    }
}

/// Body returned to Slack for a slash command.
#[derive(Debug, Clone, Serialize)]
pub struct SlackResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl From<CommandReply> for SlackResponse {
    fn from(reply: CommandReply) -> Self {
        Self {
            response_type: reply.visibility.into(),
            text: reply.text,
        }
    }
}

/// Health check response with store totals.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub total_tasks: usize,
    pub total_users: usize,
}

/// Full store dump for the operator debug endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDumpResponse {
    pub tasks: Vec<Task>,
    pub user_tasks: HashMap<String, Vec<String>>,
}
