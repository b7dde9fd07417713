//! # taskbot
//!
//! Slack slash-command bot for tracking tasks.
//!
//! This library provides:
//! - A natural-language extractor that splits free text into a task title,
//!   description, and deadline
//! - A command dispatcher routing `/task` subcommands against an in-memory
//!   task store
//! - An HTTP API adapting Slack's webhook payloads to the dispatcher
//!
//! ## Command Flow
//! 1. Slack posts the slash-command form to `POST /slack/command`
//! 2. The dispatcher tokenizes the text and routes on the first word
//! 3. `create` runs the extractor to derive title/description/deadline
//! 4. The reply's visibility maps back to Slack's `response_type`
//!
//! ## Modules
//! - `task`: task model, extractor, store, and message formatting
//! - `command`: slash-command dispatcher
//! - `api`: axum routes and wire types

pub mod api;
pub mod command;
pub mod config;
pub mod task;

pub use command::{CommandReply, Dispatcher, Visibility};
pub use config::Config;
pub use task::{Task, TaskStatus};
