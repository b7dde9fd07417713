//! HTTP API for the task bot.
//!
//! ## Endpoints
//!
//! - `POST /slack/command` - Slack slash-command webhook
//! - `GET /` - Health check with task/user totals
//! - `GET /tasks` - Full store dump (requires `Authorization: Bearer <ADMIN_TOKEN>`)

mod auth;
mod routes;
pub mod types;

pub use routes::serve;
pub use types::*;
