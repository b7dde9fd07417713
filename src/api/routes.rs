//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::command::{CommandReply, Dispatcher};
use crate::config::Config;
use crate::task::store::TaskStore;

use super::auth;
use super::types::{HealthResponse, SlackCommandRequest, SlackResponse, TaskDumpResponse};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<TaskStore>,
    pub dispatcher: Dispatcher,
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = Arc::new(TaskStore::new());
    let dispatcher = Dispatcher::new(Arc::clone(&store));

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        dispatcher,
    });

    let admin_routes = Router::new()
        .route("/tasks", get(dump_tasks))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::require_operator,
        ));

    let app = Router::new()
        .route("/", get(health))
        .route("/slack/command", post(slack_command))
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::clone(&state));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Handle a Slack slash command.
///
/// Any fault inside dispatch is converted into a private error reply here;
/// Slack always receives a well-formed 200 response.
async fn slack_command(
    State(state): State<Arc<AppState>>,
    Form(req): Form<SlackCommandRequest>,
) -> Json<SlackResponse> {
    let reply = match state.dispatcher.dispatch(&req.user_id, &req.text).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Command dispatch failed for user {}: {}", req.user_id, e);
            CommandReply::private(format!("❌ An error occurred: {}", e))
        }
    };
    Json(reply.into())
}

/// Health check with store totals.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (total_tasks, total_users) = state.store.counts().await;
    Json(HealthResponse {
        message: "Slack Productivity Bot API is running!".to_string(),
        total_tasks,
        total_users,
    })
}

/// Dump every task and the full user index. Operator-gated.
async fn dump_tasks(State(state): State<Arc<AppState>>) -> Json<TaskDumpResponse> {
    let (tasks, user_tasks) = state.store.dump().await;
    Json(TaskDumpResponse { tasks, user_tasks })
}
