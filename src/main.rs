//! taskbot - HTTP Server Entry Point
//!
//! Starts the HTTP server that receives Slack slash-command webhooks.

use taskbot::{api, config::Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskbot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    if config.admin_token.is_none() {
        info!("ADMIN_TOKEN not set; the /tasks debug dump is disabled");
    }

    // Start HTTP server
    info!("Starting server on {}:{}", config.host, config.port);
    api::serve(config).await?;

    Ok(())
}
