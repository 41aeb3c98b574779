use anyhow::Result;
use quizgen_api::{
    observability::{init_logging, LogConfig},
    AppState, CorsConfig, OpenAiChatClient,
};
use std::sync::Arc;
use tokio::signal;

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::load()?;

    init_logging(LogConfig {
        format: config.log_format,
        level: config.log_level.clone(),
        filter: None,
    })?;

    tracing::info!("Starting quiz generator server");

    // Initialize chat client
    let chat = OpenAiChatClient::new(config.chat.clone())?;
    if chat.has_credential() {
        tracing::info!(model = %config.chat.default_model, "Chat client initialized");
    } else {
        tracing::warn!(
            "{} is not set; /ai_chat will answer with a configuration error",
            config::API_KEY_VAR
        );
    }

    let state = AppState::new(Arc::new(chat));
    let cors = CorsConfig::with_origins(config.cors_origins.clone());
    let app = quizgen_api::build_router(state, &cors);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
