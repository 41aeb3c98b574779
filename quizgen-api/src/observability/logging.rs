//! Structured logging and request correlation
//!
//! - JSON, pretty or compact output selected by [`LogFormat`]
//! - `RUST_LOG` overrides the configured level
//! - Every request gets an `X-Request-ID`, echoed back on the response
//!
//! ```rust,no_run
//! use quizgen_api::observability::logging::{init_logging, LogConfig};
//!
//! init_logging(LogConfig::default()).expect("Failed to initialize logging");
//! ```

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, Instrument};
use tracing_subscriber::{
    filter::ParseError,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};
use uuid::Uuid;

/// HTTP header for request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format for production (machine-readable)
    Json,
    /// Pretty format for development (human-readable)
    Pretty,
    /// Compact format for minimal output
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Default log level
    pub level: String,
    /// Per-module log levels (e.g., "quizgen_api=debug,tower_http=info")
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: "info".to_string(),
            filter: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: LogConfig) -> Result<(), LoggingError> {
    let env_filter = if let Some(ref filter) = config.filter {
        EnvFilter::try_new(filter)?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?
    };

    match config.format {
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(json_layer).try_init()?;
        }
        LogFormat::Pretty => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(pretty_layer).try_init()?;
        }
        LogFormat::Compact => {
            let compact_layer = fmt::layer()
                .compact()
                .with_filter(env_filter);

            tracing_subscriber::registry().with(compact_layer).try_init()?;
        }
    }

    info!("Logging system initialized with format: {:?}", config.format);
    Ok(())
}

/// Extract or generate request ID from headers
fn extract_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Middleware for request/response logging with correlation IDs
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = extract_request_id(request.headers());
    let method = request.method().to_string();
    let uri = request.uri().to_string();

    let span = tracing::info_span!("request", request.id = %request_id);

    info!(
        parent: &span,
        request.method = %method,
        request.uri = %uri,
        "Incoming request"
    );

    let mut response = next.run(request).instrument(span.clone()).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    span.in_scope(|| {
        if status.is_server_error() {
            tracing::error!(
                response.status = status.as_u16(),
                response.duration_ms = duration_ms,
                "Request completed with server error"
            );
        } else if status.is_client_error() {
            tracing::warn!(
                response.status = status.as_u16(),
                response.duration_ms = duration_ms,
                "Request completed with client error"
            );
        } else {
            tracing::info!(
                response.status = status.as_u16(),
                response.duration_ms = duration_ms,
                "Request completed successfully"
            );
        }
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
