//! CORS policy for the browser frontend.

use axum::http::HeaderValue;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Origins of the local frontend dev servers.
pub const DEFAULT_ORIGINS: &[&str] = &[
    "http://localhost:5174",
    "http://127.0.0.1:5174",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// Allowed origins configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Allow any origin
    Any,
    /// Allow only specific origins
    List(Vec<String>),
}

/// CORS configuration for API endpoints. Any method and any request header
/// are allowed; credentials never are.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
    /// Max age for preflight caching
    pub max_age: Duration,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::with_origins(DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect())
    }
}

impl CorsConfig {
    /// Create a permissive CORS config for development
    pub fn development() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            ..Default::default()
        }
    }

    /// Create a CORS config for specific origins
    pub fn with_origins(origins: Vec<String>) -> Self {
        Self {
            allowed_origins: AllowedOrigins::List(origins),
            max_age: Duration::from_secs(600),
        }
    }

    /// Convert to tower_http CorsLayer
    pub fn to_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods(AllowMethods::any())
            .allow_headers(AllowHeaders::any())
            .allow_credentials(false)
            .max_age(self.max_age);

        match &self.allowed_origins {
            AllowedOrigins::Any => layer.allow_origin(AllowOrigin::any()),
            AllowedOrigins::List(origins) => {
                let origins: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|o| match o.parse() {
                        Ok(value) => Some(value),
                        Err(_) => {
                            tracing::warn!(origin = %o, "Ignoring unparsable CORS origin");
                            None
                        }
                    })
                    .collect();
                layer.allow_origin(origins)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins() {
        let config = CorsConfig::default();
        match config.allowed_origins {
            AllowedOrigins::List(origins) => {
                assert_eq!(origins.len(), 4);
                assert!(origins.contains(&"http://localhost:5174".to_string()));
            }
            AllowedOrigins::Any => panic!("Expected origin list"),
        }
    }

    #[test]
    fn test_development_allows_any() {
        assert_eq!(CorsConfig::development().allowed_origins, AllowedOrigins::Any);
    }
}
