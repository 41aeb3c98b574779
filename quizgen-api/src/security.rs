//! Browser-facing access rules.

pub mod cors;

pub use cors::{AllowedOrigins, CorsConfig};
