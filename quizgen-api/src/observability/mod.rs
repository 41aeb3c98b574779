//! Structured logging and request correlation.

pub mod logging;

pub use logging::{
    init_logging, request_logging_middleware, LogConfig, LogFormat, LoggingError,
    REQUEST_ID_HEADER,
};
