use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// The human-readable message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            })
            .collect();

        CoreError::Validation(messages.join("; "))
    }
}
