use thiserror::Error;

/// Core error types for Vitals
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation failed
    #[error("Validation error in {field}: {message}")]
    Validation { field: String, message: String },
}

impl Error {
    /// Creates a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// User-facing message without the field prefix, for inline display.
    pub fn user_message(&self) -> &str {
        match self {
            Error::Validation { message, .. } => message,
        }
    }
}

/// Convenience Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
