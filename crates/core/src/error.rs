//! Error types for the Propuestas domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Every variant maps to a stable kind name via [`Error::kind`], which is what
//! execution traces record.

use thiserror::Error;

/// The top-level error type for all Propuestas operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Input validation ---
    #[error("{0}")]
    Validation(String),

    // --- Unexpected failure while assembling a proposal ---
    #[error("{0}")]
    Internal(String),

    // --- LLM provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Stable kind name recorded in execution traces.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Internal(_) => "InternalError",
            Self::Provider(_) => "ProviderError",
            Self::Config { .. } => "ConfigError",
            Self::Serialization(_) => "SerializationError",
        }
    }

    /// Whether this error was caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_message_verbatim() {
        let err = Error::Validation("La descripción debe tener al menos 10 caracteres".into());
        assert_eq!(
            err.to_string(),
            "La descripción debe tener al menos 10 caracteres"
        );
        assert_eq!(err.kind(), "ValidationError");
        assert!(err.is_validation());
    }

    #[test]
    fn internal_kind() {
        let err = Error::Internal("template registry is empty".into());
        assert_eq!(err.kind(), "InternalError");
        assert!(!err.is_validation());
    }

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
        assert_eq!(err.kind(), "ProviderError");
    }
}
