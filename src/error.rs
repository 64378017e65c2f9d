//! Error types for secret provider operations.

use thiserror::Error;

/// Rejected constructor input.
///
/// Checked in declaration order; the first failing check is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// No secret map was supplied at all.
    #[error("secret is nil")]
    NilSecret,

    /// The secret map has no entries.
    #[error("secret is empty")]
    EmptySecret,

    /// The provider identifier is the empty string.
    #[error("id is empty")]
    EmptyId,
}

/// Errors that can occur during secret operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    /// Provider construction was given invalid input
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// Key is absent from the provider's secret
    #[error("key {key:?} not found in {id:?} secret")]
    NotFound { key: String, id: String },

    /// No provider is registered under the identifier
    #[error("provider {provider:?} is not registered")]
    ProviderNotAvailable { provider: String },

    /// A provider with the same identifier is already registered
    #[error("provider {id:?} is already registered")]
    DuplicateProvider { id: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl SecretError {
    /// Whether this error was raised by input validation at construction.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SecretError::InvalidInput(_))
    }

    /// Whether this error reports a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SecretError::NotFound { .. })
    }
}

/// Result type for secret operations.
pub type SecretResult<T> = Result<T, SecretError>;
