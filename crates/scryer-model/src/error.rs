//! Error types for model construction.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Argument errors raised while building a model.
///
/// The `Display` text of each variant is the message shown to users, so it
/// must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("The destination of a relationship must be specified.")]
    MissingDestination,

    #[error("The name must not be null or empty.")]
    MissingName,

    #[error("The URL must not be null or empty.")]
    MissingUrl,

    #[error("{0} is not a valid URL.")]
    InvalidUrl(String),

    #[error("The polling interval must be zero or a positive integer.")]
    NegativeInterval,

    #[error("The timeout must be zero or a positive integer.")]
    NegativeTimeout,

    #[error("The number of instances must be a positive integer.")]
    InvalidInstanceCount,

    #[error("An element with ID {0} does not exist in the model.")]
    ElementNotFound(String),

    #[error("A {kind} named \"{name}\" already exists.")]
    DuplicateName { kind: &'static str, name: String },

    #[error("A relationship from {from} to {to} described as \"{description}\" already exists.")]
    DuplicateRelationship {
        from: String,
        to: String,
        description: String,
    },
}
