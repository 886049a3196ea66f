//! Error types for cm-provider

use thiserror::Error;

/// Provider operation errors
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Connection error (P001)
    #[error("[P001] Provider connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (P002)
    #[error("[P002] WQL execution failed: {0}")]
    QueryError(String),

    /// Instance not found (P003)
    #[error("[P003] Instance not found: {0}")]
    InstanceNotFound(String),

    /// Method invocation error (P004)
    #[error("[P004] Method {method} on {target} failed: {message}")]
    MethodError {
        target: String,
        method: String,
        message: String,
    },

    /// Missing property (P005)
    #[error("[P005] Property {property} not present on {class}")]
    MissingProperty { class: String, property: String },

    /// Property type mismatch (P006)
    #[error("[P006] Property {property} on {class} is not a {expected}")]
    PropertyType {
        class: String,
        property: String,
        expected: &'static str,
    },

    /// Unsaved object (P007)
    #[error("[P007] Object of class {class} has no provider path; save it first")]
    Unsaved { class: String },

    /// Connection configuration error (P008)
    #[error("[P008] Failed to load connection config: {0}")]
    ConfigError(String),
}

/// Result type alias for ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;
