//! Common error types for vehicle adapters

use thiserror::Error;

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors that can occur while resolving, dispatching or translating a
/// vehicle request.
///
/// Every layer reports failures with one of these kinds; the HTTP layer only
/// maps them to status codes.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Vehicle identifier has no brand mapping
    #[error("Not found: {0}")]
    NotFound(String),

    /// No adapter registered for the brand
    #[error("Unsupported brand: {0}")]
    UnsupportedBrand(String),

    /// Missing or empty argument to the remote call primitive
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Engine command token not recognized
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Upstream reported a failure, returned no data, or used a status
    /// vocabulary the adapter does not understand
    #[error("Upstream error (status {}): {reason}", status_label(.status))]
    Upstream {
        /// Status reported by the upstream envelope, if any
        status: Option<String>,
        /// Reason text reported by the upstream (or transport failure)
        reason: String,
    },

    /// Upstream payload had an unexpected shape
    #[error("Translation failed: {0}")]
    Translation(#[from] TranslationError),

    /// Internal failure (e.g. vehicle directory unavailable)
    #[error("Internal error: {0}")]
    Internal(String),
}

fn status_label(status: &Option<String>) -> &str {
    status.as_deref().unwrap_or("none")
}

impl AdapterError {
    /// Create an upstream error from an optional status and a reason
    pub fn upstream(status: Option<String>, reason: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AdapterError::NotFound(_) => 404,
            AdapterError::UnsupportedBrand(_) => 404,
            AdapterError::InvalidArgument(_) => 400,
            AdapterError::InvalidCommand(_) => 400,
            AdapterError::Upstream { .. } => 500,
            AdapterError::Translation(_) => 500,
            AdapterError::Internal(_) => 500,
        }
    }
}

/// Structural failures found while translating an upstream payload.
///
/// Each variant names the dotted path of the offending field
/// (e.g. `doors.values`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslationError {
    /// A required field is absent
    #[error("missing field `{0}`")]
    MissingField(String),

    /// A field is present but has the wrong JSON type
    #[error("type mismatch at `{field}`: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A field has the right type but an unusable value
    #[error("invalid value at `{field}`: {value:?} is not {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },
}

impl TranslationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found: json_type_name(found),
        }
    }

    pub fn invalid(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }
}

/// JSON type name used in mismatch reports, so raw values never leak
fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
