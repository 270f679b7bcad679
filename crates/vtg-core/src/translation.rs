//! Translation guard shared by every adapter.
//!
//! Adapters route each translation entry point through [`guard`], which turns
//! a structural [`TranslationError`] into [`AdapterError::Translation`] and
//! logs the detail. The detail stays in the logs; callers only see the
//! error kind.

use serde_json::Value;

use crate::error::{AdapterError, AdapterResult, TranslationError};

/// Run a translation function over an upstream payload, re-kinding any
/// structural failure as [`AdapterError::Translation`].
pub fn guard<T, F>(capability: &'static str, payload: &Value, translate: F) -> AdapterResult<T>
where
    F: FnOnce(&Value) -> Result<T, TranslationError>,
{
    translate(payload).map_err(|e| {
        tracing::warn!(
            capability,
            error = %e,
            "Translation failed, upstream payload is malformed"
        );
        AdapterError::Translation(e)
    })
}
