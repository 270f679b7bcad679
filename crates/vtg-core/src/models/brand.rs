//! Brand tag model

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque tag selecting which adapter handles a vehicle (e.g. `gm`).
///
/// Internal routing key only; never part of a response body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandTag(String);

impl BrandTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrandTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BrandTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for BrandTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl Borrow<str> for BrandTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}
