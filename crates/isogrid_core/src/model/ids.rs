//! Identifiers for exploration results

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of one simulation result within an exploration
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(pub String);

impl ResultId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResultId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResultId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
