//! Ticker type definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Stock ticker, as it appears as a column name in return tables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub struct Ticker(pub String);

impl Ticker {
    /// Create a new ticker.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of this ticker's characteristic column, `{ticker}_{name}`.
    #[must_use]
    pub fn characteristic_column(&self, name: &str) -> String {
        format!("{}_{name}", self.0)
    }

    /// Recover the ticker from a `{ticker}_{name}` column name.
    #[must_use]
    pub fn from_characteristic_column(column: &str, name: &str) -> Option<Self> {
        column
            .strip_suffix(name)
            .and_then(|rest| rest.strip_suffix('_'))
            .filter(|ticker| !ticker.is_empty())
            .map(Self::new)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self(s)
    }
}
