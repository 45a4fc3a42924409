//! Opaque wallet identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one wallet within the app.
///
/// The id is an opaque string chosen by the wallet layer (the original app
/// keys per-wallet settings by a unique identifier string). It carries no
/// key material.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletId(String);

impl WalletId {
    /// Create a new wallet id from a raw string.
    ///
    /// # Panics
    /// Panics if the string is empty.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(!s.is_empty(), "wallet id must not be empty");
        Self(s)
    }

    /// Return the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WalletId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
