//! Seed word token.
//!
//! A `SeedWord` is either one word of a stored mnemonic or a user-supplied
//! candidate during backup verification. Construction trims surrounding
//! whitespace; comparison is exact and case-sensitive, so "Zoo" does not
//! match "zoo". The inner string is wiped on drop and the `Debug` output is
//! redacted so derived debug formatting of containing types cannot leak
//! phrase material into logs.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One recovery word: a mnemonic word or a candidate entered by the user.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SeedWord(String);

impl SeedWord {
    /// Create a seed word from raw input, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// The word text. Callers that render the word to the user go through
    /// this accessor explicitly; there is no `Display` impl.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the word is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SeedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeedWord(<redacted>)")
    }
}
