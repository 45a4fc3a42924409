//! BIP39 seed phrase generation, parsing and word access.
//!
//! Phrases are generated from OS-RNG entropy (128-bit for 12 words, 256-bit
//! for 24) and validated on parse, including the checksum. Individual words
//! are handed out as [`SeedWord`] tokens; the full phrase is only exposed
//! through the explicit [`SeedPhrase::words`] / [`SeedPhrase::phrase`]
//! reveal operations used by the backup-display screen.

use bip39::{Language, Mnemonic};
use ember_types::SeedWord;
use rand::RngCore;
use std::fmt;
use thiserror::Error;

/// Errors arising from phrase operations.
#[derive(Debug, Error)]
pub enum MnemonicError {
    #[error("invalid recovery phrase: {0}")]
    InvalidPhrase(String),

    #[error("entropy generation failed: {0}")]
    Entropy(String),
}

/// Supported phrase lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy), the app default.
    Twelve,
    /// 24 words (256-bit entropy).
    TwentyFour,
}

impl WordCount {
    /// Number of words in a phrase of this length.
    pub fn word_count(&self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::TwentyFour => 24,
        }
    }

    /// Entropy length in bytes backing a phrase of this length.
    pub fn entropy_bytes(&self) -> usize {
        match self {
            Self::Twelve => 16,
            Self::TwentyFour => 32,
        }
    }
}

/// A validated English BIP39 recovery phrase.
#[derive(Clone)]
pub struct SeedPhrase {
    inner: Mnemonic,
}

impl PartialEq for SeedPhrase {
    fn eq(&self, other: &Self) -> bool {
        self.inner.word_iter().eq(other.inner.word_iter())
    }
}

impl Eq for SeedPhrase {}

impl SeedPhrase {
    /// Generate a fresh phrase from OS-RNG entropy.
    pub fn generate(count: WordCount) -> Result<Self, MnemonicError> {
        let mut entropy = vec![0u8; count.entropy_bytes()];
        rand::rngs::OsRng.fill_bytes(&mut entropy);
        let inner = Mnemonic::from_entropy(&entropy)
            .map_err(|e| MnemonicError::Entropy(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Parse a phrase string, validating the wordlist and checksum.
    pub fn parse(phrase: &str) -> Result<Self, MnemonicError> {
        let inner = Mnemonic::parse_normalized(phrase)
            .map_err(|e| MnemonicError::InvalidPhrase(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// The word at `position` (0-based), or `None` past the end.
    pub fn word(&self, position: usize) -> Option<SeedWord> {
        self.inner.word_iter().nth(position).map(SeedWord::new)
    }

    /// All words in order. This is the deliberate full reveal used by the
    /// backup-display screen; verification goes word by word instead.
    pub fn words(&self) -> Vec<SeedWord> {
        self.inner.word_iter().map(SeedWord::new).collect()
    }

    /// The phrase as a single space-joined string, for the same screen.
    pub fn phrase(&self) -> String {
        self.inner
            .word_iter()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Debug for SeedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeedPhrase({} words, <redacted>)", self.word_count())
    }
}

/// Validate that a string is a well-formed BIP39 phrase.
pub fn validate(phrase: &str) -> bool {
    Mnemonic::parse_normalized(phrase).is_ok()
}

/// Whether `word` is a word of the BIP39 English wordlist.
///
/// Used by entry UIs to filter keystrokes before a candidate is even
/// submitted to a verification session. The wordlist is sorted, so an exact
/// member is always the first prefix match.
pub fn wordlist_contains(word: &str) -> bool {
    let word = word.trim();
    !word.is_empty()
        && Language::English
            .words_by_prefix(word)
            .first()
            .is_some_and(|candidate| *candidate == word)
}
