//! Read-only access to a wallet's stored mnemonic.

use crate::error::VerificationError;
use ember_types::SeedWord;

/// Word-at-a-time access to a stored mnemonic, supplied by the wallet
/// collaborator.
///
/// Implementations are pure and in-memory: no I/O, no side effects. The
/// verification path only ever needs one word at a time, which is why the
/// full-phrase reveal lives on a separate trait.
pub trait MnemonicSource {
    /// Number of words in the stored mnemonic.
    fn word_count(&self) -> usize;

    /// The expected word at `position` (0-based).
    ///
    /// Fails with [`VerificationError::OutOfRange`] when `position` is past
    /// the end of the phrase.
    fn word_at(&self, position: usize) -> Result<SeedWord, VerificationError>;
}

/// Explicit full-phrase disclosure.
///
/// Kept separate from [`MnemonicSource`] so code that only verifies words
/// cannot accidentally request the whole phrase. The backup-display screen
/// is the intended caller.
pub trait RevealMnemonic {
    /// All words of the mnemonic, in order.
    fn reveal(&self) -> Vec<SeedWord>;
}
