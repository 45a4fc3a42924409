//! Core wallet struct owning the recovery phrase.

use ember_mnemonic::{SeedPhrase, WordCount};
use ember_types::{SeedWord, WalletId};
use ember_verification::{MnemonicSource, RevealMnemonic, VerificationError};

use crate::error::WalletError;

/// An ember wallet.
///
/// Owns the recovery phrase and exposes it to the verification engine one
/// word at a time. The needs-backup flag lives in the
/// [`BackupRegistry`](crate::BackupRegistry), not here, so a registry can
/// act as the [`ResultReporter`](ember_verification::ResultReporter) while
/// a session borrows the wallet as its word source.
#[derive(Debug)]
pub struct Wallet {
    id: WalletId,
    phrase: SeedPhrase,
}

impl Wallet {
    /// Create a wallet with a freshly generated recovery phrase.
    pub fn generate(id: WalletId, count: WordCount) -> Result<Self, WalletError> {
        let phrase = SeedPhrase::generate(count)?;
        tracing::info!(wallet = %id, words = phrase.word_count(), "wallet generated");
        Ok(Self { id, phrase })
    }

    /// Restore a wallet from an existing recovery phrase.
    pub fn from_phrase(id: WalletId, phrase: &str) -> Result<Self, WalletError> {
        let phrase = SeedPhrase::parse(phrase)?;
        tracing::info!(wallet = %id, words = phrase.word_count(), "wallet restored");
        Ok(Self { id, phrase })
    }

    /// This wallet's identity.
    pub fn id(&self) -> &WalletId {
        &self.id
    }

    /// Number of words in the recovery phrase.
    pub fn word_count(&self) -> usize {
        self.phrase.word_count()
    }
}

impl MnemonicSource for Wallet {
    fn word_count(&self) -> usize {
        self.phrase.word_count()
    }

    fn word_at(&self, position: usize) -> Result<SeedWord, VerificationError> {
        self.phrase
            .word(position)
            .ok_or(VerificationError::OutOfRange {
                position,
                word_count: self.phrase.word_count(),
            })
    }
}

impl RevealMnemonic for Wallet {
    fn reveal(&self) -> Vec<SeedWord> {
        self.phrase.words()
    }
}
