//! Backup state flag for a wallet.

use serde::{Deserialize, Serialize};

/// Whether the user has confirmed possession of a wallet's recovery phrase.
///
/// Freshly generated wallets start at `NeedsBackup`. The flag moves to
/// `BackedUp` exactly once, when a verification session passes (or when the
/// wallet was restored from its phrase, which is itself proof of possession).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackupState {
    /// The recovery phrase has not been verified by the user yet.
    NeedsBackup,
    /// The user has proven possession of the recovery phrase.
    BackedUp,
}

impl BackupState {
    /// Whether the wallet still needs the backup flow.
    pub fn needs_backup(&self) -> bool {
        matches!(self, Self::NeedsBackup)
    }

    /// Whether possession of the phrase has been confirmed.
    pub fn is_backed_up(&self) -> bool {
        matches!(self, Self::BackedUp)
    }
}
