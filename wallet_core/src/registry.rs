//! Per-wallet backup flags.

use ember_types::{BackupState, WalletId};
use ember_verification::ResultReporter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tracks which wallets still need their recovery phrase verified.
///
/// The flag lives outside the [`Wallet`](crate::Wallet) struct, keyed per
/// wallet id, the way the app keeps per-wallet settings apart from key
/// material. The registry is the [`ResultReporter`] handed to a
/// verification session: a passed verification clears the flag, a failed
/// one leaves it untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BackupRegistry {
    flags: HashMap<WalletId, BackupState>,
}

impl BackupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly generated wallet, which needs backup.
    pub fn register(&mut self, wallet: WalletId) {
        self.flags.insert(wallet, BackupState::NeedsBackup);
    }

    /// Register a wallet restored from its phrase. Restoring is itself
    /// proof of possession, so the flag starts cleared.
    pub fn register_restored(&mut self, wallet: WalletId) {
        self.flags.insert(wallet, BackupState::BackedUp);
    }

    /// The backup state of a wallet, if registered.
    pub fn state(&self, wallet: &WalletId) -> Option<BackupState> {
        self.flags.get(wallet).copied()
    }

    /// Whether the wallet still needs the backup flow. Unregistered wallets
    /// are treated as needing backup.
    pub fn needs_backup(&self, wallet: &WalletId) -> bool {
        self.flags
            .get(wallet)
            .map_or(true, BackupState::needs_backup)
    }

    /// Clear the needs-backup flag for a wallet.
    pub fn mark_backed_up(&mut self, wallet: &WalletId) {
        self.flags.insert(wallet.clone(), BackupState::BackedUp);
    }

    /// Number of registered wallets.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl ResultReporter for BackupRegistry {
    fn report_verified(&mut self, wallet: &WalletId) {
        tracing::info!(wallet = %wallet, "clearing needs-backup flag");
        self.mark_backed_up(wallet);
    }
}
