//! Outcome reporting seam.

use ember_types::WalletId;

/// Consumes a passed verification so the wallet's needs-backup flag can be
/// cleared.
///
/// [`VerificationSession::report`](crate::VerificationSession::report) calls
/// this at most once per session and never on failure. Retrying or
/// persisting the underlying flag update is the implementor's concern.
pub trait ResultReporter {
    /// The wallet identified by `wallet` has passed backup verification.
    fn report_verified(&mut self, wallet: &WalletId);
}
