//! Backup verification flow entry point.

use ember_types::ChallengePolicy;
use ember_verification::{ChallengeGenerator, VerificationSession};

use crate::error::WalletError;
use crate::wallet::Wallet;

/// Build a verification session for a wallet under the given policy.
///
/// Resolves the policy to a challenge size, generates the positions and
/// wires the wallet in as the session's word source. The caller (the UI
/// flow) then drives `record_attempt`/`reset_attempt` and finally
/// `report`s against a [`BackupRegistry`](crate::BackupRegistry) or any
/// other [`ResultReporter`](ember_verification::ResultReporter).
///
/// `seed` pins the challenge selection for tests; pass `None` in
/// production so positions are drawn fresh each time the flow is invoked.
pub fn begin_verification<'a>(
    wallet: &'a Wallet,
    policy: &ChallengePolicy,
    seed: Option<u64>,
) -> Result<VerificationSession<'a>, WalletError> {
    let word_count = wallet.word_count();
    let challenge_size = policy.challenge_size(word_count);
    let positions = ChallengeGenerator.generate(word_count, challenge_size, seed)?;

    tracing::debug!(
        wallet = %wallet.id(),
        word_count,
        challenge_size,
        "backup verification started"
    );

    let session = VerificationSession::new(wallet.id().clone(), wallet, positions)?;
    Ok(session)
}
