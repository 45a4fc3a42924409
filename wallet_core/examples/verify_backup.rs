//! End-to-end backup verification walkthrough.
//!
//! Generates a wallet, challenges the full phrase, answers every position
//! and clears the needs-backup flag. Run with:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example verify_backup
//! ```

use ember_mnemonic::WordCount;
use ember_types::{ChallengePolicy, WalletId};
use ember_verification::RevealMnemonic;
use ember_wallet_core::{begin_verification, BackupRegistry, Wallet, WalletError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), WalletError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let wallet = Wallet::generate(WalletId::new("demo"), WordCount::Twelve)?;
    let mut registry = BackupRegistry::new();
    registry.register(wallet.id().clone());
    println!("needs backup: {}", registry.needs_backup(wallet.id()));

    // The backup-display screen would show these to the user first.
    let words = wallet.reveal();

    let mut session = begin_verification(&wallet, &ChallengePolicy::FullPhrase, None)?;
    let positions = session.challenge_positions().to_vec();
    for &position in &positions {
        session.record_attempt(position, words[position].clone())?;
    }

    let outcome = session.report(&mut registry)?;
    println!("outcome: {outcome:?}");
    println!("needs backup: {}", registry.needs_backup(wallet.id()));

    Ok(())
}
