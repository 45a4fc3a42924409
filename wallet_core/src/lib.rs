//! Wallet-side collaborators for seed backup verification.
//!
//! Provides what the app layer wires into the verification engine:
//! - `Wallet`: owns a recovery phrase and exposes it word by word
//! - `BackupRegistry`: per-wallet needs-backup flags, cleared on a passed
//!   verification
//! - `begin_verification`: builds a challenge session for a wallet
//!
//! There is no ambient environment singleton here: wallets and registries
//! are passed explicitly to the components that need them, which keeps the
//! verification core testable in isolation.

pub mod backup;
pub mod error;
pub mod registry;
pub mod wallet;

pub use backup::begin_verification;
pub use error::WalletError;
pub use registry::BackupRegistry;
pub use wallet::Wallet;
