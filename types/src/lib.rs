//! Shared leaf types for the ember wallet libraries.
//!
//! This crate defines the types the other workspace crates agree on:
//! wallet identities, seed-word tokens, backup state flags, and the
//! challenge policy configuration.

pub mod id;
pub mod params;
pub mod state;
pub mod word;

pub use id::WalletId;
pub use params::ChallengePolicy;
pub use state::BackupState;
pub use word::SeedWord;
