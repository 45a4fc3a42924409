//! BIP39 recovery phrase ownership.
//!
//! A wallet's master secret is encoded as an English BIP39 mnemonic. This
//! crate owns phrase generation, parsing and word access; key derivation is
//! not performed here (the signing layer treats the phrase as an opaque
//! capability). Phrase material never appears in `Debug` output.

pub mod phrase;

pub use phrase::{validate, wordlist_contains, MnemonicError, SeedPhrase, WordCount};
