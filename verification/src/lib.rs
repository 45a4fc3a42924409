//! Seed backup verification.
//!
//! Before a wallet is considered backed up, the user must prove possession
//! of its recovery phrase by re-entering words from it. The flow:
//!
//! 1. [`ChallengeGenerator`] picks the positions to challenge (all of them,
//!    or a random subset), in ascending order.
//! 2. The UI collects one candidate word per position into a
//!    [`VerificationSession`], which checks each against the wallet's
//!    [`MnemonicSource`].
//! 3. Once every position is answered, the session yields a pass/fail
//!    outcome and, on pass, notifies the [`ResultReporter`] exactly once so
//!    the wallet's needs-backup flag can be cleared.
//!
//! The session is exclusively owned by the UI flow that created it and can
//! be dropped at any point with no side effects. A wrong word is a normal
//! `Failed` outcome, not an error; the error type covers caller protocol
//! violations only.

pub mod challenge;
pub mod error;
pub mod reporter;
pub mod session;
pub mod source;

pub use challenge::ChallengeGenerator;
pub use error::VerificationError;
pub use reporter::ResultReporter;
pub use session::{SessionOutcome, SessionPhase, VerificationSession, WordAttempt};
pub use source::{MnemonicSource, RevealMnemonic};
