use thiserror::Error;

/// Caller-protocol and bounds errors of the verification core.
///
/// None of these is a user-facing failure: a wrong word is the normal
/// `Failed` session outcome. These errors indicate wiring bugs in the
/// caller and are surfaced immediately rather than recovered, since
/// swallowing them could let a wallet be marked backed up without full
/// validation.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("position {position} out of range for {word_count}-word phrase")]
    OutOfRange { position: usize, word_count: usize },

    #[error("invalid challenge size {size} for {word_count}-word phrase")]
    InvalidChallengeSize { size: usize, word_count: usize },

    #[error("position {0} is not part of this challenge")]
    UnknownPosition(usize),

    #[error("position {0} already has an attempt; reset it first")]
    DuplicateAttempt(usize),

    #[error("position {0} appears more than once in the challenge")]
    DuplicatePosition(usize),

    #[error("session incomplete: {answered} of {expected} positions answered")]
    IncompleteSession { answered: usize, expected: usize },
}
