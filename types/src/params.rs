//! Backup verification configuration.

use serde::{Deserialize, Serialize};

/// How many words a backup verification challenge covers.
///
/// `FullPhrase` asks the user to re-enter every word of the mnemonic in
/// order. `Subset` spot-checks a fixed number of randomly chosen positions.
/// The resolved size is still validated by the challenge generator, so a
/// `Subset` size larger than the phrase is rejected there rather than
/// silently clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengePolicy {
    /// Challenge every position of the phrase.
    FullPhrase,
    /// Challenge `size` randomly selected positions.
    Subset { size: usize },
}

impl ChallengePolicy {
    /// Resolve the policy to a concrete challenge size for a phrase of
    /// `word_count` words.
    pub fn challenge_size(&self, word_count: usize) -> usize {
        match self {
            Self::FullPhrase => word_count,
            Self::Subset { size } => *size,
        }
    }
}

/// The default policy is full re-entry, matching the backup screen that
/// walks the user through every word in order.
impl Default for ChallengePolicy {
    fn default() -> Self {
        Self::FullPhrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_phrase_covers_every_word() {
        assert_eq!(ChallengePolicy::FullPhrase.challenge_size(12), 12);
        assert_eq!(ChallengePolicy::FullPhrase.challenge_size(24), 24);
    }

    #[test]
    fn subset_is_fixed_size() {
        let policy = ChallengePolicy::Subset { size: 4 };
        assert_eq!(policy.challenge_size(12), 4);
        assert_eq!(policy.challenge_size(24), 4);
    }

    #[test]
    fn default_is_full_phrase() {
        assert_eq!(ChallengePolicy::default(), ChallengePolicy::FullPhrase);
    }

    #[test]
    fn serde_roundtrip() {
        let policy = ChallengePolicy::Subset { size: 6 };
        let json = serde_json::to_string(&policy).unwrap();
        let back: ChallengePolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }
}
