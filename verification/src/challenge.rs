//! Challenge generation - which positions the user must re-enter.

use crate::error::VerificationError;
use rand::rngs::StdRng;
use rand::{seq::index, Rng, SeedableRng};

/// Selects the mnemonic positions to challenge during backup verification.
pub struct ChallengeGenerator;

impl ChallengeGenerator {
    /// Pick `challenge_size` unique positions from `[0, word_count)`.
    ///
    /// Positions are sampled without replacement, uniformly at random, and
    /// returned in ascending order so the UI presents words in natural
    /// reading order. A fixed `seed` makes the selection reproducible; with
    /// `None` the thread RNG is used. `challenge_size == word_count` yields
    /// every position exactly once (full re-entry).
    pub fn generate(
        &self,
        word_count: usize,
        challenge_size: usize,
        seed: Option<u64>,
    ) -> Result<Vec<usize>, VerificationError> {
        if challenge_size == 0 || challenge_size > word_count {
            return Err(VerificationError::InvalidChallengeSize {
                size: challenge_size,
                word_count,
            });
        }

        let mut positions = match seed {
            Some(seed) => Self::sample(&mut StdRng::seed_from_u64(seed), word_count, challenge_size),
            None => Self::sample(&mut rand::thread_rng(), word_count, challenge_size),
        };
        positions.sort_unstable();

        tracing::debug!(word_count, challenge_size, "backup challenge generated");
        Ok(positions)
    }

    fn sample<R: Rng + ?Sized>(rng: &mut R, word_count: usize, challenge_size: usize) -> Vec<usize> {
        index::sample(rng, word_count, challenge_size).into_vec()
    }
}
