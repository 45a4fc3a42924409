//! Verification session state machine.

use crate::error::VerificationError;
use crate::reporter::ResultReporter;
use crate::source::MnemonicSource;
use ember_types::{SeedWord, WalletId};
use serde::{Deserialize, Serialize};

/// One answered challenge position.
///
/// Immutable once handed out via [`VerificationSession::attempts_snapshot`];
/// the UI renders highlighting (for example a discard animation on an
/// incorrect entry) from these snapshots instead of sharing mutable state
/// with the session.
#[derive(Clone, Debug)]
pub struct WordAttempt {
    /// The challenged mnemonic position (0-based).
    pub position: usize,
    /// The word the user entered.
    pub candidate: SeedWord,
    /// Whether the candidate matched the stored word exactly.
    pub correct: bool,
}

/// Progress of a session, derived from how many positions are answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Created, no attempts recorded.
    Pending,
    /// Some but not all positions answered.
    InProgress,
    /// Every challenged position has an attempt.
    Complete,
}

/// Terminal verdict of a session, computed on demand once complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// Not every position is answered yet.
    Undetermined,
    /// Complete and every attempt correct.
    Passed,
    /// Complete with at least one incorrect attempt.
    Failed,
}

/// Tracks one backup verification attempt against a wallet's mnemonic.
///
/// The session borrows the wallet's [`MnemonicSource`] and is exclusively
/// owned by the UI flow that created it; dropping it before completion is
/// the cancellation path and has no side effects. At most one attempt is
/// held per position; re-answering requires an explicit
/// [`reset_attempt`](Self::reset_attempt).
pub struct VerificationSession<'a> {
    wallet: WalletId,
    source: &'a dyn MnemonicSource,
    /// Challenged positions, ascending.
    positions: Vec<usize>,
    attempts: Vec<WordAttempt>,
    /// Set once `report` has notified the reporter of a pass.
    reported: bool,
}

impl std::fmt::Debug for VerificationSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationSession")
            .field("wallet", &self.wallet)
            .field("positions", &self.positions)
            .field("attempts", &self.attempts)
            .field("reported", &self.reported)
            .finish_non_exhaustive()
    }
}

impl<'a> VerificationSession<'a> {
    /// Create a session over the given challenge positions.
    ///
    /// Positions are stored in ascending order. Fails with
    /// [`VerificationError::OutOfRange`] if any position is past the end of
    /// the phrase, [`VerificationError::DuplicatePosition`] if a position
    /// repeats, and [`VerificationError::InvalidChallengeSize`] if the set
    /// is empty (an empty challenge would pass vacuously).
    pub fn new(
        wallet: WalletId,
        source: &'a dyn MnemonicSource,
        mut positions: Vec<usize>,
    ) -> Result<Self, VerificationError> {
        let word_count = source.word_count();
        if positions.is_empty() {
            return Err(VerificationError::InvalidChallengeSize {
                size: 0,
                word_count,
            });
        }
        positions.sort_unstable();
        for pair in positions.windows(2) {
            if pair[0] == pair[1] {
                return Err(VerificationError::DuplicatePosition(pair[0]));
            }
        }
        if let Some(&last) = positions.last() {
            if last >= word_count {
                return Err(VerificationError::OutOfRange {
                    position: last,
                    word_count,
                });
            }
        }

        Ok(Self {
            wallet,
            source,
            positions,
            attempts: Vec::new(),
            reported: false,
        })
    }

    /// The wallet under verification.
    pub fn wallet(&self) -> &WalletId {
        &self.wallet
    }

    /// The challenged positions, ascending.
    pub fn challenge_positions(&self) -> &[usize] {
        &self.positions
    }

    /// Current progress.
    pub fn phase(&self) -> SessionPhase {
        if self.attempts.is_empty() {
            SessionPhase::Pending
        } else if self.attempts.len() < self.positions.len() {
            SessionPhase::InProgress
        } else {
            SessionPhase::Complete
        }
    }

    /// Whether every challenged position has an attempt.
    pub fn is_complete(&self) -> bool {
        self.attempts.len() == self.positions.len()
    }

    /// Record the user's candidate word for a challenged position.
    ///
    /// Fails with [`VerificationError::UnknownPosition`] when the position
    /// is not part of this challenge (even if it is a valid mnemonic index)
    /// and [`VerificationError::DuplicateAttempt`] when the position was
    /// already answered; overwriting silently could mask a wiring bug, so
    /// re-answering requires [`reset_attempt`](Self::reset_attempt) first.
    /// The candidate is compared against the stored word exactly: trimmed,
    /// case-sensitive.
    pub fn record_attempt(
        &mut self,
        position: usize,
        candidate: SeedWord,
    ) -> Result<(), VerificationError> {
        if !self.positions.contains(&position) {
            return Err(VerificationError::UnknownPosition(position));
        }
        if self.attempts.iter().any(|a| a.position == position) {
            return Err(VerificationError::DuplicateAttempt(position));
        }

        let expected = self.source.word_at(position)?;
        let correct = expected == candidate;
        self.attempts.push(WordAttempt {
            position,
            candidate,
            correct,
        });

        tracing::debug!(
            position,
            correct,
            answered = self.attempts.len(),
            expected = self.positions.len(),
            "seed word attempt recorded"
        );
        Ok(())
    }

    /// Clear a prior attempt so the position can be answered again.
    ///
    /// Legal at any point; clearing a position with no recorded attempt is
    /// a no-op. A `Complete` session moves back to `InProgress`. Fails with
    /// [`VerificationError::UnknownPosition`] when the position is not part
    /// of this challenge.
    pub fn reset_attempt(&mut self, position: usize) -> Result<(), VerificationError> {
        if !self.positions.contains(&position) {
            return Err(VerificationError::UnknownPosition(position));
        }
        self.attempts.retain(|a| a.position != position);
        Ok(())
    }

    /// The verdict so far: `Undetermined` until complete, then `Passed`
    /// exactly when every attempt is correct.
    pub fn outcome(&self) -> SessionOutcome {
        if !self.is_complete() {
            SessionOutcome::Undetermined
        } else if self.attempts.iter().all(|a| a.correct) {
            SessionOutcome::Passed
        } else {
            SessionOutcome::Failed
        }
    }

    /// Strict pass query. Fails with
    /// [`VerificationError::IncompleteSession`] before every position is
    /// answered; callers that prefer a soft query use
    /// [`outcome`](Self::outcome) instead.
    pub fn is_passed(&self) -> Result<bool, VerificationError> {
        if !self.is_complete() {
            return Err(VerificationError::IncompleteSession {
                answered: self.attempts.len(),
                expected: self.positions.len(),
            });
        }
        Ok(self.outcome() == SessionOutcome::Passed)
    }

    /// Immutable view of the attempts recorded so far, ascending by
    /// position, for UI highlighting.
    pub fn attempts_snapshot(&self) -> Vec<WordAttempt> {
        let mut snapshot = self.attempts.clone();
        snapshot.sort_unstable_by_key(|a| a.position);
        snapshot
    }

    /// Finalize the session against a reporter.
    ///
    /// Fails with [`VerificationError::IncompleteSession`] before every
    /// position is answered. On `Passed`, notifies the reporter exactly
    /// once across the session's lifetime; repeated calls return the
    /// outcome without reporting again. A `Failed` outcome is returned but
    /// never reported.
    pub fn report(
        &mut self,
        reporter: &mut dyn ResultReporter,
    ) -> Result<SessionOutcome, VerificationError> {
        if !self.is_complete() {
            return Err(VerificationError::IncompleteSession {
                answered: self.attempts.len(),
                expected: self.positions.len(),
            });
        }

        let outcome = self.outcome();
        if outcome == SessionOutcome::Passed && !self.reported {
            reporter.report_verified(&self.wallet);
            self.reported = true;
            tracing::info!(wallet = %self.wallet, "seed backup verified");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory source over a fixed word list.
    struct TestSource {
        words: Vec<SeedWord>,
    }

    impl TestSource {
        fn twelve() -> Self {
            let words = [
                "abandon", "ability", "able", "about", "above", "absent", "absorb", "abstract",
                "absurd", "abuse", "access", "zoo",
            ];
            Self {
                words: words.iter().map(SeedWord::new).collect(),
            }
        }
    }

    impl MnemonicSource for TestSource {
        fn word_count(&self) -> usize {
            self.words.len()
        }

        fn word_at(&self, position: usize) -> Result<SeedWord, VerificationError> {
            self.words
                .get(position)
                .cloned()
                .ok_or(VerificationError::OutOfRange {
                    position,
                    word_count: self.words.len(),
                })
        }
    }

    /// Reporter that counts invocations.
    #[derive(Default)]
    struct RecordingReporter {
        verified: Vec<WalletId>,
    }

    impl ResultReporter for RecordingReporter {
        fn report_verified(&mut self, wallet: &WalletId) {
            self.verified.push(wallet.clone());
        }
    }

    fn wallet() -> WalletId {
        WalletId::new("primary")
    }

    fn session<'a>(source: &'a TestSource, positions: Vec<usize>) -> VerificationSession<'a> {
        VerificationSession::new(wallet(), source, positions).unwrap()
    }

    // ── Construction ────────────────────────────────────────────────────

    #[test]
    fn new_sorts_positions() {
        let source = TestSource::twelve();
        let s = session(&source, vec![9, 2, 5]);
        assert_eq!(s.challenge_positions(), &[2, 5, 9]);
    }

    #[test]
    fn new_rejects_out_of_range_position() {
        let source = TestSource::twelve();
        let err = VerificationSession::new(wallet(), &source, vec![2, 12]).unwrap_err();
        assert!(matches!(
            err,
            VerificationError::OutOfRange { position: 12, word_count: 12 }
        ));
    }

    #[test]
    fn new_rejects_duplicate_positions() {
        let source = TestSource::twelve();
        let err = VerificationSession::new(wallet(), &source, vec![5, 2, 5]).unwrap_err();
        assert!(matches!(err, VerificationError::DuplicatePosition(5)));
    }

    #[test]
    fn new_rejects_empty_challenge() {
        let source = TestSource::twelve();
        let err = VerificationSession::new(wallet(), &source, vec![]).unwrap_err();
        assert!(matches!(
            err,
            VerificationError::InvalidChallengeSize { size: 0, .. }
        ));
    }

    // ── Phase transitions ───────────────────────────────────────────────

    #[test]
    fn phases_progress_with_attempts() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5, 9]);
        assert_eq!(s.phase(), SessionPhase::Pending);
        assert!(!s.is_complete());

        s.record_attempt(2, SeedWord::new("able")).unwrap();
        assert_eq!(s.phase(), SessionPhase::InProgress);

        s.record_attempt(5, SeedWord::new("absent")).unwrap();
        assert_eq!(s.phase(), SessionPhase::InProgress);

        s.record_attempt(9, SeedWord::new("abuse")).unwrap();
        assert_eq!(s.phase(), SessionPhase::Complete);
        assert!(s.is_complete());
    }

    #[test]
    fn outcome_undetermined_until_complete() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![0, 1]);
        assert_eq!(s.outcome(), SessionOutcome::Undetermined);

        s.record_attempt(0, SeedWord::new("abandon")).unwrap();
        assert_eq!(s.outcome(), SessionOutcome::Undetermined);
        assert!(matches!(
            s.is_passed(),
            Err(VerificationError::IncompleteSession { answered: 1, expected: 2 })
        ));
    }

    // ── Answer checking ─────────────────────────────────────────────────

    #[test]
    fn all_correct_passes() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5, 9]);
        s.record_attempt(2, SeedWord::new("able")).unwrap();
        s.record_attempt(5, SeedWord::new("absent")).unwrap();
        s.record_attempt(9, SeedWord::new("abuse")).unwrap();
        assert_eq!(s.outcome(), SessionOutcome::Passed);
        assert!(s.is_passed().unwrap());
    }

    #[test]
    fn single_wrong_word_fails() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5, 9]);
        s.record_attempt(2, SeedWord::new("able")).unwrap();
        s.record_attempt(5, SeedWord::new("zoo")).unwrap();
        s.record_attempt(9, SeedWord::new("abuse")).unwrap();
        assert_eq!(s.outcome(), SessionOutcome::Failed);
        assert!(!s.is_passed().unwrap());

        let snapshot = s.attempts_snapshot();
        assert!(snapshot[0].correct);
        assert!(!snapshot[1].correct);
        assert!(snapshot[2].correct);
    }

    #[test]
    fn comparison_trims_but_keeps_case() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5]);
        s.record_attempt(2, SeedWord::new("  able \n")).unwrap();
        s.record_attempt(5, SeedWord::new("Absent")).unwrap();

        let snapshot = s.attempts_snapshot();
        assert!(snapshot[0].correct, "trimmed candidate must match");
        assert!(!snapshot[1].correct, "comparison must be case-sensitive");
    }

    // ── Protocol violations ─────────────────────────────────────────────

    #[test]
    fn unknown_position_rejected_even_if_valid_index() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5, 9]);
        // 3 is a valid mnemonic index but not part of the challenge.
        let err = s.record_attempt(3, SeedWord::new("about")).unwrap_err();
        assert!(matches!(err, VerificationError::UnknownPosition(3)));
    }

    #[test]
    fn duplicate_attempt_rejected() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5]);
        s.record_attempt(2, SeedWord::new("able")).unwrap();
        let err = s.record_attempt(2, SeedWord::new("able")).unwrap_err();
        assert!(matches!(err, VerificationError::DuplicateAttempt(2)));
    }

    #[test]
    fn reset_allows_reanswer_and_reopens_session() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5]);
        s.record_attempt(2, SeedWord::new("wrong")).unwrap();
        s.record_attempt(5, SeedWord::new("absent")).unwrap();
        assert_eq!(s.phase(), SessionPhase::Complete);
        assert_eq!(s.outcome(), SessionOutcome::Failed);

        s.reset_attempt(2).unwrap();
        assert_eq!(s.phase(), SessionPhase::InProgress);
        assert_eq!(s.outcome(), SessionOutcome::Undetermined);

        s.record_attempt(2, SeedWord::new("able")).unwrap();
        assert_eq!(s.outcome(), SessionOutcome::Passed);
    }

    #[test]
    fn reset_of_unanswered_position_is_noop() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5]);
        s.reset_attempt(5).unwrap();
        assert_eq!(s.phase(), SessionPhase::Pending);
    }

    #[test]
    fn reset_outside_challenge_rejected() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5]);
        let err = s.reset_attempt(7).unwrap_err();
        assert!(matches!(err, VerificationError::UnknownPosition(7)));
    }

    // ── Snapshots ───────────────────────────────────────────────────────

    #[test]
    fn snapshot_is_ordered_by_position_regardless_of_entry_order() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2, 5, 9]);
        s.record_attempt(9, SeedWord::new("abuse")).unwrap();
        s.record_attempt(2, SeedWord::new("able")).unwrap();
        s.record_attempt(5, SeedWord::new("absent")).unwrap();

        let positions: Vec<usize> = s.attempts_snapshot().iter().map(|a| a.position).collect();
        assert_eq!(positions, vec![2, 5, 9]);
    }

    #[test]
    fn snapshot_debug_does_not_leak_candidates() {
        let source = TestSource::twelve();
        let mut s = session(&source, vec![2]);
        s.record_attempt(2, SeedWord::new("able")).unwrap();
        let debug = format!("{:?}", s.attempts_snapshot());
        assert!(!debug.contains("able"));
    }

    // ── Reporting ───────────────────────────────────────────────────────

    #[test]
    fn passed_session_reports_exactly_once() {
        let source = TestSource::twelve();
        let mut reporter = RecordingReporter::default();
        let mut s = session(&source, vec![0]);
        s.record_attempt(0, SeedWord::new("abandon")).unwrap();

        assert_eq!(s.report(&mut reporter).unwrap(), SessionOutcome::Passed);
        assert_eq!(s.report(&mut reporter).unwrap(), SessionOutcome::Passed);
        assert!(s.is_passed().unwrap());
        assert_eq!(s.report(&mut reporter).unwrap(), SessionOutcome::Passed);

        assert_eq!(reporter.verified, vec![wallet()]);
    }

    #[test]
    fn failed_session_never_reports() {
        let source = TestSource::twelve();
        let mut reporter = RecordingReporter::default();
        let mut s = session(&source, vec![0]);
        s.record_attempt(0, SeedWord::new("zoo")).unwrap();

        assert_eq!(s.report(&mut reporter).unwrap(), SessionOutcome::Failed);
        assert!(reporter.verified.is_empty());
    }

    #[test]
    fn incomplete_session_cannot_report() {
        let source = TestSource::twelve();
        let mut reporter = RecordingReporter::default();
        let mut s = session(&source, vec![0, 1]);
        s.record_attempt(0, SeedWord::new("abandon")).unwrap();

        assert!(matches!(
            s.report(&mut reporter),
            Err(VerificationError::IncompleteSession { answered: 1, expected: 2 })
        ));
        assert!(reporter.verified.is_empty());
    }

    #[test]
    fn reset_after_report_does_not_report_twice() {
        // A pass that was already reported stays reported even if the UI
        // reopens and re-answers the position.
        let source = TestSource::twelve();
        let mut reporter = RecordingReporter::default();
        let mut s = session(&source, vec![0]);
        s.record_attempt(0, SeedWord::new("abandon")).unwrap();
        s.report(&mut reporter).unwrap();

        s.reset_attempt(0).unwrap();
        s.record_attempt(0, SeedWord::new("abandon")).unwrap();
        s.report(&mut reporter).unwrap();

        assert_eq!(reporter.verified.len(), 1);
    }
}
