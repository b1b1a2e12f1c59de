//! The Round entity: one play-through from word selection to game-over.
//!
//! A Round is owned by exactly one session. It is reconstructed from its
//! snapshot on every request and written back after mutation; nothing here
//! touches the wall clock or any I/O — callers pass `OffsetDateTime` /
//! `Date` values in, so tests can drive time deterministically.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::domain::scoring::decayed_score;
use crate::domain::snapshot::RoundSnapshot;
use crate::errors::domain::DomainError;

/// Character marking an unrevealed letter position.
pub const PLACEHOLDER: char = '#';
/// Incorrect guesses allowed before a round is lost.
pub const STARTING_TRIES: u8 = 5;
/// Base score at the start of a round.
pub const STARTING_SCORE: i64 = 1000;
/// Points deducted from the base score per incorrect guess.
pub const MISS_PENALTY: i64 = 50;

/// Round progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Letters may still be guessed.
    InProgress,
    /// Every position revealed. Terminal.
    Won,
    /// Tries exhausted without a full reveal. Terminal.
    Lost,
}

/// Everything a finished round persists to the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub player_name: String,
    pub score: i64,
    pub word: String,
}

/// One in-progress or finished game.
///
/// Invariants held by construction and every mutation:
/// - `revealed == word` iff the round is won
/// - `tries_left == 0` iff the round is lost by exhaustion
/// - a guess decrements tries only when it is incorrect
/// - `ended_at` is set exactly once, at the game-over transition
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    word: String,
    revealed: String,
    tries_left: u8,
    base_score: i64,
    guessed: BTreeSet<char>,
    started_at: OffsetDateTime,
    ended_at: Option<OffsetDateTime>,
    player_name: String,
    score_submitted: bool,
    last_played: Option<Date>,
}

fn masked(word: &str) -> String {
    word.chars().map(|_| PLACEHOLDER).collect()
}

fn normalize_word(word: &str) -> Result<String, DomainError> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(DomainError::invalid_state(
            "a round cannot start without a target word",
        ));
    }
    Ok(word)
}

impl Round {
    /// Start a round with an explicit target word.
    ///
    /// An empty word is a fatal `InvalidState`; a Round never fabricates a
    /// default word.
    pub fn new(word: &str, started_at: OffsetDateTime) -> Result<Self, DomainError> {
        let word = normalize_word(word)?;
        let revealed = masked(&word);
        Ok(Self {
            word,
            revealed,
            tries_left: STARTING_TRIES,
            base_score: STARTING_SCORE,
            guessed: BTreeSet::new(),
            started_at,
            ended_at: None,
            player_name: String::new(),
            score_submitted: false,
            last_played: None,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    pub fn tries_left(&self) -> u8 {
        self.tries_left
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<OffsetDateTime> {
        self.ended_at
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score_submitted(&self) -> bool {
        self.score_submitted
    }

    pub fn last_played(&self) -> Option<Date> {
        self.last_played
    }

    /// Apply one guess. Returns whether at least one position matched.
    ///
    /// The attempt is case-folded before matching or recording. After
    /// game-over this is a pure no-op returning `false`. Any attempt that
    /// matches no position — including empty, multi-character, or
    /// non-alphabetic input — counts as a miss: one try consumed, 50 points
    /// off the base score (both floored at zero).
    pub fn guess(&mut self, attempt: &str, now: OffsetDateTime) -> bool {
        if self.is_game_over() {
            return false;
        }

        let attempt = attempt.to_lowercase();
        let mut chars = attempt.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        // Idempotent: re-guessing a letter does not duplicate it.
        if let Some(c) = single {
            self.guessed.insert(c);
        }

        let found = match single {
            Some(c) => self.reveal(c),
            None => false,
        };

        if !found {
            self.tries_left = self.tries_left.saturating_sub(1);
            self.base_score = (self.base_score - MISS_PENALTY).max(0);
        }

        // Capture the end instant at the transition, not lazily: the score
        // must freeze exactly here.
        if self.is_game_over() && self.ended_at.is_none() {
            self.ended_at = Some(now);
        }

        found
    }

    fn reveal(&mut self, letter: char) -> bool {
        let mut found = false;
        self.revealed = self
            .word
            .chars()
            .zip(self.revealed.chars())
            .map(|(w, r)| {
                if w == letter {
                    found = true;
                    w
                } else {
                    r
                }
            })
            .collect();
        found
    }

    pub fn is_won(&self) -> bool {
        self.revealed == self.word
    }

    pub fn is_game_over(&self) -> bool {
        self.tries_left == 0 || self.is_won()
    }

    /// Derived state-machine view of the round.
    pub fn phase(&self) -> Phase {
        if self.is_won() {
            Phase::Won
        } else if self.tries_left == 0 {
            Phase::Lost
        } else {
            Phase::InProgress
        }
    }

    /// Time-decayed score as of `now`; frozen once the round is over.
    pub fn score_at(&self, now: OffsetDateTime) -> i64 {
        decayed_score(self.base_score, self.started_at, self.ended_at, now)
    }

    /// Guessed letters sorted lexicographically, joined with `", "`.
    pub fn guessed_display(&self) -> String {
        let mut out = String::new();
        for (i, c) in self.guessed.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push(*c);
        }
        out
    }

    /// Whether the daily gate allows starting a new round.
    ///
    /// Calendar-date comparison only; time of day is irrelevant.
    pub fn can_play_today(&self, today: Date) -> bool {
        match self.last_played {
            None => true,
            Some(day) => day < today,
        }
    }

    /// Replace the round wholesale with a fresh one for `new_word`.
    ///
    /// Consults the daily gate first and fails with `DailyLimitExceeded`
    /// without touching any state; on success the gate records `today`.
    pub fn reset(
        &mut self,
        new_word: &str,
        today: Date,
        now: OffsetDateTime,
    ) -> Result<(), DomainError> {
        if !self.can_play_today(today) {
            return Err(DomainError::DailyLimitExceeded);
        }
        let word = normalize_word(new_word)?;
        self.revealed = masked(&word);
        self.word = word;
        self.tries_left = STARTING_TRIES;
        self.base_score = STARTING_SCORE;
        self.guessed.clear();
        self.started_at = now;
        self.ended_at = None;
        self.player_name.clear();
        self.score_submitted = false;
        self.last_played = Some(today);
        Ok(())
    }

    /// Record the name the score will be submitted under.
    ///
    /// Ignored once the score has been submitted.
    pub fn set_player_name(&mut self, name: &str) {
        if self.score_submitted {
            return;
        }
        self.player_name = name.trim().to_string();
    }

    /// The leaderboard entry this round is ready to persist, if any.
    ///
    /// `None` unless the round is won, the player named, and no submission
    /// has happened yet. The caller persists the entry and then calls
    /// [`Round::mark_score_submitted`].
    pub fn score_submission(&self, now: OffsetDateTime) -> Option<ScoreSubmission> {
        if !self.is_won() || self.player_name.is_empty() || self.score_submitted {
            return None;
        }
        Some(ScoreSubmission {
            player_name: self.player_name.clone(),
            score: self.score_at(now),
            word: self.word.clone(),
        })
    }

    /// Irreversible for the lifetime of the round; only reset clears it.
    pub fn mark_score_submitted(&mut self) {
        self.score_submitted = true;
    }

    /// Serialize into the record shape carried by the session store.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            word: self.word.clone(),
            revealed: self.revealed.clone(),
            tries_left: self.tries_left,
            base_score: self.base_score,
            guessed: self.guessed.iter().copied().collect(),
            started_at: self.started_at,
            ended_at: self.ended_at,
            player_name: self.player_name.clone(),
            score_submitted: self.score_submitted,
            last_played: self.last_played,
        }
    }

    /// Rebuild a Round from a previously serialized record.
    ///
    /// The record must be fully formed: restoring from a malformed one is a
    /// fatal `InvalidState` and never yields a partially-initialized Round.
    /// Guessed-letter order is not significant and duplicates collapse.
    pub fn from_snapshot(snapshot: &RoundSnapshot) -> Result<Self, DomainError> {
        let word = snapshot.word.to_lowercase();
        if word.is_empty() {
            return Err(DomainError::invalid_state(
                "round state has no target word",
            ));
        }
        if snapshot.revealed.chars().count() != word.chars().count() {
            return Err(DomainError::invalid_state(format!(
                "revealed pattern length {} does not match word length {}",
                snapshot.revealed.chars().count(),
                word.chars().count()
            )));
        }
        for (w, r) in word.chars().zip(snapshot.revealed.chars()) {
            if r != PLACEHOLDER && r != w {
                return Err(DomainError::invalid_state(format!(
                    "revealed pattern character {r:?} matches neither the word nor the placeholder"
                )));
            }
        }
        if snapshot.base_score < 0 {
            return Err(DomainError::invalid_state("negative base score"));
        }

        Ok(Self {
            word,
            revealed: snapshot.revealed.clone(),
            tries_left: snapshot.tries_left,
            base_score: snapshot.base_score,
            guessed: snapshot.guessed.iter().copied().collect(),
            started_at: snapshot.started_at,
            ended_at: snapshot.ended_at,
            player_name: snapshot.player_name.clone(),
            score_submitted: snapshot.score_submitted,
            last_played: snapshot.last_played,
        })
    }
}
