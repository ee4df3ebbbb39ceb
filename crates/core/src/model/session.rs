use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

use crate::model::{GameKind, GameMetrics, Participant, SessionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("metrics for {game} were already recorded")]
    AlreadyRecorded { game: GameKind },

    #[error("all {total} games have already completed")]
    GamesFinished { total: usize },

    #[error("quiz tally already holds {total} answers")]
    QuizTallyFull { total: u32 },
}

/// Mutable state for one assessment run, from intake to results.
///
/// Created at intake, threaded through every phase, and discarded when the
/// participant starts over; nothing here is persisted. All mutation goes
/// through this API — games and views only ever see narrow slices of it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSession {
    id: SessionId,
    participant: Participant,
    started_at: DateTime<Utc>,
    sequence: Vec<GameKind>,
    current_index: usize,
    metrics: HashMap<GameKind, GameMetrics>,
    quiz_score: f64,
    quiz_answered: u32,
    quiz_total: u32,
}

impl AssessmentSession {
    #[must_use]
    pub fn new(participant: Participant, started_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::generate(),
            participant,
            started_at,
            sequence: GameKind::SEQUENCE.to_vec(),
            current_index: 0,
            metrics: HashMap::new(),
            quiz_score: 0.0,
            quiz_answered: 0,
            quiz_total: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn sequence(&self) -> &[GameKind] {
        &self.sequence
    }

    /// The game waiting to run, or `None` once the sequence is exhausted.
    #[must_use]
    pub fn current_game(&self) -> Option<GameKind> {
        self.sequence.get(self.current_index).copied()
    }

    /// One-based position of the active game, for the "Game i of n" header.
    #[must_use]
    pub fn game_number(&self) -> usize {
        self.current_index + 1
    }

    #[must_use]
    pub fn games_total(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn games_finished(&self) -> bool {
        self.current_index >= self.sequence.len()
    }

    /// Store a game's completion payload and advance the sequence.
    ///
    /// A game reports exactly once; a second payload for the same game is
    /// rejected rather than overwriting the first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyRecorded` for a duplicate payload and
    /// `SessionError::GamesFinished` once the sequence is exhausted.
    pub fn record_metrics(&mut self, payload: GameMetrics) -> Result<(), SessionError> {
        if self.games_finished() {
            return Err(SessionError::GamesFinished {
                total: self.sequence.len(),
            });
        }
        let game = payload.kind();
        if self.metrics.contains_key(&game) {
            return Err(SessionError::AlreadyRecorded { game });
        }

        self.metrics.insert(game, payload);
        self.current_index += 1;
        Ok(())
    }

    #[must_use]
    pub fn metrics(&self, game: GameKind) -> Option<&GameMetrics> {
        self.metrics.get(&game)
    }

    //
    // ─── QUIZ TALLY ────────────────────────────────────────────────────────────
    //

    /// Reset the tally for a fresh quiz round with `total` questions.
    pub fn begin_quiz(&mut self, total: u32) {
        self.quiz_total = total;
        self.quiz_score = 0.0;
        self.quiz_answered = 0;
    }

    /// Credit points for one newly scored question.
    ///
    /// The caller (the quiz board) is responsible for the at-most-once
    /// guarantee per question; this only guards the overall count.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::QuizTallyFull` when every question already
    /// counted.
    pub fn record_quiz_points(&mut self, points: f64) -> Result<(), SessionError> {
        if self.quiz_answered >= self.quiz_total {
            return Err(SessionError::QuizTallyFull {
                total: self.quiz_total,
            });
        }
        self.quiz_score += points;
        self.quiz_answered += 1;
        Ok(())
    }

    #[must_use]
    pub fn quiz_score(&self) -> f64 {
        self.quiz_score
    }

    #[must_use]
    pub fn quiz_answered(&self) -> u32 {
        self.quiz_answered
    }

    #[must_use]
    pub fn quiz_total(&self) -> u32 {
        self.quiz_total
    }

    #[must_use]
    pub fn quiz_complete(&self) -> bool {
        self.quiz_total > 0 && self.quiz_answered == self.quiz_total
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
