use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use recall_core::model::{AssessmentSession, GameKind, GameMetrics, Participant};
use recall_core::scoring::{self, FinalResults};

use crate::error::OrchestratorError;

/// Pause between a game reporting completion and the next game (or the
/// quiz) being shown.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1_500);

/// What comes after a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Another game is waiting in the sequence.
    Game(GameKind),
    /// The sequence is exhausted; hand off to the quiz.
    Quiz,
}

/// Drives the fixed game sequence and custodians the session state.
///
/// Each game is trusted to report completion exactly once; the session
/// itself rejects duplicates, so a misbehaving game surfaces as an error
/// here instead of silently skewing the scores. There are no retries —
/// the UI sleeps [`ADVANCE_DELAY`] and asks for the next step.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOrchestrator {
    session: AssessmentSession,
}

impl GameOrchestrator {
    /// Start a fresh session for a validated participant.
    #[must_use]
    pub fn new(participant: Participant, started_at: DateTime<Utc>) -> Self {
        Self {
            session: AssessmentSession::new(participant, started_at),
        }
    }

    #[must_use]
    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    /// The game that should be running right now, `None` after the last.
    #[must_use]
    pub fn current_game(&self) -> Option<GameKind> {
        self.session.current_game()
    }

    /// One-based position for the "Cognitive Game i of n" header.
    #[must_use]
    pub fn game_number(&self) -> usize {
        self.session.game_number()
    }

    #[must_use]
    pub fn games_total(&self) -> usize {
        self.session.games_total()
    }

    #[must_use]
    pub fn games_finished(&self) -> bool {
        self.session.games_finished()
    }

    /// Store a completion payload and report what to show next.
    ///
    /// # Errors
    ///
    /// Returns `OrchestratorError` when the payload duplicates an earlier
    /// one or arrives after the sequence ended.
    pub fn record_completion(
        &mut self,
        payload: GameMetrics,
    ) -> Result<NextStep, OrchestratorError> {
        let game = payload.kind();
        self.session.record_metrics(payload)?;
        debug!(session = %self.session.id(), %game, "game completed");

        Ok(match self.session.current_game() {
            Some(next) => NextStep::Game(next),
            None => NextStep::Quiz,
        })
    }

    //
    // ─── QUIZ TALLY ────────────────────────────────────────────────────────────
    //

    /// Reset the quiz tally for a round of `total` questions.
    pub fn begin_quiz(&mut self, total: u32) {
        debug!(session = %self.session.id(), total, "quiz started");
        self.session.begin_quiz(total);
    }

    /// Credit one newly scored question.
    ///
    /// # Errors
    ///
    /// Returns `OrchestratorError` when every question already counted.
    pub fn record_quiz_points(&mut self, points: f64) -> Result<(), OrchestratorError> {
        self.session.record_quiz_points(points)?;
        Ok(())
    }

    #[must_use]
    pub fn quiz_complete(&self) -> bool {
        self.session.quiz_complete()
    }

    /// Final scores and risk band for the results screen.
    #[must_use]
    pub fn results(&self) -> FinalResults {
        scoring::evaluate(&self.session)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
