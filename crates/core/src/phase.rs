use thiserror::Error;

/// The five screens of an assessment, exactly one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Start,
    Storytelling,
    Game,
    Quiz,
    Results,
}

impl Phase {
    /// Stable identifier, used for logging and view container ids.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Storytelling => "storytelling",
            Phase::Game => "game",
            Phase::Quiz => "quiz",
            Phase::Results => "results",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot move from {from:?} to {to:?}")]
pub struct PhaseError {
    pub from: Phase,
    pub to: Phase,
}

/// Single-active-view state machine for the assessment flow.
///
/// Transitions only move forward along
/// Start → Storytelling → Game → Quiz → Results; anything else is an
/// error. Starting over means dropping the machine and building a new one,
/// the same way a page reload drops the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseMachine {
    current: Phase,
}

impl PhaseMachine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Phase::Start,
        }
    }

    #[must_use]
    pub fn current(&self) -> Phase {
        self.current
    }

    /// # Errors
    ///
    /// Returns `PhaseError` unless the machine is at `Start`.
    pub fn begin_storytelling(&mut self) -> Result<Phase, PhaseError> {
        self.step(Phase::Start, Phase::Storytelling)
    }

    /// # Errors
    ///
    /// Returns `PhaseError` unless the machine is at `Storytelling`.
    pub fn begin_games(&mut self) -> Result<Phase, PhaseError> {
        self.step(Phase::Storytelling, Phase::Game)
    }

    /// # Errors
    ///
    /// Returns `PhaseError` unless the machine is at `Game`.
    pub fn begin_quiz(&mut self) -> Result<Phase, PhaseError> {
        self.step(Phase::Game, Phase::Quiz)
    }

    /// # Errors
    ///
    /// Returns `PhaseError` unless the machine is at `Quiz`.
    pub fn show_results(&mut self) -> Result<Phase, PhaseError> {
        self.step(Phase::Quiz, Phase::Results)
    }

    fn step(&mut self, from: Phase, to: Phase) -> Result<Phase, PhaseError> {
        if self.current != from {
            return Err(PhaseError {
                from: self.current,
                to,
            });
        }
        self.current = to;
        Ok(to)
    }
}
