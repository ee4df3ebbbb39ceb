use thiserror::Error;

use crate::model::{BackendSettingsError, IntakeError, QuizError, SessionError};
use crate::phase::PhaseError;

/// Umbrella error for callers that do not care which domain rule fired.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Phase(#[from] PhaseError),
    #[error(transparent)]
    BackendSettings(#[from] BackendSettingsError),
}
