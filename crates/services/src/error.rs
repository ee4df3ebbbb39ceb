//! Shared error types for the services crate.

use thiserror::Error;

use recall_core::model::{QuizError, SessionError};
use storage::repository::StorageError;

/// Errors emitted by the backend gateway.
///
/// There is deliberately no timeout or retry layer here: a stalled request
/// simply keeps the caller waiting, matching the backend contract.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("backend request failed with status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `GameOrchestrator`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OrchestratorError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("answer must not be empty")]
    EmptyAnswer,
    #[error("original story context is missing")]
    MissingStory,
    #[error("question {index} was already checked")]
    AlreadyChecked { index: usize },
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),
}

/// Errors emitted by `PreferencesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreferencesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
