#![forbid(unsafe_code)]

pub mod error;
pub mod gateway;
pub mod orchestrator;
pub mod preferences_service;
pub mod quiz_service;

pub use recall_core::Clock;

pub use error::{GatewayError, OrchestratorError, PreferencesError, QuizServiceError};
pub use gateway::{AnswerCheck, BackendGateway, HttpBackendGateway, StoryPackage};
pub use orchestrator::{ADVANCE_DELAY, GameOrchestrator, NextStep};
pub use preferences_service::PreferencesService;
pub use quiz_service::{CheckedAnswer, QuizService};
