mod ids;
mod metrics;
mod participant;
mod preferences;
mod quiz;
mod session;

pub use ids::SessionId;
pub use metrics::{
    DigitSpanMetrics, GameKind, GameMetrics, MatchingMetrics, NamingMetrics, TrailMetrics,
};
pub use participant::{
    EducationLevel, IntakeDraft, IntakeError, MAX_AGE, MIN_AGE, Participant,
};
pub use preferences::{BackendSettings, BackendSettingsError, Theme};
pub use quiz::{
    POINTS_CONSISTENT, POINTS_NEEDS_ELABORATION, QuizBoard, QuizError, ScoreOutcome, Verdict,
};
pub use session::{AssessmentSession, SessionError};
