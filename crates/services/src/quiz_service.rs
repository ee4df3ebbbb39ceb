use std::sync::Arc;

use tracing::debug;

use recall_core::model::{QuizBoard, ScoreOutcome, Verdict};

use crate::error::QuizServiceError;
use crate::gateway::BackendGateway;
use crate::orchestrator::GameOrchestrator;

/// What the quiz view needs to render after one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedAnswer {
    pub verdict: Verdict,
    pub feedback: String,
}

/// Answer checking for the story-recall quiz.
///
/// The service is stateless; per-question state lives on the `QuizBoard`
/// and the running tally on the orchestrator's session. The board's
/// scored marker makes checking idempotent — a question that was already
/// checked is refused before any network traffic happens, so neither
/// repeated clicks nor duplicated responses can double-count.
#[derive(Clone)]
pub struct QuizService {
    gateway: Arc<dyn BackendGateway>,
}

impl QuizService {
    #[must_use]
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }

    /// Verify one answer against the story and credit its points.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError` for a blank answer, a missing story,
    /// an already-checked question, an unknown index, or a gateway
    /// failure. Gateway failures leave the question uncounted so the
    /// participant can try the same question again.
    pub async fn check(
        &self,
        story: &str,
        board: &mut QuizBoard,
        orchestrator: &mut GameOrchestrator,
        index: usize,
        answer: &str,
    ) -> Result<CheckedAnswer, QuizServiceError> {
        if story.trim().is_empty() {
            return Err(QuizServiceError::MissingStory);
        }
        if answer.trim().is_empty() {
            return Err(QuizServiceError::EmptyAnswer);
        }
        if board.is_scored(index) {
            return Err(QuizServiceError::AlreadyChecked { index });
        }
        let Some(question) = board.question(index).map(str::to_owned) else {
            return Err(recall_core::model::QuizError::UnknownQuestion { index }.into());
        };

        let check = self.gateway.check_answer(story, &question, answer).await?;

        match board.record(index, check.verdict)? {
            ScoreOutcome::Scored { points } => {
                orchestrator.record_quiz_points(points)?;
                debug!(index, verdict = check.verdict.label(), points, "answer checked");
            }
            // The guard above makes this unreachable in practice, but a
            // repeat must never touch the tally.
            ScoreOutcome::AlreadyScored => {}
        }

        Ok(CheckedAnswer {
            verdict: check.verdict,
            feedback: check.feedback,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    use recall_core::model::{EducationLevel, IntakeDraft};
    use recall_core::time::fixed_now;

    use crate::error::GatewayError;
    use crate::gateway::{AnswerCheck, StoryPackage};

    struct ScriptedGateway {
        verdict: Verdict,
        calls: AtomicU32,
        fail: bool,
    }

    impl ScriptedGateway {
        fn new(verdict: Verdict) -> Self {
            Self {
                verdict,
                calls: AtomicU32::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                verdict: Verdict::Consistent,
                calls: AtomicU32::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl BackendGateway for ScriptedGateway {
        async fn process_audio(&self, _audio: &str) -> Result<StoryPackage, GatewayError> {
            Ok(StoryPackage {
                story: "story".into(),
                questions: vec!["q1".into(), "q2".into(), "q3".into()],
            })
        }

        async fn check_answer(
            &self,
            _story: &str,
            _question: &str,
            _answer: &str,
        ) -> Result<AnswerCheck, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(GatewayError::HttpStatus {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    body: "down".into(),
                });
            }
            Ok(AnswerCheck {
                verdict: self.verdict,
                feedback: "noted".into(),
            })
        }

        async fn analyze(
            &self,
            _transcript_s1: &str,
            _metrics: serde_json::Value,
            _transcript_s2: &str,
        ) -> Result<serde_json::Value, GatewayError> {
            Ok(serde_json::Value::Null)
        }
    }

    fn setup(verdict: Verdict) -> (Arc<ScriptedGateway>, QuizService, QuizBoard, GameOrchestrator)
    {
        let gateway = Arc::new(ScriptedGateway::new(verdict));
        let service = QuizService::new(Arc::clone(&gateway) as Arc<dyn BackendGateway>);
        let board = QuizBoard::new(vec!["q1".into(), "q2".into(), "q3".into()]);
        let participant = IntakeDraft {
            name: "N".into(),
            age: Some(66),
            education: Some(EducationLevel::TwelveYearsOrMore),
        }
        .validate()
        .unwrap();
        let mut orchestrator = GameOrchestrator::new(participant, fixed_now());
        orchestrator.begin_quiz(3);
        (gateway, service, board, orchestrator)
    }

    #[tokio::test]
    async fn consistent_answer_scores_four_points() {
        let (_gateway, service, mut board, mut orchestrator) = setup(Verdict::Consistent);

        let checked = service
            .check("story", &mut board, &mut orchestrator, 0, "an answer")
            .await
            .unwrap();
        assert_eq!(checked.verdict, Verdict::Consistent);
        assert_eq!(checked.feedback, "noted");
        assert_eq!(orchestrator.session().quiz_score(), 4.0);
        assert_eq!(orchestrator.session().quiz_answered(), 1);
    }

    #[tokio::test]
    async fn rechecking_is_refused_without_a_network_call() {
        let (gateway, service, mut board, mut orchestrator) = setup(Verdict::Consistent);

        service
            .check("story", &mut board, &mut orchestrator, 0, "first")
            .await
            .unwrap();
        let err = service
            .check("story", &mut board, &mut orchestrator, 0, "second")
            .await
            .unwrap_err();

        assert!(matches!(err, QuizServiceError::AlreadyChecked { index: 0 }));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        assert_eq!(orchestrator.session().quiz_score(), 4.0);
    }

    #[tokio::test]
    async fn blank_answer_and_missing_story_are_guarded_locally() {
        let (gateway, service, mut board, mut orchestrator) = setup(Verdict::Consistent);

        let err = service
            .check("story", &mut board, &mut orchestrator, 0, "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, QuizServiceError::EmptyAnswer));

        let err = service
            .check("", &mut board, &mut orchestrator, 0, "answer")
            .await
            .unwrap_err();
        assert!(matches!(err, QuizServiceError::MissingStory));

        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn gateway_failure_leaves_the_question_retryable() {
        let gateway = Arc::new(ScriptedGateway::failing());
        let service = QuizService::new(Arc::clone(&gateway) as Arc<dyn BackendGateway>);
        let mut board = QuizBoard::new(vec!["q1".into()]);
        let participant = IntakeDraft {
            name: "N".into(),
            age: Some(66),
            education: Some(EducationLevel::TwelveYearsOrMore),
        }
        .validate()
        .unwrap();
        let mut orchestrator = GameOrchestrator::new(participant, fixed_now());
        orchestrator.begin_quiz(1);

        let err = service
            .check("story", &mut board, &mut orchestrator, 0, "answer")
            .await
            .unwrap_err();
        assert!(matches!(err, QuizServiceError::Gateway(_)));
        assert!(!board.is_scored(0));
        assert_eq!(orchestrator.session().quiz_answered(), 0);
    }

    #[tokio::test]
    async fn needs_elaboration_scores_two() {
        let (_gateway, service, mut board, mut orchestrator) = setup(Verdict::NeedsElaboration);
        service
            .check("story", &mut board, &mut orchestrator, 2, "short answer")
            .await
            .unwrap();
        assert_eq!(orchestrator.session().quiz_score(), 2.0);
    }
}
