use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use recall_core::model::{BackendSettings, BackendSettingsError, Verdict};

use crate::error::GatewayError;

/// Backend reached when neither `--backend-url` nor the environment says
/// otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const BASE_URL_ENV: &str = "RECALL_BACKEND_URL";

//
// ─── PUBLIC RESPONSE TYPES ─────────────────────────────────────────────────────
//

/// Transcribed story plus the follow-up questions generated from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPackage {
    pub story: String,
    pub questions: Vec<String>,
}

impl StoryPackage {
    /// The backend can legitimately come back with zero questions (story
    /// too short or unclear); the quiz cannot run in that case.
    #[must_use]
    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }
}

/// Verdict and explanation for one checked answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCheck {
    pub verdict: Verdict,
    pub feedback: String,
}

//
// ─── GATEWAY CONTRACT ──────────────────────────────────────────────────────────
//

/// The remote collaborator that does everything language-related:
/// transcription, question generation, and answer verification.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Submit base64-encoded audio; returns the transcript and questions.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport failure or a non-2xx status.
    async fn process_audio(&self, audio_base64: &str) -> Result<StoryPackage, GatewayError>;

    /// Ask the backend whether an answer is consistent with the story.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport failure or a non-2xx status.
    async fn check_answer(
        &self,
        original_story: &str,
        question: &str,
        user_answer: &str,
    ) -> Result<AnswerCheck, GatewayError>;

    /// Submit both transcripts and the raw game metrics for analysis.
    ///
    /// Defined by the backend contract but not reached from the main flow.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport failure or a non-2xx status.
    async fn analyze(
        &self,
        transcript_s1: &str,
        game_metrics: serde_json::Value,
        transcript_s2: &str,
    ) -> Result<serde_json::Value, GatewayError>;
}

//
// ─── HTTP IMPLEMENTATION ───────────────────────────────────────────────────────
//

/// Gateway talking JSON over HTTP to the assessment backend.
#[derive(Clone)]
pub struct HttpBackendGateway {
    client: Client,
    settings: BackendSettings,
}

impl HttpBackendGateway {
    #[must_use]
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    /// Build from `RECALL_BACKEND_URL`, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns `BackendSettingsError` when the configured URL is invalid.
    pub fn from_env() -> Result<Self, BackendSettingsError> {
        let raw = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Ok(Self::new(BackendSettings::new(&raw)?))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.settings.base_url()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.settings.base_url())
    }

    async fn post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .inspect_err(|err| warn!(path, error = %err, "backend request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(path, %status, "backend returned an error status");
            return Err(GatewayError::HttpStatus { status, body });
        }

        debug!(path, %status, "backend request succeeded");
        Ok(response.json().await?)
    }
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
    async fn process_audio(&self, audio_base64: &str) -> Result<StoryPackage, GatewayError> {
        let body: StoryPackageBody = self
            .post_json(
                "/api/process-audio/",
                &ProcessAudioRequest {
                    audio_data: audio_base64,
                },
            )
            .await?;

        Ok(StoryPackage {
            story: body.story,
            questions: body.questions,
        })
    }

    async fn check_answer(
        &self,
        original_story: &str,
        question: &str,
        user_answer: &str,
    ) -> Result<AnswerCheck, GatewayError> {
        let body: CheckAnswerBody = self
            .post_json(
                "/api/check-answer/",
                &CheckAnswerRequest {
                    original_story,
                    question,
                    user_answer,
                },
            )
            .await?;

        Ok(AnswerCheck {
            verdict: Verdict::from_wire(&body.result),
            feedback: body.feedback,
        })
    }

    async fn analyze(
        &self,
        transcript_s1: &str,
        game_metrics: serde_json::Value,
        transcript_s2: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        self.post_json(
            "/api/analyze",
            &AnalyzeRequest {
                transcript_s1,
                game_metrics,
                transcript_s2,
            },
        )
        .await
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct ProcessAudioRequest<'a> {
    audio_data: &'a str,
}

#[derive(Debug, Deserialize)]
struct StoryPackageBody {
    story: String,
    #[serde(default)]
    questions: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CheckAnswerRequest<'a> {
    original_story: &'a str,
    question: &'a str,
    user_answer: &'a str,
}

#[derive(Debug, Deserialize)]
struct CheckAnswerBody {
    result: String,
    #[serde(default)]
    feedback: String,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    transcript_s1: &'a str,
    game_metrics: serde_json::Value,
    transcript_s2: &'a str,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
