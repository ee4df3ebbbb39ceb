use services::StoryPackage;

/// Where the storytelling screen currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingPhase {
    Idle,
    Recording,
    Processing,
    Ready,
}

/// What arriving backend data means for the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryOutcome {
    /// Questions arrived; the games can start.
    QuestionsReady,
    /// Transcription worked but produced no usable questions; the
    /// participant should record a longer story.
    NoQuestions,
}

/// State machine for the record → transcribe → questions flow.
///
/// The microphone itself lives in the webview; this only tracks what the
/// screen should show and holds the story package once it arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryVm {
    phase: RecordingPhase,
    package: Option<StoryPackage>,
}

impl StoryVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: RecordingPhase::Idle,
            package: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RecordingPhase {
        self.phase
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.phase == RecordingPhase::Recording
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.phase == RecordingPhase::Processing
    }

    /// Story text to show, or the standing instruction.
    #[must_use]
    pub fn story_line(&self) -> &str {
        match self.phase {
            RecordingPhase::Idle => {
                "Press the button and tell a short story about a memorable day."
            }
            RecordingPhase::Recording => "Recording...",
            RecordingPhase::Processing => "Processing...",
            RecordingPhase::Ready => self
                .package
                .as_ref()
                .map(|p| p.story.as_str())
                .filter(|s| !s.is_empty())
                .unwrap_or("Transcription failed. Story is too short or unclear."),
        }
    }

    pub fn begin_recording(&mut self) {
        self.phase = RecordingPhase::Recording;
        self.package = None;
    }

    pub fn begin_processing(&mut self) {
        self.phase = RecordingPhase::Processing;
    }

    /// The microphone or the backend failed; back to square one.
    pub fn reset(&mut self) {
        self.phase = RecordingPhase::Idle;
    }

    /// Accept the backend's story package.
    pub fn package_received(&mut self, package: StoryPackage) -> StoryOutcome {
        let outcome = if package.has_questions() {
            StoryOutcome::QuestionsReady
        } else {
            StoryOutcome::NoQuestions
        };
        self.package = Some(package);
        self.phase = RecordingPhase::Ready;
        outcome
    }

    #[must_use]
    pub fn package(&self) -> Option<&StoryPackage> {
        self.package.as_ref()
    }

    /// The games button only appears once questions exist.
    #[must_use]
    pub fn can_start_games(&self) -> bool {
        self.phase == RecordingPhase::Ready
            && self.package.as_ref().is_some_and(StoryPackage::has_questions)
    }
}

impl Default for StoryVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(questions: Vec<&str>) -> StoryPackage {
        StoryPackage {
            story: "I went fishing.".into(),
            questions: questions.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn happy_path_unlocks_games() {
        let mut vm = StoryVm::new();
        assert_eq!(vm.phase(), RecordingPhase::Idle);

        vm.begin_recording();
        assert!(vm.is_recording());
        vm.begin_processing();
        assert!(vm.is_processing());

        let outcome = vm.package_received(package(vec!["q1", "q2"]));
        assert_eq!(outcome, StoryOutcome::QuestionsReady);
        assert!(vm.can_start_games());
        assert_eq!(vm.story_line(), "I went fishing.");
    }

    #[test]
    fn no_questions_keeps_games_locked() {
        let mut vm = StoryVm::new();
        vm.begin_recording();
        vm.begin_processing();

        let outcome = vm.package_received(package(vec![]));
        assert_eq!(outcome, StoryOutcome::NoQuestions);
        assert!(!vm.can_start_games());
    }

    #[test]
    fn empty_story_text_shows_fallback_line() {
        let mut vm = StoryVm::new();
        vm.begin_recording();
        vm.begin_processing();
        vm.package_received(StoryPackage {
            story: String::new(),
            questions: vec![],
        });
        assert!(vm.story_line().contains("Transcription failed"));
    }

    #[test]
    fn reset_returns_to_idle_after_failure() {
        let mut vm = StoryVm::new();
        vm.begin_recording();
        vm.begin_processing();
        vm.reset();
        assert_eq!(vm.phase(), RecordingPhase::Idle);
        assert!(!vm.can_start_games());
    }

    #[test]
    fn re_recording_clears_the_previous_package() {
        let mut vm = StoryVm::new();
        vm.begin_recording();
        vm.begin_processing();
        vm.package_received(package(vec!["q1"]));
        assert!(vm.can_start_games());

        vm.begin_recording();
        assert!(vm.package().is_none());
        assert!(!vm.can_start_games());
    }
}
