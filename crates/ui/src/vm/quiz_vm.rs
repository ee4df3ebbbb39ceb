use recall_core::model::QuizBoard;
use services::CheckedAnswer;

/// Render state of one question row.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionState {
    pub question: String,
    pub answer: String,
    pub checked: Option<CheckedAnswer>,
    pub checking: bool,
}

/// Screen state for the recall quiz.
///
/// The scoring authority is the `QuizBoard` (taken out for each service
/// call); this holds what the rows display: draft answers, per-question
/// verdicts, and the in-flight marker that disables a row's button.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizVm {
    answers: Vec<String>,
    checked: Vec<Option<CheckedAnswer>>,
    checking: Option<usize>,
}

impl QuizVm {
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            answers: vec![String::new(); question_count],
            checked: vec![None; question_count],
            checking: None,
        }
    }

    pub fn set_answer(&mut self, index: usize, answer: String) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = answer;
        }
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> &str {
        self.answers.get(index).map_or("", String::as_str)
    }

    /// Mark a row in flight; refuses while another check runs or the row
    /// already has a verdict.
    pub fn begin_check(&mut self, index: usize) -> bool {
        if self.checking.is_some() || self.checked.get(index).is_none_or(Option::is_some) {
            return false;
        }
        self.checking = Some(index);
        true
    }

    /// Store the verdict for the in-flight row.
    pub fn finish_check(&mut self, index: usize, result: CheckedAnswer) {
        if let Some(slot) = self.checked.get_mut(index) {
            *slot = Some(result);
        }
        if self.checking == Some(index) {
            self.checking = None;
        }
    }

    /// A failed check frees the row for another try.
    pub fn abort_check(&mut self, index: usize) {
        if self.checking == Some(index) {
            self.checking = None;
        }
    }

    /// Rows for the view, combining questions with their display state.
    #[must_use]
    pub fn rows(&self, board: &QuizBoard) -> Vec<QuestionState> {
        (0..board.total() as usize)
            .filter_map(|index| {
                board.question(index).map(|question| QuestionState {
                    question: question.to_string(),
                    answer: self.answer(index).to_string(),
                    checked: self.checked.get(index).cloned().flatten(),
                    checking: self.checking == Some(index),
                })
            })
            .collect()
    }
}
