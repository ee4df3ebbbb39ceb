mod intake_vm;
mod quiz_vm;
mod results_vm;
mod story_vm;

pub use intake_vm::IntakeVm;
pub use quiz_vm::{QuestionState, QuizVm};
pub use results_vm::{BreakdownRow, ResultsVm};
pub use story_vm::{RecordingPhase, StoryOutcome, StoryVm};
