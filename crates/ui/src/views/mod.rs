mod about;
mod assessment;
mod games;
mod intake;
mod modal;
mod quiz;
mod results;
mod scripts;
mod storytelling;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use about::AboutView;
pub use assessment::AssessmentView;

pub(crate) use games::GameView;
pub(crate) use intake::IntakeView;
pub(crate) use modal::{Modal, ModalMessage};
pub(crate) use quiz::QuizView;
pub(crate) use results::ResultsView;
pub(crate) use storytelling::StorytellingView;
