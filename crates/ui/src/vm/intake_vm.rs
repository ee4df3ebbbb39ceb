use recall_core::model::{EducationLevel, IntakeDraft, IntakeError, Participant};

/// Form state for the start screen.
///
/// Field setters keep the raw text around so the participant can edit
/// freely; validation only runs against the draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeVm {
    name: String,
    age_text: String,
    education: Option<EducationLevel>,
}

impl IntakeVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_age_text(&mut self, age_text: String) {
        self.age_text = age_text;
    }

    #[must_use]
    pub fn age_text(&self) -> &str {
        &self.age_text
    }

    pub fn choose_education(&mut self, level: EducationLevel) {
        self.education = Some(level);
    }

    #[must_use]
    pub fn education(&self) -> Option<EducationLevel> {
        self.education
    }

    /// Status line under the education buttons, empty until a choice.
    #[must_use]
    pub fn education_status(&self) -> &'static str {
        self.education.map_or("", EducationLevel::status_line)
    }

    fn draft(&self) -> IntakeDraft {
        IntakeDraft {
            name: self.name.clone(),
            age: self.age_text.trim().parse::<u16>().ok(),
            education: self.education,
        }
    }

    /// Drives the start button's disabled state.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.draft().is_complete()
    }

    /// Validate the form into a participant.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError` when any field is missing or out of range.
    pub fn submit(&self) -> Result<Participant, IntakeError> {
        self.draft().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stays_disabled_until_every_field_is_valid() {
        let mut vm = IntakeVm::new();
        assert!(!vm.can_start());

        vm.set_name("Nasrin".into());
        assert!(!vm.can_start());

        vm.set_age_text("72".into());
        assert!(!vm.can_start());

        vm.choose_education(EducationLevel::LessThanTwelveYears);
        assert!(vm.can_start());

        let participant = vm.submit().unwrap();
        assert_eq!(participant.name(), "Nasrin");
        assert_eq!(participant.age(), 72);
    }

    #[test]
    fn junk_age_text_blocks_start() {
        let mut vm = IntakeVm::new();
        vm.set_name("A".into());
        vm.choose_education(EducationLevel::TwelveYearsOrMore);

        for raw in ["", "abc", "17", "121", "-3"] {
            vm.set_age_text(raw.into());
            assert!(!vm.can_start(), "accepted {raw:?}");
        }
        vm.set_age_text(" 65 ".into());
        assert!(vm.can_start());
    }

    #[test]
    fn education_status_reflects_choice() {
        let mut vm = IntakeVm::new();
        assert_eq!(vm.education_status(), "");
        vm.choose_education(EducationLevel::LessThanTwelveYears);
        assert!(vm.education_status().contains("1 bonus point"));
    }
}
