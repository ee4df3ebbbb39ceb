use thiserror::Error;

/// Inclusive age bounds accepted at intake.
pub const MIN_AGE: u16 = 18;
pub const MAX_AGE: u16 = 120;

//
// ─── EDUCATION ─────────────────────────────────────────────────────────────────
//

/// Self-reported years of schooling, collected at intake.
///
/// Fewer than twelve years earns the standard one-point adjustment on the
/// final score; twelve or more earns none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    TwelveYearsOrMore,
    LessThanTwelveYears,
}

impl EducationLevel {
    /// Point adjustment added to the composite score.
    #[must_use]
    pub fn bonus_points(self) -> f64 {
        match self {
            EducationLevel::TwelveYearsOrMore => 0.0,
            EducationLevel::LessThanTwelveYears => 1.0,
        }
    }

    /// Status line shown next to the intake buttons.
    #[must_use]
    pub fn status_line(self) -> &'static str {
        match self {
            EducationLevel::TwelveYearsOrMore => {
                "Selected: 12+ years of education (0 bonus points)."
            }
            EducationLevel::LessThanTwelveYears => {
                "Selected: Less than 12 years (1 bonus point added to final score)."
            }
        }
    }
}

//
// ─── INTAKE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntakeError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age is required")]
    AgeMissing,

    #[error("age must be between {MIN_AGE} and {MAX_AGE}, got {provided}")]
    AgeOutOfRange { provided: u16 },

    #[error("education level has not been chosen")]
    EducationNotChosen,
}

/// Raw intake form values, as typed by the participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeDraft {
    pub name: String,
    pub age: Option<u16>,
    pub education: Option<EducationLevel>,
}

impl IntakeDraft {
    /// Validate the draft into a `Participant`.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError` when the name is blank, the age is missing or
    /// outside 18–120, or no education level was chosen.
    pub fn validate(self) -> Result<Participant, IntakeError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(IntakeError::EmptyName);
        }

        let age = self.age.ok_or(IntakeError::AgeMissing)?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(IntakeError::AgeOutOfRange { provided: age });
        }

        let education = self.education.ok_or(IntakeError::EducationNotChosen)?;

        Ok(Participant {
            name,
            age,
            education,
        })
    }

    /// True when `validate` would succeed; drives the start button state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.clone().validate().is_ok()
    }
}

//
// ─── PARTICIPANT ───────────────────────────────────────────────────────────────
//

/// A validated participant, immutable for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    age: u16,
    education: EducationLevel,
}

impl Participant {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> u16 {
        self.age
    }

    #[must_use]
    pub fn education(&self) -> EducationLevel {
        self.education
    }

    /// Education adjustment applied to the composite score.
    #[must_use]
    pub fn education_bonus(&self) -> f64 {
        self.education.bonus_points()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
