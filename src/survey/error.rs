use thiserror::Error;

use super::form::Phase;

pub const INCOMPLETE_FORM_MESSAGE: &str = "Por favor completa todos los campos";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// Shown to the respondent as-is.
    #[error("{}", INCOMPLETE_FORM_MESSAGE)]
    Incomplete { missing: Vec<&'static str> },
    #[error("Form can no longer be edited (phase: {0})")]
    NotEditable(Phase),
    #[error("Survey was already submitted (phase: {0})")]
    AlreadySubmitted(Phase),
}

impl SurveyError {
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            SurveyError::Incomplete { missing } => missing,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
