use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::error::{Result, SurveyError};
use super::label::Label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Form,
    Submitting,
    Done,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Form => "form",
            Phase::Submitting => "submitting",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Raw field values as the respondent entered them. Empty string means unanswered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct FormFields {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    /// Question 1 code (`a`, `b` or `c`).
    #[validate(length(min = 1))]
    pub starting_point: String,
    /// Question 2, in selection order.
    #[validate(length(min = 1))]
    pub obstacles: Vec<String>,
    #[validate(length(min = 1))]
    pub weekly_time: String,
    #[validate(length(min = 1))]
    pub goal: String,
}

// Order used when reporting missing fields.
const FIELD_ORDER: [&str; 6] = ["full_name", "email", "starting_point", "obstacles", "weekly_time", "goal"];

/// A complete set of answers, produced only by a successful validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub full_name: String,
    pub email: String,
    pub starting_point: String,
    pub obstacles: Vec<String>,
    pub weekly_time: String,
    pub goal: String,
}

impl FormFields {
    pub fn to_response(&self) -> Result<Response> {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            let missing: Vec<&'static str> = FIELD_ORDER
                .iter()
                .copied()
                .filter(|field| field_errors.contains_key(field))
                .collect();
            return Err(SurveyError::Incomplete { missing });
        }

        Ok(Response {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            starting_point: self.starting_point.clone(),
            obstacles: self.obstacles.clone(),
            weekly_time: self.weekly_time.clone(),
            goal: self.goal.clone(),
        })
    }
}

/// Form state holder: field values, current phase and the label once known.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyForm {
    fields: FormFields,
    phase: Phase,
    label: Option<Label>,
    #[serde(skip)]
    transitions: Vec<Phase>,
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyForm {
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            phase: Phase::Form,
            label: None,
            transitions: vec![Phase::Form],
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn label(&self) -> Option<Label> {
        self.label
    }

    /// Every phase the form has been in, starting with `Form`.
    pub fn transitions(&self) -> &[Phase] {
        &self.transitions
    }

    fn editable(&mut self) -> Result<&mut FormFields> {
        match self.phase {
            Phase::Form => Ok(&mut self.fields),
            other => Err(SurveyError::NotEditable(other)),
        }
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) -> Result<()> {
        self.editable()?.full_name = value.into();
        Ok(())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<()> {
        self.editable()?.email = value.into();
        Ok(())
    }

    pub fn set_starting_point(&mut self, code: impl Into<String>) -> Result<()> {
        self.editable()?.starting_point = code.into();
        Ok(())
    }

    pub fn set_weekly_time(&mut self, value: impl Into<String>) -> Result<()> {
        self.editable()?.weekly_time = value.into();
        Ok(())
    }

    pub fn set_goal(&mut self, value: impl Into<String>) -> Result<()> {
        self.editable()?.goal = value.into();
        Ok(())
    }

    /// Adds the option if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle_obstacle(&mut self, option: &str) -> Result<bool> {
        let obstacles = &mut self.editable()?.obstacles;
        if obstacles.iter().any(|o| o == option) {
            obstacles.retain(|o| o != option);
            Ok(false)
        } else {
            obstacles.push(option.to_string());
            Ok(true)
        }
    }

    /// Same checks as `begin_submission`, without changing the phase.
    pub fn check_submittable(&self) -> Result<Response> {
        if self.phase != Phase::Form {
            return Err(SurveyError::AlreadySubmitted(self.phase));
        }
        self.fields.to_response()
    }

    /// Validates and moves to `Submitting`. On error nothing changes.
    pub fn begin_submission(&mut self) -> Result<Response> {
        let response = self.check_submittable()?;
        self.enter(Phase::Submitting);
        Ok(response)
    }

    /// Moves to `Done` once the sinks have been attempted.
    pub fn complete_submission(&mut self, label: Label) {
        self.label = Some(label);
        self.enter(Phase::Done);
    }

    /// Blank form for a new respondent.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn enter(&mut self, phase: Phase) {
        debug!("Survey phase {} -> {}", self.phase, phase);
        self.phase = phase;
        self.transitions.push(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SurveyForm {
        let mut form = SurveyForm::new();
        form.set_full_name("Ana Gomez").unwrap();
        form.set_email("ana@x.com").unwrap();
        form.set_starting_point("b").unwrap();
        form.toggle_obstacle("Falta de tiempo").unwrap();
        form.set_weekly_time("4–6 h").unwrap();
        form.set_goal("Ingresos extra").unwrap();
        form
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut form = SurveyForm::new();
        form.toggle_obstacle("Miedo a fallar").unwrap();
        let before = form.fields().obstacles.clone();

        assert!(form.toggle_obstacle("Falta de claridad").unwrap());
        assert!(!form.toggle_obstacle("Falta de claridad").unwrap());
        assert_eq!(form.fields().obstacles, before);
    }

    #[test]
    fn test_toggle_keeps_selection_order() {
        let mut form = SurveyForm::new();
        form.toggle_obstacle("Miedo a fallar").unwrap();
        form.toggle_obstacle("Falta de claridad").unwrap();
        form.toggle_obstacle("Demasiada información").unwrap();
        form.toggle_obstacle("Falta de claridad").unwrap();
        assert_eq!(form.fields().obstacles, vec!["Miedo a fallar", "Demasiada información"]);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = SurveyForm::new();
        let err = form.begin_submission().unwrap_err();
        assert_eq!(err.missing_fields(), &FIELD_ORDER[..]);
        assert_eq!(err.to_string(), "Por favor completa todos los campos");
        assert_eq!(form.phase(), Phase::Form);
        assert_eq!(form.transitions(), &[Phase::Form]);
    }

    #[test]
    fn test_each_missing_field_blocks_submission() {
        let clear: [fn(&mut FormFields); 6] = [
            |f: &mut FormFields| f.full_name.clear(),
            |f: &mut FormFields| f.email.clear(),
            |f: &mut FormFields| f.starting_point.clear(),
            |f: &mut FormFields| f.obstacles.clear(),
            |f: &mut FormFields| f.weekly_time.clear(),
            |f: &mut FormFields| f.goal.clear(),
        ];

        for (i, clear_field) in clear.iter().enumerate() {
            let mut form = filled_form();
            clear_field(&mut form.fields);
            let err = form.begin_submission().unwrap_err();
            assert_eq!(err.missing_fields(), &[FIELD_ORDER[i]]);
            assert_eq!(form.phase(), Phase::Form);
        }
    }

    #[test]
    fn test_check_submittable_keeps_phase() {
        let mut form = SurveyForm::new();
        form.set_full_name("Ana Gomez").unwrap();
        let err = form.check_submittable().unwrap_err();
        assert_eq!(err.missing_fields(), &FIELD_ORDER[1..]);
        assert_eq!(err.to_string(), "Por favor completa todos los campos");

        let form = filled_form();
        assert_eq!(form.check_submittable().unwrap().email, "ana@x.com");
        assert_eq!(form.phase(), Phase::Form);
        assert_eq!(form.transitions(), &[Phase::Form]);
    }

    #[test]
    fn test_lifecycle() {
        let mut form = filled_form();
        let response = form.begin_submission().unwrap();
        assert_eq!(response.full_name, "Ana Gomez");
        assert_eq!(form.phase(), Phase::Submitting);

        assert_eq!(form.set_goal("Claridad y enfoque"), Err(SurveyError::NotEditable(Phase::Submitting)));
        assert_eq!(form.begin_submission(), Err(SurveyError::AlreadySubmitted(Phase::Submitting)));

        form.complete_submission(Label::Overwhelmed);
        assert_eq!(form.phase(), Phase::Done);
        assert_eq!(form.label(), Some(Label::Overwhelmed));
        assert_eq!(form.transitions(), &[Phase::Form, Phase::Submitting, Phase::Done]);

        form.reset();
        assert_eq!(form.phase(), Phase::Form);
        assert_eq!(form.fields(), &FormFields::default());
        assert_eq!(form.label(), None);
    }
}
