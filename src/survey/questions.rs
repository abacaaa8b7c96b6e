use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Answer to question 1, the one the profile label is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartingPoint {
    A,
    B,
    C,
}

impl StartingPoint {
    pub fn as_code(&self) -> &'static str {
        match self {
            StartingPoint::A => "a",
            StartingPoint::B => "b",
            StartingPoint::C => "c",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            StartingPoint::A => "No sé por dónde empezar",
            StartingPoint::B => "Tengo ideas, pero sin estructura",
            StartingPoint::C => "Ya intenté y me frustré",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "a" => Some(StartingPoint::A),
            "b" => Some(StartingPoint::B),
            "c" => Some(StartingPoint::C),
            _ => None,
        }
    }
}

/// Human-readable text for a question 1 code. Anything other than `a` or `b`
/// reads as option C.
pub fn starting_point_text(code: &str) -> &'static str {
    StartingPoint::from_code(code).unwrap_or(StartingPoint::C).text()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceKind {
    Single,
    Multiple,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub number: u8,
    pub prompt: String,
    pub kind: ChoiceKind,
    pub options: Vec<QuestionOption>,
}

pub const OBSTACLE_OPTIONS: [&str; 4] = [
    "Falta de claridad",
    "Falta de tiempo",
    "Miedo a fallar",
    "Demasiada información",
];

pub const WEEKLY_TIME_OPTIONS: [&str; 3] = ["1–3 h", "4–6 h", "7+ h"];

pub const GOAL_OPTIONS: [&str; 3] = ["Ingresos extra", "Negocio digital estable", "Claridad y enfoque"];

fn same_value_options(values: &[&str]) -> Vec<QuestionOption> {
    values
        .iter()
        .map(|v| QuestionOption { value: v.to_string(), label: v.to_string() })
        .collect()
}

static QUESTIONNAIRE: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question {
            number: 1,
            prompt: "¿En qué punto estás hoy?".to_string(),
            kind: ChoiceKind::Single,
            options: [StartingPoint::A, StartingPoint::B, StartingPoint::C]
                .iter()
                .map(|p| QuestionOption { value: p.as_code().to_string(), label: p.text().to_string() })
                .collect(),
        },
        Question {
            number: 2,
            prompt: "¿Qué te detiene más? (puedes seleccionar varias)".to_string(),
            kind: ChoiceKind::Multiple,
            options: same_value_options(&OBSTACLE_OPTIONS),
        },
        Question {
            number: 3,
            prompt: "¿Cuánto tiempo podrías dedicar semanalmente?".to_string(),
            kind: ChoiceKind::Single,
            options: same_value_options(&WEEKLY_TIME_OPTIONS),
        },
        Question {
            number: 4,
            prompt: "¿Qué te gustaría lograr en 2026?".to_string(),
            kind: ChoiceKind::Single,
            options: same_value_options(&GOAL_OPTIONS),
        },
    ]
});

/// The four questions in display order.
pub fn questionnaire() -> &'static [Question] {
    &QUESTIONNAIRE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_point_codes() {
        for point in [StartingPoint::A, StartingPoint::B, StartingPoint::C] {
            assert_eq!(StartingPoint::from_code(point.as_code()), Some(point));
        }
        assert_eq!(StartingPoint::from_code("B"), None);
        assert_eq!(starting_point_text("b"), "Tengo ideas, pero sin estructura");
        assert_eq!(starting_point_text("z"), "Ya intenté y me frustré");
        assert_eq!(starting_point_text(""), "Ya intenté y me frustré");
    }

    #[test]
    fn test_questionnaire_shape() {
        let questions = questionnaire();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[1].kind, ChoiceKind::Multiple);
        assert_eq!(questions[0].options[2].value, "c");
        assert_eq!(questions[0].options[2].label, "Ya intenté y me frustré");
        assert_eq!(questions[2].options[1].value, "4–6 h");
        assert_eq!(questions[3].options.len(), 3);
    }
}
