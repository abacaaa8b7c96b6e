use serde::{Deserialize, Serialize};

/// Respondent profile derived from the question 1 answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "CONFUNDIDO")]
    Confused,
    #[serde(rename = "SATURADO")]
    Overwhelmed,
    #[serde(rename = "PARALIZADO")]
    Stuck,
    /// No recognised answer; travels as an empty tag.
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Confused => "CONFUNDIDO",
            Label::Overwhelmed => "SATURADO",
            Label::Stuck => "PARALIZADO",
            Label::Unknown => "",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the raw question 1 code is considered.
pub fn classify(answer: &str) -> Label {
    match answer {
        "a" => Label::Confused,
        "b" => Label::Overwhelmed,
        "c" => Label::Stuck,
        _ => Label::Unknown,
    }
}
