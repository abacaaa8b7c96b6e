use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::form::Response;
use super::label::Label;
use super::questions::starting_point_text;

/// Flat row appended to the results spreadsheet. Keys match the Apps Script columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRecord {
    pub timestamp: String,
    #[serde(rename = "nombre")]
    pub full_name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "etiqueta")]
    pub label: Label,
    #[serde(rename = "pregunta1")]
    pub starting_point: String,
    #[serde(rename = "pregunta2")]
    pub obstacles: String,
    #[serde(rename = "pregunta3")]
    pub weekly_time: String,
    #[serde(rename = "pregunta4")]
    pub goal: String,
}

impl SheetRecord {
    pub fn build(response: &Response, label: Label, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            full_name: response.full_name.clone(),
            email: response.email.clone(),
            label,
            starting_point: starting_point_text(&response.starting_point).to_string(),
            obstacles: response.obstacles.join(", "),
            weekly_time: response.weekly_time.clone(),
            goal: response.goal.clone(),
        }
    }
}

/// Contact pushed to the mailing list, tagged with the profile label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub tags: Vec<Label>,
}

impl Contact {
    pub fn build(response: &Response, label: Label) -> Self {
        let (first_name, last_name) = split_name(&response.full_name);
        Self {
            email: response.email.clone(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            tags: vec![label],
        }
    }
}

/// Splits on the first space only; everything after it is the last name.
pub fn split_name(full_name: &str) -> (&str, &str) {
    full_name.split_once(' ').unwrap_or((full_name, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn response() -> Response {
        Response {
            full_name: "Ana Gomez".to_string(),
            email: "ana@x.com".to_string(),
            starting_point: "b".to_string(),
            obstacles: vec!["Falta de tiempo".to_string(), "Miedo a fallar".to_string()],
            weekly_time: "4–6 h".to_string(),
            goal: "Ingresos extra".to_string(),
        }
    }

    #[test]
    fn test_sheet_record_wire_format() {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 5).unwrap();
        let record = SheetRecord::build(&response(), Label::Overwhelmed, at);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "timestamp": "2026-01-15T09:30:05.000Z",
                "nombre": "Ana Gomez",
                "correo": "ana@x.com",
                "etiqueta": "SATURADO",
                "pregunta1": "Tengo ideas, pero sin estructura",
                "pregunta2": "Falta de tiempo, Miedo a fallar",
                "pregunta3": "4–6 h",
                "pregunta4": "Ingresos extra"
            })
        );
    }

    #[test]
    fn test_unknown_starting_point_reads_as_option_c() {
        let mut response = response();
        response.starting_point = "x".to_string();
        let record = SheetRecord::build(&response, Label::Unknown, Utc::now());
        assert_eq!(record.starting_point, "Ya intenté y me frustré");
        assert_eq!(serde_json::to_value(&record).unwrap()["etiqueta"], "");
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("Ana Gomez"), ("Ana", "Gomez"));
        assert_eq!(split_name("Ana Maria Gomez Ruiz"), ("Ana", "Maria Gomez Ruiz"));
        assert_eq!(split_name("Ana"), ("Ana", ""));
        assert_eq!(split_name("Ana  Gomez"), ("Ana", " Gomez"));
    }

    #[test]
    fn test_contact_tags() {
        let contact = Contact::build(&response(), Label::Overwhelmed);
        assert_eq!(contact.first_name, "Ana");
        assert_eq!(contact.last_name, "Gomez");
        assert_eq!(contact.tags, vec![Label::Overwhelmed]);
        assert_eq!(serde_json::to_value(&contact).unwrap()["tags"], serde_json::json!(["SATURADO"]));
    }
}
