use anyhow::{Context, Result};
use diagnostico_lib::config::SurveyConfig;
use diagnostico_lib::survey::{PresentationSelector, SubmissionDispatcher, SurveyForm};
use log::info;
use parking_lot::Mutex;

/// Sends one made-up respondent through both live sinks and prints the report.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SurveyConfig::from_env().context("survey configuration is incomplete")?;
    let dispatcher = SubmissionDispatcher::from_config(&config)?;
    let presentation = PresentationSelector::new(config.document_links.clone(), config.social_links.clone());

    let email = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "diagnostico-test@example.com".to_string());

    let mut form = SurveyForm::new();
    form.set_full_name("Prueba Diagnóstico")?;
    form.set_email(email.as_str())?;
    form.set_starting_point("b")?;
    form.toggle_obstacle("Falta de tiempo")?;
    form.set_weekly_time("4–6 h")?;
    form.set_goal("Ingresos extra")?;
    let form = Mutex::new(form);

    info!("🚀 Sending test submission for {}", email);
    let report = dispatcher.submit(&form).await?;

    println!("\n=== TEST SUBMISSION REPORT ===\n");
    println!("Submission: {}", report.submission_id);
    println!("Label:      {}", report.label);
    println!("Sheets:     {:?}", report.sheet);
    println!("Beacons:    {:?}", report.contact);
    println!("Phase:      {}", form.lock().phase());
    println!("Guide link: {}", presentation.document_link(report.label));

    Ok(())
}
