use anyhow::Result;
use log::{error, info, warn};
use parking_lot::Mutex;
use tauri::{AppHandle, Builder, State};
use tauri_plugin_opener::OpenerExt;

use crate::config::{self, SurveyConfig};
use crate::survey::{
    form_view, FormView, Phase, PresentationSelector, SubmissionDispatcher, SurveyForm, ThankYouView,
};

struct AppState {
    form: Mutex<SurveyForm>,
    config: Option<SurveyConfig>,
    dispatcher: Mutex<Option<SubmissionDispatcher>>,
    presentation: PresentationSelector,
}

impl AppState {
    fn new() -> Self {
        let config = match SurveyConfig::from_env() {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("❌ Survey configuration incomplete: {} - submissions are disabled", e);
                None
            }
        };

        let presentation = match &config {
            Some(config) => PresentationSelector::new(config.document_links.clone(), config.social_links.clone()),
            None => PresentationSelector::default(),
        };

        Self {
            form: Mutex::new(SurveyForm::new()),
            config,
            dispatcher: Mutex::new(None),
            presentation,
        }
    }

    fn ensure_dispatcher(&self) -> Result<SubmissionDispatcher, String> {
        let mut dispatcher_guard = self.dispatcher.lock();
        if let Some(dispatcher) = dispatcher_guard.as_ref() {
            return Ok(dispatcher.clone());
        }
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| "Survey endpoints are not configured".to_string())?;
        let dispatcher = SubmissionDispatcher::from_config(config)
            .map_err(|e| format!("Failed to create HTTP clients: {}", e))?;
        *dispatcher_guard = Some(dispatcher.clone());
        Ok(dispatcher)
    }

    fn edit<F>(&self, apply: F) -> Result<SurveyForm, String>
    where
        F: FnOnce(&mut SurveyForm) -> crate::survey::Result<()>,
    {
        let mut form = self.form.lock();
        apply(&mut form).map_err(|e| e.to_string())?;
        Ok(form.clone())
    }
}

#[tauri::command]
fn get_questionnaire() -> FormView {
    form_view()
}

#[tauri::command]
fn get_form_state(state: State<'_, AppState>) -> SurveyForm {
    state.form.lock().clone()
}

#[tauri::command]
fn set_full_name(state: State<'_, AppState>, value: String) -> Result<SurveyForm, String> {
    state.edit(|form| form.set_full_name(value))
}

#[tauri::command]
fn set_email(state: State<'_, AppState>, value: String) -> Result<SurveyForm, String> {
    state.edit(|form| form.set_email(value))
}

#[tauri::command]
fn set_starting_point(state: State<'_, AppState>, value: String) -> Result<SurveyForm, String> {
    state.edit(|form| form.set_starting_point(value))
}

#[tauri::command]
fn toggle_obstacle(state: State<'_, AppState>, value: String) -> Result<SurveyForm, String> {
    state.edit(|form| form.toggle_obstacle(&value).map(|_| ()))
}

#[tauri::command]
fn set_weekly_time(state: State<'_, AppState>, value: String) -> Result<SurveyForm, String> {
    state.edit(|form| form.set_weekly_time(value))
}

#[tauri::command]
fn set_goal(state: State<'_, AppState>, value: String) -> Result<SurveyForm, String> {
    state.edit(|form| form.set_goal(value))
}

#[tauri::command]
async fn submit_survey(state: State<'_, AppState>) -> Result<ThankYouView, String> {
    state.form.lock().check_submittable().map_err(|e| e.to_string())?;
    let dispatcher = state.ensure_dispatcher()?;
    let report = dispatcher.submit(&state.form).await.map_err(|e| e.to_string())?;
    Ok(state.presentation.thank_you(report.label))
}

#[tauri::command]
fn get_thank_you(state: State<'_, AppState>) -> Result<ThankYouView, String> {
    let form = state.form.lock();
    match (form.phase(), form.label()) {
        (Phase::Done, Some(label)) => Ok(state.presentation.thank_you(label)),
        (phase, _) => Err(format!("Survey is not finished yet (phase: {})", phase)),
    }
}

#[tauri::command]
fn reset_survey(state: State<'_, AppState>) -> SurveyForm {
    let mut form = state.form.lock();
    form.reset();
    info!("🔄 Survey reset for a new respondent");
    form.clone()
}

#[tauri::command]
fn open_link(app: AppHandle, state: State<'_, AppState>, url: String) -> Result<(), String> {
    if !state.presentation.is_known_link(&url) {
        warn!("Refusing to open unknown link: {}", url);
        return Err(format!("Link is not part of the survey: {}", url));
    }
    app.opener().open_url(url, None::<&str>).map_err(|e| {
        error!("Failed to open link: {}", e);
        format!("Failed to open link: {}", e)
    })
}

pub fn run() -> Result<()> {
    info!("Diagnóstico starting...");
    config::log_environment_status();

    Builder::default()
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            get_questionnaire,
            get_form_state,
            set_full_name,
            set_email,
            set_starting_point,
            toggle_obstacle,
            set_weekly_time,
            set_goal,
            submit_survey,
            get_thank_you,
            reset_survey,
            open_link
        ])
        .manage(AppState::new())
        .setup(|_app| {
            info!("Diagnóstico window ready");
            Ok(())
        })
        .run(tauri::generate_context!())?;

    Ok(())
}
