use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info};
use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use super::error::Result;
use super::form::{Response, SurveyForm};
use super::label::{classify, Label};
use super::record::{Contact, SheetRecord};
use crate::config::SurveyConfig;
use crate::sinks::{self, BeaconsClient, ContactSink, DeliveryOutcome, GoogleSheetsClient, RecordSink};

/// What happened to one submission. Delivery failures are kept here and in the
/// log; they are never shown to the respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReport {
    pub submission_id: Uuid,
    pub label: Label,
    pub sheet: DeliveryOutcome,
    pub contact: DeliveryOutcome,
}

#[derive(Clone)]
pub struct SubmissionDispatcher {
    records: Arc<dyn RecordSink>,
    contacts: Arc<dyn ContactSink>,
}

impl SubmissionDispatcher {
    pub fn new(records: Arc<dyn RecordSink>, contacts: Arc<dyn ContactSink>) -> Self {
        Self { records, contacts }
    }

    /// Dispatcher wired to the real Google Sheets and Beacons endpoints.
    pub fn from_config(config: &SurveyConfig) -> sinks::Result<Self> {
        let records = GoogleSheetsClient::new(&config.sheets, config.request_timeout)?;
        let contacts = BeaconsClient::new(&config.beacons, config.request_timeout)?;
        Ok(Self::new(Arc::new(records), Arc::new(contacts)))
    }

    /// Validates the form, delivers to both sinks and finishes in `Done`.
    ///
    /// The lock is only taken for the phase changes, never across a delivery.
    /// Validation errors leave the form untouched; sink failures do not stop
    /// the form from reaching `Done`.
    pub async fn submit(&self, form: &Mutex<SurveyForm>) -> Result<SubmissionReport> {
        let response = form.lock().begin_submission()?;
        let report = self.dispatch(&response).await;
        form.lock().complete_submission(report.label);
        Ok(report)
    }

    /// Sheet first, then contact list. Each failure is logged and recorded.
    pub async fn dispatch(&self, response: &Response) -> SubmissionReport {
        let submission_id = Uuid::new_v4();
        let label = classify(&response.starting_point);
        info!("📝 Submission {} classified as '{}'", submission_id, label);

        let record = SheetRecord::build(response, label, Utc::now());
        debug!("Survey record: {:?}", record);

        let sheet = DeliveryOutcome::from(self.records.append(&record).await);
        if let DeliveryOutcome::Failed { reason } = &sheet {
            error!("Failed to send submission {} to Google Sheets: {}", submission_id, reason);
        }

        let contact = Contact::build(response, label);
        let contact = DeliveryOutcome::from(self.contacts.upsert(&contact).await);
        if let DeliveryOutcome::Failed { reason } = &contact {
            error!("Failed to sync submission {} with Beacons: {}", submission_id, reason);
        }

        info!(
            "✅ Submission {} finished (sheet delivered: {}, contact delivered: {})",
            submission_id,
            sheet.is_delivered(),
            contact.is_delivered()
        );

        SubmissionReport {
            submission_id,
            label,
            sheet,
            contact,
        }
    }
}
