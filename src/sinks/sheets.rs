use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use super::{RecordSink, Result};
use crate::config::SheetsConfig;
use crate::survey::SheetRecord;
use std::time::Duration;

/// Posts survey rows to a Google Apps Script web app.
///
/// The script answers with a redirect to an opaque page, so the response is
/// never inspected: any HTTP answer counts as delivered and only transport
/// failures are reported.
#[derive(Clone)]
pub struct GoogleSheetsClient {
    client: Client,
    script_url: String,
}

impl GoogleSheetsClient {
    pub fn new(config: &SheetsConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, config.script_url.as_str()))
    }

    pub fn with_client(client: Client, script_url: impl Into<String>) -> Self {
        Self {
            client,
            script_url: script_url.into(),
        }
    }
}

#[async_trait]
impl RecordSink for GoogleSheetsClient {
    async fn append(&self, record: &SheetRecord) -> Result<()> {
        info!("📄 Sending survey row to Google Sheets");

        let response = self
            .client
            .post(&self.script_url)
            .header("Content-Type", "application/json")
            .json(record)
            .send()
            .await?;

        debug!("Google Sheets answered with {} (not inspected)", response.status());
        Ok(())
    }
}
