use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::{ContactSink, Result, SinkError};
use crate::config::BeaconsConfig;
use crate::survey::{Contact, Label};

#[derive(Serialize)]
struct BeaconsContactRequest<'a> {
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    tags: &'a [Label],
    list_id: &'a str,
}

#[derive(Clone)]
pub struct BeaconsClient {
    client: Client,
    base_url: String,
    api_key: String,
    list_id: String,
}

impl BeaconsClient {
    pub fn new(config: &BeaconsConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(
            client,
            config.base_url.as_str(),
            config.api_key.clone(),
            config.list_id.clone(),
        ))
    }

    pub fn with_client(client: Client, base_url: &str, api_key: String, list_id: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            list_id,
        }
    }

    pub fn contacts_url(&self) -> String {
        format!("{}/contacts", self.base_url)
    }
}

#[async_trait]
impl ContactSink for BeaconsClient {
    async fn upsert(&self, contact: &Contact) -> Result<()> {
        let request = BeaconsContactRequest {
            email: &contact.email,
            first_name: &contact.first_name,
            last_name: &contact.last_name,
            tags: &contact.tags,
            list_id: &self.list_id,
        };

        info!("👥 Syncing contact to Beacons list {}", self.list_id);

        let response = self
            .client
            .post(self.contacts_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Beacons API rejected the contact: {} {}", status, body);
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
