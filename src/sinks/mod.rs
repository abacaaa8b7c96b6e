//! Outbound destinations for a submitted survey.
//!
//! Both sinks are best-effort: the dispatcher turns whatever they return into a
//! [`DeliveryOutcome`], logs failures and moves on.

pub mod beacons;
pub mod sheets;

pub use beacons::BeaconsClient;
pub use sheets::GoogleSheetsClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::survey::{Contact, SheetRecord};

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, SinkError>;

/// Result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Delivered,
    Failed { reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

impl From<Result<()>> for DeliveryOutcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(e) => DeliveryOutcome::Failed { reason: e.to_string() },
        }
    }
}

/// Sink A: spreadsheet logger.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn append(&self, record: &SheetRecord) -> Result<()>;
}

/// Sink B: contact list.
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn upsert(&self, contact: &Contact) -> Result<()>;
}
