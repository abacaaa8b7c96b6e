use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::survey::Label;

pub const DEFAULT_BEACONS_BASE_URL: &str = "https://api.beacons.ai/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

// Values shipped in the form template; a deployment must replace them.
const PLACEHOLDER_MARKERS: &[&str] = &["TU_URL_", "TU_API_KEY_", "TU_LIST_ID_", "_AQUI"];

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} still holds the template placeholder value")]
    Placeholder(&'static str),
    #[error("{key} is not a valid URL: {reason}")]
    InvalidUrl { key: &'static str, reason: String },
    #[error("{key} is not a valid number: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Guide document shown on the thank-you screen, one per profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentLinks {
    pub confused: String,
    pub overwhelmed: String,
    pub stuck: String,
    pub general: String,
}

impl Default for DocumentLinks {
    fn default() -> Self {
        Self {
            confused: "https://tusitio.com/guia-confundido".to_string(),
            overwhelmed: "https://tusitio.com/guia-saturado".to_string(),
            stuck: "https://tusitio.com/guia-paralizado".to_string(),
            general: "https://tusitio.com/guia-general".to_string(),
        }
    }
}

impl DocumentLinks {
    pub fn for_label(&self, label: Label) -> &str {
        match label {
            Label::Confused => &self.confused,
            Label::Overwhelmed => &self.overwhelmed,
            Label::Stuck => &self.stuck,
            Label::Unknown => &self.general,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Instagram,
    TikTok,
    Facebook,
    WhatsApp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: String,
}

pub fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink { network: SocialNetwork::Instagram, url: "https://instagram.com".to_string() },
        SocialLink { network: SocialNetwork::TikTok, url: "https://tiktok.com".to_string() },
        SocialLink { network: SocialNetwork::Facebook, url: "https://facebook.com".to_string() },
        SocialLink { network: SocialNetwork::WhatsApp, url: "https://wa.me/".to_string() },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetsConfig {
    pub script_url: Url,
}

#[derive(Clone, PartialEq)]
pub struct BeaconsConfig {
    pub base_url: Url,
    pub api_key: String,
    pub list_id: String,
}

// Keep the API key out of debug output.
impl std::fmt::Debug for BeaconsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeaconsConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &mask_secret(&self.api_key))
            .field("list_id", &self.list_id)
            .finish()
    }
}

/// Everything the survey needs from the deployment. Built once at startup and
/// handed to the dispatcher and the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyConfig {
    pub sheets: SheetsConfig,
    pub beacons: BeaconsConfig,
    pub request_timeout: Duration,
    pub document_links: DocumentLinks,
    pub social_links: Vec<SocialLink>,
}

impl SurveyConfig {
    /// Load from `.env`, the runtime environment, and values embedded at build time.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(get_env_var)
    }

    /// Build from an arbitrary key lookup. `from_env` is this with the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let script_url = required_url(&lookup, "DIAGNOSTICO_SHEETS_URL")?;
        let api_key = required_value(&lookup, "DIAGNOSTICO_BEACONS_API_KEY")?;
        let list_id = required_value(&lookup, "DIAGNOSTICO_BEACONS_LIST_ID")?;
        let base_url = match optional_url(&lookup, "DIAGNOSTICO_BEACONS_BASE_URL")? {
            Some(url) => url,
            None => parse_url("DIAGNOSTICO_BEACONS_BASE_URL", DEFAULT_BEACONS_BASE_URL)?,
        };

        let request_timeout = match lookup("DIAGNOSTICO_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let invalid = || ConfigError::InvalidNumber {
                    key: "DIAGNOSTICO_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                };
                // A zero timeout would fail every delivery immediately.
                match raw.trim().parse::<u64>() {
                    Ok(secs) if secs > 0 => Duration::from_secs(secs),
                    _ => return Err(invalid()),
                }
            }
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let defaults = DocumentLinks::default();
        let document_links = DocumentLinks {
            confused: link_or(&lookup, "DIAGNOSTICO_GUIDE_URL_CONFUNDIDO", defaults.confused)?,
            overwhelmed: link_or(&lookup, "DIAGNOSTICO_GUIDE_URL_SATURADO", defaults.overwhelmed)?,
            stuck: link_or(&lookup, "DIAGNOSTICO_GUIDE_URL_PARALIZADO", defaults.stuck)?,
            general: link_or(&lookup, "DIAGNOSTICO_GUIDE_URL_GENERAL", defaults.general)?,
        };

        let mut social_links = default_social_links();
        for link in social_links.iter_mut() {
            let key = match link.network {
                SocialNetwork::Instagram => "DIAGNOSTICO_INSTAGRAM_URL",
                SocialNetwork::TikTok => "DIAGNOSTICO_TIKTOK_URL",
                SocialNetwork::Facebook => "DIAGNOSTICO_FACEBOOK_URL",
                SocialNetwork::WhatsApp => "DIAGNOSTICO_WHATSAPP_URL",
            };
            link.url = link_or(&lookup, key, std::mem::take(&mut link.url))?;
        }

        Ok(Self {
            sheets: SheetsConfig { script_url },
            beacons: BeaconsConfig { base_url, api_key, list_id },
            request_timeout,
            document_links,
            social_links,
        })
    }
}

fn required_value<F>(lookup: &F, key: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).ok_or(ConfigError::Missing(key))?;
    if is_placeholder(&value) {
        return Err(ConfigError::Placeholder(key));
    }
    Ok(value)
}

fn required_url<F>(lookup: &F, key: &'static str) -> Result<Url>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = required_value(lookup, key)?;
    parse_url(key, &raw)
}

fn optional_url<F>(lookup: &F, key: &'static str) -> Result<Option<Url>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|raw| parse_url(key, &raw)).transpose()
}

fn link_or<F>(lookup: &F, key: &'static str, default: String) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match optional_url(lookup, key)? {
        Some(url) => Ok(url.to_string()),
        None => Ok(default),
    }
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl { key, reason: e.to_string() })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            key,
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_MARKERS.iter().any(|marker| value.contains(marker))
}

/// Runtime environment first, then the value embedded by build.rs.
pub fn get_env_var(key: &str) -> Option<String> {
    // Load .env file if it exists for development
    let _ = dotenvy::dotenv();

    if let Ok(value) = std::env::var(key) {
        if !value.is_empty() {
            return Some(value);
        }
    }

    // option_env! needs literal names
    let embedded_value = match key {
        "DIAGNOSTICO_SHEETS_URL" => option_env!("DIAGNOSTICO_SHEETS_URL"),
        "DIAGNOSTICO_BEACONS_API_KEY" => option_env!("DIAGNOSTICO_BEACONS_API_KEY"),
        "DIAGNOSTICO_BEACONS_LIST_ID" => option_env!("DIAGNOSTICO_BEACONS_LIST_ID"),
        "DIAGNOSTICO_BEACONS_BASE_URL" => option_env!("DIAGNOSTICO_BEACONS_BASE_URL"),
        "DIAGNOSTICO_REQUEST_TIMEOUT_SECS" => option_env!("DIAGNOSTICO_REQUEST_TIMEOUT_SECS"),
        "DIAGNOSTICO_GUIDE_URL_CONFUNDIDO" => option_env!("DIAGNOSTICO_GUIDE_URL_CONFUNDIDO"),
        "DIAGNOSTICO_GUIDE_URL_SATURADO" => option_env!("DIAGNOSTICO_GUIDE_URL_SATURADO"),
        "DIAGNOSTICO_GUIDE_URL_PARALIZADO" => option_env!("DIAGNOSTICO_GUIDE_URL_PARALIZADO"),
        "DIAGNOSTICO_GUIDE_URL_GENERAL" => option_env!("DIAGNOSTICO_GUIDE_URL_GENERAL"),
        "DIAGNOSTICO_INSTAGRAM_URL" => option_env!("DIAGNOSTICO_INSTAGRAM_URL"),
        "DIAGNOSTICO_TIKTOK_URL" => option_env!("DIAGNOSTICO_TIKTOK_URL"),
        "DIAGNOSTICO_FACEBOOK_URL" => option_env!("DIAGNOSTICO_FACEBOOK_URL"),
        "DIAGNOSTICO_WHATSAPP_URL" => option_env!("DIAGNOSTICO_WHATSAPP_URL"),
        _ => None,
    };

    embedded_value.filter(|v| !v.is_empty()).map(|v| v.to_string())
}

pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}

pub fn log_environment_status() {
    info!("🔧 Survey configuration status (runtime + embedded fallback):");

    for key in ["DIAGNOSTICO_SHEETS_URL", "DIAGNOSTICO_BEACONS_LIST_ID"] {
        match get_env_var(key) {
            Some(value) if is_placeholder(&value) => warn!("⚠️ {}: still the template placeholder", key),
            Some(value) => info!("✅ {}: {}", key, value),
            None => warn!("❌ {}: not set - submissions will not reach this sink", key),
        }
    }

    match get_env_var("DIAGNOSTICO_BEACONS_API_KEY") {
        Some(key) if is_placeholder(&key) => warn!("⚠️ DIAGNOSTICO_BEACONS_API_KEY: still the template placeholder"),
        Some(key) => info!("✅ DIAGNOSTICO_BEACONS_API_KEY: {} (length: {})", mask_secret(&key), key.len()),
        None => warn!("❌ DIAGNOSTICO_BEACONS_API_KEY: not set - contacts will not sync"),
    }
}
