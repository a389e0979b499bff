use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use std::time::Duration;

use roi_core::errors::{Error, Result};
use roi_core::mail::{EmailMessage, MailTransportTrait};

/// Default timeout for relay requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest slice of a relay error body kept in the error message.
const ERROR_BODY_LIMIT: usize = 200;

/// Current MailChannels send endpoint. The legacy `/tx/send` path is reachable
/// through configuration.
pub const DEFAULT_RELAY_URL: &str = "https://api.mailchannels.net/tx/v1/send";
pub const DEFAULT_SENDER_EMAIL: &str = "noreply@efficiency24.io";
pub const DEFAULT_SENDER_NAME: &str = "Calculadora ROI Efficiency24";

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Where and as whom reports are sent.
#[derive(Debug, Clone)]
pub struct MailRelayConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub sender_email: String,
    pub sender_name: String,
    pub timeout: Duration,
}

impl Default for MailRelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_URL.to_string(),
            api_key: None,
            sender_email: DEFAULT_SENDER_EMAIL.to_string(),
            sender_name: DEFAULT_SENDER_NAME.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Relay payload
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Mailbox<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Mailbox<'a>>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Mailbox<'a>>,
}

#[derive(Debug, Serialize)]
struct Mailbox<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// Sends [`EmailMessage`]s as plain text through the configured relay.
///
/// One request per message, no retries.
#[derive(Debug, Clone)]
pub struct MailRelayClient {
    client: reqwest::Client,
    endpoint: String,
    headers: HeaderMap,
    sender_email: String,
    sender_name: String,
}

impl MailRelayClient {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the HTTP
    /// client cannot be initialized.
    pub fn new(config: MailRelayConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(api_key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            let mut value = HeaderValue::from_str(api_key)
                .map_err(|e| Error::Unexpected(format!("Invalid mail relay API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
            headers,
            sender_email: config.sender_email,
            sender_name: config.sender_name,
        })
    }

    fn payload<'a>(&'a self, message: &'a EmailMessage) -> RelayPayload<'a> {
        RelayPayload {
            personalizations: vec![Personalization {
                to: vec![Mailbox {
                    email: &message.to,
                    name: None,
                }],
            }],
            from: Mailbox {
                email: &self.sender_email,
                name: Some(&self.sender_name).filter(|n| !n.is_empty()).map(String::as_str),
            },
            reply_to: message.reply_to.as_deref().map(|email| Mailbox { email, name: None }),
            subject: &message.subject,
            content: vec![Content {
                content_type: "text/plain",
                value: &message.body,
            }],
        }
    }
}

#[async_trait]
impl MailTransportTrait for MailRelayClient {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        debug!("[MailRelay] POST {} ({})", self.endpoint, message.subject);

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&self.payload(message))
            .send()
            .await
            .map_err(|e| Error::Mail(format!("Mail relay request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!("[MailRelay] Relay rejected message with status {}", status);
        Err(Error::Mail(format!(
            "Mail relay error {}: {}",
            status,
            body.chars().take(ERROR_BODY_LIMIT).collect::<String>()
        )))
    }
}
