use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use roi_core::constants::DEFAULT_REPORT_RECIPIENT;
use roi_mailer::{MailRelayConfig, DEFAULT_RELAY_URL, DEFAULT_SENDER_EMAIL, DEFAULT_SENDER_NAME};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_DB_PATH: &str = "./db/roi.db";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub report_recipient: String,
    pub mail_relay: MailRelayConfig,
}

impl Config {
    /// Reads `ROI_*` variables, after loading a `.env` file if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset and blank values take defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr: SocketAddr = get("ROI_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid ROI_LISTEN_ADDR")?;
        let db_path = get("ROI_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let cors_allow = get("ROI_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = match get("ROI_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid ROI_REQUEST_TIMEOUT_MS '{}'", raw))?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };
        if timeout_ms == 0 {
            return Err(anyhow!("ROI_REQUEST_TIMEOUT_MS must be greater than zero"));
        }
        let report_recipient =
            get("ROI_REPORT_RECIPIENT").unwrap_or_else(|| DEFAULT_REPORT_RECIPIENT.into());

        let mail_relay = MailRelayConfig {
            endpoint: get("ROI_MAIL_RELAY_URL").unwrap_or_else(|| DEFAULT_RELAY_URL.into()),
            api_key: get("ROI_MAIL_API_KEY"),
            sender_email: get("ROI_MAIL_SENDER_EMAIL")
                .unwrap_or_else(|| DEFAULT_SENDER_EMAIL.into()),
            sender_name: get("ROI_MAIL_SENDER_NAME").unwrap_or_else(|| DEFAULT_SENDER_NAME.into()),
            ..MailRelayConfig::default()
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            report_recipient,
            mail_relay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.db_path, "./db/roi.db");
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.report_recipient, "hola@efficiency24.io");
        assert_eq!(config.mail_relay.endpoint, DEFAULT_RELAY_URL);
        assert_eq!(DEFAULT_RELAY_URL, "https://api.mailchannels.net/tx/v1/send");
        assert_eq!(config.mail_relay.api_key, None);
        assert_eq!(config.mail_relay.sender_name, "Calculadora ROI Efficiency24");
    }

    #[test]
    fn overrides_and_origin_list() {
        let config = config_from(&[
            ("ROI_LISTEN_ADDR", "127.0.0.1:9000"),
            ("ROI_CORS_ALLOW_ORIGINS", "https://a.example, https://b.example,"),
            ("ROI_REQUEST_TIMEOUT_MS", "1500"),
            ("ROI_MAIL_API_KEY", "key"),
            ("ROI_MAIL_RELAY_URL", "https://api.mailchannels.net/tx/send"),
            ("ROI_REPORT_RECIPIENT", "ops@example.com"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(
            config.cors_allow,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert_eq!(config.mail_relay.api_key.as_deref(), Some("key"));
        assert_eq!(
            config.mail_relay.endpoint,
            "https://api.mailchannels.net/tx/send"
        );
        assert_eq!(config.report_recipient, "ops@example.com");
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(config_from(&[("ROI_LISTEN_ADDR", "not-an-addr")]).is_err());
        assert!(config_from(&[("ROI_REQUEST_TIMEOUT_MS", "soon")]).is_err());
        assert!(config_from(&[("ROI_REQUEST_TIMEOUT_MS", "0")]).is_err());
    }
}
