//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default HTTP listening port.
fn default_port() -> u16 {
    8090
}

/// Default traQ origin to relay messages to.
fn default_traq_origin() -> String {
    "https://q.trap.jp".to_string()
}

/// Configuration for the github-relay application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// HTTP listening port (`GITHUB_RELAY_PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Secret configured on the GitHub webhook (`GITHUB_RELAY_GITHUB_WEBHOOK_SECRET`).
    /// When unset, inbound signatures are not checked.
    #[serde(default)]
    pub github_webhook_secret: Option<String>,
    /// Origin of the traQ instance (`GITHUB_RELAY_TRAQ_ORIGIN`).
    #[serde(default = "default_traq_origin")]
    pub traq_origin: String,
    /// traQ webhook ID (`GITHUB_RELAY_TRAQ_WEBHOOK_ID`).
    pub traq_webhook_id: String,
    /// traQ webhook secret used for `X-TRAQ-Signature` (`GITHUB_RELAY_TRAQ_WEBHOOK_SECRET`).
    pub traq_webhook_secret: String,
    /// Optional channel override (`GITHUB_RELAY_TRAQ_CHANNEL_ID`).
    /// When unset, traQ posts to the webhook's default channel.
    #[serde(default)]
    pub traq_channel_id: Option<String>,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("GITHUB_RELAY"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    fn validate(&self) -> Res<()> {
        if self.port == 0 {
            return Err(anyhow::anyhow!("Port must be non-zero."));
        }

        if self.traq_webhook_id.trim().is_empty() {
            return Err(anyhow::anyhow!("traQ webhook ID must not be empty."));
        }

        if !self.traq_origin.starts_with("http://") && !self.traq_origin.starts_with("https://") {
            return Err(anyhow::anyhow!("traQ origin must be an http(s) URL."));
        }

        Ok(())
    }

    /// Full URL of the traQ webhook endpoint.
    pub fn traq_webhook_url(&self) -> String {
        format!("{}/api/v3/webhooks/{}", self.traq_origin.trim_end_matches('/'), self.traq_webhook_id)
    }
}
