//! traQ webhook implementation of the relay.
//!
//! traQ accepts `POST /api/v3/webhooks/{id}` with a plain-text body and an
//! `X-TRAQ-Signature` header holding the hex HMAC-SHA1 of that body.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{info, instrument};

use super::{GenericRelayClient, RelayClient};
use crate::base::{
    config::Config,
    signature,
    types::{Res, Void},
};

const SIGNATURE_HEADER: &str = "X-TRAQ-Signature";
const CHANNEL_HEADER: &str = "X-TRAQ-Channel-Id";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Extra methods on `RelayClient` applied by the traQ implementation.

impl RelayClient {
    /// Creates a new traQ relay client.
    pub fn traq(config: &Config) -> Res<Self> {
        let client = TraqRelayClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<TraqRelayClient> for RelayClient {
    fn from(client: TraqRelayClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// traQ relay client implementation.
#[derive(Clone)]
pub struct TraqRelayClient {
    url: String,
    secret: String,
    channel_id: Option<String>,
    client: reqwest::Client,
}

impl TraqRelayClient {
    /// Create a new traQ relay client.
    #[instrument(name = "TraqRelayClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let url = config.traq_webhook_url();

        info!("Relaying messages to {}", url);

        Ok(Self {
            url,
            secret: config.traq_webhook_secret.clone(),
            channel_id: config.traq_channel_id.clone(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GenericRelayClient for TraqRelayClient {
    #[instrument(skip_all, fields(bytes = message.len()))]
    async fn send_message(&self, message: &str) -> Void {
        let signature = signature::sign(&self.secret, message)?;

        let mut request = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .header(SIGNATURE_HEADER, signature)
            .body(message.to_string());

        if let Some(channel_id) = &self.channel_id {
            request = request.header(CHANNEL_HEADER, channel_id);
        }

        let response = request.send().await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("traQ rejected message with status {}: {}", status, text));
        }

        info!("Message relayed to traQ ({})", status);

        Ok(())
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::config::ConfigInner;

    #[test]
    fn url_is_built_from_config() {
        let config = Config {
            inner: Arc::new(ConfigInner {
                traq_origin: "http://localhost:3000".to_string(),
                traq_webhook_id: "hook".to_string(),
                traq_webhook_secret: "secret".to_string(),
                ..Default::default()
            }),
        };

        let client = TraqRelayClient::new(&config).unwrap();

        assert_eq!(client.url(), "http://localhost:3000/api/v3/webhooks/hook");
    }
}
