//! Runtime services and shared state for the github-relay.

use tracing::instrument;

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    service::{relay::RelayClient, server},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the relay client and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The relay client instance.
    pub relay: RelayClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the traQ relay client.
        let relay = RelayClient::traq(&config)?;

        Ok(Self { config, relay })
    }

    /// Serve webhooks until shutdown.
    pub async fn start(&self) -> Void {
        server::serve(self.clone()).await
    }
}
