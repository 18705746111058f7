//! Relay service integration for github-relay.
//!
//! This module provides the outbound half of the relay: posting a formatted
//! message to a chat platform. It defines the `GenericRelayClient` trait that
//! can be implemented for different targets, with a default implementation for
//! traQ webhooks.

pub mod traq;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Void;

// Traits.

/// Generic "relay" trait that clients must implement.
#[async_trait]
pub trait GenericRelayClient: Send + Sync + 'static {
    /// Post a message to the relay target.
    ///
    /// A single attempt is made; failures are returned to the caller and
    /// never retried.
    async fn send_message(&self, message: &str) -> Void;
}

// Structs.

/// Relay client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct RelayClient {
    inner: Arc<dyn GenericRelayClient>,
}

impl Deref for RelayClient {
    type Target = dyn GenericRelayClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl RelayClient {
    pub fn new(inner: Arc<dyn GenericRelayClient>) -> Self {
        Self { inner }
    }
}
