//! Service integrations for external APIs and clients.
//!
//! This module contains the implementations the github-relay talks to:
//! - Relay services (e.g., traQ webhooks)
//! - The inbound HTTP server GitHub delivers to
//!
//! Outbound services define both a generic trait and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod relay;
pub mod server;
