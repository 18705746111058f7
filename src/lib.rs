//! Library root for `github-relay`.
//!
//! Github-relay receives GitHub webhook deliveries and reposts them to a traQ
//! channel as readable messages:
//! - Verify and parse the delivery by its `X-GitHub-Event` header
//! - Pick an icon and template per event type and action
//! - Append assignees, labels, reviewers, or the pushed commits
//! - Sign the message and post it to a traQ webhook
//!
//! The relay target sits behind a trait so other chat services (or a mock in
//! tests) can stand in for traQ.

pub mod base;
pub mod event;
pub mod format;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the github-relay runtime:
/// - Creates the runtime context with the relay client
/// - Starts the webhook server
pub async fn start(config: Config) -> Void {
    info!("Starting github-relay ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
