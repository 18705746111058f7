//! This module handles relaying a formatted message.

use tracing::{Instrument, error, info, instrument};

use crate::{base::types::Void, event::EventKind, service::relay::RelayClient};

/// Handles the relay of a formatted message.
///
/// The send happens on its own task so the webhook response never waits on
/// the relay target. Errors are logged and dropped.
#[instrument(skip_all, fields(event = %kind, action = %action))]
pub fn handle_relay_event(kind: EventKind, action: String, message: String, relay: RelayClient) {
    tokio::spawn(
        async move {
            // Process the event.
            let result = handle_relay_event_internal(&message, &relay).await;

            // Log any errors.
            if let Err(err) = &result {
                error!("Error while relaying: {}", err);
            }
        }
        .in_current_span(),
    );
}

/// Internal function to relay the message.
#[instrument(skip_all)]
async fn handle_relay_event_internal(message: &str, relay: &RelayClient) -> Void {
    relay.send_message(message).await?;

    info!("Relayed message ({} bytes)", message.len());

    Ok(())
}
