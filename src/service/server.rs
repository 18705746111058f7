//! Inbound HTTP server that GitHub delivers webhooks to.
//!
//! - `GET /` answers a static string, for liveness checks.
//! - `POST /webhook` verifies, parses and formats the delivery, then hands the
//!   message to the relay on a background task and answers `204 No Content`.

use std::net::SocketAddr;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use crate::{
    base::{signature, types::Void},
    event::{EventKind, GithubEvent},
    format, interaction,
    runtime::Runtime,
};

const EVENT_HEADER: &str = "x-github-event";
const DELIVERY_HEADER: &str = "x-github-delivery";
const SIGNATURE_HEADER: &str = "x-hub-signature-256";

/// Builds the application router.
pub fn router(runtime: Runtime) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/webhook", post(handle_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(runtime)
}

/// Starts the webhook HTTP server and runs until Ctrl-C.
pub async fn serve(runtime: Runtime) -> Void {
    let addr = SocketAddr::from(([0, 0, 0, 0], runtime.config.port));
    let app = router(runtime);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "GitHub webhook server listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("GitHub webhook server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

async fn index() -> &'static str {
    "Server successfully started!"
}

#[instrument(
    name = "github.webhook",
    skip_all,
    fields(
        event = tracing::field::Empty,
        action = tracing::field::Empty,
        delivery = tracing::field::Empty,
    )
)]
async fn handle_webhook(State(runtime): State<Runtime>, headers: HeaderMap, body: Bytes) -> StatusCode {
    if let Some(secret) = &runtime.config.github_webhook_secret {
        let sig = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());

        match sig {
            Some(sig) if signature::verify(secret, &body, sig) => {}
            Some(_) => {
                warn!("Invalid GitHub webhook signature");
                return StatusCode::UNAUTHORIZED;
            }
            None => {
                warn!("Missing X-Hub-Signature-256 header");
                return StatusCode::UNAUTHORIZED;
            }
        }
    }

    let Some(header) = headers.get(EVENT_HEADER).and_then(|v| v.to_str().ok()) else {
        warn!("Missing X-GitHub-Event header");
        return StatusCode::BAD_REQUEST;
    };

    let delivery = headers.get(DELIVERY_HEADER).and_then(|v| v.to_str().ok()).unwrap_or("unknown");

    let span = tracing::Span::current();
    span.record("event", header);
    span.record("delivery", delivery);

    let kind = match header.parse::<EventKind>() {
        Ok(kind) => kind,
        Err(e) => {
            warn!(error = %e, "Received invalid payload");
            return StatusCode::BAD_REQUEST;
        }
    };

    let event = match GithubEvent::parse(kind, &body) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Received invalid payload");
            return StatusCode::BAD_REQUEST;
        }
    };

    span.record("action", event.action());
    info!("Received event {}, action {}", kind, event.action());

    match format::format_event(&event) {
        Some(message) => {
            interaction::relay_event::handle_relay_event(kind, event.action().to_string(), message, runtime.relay.clone());
        }
        None => info!("Nothing to relay"),
    }

    StatusCode::NO_CONTENT
}
