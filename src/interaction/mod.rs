//! Event handling for github-relay.
//!
//! This module provides the work done for each accepted delivery once the
//! HTTP response has been decided:
//! - Relaying formatted messages to the chat target
//! - Logging failures, which are never reported back to GitHub

pub mod relay_event;
