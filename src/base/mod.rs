//! Core components, types, and utilities for the github-relay.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Stamp names used as message icons.
//! - HMAC signing and verification.
//! - Common types and result handling.

pub mod config;
pub mod icons;
pub mod signature;
pub mod types;
