//! HMAC helpers for both ends of the relay.
//!
//! Inbound GitHub deliveries are checked against `X-Hub-Signature-256`, and
//! outbound traQ messages are signed with HMAC-SHA1 for `X-TRAQ-Signature`.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use crate::base::types::Res;

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

/// Verifies a GitHub webhook signature using constant-time comparison.
///
/// GitHub sends `X-Hub-Signature-256: sha256=<hex>`. This function validates
/// the HMAC-SHA256 of the raw request body against that header value.
pub fn verify(secret: &str, body: &[u8], signature_header: &str) -> bool {
    let Some(hex_sig) = signature_header.strip_prefix("sha256=") else {
        return false;
    };

    let Ok(expected) = hex::decode(hex_sig) else {
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };

    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Signs an outbound message as traQ expects: lowercase hex of HMAC-SHA1.
pub fn sign(secret: &str, message: &str) -> Res<String> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes()).map_err(|e| anyhow::anyhow!("Invalid signing key: {}", e))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
