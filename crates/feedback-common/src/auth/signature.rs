//! Webhook signature verification
//!
//! The platform signs every delivery with HMAC-SHA256 over the raw request
//! body and sends `sha256=<hex digest>` in [`SIGNATURE_HEADER`]. Verification
//! must run on the exact bytes received, before any JSON parsing.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

/// Header carrying the delivery signature
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

/// Algorithm prefix of the header value
pub const SIGNATURE_PREFIX: &str = "sha256=";

type HmacSha256 = Hmac<Sha256>;

/// Verifies webhook deliveries against a shared secret
#[derive(Clone)]
pub struct SignatureVerifier {
    keyed: HmacSha256,
}

impl SignatureVerifier {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            keyed: <HmacSha256 as Mac>::new_from_slice(secret.as_ref())
                .expect("HMAC accepts keys of any length"),
        }
    }

    /// Compute the header value the platform would send for `body`
    pub fn sign(&self, body: &[u8]) -> String {
        let mut mac = self.keyed.clone();
        mac.update(body);
        format!("{SIGNATURE_PREFIX}{}", hex::encode(mac.finalize().into_bytes()))
    }

    /// Check a provided header value.
    ///
    /// Missing, malformed and mismatching signatures all yield `false`.
    /// The digest comparison is constant time.
    pub fn verify(&self, body: &[u8], signature: Option<&str>) -> bool {
        let Some(hex_digest) = signature.and_then(|s| s.trim().strip_prefix(SIGNATURE_PREFIX)) else {
            return false;
        };
        let Ok(expected) = hex::decode(hex_digest) else {
            return false;
        };

        let mut mac = self.keyed.clone();
        mac.update(body);
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("secret", &"<redacted>")
            .finish()
    }
}
