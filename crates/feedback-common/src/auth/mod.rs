//! Webhook authentication

mod signature;

pub use signature::{SignatureVerifier, SIGNATURE_HEADER, SIGNATURE_PREFIX};
