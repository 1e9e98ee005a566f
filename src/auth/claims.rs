//! Decoding of the JWT claims the client actually consumes.
//!
//! The token is otherwise opaque: only the base64url payload segment is
//! read, the signature is the backend's business. Claims beyond `email`,
//! `role`, and `exp` are ignored.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::Role;

#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("token is not a three-part JWT")]
    Structure,
    #[error("payload segment is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("payload is not a valid claims object: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Claims consumed by the session lifecycle. `exp` is epoch seconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Claims {
    pub email: String,
    pub role: Role,
    pub exp: f64,
}

impl Claims {
    /// Decode the payload segment of a JWT without verifying the signature.
    pub fn decode(token: &str) -> Result<Self, ClaimsError> {
        let mut parts = token.split('.');
        let (Some(_), Some(payload), Some(_), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ClaimsError::Structure);
        };
        // Some issuers pad; base64url claims are canonically unpadded.
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Expiry check against a `Date::now()`-style millisecond clock.
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.exp * 1000.0 <= now_ms
    }
}
