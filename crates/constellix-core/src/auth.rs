//! HMAC bearer-token request signing.
//!
//! Every request to the v4 API carries an `Authorization: Bearer` token of
//! the form `{apiKey}:{signature}:{timestamp}`, where the signature is the
//! base64-encoded HMAC-SHA512 of the millisecond timestamp keyed with the
//! account's secret key. Tokens are single-use values computed per request.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;

use crate::error::{Error, Result};

type HmacSha512 = Hmac<Sha512>;

/// Signs API requests with the account's key pair.
#[derive(Clone)]
pub struct RequestSigner {
    api_key: String,
    secret_key: SecretString,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl RequestSigner {
    /// Create a signer from an API key / secret key pair.
    #[must_use]
    pub const fn new(api_key: String, secret_key: SecretString) -> Self {
        Self {
            api_key,
            secret_key,
        }
    }

    /// The API key this signer identifies as.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Produce a bearer token for the current instant.
    ///
    /// # Errors
    ///
    /// Returns an error if the HMAC cannot be keyed.
    pub fn bearer_token(&self) -> Result<String> {
        self.bearer_token_at(Utc::now().timestamp_millis())
    }

    /// Produce a bearer token for the given millisecond timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the HMAC cannot be keyed.
    pub fn bearer_token_at(&self, timestamp_millis: i64) -> Result<String> {
        let timestamp = timestamp_millis.to_string();
        let mut mac = HmacSha512::new_from_slice(self.secret_key.expose_secret().as_bytes())
            .map_err(|e| Error::Internal(format!("Failed to key request HMAC: {e}")))?;
        mac.update(timestamp.as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        Ok(format!("Bearer {}:{signature}:{timestamp}", self.api_key))
    }
}
