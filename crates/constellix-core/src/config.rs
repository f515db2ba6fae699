//! Configuration structures for Constellix clients.
//!
//! This module provides the configuration type used to connect to the
//! Constellix v4 API, including credential handling and validation.

use crate::Error;
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Default base URL for the Constellix v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.dns.constellix.com/v4/";

/// Configuration for a Constellix client instance.
///
/// Credentials are the API key / secret key pair from the Constellix control
/// panel. The secret key is wrapped in [`SecretString`] so it is redacted
/// from debug output and never serialized.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConstellixConfig {
    /// API key used to identify the account
    #[validate(length(min = 1, message = "API key must not be empty"))]
    pub api_key: String,

    /// Secret key used to sign requests
    pub secret_key: SecretString,

    /// Base URL of the API
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of retry attempts for retryable failures
    #[validate(range(min = 0, max = 10))]
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_max_retries() -> u32 {
    3
}

impl ConstellixConfig {
    /// Create a new configuration from an API key / secret key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (for example an empty API key).
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key.into()),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Override the base URL (useful for sandboxes and tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set the maximum retry attempts.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Get the request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse and validate the base URL.
    ///
    /// A missing trailing slash is added so that relative resource paths join
    /// under the versioned prefix instead of replacing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        let raw = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };
        Url::parse(&raw).map_err(|e| Error::ConfigInvalid(format!("Invalid base URL: {e}")))
    }
}
