//! Asynchronous Constellix client implementation.

use url::Url;

use constellix_core::client::{RestClient, RetryPolicy};
use constellix_core::config::ConstellixConfig;
use constellix_core::pagination::{LengthAwareFactory, PaginatorFactory};

use crate::managers::{
    ContactListManager, DomainManager, IpFilterManager, TemplateManager,
};
use crate::Result;

/// Builder for [`ConstellixClient`].
#[derive(Debug, Clone)]
pub struct ConstellixClientBuilder<F = LengthAwareFactory> {
    config: ConstellixConfig,
    retry: Option<RetryPolicy>,
    factory: F,
}

impl ConstellixClientBuilder {
    /// Create a builder for the given API key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials fail validation.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            config: ConstellixConfig::new(api_key, secret_key)?,
            retry: None,
            factory: LengthAwareFactory,
        })
    }
}

impl<F: PaginatorFactory> ConstellixClientBuilder<F> {
    /// Override the base URL (useful for sandboxes and tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    /// Override the request timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config = self.config.with_timeout(seconds);
        self
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Substitute the paginator factory, changing the page type every list
    /// call returns.
    #[must_use]
    pub fn with_paginator_factory<G: PaginatorFactory>(
        self,
        factory: G,
    ) -> ConstellixClientBuilder<G> {
        ConstellixClientBuilder {
            config: self.config,
            retry: self.retry,
            factory,
        }
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<ConstellixClient<F>> {
        let rest = match self.retry {
            Some(retry) => RestClient::with_retry_policy(&self.config, retry)?,
            None => RestClient::new(&self.config)?,
        };
        Ok(ConstellixClient {
            rest,
            factory: self.factory,
        })
    }
}

/// Asynchronous client for the Constellix DNS v4 API.
///
/// Resource operations are grouped into managers: [`domains`](Self::domains),
/// [`templates`](Self::templates), [`ip_filters`](Self::ip_filters) and
/// [`contact_lists`](Self::contact_lists). List calls return pages built by
/// the client's [`PaginatorFactory`]; the default factory produces
/// [`Paginator`](constellix_core::Paginator) values.
#[derive(Debug, Clone)]
pub struct ConstellixClient<F = LengthAwareFactory> {
    rest: RestClient,
    factory: F,
}

impl ConstellixClient {
    /// Construct a client from a configuration, using the default paginator
    /// factory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &ConstellixConfig) -> Result<Self> {
        Self::with_factory(config, LengthAwareFactory)
    }

    /// Construct a client directly from an API key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials fail validation.
    pub fn from_keys(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        ConstellixClientBuilder::new(api_key, secret_key)?.build()
    }
}

impl<F: PaginatorFactory> ConstellixClient<F> {
    /// Construct a client with a substitute paginator factory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_factory(config: &ConstellixConfig, factory: F) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(config)?,
            factory,
        })
    }

    /// Return the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.rest.base_url()
    }

    /// The paginator factory list responses are built with.
    #[must_use]
    pub const fn paginator_factory(&self) -> &F {
        &self.factory
    }

    /// Manager for domain resources.
    #[must_use]
    pub const fn domains(&self) -> DomainManager<'_, F> {
        DomainManager::new(&self.rest, &self.factory)
    }

    /// Manager for template resources.
    #[must_use]
    pub const fn templates(&self) -> TemplateManager<'_, F> {
        TemplateManager::new(&self.rest, &self.factory)
    }

    /// Manager for IP filter resources.
    #[must_use]
    pub const fn ip_filters(&self) -> IpFilterManager<'_, F> {
        IpFilterManager::new(&self.rest, &self.factory)
    }

    /// Manager for contact list resources.
    #[must_use]
    pub const fn contact_lists(&self) -> ContactListManager<'_, F> {
        ContactListManager::new(&self.rest, &self.factory)
    }
}
