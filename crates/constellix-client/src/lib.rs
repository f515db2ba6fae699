//! Typed client and data models for the Constellix DNS v4 API.
//!
//! Provides serde models for the managed resources (domains, templates, IP
//! filters, contact lists and their contacts) and per-resource managers that
//! perform the CRUD calls. List endpoints come back wrapped in the page type
//! produced by the client's [`PaginatorFactory`].

#![deny(missing_docs)]

pub mod client;
pub mod managers;
pub mod models;

pub use client::{ConstellixClient, ConstellixClientBuilder};
pub use managers::{
    ContactListManager, DomainManager, EmailContactManager, IpFilterManager,
    SlackWebhookManager, TeamsWebhookManager, TemplateManager,
};
pub use models::{
    ContactList, ContactListId, Continent, CreateContactListRequest, CreateDomainRequest,
    CreateEmailContactRequest, CreateTemplateRequest, Domain, DomainId, DomainListParams,
    DomainStatus, DomainStub, EmailContact, EmailContactId, IpFilter, IpFilterId,
    IpFilterRegion, IpFilterRequest, PageParams, SlackWebhook, SoaRecord, TeamsWebhook, Template,
    TemplateId, TemplateStub, UpdateDomainRequest, UpdateTemplateRequest, WebhookId,
    WebhookRequest,
};

pub use constellix_core::client::RetryPolicy;
pub use constellix_core::config::ConstellixConfig;
pub use constellix_core::{Error, LengthAwareFactory, Paginator, PaginatorFactory};

/// Convenient result alias that reuses the shared Constellix error type.
pub type Result<T> = constellix_core::Result<T>;
