//! Per-resource managers performing the CRUD HTTP calls.
//!
//! Managers are cheap, borrowed views handed out by
//! [`ConstellixClient`](crate::client::ConstellixClient); they express each
//! endpoint as a path relative to the configured base URL and hand list
//! responses through the client's paginator factory.

pub mod contact_lists;
pub mod domains;
pub mod ip_filters;
pub mod templates;

pub use contact_lists::{
    ContactListManager, EmailContactManager, SlackWebhookManager, TeamsWebhookManager,
};
pub use domains::DomainManager;
pub use ip_filters::IpFilterManager;
pub use templates::TemplateManager;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PER_PAGE: u32 = 20;
