//! Data models for the managed API resources.

pub mod contact_list;
pub mod domain;
pub mod ids;
pub mod ip_filter;
pub mod template;

pub use contact_list::{
    ContactList, CreateContactListRequest, CreateEmailContactRequest, EmailContact, SlackWebhook,
    TeamsWebhook, WebhookRequest,
};
pub use domain::{
    CreateDomainRequest, Domain, DomainListParams, DomainStatus, DomainStub, SoaRecord,
    UpdateDomainRequest,
};
pub use ids::{ContactListId, DomainId, EmailContactId, IpFilterId, TemplateId, WebhookId};
pub use ip_filter::{Continent, IpFilter, IpFilterRegion, IpFilterRequest};
pub use template::{CreateTemplateRequest, Template, TemplateStub, UpdateTemplateRequest};

use constellix_core::query::QueryParams;

/// Page geometry accepted by every list endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageParams {
    /// Page to fetch (1-based, defaults to 1)
    pub page: Option<u32>,
    /// Items per page (defaults to the manager default)
    pub per_page: Option<u32>,
}

impl PageParams {
    /// Parameters for the given page with the default page size.
    #[must_use]
    pub const fn for_page(page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: None,
        }
    }

    /// Resolve the page number, defaulting to the first page.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Resolve the page size against the given default.
    #[must_use]
    pub fn per_page_or(&self, default: u32) -> u32 {
        self.per_page.unwrap_or(default)
    }

    /// Convert the resolved geometry into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self, default_per_page: u32) -> Vec<(&'static str, String)> {
        QueryParams::for_page(self.page(), self.per_page_or(default_per_page)).into_pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page_or(20), 20);
        assert_eq!(
            params.to_pairs(20),
            vec![("page", "1".to_string()), ("perPage", "20".to_string())]
        );
    }

    #[test]
    fn page_params_explicit() {
        let params = PageParams {
            page: Some(3),
            per_page: Some(50),
        };
        assert_eq!(
            params.to_pairs(20),
            vec![("page", "3".to_string()), ("perPage", "50".to_string())]
        );
    }
}
