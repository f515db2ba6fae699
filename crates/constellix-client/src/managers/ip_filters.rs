//! Manager for IP filter resources.

use constellix_core::client::RestClient;
use constellix_core::pagination::PaginatorFactory;

use crate::models::{IpFilter, IpFilterId, IpFilterRequest, PageParams};
use crate::Result;

use super::DEFAULT_PER_PAGE;

/// Manages IP filter API resources.
#[derive(Debug, Clone, Copy)]
pub struct IpFilterManager<'a, F> {
    rest: &'a RestClient,
    factory: &'a F,
}

impl<'a, F: PaginatorFactory> IpFilterManager<'a, F> {
    pub(crate) const fn new(rest: &'a RestClient, factory: &'a F) -> Self {
        Self { rest, factory }
    }

    /// Fetch an existing IP filter.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn get(&self, id: IpFilterId) -> Result<IpFilter> {
        self.rest.get_object(&format!("ipfilters/{id}")).await
    }

    /// Create a new IP filter.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn create(&self, request: &IpFilterRequest) -> Result<IpFilter> {
        self.rest.post_object("ipfilters", request).await
    }

    /// Update an existing IP filter. The rule set is replaced wholesale.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn update(&self, id: IpFilterId, request: &IpFilterRequest) -> Result<IpFilter> {
        self.rest
            .put_object(&format!("ipfilters/{id}"), request)
            .await
    }

    /// Delete an IP filter.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn delete(&self, id: IpFilterId) -> Result<()> {
        self.rest.delete(&format!("ipfilters/{id}")).await
    }

    /// Fetch one page of IP filters, wrapped by the client's paginator
    /// factory.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn list(&self, params: &PageParams) -> Result<F::Page<IpFilter>> {
        let query = params.to_pairs(DEFAULT_PER_PAGE);
        let (items, meta) = self.rest.get_list::<IpFilter>("ipfilters", &query).await?;
        self.factory.paginate(
            items,
            meta.total,
            params.per_page_or(DEFAULT_PER_PAGE),
            params.page(),
        )
    }
}
