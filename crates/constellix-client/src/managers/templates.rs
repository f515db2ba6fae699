//! Manager for template resources.

use constellix_core::client::RestClient;
use constellix_core::pagination::PaginatorFactory;

use crate::models::{
    CreateTemplateRequest, PageParams, Template, TemplateId, TemplateStub, UpdateTemplateRequest,
};
use crate::Result;

use super::DEFAULT_PER_PAGE;

/// Manages template API resources.
#[derive(Debug, Clone, Copy)]
pub struct TemplateManager<'a, F> {
    rest: &'a RestClient,
    factory: &'a F,
}

impl<'a, F: PaginatorFactory> TemplateManager<'a, F> {
    pub(crate) const fn new(rest: &'a RestClient, factory: &'a F) -> Self {
        Self { rest, factory }
    }

    /// Fetch an existing template.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn get(&self, id: TemplateId) -> Result<Template> {
        self.rest.get_object(&format!("templates/{id}")).await
    }

    /// Create a new template.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn create(&self, request: &CreateTemplateRequest) -> Result<Template> {
        self.rest.post_object("templates", request).await
    }

    /// Update an existing template.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn update(&self, id: TemplateId, request: &UpdateTemplateRequest) -> Result<Template> {
        self.rest
            .put_object(&format!("templates/{id}"), request)
            .await
    }

    /// Delete a template.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn delete(&self, id: TemplateId) -> Result<()> {
        self.rest.delete(&format!("templates/{id}")).await
    }

    /// Fetch one page of templates, wrapped by the client's paginator factory.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn list(&self, params: &PageParams) -> Result<F::Page<TemplateStub>> {
        let query = params.to_pairs(DEFAULT_PER_PAGE);
        let (items, meta) = self.rest.get_list::<TemplateStub>("templates", &query).await?;
        self.factory.paginate(
            items,
            meta.total,
            params.per_page_or(DEFAULT_PER_PAGE),
            params.page(),
        )
    }
}
