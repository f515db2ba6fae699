//! Manager for domain resources.

use constellix_core::client::RestClient;
use constellix_core::pagination::PaginatorFactory;

use crate::models::{
    CreateDomainRequest, Domain, DomainId, DomainListParams, DomainStub, UpdateDomainRequest,
};
use crate::Result;

use super::DEFAULT_PER_PAGE;

/// Manages domain API resources.
#[derive(Debug, Clone, Copy)]
pub struct DomainManager<'a, F> {
    rest: &'a RestClient,
    factory: &'a F,
}

impl<'a, F: PaginatorFactory> DomainManager<'a, F> {
    pub(crate) const fn new(rest: &'a RestClient, factory: &'a F) -> Self {
        Self { rest, factory }
    }

    /// Fetch an existing domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](constellix_core::Error::NotFound) if no
    /// domain has the given id, or the mapped API error on other failures.
    pub async fn get(&self, id: DomainId) -> Result<Domain> {
        self.rest.get_object(&format!("domains/{id}")).await
    }

    /// Create a new domain.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn create(&self, request: &CreateDomainRequest) -> Result<Domain> {
        self.rest.post_object("domains", request).await
    }

    /// Update an existing domain.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn update(&self, id: DomainId, request: &UpdateDomainRequest) -> Result<Domain> {
        self.rest.put_object(&format!("domains/{id}"), request).await
    }

    /// Delete a domain.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn delete(&self, id: DomainId) -> Result<()> {
        self.rest.delete(&format!("domains/{id}")).await
    }

    /// Fetch one page of domains, wrapped by the client's paginator factory.
    ///
    /// A `name` filter routes the request to the search endpoint; wildcard
    /// prefix/suffix matches such as `*example.com` are supported there. The
    /// returned domains are shallow [`DomainStub`] records with just the id
    /// and name, so anything more requires a [`get`](Self::get) per domain.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn list(&self, params: &DomainListParams) -> Result<F::Page<DomainStub>> {
        let page = params.page.unwrap_or(1);
        let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE);
        let path = if params.name.is_some() {
            "search/domains"
        } else {
            "domains"
        };

        let query = params.to_pairs(DEFAULT_PER_PAGE);
        let (items, meta) = self.rest.get_list::<DomainStub>(path, &query).await?;
        self.factory.paginate(items, meta.total, per_page, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ConstellixClient;
    use crate::models::DomainStatus;
    use constellix_core::config::ConstellixConfig;
    use constellix_core::Error;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ConstellixClient {
        let config = ConstellixConfig::new("key", "secret")
            .unwrap()
            .with_base_url(server.uri())
            .with_max_retries(0);
        ConstellixClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn list_wraps_page_with_meta_geometry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains"))
            .and(query_param("page", "1"))
            .and(query_param("perPage", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": (1..=20).map(|i| json!({"id": i, "name": format!("d{i}.com")})).collect::<Vec<_>>(),
                "meta": {"pagination": {"total": 45, "currentPage": 1, "perPage": 20, "totalPages": 3}}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client
            .domains()
            .list(&DomainListParams::default())
            .await
            .unwrap();

        assert_eq!(page.count(), 20);
        assert_eq!(page.total(), 45);
        assert_eq!(page.last_page(), 3);
        assert_eq!(page.first_item(), Some(1));
        assert_eq!(page.last_item(), Some(20));
        assert!(page.has_more_pages());
        assert_eq!(page[0].name, "d1.com");
    }

    #[tokio::test]
    async fn list_with_name_filter_uses_search_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/domains"))
            .and(query_param("name", "*example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 7, "name": "www.example.com"}],
                "meta": {"pagination": {"total": 1}}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client
            .domains()
            .list(&DomainListParams::named("*example.com"))
            .await
            .unwrap();

        assert_eq!(page.count(), 1);
        assert_eq!(page[0].id, DomainId::new(7));
        assert!(!page.has_more_pages());
    }

    #[tokio::test]
    async fn get_returns_full_domain() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/366246"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": 366246, "name": "example.com", "status": "ACTIVE"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let domain = client.domains().get(DomainId::new(366_246)).await.unwrap();
        assert_eq!(domain.name, "example.com");
        assert_eq!(domain.status, Some(DomainStatus::Active));
    }

    #[tokio::test]
    async fn get_missing_domain_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/999"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"errors": ["Domain not found"]})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.domains().get(DomainId::new(999)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn create_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/domains"))
            .and(body_json(json!({"name": "example.com"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {"id": 1, "name": "example.com", "status": "PENDING"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let domain = client
            .domains()
            .create(&CreateDomainRequest::new("example.com"))
            .await
            .unwrap();
        assert_eq!(domain.id, DomainId::new(1));
        assert_eq!(domain.status, Some(DomainStatus::Pending));
    }

    #[tokio::test]
    async fn update_puts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/domains/1"))
            .and(body_json(json!({"note": "production"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": 1, "name": "example.com", "note": "production"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = UpdateDomainRequest {
            note: Some("production".to_string()),
            ..UpdateDomainRequest::default()
        };
        let domain = client
            .domains()
            .update(DomainId::new(1), &request)
            .await
            .unwrap();
        assert_eq!(domain.note.as_deref(), Some("production"));
    }

    #[tokio::test]
    async fn delete_issues_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/domains/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.domains().delete(DomainId::new(1)).await.unwrap();
    }
}
