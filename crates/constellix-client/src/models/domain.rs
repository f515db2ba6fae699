//! Domain models shared by the domain manager and its callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use constellix_core::query::QueryParams;

use super::ids::{DomainId, TemplateId};

/// Lifecycle status of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DomainStatus {
    /// Domain is live and serving records
    Active,
    /// Domain is created but not yet propagated
    Pending,
    /// Domain has been administratively suspended
    Suspended,
    /// Domain failed provisioning
    Failed,
    /// A status this client version does not know about
    #[serde(other)]
    Unknown,
}

/// SOA record settings of a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoaRecord {
    /// Primary nameserver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_nameserver: Option<String>,
    /// Responsible-party email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Record TTL in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Refresh interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<u32>,
    /// Retry interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,
    /// Expiry in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire: Option<u32>,
    /// Negative caching TTL in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_cache: Option<u32>,
}

/// Representation of a domain as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Domain id
    pub id: DomainId,
    /// Domain name
    pub name: String,
    /// Lifecycle status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainStatus>,
    /// SOA settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soa: Option<SoaRecord>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Monotonically increasing version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// GeoIP lookups enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoip: Option<bool>,
    /// Global traffic director enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd: Option<bool>,
    /// Delegated nameservers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    /// Template applied to this domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateId>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Shallow domain representation returned by list and search endpoints.
///
/// Only the id and name are populated; fetching anything more requires a
/// `get` for the full object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainStub {
    /// Domain id
    pub id: DomainId,
    /// Domain name
    pub name: String,
    /// Lifecycle status, when the endpoint reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainStatus>,
}

/// Request payload for creating a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    /// Domain name to create
    pub name: String,
    /// Initial SOA settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soa: Option<SoaRecord>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Template to apply on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateId>,
}

impl CreateDomainRequest {
    /// Request for the given domain name with no extra settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Request payload for updating a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDomainRequest {
    /// SOA settings override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soa: Option<SoaRecord>,
    /// Note override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// GeoIP toggle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoip: Option<bool>,
    /// Global traffic director toggle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd: Option<bool>,
    /// Template to apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateId>,
}

/// Parameters supported by the domain list endpoint.
#[derive(Debug, Default, Clone)]
pub struct DomainListParams {
    /// Page to fetch (1-based, defaults to 1)
    pub page: Option<u32>,
    /// Items per page (defaults to the manager default)
    pub per_page: Option<u32>,
    /// Name filter; wildcard prefix/suffix matches (`*example.com`) are
    /// passed through to the search endpoint
    pub name: Option<String>,
}

impl DomainListParams {
    /// Parameters filtering by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self, default_per_page: u32) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::for_page(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(default_per_page),
        );
        params.push_opt("name", self.name.as_deref());
        params.into_pairs()
    }
}
