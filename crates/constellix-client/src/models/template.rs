//! Template models.
//!
//! Templates are reusable record sets that can be applied to domains.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TemplateId;

/// Representation of a template as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Template id
    pub id: TemplateId,
    /// Template name
    pub name: String,
    /// Monotonically increasing version, bumped on every record change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// GeoIP lookups enabled for domains using this template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoip: Option<bool>,
    /// Global traffic director enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd: Option<bool>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Shallow template representation returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStub {
    /// Template id
    pub id: TemplateId,
    /// Template name
    pub name: String,
}

/// Request payload for creating a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    /// Template name
    pub name: String,
    /// Enable GeoIP lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoip: Option<bool>,
    /// Enable the global traffic director
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd: Option<bool>,
}

impl CreateTemplateRequest {
    /// Request for a template with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Request payload for updating a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateRequest {
    /// Name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// GeoIP toggle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoip: Option<bool>,
    /// Global traffic director toggle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd: Option<bool>,
}
