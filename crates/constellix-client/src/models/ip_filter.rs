//! IP filter models.
//!
//! IP filters restrict which resolvers receive particular record sets, by
//! continent, country, ASN, address block or named region.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IpFilterId;

/// Continent code used in filter rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Continent {
    /// Africa
    #[serde(rename = "AF")]
    Africa,
    /// Antarctica
    #[serde(rename = "AN")]
    Antarctica,
    /// Asia
    #[serde(rename = "AS")]
    Asia,
    /// Europe
    #[serde(rename = "EU")]
    Europe,
    /// North America
    #[serde(rename = "NA")]
    NorthAmerica,
    /// Oceania
    #[serde(rename = "OC")]
    Oceania,
    /// South America
    #[serde(rename = "SA")]
    SouthAmerica,
}

impl Continent {
    /// The two-letter code the API uses for this continent.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Africa => "AF",
            Self::Antarctica => "AN",
            Self::Asia => "AS",
            Self::Europe => "EU",
            Self::NorthAmerica => "NA",
            Self::Oceania => "OC",
            Self::SouthAmerica => "SA",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A named geographic region inside a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpFilterRegion {
    /// Continent the region belongs to
    pub continent: Continent,
    /// ISO country code, when the region is narrower than a continent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Region name within the country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Representation of an IP filter as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpFilter {
    /// Filter id
    pub id: IpFilterId,
    /// Filter name
    pub name: String,
    /// Maximum number of rules the account may put in this filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_limit: Option<u32>,
    /// Matched continents
    #[serde(default)]
    pub continents: Vec<Continent>,
    /// Matched ISO country codes
    #[serde(default)]
    pub countries: Vec<String>,
    /// Matched autonomous system numbers
    #[serde(default)]
    pub asn: Vec<u32>,
    /// Matched IPv4 addresses or CIDR blocks
    #[serde(default)]
    pub ipv4: Vec<String>,
    /// Matched IPv6 addresses or CIDR blocks
    #[serde(default)]
    pub ipv6: Vec<String>,
    /// Matched named regions
    #[serde(default)]
    pub regions: Vec<IpFilterRegion>,
}

/// Request payload for creating or updating an IP filter.
///
/// The API replaces the full rule set on update, so the same payload serves
/// both operations. The `add_*`/`remove_*` helpers keep each rule list free
/// of duplicates and preserve insertion order on removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpFilterRequest {
    /// Filter name
    pub name: String,
    /// Rule capacity to request
    #[serde(default = "default_rules_limit")]
    pub rules_limit: u32,
    /// Matched continents
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub continents: Vec<Continent>,
    /// Matched ISO country codes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,
    /// Matched autonomous system numbers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asn: Vec<u32>,
    /// Matched IPv4 addresses or CIDR blocks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ipv4: Vec<String>,
    /// Matched IPv6 addresses or CIDR blocks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ipv6: Vec<String>,
    /// Matched named regions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<IpFilterRegion>,
}

const fn default_rules_limit() -> u32 {
    100
}

fn add_value<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if !list.contains(&value) {
        list.push(value);
    }
}

fn remove_value<T: PartialEq>(list: &mut Vec<T>, value: &T) {
    list.retain(|existing| existing != value);
}

impl IpFilterRequest {
    /// Request for a filter with the given name and the default rule limit.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules_limit: default_rules_limit(),
            continents: Vec::new(),
            countries: Vec::new(),
            asn: Vec::new(),
            ipv4: Vec::new(),
            ipv6: Vec::new(),
            regions: Vec::new(),
        }
    }

    /// Add a continent rule, ignoring duplicates.
    #[must_use]
    pub fn add_continent(mut self, continent: Continent) -> Self {
        add_value(&mut self.continents, continent);
        self
    }

    /// Remove a continent rule.
    #[must_use]
    pub fn remove_continent(mut self, continent: Continent) -> Self {
        remove_value(&mut self.continents, &continent);
        self
    }

    /// Add a country rule, ignoring duplicates.
    #[must_use]
    pub fn add_country(mut self, country: impl Into<String>) -> Self {
        add_value(&mut self.countries, country.into());
        self
    }

    /// Remove a country rule.
    #[must_use]
    pub fn remove_country(mut self, country: &str) -> Self {
        self.countries.retain(|existing| existing != country);
        self
    }

    /// Add an ASN rule, ignoring duplicates.
    #[must_use]
    pub fn add_asn(mut self, asn: u32) -> Self {
        add_value(&mut self.asn, asn);
        self
    }

    /// Remove an ASN rule.
    #[must_use]
    pub fn remove_asn(mut self, asn: u32) -> Self {
        remove_value(&mut self.asn, &asn);
        self
    }

    /// Add an IPv4 rule, ignoring duplicates.
    #[must_use]
    pub fn add_ipv4(mut self, ip: impl Into<String>) -> Self {
        add_value(&mut self.ipv4, ip.into());
        self
    }

    /// Remove an IPv4 rule.
    #[must_use]
    pub fn remove_ipv4(mut self, ip: &str) -> Self {
        self.ipv4.retain(|existing| existing != ip);
        self
    }

    /// Add an IPv6 rule, ignoring duplicates.
    #[must_use]
    pub fn add_ipv6(mut self, ip: impl Into<String>) -> Self {
        add_value(&mut self.ipv6, ip.into());
        self
    }

    /// Remove an IPv6 rule.
    #[must_use]
    pub fn remove_ipv6(mut self, ip: &str) -> Self {
        self.ipv6.retain(|existing| existing != ip);
        self
    }

    /// Add a region rule, ignoring duplicates.
    #[must_use]
    pub fn add_region(mut self, region: IpFilterRegion) -> Self {
        add_value(&mut self.regions, region);
        self
    }

    /// Remove a region rule.
    #[must_use]
    pub fn remove_region(mut self, region: &IpFilterRegion) -> Self {
        remove_value(&mut self.regions, region);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn continent_codes_roundtrip() {
        for continent in [
            Continent::Africa,
            Continent::Antarctica,
            Continent::Asia,
            Continent::Europe,
            Continent::NorthAmerica,
            Continent::Oceania,
            Continent::SouthAmerica,
        ] {
            let json = serde_json::to_string(&continent).unwrap();
            assert_eq!(json, format!("\"{}\"", continent.code()));
            let back: Continent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, continent);
        }
    }

    #[test]
    fn ip_filter_deserialize() {
        let filter: IpFilter = serde_json::from_value(json!({
            "id": 47345,
            "name": "eu-only",
            "rulesLimit": 100,
            "continents": ["EU"],
            "countries": ["DE", "FR"],
            "asn": [64496],
            "ipv4": ["198.51.100.0/24"],
            "regions": [{"continent": "EU", "country": "DE", "region": "BE"}]
        }))
        .unwrap();

        assert_eq!(filter.id, IpFilterId::new(47_345));
        assert_eq!(filter.continents, vec![Continent::Europe]);
        assert_eq!(filter.countries, vec!["DE", "FR"]);
        assert_eq!(filter.ipv6, Vec::<String>::new());
        assert_eq!(filter.regions[0].country.as_deref(), Some("DE"));
    }

    #[test]
    fn add_skips_duplicates() {
        let request = IpFilterRequest::new("eu-only")
            .add_continent(Continent::Europe)
            .add_continent(Continent::Europe)
            .add_country("DE")
            .add_country("DE");

        assert_eq!(request.continents, vec![Continent::Europe]);
        assert_eq!(request.countries, vec!["DE"]);
    }

    #[test]
    fn remove_preserves_order_of_remainder() {
        let request = IpFilterRequest::new("filters")
            .add_asn(1)
            .add_asn(2)
            .add_asn(3)
            .remove_asn(2);

        assert_eq!(request.asn, vec![1, 3]);
    }

    #[test]
    fn remove_absent_value_is_noop() {
        let request = IpFilterRequest::new("filters")
            .add_country("DE")
            .remove_country("FR");
        assert_eq!(request.countries, vec!["DE"]);
    }

    #[test]
    fn request_serializes_with_default_rules_limit() {
        let request = IpFilterRequest::new("eu-only").add_continent(Continent::Europe);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({"name": "eu-only", "rulesLimit": 100, "continents": ["EU"]})
        );
    }
}
