//! Contact list models.
//!
//! Contact lists group notification targets: email addresses and Slack or
//! Microsoft Teams webhooks. The webhook and email contacts are nested
//! resources scoped to their parent list.

use serde::{Deserialize, Serialize};

use super::ids::{ContactListId, EmailContactId, WebhookId};

/// Representation of a contact list as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactList {
    /// Contact list id
    pub id: ContactListId,
    /// Contact list name
    pub name: String,
    /// Number of email contacts in the list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_count: Option<u32>,
}

/// Request payload for creating or renaming a contact list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactListRequest {
    /// Contact list name
    pub name: String,
}

impl CreateContactListRequest {
    /// Request for a contact list with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An email contact inside a contact list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContact {
    /// Contact id
    pub id: EmailContactId,
    /// Email address
    pub address: String,
    /// Whether the address has confirmed the verification mail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Request payload for adding an email contact to a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmailContactRequest {
    /// Email address to add
    pub address: String,
}

impl CreateEmailContactRequest {
    /// Request for the given address.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// A Slack webhook contact inside a contact list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackWebhook {
    /// Webhook contact id
    pub id: WebhookId,
    /// Channel the webhook posts to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Webhook URL
    pub webhook_url: String,
}

/// A Microsoft Teams webhook contact inside a contact list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsWebhook {
    /// Webhook contact id
    pub id: WebhookId,
    /// Channel the webhook posts to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Webhook URL
    pub webhook_url: String,
}

/// Request payload for creating or updating a webhook contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Channel the webhook posts to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Webhook URL
    pub webhook_url: String,
}

impl WebhookRequest {
    /// Request for the given webhook URL.
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            channel: None,
            webhook_url: webhook_url.into(),
        }
    }

    /// Set the channel name.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_list_deserialize() {
        let list: ContactList = serde_json::from_value(json!({
            "id": 2668,
            "name": "on-call",
            "emailCount": 4
        }))
        .unwrap();

        assert_eq!(list.id, ContactListId::new(2668));
        assert_eq!(list.email_count, Some(4));
    }

    #[test]
    fn teams_webhook_roundtrip() {
        let webhook = TeamsWebhook {
            id: WebhookId::new(17),
            channel: Some("alerts".to_string()),
            webhook_url: "https://example.webhook.office.com/x".to_string(),
        };

        let json = serde_json::to_value(&webhook).unwrap();
        assert_eq!(json["webhookUrl"], "https://example.webhook.office.com/x");

        let back: TeamsWebhook = serde_json::from_value(json).unwrap();
        assert_eq!(back, webhook);
    }

    #[test]
    fn webhook_request_builder() {
        let request = WebhookRequest::new("https://hooks.slack.com/services/x")
            .with_channel("#noc");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({"channel": "#noc", "webhookUrl": "https://hooks.slack.com/services/x"})
        );
    }
}
