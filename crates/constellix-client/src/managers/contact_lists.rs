//! Managers for contact lists and their nested contacts.
//!
//! Email, Slack and Teams contacts live under their parent list
//! (`contactlists/{id}/emails`, `/slack`, `/teams`), so their managers are
//! scoped to a [`ContactListId`].

use constellix_core::client::RestClient;
use constellix_core::pagination::PaginatorFactory;

use crate::models::{
    ContactList, ContactListId, CreateContactListRequest, CreateEmailContactRequest, EmailContact,
    EmailContactId, PageParams, SlackWebhook, TeamsWebhook, WebhookId, WebhookRequest,
};
use crate::Result;

use super::DEFAULT_PER_PAGE;

/// Manages contact list API resources.
#[derive(Debug, Clone, Copy)]
pub struct ContactListManager<'a, F> {
    rest: &'a RestClient,
    factory: &'a F,
}

impl<'a, F: PaginatorFactory> ContactListManager<'a, F> {
    pub(crate) const fn new(rest: &'a RestClient, factory: &'a F) -> Self {
        Self { rest, factory }
    }

    /// Fetch an existing contact list.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn get(&self, id: ContactListId) -> Result<ContactList> {
        self.rest.get_object(&format!("contactlists/{id}")).await
    }

    /// Create a new contact list.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn create(&self, request: &CreateContactListRequest) -> Result<ContactList> {
        self.rest.post_object("contactlists", request).await
    }

    /// Rename an existing contact list.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn update(
        &self,
        id: ContactListId,
        request: &CreateContactListRequest,
    ) -> Result<ContactList> {
        self.rest
            .put_object(&format!("contactlists/{id}"), request)
            .await
    }

    /// Delete a contact list and every contact in it.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn delete(&self, id: ContactListId) -> Result<()> {
        self.rest.delete(&format!("contactlists/{id}")).await
    }

    /// Fetch one page of contact lists, wrapped by the client's paginator
    /// factory.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn list(&self, params: &PageParams) -> Result<F::Page<ContactList>> {
        let query = params.to_pairs(DEFAULT_PER_PAGE);
        let (items, meta) = self
            .rest
            .get_list::<ContactList>("contactlists", &query)
            .await?;
        self.factory.paginate(
            items,
            meta.total,
            params.per_page_or(DEFAULT_PER_PAGE),
            params.page(),
        )
    }

    /// Manager for the email contacts of the given list.
    #[must_use]
    pub const fn emails(&self, list: ContactListId) -> EmailContactManager<'a, F> {
        EmailContactManager {
            rest: self.rest,
            factory: self.factory,
            list,
        }
    }

    /// Manager for the Slack webhook contacts of the given list.
    #[must_use]
    pub const fn slack_webhooks(&self, list: ContactListId) -> SlackWebhookManager<'a, F> {
        SlackWebhookManager {
            rest: self.rest,
            factory: self.factory,
            list,
        }
    }

    /// Manager for the Teams webhook contacts of the given list.
    #[must_use]
    pub const fn teams_webhooks(&self, list: ContactListId) -> TeamsWebhookManager<'a, F> {
        TeamsWebhookManager {
            rest: self.rest,
            factory: self.factory,
            list,
        }
    }
}

/// Manages the email contacts of one contact list.
#[derive(Debug, Clone, Copy)]
pub struct EmailContactManager<'a, F> {
    rest: &'a RestClient,
    factory: &'a F,
    list: ContactListId,
}

impl<F: PaginatorFactory> EmailContactManager<'_, F> {
    fn base(&self) -> String {
        format!("contactlists/{}/emails", self.list)
    }

    /// Fetch a specific email contact.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn get(&self, id: EmailContactId) -> Result<EmailContact> {
        self.rest.get_object(&format!("{}/{id}", self.base())).await
    }

    /// Add an email address to the list.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn create(&self, request: &CreateEmailContactRequest) -> Result<EmailContact> {
        self.rest.post_object(&self.base(), request).await
    }

    /// Remove an email contact from the list.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn delete(&self, id: EmailContactId) -> Result<()> {
        self.rest.delete(&format!("{}/{id}", self.base())).await
    }

    /// Fetch one page of email contacts.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn list(&self, params: &PageParams) -> Result<F::Page<EmailContact>> {
        let query = params.to_pairs(DEFAULT_PER_PAGE);
        let (items, meta) = self.rest.get_list::<EmailContact>(&self.base(), &query).await?;
        self.factory.paginate(
            items,
            meta.total,
            params.per_page_or(DEFAULT_PER_PAGE),
            params.page(),
        )
    }
}

macro_rules! webhook_manager {
    ($(#[$meta:meta])* $name:ident, $model:ident, $segment:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a, F> {
            rest: &'a RestClient,
            factory: &'a F,
            list: ContactListId,
        }

        impl<F: PaginatorFactory> $name<'_, F> {
            fn base(&self) -> String {
                format!(concat!("contactlists/{}/", $segment), self.list)
            }

            /// Fetch a specific webhook contact.
            ///
            /// # Errors
            ///
            /// Returns the mapped API error on failure.
            pub async fn get(&self, id: WebhookId) -> Result<$model> {
                self.rest.get_object(&format!("{}/{id}", self.base())).await
            }

            /// Add a webhook contact to the list.
            ///
            /// # Errors
            ///
            /// Returns the mapped API error on failure.
            pub async fn create(&self, request: &WebhookRequest) -> Result<$model> {
                self.rest.post_object(&self.base(), request).await
            }

            /// Update a webhook contact.
            ///
            /// # Errors
            ///
            /// Returns the mapped API error on failure.
            pub async fn update(&self, id: WebhookId, request: &WebhookRequest) -> Result<$model> {
                self.rest
                    .put_object(&format!("{}/{id}", self.base()), request)
                    .await
            }

            /// Remove a webhook contact from the list.
            ///
            /// # Errors
            ///
            /// Returns the mapped API error on failure.
            pub async fn delete(&self, id: WebhookId) -> Result<()> {
                self.rest.delete(&format!("{}/{id}", self.base())).await
            }

            /// Fetch one page of webhook contacts.
            ///
            /// # Errors
            ///
            /// Returns the mapped API error on failure.
            pub async fn list(&self, params: &PageParams) -> Result<F::Page<$model>> {
                let query = params.to_pairs(DEFAULT_PER_PAGE);
                let (items, meta) = self.rest.get_list::<$model>(&self.base(), &query).await?;
                self.factory.paginate(
                    items,
                    meta.total,
                    params.per_page_or(DEFAULT_PER_PAGE),
                    params.page(),
                )
            }
        }
    };
}

webhook_manager!(
    /// Manages the Slack webhook contacts of one contact list.
    SlackWebhookManager,
    SlackWebhook,
    "slack"
);

webhook_manager!(
    /// Manages the Teams webhook contacts of one contact list.
    TeamsWebhookManager,
    TeamsWebhook,
    "teams"
);
