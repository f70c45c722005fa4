//! Contact create, upsert, and delete operations.

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::client::LoopsClient;
use crate::fields::{validate_fields, ContactFields};
use crate::Result;

/// Response of a contact creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactResponse {
    pub success: bool,
    /// Identifier assigned to the contact.
    #[serde(default)]
    pub id: String,
}

/// Response of a contact upsert.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertContactResponse {
    pub success: bool,
    /// Identifier of the created or updated contact.
    #[serde(default)]
    pub id: String,
}

/// Response of a contact deletion.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteContactResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl LoopsClient {
    /// Create a new contact.
    ///
    /// `fields` may carry arbitrary custom properties with string, boolean,
    /// integer, or timestamp values; any other value type fails the call
    /// before a request is sent. The reserved `email` key is ignored in
    /// favor of the `email` argument.
    pub async fn create_contact(
        &self,
        email: &str,
        fields: &ContactFields,
    ) -> Result<CreateContactResponse> {
        let mut body = validate_fields(fields)?;
        body.insert("email".to_string(), Value::String(email.to_string()));
        self.request(Method::POST, "/contacts/create", Some(&body))
            .await
    }

    /// Update a contact's fields, creating the contact when it does not
    /// exist yet. Field handling is identical to [`create_contact`].
    ///
    /// [`create_contact`]: LoopsClient::create_contact
    pub async fn upsert_contact(
        &self,
        email: &str,
        fields: &ContactFields,
    ) -> Result<UpsertContactResponse> {
        let mut body = validate_fields(fields)?;
        body.insert("email".to_string(), Value::String(email.to_string()));
        self.request(Method::PUT, "/contacts/update", Some(&body))
            .await
    }

    /// Delete the contact with the given email.
    pub async fn delete_contact(&self, email: &str) -> Result<DeleteContactResponse> {
        let body = serde_json::json!({ "email": email });
        self.request(Method::POST, "/contacts/delete", Some(&body))
            .await
    }
}
