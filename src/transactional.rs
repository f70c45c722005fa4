//! Transactional email sending.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::LoopsClient;
use crate::Result;

/// A transactional email to send to a specific contact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionalRequest {
    pub email: String,
    /// Identifier of the transactional template to send.
    pub transactional_id: String,
    /// Data variables substituted into the template. May be empty.
    pub data_variables: Map<String, Value>,
}

/// Response of a transactional send.
#[derive(Debug, Clone, Deserialize)]
pub struct SendTransactionalResponse {
    pub success: bool,
}

impl LoopsClient {
    /// Send a transactional email immediately to a specific contact.
    pub async fn send_transactional(
        &self,
        request: &SendTransactionalRequest,
    ) -> Result<SendTransactionalResponse> {
        self.request(Method::POST, "/transactional", Some(request))
            .await
    }
}
