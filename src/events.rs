//! Event sending, used to trigger event-based loops.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::LoopsClient;
use crate::Result;

/// An event to send on behalf of a contact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEventRequest {
    pub email: String,
    pub event_name: String,
}

/// Response of an event send.
#[derive(Debug, Clone, Deserialize)]
pub struct SendEventResponse {
    pub success: bool,
}

impl LoopsClient {
    /// Send a named event on behalf of a contact.
    ///
    /// Warning: when no contact exists for the email yet, the service
    /// creates one as a side effect.
    pub async fn send_event(&self, request: &SendEventRequest) -> Result<SendEventResponse> {
        self.request(Method::POST, "/events/send", Some(request))
            .await
    }
}
