//! Error types for the Loops client.

use thiserror::Error;

/// Unified error type for all client operations.
///
/// Each call either fully succeeds with a typed response or fails with
/// exactly one of these variants; nothing is retried internally, and there
/// is no partial-success state. Caller-side cancellation (dropping the
/// operation future) never produces a value of this type — the caller's own
/// timeout or cancel error is what surfaces.
#[derive(Debug, Error)]
pub enum Error {
    /// A contact field holds a value type the service does not accept.
    /// Raised before any network call is made.
    #[error("invalid field type for {field}: {actual}")]
    InvalidFieldType {
        /// Name of the offending field.
        field: String,
        /// JSON type of the rejected value.
        actual: &'static str,
    },

    /// The request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request could not be built or executed: malformed URL, DNS,
    /// connection, or TLS failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service rejected the request with an HTTP error status. Carries
    /// the status line and the raw response body.
    #[error("{status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not match the expected response shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
