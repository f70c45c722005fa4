//! # loops-client
//!
//! Typed async client for the [Loops](https://loops.so) marketing-automation
//! API: create, update, and delete contacts, and trigger event-based or
//! transactional emails.
//!
//! Every operation is a single stateless HTTP round trip. The client carries
//! no queue, no retry loop, and no background tasks; cancellation is ordinary
//! future-drop semantics (wrap a call in `tokio::time::timeout` to bound it).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use loops_client::{ContactFields, LoopsClient, SendEventRequest};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> loops_client::Result<()> {
//!     let client = LoopsClient::new("your-api-key");
//!
//!     let mut fields = ContactFields::new();
//!     fields.insert("firstName".into(), json!("Ada"));
//!     fields.insert("userGroup".into(), json!("beta"));
//!     let created = client.create_contact("ada@example.com", &fields).await?;
//!     println!("created contact {}", created.id);
//!
//!     client
//!         .send_event(&SendEventRequest {
//!             email: "ada@example.com".into(),
//!             event_name: "signed_up".into(),
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Contact field values are restricted to strings, booleans, integers, and
//! RFC 3339 timestamps; anything else fails [`fields::validate_fields`]
//! before a request is sent. The reserved `email` key is always stripped
//! from the field map — email is its own argument everywhere.

pub mod client;
pub mod contacts;
pub mod error;
pub mod events;
pub mod fields;
pub mod transactional;

pub use client::{ApiKeyResponse, LoopsClient, DEFAULT_ENDPOINT};
pub use contacts::{CreateContactResponse, DeleteContactResponse, UpsertContactResponse};
pub use error::Error;
pub use events::{SendEventRequest, SendEventResponse};
pub use fields::{validate_fields, ContactFields, FieldValue};
pub use transactional::{SendTransactionalRequest, SendTransactionalResponse};

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;
