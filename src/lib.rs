//! Typed Rust client for the Pushover notification HTTP API.
//!
//! The crate is split the same way the wire protocol is: a domain layer that
//! models a notification [`Message`] and enforces the service's documented
//! field constraints, a transport layer for the form-encoded request and JSON
//! response formats, and a small client layer orchestrating the single
//! submission call. Validation runs locally and in a fixed precedence order,
//! so a rejected message never touches the network.
//!
//! ```rust,no_run
//! use pushover::{Message, Priority, PushoverClient, Sound};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pushover::PushoverError> {
//!     let client = PushoverClient::new();
//!     let mut message = Message::new(
//!         "azGDORePK8gMaC0QOYAMyEEuzJnyUi",
//!         "uQiRzpo4DXghDmr9QzzfQu27cmVRsG",
//!         "The backup job finished",
//!     );
//!     message.title = "backups".to_owned();
//!     message.priority = Priority::High;
//!     message.sound = Sound::Cosmic;
//!
//!     let response = client.send(&message).await?;
//!     assert!(response.is_success());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{PushoverClient, PushoverClientBuilder, PushoverError};
pub use domain::{Message, Priority, Response, Sound, UnixTimestamp, ValidationError};
